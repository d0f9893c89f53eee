use cufft::{CufftLibrary, LibraryError, LoaderConfig, CUFFT_LIBRARY_PATH_ENV};

#[test]
fn test_default_candidates() {
    let config = LoaderConfig::default();
    assert!(!config.candidates().is_empty());

    #[cfg(target_os = "linux")]
    assert_eq!(config.candidates()[0], "libcufft.so");
    #[cfg(target_os = "windows")]
    assert!(config
        .candidates()
        .iter()
        .all(|c| c.to_string_lossy().starts_with("cufft64_")));
}

#[test]
fn test_env_override_comes_first() {
    std::env::set_var(CUFFT_LIBRARY_PATH_ENV, "/opt/cuda/lib64/libcufft.so.11");
    let config = LoaderConfig::from_env();
    std::env::remove_var(CUFFT_LIBRARY_PATH_ENV);

    assert_eq!(config.candidates()[0], "/opt/cuda/lib64/libcufft.so.11");
    assert_eq!(
        config.candidates().len(),
        LoaderConfig::default().candidates().len() + 1
    );
}

#[test]
fn test_missing_explicit_library() {
    match CufftLibrary::load_from("/nonexistent/libcufft-missing.so") {
        Err(LibraryError::Load { name, .. }) => {
            assert_eq!(name, "/nonexistent/libcufft-missing.so")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_no_candidate_loads() {
    let config = LoaderConfig::explicit("/nonexistent/a.so").with_candidate("/nonexistent/b.so");
    match CufftLibrary::load(&config) {
        Err(LibraryError::NotFound { tried }) => {
            assert_eq!(tried, "/nonexistent/b.so, /nonexistent/a.so")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
