// Build script for the cufft crate.
// cuFFT itself is opened at runtime; with the "cuda" feature the CUDA runtime
// is linked as well so the on-device tests can allocate memory and streams.

fn main() {
    #[cfg(feature = "cuda")]
    {
        use std::env;
        use std::path::PathBuf;

        let mut candidates: Vec<PathBuf> = Vec::new();
        for var in ["CUDA_PATH", "CUDA_HOME", "CUDA_ROOT"] {
            if let Ok(root) = env::var(var) {
                candidates.push(PathBuf::from(&root).join("lib64"));
                candidates.push(PathBuf::from(&root).join("lib").join("x64"));
            }
        }
        candidates.push(PathBuf::from("/usr/local/cuda/lib64"));

        match candidates.into_iter().find(|path| path.exists()) {
            Some(lib_path) => {
                println!("cargo:rustc-link-search=native={}", lib_path.display());
            }
            None => {
                println!("cargo:warning=CUDA library path not found, relying on the default linker search path");
            }
        }
        println!("cargo:rustc-link-lib=dylib=cudart");
        println!("cargo:rerun-if-env-changed=CUDA_PATH");
        println!("cargo:rerun-if-env-changed=CUDA_HOME");
        println!("cargo:rerun-if-env-changed=CUDA_ROOT");
    }
}
