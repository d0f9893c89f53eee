use cufft::ffi;
use cufft::{CompatibilityMode, CufftStatus, Direction, FftType};

#[test]
fn test_fft_type_tags() {
    assert_eq!(FftType::R2C.as_raw(), 0x2a);
    assert_eq!(FftType::C2R.as_raw(), 0x2c);
    assert_eq!(FftType::C2C.as_raw(), 0x29);
    assert_eq!(FftType::D2Z.as_raw(), 0x6a);
    assert_eq!(FftType::Z2D.as_raw(), 0x6c);
    assert_eq!(FftType::Z2Z.as_raw(), 0x69);

    assert_eq!(ffi::CUFFT_R2C, 0x2a);
    assert_eq!(ffi::CUFFT_Z2Z, 0x69);
    assert_eq!(FftType::from_raw(0x2b), None);
}

#[test]
fn test_direction_tags() {
    assert_eq!(Direction::Forward.as_raw(), -1);
    assert_eq!(Direction::Inverse.as_raw(), 1);
    assert_eq!(Direction::from_raw(0), None);
}

#[test]
fn test_compatibility_mode_tags() {
    assert_eq!(CompatibilityMode::Native.as_raw(), 0x00);
    assert_eq!(CompatibilityMode::FftwPadding.as_raw(), 0x01);
    assert_eq!(CompatibilityMode::FftwAsymmetric.as_raw(), 0x02);
    assert_eq!(CompatibilityMode::FftwAll.as_raw(), 0x03);
    assert_eq!(CompatibilityMode::default(), CompatibilityMode::Native);
    assert_eq!(CompatibilityMode::from_raw(4), None);
}

#[test]
fn test_status_codes() {
    assert_eq!(CufftStatus::Success.code(), 0);
    assert_eq!(CufftStatus::InvalidPlan.code(), 1);
    assert_eq!(CufftStatus::AllocFailed.code(), 2);
    assert_eq!(CufftStatus::InvalidType.code(), 3);
    assert_eq!(CufftStatus::InvalidValue.code(), 4);
    assert_eq!(CufftStatus::InternalError.code(), 5);
    assert_eq!(CufftStatus::ExecFailed.code(), 6);
    assert_eq!(CufftStatus::SetupFailed.code(), 7);
    assert_eq!(CufftStatus::InvalidSize.code(), 8);
    assert_eq!(CufftStatus::UnalignedData.code(), 9);
    assert_eq!(CufftStatus::IncompleteParameterList.code(), 10);
    assert_eq!(CufftStatus::InvalidDevice.code(), 11);
    assert_eq!(CufftStatus::ParseError.code(), 12);
    assert_eq!(CufftStatus::NoWorkspace.code(), 13);
}

#[test]
fn test_element_layout() {
    assert_eq!(std::mem::size_of::<cufft::Complex32>(), 8);
    assert_eq!(std::mem::size_of::<cufft::Complex64>(), 16);
    assert_eq!(std::mem::size_of::<ffi::cufftHandle>(), 4);
}
