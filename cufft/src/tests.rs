use std::collections::HashSet;
use std::ffi::c_void;

use ark_std::{rand::RngCore, test_rng};

use crate::mock::MockCufft;
use crate::{
    check_status, CompatibilityMode, Complex32, Complex64, Cufft, CufftError, CufftStatus,
    Direction, FftType, Layout, Plan, Stream,
};

fn fake_stream(addr: usize) -> Stream {
    unsafe { Stream::from_raw(addr as *mut c_void) }
}

#[test]
fn test_check_status_table() {
    let names = [
        "CUFFT_SUCCESS",
        "CUFFT_INVALID_PLAN",
        "CUFFT_ALLOC_FAILED",
        "CUFFT_INVALID_TYPE",
        "CUFFT_INVALID_VALUE",
        "CUFFT_INTERNAL_ERROR",
        "CUFFT_EXEC_FAILED",
        "CUFFT_SETUP_FAILED",
        "CUFFT_INVALID_SIZE",
        "CUFFT_UNALIGNED_DATA",
        "CUFFT_INCOMPLETE_PARAMETER_LIST",
        "CUFFT_INVALID_DEVICE",
        "CUFFT_PARSE_ERROR",
        "CUFFT_NO_WORKSPACE",
    ];

    assert!(check_status(0).is_ok());
    for code in 1..=13 {
        let err = check_status(code).unwrap_err();
        let status = err.status().unwrap();
        assert_eq!(status.code(), code);
        assert_eq!(status, CufftStatus::ALL[code as usize]);
        assert_eq!(status.name(), names[code as usize]);
        assert_eq!(err.to_string(), names[code as usize]);
        assert_eq!(err.code(), Some(code));
    }

    for (code, status) in CufftStatus::ALL.iter().enumerate() {
        assert_eq!(CufftStatus::from_code(code as i32), Some(*status));
        assert_eq!(status.is_success(), code == 0);
    }
}

#[test]
fn test_check_status_unrecognized() {
    for code in [-1, 14, 0x7fff] {
        match check_status(code) {
            Err(CufftError::UnrecognizedStatus(c)) => assert_eq!(c, code),
            other => panic!("unexpected result for {}: {:?}", code, other),
        }
    }
}

#[test]
fn test_plan_handles_are_unique() {
    let mut rng = test_rng();
    let cufft = Cufft::new(MockCufft::new());
    let mut live: Vec<Plan> = Vec::new();
    let mut seen = HashSet::new();

    for round in 0..200 {
        let n = (rng.next_u32() % 64 + 1) as i32;
        let plan = match round % 4 {
            0 => cufft.plan_1d(n, FftType::R2C, 1),
            1 => cufft.plan_2d(n, n, FftType::C2C),
            2 => cufft.plan_3d(n, 2, 2, FftType::Z2Z),
            _ => cufft.plan_many(&[n, 4], Layout::basic(), Layout::basic(), FftType::D2Z, 3),
        }
        .unwrap();

        assert!(!live.contains(&plan));
        assert!(seen.insert(plan.as_raw()), "handle {} reused", plan.as_raw());
        live.push(plan);

        if rng.next_u32() % 3 == 0 {
            let idx = rng.next_u32() as usize % live.len();
            cufft.destroy(live.swap_remove(idx)).unwrap();
        }
    }

    assert_eq!(cufft.api().live_plans(), live.len());
}

#[test]
fn test_failed_construction_returns_no_plan() {
    let cufft = Cufft::new(MockCufft::new());

    cufft.api().fail_next(CufftStatus::AllocFailed);
    let err = cufft.plan_1d(8, FftType::R2C, 1).unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::AllocFailed));

    let err = cufft.plan_2d(0, 8, FftType::C2C).unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InvalidSize));

    let err = cufft.plan_1d(8, FftType::C2R, 0).unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InvalidSize));

    assert_eq!(cufft.api().live_plans(), 0);
}

#[test]
fn test_destroy_twice_is_invalid_plan() {
    let cufft = Cufft::new(MockCufft::new());
    let plan = cufft.plan_3d(4, 4, 4, FftType::C2C).unwrap();

    cufft.destroy(plan).unwrap();
    let err = cufft.destroy(plan).unwrap_err();
    assert!(err.is_invalid_plan());
}

#[test]
fn test_destroyed_plan_rejects_every_operation() {
    let cufft = Cufft::new(MockCufft::new());
    let plan = cufft.plan_1d(16, FftType::C2C, 1).unwrap();
    cufft.destroy(plan).unwrap();

    let mut data = vec![Complex32::default(); 16];
    let ptr = data.as_mut_ptr();

    assert!(cufft.set_stream(plan, Stream::null()).unwrap_err().is_invalid_plan());
    assert!(cufft
        .set_compatibility_mode(plan, CompatibilityMode::FftwAll)
        .unwrap_err()
        .is_invalid_plan());
    let err = unsafe { cufft.exec_c2c(plan, ptr, ptr, Direction::Forward) }.unwrap_err();
    assert!(err.is_invalid_plan());
    assert!(cufft.api().exec_log().is_empty());
}

#[test]
fn test_set_stream_last_bind_wins() {
    let cufft = Cufft::new(MockCufft::new());
    let plan = cufft.plan_1d(32, FftType::C2C, 4).unwrap();
    let mut data = vec![Complex32::default(); 32 * 4];
    let ptr = data.as_mut_ptr();

    cufft.set_stream(plan, fake_stream(0x10)).unwrap();
    cufft.set_stream(plan, fake_stream(0x20)).unwrap();
    unsafe { cufft.exec_c2c(plan, ptr, ptr, Direction::Inverse) }.unwrap();

    cufft.set_stream(plan, Stream::null()).unwrap();
    unsafe { cufft.exec_c2c(plan, ptr, ptr, Direction::Forward) }.unwrap();

    let log = cufft.api().exec_log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].stream, 0x20);
    assert_eq!(log[0].direction, Some(Direction::Inverse));
    assert_eq!(log[1].stream, 0);
    assert_eq!(log[1].direction, Some(Direction::Forward));
}

#[test]
fn test_r2c_lifecycle() {
    let cufft = Cufft::new(MockCufft::new());
    let mut input = vec![0f32; 8];
    let mut output = vec![Complex32::default(); 5];

    let plan = cufft.plan_1d(8, FftType::R2C, 1).unwrap();
    unsafe { cufft.exec_r2c(plan, input.as_mut_ptr(), output.as_mut_ptr()) }.unwrap();
    cufft.destroy(plan).unwrap();

    let err = unsafe { cufft.exec_r2c(plan, input.as_mut_ptr(), output.as_mut_ptr()) }
        .unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InvalidPlan));
    assert_eq!(cufft.api().exec_log().len(), 1);
}

#[test]
fn test_double_precision_execs() {
    let cufft = Cufft::new(MockCufft::new());
    let mut real = vec![0f64; 16];
    let mut spectrum = vec![Complex64::default(); 9];
    let mut full = vec![Complex64::default(); 16];

    let d2z = cufft.plan_1d(16, FftType::D2Z, 1).unwrap();
    let z2d = cufft.plan_1d(16, FftType::Z2D, 1).unwrap();
    let z2z = cufft.plan_1d(16, FftType::Z2Z, 1).unwrap();

    unsafe {
        cufft
            .exec_d2z(d2z, real.as_mut_ptr(), spectrum.as_mut_ptr())
            .unwrap();
        cufft
            .exec_z2d(z2d, spectrum.as_mut_ptr(), real.as_mut_ptr())
            .unwrap();
        cufft
            .exec_z2z(z2z, full.as_mut_ptr(), full.as_mut_ptr(), Direction::Forward)
            .unwrap();
    }

    let kinds: Vec<FftType> = cufft.api().exec_log().iter().map(|r| r.fft_type).collect();
    assert_eq!(kinds, vec![FftType::D2Z, FftType::Z2D, FftType::Z2Z]);
    assert_eq!(cufft.api().plan(z2z).unwrap().executions, 1);
}

#[test]
fn test_exec_errors_propagate() {
    let cufft = Cufft::new(MockCufft::new());
    let plan = cufft.plan_1d(8, FftType::C2R, 1).unwrap();
    let mut spectrum = vec![Complex32::default(); 5];
    let mut real = vec![0f32; 8];

    // an R2C exec on a C2R plan
    let err = unsafe { cufft.exec_r2c(plan, real.as_mut_ptr(), spectrum.as_mut_ptr()) }
        .unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InvalidType));

    let err = unsafe { cufft.exec_c2r(plan, std::ptr::null_mut(), real.as_mut_ptr()) }
        .unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InvalidValue));

    cufft.api().fail_next(CufftStatus::UnalignedData);
    let err = unsafe { cufft.exec_c2r(plan, spectrum.as_mut_ptr(), real.as_mut_ptr()) }
        .unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::UnalignedData));

    cufft.api().fail_next_raw(42);
    let err = unsafe { cufft.exec_c2r(plan, spectrum.as_mut_ptr(), real.as_mut_ptr()) }
        .unwrap_err();
    assert!(err.status().is_none());
    assert_eq!(err.code(), Some(42));

    unsafe { cufft.exec_c2r(plan, spectrum.as_mut_ptr(), real.as_mut_ptr()) }.unwrap();
    assert_eq!(cufft.api().exec_log().len(), 1);
}

#[test]
fn test_compatibility_mode() {
    let cufft = Cufft::new(MockCufft::new());
    let plan = cufft.plan_2d(8, 8, FftType::R2C).unwrap();
    assert_eq!(
        cufft.api().plan(plan).unwrap().mode,
        CompatibilityMode::Native
    );

    cufft
        .set_compatibility_mode(plan, CompatibilityMode::FftwPadding)
        .unwrap();
    assert_eq!(
        cufft.api().plan(plan).unwrap().mode,
        CompatibilityMode::FftwPadding
    );

    cufft.api().fail_next(CufftStatus::SetupFailed);
    let err = cufft
        .set_compatibility_mode(plan, CompatibilityMode::FftwAll)
        .unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::SetupFailed));
    assert_eq!(
        cufft.api().plan(plan).unwrap().mode,
        CompatibilityMode::FftwPadding
    );
}

#[test]
fn test_optional_entry_points() {
    let full = Cufft::new(MockCufft::new());
    assert_eq!(full.version().unwrap(), crate::mock::MOCK_VERSION);

    let minimal = Cufft::new(MockCufft::minimal());
    let plan = minimal.plan_1d(8, FftType::C2C, 1).unwrap();
    assert!(matches!(
        minimal.set_compatibility_mode(plan, CompatibilityMode::Native),
        Err(CufftError::Unsupported("cufftSetCompatibilityMode"))
    ));
    assert!(matches!(
        minimal.version(),
        Err(CufftError::Unsupported("cufftGetVersion"))
    ));
}

#[test]
fn test_plan_many_layouts() {
    let cufft = Cufft::new(MockCufft::new());

    let basic = cufft
        .plan_many(&[16, 8], Layout::basic(), Layout::default(), FftType::C2C, 10)
        .unwrap();
    let state = cufft.api().plan(basic).unwrap();
    assert_eq!(state.dims, vec![16, 8]);
    assert_eq!(state.batch, 10);
    assert_eq!(state.input_embed, None);
    assert_eq!(state.output_embed, None);

    let inembed = [16, 10];
    let onembed = [16, 6];
    let advanced = cufft
        .plan_many(
            &[16, 8],
            Layout::new(&inembed, 1, 160),
            Layout::new(&onembed, 1, 96),
            FftType::R2C,
            2,
        )
        .unwrap();
    let state = cufft.api().plan(advanced).unwrap();
    assert_eq!(state.input_embed, Some(vec![16, 10]));
    assert_eq!(state.output_embed, Some(vec![16, 6]));

    let err = cufft
        .plan_many(&[], Layout::basic(), Layout::basic(), FftType::C2C, 1)
        .unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InvalidSize));
}

#[test]
fn test_plan_many_short_embedding_is_rejected() {
    let cufft = Cufft::new(MockCufft::new());
    let short = [16];

    let err = cufft
        .plan_many(
            &[16, 8, 4],
            Layout::basic(),
            Layout::new(&short, 1, 16),
            FftType::C2C,
            1,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CufftError::EmbeddingTooShort { rank: 3, len: 1 }
    ));
    assert_eq!(cufft.api().live_plans(), 0);
}

#[test]
fn test_plan_guard() {
    let cufft = Cufft::new(MockCufft::new());

    {
        let guard = cufft.guard(cufft.plan_1d(8, FftType::C2C, 1).unwrap());
        assert!(cufft.api().plan(guard.plan()).is_some());
        assert_eq!(cufft.api().live_plans(), 1);
    }
    assert_eq!(cufft.api().live_plans(), 0);

    let kept = cufft
        .guard(cufft.plan_1d(8, FftType::C2C, 1).unwrap())
        .into_inner();
    assert_eq!(cufft.api().live_plans(), 1);

    let guard = cufft.guard(kept);
    cufft.api().fail_next(CufftStatus::InternalError);
    let err = guard.destroy().unwrap_err();
    assert_eq!(err.status(), Some(CufftStatus::InternalError));
    // the failed destroy left the native plan alive and the guard disarmed
    assert_eq!(cufft.api().live_plans(), 1);
    cufft.destroy(kept).unwrap();
}

#[test]
fn test_fft_type_parse() {
    assert_eq!("r2c".parse::<FftType>().unwrap(), FftType::R2C);
    assert_eq!("CUFFT_Z2Z".parse::<FftType>().unwrap(), FftType::Z2Z);
    assert_eq!(" d2z ".parse::<FftType>().unwrap(), FftType::D2Z);

    let err = "R2R".parse::<FftType>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown string `R2R` for FFT type");
}

#[test]
fn test_fft_type_properties() {
    for t in FftType::ALL {
        assert_eq!(FftType::from_raw(t.as_raw()), Some(t));
    }
    assert!(FftType::Z2D.is_double_precision());
    assert!(!FftType::C2R.is_double_precision());
    assert_eq!(FftType::R2C.implied_direction(), Some(Direction::Forward));
    assert_eq!(FftType::Z2D.implied_direction(), Some(Direction::Inverse));
    assert_eq!(FftType::C2C.implied_direction(), None);
}
