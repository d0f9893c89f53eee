//! cuFFT setup diagnostics.
//! Loads the shared library the same way the binding does and optionally
//! builds and releases a plan, without touching device memory.

use std::process::exit;

use clap::{Parser, Subcommand};
use cufft::{Cufft, CufftApi, CufftLibrary, CufftResult, FftType, LoaderConfig, Plan};
use log::debug;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ProbeArgs {
    /// Explicit cuFFT shared library to load instead of the platform defaults
    #[arg(short, long)]
    library: Option<String>,

    #[clap(subcommand)]
    command: ProbeCommand,
}

#[derive(Debug, Subcommand, Clone)]
enum ProbeCommand {
    /// Print the loaded library and its version
    Info,
    /// Create a 1D, 2D or 3D plan, then destroy it
    Plan {
        /// Transform type: R2C, C2R, C2C, D2Z, Z2D or Z2Z
        #[arg(short, long)]
        fft_type: FftType,

        /// Size of the first dimension
        #[arg(long)]
        nx: i32,

        /// Size of the second dimension
        #[arg(long)]
        ny: Option<i32>,

        /// Size of the third dimension, requires --ny
        #[arg(long, requires = "ny")]
        nz: Option<i32>,

        /// Number of 1D transforms
        #[arg(short, long, default_value_t = 1)]
        batch: i32,
    },
}

fn load_library(path: Option<&str>) -> CufftResult<CufftLibrary> {
    let config = match path {
        Some(path) => LoaderConfig::explicit(path),
        None => LoaderConfig::from_env(),
    };
    debug!("loader candidates: {:?}", config.candidates());
    Ok(CufftLibrary::load(&config)?)
}

fn create_plan<A: CufftApi>(
    cufft: &Cufft<A>,
    fft_type: FftType,
    nx: i32,
    ny: Option<i32>,
    nz: Option<i32>,
    batch: i32,
) -> CufftResult<Plan> {
    match (ny, nz) {
        (None, _) => cufft.plan_1d(nx, fft_type, batch),
        (Some(ny), None) => cufft.plan_2d(nx, ny, fft_type),
        (Some(ny), Some(nz)) => cufft.plan_3d(nx, ny, nz, fft_type),
    }
}

fn run<A: CufftApi>(cufft: &Cufft<A>, command: &ProbeCommand) -> CufftResult<()> {
    match command {
        ProbeCommand::Info => match cufft.version() {
            Ok(version) => println!("cuFFT version: {}", version),
            Err(e) => println!("cuFFT version: unavailable ({})", e),
        },
        ProbeCommand::Plan {
            fft_type,
            nx,
            ny,
            nz,
            batch,
        } => {
            let plan = create_plan(cufft, *fft_type, *nx, *ny, *nz, *batch)?;
            println!("created {} plan, handle {}", fft_type, plan.as_raw());
            cufft.guard(plan).destroy()?;
            println!("destroyed plan {}", plan.as_raw());
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = ProbeArgs::parse();

    let library = match load_library(args.library.as_deref()) {
        Ok(library) => library,
        Err(e) => {
            println!("error: {}", e);
            exit(1);
        }
    };
    println!("loaded: {}", library.name());

    let cufft = Cufft::new(library);
    if let Err(e) = run(&cufft, &args.command) {
        println!("error: {}", e);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cufft::CufftStatus;
    use cufft::mock::MockCufft;

    #[test]
    fn test_parse_plan_command() {
        let args = ProbeArgs::try_parse_from([
            "cufft-probe", "plan", "-f", "z2z", "--nx", "8", "--ny", "4",
        ])
        .unwrap();
        match args.command {
            ProbeCommand::Plan {
                fft_type,
                nx,
                ny,
                nz,
                batch,
            } => {
                assert_eq!(fft_type, FftType::Z2Z);
                assert_eq!((nx, ny, nz, batch), (8, Some(4), None, 1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_nz_without_ny() {
        let nz_only = ["cufft-probe", "plan", "-f", "c2c", "--nx", "8", "--nz", "2"];
        assert!(ProbeArgs::try_parse_from(nz_only).is_err());

        let unknown_type = ["cufft-probe", "plan", "-f", "r2r", "--nx", "8"];
        assert!(ProbeArgs::try_parse_from(unknown_type).is_err());
    }

    #[test]
    fn test_plan_command_releases_plan() {
        let cufft = Cufft::new(MockCufft::new());
        let command = ProbeCommand::Plan {
            fft_type: FftType::C2C,
            nx: 8,
            ny: Some(8),
            nz: Some(8),
            batch: 1,
        };
        run(&cufft, &command).unwrap();
        assert_eq!(cufft.api().live_plans(), 0);

        let command = ProbeCommand::Plan {
            fft_type: FftType::R2C,
            nx: 0,
            ny: None,
            nz: None,
            batch: 1,
        };
        let err = run(&cufft, &command).unwrap_err();
        assert_eq!(err.status(), Some(CufftStatus::InvalidSize));
    }
}
