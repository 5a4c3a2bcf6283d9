//! Command line glue shared by the `bvh_to_csv` and `csv_to_bvh` binaries.

use crate::config::{ConvertOptions, OnInvalid};
use crate::types::{DEFAULT_SKIP_FRAMES, FRAME_TIME};
use clap::Parser;
use std::path::PathBuf;

/// Extract per-frame channel values from .bvh files into .csv files next to them.
#[derive(Parser, Debug)]
#[command(name = "bvh_to_csv")]
#[command(about = "Extract per-frame channel values from .bvh files into .csv files")]
pub struct ExtractArgs {
    /// .bvh files to convert
    #[arg(value_name = "FILE.bvh")]
    pub inputs: Vec<PathBuf>,

    /// Motion lines dropped after the `Frame Time:` line
    #[arg(long, default_value_t = DEFAULT_SKIP_FRAMES)]
    pub skip_frames: usize,

    /// What to do with an argument that fails validation
    #[arg(long, value_enum, default_value_t = OnInvalid::Skip)]
    pub on_invalid: OnInvalid,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExtractArgs {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::default()
            .with_skip_frames(self.skip_frames)
            .with_on_invalid(self.on_invalid)
    }
}

/// Rebuild .bvh files from .csv motion data and template skeletons.
#[derive(Parser, Debug)]
#[command(name = "csv_to_bvh")]
#[command(about = "Rebuild .bvh files from .csv motion data and .bvh skeleton templates")]
pub struct ComposeArgs {
    /// Pairs of motion .csv and template .bvh
    #[arg(value_name = "FILE.csv FILE.bvh")]
    pub inputs: Vec<PathBuf>,

    /// Frame time written to the motion block, in seconds
    #[arg(long, default_value_t = FRAME_TIME)]
    pub frame_time: f64,

    /// Directory the new .bvh files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// What to do with an argument that fails validation
    #[arg(long, value_enum, default_value_t = OnInvalid::Skip)]
    pub on_invalid: OnInvalid,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ComposeArgs {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::default()
            .with_frame_time(self.frame_time)
            .with_output_dir(&self.output_dir)
            .with_on_invalid(self.on_invalid)
    }
}

/// Log to stderr. `RUST_LOG` wins over `verbose` when set.
pub fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("bvh_csv=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
