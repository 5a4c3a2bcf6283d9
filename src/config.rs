//! Conversion options shared by both directions.

use crate::types::{DEFAULT_SKIP_FRAMES, FRAME_TIME};
use std::path::PathBuf;

/// What a batch does with an item whose arguments failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OnInvalid {
    /// Report the problem, then convert the item anyway.
    Continue,
    /// Report the problem and move on to the next item.
    #[default]
    Skip,
    /// Stop the whole batch with an error.
    Abort,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Motion lines dropped after `Frame Time:` when extracting.
    pub skip_frames: usize,
    /// Frame time written by the composer.
    pub frame_time: f64,
    pub on_invalid: OnInvalid,
    /// Where the composer writes new .bvh files.
    pub output_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            skip_frames: DEFAULT_SKIP_FRAMES,
            frame_time: FRAME_TIME,
            on_invalid: OnInvalid::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ConvertOptions {
    pub fn with_skip_frames(mut self, skip_frames: usize) -> Self {
        self.skip_frames = skip_frames;
        self
    }

    pub fn with_frame_time(mut self, frame_time: f64) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn with_on_invalid(mut self, on_invalid: OnInvalid) -> Self {
        self.on_invalid = on_invalid;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
