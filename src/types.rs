use std::fmt;

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Frame time written by the composer: 120 fps.
pub const FRAME_TIME: f64 = 0.00833333;

/// Motion lines dropped by the extractor right after the `Frame Time:` line.
pub const DEFAULT_SKIP_FRAMES: usize = 250;

pub const KEYWORD_MOTION: &str = "MOTION";
pub const KEYWORD_FRAME_TIME: &str = "Frame Time:";

/////////////////////////////////////////////////////////////////////////////////////////////////

pub type Index = usize;

/// One CSV cell of a frame, kept as the text it was read as.
pub type Value = String;

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Column header of one channel, e.g. `Hips_pos_X` for the `Xposition` channel of `Hips`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLabel {
    pub joint: String,
    pub kind: String,
    pub axis: String,
}

impl fmt::Display for ChannelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.joint, self.kind, self.axis)
    }
}

/// What the extractor learns from a hierarchy block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hierarchy {
    /// Labels in the order the channels are declared.
    pub labels: Vec<ChannelLabel>,
    /// Index of the first line after `Frame Time:`, `None` if the boundary was never found.
    pub motion_start: Option<Index>,
}

impl Hierarchy {
    pub fn num_channels(&self) -> usize {
        self.labels.len()
    }

    /// The comma-joined header row.
    pub fn header(&self) -> String {
        self.labels
            .iter()
            .map(ChannelLabel::to_string)
            .collect::<Vec<String>>()
            .join(",")
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// One time sample, one value per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRow {
    pub values: Vec<Value>,
}

impl FrameRow {
    pub fn new(values: Vec<Value>) -> Self {
        FrameRow { values }
    }

    /// Line as it appears in a BVH motion block.
    pub fn to_motion_line(&self) -> String {
        self.values.join(" ")
    }
}

/// Frame count, frame time and the frames themselves. Only lives for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionBlock {
    pub frame_time: f64,
    pub frames: Vec<FrameRow>,
}

impl MotionBlock {
    pub fn new(frames: Vec<FrameRow>, frame_time: f64) -> Self {
        MotionBlock { frame_time, frames }
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }
}
