use crate::error::{Error, Result};
use crate::types::*;
use crate::utils;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_JOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(ROOT|JOINT)\s+(\S+)").expect("joint regex is valid"));
static RE_CHANNELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*CHANNELS\s+(\d+)\s*(.*)$").expect("channels regex is valid")
});

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Build the label of one channel of `joint`.
/// The token's first char is the axis and the next three the kind, so `Xposition` gives `<joint>_pos_X`.
pub fn channel_label(joint: &str, token: &str) -> ChannelLabel {
    let (kind, axis) = utils::__split_channel_token(token);
    ChannelLabel {
        joint: joint.to_string(),
        kind,
        axis,
    }
}

/// Line-by-line scanner over a hierarchy block.
/// Feed it lines until it reports the `Frame Time:` boundary.
#[derive(Debug, Default)]
pub struct HierarchyScanner {
    labels: Vec<ChannelLabel>,
    current_joint: Option<String>,
    line_index: Index,
    motion_start: Option<Index>,
}

impl HierarchyScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line. Returns `true` once the boundary line has been seen;
    /// lines fed after that are not part of the hierarchy and are ignored.
    pub fn feed(&mut self, line: &str) -> Result<bool> {
        if self.motion_start.is_some() {
            return Ok(true);
        }
        let line_number = self.line_index + 1;
        self.line_index += 1;

        //// ROOT / JOINT: remember the name, following CHANNELS belong to it
        if let Some(captures) = RE_JOINT.captures(line) {
            self.current_joint = Some(captures[2].to_string());
        }

        //// CHANNELS <count> <tokens...>: the count is not trusted, tokens are
        if let Some(captures) = RE_CHANNELS.captures(line) {
            let joint = self
                .current_joint
                .as_deref()
                .ok_or_else(|| Error::MalformedHierarchy {
                    line: line_number,
                    reason: "CHANNELS declared before any ROOT or JOINT".to_string(),
                })?;
            let labels = captures
                .get(2)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .split_whitespace()
                .map(|token| channel_label(joint, token));
            self.labels.extend(labels);
        }

        if line.contains(KEYWORD_FRAME_TIME) {
            self.motion_start = Some(self.line_index);
            return Ok(true);
        }
        Ok(false)
    }

    pub fn finish(self) -> Hierarchy {
        Hierarchy {
            labels: self.labels,
            motion_start: self.motion_start,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Collect channel labels from `lines` up to the `Frame Time:` boundary.
pub fn parse_hierarchy<'a, I>(lines: I) -> Result<Hierarchy>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = HierarchyScanner::new();
    for line in lines {
        if scanner.feed(line)? {
            break;
        }
    }
    Ok(scanner.finish())
}

//////////////////////////////////////////////////////////////// PUBLIC ///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// load the hierarchy of a bvh file from a file path
pub fn load_hierarchy_from_file(file_path: impl AsRef<Path>) -> Result<Hierarchy> {
    let file_path = file_path.as_ref();
    let contents = std::fs::read_to_string(file_path).map_err(Error::io(file_path))?;
    parse_hierarchy(contents.lines())
}

/// load the hierarchy of a bvh file from a string
pub fn load_hierarchy_from_string(bvh_string: &str) -> Result<Hierarchy> {
    parse_hierarchy(bvh_string.lines())
}
