//! `.bvh` -> `.csv`: one header row of channel labels, then one row per retained motion line.

use crate::config::ConvertOptions;
use crate::error::{Error, Result};
use crate::parse::HierarchyScanner;
use crate::utils;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whitespace-separated motion line -> comma-separated row. Tokens stay untouched.
pub fn transcode_row(line: &str) -> String {
    line.split_whitespace().collect::<Vec<&str>>().join(",")
}

/// Write the header and data rows for the bvh read from `reader`.
/// The first `options.skip_frames` motion lines are dropped. Returns the number of data rows written.
pub fn write_csv<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &ConvertOptions,
) -> Result<usize> {
    let mut lines = reader.lines();

    //// hierarchy: collect labels up to `Frame Time:`
    let mut scanner = HierarchyScanner::new();
    for line in lines.by_ref() {
        if scanner.feed(&line?)? {
            break;
        }
    }
    let hierarchy = scanner.finish();
    debug!(
        channels = hierarchy.num_channels(),
        found_motion = hierarchy.motion_start.is_some(),
        "parsed hierarchy"
    );
    writeln!(writer, "{}", hierarchy.header())?;

    //// motion: whatever is left in the reader
    let mut rows = 0;
    for line in lines.skip(options.skip_frames) {
        writeln!(writer, "{}", transcode_row(&line?))?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

/// Convert `bvh_path` into a `.csv` next to it, overwriting any previous one.
pub fn convert_file(bvh_path: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let csv_path = utils::csv_path_for(bvh_path);

    let bvh = File::open(bvh_path).map_err(Error::io(bvh_path))?;
    let csv = File::create(&csv_path).map_err(Error::io(&csv_path))?;

    let rows = write_csv(BufReader::new(bvh), BufWriter::new(csv), options)?;
    debug!(input = %bvh_path.display(), output = %csv_path.display(), rows, "wrote csv");
    Ok(csv_path)
}
