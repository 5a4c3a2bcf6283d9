//! `.csv` + template `.bvh` -> new `.bvh`.
//!
//! The skeleton is copied from the template as-is, the motion block is rebuilt from the csv rows.
//! Columns are trusted to be in the template's channel order; nothing checks it.

use crate::config::ConvertOptions;
use crate::error::{Error, Result};
use crate::types::{FrameRow, MotionBlock, KEYWORD_MOTION};
use crate::utils;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy lines from `template` to `writer` up to and including the first one containing `MOTION`.
/// Line endings are kept byte for byte. Returns the number of lines copied.
pub fn copy_hierarchy<R: BufRead, W: Write>(template: &mut R, writer: &mut W) -> Result<usize> {
    let mut line = String::new();
    let mut copied = 0;
    loop {
        line.clear();
        if template.read_line(&mut line)? == 0 {
            break;
        }
        writer.write_all(line.as_bytes())?;
        copied += 1;
        if line.contains(KEYWORD_MOTION) {
            break;
        }
    }
    Ok(copied)
}

/// Data rows of a csv, header dropped. Blank lines become empty rows and still count as frames.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<FrameRow>> {
    let mut rows = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line?;
        let row = if line.is_empty() {
            FrameRow::default()
        } else {
            FrameRow::new(line.split(',').map(str::to_string).collect())
        };
        rows.push(row);
    }
    Ok(rows)
}

/// `Frames:`, `Frame Time:` and one space-joined line per frame.
pub fn write_motion<W: Write>(writer: &mut W, motion: &MotionBlock) -> Result<()> {
    writeln!(writer, "Frames: {}", motion.num_frames())?;
    writeln!(writer, "Frame Time: {}", motion.frame_time)?;
    for frame in &motion.frames {
        writeln!(writer, "{}", frame.to_motion_line())?;
    }
    Ok(())
}

/// Build `<output_dir>/<csv stem>.bvh` from `csv_path` and the skeleton of `template_path`.
pub fn compose_file(
    csv_path: &Path,
    template_path: &Path,
    options: &ConvertOptions,
) -> Result<PathBuf> {
    let out_path = utils::bvh_path_for(csv_path, &options.output_dir);

    let csv = File::open(csv_path).map_err(Error::io(csv_path))?;
    let template = File::open(template_path).map_err(Error::io(template_path))?;
    let out = File::create(&out_path).map_err(Error::io(&out_path))?;

    let mut writer = BufWriter::new(out);
    let copied = copy_hierarchy(&mut BufReader::new(template), &mut writer)?;

    let motion = MotionBlock::new(read_rows(BufReader::new(csv))?, options.frame_time);
    write_motion(&mut writer, &motion)?;
    writer.flush()?;

    debug!(
        output = %out_path.display(),
        hierarchy_lines = copied,
        frames = motion.num_frames(),
        "wrote bvh"
    );
    Ok(out_path)
}
