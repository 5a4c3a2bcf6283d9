//! Batch drivers: run one conversion per input (or input pair), in argument order.
//!
//! Argument problems are reported and then handled as `ConvertOptions::on_invalid` says.
//! I/O failures end the batch; files written before the failure stay on disk.

use crate::compose;
use crate::config::{ConvertOptions, OnInvalid};
use crate::error::{Error, Result};
use crate::extract;
use crate::utils;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a batch did.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Argument errors that were reported along the way.
    pub rejected: Vec<Error>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

enum Verdict {
    Attempt,
    Skip,
}

/// Report an argument error and decide what happens to the item it concerns.
fn __handle_invalid(report: &mut BatchReport, err: Error, policy: OnInvalid) -> Result<Verdict> {
    match policy {
        OnInvalid::Abort => Err(err),
        OnInvalid::Continue => {
            warn!("Error: {err}");
            report.rejected.push(err);
            Ok(Verdict::Attempt)
        }
        OnInvalid::Skip => {
            warn!("Error: {err} (skipped)");
            report.rejected.push(err);
            Ok(Verdict::Skip)
        }
    }
}

fn __check_extension(path: &Path, expected: &'static str) -> Result<()> {
    if utils::__has_extension(path, expected) {
        Ok(())
    } else {
        Err(Error::UnsupportedFileType {
            path: path.to_path_buf(),
            expected,
        })
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// `.bvh` inputs -> `.csv` files next to them.
pub fn run_extract(inputs: &[PathBuf], options: &ConvertOptions) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    if inputs.is_empty() {
        let err = Error::TooFewArguments { expected: 1, actual: 0 };
        __handle_invalid(&mut report, err, options.on_invalid)?;
        return Ok(report);
    }

    for bvh_path in inputs {
        if let Err(err) = __check_extension(bvh_path, "bvh") {
            if let Verdict::Skip = __handle_invalid(&mut report, err, options.on_invalid)? {
                continue;
            }
        }
        let csv_path = extract::convert_file(bvh_path, options)?;
        debug!(input = %bvh_path.display(), output = %csv_path.display(), "extracted");
        report.written.push(csv_path);
    }
    Ok(report)
}

/// `(csv, template bvh)` pairs -> new `.bvh` files in `options.output_dir`.
pub fn run_compose(inputs: &[PathBuf], options: &ConvertOptions) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    debug!(arguments = inputs.len(), "composing");

    if inputs.len() < 2 {
        let err = Error::TooFewArguments {
            expected: 2,
            actual: inputs.len(),
        };
        __handle_invalid(&mut report, err, options.on_invalid)?;
        return Ok(report);
    }

    for pair in inputs.chunks(2) {
        let (csv_path, template_path) = match pair {
            [csv_path, template_path] => (csv_path, template_path),
            [csv_path, ..] => {
                //// nothing to attempt without a template, so the item is dropped whatever the policy
                let err = Error::UnpairedArgument {
                    path: csv_path.clone(),
                };
                __handle_invalid(&mut report, err, options.on_invalid)?;
                continue;
            }
            [] => continue,
        };

        let checked = __check_extension(csv_path, "csv")
            .and_then(|_| __check_extension(template_path, "bvh"));
        if let Err(err) = checked {
            if let Verdict::Skip = __handle_invalid(&mut report, err, options.on_invalid)? {
                continue;
            }
        }

        let out_path = compose::compose_file(csv_path, template_path, options)?;
        debug!(
            csv = %csv_path.display(),
            template = %template_path.display(),
            output = %out_path.display(),
            "composed"
        );
        report.written.push(out_path);
    }
    Ok(report)
}
