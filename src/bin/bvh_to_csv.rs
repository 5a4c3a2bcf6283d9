//! `bvh_to_csv file1.bvh [dir/file2.bvh ...]`

use anyhow::Result;
use bvh_csv::batch::run_extract;
use bvh_csv::cli::{setup_tracing, ExtractArgs};
use clap::Parser;

fn main() -> Result<()> {
    let args = ExtractArgs::parse();
    setup_tracing(args.verbose);

    run_extract(&args.inputs, &args.options())?;
    Ok(())
}
