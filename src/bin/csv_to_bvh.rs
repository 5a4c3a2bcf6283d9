//! `csv_to_bvh motion.csv skeleton.bvh [motion2.csv skeleton2.bvh ...]`

use anyhow::Result;
use bvh_csv::batch::run_compose;
use bvh_csv::cli::{setup_tracing, ComposeArgs};
use clap::Parser;

fn main() -> Result<()> {
    let args = ComposeArgs::parse();
    setup_tracing(args.verbose);

    run_compose(&args.inputs, &args.options())?;
    Ok(())
}
