//! Convert between .bvh motion captures and flat .csv channel tables.
//!
//! `bvh -> csv` writes one column per declared channel (`<joint>_<pos|rot>_<axis>`) and one row per frame.
//! `csv -> bvh` copies a template's skeleton and rebuilds the motion block from the rows.

pub mod batch;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod extract;
pub mod parse;
pub mod types;
mod utils;

pub use config::{ConvertOptions, OnInvalid};
pub use error::{Error, Result};
pub use utils::{bvh_path_for, csv_path_for};
