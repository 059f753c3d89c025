//! CLI options.

use std::path::PathBuf;

use clap::Parser;

/// Print the materials of a 3D model file.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CliOpt {
    /// Model file to inspect
    pub model_path: PathBuf,
}
