//! Material dump.

use std::io::{BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use log::info;
use material_dump::{load_scene, write_scene, write_version_banner, CliOpt};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("version: {}", env!("CARGO_PKG_VERSION"));

    let opt = CliOpt::parse();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_version_banner(&mut out)?;
    // keep the banner visible even when the import fails
    out.flush()?;

    let scene = load_scene(&opt.model_path)
        .with_context(|| format!("failed to import {}", opt.model_path.display()))?;
    write_scene(&mut out, &opt.model_path, &scene)?;
    out.flush()?;

    Ok(())
}
