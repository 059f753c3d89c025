//! # Material Dump
//!
//! Prints the materials of a 3D model as Assimp sees them: the shading model
//! of each material, then a fixed list of texture slots with their color or
//! scalar fallbacks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use material_dump::{load_scene, write_scene};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = std::path::Path::new("model.gltf");
//! let scene = load_scene(path)?;
//! write_scene(&mut std::io::stdout(), path, &scene)?;
//! # Ok(())
//! # }
//! ```
//!
//! The report is written against [`MaterialSource`], so it can be produced for
//! any material that answers texture and property queries, not only Assimp's.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use crate::{
    cli_opt::CliOpt,
    descriptor::{Dimension, Fallback, PropertyDescriptor, TextureSlot, DESCRIPTORS},
    error::{Error, Result},
    importer::{load_scene, post_process_steps, write_scene, write_version_banner},
    report::{resolve, write_material, MaterialReport, PropertyValue},
    shading::ShadingModel,
    source::MaterialSource,
};

mod cli_opt;
pub mod descriptor;
pub mod error;
pub mod importer;
pub mod report;
pub mod shading;
pub mod source;
