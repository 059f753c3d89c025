//! Per-material property report

use std::fmt;
use std::io::Write;

use log::trace;

use crate::{
    descriptor::{keys, Dimension, PropertyDescriptor, DESCRIPTORS},
    shading::ShadingModel,
    source::MaterialSource,
};

/// What a descriptor resolved to on one material
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A non-empty texture path
    Texture(String),
    /// Fallback value as RGBA; unused components are zero
    Value([f32; 4]),
    /// Neither a texture nor a fallback value
    Absent,
}

impl PropertyValue {
    /// Whether anything was found
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The texture path, if that is what resolved
    pub fn texture(&self) -> Option<&str> {
        match self {
            Self::Texture(path) => Some(path.as_str()),
            _ => None,
        }
    }

    /// The fallback components, if that is what resolved
    pub fn value(&self) -> Option<[f32; 4]> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

/// Components print with Rust's shortest round-trip `f32` formatting, so
/// values needing more than six significant digits print longer than a C++
/// stream would (`0.039215688` rather than `0.0392157`).
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture(path) => f.write_str(path),
            Self::Value([r, g, b, a]) => write!(f, "({}, {}, {}, {})", r, g, b, a),
            Self::Absent => Ok(()),
        }
    }
}

/// Read the fallback value of a descriptor
fn fallback_value<M: MaterialSource + ?Sized>(
    material: &M,
    descriptor: &PropertyDescriptor,
) -> Option<[f32; 4]> {
    let key = descriptor.fallback.key;
    match descriptor.fallback.dimension {
        Dimension::None => None,
        Dimension::Scalar => material.scalar(key).map(|v| [v, 0.0, 0.0, 0.0]),
        Dimension::Color3 => material.color3(key).map(|[r, g, b]| [r, g, b, 1.0]),
        Dimension::Color4 => material.color4(key),
    }
}

/// Resolve one descriptor: a non-empty texture path wins over the fallback
pub fn resolve<M: MaterialSource + ?Sized>(
    material: &M,
    descriptor: &PropertyDescriptor,
) -> PropertyValue {
    match material.texture_path(descriptor.slot, descriptor.index) {
        Some(path) if !path.is_empty() => PropertyValue::Texture(path),
        _ => fallback_value(material, descriptor)
            .map_or(PropertyValue::Absent, PropertyValue::Value),
    }
}

/// Report for a single material
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialReport {
    /// Material name
    pub name: String,
    /// Declared shading model
    pub shading: ShadingModel,
    /// One entry per descriptor, in table order
    pub entries: Vec<(&'static str, PropertyValue)>,
}

impl MaterialReport {
    /// Build the report of `material` against the standard table
    pub fn new<M: MaterialSource + ?Sized>(material: &M) -> Self {
        Self::with_descriptors(material, DESCRIPTORS)
    }

    /// Build the report of `material` against a custom table
    pub fn with_descriptors<M: MaterialSource + ?Sized>(
        material: &M,
        descriptors: &'static [PropertyDescriptor],
    ) -> Self {
        let entries: Vec<_> = descriptors
            .iter()
            .map(|d| (d.label, resolve(material, d)))
            .collect();
        let report = Self {
            name: material.name(),
            shading: ShadingModel::from_raw_opt(material.integer(keys::SHADING_MODEL)),
            entries,
        };
        trace!(
            "material '{}': {} of {} properties present",
            report.name,
            report.entries.iter().filter(|(_, v)| v.is_present()).count(),
            report.entries.len()
        );
        report
    }

    /// Value reported under `label`
    pub fn get(&self, label: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for MaterialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tmaterial: {} Shading Model: {}", self.name, self.shading)?;
        for (label, value) in &self.entries {
            writeln!(f, "\t\t{}: {}", label, value)?;
        }
        // two blank lines between materials
        write!(f, "\n\n")
    }
}

/// Write the report of one material
pub fn write_material<W, M>(out: &mut W, material: &M) -> std::io::Result<()>
where
    W: Write + ?Sized,
    M: MaterialSource + ?Sized,
{
    write!(out, "{}", MaterialReport::new(material))
}
