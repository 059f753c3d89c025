//! The fixed table of reportable material properties

use Dimension::{Color3, Scalar};
use TextureSlot as T;

/// Texture channels a descriptor can look up
///
/// Mirrors the subset of Assimp's `aiTextureType` that the report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Legacy diffuse color map
    Diffuse,
    /// Legacy specular map
    Specular,
    /// Legacy ambient map
    Ambient,
    /// Legacy emissive map
    Emissive,
    /// Height (bump) map
    Height,
    /// Tangent-space normal map
    Normals,
    /// Specular exponent map
    Shininess,
    /// Opacity map
    Opacity,
    /// Displacement map
    Displacement,
    /// Baked light map
    Lightmap,
    /// Reflection map
    Reflection,
    /// PBR base color map
    BaseColor,
    /// PBR normal map
    NormalCamera,
    /// PBR emission map
    EmissionColor,
    /// PBR metalness map
    Metalness,
    /// PBR roughness map
    DiffuseRoughness,
    /// PBR ambient occlusion map
    AmbientOcclusion,
    /// Packed glTF metallic (blue) / roughness (green) texture
    GltfMetallicRoughness,
}

/// Shape of a descriptor's fallback value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Texture-only, there is no fallback
    None,
    /// One float, reported in the first component
    Scalar,
    /// RGB color, reported with alpha forced to 1
    Color3,
    /// RGBA color
    Color4,
}

/// Fallback lookup used when a descriptor's texture slot is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// Material property key, queried at semantic 0 / index 0
    pub key: &'static str,
    /// How to read the value behind `key`
    pub dimension: Dimension,
}

/// One reportable material property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Label printed in the report
    pub label: &'static str,
    /// Texture channel checked first
    pub slot: TextureSlot,
    /// Index within the texture channel
    pub index: usize,
    /// Value checked when no texture is assigned
    pub fallback: Fallback,
}

impl PropertyDescriptor {
    const fn texture_only(label: &'static str, slot: TextureSlot) -> Self {
        Self {
            label,
            slot,
            index: 0,
            fallback: Fallback {
                key: "",
                dimension: Dimension::None,
            },
        }
    }

    const fn with_fallback(
        label: &'static str,
        slot: TextureSlot,
        key: &'static str,
        dimension: Dimension,
    ) -> Self {
        Self {
            label,
            slot,
            index: 0,
            fallback: Fallback { key, dimension },
        }
    }

    /// Whether a fallback value may be reported for this property
    pub fn has_fallback(&self) -> bool {
        self.fallback.dimension != Dimension::None
    }
}

/// Property keys the table falls back to
pub mod keys {
    /// Shading model (integer)
    pub const SHADING_MODEL: &str = "$mat.shadingm";
    /// PBR base color factor
    pub const BASE_COLOR: &str = "$clr.base";
    /// PBR roughness factor
    pub const ROUGHNESS_FACTOR: &str = "$mat.roughnessFactor";
    /// PBR metallic factor
    pub const METALLIC_FACTOR: &str = "$mat.metallicFactor";
    /// Diffuse color
    pub const COLOR_DIFFUSE: &str = "$clr.diffuse";
    /// Specular color
    pub const COLOR_SPECULAR: &str = "$clr.specular";
    /// Ambient color
    pub const COLOR_AMBIENT: &str = "$clr.ambient";
    /// Emissive color
    pub const COLOR_EMISSIVE: &str = "$clr.emissive";
    /// Reflective color
    pub const COLOR_REFLECTIVE: &str = "$clr.reflective";
    /// Shininess exponent
    pub const SHININESS: &str = "$mat.shininess";
    /// Opacity
    pub const OPACITY: &str = "$mat.opacity";
}

/// Every property in report order
///
/// Roughness and metallic share the packed glTF texture. The `glft` spelling
/// of the base color label is what existing reports contain.
pub static DESCRIPTORS: &[PropertyDescriptor] = &[
    PropertyDescriptor::with_fallback("glft-base-color", T::BaseColor, keys::BASE_COLOR, Color3),
    PropertyDescriptor::with_fallback(
        "gltf-roughness",
        T::GltfMetallicRoughness,
        keys::ROUGHNESS_FACTOR,
        Scalar,
    ),
    PropertyDescriptor::with_fallback(
        "gltf-metallic",
        T::GltfMetallicRoughness,
        keys::METALLIC_FACTOR,
        Scalar,
    ),
    // legacy
    PropertyDescriptor::with_fallback("diffuse", T::Diffuse, keys::COLOR_DIFFUSE, Color3),
    PropertyDescriptor::with_fallback("specular", T::Specular, keys::COLOR_SPECULAR, Color3),
    PropertyDescriptor::with_fallback("ambient", T::Ambient, keys::COLOR_AMBIENT, Color3),
    PropertyDescriptor::with_fallback("emissive", T::Emissive, keys::COLOR_EMISSIVE, Color3),
    PropertyDescriptor::texture_only("height", T::Height),
    PropertyDescriptor::texture_only("normal", T::Normals),
    PropertyDescriptor::with_fallback("shininess", T::Shininess, keys::SHININESS, Scalar),
    PropertyDescriptor::with_fallback("opacity", T::Opacity, keys::OPACITY, Scalar),
    PropertyDescriptor::texture_only("displacement", T::Displacement),
    PropertyDescriptor::texture_only("light-map", T::Lightmap),
    PropertyDescriptor::with_fallback("reflection", T::Reflection, keys::COLOR_REFLECTIVE, Color3),
    // pbr
    PropertyDescriptor::texture_only("pbr-base-color", T::BaseColor),
    PropertyDescriptor::texture_only("pbr-normal", T::NormalCamera),
    PropertyDescriptor::texture_only("pbr-emissive", T::EmissionColor),
    PropertyDescriptor::texture_only("pbr-metallic", T::Metalness),
    PropertyDescriptor::texture_only("pbr-roughness", T::DiffuseRoughness),
    PropertyDescriptor::texture_only("pbr-ambient-occlusion", T::AmbientOcclusion),
];

/// Look up a descriptor by its report label
#[cfg(test)]
pub(crate) fn find(label: &str) -> Option<&'static PropertyDescriptor> {
    DESCRIPTORS.iter().find(|d| d.label == label)
}
