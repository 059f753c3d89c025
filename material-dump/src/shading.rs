//! Shading model labels

use std::fmt;

/// Shading model declared by a material (`$mat.shadingm`)
///
/// Raw values follow Assimp's `aiShadingMode`. Anything outside the known
/// set, including a missing key, resolves to [`ShadingModel::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingModel {
    /// Flat shading, one normal per face
    Flat,
    /// Gouraud shading
    Gouraud,
    /// Phong shading
    Phong,
    /// Blinn-Phong shading
    Blinn,
    /// Toon (cel) shading
    Toon,
    /// Oren-Nayar diffuse model
    OrenNayar,
    /// Minnaert diffuse model
    Minnaert,
    /// Cook-Torrance specular model
    CookTorrance,
    /// Unlit
    NoShading,
    /// Fresnel
    Fresnel,
    /// Not one of the above
    Unknown,
}

impl ShadingModel {
    /// Map a raw `aiShadingMode` value
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => Self::Flat,
            2 => Self::Gouraud,
            3 => Self::Phong,
            4 => Self::Blinn,
            5 => Self::Toon,
            6 => Self::OrenNayar,
            7 => Self::Minnaert,
            8 => Self::CookTorrance,
            9 => Self::NoShading,
            10 => Self::Fresnel,
            _ => Self::Unknown,
        }
    }

    /// Map an optional raw value; an absent key is `Unknown`
    pub fn from_raw_opt(value: Option<i32>) -> Self {
        value.map_or(Self::Unknown, Self::from_raw)
    }

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Gouraud => "Gouraud",
            Self::Phong => "Phong",
            Self::Blinn => "Blinn-Phong",
            Self::Toon => "Toon-Shading",
            Self::OrenNayar => "Oren-Nayer",
            Self::Minnaert => "Minnaert",
            Self::CookTorrance => "Cook-Torrance",
            Self::NoShading => "No shading",
            Self::Fresnel => "Fresnel",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ShadingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
