//! Scene import through Assimp and the Assimp-backed material source

use std::io::Write;
use std::path::Path;

use asset_importer::{postprocess::PostProcessSteps, Importer, Material, Scene, TextureType};
use log::{debug, info, warn};

use crate::{
    descriptor::TextureSlot,
    error::{Error, Result},
    report::write_material,
    source::MaterialSource,
};

/// Post-processing applied to every import
pub fn post_process_steps() -> PostProcessSteps {
    PostProcessSteps::TRIANGULATE
        | PostProcessSteps::GEN_SMOOTH_NORMALS
        | PostProcessSteps::FLIP_UVS
        | PostProcessSteps::CALC_TANGENT_SPACE
}

/// Import a model file and check that the scene is usable
///
/// The scene must be complete and have a root node; otherwise the import is
/// reported as failed.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    debug!("importing {}", path.display());

    let scene = Importer::new()
        .read_file(path)
        .with_post_process(post_process_steps())
        .import_file(path)
        .map_err(|e| Error::import_failed(path, e.to_string()))?;

    check_scene(path, &scene)?;
    info!(
        "imported {}: {} material(s)",
        path.display(),
        scene.num_materials()
    );
    Ok(scene)
}

fn check_scene(path: &Path, scene: &Scene) -> Result<()> {
    check_scene_state(path, scene.is_incomplete(), scene.root_node().is_some())
}

/// Reject an incomplete scene or one without a root node
fn check_scene_state(path: &Path, incomplete: bool, has_root: bool) -> Result<()> {
    if incomplete {
        warn!("{}: scene is flagged incomplete", path.display());
        return Err(Error::import_failed(path, "scene is incomplete"));
    }
    if !has_root {
        warn!("{}: scene has no root node", path.display());
        return Err(Error::import_failed(path, "scene has no root node"));
    }
    Ok(())
}

/// Write the banner naming the linked Assimp version
pub fn write_version_banner<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    use asset_importer::version;

    writeln!(
        out,
        "compiled with assimp Version: {}.{}.{}",
        version::assimp_version_major(),
        version::assimp_version_minor(),
        version::assimp_version_revision()
    )
}

/// Write the report of every material in `scene`, in scene order
pub fn write_scene<W: Write + ?Sized>(out: &mut W, path: &Path, scene: &Scene) -> Result<()> {
    writeln!(out, "print materials for {}", path.display())?;
    for material in scene.materials() {
        write_material(out, &material)?;
    }
    Ok(())
}

fn texture_type(slot: TextureSlot) -> TextureType {
    match slot {
        TextureSlot::Diffuse => TextureType::Diffuse,
        TextureSlot::Specular => TextureType::Specular,
        TextureSlot::Ambient => TextureType::Ambient,
        TextureSlot::Emissive => TextureType::Emissive,
        TextureSlot::Height => TextureType::Height,
        TextureSlot::Normals => TextureType::Normals,
        TextureSlot::Shininess => TextureType::Shininess,
        TextureSlot::Opacity => TextureType::Opacity,
        TextureSlot::Displacement => TextureType::Displacement,
        TextureSlot::Lightmap => TextureType::Lightmap,
        TextureSlot::Reflection => TextureType::Reflection,
        TextureSlot::BaseColor => TextureType::BaseColor,
        TextureSlot::NormalCamera => TextureType::NormalCamera,
        TextureSlot::EmissionColor => TextureType::EmissionColor,
        TextureSlot::Metalness => TextureType::Metalness,
        TextureSlot::DiffuseRoughness => TextureType::DiffuseRoughness,
        TextureSlot::AmbientOcclusion => TextureType::AmbientOcclusion,
        TextureSlot::GltfMetallicRoughness => TextureType::GltfMetallicRoughness,
    }
}

impl MaterialSource for Material {
    fn name(&self) -> String {
        Material::name(self)
    }

    fn texture_path(&self, slot: TextureSlot, index: usize) -> Option<String> {
        self.texture(texture_type(slot), index).map(|info| info.path)
    }

    fn integer(&self, key: &str) -> Option<i32> {
        self.get_integer_property(key)
    }

    fn scalar(&self, key: &str) -> Option<f32> {
        self.get_float_property(key)
    }

    fn color3(&self, key: &str) -> Option<[f32; 3]> {
        self.get_color_property(key).map(|c| [c.x, c.y, c.z])
    }

    fn color4(&self, key: &str) -> Option<[f32; 4]> {
        self.get_color_property(key).map(|c| [c.x, c.y, c.z, c.w])
    }
}
