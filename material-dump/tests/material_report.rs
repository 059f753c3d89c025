#![cfg(any(feature = "prebuilt", feature = "build-assimp", feature = "system"))]

//! Material reports for real model files

use std::path::{Path, PathBuf};

use material_dump::{
    load_scene, write_scene, Error, MaterialReport, PropertyValue, ShadingModel, DESCRIPTORS,
};

fn model(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/models")
        .join(name)
}

fn report_text(path: &Path) -> String {
    let scene = load_scene(path).expect("model should import");
    let mut out = Vec::new();
    write_scene(&mut out, path, &scene).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("report is UTF-8")
}

#[test]
fn test_obj_phong_material() {
    let path = model("phong.obj");
    let scene = load_scene(&path).expect("OBJ should import");

    let mat = scene
        .materials()
        .find(|m| m.name() == "Mat1")
        .expect("Mat1 should be in the scene");
    let report = MaterialReport::new(&mat);

    assert_eq!(report.shading, ShadingModel::Phong);
    assert_eq!(
        report.get("diffuse"),
        Some(&PropertyValue::Value([0.5, 0.5, 0.5, 1.0]))
    );
    assert_eq!(report.get("height"), Some(&PropertyValue::Absent));
    assert_eq!(report.entries.len(), DESCRIPTORS.len());
}

#[test]
fn test_obj_phong_report_lines() {
    let path = model("phong.obj");
    let text = report_text(&path);

    assert!(text.starts_with(&format!("print materials for {}\n", path.display())));
    let header = text
        .lines()
        .position(|l| l == "\tmaterial: Mat1 Shading Model: Phong")
        .expect("Mat1 header line");
    let diffuse = text
        .lines()
        .position(|l| l == "\t\tdiffuse: (0.5, 0.5, 0.5, 1)")
        .expect("diffuse line");
    assert!(header < diffuse);
}

#[test]
fn test_gltf_base_color_texture_wins_over_factor() {
    let path = model("textured.gltf");
    let text = report_text(&path);

    assert!(text.contains("\tmaterial: Painted Shading Model: "));
    assert!(text.contains("\t\tglft-base-color: albedo.png\n"));
    assert!(!text.contains("glft-base-color: ("));
    assert!(text.contains("\t\tgltf-metallic: (0.25, 0, 0, 0)\n"));
    assert!(text.contains("\t\tgltf-roughness: (0.5, 0, 0, 0)\n"));
}

#[test]
fn test_broken_file_is_import_failure() {
    let path = model("broken.gltf");
    match load_scene(&path) {
        Err(Error::Import { path: failed, message }) => {
            assert_eq!(failed, path);
            assert!(!message.is_empty());
        }
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("truncated glTF should not import"),
    }
}
