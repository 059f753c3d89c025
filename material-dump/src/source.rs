//! Read-only material queries the report is built from

use crate::descriptor::TextureSlot;

/// Query interface over a material
///
/// Every lookup returns `None` when the property is missing; absence is an
/// ordinary outcome, never an error. All keys are read at texture semantic 0
/// and index 0.
pub trait MaterialSource {
    /// Display name of the material
    fn name(&self) -> String;

    /// Path assigned to a texture slot, as stored in the material
    ///
    /// Implementations return the raw path, which may be empty. Embedded
    /// references (`*0`, `*1`, ...) are returned unchanged.
    fn texture_path(&self, slot: TextureSlot, index: usize) -> Option<String>;

    /// Integer property
    fn integer(&self, key: &str) -> Option<i32>;

    /// Single float property
    fn scalar(&self, key: &str) -> Option<f32>;

    /// RGB color property
    fn color3(&self, key: &str) -> Option<[f32; 3]>;

    /// RGBA color property
    fn color4(&self, key: &str) -> Option<[f32; 4]>;
}
