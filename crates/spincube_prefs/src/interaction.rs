use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Minimum absolute component of a world-space surface normal for the
    /// surface to count as facing a cube face.
    pub face_normal_threshold: f32,
    /// Whether to highlight the piece under the pointer.
    pub hover_highlight: bool,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            face_normal_threshold: 0.8,
            hover_highlight: true,
        }
    }
}
impl InteractionPreferences {
    /// Replaces an out-of-range threshold with the default.
    pub(crate) fn sanitize(&mut self) {
        let t = self.face_normal_threshold;
        if !(0.0..1.0).contains(&t) {
            let default = Self::default().face_normal_threshold;
            log::warn!("Invalid interaction.face_normal_threshold {t}; using {default}");
            self.face_normal_threshold = default;
        }
    }
}
