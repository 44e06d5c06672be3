//! Canvas view: paints every hexagon into the central egui panel and turns
//! clicks into selection requests.
//!
//! Canvas coordinates are y-down with the origin at the panel's top-left
//! corner, so the numbers in the form and in saved files are pixel offsets.

mod colors;
mod systems;

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::UiSet;
use crate::collection::HexagonCollection;
use crate::math;

/// Per-plugin configuration for the canvas.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CanvasConfig {
    /// Panel background.
    pub background: Color,
    /// Outline and center-dot color.
    pub outline_color: Color,
    /// Outline width in logical pixels.
    pub outline_width: f32,
    /// Radius of the dot marking each center.
    pub center_dot_radius: f32,
    /// Extra outline drawn around the selected hexagon.
    pub highlight_color: Color,
    /// Width of the selection outline.
    pub highlight_width: f32,
    /// Fill used when a color token is not recognized.
    pub fallback_fill: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            outline_color: Color::BLACK,
            outline_width: 2.0,
            center_dot_radius: 3.0,
            highlight_color: Color::srgb(1.0, 0.55, 0.0),
            highlight_width: 4.0,
            fallback_fill: Color::srgb(0.6, 0.6, 0.6),
        }
    }
}

/// Camera plus the canvas painter.
pub struct CanvasPlugin(pub CanvasConfig);

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CanvasConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.background))
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                EguiPrimaryContextPass,
                systems::draw_canvas.in_set(UiSet::Canvas),
            );
    }
}

/// Index of the topmost hexagon containing `point`.
///
/// Later items are drawn over earlier ones, so the search runs back to front.
pub fn hexagon_at(collection: &HexagonCollection, point: DVec2) -> Option<usize> {
    collection
        .iter()
        .rposition(|h| math::convex_polygon_contains(&h.vertices(), point))
}
