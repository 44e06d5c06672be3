use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::CanvasConfig;
use super::colors::{color_from_token, to_color32};
use crate::editor::{HexagonSet, SelectHexagon};
use crate::math;

/// Spawns the 2D camera egui renders through.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}

/// Paints every hexagon as a filled polygon with an outline and a center dot,
/// outlines the selection, and emits [`SelectHexagon`] on click.
///
/// Unrecognized color tokens fall back to [`CanvasConfig::fallback_fill`] and
/// are reported once each.
pub fn draw_canvas(
    mut contexts: EguiContexts,
    set: Res<HexagonSet>,
    cfg: Res<CanvasConfig>,
    mut select: MessageWriter<SelectHexagon>,
    mut reported: Local<HashSet<String>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let outline = egui::Stroke::new(cfg.outline_width, to_color32(cfg.outline_color));

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(to_color32(cfg.background)))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let origin = Vec2::new(response.rect.min.x, response.rect.min.y);
            let to_screen = |p| {
                let s = math::canvas_to_screen(origin, p);
                egui::pos2(s.x, s.y)
            };

            for hexagon in set.iter() {
                let fill = color_from_token(&hexagon.color).unwrap_or_else(|| {
                    if reported.insert(hexagon.color.clone()) {
                        warn!("unknown color {:?}, drawing it grey", hexagon.color);
                    }
                    cfg.fallback_fill
                });
                let corners = hexagon.vertices().map(to_screen).to_vec();
                painter.add(egui::Shape::convex_polygon(
                    corners,
                    to_color32(fill),
                    outline,
                ));
                painter.circle_filled(
                    to_screen(hexagon.center()),
                    cfg.center_dot_radius,
                    outline.color,
                );
            }

            if let Some(selected) = set.selected_hexagon() {
                let corners = selected.vertices().map(to_screen).to_vec();
                painter.add(egui::Shape::closed_line(
                    corners,
                    egui::Stroke::new(cfg.highlight_width, to_color32(cfg.highlight_color)),
                ));
            }

            if response.clicked()
                && let Some(pos) = response.interact_pointer_pos()
            {
                let point = math::screen_to_canvas(origin, Vec2::new(pos.x, pos.y));
                select.write(SelectHexagon(super::hexagon_at(&set, point)));
            }
        });
    Ok(())
}
