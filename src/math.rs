//! Pure geometry helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `DVec2` inputs, making them straightforward to unit-test.

use bevy::math::{DVec2, Vec2};

/// Angle in degrees of hexagon corner `index` (0..6).
///
/// Returns -30°, 30°, 90°, 150°, 210°, 270° for indices 0 through 5, giving a
/// pointy-top hexagon with one corner straight along the y-axis.
pub fn vertex_angle_deg(index: usize) -> f64 {
    60.0 * index as f64 - 30.0
}

/// Point at `radius` from `center` in direction `angle_deg`.
pub fn point_on_circle(center: DVec2, radius: f64, angle_deg: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    DVec2::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Maps a canvas coordinate to screen space given the canvas' top-left corner.
///
/// Both spaces are y-down, so this is a plain translation.
pub fn canvas_to_screen(origin: Vec2, point: DVec2) -> Vec2 {
    origin + point.as_vec2()
}

/// Inverse of [`canvas_to_screen`].
pub fn screen_to_canvas(origin: Vec2, point: Vec2) -> DVec2 {
    (point - origin).as_dvec2()
}

/// Whether `point` lies inside (or on the boundary of) a convex polygon.
///
/// Works for either winding: the point is inside when every edge cross
/// product has the same sign. Degenerate polygons (fewer than three corners)
/// contain nothing.
pub fn convex_polygon_contains(corners: &[DVec2], point: DVec2) -> bool {
    if corners.len() < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        let cross = (b - a).perp_dot(point - a);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}
