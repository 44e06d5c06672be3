//! A single regular hexagon: placement, circumradius, and display tokens.

use std::fmt;

use bevy::math::DVec2;

use crate::error::EditError;
use crate::math;

/// One regular hexagon as shown on the canvas and stored in a record line.
///
/// `size` is the circumradius and is kept strictly positive by every mutating
/// method. `color` and `name` are opaque tokens; the core never validates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Hexagon {
    /// Canvas x of the center.
    pub center_x: f64,
    /// Canvas y of the center (y grows downwards).
    pub center_y: f64,
    size: f64,
    /// Fill color token, e.g. `blue` or `#ff8800`.
    pub color: String,
    /// Display label; need not be unique.
    pub name: String,
}

impl Default for Hexagon {
    fn default() -> Self {
        Self {
            center_x: 200.0,
            center_y: 200.0,
            size: 50.0,
            color: "blue".into(),
            name: "Hexagon".into(),
        }
    }
}

impl Hexagon {
    /// Builds a hexagon, rejecting a non-positive `size`.
    pub fn new(
        center_x: f64,
        center_y: f64,
        size: f64,
        color: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, EditError> {
        check_size(size)?;
        Ok(Self {
            center_x,
            center_y,
            size,
            color: color.into(),
            name: name.into(),
        })
    }

    /// Circumradius: distance from the center to every corner.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Center as a vector.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.center_x, self.center_y)
    }

    /// The six corners in order, corner `i` at angle `60°·i − 30°`.
    pub fn vertices(&self) -> [DVec2; 6] {
        let center = self.center();
        std::array::from_fn(|i| math::point_on_circle(center, self.size, math::vertex_angle_deg(i)))
    }

    /// An independent copy named `new_name`, or `"<name>_copy"` when `None`.
    pub fn duplicate(&self, new_name: Option<&str>) -> Self {
        let name = match new_name {
            Some(name) => name.to_owned(),
            None => format!("{}_copy", self.name),
        };
        Self {
            name,
            ..self.clone()
        }
    }

    /// Sets a new circumradius. Non-positive (or NaN) sizes are rejected.
    pub fn resize(&mut self, new_size: f64) -> Result<(), EditError> {
        check_size(new_size)?;
        self.size = new_size;
        Ok(())
    }

    /// Moves the center. Any coordinates are accepted.
    pub fn move_to(&mut self, new_x: f64, new_y: f64) {
        self.center_x = new_x;
        self.center_y = new_y;
    }

    /// Record form `name,centerX,centerY,size,color`.
    ///
    /// Name and color are written verbatim; a comma in either corrupts the line.
    pub fn to_record(&self) -> String {
        self.to_string()
    }

    /// List entry text, e.g. `Hexagon (size: 50)`.
    pub fn label(&self) -> String {
        format!("{} (size: {})", self.name, self.size)
    }
}

impl fmt::Display for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.name, self.center_x, self.center_y, self.size, self.color
        )
    }
}

/// `size > 0`, written so that NaN fails too.
fn check_size(size: f64) -> Result<(), EditError> {
    if size > 0.0 {
        Ok(())
    } else {
        Err(EditError::NonPositiveSize(size))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn hex(x: f64, y: f64, size: f64) -> Hexagon {
        Hexagon::new(x, y, size, "blue", "H").unwrap()
    }

    // ── vertices ────────────────────────────────────────────────────

    #[test]
    fn every_vertex_lies_on_the_circumcircle() {
        let h = hex(12.5, -4.0, 37.0);
        for (i, v) in h.vertices().iter().enumerate() {
            let d = v.distance(h.center());
            assert!((d - 37.0).abs() < 1e-9, "vertex {i} at distance {d}");
        }
    }

    #[test]
    fn vertex_angles_follow_corner_order() {
        let h = hex(3.0, 4.0, 10.0);
        let expected = [-30.0_f64, 30.0, 90.0, 150.0, 210.0, 270.0];
        for (v, want) in h.vertices().iter().zip(expected) {
            let offset = *v - h.center();
            let got = offset.y.atan2(offset.x).to_degrees();
            let diff = (got - want).rem_euclid(360.0);
            assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn first_vertex_matches_manual_trig() {
        let h = hex(0.0, 0.0, 2.0);
        let v = h.vertices()[0];
        let expected = DVec2::new(3.0_f64.sqrt(), -1.0);
        assert!((v - expected).length() < 1e-12, "got {v:?}");
    }

    proptest! {
        #[test]
        fn vertices_sit_on_the_circumcircle_for_any_placement(
            x in -1e4..1e4f64,
            y in -1e4..1e4f64,
            size in 1e-2..1e4f64,
        ) {
            let h = hex(x, y, size);
            for (i, v) in h.vertices().iter().enumerate() {
                let d = v.distance(h.center());
                prop_assert!((d - size).abs() < 1e-8, "vertex {} at distance {}", i, d);
                let offset = *v - h.center();
                let angle = offset.y.atan2(offset.x).to_degrees();
                let diff = (angle - math::vertex_angle_deg(i)).rem_euclid(360.0);
                prop_assert!(
                    diff < 1e-6 || 360.0 - diff < 1e-6,
                    "vertex {} at {} degrees",
                    i,
                    angle
                );
            }
        }
    }

    // ── construction ────────────────────────────────────────────────

    #[test]
    fn new_rejects_non_positive_size() {
        assert_eq!(
            Hexagon::new(0.0, 0.0, 0.0, "red", "z"),
            Err(EditError::NonPositiveSize(0.0))
        );
        assert!(Hexagon::new(0.0, 0.0, -1.0, "red", "z").is_err());
        assert!(Hexagon::new(0.0, 0.0, f64::NAN, "red", "z").is_err());
    }

    #[test]
    fn default_matches_editor_form_defaults() {
        let h = Hexagon::default();
        assert_eq!(h.to_record(), "Hexagon,200,200,50,blue");
    }

    // ── duplicate ───────────────────────────────────────────────────

    #[test]
    fn duplicate_without_name_appends_copy_suffix() {
        let h = hex(1.0, 2.0, 3.0);
        let d = h.duplicate(None);
        assert_eq!(d.name, "H_copy");
        assert_eq!(d.center(), h.center());
        assert_eq!(d.size(), h.size());
        assert_eq!(d.color, h.color);
    }

    #[test]
    fn duplicate_with_explicit_name() {
        let d = hex(1.0, 2.0, 3.0).duplicate(Some("twin"));
        assert_eq!(d.name, "twin");
    }

    #[test]
    fn mutating_duplicate_leaves_source_alone() {
        let h = hex(1.0, 2.0, 3.0);
        let mut d = h.duplicate(None);
        d.resize(99.0).unwrap();
        d.move_to(-5.0, -6.0);
        d.color.push_str("ish");
        assert_eq!(h, hex(1.0, 2.0, 3.0));
    }

    // ── resize / move ───────────────────────────────────────────────

    #[test]
    fn resize_accepts_positive() {
        let mut h = hex(0.0, 0.0, 5.0);
        assert_eq!(h.resize(8.5), Ok(()));
        assert_eq!(h.size(), 8.5);
    }

    #[test]
    fn resize_rejects_zero_and_negative() {
        let mut h = hex(0.0, 0.0, 5.0);
        assert_eq!(h.resize(0.0), Err(EditError::NonPositiveSize(0.0)));
        assert_eq!(h.resize(-3.0), Err(EditError::NonPositiveSize(-3.0)));
        assert_eq!(h.size(), 5.0);
    }

    #[test]
    fn move_to_accepts_any_coordinates() {
        let mut h = hex(0.0, 0.0, 5.0);
        h.move_to(-1e9, 42.25);
        assert_eq!(h.center(), DVec2::new(-1e9, 42.25));
    }

    // ── record / label ──────────────────────────────────────────────

    #[test]
    fn record_uses_natural_decimal_rendering() {
        let h = Hexagon::new(1.5, -2.0, 0.25, "green", "leaf").unwrap();
        assert_eq!(h.to_record(), "leaf,1.5,-2,0.25,green");
    }

    #[test]
    fn label_shows_name_and_size() {
        assert_eq!(hex(0.0, 0.0, 12.5).label(), "H (size: 12.5)");
    }
}
