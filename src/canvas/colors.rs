use bevy::prelude::*;
use bevy_egui::egui;

/// Resolves a color token: a common color name (any case) or `#rrggbb` /
/// `#rrggbbaa` hex. `None` for anything else.
pub fn color_from_token(token: &str) -> Option<Color> {
    let token = token.trim();
    if token.starts_with('#') {
        return Srgba::hex(token).ok().map(Color::from);
    }
    let (r, g, b) = match token.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "gray" | "grey" => (128, 128, 128),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "purple" => (128, 0, 128),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "brown" => (165, 42, 42),
        _ => return None,
    };
    Some(Color::srgb_u8(r, g, b))
}

/// Converts a Bevy color to the egui equivalent.
pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_resolve() {
        for name in ["blue", "red", "green", "yellow", "purple", "orange", "pink"] {
            assert!(color_from_token(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn names_ignore_case_and_whitespace() {
        assert_eq!(color_from_token(" Blue "), color_from_token("blue"));
    }

    #[test]
    fn hex_tokens_resolve() {
        assert_eq!(
            color_from_token("#ff0000"),
            Some(Color::srgb_u8(255, 0, 0))
        );
        assert!(color_from_token("#nothex").is_none());
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(color_from_token("chartreuse-ish").is_none());
        assert!(color_from_token("").is_none());
    }

    #[test]
    fn color32_conversion_keeps_channels() {
        assert_eq!(
            to_color32(Color::srgb_u8(10, 20, 30)),
            egui::Color32::from_rgb(10, 20, 30)
        );
    }
}
