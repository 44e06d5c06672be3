//! Line codec for the flat hexagon file format.
//!
//! One record per line: `name,centerX,centerY,size,color`. Fields are split on
//! every comma with no escaping, so names and colors must not contain commas.

use std::fmt;

use crate::error::RecordError;
use crate::hexagon::Hexagon;

/// A skipped line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LineWarning {
    /// 1-based line number in the source text.
    pub line: usize,
    /// What was wrong with it.
    pub error: RecordError,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}; line skipped", self.line, self.error)
    }
}

/// Parses one non-blank record line.
///
/// Name and color are trimmed, numeric fields are trimmed before parsing.
pub fn parse_record(line: &str) -> Result<Hexagon, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [name, x, y, size, color] = fields[..] else {
        return Err(RecordError::WrongFieldCount(fields.len()));
    };

    let center_x = parse_number("centerX", x)?;
    let center_y = parse_number("centerY", y)?;
    let size = parse_number("size", size)?;

    Hexagon::new(center_x, center_y, size, color.trim(), name.trim())
        .map_err(|_| RecordError::NonPositiveSize(size))
}

pub(crate) fn parse_number(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RecordError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_record() {
        let h = parse_record("A,0,0,10,blue").unwrap();
        assert_eq!(h, Hexagon::new(0.0, 0.0, 10.0, "blue", "A").unwrap());
    }

    #[test]
    fn trims_every_field() {
        let h = parse_record("  big one , 1.5 , -2 , 3 ,  red  ").unwrap();
        assert_eq!(h.name, "big one");
        assert_eq!(h.color, "red");
        assert_eq!(h.center_x, 1.5);
        assert_eq!(h.center_y, -2.0);
        assert_eq!(h.size(), 3.0);
    }

    #[test]
    fn too_few_fields() {
        assert_eq!(
            parse_record("A,0,0,10"),
            Err(RecordError::WrongFieldCount(4))
        );
    }

    #[test]
    fn comma_in_name_shifts_fields() {
        assert_eq!(
            parse_record("Smith, John,0,0,10,blue"),
            Err(RecordError::WrongFieldCount(6))
        );
    }

    #[test]
    fn unparseable_number_names_the_field() {
        assert_eq!(
            parse_record("C,x,2,5,green"),
            Err(RecordError::InvalidNumber {
                field: "centerX",
                value: "x".into()
            })
        );
        assert!(matches!(
            parse_record("C,1,2,big,green"),
            Err(RecordError::InvalidNumber { field: "size", .. })
        ));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        assert_eq!(
            parse_record("B,1,1,-5,red"),
            Err(RecordError::NonPositiveSize(-5.0))
        );
        assert_eq!(
            parse_record("B,1,1,0,red"),
            Err(RecordError::NonPositiveSize(0.0))
        );
    }

    #[test]
    fn nan_size_is_rejected() {
        assert!(matches!(
            parse_record("B,1,1,NaN,red"),
            Err(RecordError::NonPositiveSize(s)) if s.is_nan()
        ));
    }

    #[test]
    fn empty_name_and_color_are_allowed() {
        let h = parse_record(",1,2,3,").unwrap();
        assert_eq!(h.name, "");
        assert_eq!(h.color, "");
    }

    #[test]
    fn warning_display_mentions_line_and_reason() {
        let w = LineWarning {
            line: 3,
            error: RecordError::WrongFieldCount(2),
        };
        assert_eq!(
            w.to_string(),
            "line 3: wrong field count: expected 5, got 2; line skipped"
        );
    }
}
