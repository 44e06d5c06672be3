//! The editable working set: an ordered list of hexagons plus one selection.
//!
//! Every mutating call is a single read-then-write step on `items` and
//! `selected`; on failure neither is touched.

use crate::error::EditError;
use crate::hexagon::Hexagon;
use crate::record::{LineWarning, parse_record};

/// Ordered hexagons (list order is display order) and the current selection.
///
/// Invariant: `selected` is `None` or a valid index into `items`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexagonCollection {
    items: Vec<Hexagon>,
    selected: Option<usize>,
}

/// Outcome of [`HexagonCollection::parse_all`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Number of records that became items.
    pub accepted: usize,
    /// One entry per skipped line, in line order.
    pub warnings: Vec<LineWarning>,
}

impl HexagonCollection {
    // ── Read access ────────────────────────────────────────────────

    /// Number of hexagons.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no hexagons.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hexagon at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Hexagon> {
        self.items.get(index)
    }

    /// Hexagons in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hexagon> {
        self.items.iter()
    }

    /// The selected index, or `None`.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected hexagon, or `None`.
    pub fn selected_hexagon(&self) -> Option<&Hexagon> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Changes the selection. An out-of-range index is rejected and the
    /// previous selection kept.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), EditError> {
        if let Some(i) = index {
            self.check_index(i)?;
        }
        self.selected = index;
        Ok(())
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Appends a hexagon. The selection is unchanged.
    pub fn add(&mut self, hexagon: Hexagon) {
        self.items.push(hexagon);
    }

    /// Appends a duplicate of the hexagon at `index`, named `new_name` or
    /// `"<name>_copy"`. The selection is unchanged.
    pub fn copy(&mut self, index: usize, new_name: Option<&str>) -> Result<(), EditError> {
        self.check_index(index)?;
        let copy = self.items[index].duplicate(new_name);
        self.items.push(copy);
        Ok(())
    }

    /// Removes the hexagon at `index`, shifting later items left.
    ///
    /// A selection past the new end is clamped to the last item, or cleared
    /// when the collection becomes empty.
    pub fn delete(&mut self, index: usize) -> Result<Hexagon, EditError> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            Some(_) if self.items.is_empty() => None,
            Some(s) if s >= self.items.len() => Some(self.items.len() - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Sets the size of the hexagon at `index`.
    pub fn resize(&mut self, index: usize, new_size: f64) -> Result<(), EditError> {
        self.check_index(index)?;
        self.items[index].resize(new_size)
    }

    /// Overwrites all five fields of the hexagon at `index`, or none of them.
    pub fn replace_fields(
        &mut self,
        index: usize,
        center_x: f64,
        center_y: f64,
        size: f64,
        color: &str,
        name: &str,
    ) -> Result<(), EditError> {
        self.check_index(index)?;
        let hexagon = &mut self.items[index];
        // The size is the only field that can fail, so it goes first.
        hexagon.resize(size)?;
        hexagon.move_to(center_x, center_y);
        color.clone_into(&mut hexagon.color);
        name.clone_into(&mut hexagon.name);
        Ok(())
    }

    // ── Text format ────────────────────────────────────────────────

    /// One record line per hexagon, in list order.
    pub fn serialize_all(&self) -> Vec<String> {
        self.items.iter().map(Hexagon::to_record).collect()
    }

    /// Replaces the whole collection with the valid records in `lines`.
    ///
    /// Blank lines are ignored silently; every other rejected line yields a
    /// [`LineWarning`] and is dropped. The selection is cleared even when no
    /// line was accepted.
    pub fn parse_all<I, S>(&mut self, lines: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = Vec::new();
        let mut warnings = Vec::new();

        for (line, text) in (1..).zip(lines) {
            let text = text.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            match parse_record(text) {
                Ok(hexagon) => items.push(hexagon),
                Err(error) => warnings.push(LineWarning { line, error }),
            }
        }

        self.items = items;
        self.selected = None;
        ParseReport {
            accepted: self.items.len(),
            warnings,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }
}
