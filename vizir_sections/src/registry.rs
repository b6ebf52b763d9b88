// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Append-only, ordered storage of sections.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{AxisError, Range, Section};

/// Length used by [`SectionAxis::next_section`](crate::SectionAxis::next_section).
pub const DEFAULT_SECTION_LENGTH: f64 = 1.0;

/// Sections in ascending, non-overlapping order.
///
/// Each new section starts at the previous section's upper bound plus a gap, so ordering by
/// central value and pairwise disjointness hold by construction.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section of `length` placed `gap` above the last one (the first starts at 0).
    ///
    /// On error the registry is left untouched.
    pub fn append(
        &mut self,
        label: Option<String>,
        length: f64,
        gap: f64,
    ) -> Result<&mut Section, AxisError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(AxisError::invalid("length", "must be positive and finite"));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(AxisError::invalid("gap", "must be non-negative and finite"));
        }
        let lower = match self.sections.last() {
            Some(last) => last.range().upper() + gap,
            None => 0.0,
        };
        let range = Range::new(lower, lower + length)?;
        self.sections.push(Section::new(range, label));
        let index = self.sections.len() - 1;
        Ok(&mut self.sections[index])
    }

    /// All sections, ascending.
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    /// Mutable access to one section.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no section has been appended.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections whose range intersects `range`, ascending.
    pub fn in_range(&self, range: Range) -> impl Iterator<Item = &Section> + '_ {
        self.sections
            .iter()
            .filter(move |s| s.range().intersects(&range))
    }
}

/// `[first.lower, last.upper]` of ascending `sections`, or `None` when empty.
pub(crate) fn envelope(sections: &[Section]) -> Option<Range> {
    let first = sections.first()?;
    let last = sections.last()?;
    Some(first.range().union(&last.range()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_with_gaps() {
        let mut r = SectionRegistry::new();
        r.append(None, 1.0, 5.0).unwrap();
        r.append(None, 2.0, 0.5).unwrap();
        r.append(None, 0.25, 0.0).unwrap();
        let got: Vec<_> = r
            .as_slice()
            .iter()
            .map(|s| (s.range().lower(), s.range().upper()))
            .collect();
        assert_eq!(got, [(0.0, 1.0), (1.5, 3.5), (3.5, 3.75)]);
        assert_eq!(envelope(r.as_slice()), Some(Range::new(0.0, 3.75).unwrap()));
    }

    #[test]
    fn rejects_bad_arguments_without_side_effects() {
        let mut r = SectionRegistry::new();
        r.append(None, 1.0, 0.0).unwrap();
        assert!(r.append(None, 0.0, 0.0).is_err());
        assert!(r.append(None, 1.0, -0.5).is_err());
        assert!(r.append(None, f64::INFINITY, 0.0).is_err());
        assert!(r.append(None, 1.0, f64::NAN).is_err());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn in_range_skips_touching_sections() {
        let mut r = SectionRegistry::new();
        for _ in 0..4 {
            r.append(None, 1.0, 0.0).unwrap();
        }
        let hits: Vec<_> = r
            .in_range(Range::new(1.0, 2.5).unwrap())
            .map(|s| s.range().lower())
            .collect();
        assert_eq!(hits, [1.0, 2.0]);
    }
}
