//! Visibility bookkeeping for the one-shot reveal animation
//!
//! A [`VisibilitySet`] only ever grows: once a section has been seen it stays
//! seen, there is no way to remove an entry.

use std::collections::BTreeSet;

use crate::error::{LandingError, Result};
use crate::models::section::SectionId;

/// Intersection ratios within this distance below the threshold still count.
/// Browsers report the crossing ratio with float noise.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Fraction of a region that must be inside the viewport, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Default fraction used by the page (10%)
    pub const DEFAULT: Self = Self(0.1);

    /// Creates a validated threshold.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::InvalidThreshold` if `value` is not finite or
    /// lies outside [0, 1].
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LandingError::InvalidThreshold(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether `ratio` reaches this threshold
    #[must_use]
    pub fn is_met_by(self, ratio: f64) -> bool {
        ratio + RATIO_TOLERANCE >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One intersection change reported by a viewport observer
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionReport {
    /// DOM id of the observed element
    pub target_id: String,
    pub is_intersecting: bool,
    /// Visible fraction of the element's bounding box
    pub ratio: f64,
}

impl IntersectionReport {
    pub fn new(target_id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting,
            ratio,
        }
    }
}

/// Sections that have entered the viewport at least once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    seen: BTreeSet<SectionId>,
}

impl VisibilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set with every section already seen. Used when the browser cannot
    /// observe intersections, so nothing stays hidden.
    #[must_use]
    pub fn all_seen() -> Self {
        Self {
            seen: SectionId::ALL.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_seen(&self, section: SectionId) -> bool {
        self.seen.contains(&section)
    }

    /// Applies one report. Returns the section if this report is what first
    /// marked it seen.
    pub fn record(
        &mut self,
        report: &IntersectionReport,
        threshold: Threshold,
    ) -> Option<SectionId> {
        if !report.is_intersecting || !threshold.is_met_by(report.ratio) {
            return None;
        }
        let section = report.target_id.parse::<SectionId>().ok()?;
        self.seen.insert(section).then_some(section)
    }

    /// Applies a batch of reports, returning the newly seen sections in
    /// report order.
    pub fn apply<'a>(
        &mut self,
        reports: impl IntoIterator<Item = &'a IntersectionReport>,
        threshold: Threshold,
    ) -> Vec<SectionId> {
        reports
            .into_iter()
            .filter_map(|report| self.record(report, threshold))
            .collect()
    }

    pub fn seen(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.seen.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
