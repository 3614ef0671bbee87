use crate::text::GlyphName;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Advance widths of one glyph, in 1/1000 of a text space unit (font size 1.0).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharMetrics {
    pub glyph_name: GlyphName,
    /// Horizontal advance.
    pub wx: f64,
    /// Vertical advance.
    pub wy: f64,
}

impl CharMetrics {
    pub fn new(glyph_name: impl Into<GlyphName>, wx: f64, wy: f64) -> Self {
        Self {
            glyph_name: glyph_name.into(),
            wx,
            wy,
        }
    }
}

/// Glyph name to advance widths for a single font.
///
/// Every entry is keyed by its own `glyph_name`. Tables are built once and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphMetricsTable {
    metrics: HashMap<GlyphName, CharMetrics>,
}

impl GlyphMetricsTable {
    /// Build a table from metric records. A later record for the same glyph
    /// replaces an earlier one.
    pub fn from_metrics(metrics: impl IntoIterator<Item = CharMetrics>) -> Self {
        let metrics = metrics
            .into_iter()
            .map(|m| (m.glyph_name.clone(), m))
            .collect();
        Self { metrics }
    }

    /// Metrics for `glyph`.
    ///
    /// Returns the zero record and `false` when the glyph is not part of the
    /// font. A zero width with `true` is a real zero-width glyph; callers must
    /// check the flag.
    pub fn get(&self, glyph: &str) -> (CharMetrics, bool) {
        match self.metrics.get(glyph) {
            Some(metrics) => (metrics.clone(), true),
            None => (CharMetrics::default(), false),
        }
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.metrics.contains_key(glyph)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// All records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CharMetrics> {
        self.metrics.values()
    }

    pub fn glyph_names(&self) -> impl Iterator<Item = &GlyphName> {
        self.metrics.keys()
    }
}

impl FromIterator<CharMetrics> for GlyphMetricsTable {
    fn from_iter<T: IntoIterator<Item = CharMetrics>>(iter: T) -> Self {
        Self::from_metrics(iter)
    }
}
