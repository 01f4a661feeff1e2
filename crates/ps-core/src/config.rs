//! Snap tuning knobs.
//!
//! Supplied by the caller; the engine never reads ambient settings.

use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

/// Distances (in CSS pixels) that control snapping and label visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapConfig {
    /// Distance within which a free edge acquires a lock. Default: **6**.
    pub threshold_px: f64,

    /// Extra distance beyond `threshold_px` before an existing lock is
    /// released. Default: **4**.
    pub hysteresis_px: f64,

    /// Smallest width/height a snap may produce. Default: **1**.
    pub min_size_px: f64,

    /// Gaps smaller than this get no distance label. Default: **1**.
    pub min_gap_px: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold_px: 6.0,
            hysteresis_px: 4.0,
            min_size_px: 1.0,
            min_gap_px: 1.0,
        }
    }
}

impl SnapConfig {
    /// Release distance: `threshold_px + hysteresis_px`.
    pub fn release_px(&self) -> f64 {
        self.threshold_px + self.hysteresis_px
    }

    /// Check every field is finite and non-negative.
    ///
    /// # Errors
    /// Names the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }

    /// Replace every invalid field with its default.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |v: f64, d: f64| if v.is_finite() && v >= 0.0 { v } else { d };
        Self {
            threshold_px: pick(self.threshold_px, defaults.threshold_px),
            hysteresis_px: pick(self.hysteresis_px, defaults.hysteresis_px),
            min_size_px: pick(self.min_size_px, defaults.min_size_px),
            min_gap_px: pick(self.min_gap_px, defaults.min_gap_px),
        }
    }

    fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("thresholdPx", self.threshold_px),
            ("hysteresisPx", self.hysteresis_px),
            ("minSizePx", self.min_size_px),
            ("minGapPx", self.min_gap_px),
        ]
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
