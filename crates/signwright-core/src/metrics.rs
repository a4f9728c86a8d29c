//! Font metrics and icon aspect-ratio tables.

use crate::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

pub const DEFAULT_FONT_SERIES: &str = "E";

pub const ICON_ARROW_FORWARD: &str = "arrow-forward-std";
pub const ICON_ARROW_LEFT: &str = "arrow-left-std";
pub const ICON_ARROW_RIGHT: &str = "arrow-right-std";
pub const ICON_SHIELD_ROUTE: &str = "shield-route";
pub const ICON_SHIELD_FREEWAY: &str = "shield-freeway";

/// Per-series ratios relative to the nominal letter height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    pub avg_char_width_ratio: f64,
    pub ascent_ratio: f64,
    pub descent_ratio: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            avg_char_width_ratio: 0.6,
            ascent_ratio: 0.75,
            descent_ratio: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineAnchor {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub native_w: f64,
    pub native_h: f64,
    pub baseline_anchor: BaselineAnchor,
}

impl IconSpec {
    pub fn aspect_ratio(&self) -> f64 {
        self.native_w / self.native_h
    }
}

/// Read-only lookup tables for font series and icons.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    fonts: FxHashMap<String, FontMetrics>,
    icons: FxHashMap<String, IconSpec>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in tables: series `E` plus the standard arrows and shields.
    pub fn builtin() -> Self {
        let arrow_wide = IconSpec {
            native_w: 100.0,
            native_h: 80.0,
            baseline_anchor: BaselineAnchor::Middle,
        };
        let tall = IconSpec {
            native_w: 80.0,
            native_h: 100.0,
            baseline_anchor: BaselineAnchor::Middle,
        };
        Self::empty()
            .with_font(DEFAULT_FONT_SERIES, FontMetrics::default())
            .with_icon(ICON_ARROW_RIGHT, arrow_wide)
            .with_icon(ICON_ARROW_LEFT, arrow_wide)
            .with_icon(ICON_ARROW_FORWARD, tall)
            .with_icon(ICON_SHIELD_ROUTE, tall)
            .with_icon(ICON_SHIELD_FREEWAY, tall)
    }

    /// Process-wide shared instance of [`Catalog::builtin`].
    pub fn shared() -> Arc<Catalog> {
        static SHARED: OnceLock<Arc<Catalog>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(Catalog::builtin()))
            .clone()
    }

    pub fn with_font(mut self, series: impl Into<String>, metrics: FontMetrics) -> Self {
        self.fonts.insert(series.into(), metrics);
        self
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>, spec: IconSpec) -> Self {
        self.icons.insert(icon_id.into(), spec);
        self
    }

    pub fn font(&self, series: &str) -> Result<&FontMetrics> {
        self.fonts
            .get(series)
            .ok_or_else(|| Error::UnknownFontSeries {
                series: series.to_string(),
            })
    }

    pub fn icon(&self, icon_id: &str) -> Result<&IconSpec> {
        self.icons.get(icon_id).ok_or_else(|| Error::UnknownIcon {
            icon_id: icon_id.to_string(),
        })
    }

    /// Metrics used for a layout pass: the series must exist; an explicit override wins.
    pub fn resolve_font(
        &self,
        series: &str,
        override_metrics: Option<&FontMetrics>,
    ) -> Result<FontMetrics> {
        let base = self.font(series)?;
        Ok(override_metrics.copied().unwrap_or(*base))
    }
}
