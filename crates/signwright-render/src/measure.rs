//! Content measurement: text runs, icons and badges to sized boxes in h-space.
//!
//! Widths use a per-series average character width; there is no shaping or kerning.

use signwright_core::metrics::BaselineAnchor;
use signwright_core::{Catalog, FontMetrics, HBox, Result};

/// Letter height of a shield label relative to the shield's line height.
pub const SHIELD_LABEL_LETTER_RATIO: f64 = 0.6;
/// Horizontal room around a shield label relative to the line height.
pub const SHIELD_LABEL_PADDING_RATIO: f64 = 0.4;
/// Road-name text is slightly wider than the plain estimate to leave room inside the banner.
pub const NAME_BADGE_TEXT_INFLATION: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconMetrics {
    pub width: f64,
    pub height: f64,
    pub baseline_offset: f64,
}

/// `|text| * letter_h * avg_char_width_ratio`, counting Unicode scalar values.
pub fn text_width(text: &str, letter_h: f64, metrics: &FontMetrics) -> f64 {
    text.chars().count() as f64 * letter_h * metrics.avg_char_width_ratio
}

pub fn text_metrics(text: &str, letter_h: f64, metrics: &FontMetrics) -> TextMetrics {
    TextMetrics {
        width: text_width(text, letter_h, metrics),
        ascent: letter_h * metrics.ascent_ratio,
        descent: letter_h * metrics.descent_ratio,
        height: letter_h,
    }
}

pub fn measure_text(
    text: &str,
    font_series: &str,
    letter_h: f64,
    catalog: &Catalog,
) -> Result<TextMetrics> {
    let metrics = catalog.font(font_series)?;
    Ok(text_metrics(text, letter_h, metrics))
}

pub fn measure_icon(icon_id: &str, line_h: f64, catalog: &Catalog) -> Result<IconMetrics> {
    let spec = catalog.icon(icon_id)?;
    let height = line_h;
    let baseline_offset = match spec.baseline_anchor {
        BaselineAnchor::Middle => height / 2.0,
        BaselineAnchor::Top | BaselineAnchor::Bottom => 0.0,
    };
    Ok(IconMetrics {
        width: spec.aspect_ratio() * height,
        height,
        baseline_offset,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub bounds: HBox,
    pub text: String,
    pub font_series: String,
    pub letter_h: f64,
    pub ascent: f64,
    pub descent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconBox {
    pub bounds: HBox,
    pub icon_id: String,
    pub baseline_offset: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameBadgeBox {
    pub bounds: HBox,
    pub text: String,
    pub letter_h: f64,
    pub pad: f64,
    pub text_width: f64,
    pub text_height: f64,
    pub ascent: f64,
    pub descent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberBadgeBox {
    pub bounds: HBox,
    pub text: String,
    pub letter_h: f64,
    pub text_width: f64,
    pub text_height: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// A single measured box placed directly on a row.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBox {
    Text(TextBox),
    Icon(IconBox),
    NameBadge(NameBadgeBox),
    NumberBadge(NumberBadgeBox),
}

impl ContentBox {
    pub fn bounds(&self) -> HBox {
        match self {
            ContentBox::Text(b) => b.bounds,
            ContentBox::Icon(b) => b.bounds,
            ContentBox::NameBadge(b) => b.bounds,
            ContentBox::NumberBadge(b) => b.bounds,
        }
    }
}

/// Measures content for one layout pass with a resolved font series.
#[derive(Debug, Clone, Copy)]
pub struct ContentMeasurer<'a> {
    catalog: &'a Catalog,
    font_series: &'a str,
    metrics: FontMetrics,
}

impl<'a> ContentMeasurer<'a> {
    /// Fails when `font_series` is not in the catalog, even if `override_metrics` is given.
    pub fn new(
        catalog: &'a Catalog,
        font_series: &'a str,
        override_metrics: Option<&FontMetrics>,
    ) -> Result<Self> {
        let metrics = catalog.resolve_font(font_series, override_metrics)?;
        Ok(Self {
            catalog,
            font_series,
            metrics,
        })
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn font_series(&self) -> &str {
        self.font_series
    }

    pub fn text(&self, text: &str, letter_h: f64) -> TextBox {
        let m = text_metrics(text, letter_h, &self.metrics);
        TextBox {
            bounds: HBox::new(m.width, m.height),
            text: text.to_string(),
            font_series: self.font_series.to_string(),
            letter_h,
            ascent: m.ascent,
            descent: m.descent,
        }
    }

    /// Icons span the line height. Shields with a label widen to fit it.
    pub fn icon(&self, icon_id: &str, line_h: f64, label: Option<&str>) -> Result<IconBox> {
        let m = measure_icon(icon_id, line_h, self.catalog)?;
        let label = label.filter(|l| !l.is_empty());
        let mut width = m.width;
        if let Some(label) = label.filter(|_| icon_id.contains("shield")) {
            let label_letter_h = line_h * SHIELD_LABEL_LETTER_RATIO;
            let label_width = text_width(label, label_letter_h, &self.metrics);
            width = width.max(label_width + line_h * SHIELD_LABEL_PADDING_RATIO);
        }
        Ok(IconBox {
            bounds: HBox::new(width, m.height),
            icon_id: icon_id.to_string(),
            baseline_offset: m.baseline_offset,
            label: label.map(str::to_string),
        })
    }

    pub fn name_badge(&self, text: &str, letter_h: f64, pad: f64) -> NameBadgeBox {
        let text_width = text_width(text, letter_h, &self.metrics) * NAME_BADGE_TEXT_INFLATION;
        let text_height = letter_h;
        NameBadgeBox {
            bounds: HBox::new(text_width + 2.5 * pad, text_height + 2.0 * pad),
            text: text.to_string(),
            letter_h,
            pad,
            text_width,
            text_height,
            ascent: letter_h * self.metrics.ascent_ratio,
            descent: letter_h * self.metrics.descent_ratio,
        }
    }

    pub fn number_badge(&self, text: &str, letter_h: f64) -> NumberBadgeBox {
        let m = text_metrics(text, letter_h, &self.metrics);
        NumberBadgeBox {
            bounds: HBox::new(m.width, m.height),
            text: text.to_string(),
            letter_h,
            text_width: m.width,
            text_height: m.height,
            ascent: m.ascent,
            descent: m.descent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurer(catalog: &Catalog) -> ContentMeasurer<'_> {
        ContentMeasurer::new(catalog, "E", None).unwrap()
    }

    #[test]
    fn text_width_is_exact_product() {
        let catalog = Catalog::builtin();
        for (text, lh) in [("TOWN", 1.6), ("Melbourne", 8.0), ("", 2.0), ("Zürich", 1.2)] {
            let m = measure_text(text, "E", lh, &catalog).unwrap();
            assert_eq!(m.width, text.chars().count() as f64 * lh * 0.6);
            assert_eq!(m.ascent, lh * 0.75);
            assert_eq!(m.descent, lh * 0.25);
            assert_eq!(m.height, lh);
        }
    }

    #[test]
    fn unknown_series_is_a_configuration_error() {
        let catalog = Catalog::builtin();
        let err = measure_text("A", "Q", 1.0, &catalog).unwrap_err();
        assert!(err.is_configuration());
        assert!(ContentMeasurer::new(&catalog, "Q", None).is_err());
    }

    #[test]
    fn icon_keeps_native_aspect_ratio() {
        let catalog = Catalog::builtin();
        let m = measure_icon("arrow-left-std", 1.6, &catalog).unwrap();
        assert_eq!(m.height, 1.6);
        assert_eq!(m.width, 100.0 / 80.0 * 1.6);
        assert_eq!(m.baseline_offset, 0.8);
        assert!(measure_icon("arrow-down-std", 1.6, &catalog).is_err());
    }

    #[test]
    fn shield_widens_for_long_labels_only() {
        let catalog = Catalog::builtin();
        let m = measurer(&catalog);

        let short = m.icon("shield-route", 1.0, Some("M1")).unwrap();
        // 2 * 0.6 * 0.6 + 0.4 = 1.12 > native 0.8
        assert!((short.bounds.w - 1.12).abs() < 1e-12);

        let none = m.icon("shield-route", 1.0, None).unwrap();
        assert_eq!(none.bounds.w, 0.8);

        let tiny = m.icon("shield-route", 10.0, Some("1")).unwrap();
        assert_eq!(tiny.bounds.w, 8.0);
        assert_eq!(tiny.label.as_deref(), Some("1"));
    }

    #[test]
    fn name_badge_adds_inflation_and_padding() {
        let catalog = Catalog::builtin();
        let b = measurer(&catalog).name_badge("AB", 1.0, 0.1);
        assert_eq!(b.text_width, 2.0 * 1.0 * 0.6 * 1.1);
        assert_eq!(b.bounds.w, b.text_width + 0.25);
        assert_eq!(b.bounds.h, 1.0 + 0.2);
        assert_eq!(b.ascent, 0.75);
    }

    #[test]
    fn number_badge_is_bare_text() {
        let catalog = Catalog::builtin();
        let b = measurer(&catalog).number_badge("A1", 1.6);
        assert_eq!(b.bounds.w, 2.0 * 1.6 * 0.6);
        assert_eq!(b.bounds.h, 1.6);
        assert_eq!(
            ContentBox::NumberBadge(b.clone()).bounds(),
            HBox::new(b.text_width, 1.6)
        );
    }
}
