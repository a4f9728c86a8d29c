//! Assistance for manually placed elements: spacing checks, alignment hints, board sizing and
//! conversion of an automatic layout into placed elements.
//!
//! Nothing here fails. Elements whose boxes are not well formed (non-finite values or
//! non-positive sizes) are skipped.

use crate::model::{LayoutModel, RenderItem};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use signwright_core::geom::align;
use signwright_core::{
    Alignment, ElementConfig, ElementType, HAlign, HBox, PlacedElement, Size, VAlign,
};

pub const DEFAULT_MIN_SPACING_H: f64 = 0.15;
pub const DEFAULT_ALIGNMENT_TOLERANCE_H: f64 = 0.1;
pub const MANUAL_BOARD_PAD_H: f64 = 0.3;
pub const MANUAL_BOARD_MIN: Size = Size { w: 10.0, h: 5.0 };
/// Smallest size an element converted from a layout may have.
pub const MIN_ELEMENT_SIZE_H: f64 = 0.1;

/// Minimum gaps keyed by `"{typeA}-{typeB}-{axis}"` with axis `h` or `v`.
pub type SpacingRules = IndexMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn key_suffix(self) -> &'static str {
        match self {
            Axis::Horizontal => "h",
            Axis::Vertical => "v",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingViolation {
    pub elem1_id: String,
    pub elem2_id: String,
    pub current_spacing: f64,
    pub min_required: f64,
    pub direction: Axis,
}

/// Minimum gap for a pair of element types.
///
/// Rules match in either order. When both `a-b` and `b-a` are present the larger one wins;
/// `min_spacing(a, b)` always equals `min_spacing(b, a)`.
pub fn min_spacing(rules: &SpacingRules, a: ElementType, b: ElementType, axis: Axis) -> f64 {
    let suffix = axis.key_suffix();
    let forward = rules
        .get(&format!("{}-{}-{suffix}", a.as_str(), b.as_str()))
        .copied();
    let reverse = rules
        .get(&format!("{}-{}-{suffix}", b.as_str(), a.as_str()))
        .copied();
    match (forward, reverse) {
        (Some(f), Some(r)) => f.max(r),
        (Some(v), None) | (None, Some(v)) => v,
        (None, None) => DEFAULT_MIN_SPACING_H,
    }
}

fn well_formed(elements: &[PlacedElement]) -> impl Iterator<Item = &PlacedElement> {
    elements.iter().filter(|el| {
        let ok = el.bounds.is_well_formed();
        if !ok {
            tracing::trace!(id = %el.id, "skipping malformed element");
        }
        ok
    })
}

/// Flags every pair whose gap on an axis is non-negative but below the minimum.
pub fn validate_spacing(elements: &[PlacedElement], rules: &SpacingRules) -> Vec<SpacingViolation> {
    let elements: Vec<&PlacedElement> = well_formed(elements).collect();
    let mut violations = Vec::new();
    let mut minima: FxHashMap<(ElementType, ElementType), [f64; 2]> = FxHashMap::default();

    for (i, a) in elements.iter().enumerate() {
        for b in &elements[i + 1..] {
            let (ab, bb) = (&a.bounds, &b.bounds);
            let [min_h, min_v] = *minima.entry((a.kind, b.kind)).or_insert_with(|| {
                [
                    min_spacing(rules, a.kind, b.kind, Axis::Horizontal),
                    min_spacing(rules, a.kind, b.kind, Axis::Vertical),
                ]
            });
            let gaps = [
                (Axis::Horizontal, (bb.x - ab.right()).max(ab.x - bb.right()), min_h),
                (Axis::Vertical, (bb.y - ab.bottom()).max(ab.y - bb.bottom()), min_v),
            ];
            for (axis, gap, min) in gaps {
                if gap >= 0.0 && gap < min {
                    violations.push(SpacingViolation {
                        elem1_id: a.id.clone(),
                        elem2_id: b.id.clone(),
                        current_spacing: gap,
                        min_required: min,
                        direction: axis,
                    });
                }
            }
        }
    }

    violations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentAnchor {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentLine {
    /// Only vertical guide lines are detected.
    #[serde(rename = "type")]
    pub orientation: Axis,
    pub position: f64,
    pub element_ids: Vec<String>,
    pub alignment_point: AlignmentAnchor,
}

/// Pairs whose left edges, right edges or horizontal centers are within `tolerance`.
pub fn detect_alignment_opportunities(
    elements: &[PlacedElement],
    tolerance: f64,
) -> Vec<AlignmentLine> {
    let elements: Vec<&PlacedElement> = well_formed(elements).collect();
    let mut lines = Vec::new();

    for (i, a) in elements.iter().enumerate() {
        for b in &elements[i + 1..] {
            let anchors = [
                (AlignmentAnchor::Left, a.bounds.x, b.bounds.x),
                (AlignmentAnchor::Right, a.bounds.right(), b.bounds.right()),
                (
                    AlignmentAnchor::Center,
                    a.bounds.center_x(),
                    b.bounds.center_x(),
                ),
            ];
            for (anchor, pa, pb) in anchors {
                if (pa - pb).abs() < tolerance {
                    lines.push(AlignmentLine {
                        orientation: Axis::Vertical,
                        position: pa,
                        element_ids: vec![a.id.clone(), b.id.clone()],
                        alignment_point: anchor,
                    });
                }
            }
        }
    }

    lines
}

/// Furthest right/bottom extent plus padding, never smaller than `10x5`.
pub fn board_size_for(elements: &[PlacedElement]) -> Size {
    let (max_x, max_y) = well_formed(elements).fold((0.0f64, 0.0f64), |(mx, my), el| {
        (mx.max(el.bounds.right()), my.max(el.bounds.bottom()))
    });
    Size {
        w: (max_x + MANUAL_BOARD_PAD_H).max(MANUAL_BOARD_MIN.w),
        h: (max_y + MANUAL_BOARD_PAD_H).max(MANUAL_BOARD_MIN.h),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualLayout {
    pub elements: Vec<PlacedElement>,
    pub board_size: Size,
}

/// Elements pass through unchanged; only the board is computed.
pub fn compute_manual_layout(elements: Vec<PlacedElement>) -> ManualLayout {
    let board_size = board_size_for(&elements);
    ManualLayout {
        elements,
        board_size,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardEdge {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Moves a box flush with one board edge or centerline; the other axis is kept.
pub fn align_to_board(bounds: &HBox, board: Size, edge: BoardEdge) -> HBox {
    let (h, v) = match edge {
        BoardEdge::Left => (Some(HAlign::Left), None),
        BoardEdge::Center => (Some(HAlign::Center), None),
        BoardEdge::Right => (Some(HAlign::Right), None),
        BoardEdge::Top => (None, Some(VAlign::Top)),
        BoardEdge::Middle => (None, Some(VAlign::Middle)),
        BoardEdge::Bottom => (None, Some(VAlign::Bottom)),
    };
    let aligned = align(
        bounds,
        board,
        Alignment {
            h: h.unwrap_or_default(),
            v: v.unwrap_or_default(),
        },
    );
    HBox {
        x: if h.is_some() { aligned.x } else { bounds.x },
        y: if v.is_some() { aligned.y } else { bounds.y },
        ..*bounds
    }
}

fn fallback_ascent_h(font_size_px: f64, px_per_h: f64) -> f64 {
    font_size_px * 0.75 / px_per_h
}

/// Converts a projected layout into h-space placed elements with ids `el-1`, `el-2`, ...
///
/// Text and road-number baselines become top edges, boxes are clamped to the board and sizes
/// are floored at [`MIN_ELEMENT_SIZE_H`]. Items with NaN geometry are dropped.
pub fn placed_elements_from_model(model: &LayoutModel) -> Vec<PlacedElement> {
    let px = if model.meta.px_per_h > 0.0 {
        model.meta.px_per_h
    } else {
        100.0
    };
    let board_w = model.board.w / px;
    let board_h = model.board.h / px;

    let mut out = Vec::with_capacity(model.items.len());
    for item in &model.items {
        let (kind, config, x_px, y_h, w_px, h_px) = match item {
            RenderItem::Text(t) => {
                let ascent = if t.ascent_h > 0.0 {
                    t.ascent_h
                } else {
                    fallback_ascent_h(t.font_size, px)
                };
                let config = ElementConfig {
                    text: Some(t.text.clone()),
                    font_series: Some(t.font_series.clone()),
                    letter_h: Some(t.font_size / px),
                    ..Default::default()
                };
                let w = t.text.chars().count() as f64 * t.font_size * 0.6;
                (ElementType::Text, config, t.x, t.y / px - ascent, w, t.font_size)
            }
            RenderItem::RoadNumber(t) => {
                let ascent = if t.ascent_h > 0.0 {
                    t.ascent_h
                } else {
                    fallback_ascent_h(t.font_size, px)
                };
                let config = ElementConfig {
                    text: Some(t.text.clone()),
                    letter_h: Some(t.font_size / px),
                    ..Default::default()
                };
                let w = t.text.chars().count() as f64 * t.font_size * 0.7;
                let h = t.font_size * 1.2;
                (ElementType::RoadNumber, config, t.x, t.y / px - ascent, w, h)
            }
            RenderItem::RoadName(b) => {
                let config = ElementConfig {
                    text: Some(b.text.clone()),
                    letter_h: Some(b.font_size / px),
                    ..Default::default()
                };
                (ElementType::RoadName, config, b.x, b.y / px, b.w, b.h)
            }
            RenderItem::Shield(s) => {
                let config = ElementConfig {
                    icon_id: Some(s.icon_id.clone()),
                    label: Some(s.label.clone()),
                    ..Default::default()
                };
                (ElementType::Shield, config, s.x, s.y / px, s.w, s.h)
            }
            RenderItem::Arrow(a) => {
                let config = ElementConfig {
                    icon_id: Some(a.icon_id.clone()),
                    direction: Some(a.direction),
                    ..Default::default()
                };
                (ElementType::Arrow, config, a.x, a.y / px, a.w, a.h)
            }
        };

        let raw = [x_px / px, y_h, w_px / px, h_px / px];
        if raw.iter().any(|v| v.is_nan()) {
            tracing::debug!(kind = item.kind(), "dropping item with NaN geometry");
            continue;
        }
        let [x, y, w, h] = raw;
        let bounds = HBox {
            x: x.min(board_w).max(0.0),
            y: y.min(board_h).max(0.0),
            w: w.min(board_w).max(MIN_ELEMENT_SIZE_H),
            h: h.min(board_h).max(MIN_ELEMENT_SIZE_H),
        };

        let mut element = PlacedElement::new(format!("el-{}", out.len() + 1), kind, bounds);
        element.config = config;
        out.push(element);
    }
    out
}

/// Default size of a newly created element before it is placed.
pub fn preview_size(kind: ElementType, config: &ElementConfig) -> Size {
    let text_len = |fallback: &str, text: Option<&String>| {
        text.map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback)
            .chars()
            .count() as f64
    };
    let letter_h = |fallback: f64| config.letter_h.filter(|v| *v > 0.0).unwrap_or(fallback);

    match kind {
        ElementType::Text => {
            let lh = letter_h(1.6);
            let len = text_len("Text", config.text.as_ref());
            Size {
                w: (len * lh * 0.6).max(1.0),
                h: lh,
            }
        }
        ElementType::RoadName => {
            let lh = letter_h(1.2);
            let pad = config.pad_h.filter(|v| *v > 0.0).unwrap_or(0.15);
            let len = text_len("ROAD NAME", config.text.as_ref());
            Size {
                w: (len * lh * 0.6 + pad * 2.0).max(2.0),
                h: lh + pad * 2.0,
            }
        }
        ElementType::RoadNumber => {
            let lh = letter_h(0.8);
            let len = text_len("A1", config.text.as_ref());
            Size {
                w: (len * lh * 0.7 + 0.2).max(1.2),
                h: lh + 0.2,
            }
        }
        ElementType::Shield => {
            let lh = letter_h(1.0);
            let len = text_len("M1", config.label.as_ref());
            Size {
                w: (len * lh * 0.6 + 0.3).max(1.2),
                h: lh + 0.2,
            }
        }
        ElementType::Arrow => Size { w: 1.2, h: 0.8 },
    }
}
