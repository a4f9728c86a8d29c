use serde::{Deserialize, Serialize};
use signwright_core::{Direction, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub x: f64,
    /// Baseline.
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub font_series: String,
    /// Always in h-units, also after projection.
    #[serde(rename = "ascent_h")]
    pub ascent_h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameBadgeItem {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub text: String,
    pub font_size: f64,
    pub font_series: String,
    #[serde(rename = "ascent_h")]
    pub ascent_h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowItem {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub icon_id: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldItem {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub icon_id: String,
    pub label: String,
}

/// A flattened, absolutely positioned drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "camelCase")]
pub enum RenderItem {
    Text(TextItem),
    RoadName(NameBadgeItem),
    /// Drawn as bare baseline text; no badge rectangle.
    RoadNumber(TextItem),
    Arrow(ArrowItem),
    Shield(ShieldItem),
}

impl RenderItem {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderItem::Text(_) => "text",
            RenderItem::RoadName(_) => "roadName",
            RenderItem::RoadNumber(_) => "roadNumber",
            RenderItem::Arrow(_) => "arrow",
            RenderItem::Shield(_) => "shield",
        }
    }

    pub fn position(&self) -> (f64, f64) {
        match self {
            RenderItem::Text(i) | RenderItem::RoadNumber(i) => (i.x, i.y),
            RenderItem::RoadName(i) => (i.x, i.y),
            RenderItem::Arrow(i) => (i.x, i.y),
            RenderItem::Shield(i) => (i.x, i.y),
        }
    }

    /// `(w, h)` for box-shaped items.
    pub fn size(&self) -> Option<(f64, f64)> {
        match self {
            RenderItem::Text(_) | RenderItem::RoadNumber(_) => None,
            RenderItem::RoadName(i) => Some((i.w, i.h)),
            RenderItem::Arrow(i) => Some((i.w, i.h)),
            RenderItem::Shield(i) => Some((i.w, i.h)),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut out = self.clone();
        match &mut out {
            RenderItem::Text(i) | RenderItem::RoadNumber(i) => {
                i.x += dx;
                i.y += dy;
            }
            RenderItem::RoadName(i) => {
                i.x += dx;
                i.y += dy;
            }
            RenderItem::Arrow(i) => {
                i.x += dx;
                i.y += dy;
            }
            RenderItem::Shield(i) => {
                i.x += dx;
                i.y += dy;
            }
        }
        out
    }

    /// Applies `f` to every coordinate, size and font size. `ascent_h` is left untouched.
    pub fn map_geometry(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut out = self.clone();
        match &mut out {
            RenderItem::Text(i) | RenderItem::RoadNumber(i) => {
                i.x = f(i.x);
                i.y = f(i.y);
                i.font_size = f(i.font_size);
            }
            RenderItem::RoadName(i) => {
                i.x = f(i.x);
                i.y = f(i.y);
                i.w = f(i.w);
                i.h = f(i.h);
                i.font_size = f(i.font_size);
            }
            RenderItem::Arrow(i) => {
                i.x = f(i.x);
                i.y = f(i.y);
                i.w = f(i.w);
                i.h = f(i.h);
            }
            RenderItem::Shield(i) => {
                i.x = f(i.x);
                i.y = f(i.y);
                i.w = f(i.w);
                i.h = f(i.h);
            }
        }
        out
    }
}

/// Where one panel landed on the combined board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPlacement {
    pub w: f64,
    pub h: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Diagnostics of a layout pass. Unit-suffixed keys keep their snake-case names in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMeta {
    pub sign_type: String,
    pub panel_count: usize,
    pub dominant_panel_index: usize,
    #[serde(rename = "panel_spacing_h")]
    pub panel_spacing_h: f64,
    #[serde(rename = "panel_spacing_px")]
    pub panel_spacing_px: f64,
    #[serde(rename = "letter_height_h")]
    pub letter_height_h: f64,
    #[serde(rename = "letter_height_px")]
    pub letter_height_px: f64,
    #[serde(rename = "board_w_h")]
    pub board_w_h: f64,
    #[serde(rename = "board_h_h")]
    pub board_h_h: f64,
    #[serde(rename = "board_w_px")]
    pub board_w_px: f64,
    #[serde(rename = "board_h_px")]
    pub board_h_px: f64,
    pub px_per_h: f64,
    pub board_count: usize,
    pub equal_width: bool,
    pub individual_boards: Vec<PanelPlacement>,
}

/// The pipeline output: board size and items in pixel space plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutModel {
    pub board: Size,
    pub items: Vec<RenderItem>,
    pub meta: LayoutMeta,
}
