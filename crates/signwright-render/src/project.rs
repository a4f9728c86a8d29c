//! h-space to pixel-space projection and optional pixel snapping.

use crate::model::{LayoutModel, RenderItem};
use signwright_core::{HBox, Size, SnapMode};

pub fn project_size(size: Size, px_per_h: f64) -> Size {
    Size {
        w: size.w * px_per_h,
        h: size.h * px_per_h,
    }
}

/// Scales coordinates, sizes and font sizes by `px_per_h`. No rounding.
pub fn project_items(items: &[RenderItem], px_per_h: f64) -> Vec<RenderItem> {
    items
        .iter()
        .map(|item| item.map_geometry(|v| v * px_per_h))
        .collect()
}

/// `round(value_h * px_per_h * 2) / 2`.
pub fn snap_to_pixel(px_per_h: f64, value_h: f64) -> f64 {
    snap_value(value_h * px_per_h, SnapMode::HalfPixel)
}

/// Converts an h-space box to snapped pixel coordinates.
pub fn box_to_pixels(b: &HBox, px_per_h: f64) -> HBox {
    HBox {
        x: snap_to_pixel(px_per_h, b.x),
        y: snap_to_pixel(px_per_h, b.y),
        w: snap_to_pixel(px_per_h, b.w),
        h: snap_to_pixel(px_per_h, b.h),
    }
}

pub fn snap_value(px: f64, mode: SnapMode) -> f64 {
    match mode {
        SnapMode::None => px,
        SnapMode::Round => px.round(),
        SnapMode::HalfPixel => (px * 2.0).round() / 2.0,
    }
}

/// Snaps the board and every item of an already projected model. `meta` is left as computed.
pub fn snap_model(model: &LayoutModel, mode: SnapMode) -> LayoutModel {
    if mode == SnapMode::None {
        return model.clone();
    }
    LayoutModel {
        board: Size {
            w: snap_value(model.board.w, mode),
            h: snap_value(model.board.h, mode),
        },
        items: model
            .items
            .iter()
            .map(|item| item.map_geometry(|v| snap_value(v, mode)))
            .collect(),
        meta: model.meta.clone(),
    }
}
