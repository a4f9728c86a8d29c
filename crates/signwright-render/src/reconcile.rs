//! Multi-panel reconciliation: dominant-panel width sharing, row justification and vertical
//! stacking of panel boards into one sign.

use crate::measure::ContentBox;
use crate::model::{
    ArrowItem, NameBadgeItem, PanelPlacement, RenderItem, ShieldItem, TextItem,
};
use crate::panel::{LayoutRow, PanelLayout, RowElement};
use signwright_core::{Error, HAlign, Result, Size, TemplateParams};

/// A board with items positioned relative to its own top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelBoard {
    pub board: Size,
    pub items: Vec<RenderItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardStack {
    pub board: Size,
    pub items: Vec<RenderItem>,
    pub spacing: f64,
    pub equal_width: bool,
    pub placements: Vec<PanelPlacement>,
}

/// Stacks boards top to bottom with `spacing` between them.
///
/// With `equal_width` every board is centered within the widest one; otherwise boards keep
/// their left edge at 0. An empty input yields an empty `0x0` stack.
pub fn stack_boards(boards: Vec<PanelBoard>, spacing: f64, equal_width: bool) -> BoardStack {
    let max_w = boards.iter().map(|b| b.board.w).fold(0.0, f64::max);

    let mut items = Vec::new();
    let mut placements = Vec::with_capacity(boards.len());
    let mut y = 0.0;
    for (i, board) in boards.iter().enumerate() {
        if i > 0 {
            y += spacing;
        }
        let offset_x = if equal_width {
            (max_w - board.board.w) / 2.0
        } else {
            0.0
        };
        items.extend(board.items.iter().map(|item| item.translated(offset_x, y)));
        placements.push(PanelPlacement {
            w: board.board.w,
            h: board.board.h,
            offset_x,
            offset_y: y,
        });
        y += board.board.h;
    }

    BoardStack {
        board: Size { w: max_w, h: y },
        items,
        spacing,
        equal_width,
        placements,
    }
}

/// Horizontal start of a row inside the content area.
pub fn row_start_x(row: &LayoutRow, content_area_w: f64, is_dominant: bool) -> f64 {
    if is_dominant {
        return 0.0;
    }
    match row.align {
        HAlign::Left => 0.0,
        HAlign::Right => content_area_w - row.total_width,
        HAlign::Center => (content_area_w - row.total_width) / 2.0,
    }
}

/// Flattens one panel's rows into items relative to a board `board_w` wide.
pub fn items_for_panel(
    panel: &PanelLayout,
    board_w: f64,
    is_dominant: bool,
    template: &TemplateParams,
) -> Vec<RenderItem> {
    let pad = template.board_pad_h;
    let content_area_w = board_w - 2.0 * pad;
    let font_series = &template.font_series;
    let mut items = Vec::new();

    for row in &panel.rows {
        let origin_y = pad + row.y;
        let mut x = pad + row_start_x(row, content_area_w, is_dominant);

        for element in &row.elements {
            let bounds = element.bounds();
            let el_y = origin_y + (row.height - bounds.h) / 2.0;

            match element {
                RowElement::Content(ContentBox::NameBadge(badge)) => {
                    items.push(RenderItem::RoadName(NameBadgeItem {
                        x,
                        y: origin_y,
                        w: bounds.w,
                        h: bounds.h,
                        text: badge.text.clone(),
                        font_size: template.road_name_letter_height_h,
                        font_series: font_series.clone(),
                        ascent_h: badge.ascent,
                    }))
                }
                RowElement::Content(ContentBox::Icon(icon)) => {
                    items.push(RenderItem::Shield(ShieldItem {
                        x,
                        y: el_y,
                        w: bounds.w,
                        h: bounds.h,
                        icon_id: icon.icon_id.clone(),
                        label: icon.label.clone().unwrap_or_default(),
                    }))
                }
                RowElement::Content(ContentBox::NumberBadge(badge)) => {
                    items.push(RenderItem::RoadNumber(TextItem {
                        x,
                        y: el_y + badge.ascent,
                        text: badge.text.clone(),
                        font_size: template.road_number_letter_height_h,
                        font_series: font_series.clone(),
                        ascent_h: badge.ascent,
                    }))
                }
                RowElement::Content(ContentBox::Text(line)) => {
                    items.push(RenderItem::Text(TextItem {
                        x,
                        y: el_y + line.ascent,
                        text: line.text.clone(),
                        font_size: line.letter_h,
                        font_series: font_series.clone(),
                        ascent_h: line.ascent,
                    }))
                }
                RowElement::Destinations(group) => {
                    items.extend(group.lines.iter().map(|line| {
                        RenderItem::Text(TextItem {
                            x: x + line.bounds.x,
                            y: el_y + line.bounds.y + line.ascent,
                            text: line.text.clone(),
                            font_size: template.letter_height_h,
                            font_series: font_series.clone(),
                            ascent_h: line.ascent,
                        })
                    }))
                }
                RowElement::Arrow { icon, direction } => items.push(RenderItem::Arrow(ArrowItem {
                    x,
                    y: el_y,
                    w: bounds.w,
                    h: bounds.h,
                    icon_id: icon.icon_id.clone(),
                    direction: *direction,
                })),
            }

            x += bounds.w + template.group_spacing_h;
        }
    }

    items
}

/// The reconciled sign in h-space.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledSign {
    pub dominant_index: usize,
    pub stack: BoardStack,
}

/// First index of the widest board.
pub fn dominant_panel(panels: &[PanelLayout]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in panels.iter().enumerate() {
        if best.is_none_or(|(_, w)| p.board.w > w) {
            best = Some((i, p.board.w));
        }
    }
    best.map(|(i, _)| i)
}

/// Reconciles 2 or 3 composed panels into one sign.
pub fn reconcile_panels(
    panels: &[PanelLayout],
    template: &TemplateParams,
) -> Result<ReconciledSign> {
    if !(2..=3).contains(&panels.len()) {
        return Err(Error::UnsupportedPanelCount {
            count: panels.len(),
        });
    }
    let Some(dominant_index) = dominant_panel(panels) else {
        return Err(Error::UnsupportedPanelCount { count: 0 });
    };
    let dominant_w = panels[dominant_index].board.w;
    tracing::debug!(dominant_index, dominant_w, "reconciling panels");

    let boards = panels
        .iter()
        .enumerate()
        .map(|(i, panel)| PanelBoard {
            board: Size {
                w: dominant_w,
                h: panel.board.h,
            },
            items: items_for_panel(panel, dominant_w, i == dominant_index, template),
        })
        .collect();

    Ok(ReconciledSign {
        dominant_index,
        stack: stack_boards(boards, template.panel_spacing_h, true),
    })
}
