//! Single-panel composition: an optional road-name banner row above a main row of
//! arrow, route marker and destination stack.

use crate::measure::{ContentBox, ContentMeasurer, IconBox, TextBox};
use signwright_core::geom::{board_size, stack_horizontal, stack_vertical};
use signwright_core::metrics::ICON_SHIELD_ROUTE;
use signwright_core::{
    Direction, Error, HAlign, HBox, PanelInput, Result, RouteMarker, Size, TemplateParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    RoadName,
    Main,
}

/// Destination lines stacked with line spacing. Line boxes are relative to the group.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationGroup {
    pub bounds: HBox,
    pub lines: Vec<TextBox>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowElement {
    /// A single measured box: road-name banner, shield, road-number badge or text run.
    Content(ContentBox),
    Destinations(DestinationGroup),
    Arrow { icon: IconBox, direction: Direction },
}

impl RowElement {
    pub fn bounds(&self) -> HBox {
        match self {
            RowElement::Content(c) => c.bounds(),
            RowElement::Destinations(g) => g.bounds,
            RowElement::Arrow { icon, .. } => icon.bounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub kind: RowKind,
    pub elements: Vec<RowElement>,
    pub total_width: f64,
    pub height: f64,
    pub align: HAlign,
    /// Offset from the top of the panel content area.
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub board: Size,
    pub rows: Vec<LayoutRow>,
    pub max_row_width: f64,
    pub direction: Direction,
}

fn row(kind: RowKind, elements: Vec<RowElement>, gap: f64, align: HAlign) -> LayoutRow {
    let boxes: Vec<HBox> = elements.iter().map(RowElement::bounds).collect();
    let stack = stack_horizontal(&boxes, gap);
    LayoutRow {
        kind,
        elements,
        total_width: stack.w,
        height: stack.h,
        align,
        y: 0.0,
    }
}

/// Composes one panel. Fails when no destination survives trimming.
pub fn compose_panel(
    input: &PanelInput,
    template: &TemplateParams,
    measurer: &ContentMeasurer<'_>,
) -> Result<PanelLayout> {
    let direction = input.direction;
    let mut rows = Vec::with_capacity(2);

    if let Some(road_name) = input.road_name() {
        let badge = measurer.name_badge(
            road_name,
            template.road_name_letter_height_h,
            template.road_name_pad_h,
        );
        rows.push(row(
            RowKind::RoadName,
            vec![RowElement::Content(ContentBox::NameBadge(badge))],
            template.group_spacing_h,
            HAlign::Center,
        ));
    }

    let lines: Vec<TextBox> = input
        .valid_destinations()
        .map(|d| measurer.text(d, template.letter_height_h))
        .collect();
    if lines.is_empty() {
        return Err(Error::NoDestinations { panel: 0 });
    }
    let line_boxes: Vec<HBox> = lines.iter().map(|l| l.bounds).collect();
    let stack = stack_vertical(&line_boxes, template.line_spacing_h);
    let destinations = DestinationGroup {
        bounds: HBox::new(stack.w, stack.h),
        lines: lines
            .into_iter()
            .zip(stack.children)
            .map(|(line, bounds)| TextBox { bounds, ..line })
            .collect(),
    };

    let marker = match input.route_marker() {
        RouteMarker::None => None,
        RouteMarker::Number(number) => Some(ContentBox::NumberBadge(
            measurer.number_badge(number, template.road_number_letter_height_h),
        )),
        RouteMarker::Shield(label) => Some(ContentBox::Icon(measurer.icon(
            ICON_SHIELD_ROUTE,
            template.letter_height_h,
            Some(label),
        )?)),
    };

    let arrow = RowElement::Arrow {
        icon: measurer.icon(direction.arrow_icon_id(), template.letter_height_h, None)?,
        direction,
    };

    if input.align_override.is_some_and(|o| !o.is_empty()) {
        tracing::trace!(
            direction = direction.as_str(),
            "alignment override present; rows keep their direction-based alignment"
        );
    }

    let mut main = Vec::with_capacity(3);
    if direction.arrow_leads() {
        main.push(arrow);
        main.extend(marker.map(RowElement::Content));
        main.push(RowElement::Destinations(destinations));
    } else {
        main.push(RowElement::Destinations(destinations));
        main.extend(marker.map(RowElement::Content));
        main.push(arrow);
    }
    rows.push(row(
        RowKind::Main,
        main,
        template.group_spacing_h,
        direction.default_row_align(),
    ));

    let row_boxes: Vec<HBox> = rows
        .iter()
        .map(|r| HBox::new(r.total_width, r.height))
        .collect();
    let stacked = stack_vertical(&row_boxes, template.line_spacing_h);
    for (r, placed) in rows.iter_mut().zip(&stacked.children) {
        r.y = placed.y;
    }

    let board = board_size(stacked.w, stacked.h, template.board_pad_h);
    tracing::debug!(
        direction = direction.as_str(),
        rows = rows.len(),
        board_w = board.w,
        board_h = board.h,
        "composed panel"
    );

    Ok(PanelLayout {
        board,
        rows,
        max_row_width: stacked.w,
        direction,
    })
}
