#![forbid(unsafe_code)]

//! Layout engine and SVG renderer for road direction signs.
//!
//! The pipeline is measurement, per-panel composition, multi-panel reconciliation and pixel
//! projection; [`svg::render_svg`] turns the resulting [`LayoutModel`] into markup. The
//! [`manual`] module is independent of the pipeline and works on freely placed elements.

pub mod manual;
pub mod measure;
pub mod model;
pub mod panel;
pub mod project;
pub mod reconcile;
pub mod svg;

use crate::measure::ContentMeasurer;
use crate::model::{LayoutMeta, LayoutModel};
use crate::panel::compose_panel;
use crate::project::{project_items, project_size, snap_model};
use crate::reconcile::reconcile_panels;
use crate::svg::SvgRenderOptions;
use signwright_core::{Catalog, FontMetrics, PanelInput, SignDocument, SignType, TemplateParams};
use std::sync::Arc;

pub use signwright_core::{Error, Result};

#[derive(Clone)]
pub struct LayoutOptions {
    pub catalog: Arc<Catalog>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            catalog: Catalog::shared(),
        }
    }
}

impl std::fmt::Debug for LayoutOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutOptions").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub panels: Vec<PanelInput>,
    pub template: TemplateParams,
    pub px_per_h: f64,
    /// Replaces the catalog metrics of `template.font_series` for this pass.
    pub font_metrics: Option<FontMetrics>,
}

impl LayoutParams {
    pub fn from_document(doc: &SignDocument) -> Self {
        Self {
            panels: doc.panels.clone(),
            template: doc.template.clone(),
            px_per_h: doc.engine.px_per_h,
            font_metrics: doc.font_metrics,
        }
    }
}

/// Runs the full pipeline for 2 or 3 panels. No pixel snapping is applied.
///
/// `px_per_h` must be finite and greater than zero.
pub fn compute_layout(params: &LayoutParams, options: &LayoutOptions) -> Result<LayoutModel> {
    let sign_type = SignType::for_panel_count(params.panels.len())?;
    if !(params.px_per_h.is_finite() && params.px_per_h > 0.0) {
        return Err(Error::InvalidScale {
            px_per_h: params.px_per_h,
        });
    }
    let template = &params.template;
    let measurer = ContentMeasurer::new(
        options.catalog.as_ref(),
        &template.font_series,
        params.font_metrics.as_ref(),
    )?;

    let panels = params
        .panels
        .iter()
        .enumerate()
        .map(|(i, panel)| compose_panel(panel, template, &measurer).map_err(|e| e.with_panel(i)))
        .collect::<Result<Vec<_>>>()?;

    let sign = reconcile_panels(&panels, template)?;
    let px = params.px_per_h;
    let stack = sign.stack;
    let board_px = project_size(stack.board, px);

    let meta = LayoutMeta {
        sign_type: sign_type.as_str().to_string(),
        panel_count: panels.len(),
        dominant_panel_index: sign.dominant_index,
        panel_spacing_h: stack.spacing,
        panel_spacing_px: stack.spacing * px,
        letter_height_h: template.letter_height_h,
        letter_height_px: template.letter_height_h * px,
        board_w_h: stack.board.w,
        board_h_h: stack.board.h,
        board_w_px: board_px.w,
        board_h_px: board_px.h,
        px_per_h: px,
        board_count: stack.placements.len(),
        equal_width: stack.equal_width,
        individual_boards: stack.placements,
    };

    tracing::debug!(
        sign_type = sign_type.as_str(),
        board_w_px = board_px.w,
        board_h_px = board_px.h,
        items = stack.items.len(),
        "computed layout"
    );

    Ok(LayoutModel {
        board: board_px,
        items: project_items(&stack.items, px),
        meta,
    })
}

/// Lays out a sign document with its own template, scale and font metrics.
pub fn layout_document(doc: &SignDocument, options: &LayoutOptions) -> Result<LayoutModel> {
    compute_layout(&LayoutParams::from_document(doc), options)
}

/// [`layout_document`] followed by the document's snap mode.
pub fn layout_document_snapped(doc: &SignDocument, options: &LayoutOptions) -> Result<LayoutModel> {
    let model = layout_document(doc, options)?;
    Ok(snap_model(&model, doc.engine.snap_mode))
}

/// [`compute_layout`] followed by [`svg::render_svg`].
pub fn generate_svg(
    params: &LayoutParams,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> Result<String> {
    let model = compute_layout(params, layout_options)?;
    Ok(svg::render_svg(&model, svg_options))
}
