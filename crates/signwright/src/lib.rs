#![forbid(unsafe_code)]

//! `signwright` lays out and renders road direction signs headlessly.
//!
//! Sign content is described by a [`SignDocument`]; geometry is computed in h-space (one unit is
//! one nominal letter height) and projected to pixels with a single scale factor.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`signwright::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use signwright_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use signwright_render::manual;
    pub use signwright_render::model::{LayoutMeta, LayoutModel, RenderItem};
    pub use signwright_render::project::snap_model;
    pub use signwright_render::svg::{SVG_MIME_TYPE, SvgRenderOptions, to_data_url};
    pub use signwright_render::{LayoutOptions, LayoutParams, compute_layout};

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Layout(#[from] signwright_core::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Lays out a document; with `snap` the document's snap mode is applied afterwards.
    pub fn layout_document_sync(
        doc: &signwright_core::SignDocument,
        layout_options: &LayoutOptions,
        snap: bool,
    ) -> Result<LayoutModel> {
        let model = if snap {
            signwright_render::layout_document_snapped(doc, layout_options)?
        } else {
            signwright_render::layout_document(doc, layout_options)?
        };
        Ok(model)
    }

    /// Synchronous SVG render helper.
    pub fn render_svg_sync(
        doc: &signwright_core::SignDocument,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let model = signwright_render::layout_document(doc, layout_options)?;
        Ok(signwright_render::svg::render_svg(&model, svg_options))
    }

    /// Parses a sign document from JSON and renders it.
    pub fn render_json_sync(
        json: &str,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let doc = signwright_core::SignDocument::from_json_str(json)?;
        render_svg_sync(&doc, layout_options, svg_options)
    }

    /// Bundles layout and SVG options for repeated rendering.
    #[derive(Debug, Clone, Default)]
    pub struct SignRenderer {
        pub layout: LayoutOptions,
        pub svg: SvgRenderOptions,
    }

    impl SignRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_svg_options(mut self, svg: SvgRenderOptions) -> Self {
            self.svg = svg;
            self
        }

        pub fn layout_sync(&self, doc: &signwright_core::SignDocument) -> Result<LayoutModel> {
            layout_document_sync(doc, &self.layout, false)
        }

        pub fn render_svg_sync(&self, doc: &signwright_core::SignDocument) -> Result<String> {
            render_svg_sync(doc, &self.layout, &self.svg)
        }

        pub fn render_json_sync(&self, json: &str) -> Result<String> {
            render_json_sync(json, &self.layout, &self.svg)
        }

        pub fn data_url_sync(&self, doc: &signwright_core::SignDocument) -> Result<String> {
            let model = self.layout_sync(doc)?;
            Ok(to_data_url(&model, &self.svg))
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            doc: &signwright_core::SignDocument,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_png_sync(doc, &self.layout, &self.svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg_sync(
            &self,
            doc: &signwright_core::SignDocument,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_jpeg_sync(doc, &self.layout, &self.svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf_sync(&self, doc: &signwright_core::SignDocument) -> raster::Result<Vec<u8>> {
            raster::render_pdf_sync(doc, &self.layout, &self.svg)
        }
    }
}
