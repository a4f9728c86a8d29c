#![forbid(unsafe_code)]

//! Sign content model, h-space geometry and lookup tables for `signwright`.
//!
//! Everything here is plain data plus pure functions; layout and rendering live in
//! `signwright-render`.

pub mod config;
pub mod error;
pub mod geom;
pub mod metrics;
pub mod model;

pub use config::{
    EngineParams, PX_PER_H_PRESETS, SignDocument, SignType, SnapMode, TemplateParams,
    TemplatePreset,
};
pub use error::{Error, Result};
pub use geom::{Alignment, HAlign, HBox, Size, Stack, VAlign};
pub use metrics::{BaselineAnchor, Catalog, FontMetrics, IconSpec};
pub use model::{
    AlignOverride, Direction, ElementConfig, ElementType, PanelInput, PlacedElement, RouteMarker,
    RouteMarkerKind, Side,
};

#[cfg(test)]
mod tests;
