pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Font series \"{series}\" not found")]
    UnknownFontSeries { series: String },

    #[error("Icon \"{icon_id}\" not found")]
    UnknownIcon { icon_id: String },

    #[error("Panel {panel}: at least one destination is required")]
    NoDestinations { panel: usize },

    #[error("Unsupported panel count: {count} (expected 2 or 3)")]
    UnsupportedPanelCount { count: usize },

    #[error("Invalid scale: pxPerH must be a positive finite number, got {px_per_h}")]
    InvalidScale { px_per_h: f64 },

    #[error("Sign document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Unknown font series or icon id, or an unusable scale.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownFontSeries { .. } | Error::UnknownIcon { .. } | Error::InvalidScale { .. }
        )
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Error::NoDestinations { .. })
    }

    pub fn is_cardinality(&self) -> bool {
        matches!(self, Error::UnsupportedPanelCount { .. })
    }

    /// Attaches the zero-based panel index to content errors raised by a single-panel call.
    pub fn with_panel(self, index: usize) -> Self {
        match self {
            Error::NoDestinations { .. } => Error::NoDestinations { panel: index },
            other => other,
        }
    }
}
