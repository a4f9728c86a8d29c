use crate::geom::{HAlign, HBox};
use crate::metrics::{ICON_ARROW_FORWARD, ICON_ARROW_LEFT, ICON_ARROW_RIGHT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn arrow_icon_id(self) -> &'static str {
        match self {
            Direction::Forward => ICON_ARROW_FORWARD,
            Direction::Left => ICON_ARROW_LEFT,
            Direction::Right => ICON_ARROW_RIGHT,
        }
    }

    /// Row alignment before multi-panel reconciliation.
    pub fn default_row_align(self) -> HAlign {
        match self {
            Direction::Forward => HAlign::Center,
            Direction::Left => HAlign::Left,
            Direction::Right => HAlign::Right,
        }
    }

    /// Forward and left signs lead with the arrow; right signs end with it.
    pub fn arrow_leads(self) -> bool {
        !matches!(self, Direction::Right)
    }
}

/// The route-marker selector as written in sign documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMarkerKind {
    Shield,
    Number,
    #[default]
    None,
}

/// A resolved route marker; blank values resolve to [`RouteMarker::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMarker<'a> {
    None,
    Number(&'a str),
    Shield(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Per-group alignment overrides. Carried through documents; the composer does not apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignOverride {
    #[serde(default)]
    pub center_group: Option<Side>,
    #[serde(default)]
    pub road_number: Option<Side>,
    #[serde(default)]
    pub arrow: Option<Side>,
}

impl AlignOverride {
    pub fn is_empty(&self) -> bool {
        self.center_group.is_none() && self.road_number.is_none() && self.arrow.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelInput {
    #[serde(default)]
    pub road_name: String,
    #[serde(default)]
    pub road_number_type: RouteMarkerKind,
    #[serde(default)]
    pub road_number: String,
    #[serde(default)]
    pub shield_label: String,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_override: Option<AlignOverride>,
}

impl PanelInput {
    pub fn new(destinations: impl IntoIterator<Item = impl Into<String>>, direction: Direction) -> Self {
        Self {
            destinations: destinations.into_iter().map(Into::into).collect(),
            direction,
            ..Default::default()
        }
    }

    pub fn with_road_name(mut self, road_name: impl Into<String>) -> Self {
        self.road_name = road_name.into();
        self
    }

    pub fn with_road_number(mut self, number: impl Into<String>) -> Self {
        self.road_number_type = RouteMarkerKind::Number;
        self.road_number = number.into();
        self
    }

    pub fn with_shield(mut self, label: impl Into<String>) -> Self {
        self.road_number_type = RouteMarkerKind::Shield;
        self.shield_label = label.into();
        self
    }

    pub fn road_name(&self) -> Option<&str> {
        non_blank(&self.road_name)
    }

    /// Destinations that are not blank after trimming, in input order.
    pub fn valid_destinations(&self) -> impl Iterator<Item = &str> {
        self.destinations.iter().filter_map(|d| non_blank(d))
    }

    pub fn route_marker(&self) -> RouteMarker<'_> {
        match self.road_number_type {
            RouteMarkerKind::Number => non_blank(&self.road_number)
                .map(RouteMarker::Number)
                .unwrap_or(RouteMarker::None),
            RouteMarkerKind::Shield => non_blank(&self.shield_label)
                .map(RouteMarker::Shield)
                .unwrap_or(RouteMarker::None),
            RouteMarkerKind::None => RouteMarker::None,
        }
    }
}

// Blank means empty after trimming; the untrimmed value is what gets measured.
fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Text,
    RoadName,
    RoadNumber,
    Shield,
    Arrow,
}

impl ElementType {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::RoadName => "roadName",
            ElementType::RoadNumber => "roadNumber",
            ElementType::Shield => "shield",
            ElementType::Arrow => "arrow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_series: Option<String>,
    #[serde(default, rename = "letter_h", skip_serializing_if = "Option::is_none")]
    pub letter_h: Option<f64>,
    #[serde(default, rename = "pad_h", skip_serializing_if = "Option::is_none")]
    pub pad_h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// A freely positioned element of a manually edited sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    #[serde(default)]
    pub config: ElementConfig,
    #[serde(rename = "box")]
    pub bounds: HBox,
}

impl PlacedElement {
    pub fn new(id: impl Into<String>, kind: ElementType, bounds: HBox) -> Self {
        Self {
            id: id.into(),
            kind,
            config: ElementConfig::default(),
            bounds,
        }
    }
}
