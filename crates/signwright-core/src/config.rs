//! Template parameters, engine parameters, sign documents and presets.
//!
//! All template values are in h-units unless they are colors. Field names follow the sign
//! document JSON format, so documents written by other tools load unchanged.

use crate::metrics::{DEFAULT_FONT_SERIES, FontMetrics};
use crate::model::{Direction, PanelInput};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateParams {
    pub letter_height_h: f64,
    pub line_spacing_h: f64,
    pub group_spacing_h: f64,
    pub board_pad_h: f64,
    pub panel_spacing_h: f64,
    pub corner_radius_h: f64,
    pub border_h: f64,

    #[serde(rename = "roadName_letter_height_h")]
    pub road_name_letter_height_h: f64,
    #[serde(rename = "roadName_bg_color")]
    pub road_name_bg_color: String,
    #[serde(rename = "roadName_text_color")]
    pub road_name_text_color: String,
    #[serde(rename = "roadName_pad_h")]
    pub road_name_pad_h: f64,
    #[serde(rename = "roadName_corner_radius_h")]
    pub road_name_corner_radius_h: f64,

    #[serde(rename = "roadNumber_letter_height_h")]
    pub road_number_letter_height_h: f64,
    #[serde(rename = "roadNumber_bg_color")]
    pub road_number_bg_color: String,
    #[serde(rename = "roadNumber_text_color")]
    pub road_number_text_color: String,
    #[serde(rename = "roadNumber_pad_h")]
    pub road_number_pad_h: f64,
    #[serde(rename = "roadNumber_corner_radius_h")]
    pub road_number_corner_radius_h: f64,

    pub font_series: String,
}

impl Default for TemplateParams {
    // AS 1742.6 proportions at 1h = 100mm.
    fn default() -> Self {
        Self {
            letter_height_h: 1.6,
            line_spacing_h: 0.15,
            group_spacing_h: 0.2,
            board_pad_h: 0.2,
            panel_spacing_h: 0.06,
            corner_radius_h: 0.1,
            border_h: 0.04,

            road_name_letter_height_h: 1.2,
            road_name_bg_color: "#ffffff".to_string(),
            road_name_text_color: "#000000".to_string(),
            road_name_pad_h: 0.1,
            road_name_corner_radius_h: 0.06,

            road_number_letter_height_h: 1.6,
            road_number_bg_color: "#ffd700".to_string(),
            road_number_text_color: "#000000".to_string(),
            road_number_pad_h: 0.06,
            road_number_corner_radius_h: 0.04,

            font_series: DEFAULT_FONT_SERIES.to_string(),
        }
    }
}

impl TemplateParams {
    pub fn with_preset(mut self, preset: TemplatePreset) -> Self {
        preset.apply(&mut self);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePreset {
    Standard,
    Compact,
    Spacious,
}

impl TemplatePreset {
    pub const ALL: [TemplatePreset; 3] = [
        TemplatePreset::Standard,
        TemplatePreset::Compact,
        TemplatePreset::Spacious,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplatePreset::Standard => "standard",
            TemplatePreset::Compact => "compact",
            TemplatePreset::Spacious => "spacious",
        }
    }

    /// Overrides letter height, line spacing, group spacing and board pad.
    pub fn apply(self, template: &mut TemplateParams) {
        let (letter, line, group, pad) = match self {
            TemplatePreset::Standard => (8.0, 0.75, 1.0, 1.0),
            TemplatePreset::Compact => (7.0, 0.5, 0.75, 0.75),
            TemplatePreset::Spacious => (10.0, 1.0, 1.5, 1.5),
        };
        template.letter_height_h = letter;
        template.line_spacing_h = line;
        template.group_spacing_h = group;
        template.board_pad_h = pad;
    }
}

impl FromStr for TemplatePreset {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            "spacious" => Ok(Self::Spacious),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapMode {
    None,
    #[default]
    Round,
    HalfPixel,
}

impl FromStr for SnapMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "round" => Ok(Self::Round),
            "half-pixel" | "half" => Ok(Self::HalfPixel),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineParams {
    pub px_per_h: f64,
    pub snap_mode: SnapMode,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            px_per_h: 100.0,
            snap_mode: SnapMode::Round,
        }
    }
}

pub const PX_PER_H_PRESETS: [f64; 6] = [20.0, 25.0, 30.0, 35.0, 40.0, 50.0];

pub mod colors {
    pub const SIGN_GREEN: &str = "#0B6B4D";
    pub const SIGN_WHITE: &str = "#FFFFFF";
    pub const SIGN_YELLOW: &str = "#FFD700";
    pub const SIGN_BLACK: &str = "#000000";
    pub const SIGN_BLUE: &str = "#0066CC";
    pub const SIGN_BROWN: &str = "#654321";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignType {
    #[default]
    #[serde(rename = "G1-1")]
    G1_1,
    #[serde(rename = "G1-2")]
    G1_2,
    G2,
    G3,
}

impl SignType {
    pub fn as_str(self) -> &'static str {
        match self {
            SignType::G1_1 => "G1-1",
            SignType::G1_2 => "G1-2",
            SignType::G2 => "G2",
            SignType::G3 => "G3",
        }
    }

    /// The sign family laid out for a given panel count.
    pub fn for_panel_count(count: usize) -> Result<Self> {
        match count {
            2 => Ok(SignType::G1_1),
            3 => Ok(SignType::G1_2),
            count => Err(Error::UnsupportedPanelCount { count }),
        }
    }
}

/// A complete sign description as exchanged with editors and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sign_type: SignType,
    pub panels: Vec<PanelInput>,
    #[serde(default)]
    pub template: TemplateParams,
    #[serde(default)]
    pub engine: EngineParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_metrics: Option<FontMetrics>,
}

impl SignDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn example_g1_1() -> Self {
        Self {
            name: "G1-1 example".to_string(),
            sign_type: SignType::G1_1,
            panels: vec![
                PanelInput::new(["Plumpton"], Direction::Left)
                    .with_road_name("SALTASH HWY")
                    .with_shield("M1"),
                PanelInput::new(["Hawker"], Direction::Right).with_road_number("A85"),
            ],
            template: TemplateParams::default(),
            engine: EngineParams::default(),
            font_metrics: None,
        }
    }

    pub fn example_g1_2() -> Self {
        Self {
            name: "G1-2 example".to_string(),
            sign_type: SignType::G1_2,
            panels: vec![
                PanelInput::new(["Melbourne", "City Centre"], Direction::Left)
                    .with_road_name("WESTERN HWY")
                    .with_shield("M8"),
                PanelInput::new(["Airport"], Direction::Forward),
                PanelInput::new(["Sydney"], Direction::Right).with_road_number("A1"),
            ],
            template: TemplateParams::default(),
            engine: EngineParams::default(),
            font_metrics: None,
        }
    }
}
