//! Card payload and visual pose types.

use serde::{Deserialize, Serialize};

use crate::types::CardId;

/// Commercial maturity of the technology on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Piloting with early partners.
    Pilot,
    /// Selling, but early.
    EarlyCommercial,
    /// Established product.
    Mature,
}

impl Stage {
    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pilot => "Pilot",
            Self::EarlyCommercial => "Early Commercial",
            Self::Mature => "Mature",
        }
    }
}

/// One candidate in the deck. Only `id` matters to the deck logic; the
/// rest is display payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    /// Unique key.
    pub id: CardId,
    /// Display name.
    pub name: String,
    /// Technology category.
    pub category: String,
    /// Maturity badge.
    pub stage: Stage,
    /// Long description.
    pub description: String,
    /// Why this card was suggested, if known.
    pub match_reason: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CardItem {
    /// Minimal card with empty display fields.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            stage: Stage::Pilot,
            description: String::new(),
            match_reason: None,
            tags: Vec::new(),
        }
    }
}

/// Visual parameters of the top card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Horizontal offset from the resting position.
    pub x: f64,
    /// Vertical offset from the resting position.
    pub y: f64,
    /// Rotation in degrees, positive clockwise.
    pub rotation_deg: f64,
    /// 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f64,
}

impl Pose {
    /// Resting position: centered, upright, opaque.
    pub const NEUTRAL: Pose = Pose {
        x: 0.0,
        y: 0.0,
        rotation_deg: 0.0,
        opacity: 1.0,
    };

    /// True when every channel matches [`Pose::NEUTRAL`].
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Render hints for a card stacked behind the top card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundLayer {
    /// Depth behind the top card, starting at 1.
    pub depth: usize,
    /// Uniform scale factor.
    pub scale: f64,
    /// Downward offset.
    pub y_offset: f64,
    /// Layer opacity.
    pub opacity: f64,
}

impl BackgroundLayer {
    /// Layer hints for the card `depth` positions behind the top.
    pub fn at_depth(depth: usize) -> Self {
        let d = depth as f64;
        Self {
            depth,
            scale: 1.0 - d * 0.05,
            y_offset: d * 10.0,
            opacity: (0.7 - (d - 1.0) * 0.2).max(0.0),
        }
    }
}
