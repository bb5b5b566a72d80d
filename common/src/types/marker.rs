use crate::constants::{
    MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_ICON_URL, MARKER_POPUP_ANCHOR,
    MARKER_SHADOW_SIZE, MARKER_SHADOW_URL, TOOLTIP_OPACITY,
};
use crate::types::geo::LatLng;
use crate::types::restaurant_record::RestaurantRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque id of a marker living on a map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconOptions {
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: (u32, u32),
    pub icon_anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
    pub shadow_size: (u32, u32),
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            icon_url: MARKER_ICON_URL.to_string(),
            shadow_url: MARKER_SHADOW_URL.to_string(),
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
            popup_anchor: MARKER_POPUP_ANCHOR,
            shadow_size: MARKER_SHADOW_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipDirection {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    /// A non-permanent tooltip only shows while the marker is hovered.
    pub permanent: bool,
    pub direction: TooltipDirection,
    pub opacity: f32,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            permanent: false,
            direction: TooltipDirection::Top,
            opacity: TOOLTIP_OPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub content: String,
    pub options: TooltipOptions,
}

/// Everything a map widget needs to draw one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub icon: IconOptions,
    pub tooltip: Tooltip,
}

impl MarkerOptions {
    /// Marker for `record`, or `None` when the record has no drawable position.
    pub fn for_restaurant(record: &RestaurantRecord) -> Option<Self> {
        let position = record.position()?;
        Some(Self {
            position,
            icon: IconOptions::default(),
            tooltip: Tooltip {
                content: format!(
                    "{}\nCuisine: {}\nAddress: {}",
                    record.name, record.cuisine, record.address
                ),
                options: TooltipOptions::default(),
            },
        })
    }
}
