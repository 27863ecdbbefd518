//! Value types shared by ad-unit configurations and their projections.

use std::fmt;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::error::AdUnitError;

/// Ad dimensions in density-independent points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdSize {
    pub width: u32,
    pub height: u32,
}

impl AdSize {
    pub const ZERO: AdSize = AdSize {
        width: 0,
        height: 0,
    };

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True for the unset `0x0` size.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

impl fmt::Display for AdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for AdSize {
    type Err = Report<AdUnitError>;

    /// Parses `WIDTHxHEIGHT`, e.g. `300x250`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Report::new(AdUnitError::InvalidSize {
                value: s.to_string(),
            })
        };

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

        Ok(Self { width, height })
    }
}

/// Minimum acceptable rendered size, as a percentage of the primary size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizePercentage {
    pub width: f64,
    pub height: f64,
}

impl SizePercentage {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Request semantics of a placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormat {
    #[default]
    Display,
    Video,
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdFormat::Display => write!(f, "display"),
            AdFormat::Video => write!(f, "video"),
        }
    }
}

/// Semantic position of the placement on screen.
///
/// Discriminants are the `OpenRTB` `pos` values; `Undefined` has no
/// `OpenRTB` counterpart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum AdPosition {
    #[default]
    Undefined = -1,
    Unknown = 0,
    Header = 4,
    Footer = 5,
    Sidebar = 6,
    FullScreen = 7,
}

impl AdPosition {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// `OpenRTB` `pos` code, or `None` when the position was never set.
    #[must_use]
    pub fn ortb_code(self) -> Option<i32> {
        match self {
            AdPosition::Undefined => None,
            other => Some(other.code()),
        }
    }
}

/// Video placement subtype, only meaningful for video placements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum VideoPlacementType {
    #[default]
    Undefined = 0,
    InBanner = 2,
    InArticle = 3,
    InFeed = 4,
    SliderOrFloating = 5,
}

impl VideoPlacementType {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// `OpenRTB` `video.placement` code, or `None` when undefined.
    #[must_use]
    pub fn ortb_code(self) -> Option<i32> {
        match self {
            VideoPlacementType::Undefined => None,
            other => Some(other.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_size_parse() {
        assert_eq!("300x250".parse::<AdSize>().ok(), Some(AdSize::new(300, 250)));
        assert_eq!(" 728X90 ".parse::<AdSize>().ok(), Some(AdSize::new(728, 90)));
    }

    #[test]
    fn test_ad_size_parse_rejects_garbage() {
        for value in ["", "300", "300x", "x250", "300x-1", "widexhigh"] {
            assert!(value.parse::<AdSize>().is_err(), "{value} should not parse");
        }
    }

    #[test]
    fn test_ad_size_display_matches_parse() {
        let size = AdSize::new(320, 50);
        assert_eq!(size.to_string(), "320x50");
        assert!(AdSize::ZERO.is_zero());
        assert!(!size.is_zero());
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(AdFormat::default(), AdFormat::Display);
        assert_eq!(AdPosition::default(), AdPosition::Undefined);
        assert_eq!(VideoPlacementType::default(), VideoPlacementType::Undefined);
    }

    #[test]
    fn test_position_codes() {
        let positions = [
            (AdPosition::Undefined, -1),
            (AdPosition::Unknown, 0),
            (AdPosition::Header, 4),
            (AdPosition::Footer, 5),
            (AdPosition::Sidebar, 6),
            (AdPosition::FullScreen, 7),
        ];
        for (position, code) in positions {
            assert_eq!(position.code(), code, "{position:?}");
        }
        assert_eq!(AdPosition::Undefined.ortb_code(), None);
        assert_eq!(AdPosition::Unknown.ortb_code(), Some(0));
        assert_eq!(AdPosition::FullScreen.ortb_code(), Some(7));
    }

    #[test]
    fn test_video_placement_codes() {
        let placements = [
            (VideoPlacementType::Undefined, 0),
            (VideoPlacementType::InBanner, 2),
            (VideoPlacementType::InArticle, 3),
            (VideoPlacementType::InFeed, 4),
            (VideoPlacementType::SliderOrFloating, 5),
        ];
        for (placement, code) in placements {
            assert_eq!(placement.code(), code, "{placement:?}");
        }
        assert_eq!(VideoPlacementType::Undefined.ortb_code(), None);
        assert_eq!(VideoPlacementType::InFeed.ortb_code(), Some(4));
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(
            serde_json::to_string(&AdPosition::FullScreen).ok().as_deref(),
            Some("\"full_screen\"")
        );
        assert_eq!(
            serde_json::from_str::<AdFormat>("\"video\"").ok(),
            Some(AdFormat::Video)
        );
    }
}
