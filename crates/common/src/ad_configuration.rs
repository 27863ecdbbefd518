//! Internal configuration record mirrored from an [`AdUnitConfig`].
//!
//! The rendering pipeline reads this record; only the owning
//! [`AdUnitConfig`] writes it, which is why every setter is crate-private.
//!
//! [`AdUnitConfig`]: crate::ad_unit::AdUnitConfig

use serde::Serialize;

use crate::models::{AdFormat, AdSize, VideoPlacementType};

/// Format as understood by the rendering pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormatInternal {
    #[default]
    Display,
    Video,
}

impl From<AdFormat> for AdFormatInternal {
    fn from(format: AdFormat) -> Self {
        match format {
            AdFormat::Display => AdFormatInternal::Display,
            AdFormat::Video => AdFormatInternal::Video,
        }
    }
}

impl From<AdFormatInternal> for AdFormat {
    fn from(format: AdFormatInternal) -> Self {
        match format {
            AdFormatInternal::Display => AdFormat::Display,
            AdFormatInternal::Video => AdFormat::Video,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdConfiguration {
    ad_format: AdFormatInternal,
    is_interstitial: bool,
    is_opt_in: bool,
    video_placement_type: VideoPlacementType,
    size: AdSize,
    auto_refresh_delay: f64,
}

impl AdConfiguration {
    pub(crate) fn new(size: AdSize) -> Self {
        Self {
            ad_format: AdFormatInternal::Display,
            is_interstitial: false,
            is_opt_in: false,
            video_placement_type: VideoPlacementType::Undefined,
            size,
            auto_refresh_delay: 0.0,
        }
    }

    #[must_use]
    pub fn ad_format(&self) -> AdFormatInternal {
        self.ad_format
    }

    #[must_use]
    pub fn is_interstitial(&self) -> bool {
        self.is_interstitial
    }

    #[must_use]
    pub fn is_opt_in(&self) -> bool {
        self.is_opt_in
    }

    #[must_use]
    pub fn video_placement_type(&self) -> VideoPlacementType {
        self.video_placement_type
    }

    #[must_use]
    pub fn size(&self) -> AdSize {
        self.size
    }

    /// Delay in seconds the pipeline waits before its own reload; 0 disables it.
    #[must_use]
    pub fn auto_refresh_delay(&self) -> f64 {
        self.auto_refresh_delay
    }

    pub(crate) fn set_ad_format(&mut self, format: AdFormatInternal) {
        self.ad_format = format;
    }

    pub(crate) fn set_interstitial(&mut self, value: bool) {
        self.is_interstitial = value;
    }

    pub(crate) fn set_opt_in(&mut self, value: bool) {
        self.is_opt_in = value;
    }

    pub(crate) fn set_video_placement_type(&mut self, value: VideoPlacementType) {
        self.video_placement_type = value;
    }

    pub(crate) fn set_size(&mut self, size: AdSize) {
        self.size = size;
    }
}
