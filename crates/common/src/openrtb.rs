//! `OpenRTB` 2.x view of an ad unit.
//!
//! This is what the rendering pipeline sends upstream for one placement. It
//! is a pure projection: nothing here mutates the [`AdUnitConfig`] and nothing
//! here talks to the network.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ad_unit::AdUnitConfig;
use crate::content::{AppContent, ContentDataItem};
use crate::models::{AdFormat, AdSize};

/// Minimal subset of an `OpenRTB` 2.x bid request for a single ad unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRtbRequest {
    pub id: String,
    pub imp: Vec<Imp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

impl OpenRtbRequest {
    /// Builds the request for `ad_unit` with the given request id.
    #[must_use]
    pub fn from_ad_unit(id: impl Into<String>, ad_unit: &AdUnitConfig) -> Self {
        let app = ad_unit.app_content().map(|content| App {
            content: Some(content.clone()),
            extra: HashMap::new(),
        });

        let user = ad_unit
            .user_data_items()
            .filter(|items| !items.is_empty())
            .map(|items| User {
                data: items.to_vec(),
                extra: HashMap::new(),
            });

        let device = ad_unit
            .min_size_percentage()
            .filter(|_| ad_unit.is_interstitial())
            .map(|percentage| Device {
                ext: Some(DeviceExt {
                    prebid: PrebidDeviceExt {
                        interstitial: InterstitialExt {
                            min_width_perc: percentage.width,
                            min_height_perc: percentage.height,
                        },
                    },
                }),
                extra: HashMap::new(),
            });

        Self {
            id: id.into(),
            imp: vec![Imp::from_ad_unit(ad_unit)],
            app,
            user,
            device,
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imp {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instl: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<ImpExt>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

impl Imp {
    /// Builds the impression object for `ad_unit`.
    ///
    /// Display units produce a banner listing the primary and additional
    /// sizes; video units produce a video object sized to the primary size.
    #[must_use]
    pub fn from_ad_unit(ad_unit: &AdUnitConfig) -> Self {
        let pos = ad_unit.ad_position().ortb_code();

        let (banner, video) = match ad_unit.ad_format() {
            AdFormat::Display => {
                let format = std::iter::once(ad_unit.ad_size())
                    .chain(ad_unit.additional_sizes().unwrap_or_default().iter().copied())
                    .filter(|size| !size.is_zero())
                    .map(Format::from)
                    .collect();
                (Some(Banner { format, pos }), None)
            }
            AdFormat::Video => {
                let size = ad_unit.ad_size();
                let video = Video {
                    w: (!size.is_zero()).then_some(size.width),
                    h: (!size.is_zero()).then_some(size.height),
                    placement: ad_unit.video_placement_type().ortb_code(),
                    pos,
                };
                (None, Some(video))
            }
        };

        Self {
            id: ad_unit.config_id().to_string(),
            banner,
            video,
            instl: ad_unit.is_interstitial().then_some(1),
            ext: Some(ImpExt::from_ad_unit(ad_unit)),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub format: Vec<Format>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub w: u32,
    pub h: u32,
}

impl From<AdSize> for Format {
    fn from(size: AdSize) -> Self {
        Self {
            w: size.width,
            h: size.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpExt {
    pub prebid: PrebidImpExt,
    /// Context data, keys and values sorted for a stable payload.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpid: Option<String>,
}

impl ImpExt {
    fn from_ad_unit(ad_unit: &AdUnitConfig) -> Self {
        let mut data: BTreeMap<String, Value> = ad_unit
            .context_data()
            .into_iter()
            .map(|(key, mut values)| {
                values.sort();
                (key, Value::from(values))
            })
            .collect();

        if let Some(slot) = ad_unit.pb_ad_slot() {
            data.insert("pbadslot".to_string(), Value::from(slot));
        }

        let mut keywords: Vec<&str> = ad_unit
            .context_keywords()
            .iter()
            .map(String::as_str)
            .collect();
        keywords.sort_unstable();

        Self {
            prebid: PrebidImpExt {
                storedrequest: StoredRequest {
                    id: ad_unit.config_id().to_string(),
                },
            },
            data,
            keywords: (!keywords.is_empty()).then(|| keywords.join(",")),
            gpid: ad_unit.gpid().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrebidImpExt {
    pub storedrequest: StoredRequest,
}

/// Reference to the server-side stored request named by the config id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<AppContent>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ContentDataItem>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<DeviceExt>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceExt {
    pub prebid: PrebidDeviceExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrebidDeviceExt {
    pub interstitial: InterstitialExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterstitialExt {
    #[serde(rename = "minwidthperc")]
    pub min_width_perc: f64,
    #[serde(rename = "minheightperc")]
    pub min_height_perc: f64,
}
