//! First-party content and audience metadata attached to an ad unit.
//!
//! The shapes follow `OpenRTB` 2.x `Content`, `Data` and `Segment` objects so
//! they can be handed to the request builder unchanged. Two items are the
//! same item when all of their fields are equal.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single key/value segment inside a [`ContentDataItem`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSegment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Data from one provider, e.g. an audience taxonomy or a content classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDataItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "segment", default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<ContentSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Map<String, Value>>,
}

impl ContentDataItem {
    /// Item with only an id and a name.
    #[must_use]
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: ContentSegment) -> Self {
        self.segments.push(segment);
        self
    }
}

/// Producer of the content, as opposed to its publisher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentProducer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "cat", default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Description of the app content the ad is shown next to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "cat", default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// `OpenRTB` production quality code (1 professional, 2 prosumer, 3 UGC).
    #[serde(rename = "prodq", skip_serializing_if = "Option::is_none")]
    pub production_quality: Option<u8>,
    /// `OpenRTB` content context code (1 video .. 7 application).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(rename = "livestream", skip_serializing_if = "Option::is_none")]
    pub live_stream: Option<bool>,
    /// Length in seconds.
    #[serde(rename = "len", skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ContentDataItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<ContentProducer>,
}
