//! Ad-unit configuration: the request parameters of one ad placement.
//!
//! An [`AdUnitConfig`] is built by the caller, mutated through its setters
//! and then handed to an ad view, which reads it to build a bid request.
//! Every write goes through a method so the normalization rules and the
//! mirrored [`AdConfiguration`] can never be bypassed.
//!
//! # Refresh interval
//!
//! The auto-refresh cadence depends on the format:
//!
//! - **Display**: values are clamped into `[15, 120]` seconds, negative values
//!   disable refresh (stored as `0`). Entering display resets it to `60`.
//! - **Video**: the interval is always `0` and writes are refused.
//!
//! Normalizations are reported to the configured [`DiagnosticSink`], never as
//! errors.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::ad_configuration::{AdConfiguration, AdFormatInternal};
use crate::constants::{
    REFRESH_INTERVAL_DEFAULT_SECONDS, REFRESH_INTERVAL_DISABLED, REFRESH_INTERVAL_MAX_SECONDS,
    REFRESH_INTERVAL_MIN_SECONDS,
};
use crate::content::{AppContent, ContentDataItem};
use crate::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
use crate::models::{AdFormat, AdPosition, AdSize, SizePercentage, VideoPlacementType};

/// Request parameters of a single ad placement.
///
/// `Clone` produces a fully independent copy: every collection is duplicated
/// and the clone owns its own [`AdConfiguration`]. Only the diagnostic sink
/// is shared. App content and user data are copied along with the rest.
#[derive(Debug, Clone)]
pub struct AdUnitConfig {
    config_id: String,
    ad_size: AdSize,
    additional_sizes: Option<Vec<AdSize>>,
    min_size_percentage: Option<SizePercentage>,
    ad_position: AdPosition,
    refresh_interval: f64,
    gpid: Option<String>,
    pb_ad_slot: Option<String>,
    context_data: HashMap<String, HashSet<String>>,
    context_keywords: HashSet<String>,
    app_content: Option<AppContent>,
    user_data: Option<Vec<ContentDataItem>>,
    ad_configuration: AdConfiguration,
    diagnostics: Diagnostics,
}

impl AdUnitConfig {
    /// Creates a display configuration with a zero size.
    #[must_use]
    pub fn new(config_id: impl Into<String>) -> Self {
        Self::with_size(config_id, AdSize::ZERO)
    }

    /// Creates a display configuration for the given primary size.
    ///
    /// Neither argument is validated here.
    #[must_use]
    pub fn with_size(config_id: impl Into<String>, size: AdSize) -> Self {
        Self {
            config_id: config_id.into(),
            ad_size: size,
            additional_sizes: None,
            min_size_percentage: None,
            ad_position: AdPosition::Undefined,
            refresh_interval: REFRESH_INTERVAL_DEFAULT_SECONDS,
            gpid: None,
            pb_ad_slot: None,
            context_data: HashMap::new(),
            context_keywords: HashSet::new(),
            app_content: None,
            user_data: None,
            ad_configuration: AdConfiguration::new(size),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Routes normalization warnings to `sink` instead of the log.
    #[must_use]
    pub fn with_diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.set_diagnostic_sink(sink);
        self
    }

    pub fn set_diagnostic_sink(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.diagnostics = Diagnostics::new(sink);
    }

    #[must_use]
    pub fn config_id(&self) -> &str {
        &self.config_id
    }

    pub fn set_config_id(&mut self, config_id: impl Into<String>) {
        self.config_id = config_id.into();
    }

    /// The mirrored record consumed by the rendering pipeline.
    #[must_use]
    pub fn ad_configuration(&self) -> &AdConfiguration {
        &self.ad_configuration
    }

    // ---- format ----

    #[must_use]
    pub fn ad_format(&self) -> AdFormat {
        self.ad_configuration.ad_format().into()
    }

    /// Switches the request semantics of the placement.
    ///
    /// Assigning the current format is a no-op. Otherwise the refresh
    /// interval is reset: to `0` for video, to the default for display.
    pub fn set_ad_format(&mut self, format: AdFormat) {
        let internal = AdFormatInternal::from(format);
        if self.ad_configuration.ad_format() == internal {
            return;
        }

        log::debug!(
            "Ad unit {} switching format to {}",
            self.config_id,
            format
        );
        self.ad_configuration.set_ad_format(internal);

        match format {
            // Video never auto-refreshes; the setter is frozen from here on.
            AdFormat::Video => self.refresh_interval = REFRESH_INTERVAL_DISABLED,
            AdFormat::Display => self.set_refresh_interval(REFRESH_INTERVAL_DEFAULT_SECONDS),
        }
    }

    // ---- refresh interval ----

    /// Auto-refresh cadence in seconds; `0` means disabled.
    #[must_use]
    pub fn refresh_interval(&self) -> f64 {
        self.refresh_interval
    }

    /// Sets the auto-refresh cadence in seconds.
    ///
    /// - Video placements refuse the write and emit
    ///   [`Diagnostic::RefreshIntervalNotAssignable`].
    /// - Negative values disable refresh.
    /// - Anything else is clamped into `[15, 120]`; a changed value emits
    ///   [`Diagnostic::RefreshIntervalClamped`]. `NaN` clamps to the floor.
    pub fn set_refresh_interval(&mut self, seconds: f64) {
        if self.ad_format() == AdFormat::Video {
            self.diagnostics
                .warn(Diagnostic::RefreshIntervalNotAssignable { requested: seconds });
            return;
        }

        if seconds < 0.0 {
            self.refresh_interval = REFRESH_INTERVAL_DISABLED;
            return;
        }

        let clamped = seconds
            .max(REFRESH_INTERVAL_MIN_SECONDS)
            .min(REFRESH_INTERVAL_MAX_SECONDS);
        if clamped != seconds {
            self.diagnostics.warn(Diagnostic::RefreshIntervalClamped {
                requested: seconds,
                applied: clamped,
            });
        }
        self.refresh_interval = clamped;
    }

    // ---- sizes and placement ----

    #[must_use]
    pub fn ad_size(&self) -> AdSize {
        self.ad_size
    }

    /// Sets the primary size and keeps the mirrored size in step.
    pub fn set_ad_size(&mut self, size: AdSize) {
        self.ad_size = size;
        self.ad_configuration.set_size(size);
    }

    #[must_use]
    pub fn additional_sizes(&self) -> Option<&[AdSize]> {
        self.additional_sizes.as_deref()
    }

    pub fn set_additional_sizes(&mut self, sizes: Option<Vec<AdSize>>) {
        self.additional_sizes = sizes;
    }

    #[must_use]
    pub fn min_size_percentage(&self) -> Option<SizePercentage> {
        self.min_size_percentage
    }

    pub fn set_min_size_percentage(&mut self, percentage: Option<SizePercentage>) {
        self.min_size_percentage = percentage;
    }

    #[must_use]
    pub fn ad_position(&self) -> AdPosition {
        self.ad_position
    }

    pub fn set_ad_position(&mut self, position: AdPosition) {
        self.ad_position = position;
    }

    #[must_use]
    pub fn is_interstitial(&self) -> bool {
        self.ad_configuration.is_interstitial()
    }

    pub fn set_interstitial(&mut self, value: bool) {
        self.ad_configuration.set_interstitial(value);
    }

    #[must_use]
    pub fn is_opt_in(&self) -> bool {
        self.ad_configuration.is_opt_in()
    }

    pub fn set_opt_in(&mut self, value: bool) {
        self.ad_configuration.set_opt_in(value);
    }

    #[must_use]
    pub fn video_placement_type(&self) -> VideoPlacementType {
        self.ad_configuration.video_placement_type()
    }

    pub fn set_video_placement_type(&mut self, placement: VideoPlacementType) {
        self.ad_configuration.set_video_placement_type(placement);
    }

    /// Global placement id.
    #[must_use]
    pub fn gpid(&self) -> Option<&str> {
        self.gpid.as_deref()
    }

    pub fn set_gpid(&mut self, gpid: Option<String>) {
        self.gpid = gpid;
    }

    #[must_use]
    pub fn pb_ad_slot(&self) -> Option<&str> {
        self.pb_ad_slot.as_deref()
    }

    pub fn set_pb_ad_slot(&mut self, slot: Option<String>) {
        self.pb_ad_slot = slot;
    }

    // ---- context data ----

    /// Adds `value` to the set stored under `key`. Duplicates are ignored.
    pub fn add_context_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context_data
            .entry(key.into())
            .or_default()
            .insert(value.into());
    }

    /// Replaces every value stored under `key`.
    pub fn update_context_data<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.context_data
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn remove_context_data(&mut self, key: &str) {
        self.context_data.remove(key);
    }

    pub fn clear_context_data(&mut self) {
        self.context_data.clear();
    }

    /// Values stored under `key`, if any.
    #[must_use]
    pub fn context_data_values(&self, key: &str) -> Option<&HashSet<String>> {
        self.context_data.get(key)
    }

    /// Each key with its values as a list. The order of the values is not
    /// stable between calls.
    #[must_use]
    pub fn context_data(&self) -> HashMap<String, Vec<String>> {
        self.context_data
            .iter()
            .map(|(key, values)| (key.clone(), values.iter().cloned().collect()))
            .collect()
    }

    // ---- context keywords ----

    pub fn add_context_keyword(&mut self, keyword: impl Into<String>) {
        self.context_keywords.insert(keyword.into());
    }

    pub fn add_context_keywords<I, K>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.context_keywords
            .extend(keywords.into_iter().map(Into::into));
    }

    pub fn remove_context_keyword(&mut self, keyword: &str) {
        self.context_keywords.remove(keyword);
    }

    pub fn clear_context_keywords(&mut self) {
        self.context_keywords.clear();
    }

    #[must_use]
    pub fn context_keywords(&self) -> &HashSet<String> {
        &self.context_keywords
    }

    // ---- app content ----

    #[must_use]
    pub fn app_content(&self) -> Option<&AppContent> {
        self.app_content.as_ref()
    }

    pub fn set_app_content(&mut self, content: AppContent) {
        self.app_content = Some(content);
    }

    pub fn clear_app_content(&mut self) {
        self.app_content = None;
    }

    /// Appends `items` to the app content data, creating the content record
    /// if there is none. Items equal to existing ones are still appended.
    pub fn add_app_content_data_items(&mut self, items: impl IntoIterator<Item = ContentDataItem>) {
        self.app_content
            .get_or_insert_with(AppContent::default)
            .data
            .extend(items);
    }

    /// Removes every app content data item equal to `item`.
    pub fn remove_app_content_data_item(&mut self, item: &ContentDataItem) {
        if let Some(content) = self.app_content.as_mut() {
            content.data.retain(|existing| existing != item);
        }
    }

    pub fn clear_app_content_data_items(&mut self) {
        if let Some(content) = self.app_content.as_mut() {
            content.data.clear();
        }
    }

    // ---- user data ----

    #[must_use]
    pub fn user_data_items(&self) -> Option<&[ContentDataItem]> {
        self.user_data.as_deref()
    }

    /// Appends `items` to the user data. Equal items are not collapsed.
    pub fn add_user_data_items(&mut self, items: impl IntoIterator<Item = ContentDataItem>) {
        self.user_data.get_or_insert_with(Vec::new).extend(items);
    }

    /// Removes every user data item equal to `item`.
    pub fn remove_user_data_item(&mut self, item: &ContentDataItem) {
        if let Some(user_data) = self.user_data.as_mut() {
            user_data.retain(|existing| existing != item);
        }
    }

    pub fn clear_user_data_items(&mut self) {
        if let Some(user_data) = self.user_data.as_mut() {
            user_data.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentSegment;
    use crate::diagnostics::RecordingSink;
    use crate::test_support::tests::recording_ad_unit;
    use proptest::prelude::*;

    fn item(id: &str) -> ContentDataItem {
        ContentDataItem::named(id, format!("provider-{id}"))
    }

    #[test]
    fn test_new_defaults() {
        let config = AdUnitConfig::new("abc");
        assert_eq!(config.config_id(), "abc");
        assert_eq!(config.ad_size(), AdSize::ZERO);
        assert_eq!(config.ad_format(), AdFormat::Display);
        assert_eq!(config.refresh_interval(), 60.0);
        assert_eq!(config.ad_position(), AdPosition::Undefined);
        assert!(config.additional_sizes().is_none());
        assert!(config.min_size_percentage().is_none());
        assert!(config.context_data().is_empty());
        assert!(config.app_content().is_none());
        assert!(config.user_data_items().is_none());
    }

    #[test]
    fn test_with_size_sets_mirrored_record() {
        let config = AdUnitConfig::with_size("abc", AdSize::new(300, 250));
        let mirrored = config.ad_configuration();
        assert_eq!(mirrored.size(), AdSize::new(300, 250));
        assert_eq!(mirrored.ad_format(), AdFormatInternal::Display);
        assert_eq!(mirrored.auto_refresh_delay(), 0.0);
    }

    #[test]
    fn test_set_config_id_replaces_identifier_only() {
        let (mut config, sink) = recording_ad_unit("abc", AdSize::new(300, 250));
        config.set_refresh_interval(30.0);
        config.add_context_data("genre", "rock");

        config.set_config_id("prebid-demo-banner-300-250");
        assert_eq!(config.config_id(), "prebid-demo-banner-300-250");
        assert_eq!(config.refresh_interval(), 30.0);
        assert_eq!(config.ad_size(), AdSize::new(300, 250));
        assert_eq!(config.context_data_values("genre").map(HashSet::len), Some(1));

        let copy = config.clone();
        config.set_config_id(String::from("renamed"));
        assert_eq!(config.config_id(), "renamed");
        assert_eq!(copy.config_id(), "prebid-demo-banner-300-250");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_format_round_trip_scenario() {
        let (mut config, sink) = recording_ad_unit("abc", AdSize::new(300, 250));
        assert_eq!(config.ad_format(), AdFormat::Display);
        assert_eq!(config.refresh_interval(), 60.0);

        config.set_ad_format(AdFormat::Video);
        assert_eq!(config.refresh_interval(), 0.0);
        assert_eq!(
            config.ad_configuration().ad_format(),
            AdFormatInternal::Video
        );
        assert!(sink.is_empty(), "entering video mode is not a warning");

        config.set_refresh_interval(30.0);
        assert_eq!(config.refresh_interval(), 0.0);
        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::RefreshIntervalNotAssignable { requested: 30.0 }]
        );

        config.set_ad_format(AdFormat::Display);
        assert_eq!(config.refresh_interval(), 60.0);
        assert_eq!(
            config.ad_configuration().ad_format(),
            AdFormatInternal::Display
        );
    }

    #[test]
    fn test_repeated_format_assignment_is_noop() {
        let (mut config, sink) = recording_ad_unit("abc", AdSize::new(320, 50));
        config.set_refresh_interval(90.0);

        config.set_ad_format(AdFormat::Display);
        assert_eq!(config.refresh_interval(), 90.0, "same format keeps interval");

        config.set_ad_format(AdFormat::Video);
        config.set_ad_format(AdFormat::Video);
        assert_eq!(config.refresh_interval(), 0.0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_return_to_display_resets_custom_interval() {
        let mut config = AdUnitConfig::new("abc");
        config.set_refresh_interval(200.0);
        assert_eq!(config.refresh_interval(), 120.0);

        config.set_ad_format(AdFormat::Video);
        config.set_ad_format(AdFormat::Display);
        assert_eq!(config.refresh_interval(), 60.0);
    }

    #[test]
    fn test_clamping_emits_warning() {
        let (mut config, sink) = recording_ad_unit("abc", AdSize::ZERO);

        config.set_refresh_interval(5.0);
        config.set_refresh_interval(500.0);
        config.set_refresh_interval(45.0);

        assert_eq!(config.refresh_interval(), 45.0);
        assert_eq!(
            sink.diagnostics(),
            vec![
                Diagnostic::RefreshIntervalClamped {
                    requested: 5.0,
                    applied: 15.0
                },
                Diagnostic::RefreshIntervalClamped {
                    requested: 500.0,
                    applied: 120.0
                },
            ]
        );
    }

    #[test]
    fn test_negative_interval_disables_without_warning() {
        let (mut config, sink) = recording_ad_unit("abc", AdSize::ZERO);
        config.set_refresh_interval(-1.0);
        assert_eq!(config.refresh_interval(), 0.0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_nan_interval_clamps_to_floor() {
        let (mut config, sink) = recording_ad_unit("abc", AdSize::ZERO);
        config.set_refresh_interval(f64::NAN);
        assert_eq!(config.refresh_interval(), 15.0);
        assert_eq!(sink.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_below_floor_clamps_to_floor(v in 0.0f64..15.0) {
            let mut config = AdUnitConfig::new("p").with_diagnostic_sink(Arc::new(RecordingSink::new()));
            config.set_refresh_interval(v);
            prop_assert_eq!(config.refresh_interval(), 15.0);
        }

        #[test]
        fn prop_above_ceiling_clamps_to_ceiling(v in 120.000_001f64..1.0e9) {
            let mut config = AdUnitConfig::new("p").with_diagnostic_sink(Arc::new(RecordingSink::new()));
            config.set_refresh_interval(v);
            prop_assert_eq!(config.refresh_interval(), 120.0);
        }

        #[test]
        fn prop_in_range_is_stored_exactly(v in 15.0f64..=120.0) {
            let (mut config, sink) = recording_ad_unit("p", AdSize::ZERO);
            config.set_refresh_interval(v);
            prop_assert_eq!(config.refresh_interval(), v);
            prop_assert!(sink.is_empty());
        }

        #[test]
        fn prop_negative_is_disabled(v in -1.0e9f64..-0.000_001) {
            let mut config = AdUnitConfig::new("p");
            config.set_refresh_interval(v);
            prop_assert_eq!(config.refresh_interval(), 0.0);
        }

        #[test]
        fn prop_video_ignores_writes(v in -1.0e6f64..1.0e6) {
            let mut config = AdUnitConfig::new("p").with_diagnostic_sink(Arc::new(RecordingSink::new()));
            config.set_ad_format(AdFormat::Video);
            config.set_refresh_interval(v);
            prop_assert_eq!(config.refresh_interval(), 0.0);
        }
    }

    #[test]
    fn test_mirrored_flags_follow_setters() {
        let mut config = AdUnitConfig::new("abc");
        config.set_interstitial(true);
        config.set_opt_in(true);
        config.set_video_placement_type(VideoPlacementType::InFeed);
        config.set_ad_size(AdSize::new(320, 480));

        let mirrored = config.ad_configuration();
        assert!(mirrored.is_interstitial());
        assert!(mirrored.is_opt_in());
        assert_eq!(mirrored.video_placement_type(), VideoPlacementType::InFeed);
        assert_eq!(mirrored.size(), AdSize::new(320, 480));
        assert!(config.is_interstitial());
        assert!(config.is_opt_in());
    }

    #[test]
    fn test_context_data_is_a_set() {
        let mut config = AdUnitConfig::new("abc");
        config.add_context_data("k", "a");
        config.add_context_data("k", "a");

        assert_eq!(config.context_data_values("k").map(HashSet::len), Some(1));
        assert_eq!(config.context_data().get("k"), Some(&vec!["a".to_string()]));
    }

    #[test]
    fn test_update_context_data_replaces_set() {
        let mut config = AdUnitConfig::new("abc");
        config.add_context_data("k", "old");
        config.update_context_data("k", ["x", "y", "x"]);

        let values = config.context_data_values("k").cloned().unwrap_or_default();
        assert_eq!(
            values,
            HashSet::from(["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_remove_and_clear_context_data() {
        let mut config = AdUnitConfig::new("abc");
        config.remove_context_data("missing");
        assert!(config.context_data().is_empty());

        config.add_context_data("a", "1");
        config.add_context_data("b", "2");
        config.remove_context_data("a");
        assert!(config.context_data_values("a").is_none());
        assert!(config.context_data_values("b").is_some());

        config.clear_context_data();
        assert!(config.context_data().is_empty());
    }

    #[test]
    fn test_context_keywords() {
        let mut config = AdUnitConfig::new("abc");
        config.add_context_keyword("sports");
        config.add_context_keywords(["sports", "news"]);
        assert_eq!(config.context_keywords().len(), 2);

        config.remove_context_keyword("sports");
        config.remove_context_keyword("missing");
        assert!(config.context_keywords().contains("news"));
        assert_eq!(config.context_keywords().len(), 1);

        config.clear_context_keywords();
        assert!(config.context_keywords().is_empty());
    }

    #[test]
    fn test_app_content_items_are_created_lazily() {
        let mut config = AdUnitConfig::new("abc");
        let x = item("x");
        let y = item("y");

        config.add_app_content_data_items([x.clone(), y.clone()]);
        assert_eq!(
            config.app_content().map(|c| c.data.clone()),
            Some(vec![x.clone(), y.clone()])
        );

        config.remove_app_content_data_item(&x);
        assert_eq!(
            config.app_content().map(|c| c.data.clone()),
            Some(vec![y])
        );
    }

    #[test]
    fn test_app_content_removal_matches_by_value() {
        let mut config = AdUnitConfig::new("abc");
        let segment = ContentSegment {
            id: Some("s".into()),
            ..ContentSegment::default()
        };
        config.add_app_content_data_items([
            item("x").with_segment(segment.clone()),
            item("x"),
            item("x").with_segment(segment.clone()),
        ]);

        config.remove_app_content_data_item(&item("x").with_segment(segment));
        assert_eq!(
            config.app_content().map(|c| c.data.clone()),
            Some(vec![item("x")])
        );
    }

    #[test]
    fn test_app_content_slot_semantics() {
        let mut config = AdUnitConfig::new("abc");
        config.remove_app_content_data_item(&item("x"));
        config.clear_app_content_data_items();
        assert!(config.app_content().is_none());

        config.set_app_content(AppContent {
            title: Some("first".into()),
            ..AppContent::default()
        });
        config.set_app_content(AppContent {
            title: Some("second".into()),
            data: vec![item("a")],
            ..AppContent::default()
        });
        assert_eq!(
            config.app_content().and_then(|c| c.title.as_deref()),
            Some("second")
        );

        config.clear_app_content_data_items();
        assert_eq!(config.app_content().map(|c| c.data.len()), Some(0));

        config.clear_app_content();
        assert!(config.app_content().is_none());
    }

    #[test]
    fn test_user_data_items() {
        let mut config = AdUnitConfig::new("abc");
        config.clear_user_data_items();
        assert!(config.user_data_items().is_none());

        config.add_user_data_items([item("a"), item("b"), item("a")]);
        assert_eq!(config.user_data_items().map(<[_]>::len), Some(3));

        config.remove_user_data_item(&item("a"));
        assert_eq!(config.user_data_items(), Some(&[item("b")][..]));

        config.remove_user_data_item(&item("missing"));
        assert_eq!(config.user_data_items().map(<[_]>::len), Some(1));

        config.clear_user_data_items();
        assert_eq!(config.user_data_items().map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_clone_copies_request_parameters() {
        let mut original = AdUnitConfig::with_size("abc", AdSize::new(300, 250));
        original.set_additional_sizes(Some(vec![AdSize::new(320, 50)]));
        original.set_min_size_percentage(Some(SizePercentage::new(50.0, 70.0)));
        original.set_ad_position(AdPosition::Footer);
        original.set_refresh_interval(30.0);
        original.set_interstitial(true);
        original.set_gpid(Some("/1111/home".into()));
        original.add_context_data("k", "v");

        let copy = original.clone();
        assert_eq!(copy.config_id(), original.config_id());
        assert_eq!(copy.ad_size(), original.ad_size());
        assert_eq!(copy.ad_format(), original.ad_format());
        assert_eq!(copy.refresh_interval(), 30.0);
        assert_eq!(copy.min_size_percentage(), original.min_size_percentage());
        assert_eq!(copy.ad_position(), AdPosition::Footer);
        assert_eq!(copy.additional_sizes(), original.additional_sizes());
        assert_eq!(copy.ad_configuration(), original.ad_configuration());
        assert_eq!(copy.gpid(), Some("/1111/home"));
    }

    #[test]
    fn test_clone_has_independent_storage() {
        let mut original = AdUnitConfig::new("abc");
        original.add_context_data("k", "v");
        original.add_user_data_items([item("u")]);
        original.add_app_content_data_items([item("c")]);

        let mut copy = original.clone();
        copy.add_context_data("k", "other");
        copy.add_context_data("new", "1");
        copy.clear_user_data_items();
        copy.clear_app_content_data_items();
        copy.set_interstitial(true);

        assert_eq!(original.context_data_values("k").map(HashSet::len), Some(1));
        assert!(original.context_data_values("new").is_none());
        assert_eq!(original.user_data_items().map(<[_]>::len), Some(1));
        assert_eq!(original.app_content().map(|c| c.data.len()), Some(1));
        assert!(!original.is_interstitial());
    }

    #[test]
    fn test_clone_of_video_unit_stays_disabled() {
        let (mut original, sink) = recording_ad_unit("abc", AdSize::ZERO);
        original.set_ad_format(AdFormat::Video);

        let mut copy = original.clone();
        assert_eq!(copy.ad_format(), AdFormat::Video);
        assert_eq!(copy.refresh_interval(), 0.0);

        copy.set_refresh_interval(60.0);
        assert_eq!(copy.refresh_interval(), 0.0);
        assert_eq!(sink.len(), 1, "clones share the diagnostic sink");
    }
}
