//! Ad-unit definitions loaded from TOML.
//!
//! Definitions live under `[ad_units.<name>]` tables. Environment variables
//! prefixed with `AD_UNIT__` override file values, using `__` between path
//! segments, e.g. `AD_UNIT__AD_UNITS__BANNER__CONFIG_ID`.
//!
//! ```toml
//! [ad_units.banner]
//! config_id = "prebid-demo-banner-320-50"
//! size = "320x50"
//! additional_sizes = ["300x250"]
//! refresh_interval = 30
//! position = "footer"
//!
//! [ad_units.banner.context_data]
//! genre = ["rock", "jazz"]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use config::{Config, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::ad_unit::AdUnitConfig;
use crate::constants::{ENV_PREFIX, ENV_SEPARATOR};
use crate::diagnostics::DiagnosticSink;
use crate::error::AdUnitError;
use crate::models::{AdFormat, AdPosition, AdSize, SizePercentage, VideoPlacementType};

/// One ad placement as written in a settings file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdUnitDefinition {
    #[validate(length(min = 1))]
    pub config_id: String,
    #[serde(default)]
    pub format: AdFormat,
    #[serde(default, deserialize_with = "optional_size")]
    pub size: Option<AdSize>,
    #[serde(default, deserialize_with = "size_list")]
    pub additional_sizes: Vec<AdSize>,
    /// Applied through the normal setter, so out-of-range values are clamped.
    pub refresh_interval: Option<f64>,
    #[serde(default)]
    pub position: AdPosition,
    #[serde(default)]
    pub interstitial: bool,
    #[serde(default)]
    pub opt_in: bool,
    #[serde(default)]
    pub video_placement: VideoPlacementType,
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_width_percentage: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_height_percentage: Option<f64>,
    #[serde(default)]
    pub context_data: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub context_keywords: Vec<String>,
    pub gpid: Option<String>,
    pub pb_ad_slot: Option<String>,
}

impl AdUnitDefinition {
    /// Builds a configuration by replaying the definition through the public
    /// setters. Format is applied before the refresh interval.
    #[must_use]
    pub fn to_ad_unit_config(&self, sink: Arc<dyn DiagnosticSink>) -> AdUnitConfig {
        let size = self.size.unwrap_or_default();
        let mut config =
            AdUnitConfig::with_size(self.config_id.clone(), size).with_diagnostic_sink(sink);

        config.set_ad_format(self.format);
        if let Some(seconds) = self.refresh_interval {
            config.set_refresh_interval(seconds);
        }
        if !self.additional_sizes.is_empty() {
            config.set_additional_sizes(Some(self.additional_sizes.clone()));
        }
        config.set_ad_position(self.position);
        config.set_interstitial(self.interstitial);
        config.set_opt_in(self.opt_in);
        config.set_video_placement_type(self.video_placement);

        if let (Some(width), Some(height)) = (self.min_width_percentage, self.min_height_percentage)
        {
            config.set_min_size_percentage(Some(SizePercentage::new(width, height)));
        }

        for (key, values) in &self.context_data {
            config.update_context_data(key.clone(), values.iter().cloned());
        }
        config.add_context_keywords(self.context_keywords.iter().cloned());
        config.set_gpid(self.gpid.clone());
        config.set_pb_ad_slot(self.pb_ad_slot.clone());

        config
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ad_units: BTreeMap<String, AdUnitDefinition>,
}

impl Settings {
    /// Parses settings from a TOML string, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or does not match the schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<AdUnitError>> {
        Self::from_toml_with_environment(toml_str, Self::environment())
    }

    /// Parses settings from a TOML string, layering `environment` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or does not match the schema.
    pub fn from_toml_with_environment(
        toml_str: &str,
        environment: Environment,
    ) -> Result<Self, Report<AdUnitError>> {
        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()
            .change_context(AdUnitError::Configuration {
                message: "Failed to build configuration".to_string(),
            })?;

        config
            .try_deserialize()
            .change_context(AdUnitError::Configuration {
                message: "Failed to deserialize ad unit settings".to_string(),
            })
    }

    /// Environment source for `AD_UNIT__` overrides.
    #[must_use]
    pub fn environment() -> Environment {
        Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
    }

    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, Report<AdUnitError>> {
        let content = fs::read_to_string(path).change_context(AdUnitError::Configuration {
            message: format!("Failed to read {}", path.display()),
        })?;

        Self::from_toml(&content)
    }

    /// Validates every definition.
    ///
    /// # Errors
    ///
    /// Returns [`AdUnitError::InvalidAdUnit`] for the first definition that
    /// fails validation.
    pub fn validate(&self) -> Result<(), Report<AdUnitError>> {
        for (name, definition) in &self.ad_units {
            definition
                .validate()
                .change_context(AdUnitError::InvalidAdUnit {
                    name: name.clone(),
                    message: "validation failed".to_string(),
                })?;

            if definition.min_width_percentage.is_some()
                != definition.min_height_percentage.is_some()
            {
                return Err(Report::new(AdUnitError::InvalidAdUnit {
                    name: name.clone(),
                    message: "min_width_percentage and min_height_percentage must be set together"
                        .to_string(),
                }));
            }
        }

        Ok(())
    }

    /// Builds one configuration per definition, keyed by definition name.
    #[must_use]
    pub fn build_ad_units(&self, sink: &Arc<dyn DiagnosticSink>) -> BTreeMap<String, AdUnitConfig> {
        self.ad_units
            .iter()
            .map(|(name, definition)| {
                log::debug!("Building ad unit {name}");
                (name.clone(), definition.to_ad_unit_config(Arc::clone(sink)))
            })
            .collect()
    }
}

fn optional_size<'de, D>(deserializer: D) -> Result<Option<AdSize>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_size::<D::Error>(&raw))
        .transpose()
}

fn size_list<'de, D>(deserializer: D) -> Result<Vec<AdSize>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|raw| parse_size::<D::Error>(raw))
        .collect()
}

fn parse_size<E: serde::de::Error>(raw: &str) -> Result<AdSize, E> {
    raw.parse::<AdSize>()
        .map_err(|report| E::custom(report.current_context()))
}
