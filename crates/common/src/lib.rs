//! Ad-unit configuration for mobile ad requests.
//!
//! This crate describes one ad placement: its identifier, size, format,
//! refresh cadence and first-party metadata, plus the mirrored record the
//! rendering pipeline consumes.
//!
//! # Modules
//!
//! - [`ad_configuration`]: Internal record mirrored from an ad unit
//! - [`ad_unit`]: The ad-unit configuration object and its normalization rules
//! - [`constants`]: Refresh-interval bounds and environment prefixes
//! - [`content`]: App content and user data metadata
//! - [`diagnostics`]: Warning side channel for normalized input
//! - [`error`]: Error types for settings and validation
//! - [`models`]: Sizes, formats, positions and placement types
//! - [`openrtb`]: `OpenRTB` projection of an ad unit
//! - [`settings`]: Ad-unit definitions loaded from TOML
//! - [`test_support`]: Testing utilities

pub mod ad_configuration;
pub mod ad_unit;
pub mod constants;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod openrtb;
pub mod settings;

pub use ad_configuration::{AdConfiguration, AdFormatInternal};
pub use ad_unit::AdUnitConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, RecordingSink};
pub use models::{AdFormat, AdPosition, AdSize, SizePercentage, VideoPlacementType};
