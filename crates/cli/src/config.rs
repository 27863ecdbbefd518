//! Ad-unit settings commands.
//!
//! Settings are loaded from TOML files and merged with environment variables
//! prefixed with `AD_UNIT__`. For example, `AD_UNIT__AD_UNITS__BANNER__GPID`
//! will override `ad_units.banner.gpid` in the TOML file.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use ad_unit_config::diagnostics::{DiagnosticSink, LogSink};
use ad_unit_config::openrtb::OpenRtbRequest;
use ad_unit_config::settings::Settings;
use ad_unit_config::AdUnitConfig;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::CliError;
use crate::OutputFormat;

/// Load settings from `file`, merge environment overrides and validate.
pub(crate) fn load_settings(file: &Path) -> Result<Settings, CliError> {
    log::debug!("Loading ad unit settings from {}", file.display());

    let settings = Settings::from_file(file)?;
    settings.validate()?;

    log::info!(
        "Loaded {} ad unit definition(s) from {}",
        settings.ad_units.len(),
        file.display()
    );
    Ok(settings)
}

/// Validate a settings file.
pub fn validate(file: &Path) -> Result<(), CliError> {
    let settings = load_settings(file)?;
    writeln!(
        io::stdout().lock(),
        "✓ {} is valid ({} ad unit(s))",
        file.display(),
        settings.ad_units.len()
    )?;
    Ok(())
}

/// Materialize every ad unit and print its resolved configuration.
///
/// Normalization warnings (clamped intervals, refused video writes) are
/// logged while the units are built.
pub fn show(file: &Path, format: &OutputFormat, only: Option<&str>) -> Result<(), CliError> {
    let settings = load_settings(file)?;
    let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink);

    let mut units = settings.build_ad_units(&sink);
    if let Some(name) = only {
        units.retain(|unit_name, _| unit_name == name);
        if units.is_empty() {
            return Err(CliError::Config(format!("No ad unit named '{name}'")));
        }
    }

    write_units(&mut io::stdout().lock(), &units, format)
}

fn write_units(
    out: &mut impl Write,
    units: &BTreeMap<String, AdUnitConfig>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&render_json(units))?)?;
        }
        OutputFormat::Text => {
            for (name, unit) in units {
                write!(out, "{}", render_text(name, unit))?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

fn render_json(units: &BTreeMap<String, AdUnitConfig>) -> Value {
    let rendered: serde_json::Map<String, Value> = units
        .iter()
        .map(|(name, unit)| {
            let request = OpenRtbRequest::from_ad_unit(Uuid::new_v4().to_string(), unit);
            let value = json!({
                "config_id": unit.config_id(),
                "format": unit.ad_format(),
                "size": unit.ad_size(),
                "refresh_interval": unit.refresh_interval(),
                "ad_configuration": unit.ad_configuration(),
                "openrtb": request,
            });
            (name.clone(), value)
        })
        .collect();

    Value::Object(rendered)
}

fn render_text(name: &str, unit: &AdUnitConfig) -> String {
    let mirrored = unit.ad_configuration();
    let additional = unit
        .additional_sizes()
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "[{name}]\n  config_id:        {}\n  format:           {}\n  size:             {}\n  additional sizes: {}\n  refresh interval: {}s\n  interstitial:     {}\n  context keys:     {}\n",
        unit.config_id(),
        unit.ad_format(),
        mirrored.size(),
        if additional.is_empty() { "-" } else { additional.as_str() },
        unit.refresh_interval(),
        mirrored.is_interstitial(),
        unit.context_data().len(),
    )
}
