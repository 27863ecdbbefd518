use derive_more::{Display, Error};

/// Failures of the ambient layers around an ad unit (settings, validation).
///
/// Mutating an [`crate::ad_unit::AdUnitConfig`] never fails: invalid input is
/// normalized and reported through [`crate::diagnostics`]. These variants only
/// come from loading definitions and turning them into configurations.
#[derive(Debug, Display, Error)]
pub enum AdUnitError {
    /// Settings could not be read or deserialized.
    #[display("Configuration error: {message}")]
    Configuration { message: String },

    /// A definition was read but failed validation.
    #[display("Invalid ad unit '{name}': {message}")]
    InvalidAdUnit { name: String, message: String },

    /// A size string did not match `WIDTHxHEIGHT`.
    #[display("Invalid ad size '{value}'")]
    InvalidSize { value: String },

    /// Output could not be serialized.
    #[display("Serialization error: {message}")]
    Serialization { message: String },
}
