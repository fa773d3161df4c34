//! Error types.

use thiserror::Error;

use crate::provider::CloudProvider;

/// Failure to find a provider or region in a constants table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The provider identifier is not one of the supported providers.
    #[error("unknown cloud provider `{0}`")]
    UnknownProvider(String),
    /// The region identifier is not known for the given provider.
    #[error("unknown region `{region}` for cloud provider {provider}")]
    UnknownRegion {
        /// Provider the region was looked up for.
        provider: CloudProvider,
        /// Region identifier as passed by the caller.
        region: String,
    },
}

/// Failure to build a constants set from a YAML config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("can't read file {path}")]
    Io {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config is not valid YAML or does not match the expected shape.
    #[error("can't parse YAML config")]
    Parse(#[from] serde_yaml::Error),
    /// The config names a provider or region missing from the region enumerations.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The config sets a value outside of its physical range.
    #[error("invalid value {value} of {field} for cloud provider {provider}")]
    InvalidValue {
        /// Provider the value was set for.
        provider: CloudProvider,
        /// Name of the field, or of the region for carbon intensity and trailing twelve month PUE.
        field: String,
        /// Rejected value.
        value: f64,
    },
}
