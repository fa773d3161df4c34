#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod carbon;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod region;

pub use carbon::{carbon_intensity, carbon_intensity_table, estimate_co2, CarbonIntensityTable};
pub use config::FootprintConstants;
pub use constants::{cloud_constants, resolve_pue, CloudConstantsByProvider, StorageMedium};
pub use error::{ConfigError, LookupError};
pub use provider::CloudProvider;
pub use region::{AwsRegion, GcpRegion, UsNercRegion};
