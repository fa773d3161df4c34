//! Footprint constants customizable from a YAML config.

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::carbon::CarbonIntensityTable;
use crate::constants::CloudConstantsByProvider;
use crate::error::{ConfigError, LookupError};
use crate::provider::CloudProvider;
use crate::region::validate_region;

/// Holds overrides of a single provider constants parsed from YAML.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
struct RawProviderConstants {
    pub ssd_coefficient: Option<f64>,
    pub hdd_coefficient: Option<f64>,
    pub min_watts: Option<f64>,
    pub max_watts: Option<f64>,
    pub pue_average: Option<f64>,
    pub pue_trailing_twelve_month: Option<HashMap<String, f64>>,
    pub average_cpu_utilization: Option<f64>,
}

/// Holds raw constants config parsed from YAML.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
struct RawFootprintConfig {
    pub providers: Option<HashMap<String, RawProviderConstants>>,
    pub carbon_intensity: Option<HashMap<String, HashMap<String, f64>>>,
}

/// Immutable set of provider constants and carbon intensity table.
///
/// The default set holds the built-in values, the same ones returned by
/// [`cloud_constants`](crate::constants::cloud_constants) and
/// [`carbon_intensity_table`](crate::carbon::carbon_intensity_table).
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct FootprintConstants {
    aws: CloudConstantsByProvider,
    gcp: CloudConstantsByProvider,
    carbon_intensity: CarbonIntensityTable,
}

impl Default for FootprintConstants {
    fn default() -> Self {
        Self {
            aws: CloudConstantsByProvider::aws(),
            gcp: CloudConstantsByProvider::gcp(),
            carbon_intensity: CarbonIntensityTable::builtin(),
        }
    }
}

impl FootprintConstants {
    /// Creates constants by reading overrides from YAML file
    /// (uses built-in values for everything the file does not set).
    pub fn from_file(file_name: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(file_name).map_err(|source| ConfigError::Io {
            path: file_name.to_string(),
            source,
        })?;
        info!("Loading footprint constants from {}", file_name);
        Self::from_yaml_str(&content)
    }

    /// Creates constants from YAML overrides.
    ///
    /// A trailing twelve month PUE table given for a provider replaces the built-in one as a whole.
    /// A document without content (only comments or `~`) keeps all built-in values.
    ///
    /// Values must be finite. Coefficients, watts and carbon intensities must be non-negative,
    /// PUE values at least 1, `min_watts` at most `max_watts` and utilization within 0-100 percent.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawFootprintConfig = if is_blank_document(yaml) {
            RawFootprintConfig::default()
        } else {
            serde_yaml::from_str::<Option<RawFootprintConfig>>(yaml)?.unwrap_or_default()
        };
        let mut result = Self::default();

        for (provider_id, overrides) in raw.providers.unwrap_or_default() {
            let provider: CloudProvider = provider_id.parse()?;
            debug!("Applying constants overrides for {}", provider);
            overrides.apply(provider, result.provider_mut(provider))?;
        }

        for (provider_id, ratios) in raw.carbon_intensity.unwrap_or_default() {
            let provider: CloudProvider = provider_id.parse()?;
            for (region, ratio) in ratios {
                validate_region(provider, &region)?;
                check_value(provider, &region, ratio, ratio >= 0.)?;
                debug!("Setting carbon intensity of {} {} to {}", provider, region, ratio);
                result.carbon_intensity.set(provider, region, ratio);
            }
        }

        Ok(result)
    }

    /// Returns the constants of the provider.
    pub fn provider(&self, provider: CloudProvider) -> &CloudConstantsByProvider {
        match provider {
            CloudProvider::Aws => &self.aws,
            CloudProvider::Gcp => &self.gcp,
        }
    }

    fn provider_mut(&mut self, provider: CloudProvider) -> &mut CloudConstantsByProvider {
        match provider {
            CloudProvider::Aws => &mut self.aws,
            CloudProvider::Gcp => &mut self.gcp,
        }
    }

    /// Returns the carbon intensity table.
    pub fn carbon_intensity_table(&self) -> &CarbonIntensityTable {
        &self.carbon_intensity
    }

    /// Returns the PUE of the provider region, falling back to the provider average.
    pub fn resolve_pue(&self, provider: CloudProvider, region: Option<&str>) -> f64 {
        self.provider(provider).resolve_pue(region)
    }

    /// Returns the carbon intensity of the provider region in kg CO2e per Wh.
    pub fn carbon_intensity(&self, provider: CloudProvider, region: &str) -> Result<f64, LookupError> {
        self.carbon_intensity.lookup(provider, region)
    }

    /// Converts the consumed energy in Wh into emitted kg CO2e.
    pub fn estimate_co2(
        &self,
        estimated_watt_hours: f64,
        cloud_provider: &str,
        region: &str,
    ) -> Result<f64, LookupError> {
        let provider: CloudProvider = cloud_provider.parse()?;
        Ok(estimated_watt_hours * self.carbon_intensity(provider, region)?)
    }
}

impl RawProviderConstants {
    fn apply(self, provider: CloudProvider, constants: &mut CloudConstantsByProvider) -> Result<(), ConfigError> {
        if let Some(pue_by_region) = &self.pue_trailing_twelve_month {
            for (region, pue) in pue_by_region {
                validate_region(provider, region)?;
                check_value(provider, region, *pue, *pue >= 1.)?;
            }
        }
        constants.ssd_coefficient = self.ssd_coefficient.unwrap_or(constants.ssd_coefficient);
        constants.hdd_coefficient = self.hdd_coefficient.unwrap_or(constants.hdd_coefficient);
        constants.min_watts = self.min_watts.unwrap_or(constants.min_watts);
        constants.max_watts = self.max_watts.unwrap_or(constants.max_watts);
        constants.pue_average = self.pue_average.unwrap_or(constants.pue_average);
        constants.average_cpu_utilization = self
            .average_cpu_utilization
            .unwrap_or(constants.average_cpu_utilization);
        if self.pue_trailing_twelve_month.is_some() {
            constants.pue_trailing_twelve_month = self.pue_trailing_twelve_month;
        }

        // merged values: max_watts is compared with the effective min_watts
        check_value(provider, "ssd_coefficient", constants.ssd_coefficient, constants.ssd_coefficient >= 0.)?;
        check_value(provider, "hdd_coefficient", constants.hdd_coefficient, constants.hdd_coefficient >= 0.)?;
        check_value(provider, "min_watts", constants.min_watts, constants.min_watts >= 0.)?;
        check_value(
            provider,
            "max_watts",
            constants.max_watts,
            constants.max_watts >= constants.min_watts,
        )?;
        check_value(provider, "pue_average", constants.pue_average, constants.pue_average >= 1.)?;
        check_value(
            provider,
            "average_cpu_utilization",
            constants.average_cpu_utilization,
            (0. ..=100.).contains(&constants.average_cpu_utilization),
        )
    }
}

fn check_value(provider: CloudProvider, field: &str, value: f64, in_range: bool) -> Result<(), ConfigError> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            provider,
            field: field.to_string(),
            value,
        })
    }
}

/// Checks whether the YAML text holds no nodes at all, e.g. only comments.
fn is_blank_document(yaml: &str) -> bool {
    yaml.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'))
}
