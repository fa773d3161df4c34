//! Carbon intensity of electricity in cloud regions.

use std::collections::HashMap;

use enum_iterator::IntoEnumIterator;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::LookupError;
use crate::provider::CloudProvider;
use crate::region::{AwsRegion, GcpRegion, UsNercRegion};

impl AwsRegion {
    /// Returns the carbon intensity of the region in kg CO2e per Wh.
    pub fn carbon_intensity(&self) -> f64 {
        match self {
            AwsRegion::UsEast1 => UsNercRegion::Serc.emissions_factor(),
            AwsRegion::UsEast2 => UsNercRegion::Rfc.emissions_factor(),
            AwsRegion::UsWest1 => UsNercRegion::Wecc.emissions_factor(),
            AwsRegion::UsWest2 => UsNercRegion::Wecc.emissions_factor(),
            AwsRegion::AfSouth1 => 0.000000928,
            AwsRegion::ApEast1 => 0.00000081,
            AwsRegion::ApSouth1 => 0.000000708,
            AwsRegion::ApNortheast3 => 0.000000506,
            AwsRegion::ApNortheast2 => 0.0000005,
            AwsRegion::ApSoutheast1 => 0.0000004188,
            AwsRegion::ApSoutheast2 => 0.00000079,
            AwsRegion::ApNortheast1 => 0.000000506,
            AwsRegion::CaCentral1 => 0.00000013,
            AwsRegion::CnNorth1 => 0.000000555,
            AwsRegion::CnNorthwest1 => 0.000000555,
            AwsRegion::EuCentral1 => 0.00000037862,
            AwsRegion::EuWest1 => 0.00000034804,
            AwsRegion::EuWest2 => 0.00000023314,
            AwsRegion::EuSouth1 => 0.00000033854,
            AwsRegion::EuWest3 => 0.00000003895,
            AwsRegion::EuNorth1 => 0.00000001189,
            AwsRegion::MeSouth1 => 0.000000732,
            AwsRegion::SaEast1 => 0.000000074,
            AwsRegion::UsGovEast1 => UsNercRegion::Serc.emissions_factor(),
            AwsRegion::UsGovWest1 => UsNercRegion::Wecc.emissions_factor(),
        }
    }
}

impl GcpRegion {
    /// Returns the carbon intensity of the region in kg CO2e per Wh.
    pub fn carbon_intensity(&self) -> f64 {
        match self {
            GcpRegion::AsiaEast1 => 0.000000554,
            GcpRegion::AsiaEast2 => 0.00000081,
            GcpRegion::AsiaNortheast1 => 0.000000506,
            GcpRegion::AsiaNortheast2 => 0.000000506,
            GcpRegion::AsiaNortheast3 => 0.0000005,
            GcpRegion::AsiaSouth1 => 0.000000708,
            GcpRegion::AsiaSoutheast1 => 0.0000004188,
            GcpRegion::AsiaSoutheast2 => 0.000000761,
            GcpRegion::AustraliaSoutheast1 => 0.00000079,
            GcpRegion::EuropeNorth1 => 0.00000013622,
            GcpRegion::EuropeWest1 => 0.00000015313,
            GcpRegion::EuropeWest2 => 0.00000023314,
            GcpRegion::EuropeWest3 => 0.00000037862,
            GcpRegion::EuropeWest4 => 0.00000045207,
            GcpRegion::EuropeWest6 => 0.00000001182,
            GcpRegion::NorthamericaNortheast1 => 0.00000013,
            GcpRegion::SouthamericaEast1 => 0.000000074,
            GcpRegion::UsCentral1 => UsNercRegion::Mro.emissions_factor(),
            GcpRegion::UsEast1 => UsNercRegion::Serc.emissions_factor(),
            GcpRegion::UsEast4 => UsNercRegion::Serc.emissions_factor(),
            GcpRegion::UsWest1 => UsNercRegion::Wecc.emissions_factor(),
            GcpRegion::UsWest2 => UsNercRegion::Wecc.emissions_factor(),
            GcpRegion::UsWest3 => UsNercRegion::Wecc.emissions_factor(),
            GcpRegion::UsWest4 => UsNercRegion::Wecc.emissions_factor(),
            // average of the regions above, kept as a literal
            GcpRegion::Unknown => 0.0000004153497083,
        }
    }
}

/// Carbon intensity in kg CO2e per Wh by provider and region identifier.
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct CarbonIntensityTable {
    ratios: HashMap<CloudProvider, HashMap<String, f64>>,
}

impl CarbonIntensityTable {
    /// Creates the table holding the built-in carbon intensity of every known region.
    pub fn builtin() -> Self {
        let mut ratios = HashMap::new();
        ratios.insert(
            CloudProvider::Aws,
            AwsRegion::into_enum_iter()
                .map(|region| (region.as_str().to_string(), region.carbon_intensity()))
                .collect(),
        );
        ratios.insert(
            CloudProvider::Gcp,
            GcpRegion::into_enum_iter()
                .map(|region| (region.as_str().to_string(), region.carbon_intensity()))
                .collect(),
        );
        Self { ratios }
    }

    /// Returns the carbon intensity of the provider region, if the table has it.
    pub fn get(&self, provider: CloudProvider, region: &str) -> Option<f64> {
        self.ratios.get(&provider).and_then(|by_region| by_region.get(region)).copied()
    }

    /// Returns the carbon intensity of the provider region.
    pub fn lookup(&self, provider: CloudProvider, region: &str) -> Result<f64, LookupError> {
        self.get(provider, region).ok_or_else(|| LookupError::UnknownRegion {
            provider,
            region: region.to_string(),
        })
    }

    /// Iterates over the region identifiers present in the table for the provider.
    pub fn regions(&self, provider: CloudProvider) -> impl Iterator<Item = &str> {
        self.ratios
            .get(&provider)
            .into_iter()
            .flat_map(|by_region| by_region.keys().map(|region| region.as_str()))
    }

    pub(crate) fn set(&mut self, provider: CloudProvider, region: String, ratio: f64) {
        self.ratios.entry(provider).or_default().insert(region, ratio);
    }
}

impl Default for CarbonIntensityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

static CARBON_INTENSITY_TABLE: Lazy<CarbonIntensityTable> = Lazy::new(CarbonIntensityTable::builtin);

/// Returns the process-wide built-in carbon intensity table.
pub fn carbon_intensity_table() -> &'static CarbonIntensityTable {
    &*CARBON_INTENSITY_TABLE
}

/// Returns the built-in carbon intensity of the provider region in kg CO2e per Wh.
///
/// Unlike PUE resolution, an unknown region is an error rather than a fallback to some average.
pub fn carbon_intensity(provider: CloudProvider, region: &str) -> Result<f64, LookupError> {
    match provider {
        CloudProvider::Aws => region.parse::<AwsRegion>().map(|region| region.carbon_intensity()),
        CloudProvider::Gcp => region.parse::<GcpRegion>().map(|region| region.carbon_intensity()),
    }
}

/// Converts the consumed energy into emitted kg CO2e.
///
/// * `estimated_watt_hours` - Consumed energy in Wh. Not validated: negative and NaN values propagate.
/// * `cloud_provider` - Provider identifier, e.g. `"AWS"`.
/// * `region` - Region identifier of that provider, e.g. `"us-east-1"`.
pub fn estimate_co2(estimated_watt_hours: f64, cloud_provider: &str, region: &str) -> Result<f64, LookupError> {
    let provider: CloudProvider = cloud_provider.parse()?;
    Ok(estimated_watt_hours * carbon_intensity(provider, region)?)
}
