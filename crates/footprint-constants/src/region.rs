//! Region identifiers of the supported cloud providers.
//!
//! These enumerations are the source of valid region identifiers: every region listed here
//! has an entry in the carbon intensity table of its provider.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_iterator::IntoEnumIterator;
use serde::Serialize;

use crate::error::LookupError;
use crate::provider::CloudProvider;

/// AWS region.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Serialize, IntoEnumIterator)]
#[allow(missing_docs)]
pub enum AwsRegion {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    AfSouth1,
    ApEast1,
    ApSouth1,
    ApNortheast3,
    ApNortheast2,
    ApSoutheast1,
    ApSoutheast2,
    ApNortheast1,
    CaCentral1,
    CnNorth1,
    CnNorthwest1,
    EuCentral1,
    EuWest1,
    EuWest2,
    EuSouth1,
    EuWest3,
    EuNorth1,
    MeSouth1,
    SaEast1,
    UsGovEast1,
    UsGovWest1,
}

impl AwsRegion {
    /// Returns the region identifier, e.g. `"us-east-1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AwsRegion::UsEast1 => "us-east-1",
            AwsRegion::UsEast2 => "us-east-2",
            AwsRegion::UsWest1 => "us-west-1",
            AwsRegion::UsWest2 => "us-west-2",
            AwsRegion::AfSouth1 => "af-south-1",
            AwsRegion::ApEast1 => "ap-east-1",
            AwsRegion::ApSouth1 => "ap-south-1",
            AwsRegion::ApNortheast3 => "ap-northeast-3",
            AwsRegion::ApNortheast2 => "ap-northeast-2",
            AwsRegion::ApSoutheast1 => "ap-southeast-1",
            AwsRegion::ApSoutheast2 => "ap-southeast-2",
            AwsRegion::ApNortheast1 => "ap-northeast-1",
            AwsRegion::CaCentral1 => "ca-central-1",
            AwsRegion::CnNorth1 => "cn-north-1",
            AwsRegion::CnNorthwest1 => "cn-northwest-1",
            AwsRegion::EuCentral1 => "eu-central-1",
            AwsRegion::EuWest1 => "eu-west-1",
            AwsRegion::EuWest2 => "eu-west-2",
            AwsRegion::EuSouth1 => "eu-south-1",
            AwsRegion::EuWest3 => "eu-west-3",
            AwsRegion::EuNorth1 => "eu-north-1",
            AwsRegion::MeSouth1 => "me-south-1",
            AwsRegion::SaEast1 => "sa-east-1",
            AwsRegion::UsGovEast1 => "us-gov-east-1",
            AwsRegion::UsGovWest1 => "us-gov-west-1",
        }
    }
}

/// GCP region.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Serialize, IntoEnumIterator)]
#[allow(missing_docs)]
pub enum GcpRegion {
    AsiaEast1,
    AsiaEast2,
    AsiaNortheast1,
    AsiaNortheast2,
    AsiaNortheast3,
    AsiaSouth1,
    AsiaSoutheast1,
    AsiaSoutheast2,
    AustraliaSoutheast1,
    EuropeNorth1,
    EuropeWest1,
    EuropeWest2,
    EuropeWest3,
    EuropeWest4,
    EuropeWest6,
    NorthamericaNortheast1,
    SouthamericaEast1,
    UsCentral1,
    UsEast1,
    UsEast4,
    UsWest1,
    UsWest2,
    UsWest3,
    UsWest4,
    /// Usage the billing data does not attribute to any region.
    Unknown,
}

impl GcpRegion {
    /// Returns the region identifier, e.g. `"us-east1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GcpRegion::AsiaEast1 => "asia-east1",
            GcpRegion::AsiaEast2 => "asia-east2",
            GcpRegion::AsiaNortheast1 => "asia-northeast1",
            GcpRegion::AsiaNortheast2 => "asia-northeast2",
            GcpRegion::AsiaNortheast3 => "asia-northeast3",
            GcpRegion::AsiaSouth1 => "asia-south1",
            GcpRegion::AsiaSoutheast1 => "asia-southeast1",
            GcpRegion::AsiaSoutheast2 => "asia-southeast2",
            GcpRegion::AustraliaSoutheast1 => "australia-southeast1",
            GcpRegion::EuropeNorth1 => "europe-north1",
            GcpRegion::EuropeWest1 => "europe-west1",
            GcpRegion::EuropeWest2 => "europe-west2",
            GcpRegion::EuropeWest3 => "europe-west3",
            GcpRegion::EuropeWest4 => "europe-west4",
            GcpRegion::EuropeWest6 => "europe-west6",
            GcpRegion::NorthamericaNortheast1 => "northamerica-northeast1",
            GcpRegion::SouthamericaEast1 => "southamerica-east1",
            GcpRegion::UsCentral1 => "us-central1",
            GcpRegion::UsEast1 => "us-east1",
            GcpRegion::UsEast4 => "us-east4",
            GcpRegion::UsWest1 => "us-west1",
            GcpRegion::UsWest2 => "us-west2",
            GcpRegion::UsWest3 => "us-west3",
            GcpRegion::UsWest4 => "us-west4",
            GcpRegion::Unknown => "unknown",
        }
    }
}

impl Display for AwsRegion {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for GcpRegion {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AwsRegion {
    type Err = LookupError;

    fn from_str(input: &str) -> Result<AwsRegion, Self::Err> {
        AwsRegion::into_enum_iter()
            .find(|region| region.as_str() == input)
            .ok_or_else(|| LookupError::UnknownRegion {
                provider: CloudProvider::Aws,
                region: input.to_string(),
            })
    }
}

impl FromStr for GcpRegion {
    type Err = LookupError;

    fn from_str(input: &str) -> Result<GcpRegion, Self::Err> {
        GcpRegion::into_enum_iter()
            .find(|region| region.as_str() == input)
            .ok_or_else(|| LookupError::UnknownRegion {
                provider: CloudProvider::Gcp,
                region: input.to_string(),
            })
    }
}

/// Returns the identifiers of all regions known for the provider.
pub fn region_ids(provider: CloudProvider) -> Vec<&'static str> {
    match provider {
        CloudProvider::Aws => AwsRegion::into_enum_iter().map(|r| r.as_str()).collect(),
        CloudProvider::Gcp => GcpRegion::into_enum_iter().map(|r| r.as_str()).collect(),
    }
}

/// Checks that `region` is a known region identifier of `provider`.
pub fn validate_region(provider: CloudProvider, region: &str) -> Result<(), LookupError> {
    match provider {
        CloudProvider::Aws => region.parse::<AwsRegion>().map(|_| ()),
        CloudProvider::Gcp => region.parse::<GcpRegion>().map(|_| ()),
    }
}

/// North American Electric Reliability Corporation (NERC) grid region.
///
/// US cloud regions take the emission factor of the grid region they are located in.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Serialize, IntoEnumIterator)]
pub enum UsNercRegion {
    /// ReliabilityFirst Corporation.
    Rfc,
    /// SERC Reliability Corporation.
    Serc,
    /// Western Electricity Coordinating Council.
    Wecc,
    /// Midwest Reliability Organization.
    Mro,
}

impl UsNercRegion {
    /// Returns the emission factor in kg CO2e per Wh.
    pub fn emissions_factor(&self) -> f64 {
        match self {
            UsNercRegion::Rfc => 0.000000475105,
            UsNercRegion::Serc => 0.0000004545,
            UsNercRegion::Wecc => 0.000000351533,
            UsNercRegion::Mro => 0.000000540461,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_ids_are_unique() {
        for provider in CloudProvider::into_enum_iter() {
            let mut ids = region_ids(provider);
            let count = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), count, "duplicate region id for {}", provider);
        }
    }

    #[test]
    fn test_parse_region() {
        assert_eq!("us-east-1".parse::<AwsRegion>(), Ok(AwsRegion::UsEast1));
        assert_eq!("unknown".parse::<GcpRegion>(), Ok(GcpRegion::Unknown));
        assert_eq!(
            "us-east1".parse::<AwsRegion>(),
            Err(LookupError::UnknownRegion {
                provider: CloudProvider::Aws,
                region: "us-east1".to_string(),
            })
        );
    }
}
