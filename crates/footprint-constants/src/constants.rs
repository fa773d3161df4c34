//! Per-provider hardware and data center constants.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::provider::CloudProvider;
use crate::region::GcpRegion;

/// Storage media types with distinct energy coefficients.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize)]
pub enum StorageMedium {
    /// Solid-state drive.
    Ssd,
    /// Hard disk drive.
    Hdd,
}

/// Physical and operational constants of a single cloud provider.
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct CloudConstantsByProvider {
    /// SSD energy coefficient in Wh per TB-hour.
    pub ssd_coefficient: f64,
    /// HDD energy coefficient in Wh per TB-hour.
    pub hdd_coefficient: f64,
    /// CPU power draw in W at 0% utilization.
    pub min_watts: f64,
    /// CPU power draw in W at 100% utilization.
    pub max_watts: f64,
    /// Provider-wide power usage effectiveness.
    pub pue_average: f64,
    /// Measured trailing twelve month PUE by region identifier.
    pub pue_trailing_twelve_month: Option<HashMap<String, f64>>,
    /// Utilization in percent assumed when no telemetry is available.
    pub average_cpu_utilization: f64,
}

impl CloudConstantsByProvider {
    /// Returns the built-in GCP constants.
    pub fn gcp() -> Self {
        let pue_trailing_twelve_month: HashMap<String, f64> = [
            (GcpRegion::UsEast1, 1.102),
            (GcpRegion::UsCentral1, 1.11),
            (GcpRegion::UsWest1, 1.095),
            (GcpRegion::EuropeWest1, 1.08),
            (GcpRegion::EuropeWest4, 1.09),
            (GcpRegion::EuropeNorth1, 1.09),
            (GcpRegion::AsiaEast1, 1.13),
            (GcpRegion::AsiaSoutheast1, 1.14),
            (GcpRegion::SouthamericaEast1, 1.09),
        ]
        .into_iter()
        .map(|(region, pue)| (region.as_str().to_string(), pue))
        .collect();

        Self {
            ssd_coefficient: 1.2,
            hdd_coefficient: 0.65,
            min_watts: 0.58,
            max_watts: 3.54,
            pue_average: 1.1,
            pue_trailing_twelve_month: Some(pue_trailing_twelve_month),
            average_cpu_utilization: 50.,
        }
    }

    /// Returns the built-in AWS constants.
    pub fn aws() -> Self {
        Self {
            ssd_coefficient: 1.2,
            hdd_coefficient: 0.65,
            min_watts: 0.59,
            max_watts: 3.5,
            pue_average: 1.2,
            pue_trailing_twelve_month: None,
            average_cpu_utilization: 50.,
        }
    }

    /// Returns the built-in constants of the given provider.
    pub fn builtin(provider: CloudProvider) -> Self {
        match provider {
            CloudProvider::Aws => Self::aws(),
            CloudProvider::Gcp => Self::gcp(),
        }
    }

    /// Returns the PUE of the region.
    ///
    /// Falls back to the provider average if the region is omitted or has no trailing twelve month value.
    pub fn resolve_pue(&self, region: Option<&str>) -> f64 {
        let measured = region.and_then(|region| {
            self.pue_trailing_twelve_month
                .as_ref()
                .and_then(|pue_by_region| pue_by_region.get(region))
        });
        match measured {
            Some(pue) => *pue,
            None => {
                debug!(
                    "No trailing twelve month PUE for region {:?}, using average {}",
                    region, self.pue_average
                );
                self.pue_average
            }
        }
    }

    /// Returns the CPU power draw in W by linear interpolation between `min_watts` and `max_watts`.
    ///
    /// * `cpu_utilization` - Utilization from 0 to 1. If absent, `average_cpu_utilization` is used.
    pub fn average_watts(&self, cpu_utilization: Option<f64>) -> f64 {
        let utilization = cpu_utilization.unwrap_or(self.average_cpu_utilization / 100.);
        self.min_watts + utilization * (self.max_watts - self.min_watts)
    }

    /// Returns the energy coefficient of the storage medium in Wh per TB-hour.
    pub fn storage_coefficient(&self, medium: StorageMedium) -> f64 {
        match medium {
            StorageMedium::Ssd => self.ssd_coefficient,
            StorageMedium::Hdd => self.hdd_coefficient,
        }
    }
}

static AWS_CONSTANTS: Lazy<CloudConstantsByProvider> = Lazy::new(CloudConstantsByProvider::aws);
static GCP_CONSTANTS: Lazy<CloudConstantsByProvider> = Lazy::new(CloudConstantsByProvider::gcp);

/// Returns the process-wide built-in constants of the provider.
pub fn cloud_constants(provider: CloudProvider) -> &'static CloudConstantsByProvider {
    match provider {
        CloudProvider::Aws => &*AWS_CONSTANTS,
        CloudProvider::Gcp => &*GCP_CONSTANTS,
    }
}

/// Returns the PUE of the provider region using the built-in constants.
pub fn resolve_pue(provider: CloudProvider, region: Option<&str>) -> f64 {
    cloud_constants(provider).resolve_pue(region)
}
