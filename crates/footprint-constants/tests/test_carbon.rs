use approx::assert_abs_diff_eq;
use enum_iterator::IntoEnumIterator;

use footprint_constants::carbon::{carbon_intensity, carbon_intensity_table, estimate_co2};
use footprint_constants::error::LookupError;
use footprint_constants::provider::CloudProvider;
use footprint_constants::region::{region_ids, AwsRegion, GcpRegion, UsNercRegion};

#[test]
fn test_estimate_co2_aws_us_east_1() {
    assert_abs_diff_eq!(
        estimate_co2(100., "AWS", "us-east-1").unwrap(),
        100. * 0.0000004545,
        epsilon = 1e-18
    );
}

#[test]
fn test_estimate_co2_is_energy_times_intensity() {
    let table = carbon_intensity_table();
    for provider in CloudProvider::into_enum_iter() {
        for region in table.regions(provider) {
            let ratio = table.get(provider, region).unwrap();
            for watt_hours in [0., 1., 12.5, 1e6] {
                assert_eq!(
                    estimate_co2(watt_hours, provider.as_str(), region).unwrap(),
                    watt_hours * ratio
                );
            }
        }
    }
}

#[test]
fn test_zero_energy_emits_nothing() {
    for provider in CloudProvider::into_enum_iter() {
        for region in region_ids(provider) {
            assert_eq!(estimate_co2(0., provider.as_str(), region).unwrap(), 0.);
        }
    }
}

#[test]
fn test_unknown_provider_fails() {
    assert_eq!(
        estimate_co2(100., "AZURE", "us-east-1"),
        Err(LookupError::UnknownProvider("AZURE".to_string()))
    );
    assert_eq!(
        estimate_co2(100., "aws", "us-east-1"),
        Err(LookupError::UnknownProvider("aws".to_string()))
    );
}

#[test]
// Unlike PUE, carbon intensity never falls back to an average.
fn test_unknown_region_fails() {
    assert_eq!(
        estimate_co2(100., "AWS", "unknown"),
        Err(LookupError::UnknownRegion {
            provider: CloudProvider::Aws,
            region: "unknown".to_string(),
        })
    );
    assert_eq!(
        estimate_co2(100., "GCP", "us-east-1"),
        Err(LookupError::UnknownRegion {
            provider: CloudProvider::Gcp,
            region: "us-east-1".to_string(),
        })
    );
    assert!(carbon_intensity_table().get(CloudProvider::Gcp, "mars-north1").is_none());
}

#[test]
fn test_every_region_has_carbon_intensity() {
    let table = carbon_intensity_table();
    for provider in CloudProvider::into_enum_iter() {
        let regions = region_ids(provider);
        for region in &regions {
            assert!(
                table.get(provider, region).is_some(),
                "no carbon intensity for {} {}",
                provider,
                region
            );
            assert!(carbon_intensity(provider, region).is_ok());
        }
        assert_eq!(table.regions(provider).count(), regions.len());
    }
    assert_eq!(region_ids(CloudProvider::Aws).len(), 25);
    assert_eq!(region_ids(CloudProvider::Gcp).len(), 25);
}

#[test]
fn test_nerc_regions() {
    let factors: Vec<f64> = UsNercRegion::into_enum_iter().map(|r| r.emissions_factor()).collect();
    assert_eq!(factors.len(), 4);
    for (i, factor) in factors.iter().enumerate() {
        assert!(*factor > 0.);
        assert!(factors[i + 1..].iter().all(|other| other != factor));
    }

    assert_eq!(AwsRegion::UsEast1.carbon_intensity(), UsNercRegion::Serc.emissions_factor());
    assert_eq!(AwsRegion::UsEast2.carbon_intensity(), UsNercRegion::Rfc.emissions_factor());
    assert_eq!(AwsRegion::UsWest2.carbon_intensity(), UsNercRegion::Wecc.emissions_factor());
    assert_eq!(AwsRegion::UsGovEast1.carbon_intensity(), 0.0000004545);
    assert_eq!(AwsRegion::UsGovWest1.carbon_intensity(), 0.000000351533);
    assert_eq!(GcpRegion::UsCentral1.carbon_intensity(), 0.000000540461);
    assert_eq!(GcpRegion::UsEast4.carbon_intensity(), UsNercRegion::Serc.emissions_factor());
    assert_eq!(GcpRegion::UsWest4.carbon_intensity(), UsNercRegion::Wecc.emissions_factor());
}

#[test]
fn test_gcp_unknown_region() {
    assert_eq!(carbon_intensity(CloudProvider::Gcp, "unknown"), Ok(0.0000004153497083));
    assert_abs_diff_eq!(
        estimate_co2(1000., "GCP", "unknown").unwrap(),
        0.0004153497083,
        epsilon = 1e-15
    );
}

#[test]
// Energy values are not validated.
fn test_invalid_energy_propagates() {
    assert!(estimate_co2(-10., "GCP", "europe-west1").unwrap() < 0.);
    assert!(estimate_co2(f64::NAN, "GCP", "europe-west1").unwrap().is_nan());
}
