//! Supported cloud providers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Cloud provider whose usage can be converted into a carbon footprint.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Serialize, Deserialize, IntoEnumIterator)]
pub enum CloudProvider {
    /// Amazon Web Services.
    #[serde(rename = "AWS")]
    Aws,
    /// Google Cloud Platform.
    #[serde(rename = "GCP")]
    Gcp,
}

impl CloudProvider {
    /// Returns the provider identifier used as a table key, e.g. `"AWS"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Gcp => "GCP",
        }
    }
}

impl Display for CloudProvider {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = LookupError;

    fn from_str(input: &str) -> Result<CloudProvider, Self::Err> {
        match input {
            "AWS" => Ok(CloudProvider::Aws),
            "GCP" => Ok(CloudProvider::Gcp),
            _ => Err(LookupError::UnknownProvider(input.to_string())),
        }
    }
}
