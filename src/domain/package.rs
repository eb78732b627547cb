//! Package info types.

use crate::domain::batch::DEFAULT_BATCH;
use serde::Serialize;

/// Wire input for `getPackageInfo`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfoInput {
    pub package_name: String,
}

/// Parameters for a package info lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfoParams {
    /// npm package name, e.g. `axios` or `@babel/core`.
    pub package: String,
    /// Value of the `batch` query parameter.
    pub batch: u32,
}

impl PackageInfoParams {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            batch: DEFAULT_BATCH,
        }
    }

    pub fn with_batch(mut self, batch: u32) -> Self {
        self.batch = batch;
        self
    }

    /// The call wrapped by the batch envelope.
    pub fn input(&self) -> PackageInfoInput {
        PackageInfoInput {
            package_name: self.package.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Batch;

    #[test]
    fn test_params_defaults() {
        let params = PackageInfoParams::new("axios");
        assert_eq!(params.package, "axios");
        assert_eq!(params.batch, 1);
        assert_eq!(params.with_batch(2).batch, 2);
    }

    #[test]
    fn test_input_uses_camel_case() {
        let input = Batch::new(PackageInfoParams::new("axios").input());
        assert_eq!(
            input.to_query_json().unwrap(),
            r#"{"0": {"packageName": "axios"}}"#
        );
    }
}
