//! Configuration management for the Lambda function.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// ARN of the on-call rotation to query
    pub rotation_id: String,
    /// Organization name used in event descriptions
    pub organization: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails before any fetch is attempted when the rotation ARN is unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            rotation_id: env::var("ROTATION_ID_ARN").map_err(|_| {
                Error::Config(
                    "ROTATION_ID_ARN environment variable not set with the on-call rotation to query"
                        .to_string(),
                )
            })?,
            organization: env::var("ORGANIZATION_NAME")
                .unwrap_or_else(|_| "Engineering".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state, so they run under one test to
    // avoid ordering races with the parallel test runner.
    #[test]
    fn test_from_env() {
        env::remove_var("ROTATION_ID_ARN");
        env::remove_var("ORGANIZATION_NAME");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        env::set_var(
            "ROTATION_ID_ARN",
            "arn:aws:ssm-contacts:us-west-2:123456789012:rotation/oncall",
        );
        let config = Config::from_env().unwrap();
        assert_eq!(config.organization, "Engineering");

        env::set_var("ORGANIZATION_NAME", "DoltHub");
        let config = Config::from_env().unwrap();
        assert_eq!(config.organization, "DoltHub");

        env::remove_var("ROTATION_ID_ARN");
        env::remove_var("ORGANIZATION_NAME");
    }
}
