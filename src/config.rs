// Copyright (c) 2025 - Cowboy AI, Inc.
//! Producer configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{ProducerError, ProducerResult};

pub const MANIFEST_ENV: &str = "DEPLOYMENT_MANIFEST";
pub const OUTPUT_ENV: &str = "DEPLOYMENT_OUTPUT";
pub const PRETTY_ENV: &str = "DEPLOYMENT_OUTPUT_PRETTY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Manifest to read (YAML, or JSON for `.json` files)
    pub manifest_path: PathBuf,

    /// Plan destination, stdout when unset
    pub output_path: Option<PathBuf>,

    /// Pretty-print the plan JSON
    pub pretty: bool,
}

impl ProducerConfig {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            output_path: None,
            pretty: true,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> ProducerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ProducerResult<Self> {
        let manifest_path = lookup(MANIFEST_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ProducerError::Configuration(format!("{} not set", MANIFEST_ENV)))?;

        let output_path = lookup(OUTPUT_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let pretty = match lookup(PRETTY_ENV) {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ProducerError::Configuration(format!(
                    "{} must be a boolean, got {:?}",
                    PRETTY_ENV, value
                ))
            })?,
            None => true,
        };

        Ok(Self {
            manifest_path: PathBuf::from(manifest_path),
            output_path,
            pretty,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
