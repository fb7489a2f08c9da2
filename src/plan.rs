// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Plan
//!
//! The builder's output stamped with an identity and creation time, in the
//! shape handed to the deployment-execution stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::builder::DeploymentBuilder;
use crate::domain::{Deployment, HostGroup, Manifest};
use crate::errors::ProducerResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    /// Unique plan identifier (UUID v7)
    pub plan_id: Uuid,

    pub generated_at: DateTime<Utc>,

    pub host_groups: Vec<HostGroup>,

    /// Index-aligned with `host_groups`
    pub deployments: Vec<Deployment>,
}

impl DeploymentPlan {
    /// Run the builder over `manifest` and stamp the result
    pub fn produce(builder: &DeploymentBuilder, manifest: &Manifest) -> ProducerResult<Self> {
        let (host_groups, deployments) = builder.produce(manifest)?;
        Ok(Self::from_parts(
            Uuid::now_v7(),
            Utc::now(),
            host_groups,
            deployments,
        ))
    }

    pub fn from_parts(
        plan_id: Uuid,
        generated_at: DateTime<Utc>,
        host_groups: Vec<HostGroup>,
        deployments: Vec<Deployment>,
    ) -> Self {
        Self {
            plan_id,
            generated_at,
            host_groups,
            deployments,
        }
    }

    pub fn host_group(&self, name: &str) -> Option<&HostGroup> {
        self.host_groups.iter().find(|group| group.name() == name)
    }

    pub fn deployment_for(&self, host_group_name: &str) -> Option<&Deployment> {
        self.deployments
            .iter()
            .find(|deployment| deployment.host_group_name == host_group_name)
    }

    /// Host groups paired with their deployments
    pub fn entries(&self) -> impl Iterator<Item = (&HostGroup, &Deployment)> {
        self.host_groups.iter().zip(self.deployments.iter())
    }

    pub fn to_json(&self, pretty: bool) -> ProducerResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
