//! Deployment inventory production
//!
//! This crate bridges infrastructure provisioning and configuration
//! application: it reads the VM groups and network outputs of a provisioned
//! manifest and derives SSH host groups (routed through a jumpbox) together
//! with the role deployments bound to them.

pub mod builder;
pub mod config;
pub mod domain;
pub mod errors;
pub mod plan;

// Re-export commonly used types
pub use builder::{DeploymentBuilder, Inventory};
pub use config::ProducerConfig;
pub use domain::{
    Deployment, GroupType, Host, HostGroup, JumpboxEndpoint, Manifest, NetworkInfo,
    NetworkOutput, Role, RoleRef, ValidationError, VmGroup,
};
pub use errors::{ProducerError, ProducerResult};
pub use plan::DeploymentPlan;
