// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Domain Models
//!
//! Input and output vocabulary of the deployment builder.
//!
//! # Manifest (input, read-only)
//!
//! - [`Manifest`] - ordered VM groups from infrastructure provisioning
//! - [`VmGroup`] - one provisioned group with roles, network outputs and meta tags
//! - [`NetworkOutput`] - private, public and override addresses of one VM
//!
//! # Inventory (output)
//!
//! - [`HostGroup`] / [`Host`] - SSH connection inventory per VM group
//! - [`Deployment`] - roles and variables bound to a host group
//! - [`JumpboxEndpoint`] - the bastion other hosts tunnel through
//!
//! # Invariants
//!
//! - [`ValidationError`] - input defects that abort a build

pub mod deployment;
pub mod host_group;
pub mod invariants;
pub mod manifest;

pub use deployment::{Deployment, RoleRef};
pub use host_group::{GroupType, Host, HostGroup, JumpboxEndpoint};
pub use invariants::{ValidationError, ValidationResult};
pub use manifest::{
    Manifest, NetworkInfo, NetworkOutput, OsProfile, Role, RoleVars, VmGroup,
    GROUP_TYPE_META_KEY,
};
