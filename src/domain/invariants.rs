// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Manifest Invariants
//!
//! The checks the deployment builder applies to each role-bearing VM group
//! before deriving its host group.
//!
//! # Design Principles
//!
//! - **Pure Functions**: No I/O, no mutations, deterministic
//! - **Explicit Errors**: Every error names the offending group
//! - **Fail Fast**: The first violation aborts the whole build

use super::manifest::{NetworkOutput, VmGroup};

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Input defects found in a manifest
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The group has no network info or its first network info has no outputs
    #[error(
        "no network info or outputs found in group {group}: {network_infos} network infos, {outputs} outputs"
    )]
    MissingNetworkOutput {
        group: String,
        network_infos: usize,
        outputs: usize,
    },

    /// A jumpbox group must contain exactly one VM
    #[error("jumpbox count should be one in group {group}, found {count}")]
    JumpboxCountInvalid { group: String, count: usize },

    /// A standard group's count disagrees with its outputs
    #[error(
        "the outputs number does not match the vm group {group}: count is {expected}, found {actual} outputs"
    )]
    HostCountMismatch {
        group: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Name of the VM group the error refers to
    pub fn group(&self) -> &str {
        match self {
            Self::MissingNetworkOutput { group, .. }
            | Self::JumpboxCountInvalid { group, .. }
            | Self::HostCountMismatch { group, .. } => group,
        }
    }
}

/// Outputs of the group's first network info
///
/// # Rules
/// - At least one network info
/// - The first network info has at least one output
pub fn require_network_outputs(vm_group: &VmGroup) -> Result<&[NetworkOutput], ValidationError> {
    vm_group
        .first_network_outputs()
        .ok_or_else(|| ValidationError::MissingNetworkOutput {
            group: vm_group.name.clone(),
            network_infos: vm_group.network_infos.len(),
            outputs: vm_group
                .network_infos
                .first()
                .map_or(0, |info| info.outputs.len()),
        })
}

/// Validate a jumpbox group holds a single VM
pub fn validate_jumpbox_count(group: &str, count: usize) -> ValidationResult {
    if count != 1 {
        return Err(ValidationError::JumpboxCountInvalid {
            group: group.to_string(),
            count,
        });
    }
    Ok(())
}

/// Validate a standard group's count matches its network outputs
pub fn validate_host_count(group: &str, count: usize, outputs: &[NetworkOutput]) -> ValidationResult {
    if count != outputs.len() {
        return Err(ValidationError::HostCountMismatch {
            group: group.to_string(),
            expected: count,
            actual: outputs.len(),
        });
    }
    Ok(())
}
