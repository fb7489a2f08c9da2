// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Builder
//!
//! Turns a provisioned [`Manifest`] into the two lists the deployment stage
//! consumes: host groups (who to connect to, and how) and deployments (which
//! roles and variables apply to each host group).
//!
//! # Data Flow
//!
//! ```text
//! Manifest
//!    │  per role-bearing VM group, in manifest order
//!    ▼
//! (HostGroup, Deployment) pairs ──unzip──> host groups, deployments
//!    │
//!    ▼
//! jumpbox pass: non-jumpbox hosts get a ProxyCommand through the jumpbox
//! ```
//!
//! The build is pure and synchronous. The first invariant violation aborts
//! it and nothing is returned but the error.

use tracing::{debug, info, warn};

use crate::domain::invariants::{
    require_network_outputs, validate_host_count, validate_jumpbox_count,
};
use crate::domain::{
    Deployment, GroupType, Host, HostGroup, JumpboxEndpoint, Manifest, RoleRef, ValidationError,
    VmGroup,
};

/// Host groups and deployments, index-aligned
pub type Inventory = (Vec<HostGroup>, Vec<Deployment>);

/// Derives host inventories and deployments from a manifest
#[derive(Debug, Clone, Copy, Default)]
pub struct DeploymentBuilder;

impl DeploymentBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Produce host groups and deployments for every role-bearing VM group
    ///
    /// `host_groups[i]` and `deployments[i]` always describe the same VM group.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] met while walking the manifest.
    pub fn produce(&self, manifest: &Manifest) -> Result<Inventory, ValidationError> {
        let mut items = Vec::with_capacity(manifest.vm_groups.len());

        for vm_group in &manifest.vm_groups {
            if !vm_group.has_roles() {
                debug!(group = %vm_group.name, "skipping vm group without roles");
                continue;
            }

            let group_type = vm_group.group_type();
            let host_group = self.produce_host_group(vm_group, group_type)?;
            let deployment = self.generate_deployment(vm_group)?;
            debug!(
                group = %vm_group.name,
                group_type = %group_type,
                hosts = host_group.hosts().len(),
                roles = deployment.roles.len(),
                "derived host group"
            );

            items.push((host_group, deployment));
        }

        let (host_groups, deployments): Inventory = items.into_iter().unzip();
        let host_groups = self.provision_jumpbox_parameters(host_groups);

        info!(
            host_groups = host_groups.len(),
            deployments = deployments.len(),
            "produced deployment inventory"
        );
        Ok((host_groups, deployments))
    }

    /// Build the connection inventory of one VM group
    fn produce_host_group(
        &self,
        vm_group: &VmGroup,
        group_type: GroupType,
    ) -> Result<HostGroup, ValidationError> {
        let name = self.host_group_name(vm_group);
        let outputs = require_network_outputs(vm_group)?;
        let user = vm_group.os_profile.admin_name.as_str();

        let hosts = match group_type {
            GroupType::Jumpbox => {
                validate_jumpbox_count(&vm_group.name, vm_group.count)?;

                // An operator supplied host wins over the public IP
                let output = &outputs[0];
                let address = if output.host.is_empty() {
                    &output.public_ip
                } else {
                    &output.host
                };
                vec![Host::new(name.as_str(), address.as_str(), user)]
            }
            GroupType::Standard => {
                validate_host_count(&vm_group.name, vm_group.count, outputs)?;

                outputs
                    .iter()
                    .map(|output| Host::new(output.ip.as_str(), output.ip.as_str(), user))
                    .collect()
            }
        };

        Ok(HostGroup::new(name, group_type, hosts))
    }

    /// Bind the group's roles to its host group
    ///
    /// Each role overwrites `vars`, so the deployment carries the last role's
    /// variables only.
    fn generate_deployment(&self, vm_group: &VmGroup) -> Result<Deployment, ValidationError> {
        let mut deployment = Deployment::new(self.host_group_name(vm_group));

        for role in &vm_group.roles {
            deployment.roles.push(RoleRef::new(role.name.as_str()));
            deployment.vars = role.vars.clone();
        }

        Ok(deployment)
    }

    /// Route every non-jumpbox host through the jumpbox
    ///
    /// The first jumpbox group supplies the endpoint. Without one the proxy
    /// command is still generated with an empty user and host.
    fn provision_jumpbox_parameters(&self, host_groups: Vec<HostGroup>) -> Vec<HostGroup> {
        let jumpbox_groups = host_groups.iter().filter(|group| group.is_jumpbox()).count();
        if jumpbox_groups != 1 {
            warn!(
                jumpbox_groups,
                "expected exactly one jumpbox host group, proxy commands may be unusable"
            );
        }

        let endpoint = host_groups
            .iter()
            .find(|group| group.is_jumpbox())
            .and_then(JumpboxEndpoint::from_host_group)
            .unwrap_or_default();
        let proxy_command = endpoint.proxy_command();
        debug!(jumpbox = %endpoint, "provisioning jumpbox parameters");

        host_groups
            .into_iter()
            .map(|group| {
                if group.is_jumpbox() {
                    group
                } else {
                    group.map_hosts(|host| host.with_ssh_common_args(proxy_command.as_str()))
                }
            })
            .collect()
    }

    fn host_group_name(&self, vm_group: &VmGroup) -> String {
        vm_group.name.clone()
    }
}
