// Copyright (c) 2025 - Cowboy AI, Inc.
//! Manifest Input Model
//!
//! The manifest is produced upstream by infrastructure provisioning. It lists
//! the VM groups that were created together with the network outputs
//! (private IPs, public IPs, operator overrides) each group received.
//!
//! The deployment builder only ever reads these types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::host_group::GroupType;
use crate::errors::{ProducerError, ProducerResult};

/// Meta key carrying the group type tag
pub const GROUP_TYPE_META_KEY: &str = "group_type";

/// Opaque role configuration handed to the deployment stage
pub type RoleVars = BTreeMap<String, serde_json::Value>;

/// Ordered collection of provisioned VM groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub vm_groups: Vec<VmGroup>,
}

impl Manifest {
    /// Create a manifest from VM groups in traversal order
    pub fn new(vm_groups: Vec<VmGroup>) -> Self {
        Self { vm_groups }
    }

    /// Parse a YAML manifest
    pub fn from_yaml_str(content: &str) -> ProducerResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON manifest
    pub fn from_json_str(content: &str) -> ProducerResult<Self> {
        serde_json::from_str(content).map_err(|e| ProducerError::Deserialization(e.to_string()))
    }

    /// Load a manifest from disk
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> ProducerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProducerError::Io(format!("failed to read manifest {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Find a VM group by name
    pub fn vm_group(&self, name: &str) -> Option<&VmGroup> {
        self.vm_groups.iter().find(|group| group.name == name)
    }
}

/// A named set of provisioned virtual machines sharing one role assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmGroup {
    pub name: String,

    /// Expected number of provisioned instances
    pub count: usize,

    #[serde(default)]
    pub roles: Vec<Role>,

    /// Only the first entry is consulted when building host groups
    #[serde(default)]
    pub network_infos: Vec<NetworkInfo>,

    #[serde(default)]
    pub os_profile: OsProfile,

    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

impl VmGroup {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    pub fn with_network_info(mut self, network_info: NetworkInfo) -> Self {
        self.network_infos.push(network_info);
        self
    }

    pub fn with_admin_name(mut self, admin_name: impl Into<String>) -> Self {
        self.os_profile.admin_name = admin_name.into();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Groups without roles are not deployed to
    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }

    /// Classify the group from its `group_type` meta tag
    pub fn group_type(&self) -> GroupType {
        match self.meta.get(GROUP_TYPE_META_KEY) {
            Some(value) if value == GroupType::Jumpbox.as_str() => GroupType::Jumpbox,
            _ => GroupType::Standard,
        }
    }

    /// Outputs of the first network info, if any were recorded
    pub fn first_network_outputs(&self) -> Option<&[NetworkOutput]> {
        self.network_infos
            .first()
            .map(|info| info.outputs.as_slice())
            .filter(|outputs| !outputs.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsProfile {
    /// SSH login user
    #[serde(default)]
    pub admin_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    #[serde(default)]
    pub outputs: Vec<NetworkOutput>,
}

impl NetworkInfo {
    pub fn new(outputs: Vec<NetworkOutput>) -> Self {
        Self { outputs }
    }
}

/// Addresses assigned to one provisioned VM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOutput {
    /// Private address
    #[serde(default)]
    pub ip: String,

    #[serde(default)]
    pub public_ip: String,

    /// Operator supplied address, preferred over `public_ip` when set
    #[serde(default)]
    pub host: String,
}

impl NetworkOutput {
    pub fn private(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Default::default()
        }
    }

    pub fn with_public_ip(mut self, public_ip: impl Into<String>) -> Self {
        self.public_ip = public_ip.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,

    #[serde(default)]
    pub vars: RoleVars,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: RoleVars::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}
