// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment: the role and variable assignment bound to one host group

use serde::{Deserialize, Serialize};

use super::manifest::RoleVars;

/// Reference to a role by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: String,
}

impl RoleRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    /// Joins to [`HostGroup::name`](super::HostGroup::name)
    pub host_group_name: String,

    #[serde(default)]
    pub roles: Vec<RoleRef>,

    /// Variables of the last role in `roles`
    #[serde(default)]
    pub vars: RoleVars,
}

impl Deployment {
    pub fn new(host_group_name: impl Into<String>) -> Self {
        Self {
            host_group_name: host_group_name.into(),
            ..Default::default()
        }
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|role| role.name.as_str())
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }
}
