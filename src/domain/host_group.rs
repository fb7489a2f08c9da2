// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Group Value Objects
//!
//! A host group is the connection inventory derived for one VM group: the
//! addresses downstream tooling connects to, the login user, and the SSH
//! arguments needed to get there.
//!
//! Hosts are immutable once built. Attaching SSH arguments produces a new
//! [`Host`] rather than editing one that may already be shared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of host group kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// Bastion used as the SSH relay for every other group
    Jumpbox,
    #[default]
    Standard,
}

impl GroupType {
    /// Canonical tag, matching the `group_type` meta value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jumpbox => "jumpbox",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One SSH-reachable machine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    alias: String,
    host: String,
    user: String,
    #[serde(default)]
    ssh_common_args: String,
}

impl Host {
    /// Create a host with no extra SSH arguments
    pub fn new(alias: impl Into<String>, host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            host: host.into(),
            user: user.into(),
            ssh_common_args: String::new(),
        }
    }

    /// Return a copy of this host carrying the given SSH arguments
    pub fn with_ssh_common_args(self, ssh_common_args: impl Into<String>) -> Self {
        Self {
            ssh_common_args: ssh_common_args.into(),
            ..self
        }
    }

    /// Identifier used by downstream tooling
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Connection address
    pub fn host(&self) -> &str {
        &self.host
    }

    /// SSH login user
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Extra SSH arguments, empty for jumpbox hosts
    pub fn ssh_common_args(&self) -> &str {
        &self.ssh_common_args
    }
}

/// Connection inventory for one VM group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroup {
    name: String,
    group_type: GroupType,
    hosts: Vec<Host>,
}

impl HostGroup {
    pub fn new(name: impl Into<String>, group_type: GroupType, hosts: Vec<Host>) -> Self {
        Self {
            name: name.into(),
            group_type,
            hosts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_type(&self) -> GroupType {
        self.group_type
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn is_jumpbox(&self) -> bool {
        self.group_type == GroupType::Jumpbox
    }

    /// Rebuild every host through `f`, keeping name and type
    pub fn map_hosts(self, f: impl FnMut(Host) -> Host) -> Self {
        Self {
            hosts: self.hosts.into_iter().map(f).collect(),
            ..self
        }
    }
}

/// The SSH relay every non-jumpbox host is reached through
///
/// # Examples
///
/// ```rust
/// use deployment_producer::domain::JumpboxEndpoint;
///
/// let endpoint = JumpboxEndpoint::new("ops", "1.2.3.4");
/// assert_eq!(
///     endpoint.proxy_command(),
///     r#"-o ProxyCommand="ssh -W %h:%p -q ops@1.2.3.4""#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpboxEndpoint {
    pub user: String,
    pub host: String,
}

impl JumpboxEndpoint {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// Endpoint of the first host in a host group
    pub fn from_host_group(host_group: &HostGroup) -> Option<Self> {
        host_group
            .hosts()
            .first()
            .map(|host| Self::new(host.user(), host.host()))
    }

    /// `ssh_common_args` value tunnelling through this endpoint
    pub fn proxy_command(&self) -> String {
        format!("-o ProxyCommand=\"ssh -W %h:%p -q {}\"", self)
    }
}

impl fmt::Display for JumpboxEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}
