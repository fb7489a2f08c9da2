// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for DeploymentBuilder::produce
//!
//! Manifests are generated as a list of standard group specs plus an
//! optional jumpbox inserted at an arbitrary position.

use deployment_producer::domain::{
    GroupType, Manifest, NetworkInfo, NetworkOutput, Role, ValidationError, VmGroup,
};
use deployment_producer::DeploymentBuilder;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

#[derive(Debug, Clone)]
struct StandardSpec {
    hosts: usize,
    roles: usize,
}

fn standard_spec() -> impl Strategy<Value = StandardSpec> {
    (1usize..5, 0usize..3).prop_map(|(hosts, roles)| StandardSpec { hosts, roles })
}

fn standard_group(index: usize, spec: &StandardSpec) -> VmGroup {
    let outputs = (0..spec.hosts)
        .map(|host| NetworkOutput::private(format!("10.{}.0.{}", index, host + 1)))
        .collect();

    let mut group = VmGroup::new(format!("group-{}", index), spec.hosts)
        .with_admin_name("deploy")
        .with_network_info(NetworkInfo::new(outputs));
    for role in 0..spec.roles {
        group = group.with_role(Role::new(format!("role-{}", role)));
    }
    group
}

fn jumpbox_group(host_override: &str, public_ip: &str) -> VmGroup {
    VmGroup::new("jumpbox", 1)
        .with_admin_name("ops")
        .with_meta("group_type", "jumpbox")
        .with_role(Role::new("bastion"))
        .with_network_info(NetworkInfo::new(vec![NetworkOutput::private("10.255.0.1")
            .with_public_ip(public_ip)
            .with_host(host_override)]))
}

fn valid_manifest() -> impl Strategy<Value = Manifest> {
    (
        prop::collection::vec(standard_spec(), 0..6),
        any::<prop::sample::Index>(),
        prop::option::of("[a-z]{1,8}\\.example\\.com"),
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
    )
        .prop_map(|(specs, position, host_override, public_ip)| {
            let mut groups: Vec<VmGroup> = specs
                .iter()
                .enumerate()
                .map(|(index, spec)| standard_group(index, spec))
                .collect();
            let at = position.index(groups.len() + 1);
            groups.insert(
                at,
                jumpbox_group(host_override.as_deref().unwrap_or(""), &public_ip),
            );
            Manifest::new(groups)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// One host group and one deployment per role-bearing group, in order
    #[test]
    fn prop_one_entry_per_role_bearing_group(manifest in valid_manifest()) {
        let (host_groups, deployments) = DeploymentBuilder::new().produce(&manifest).unwrap();

        let expected: Vec<&str> = manifest
            .vm_groups
            .iter()
            .filter(|group| group.has_roles())
            .map(|group| group.name.as_str())
            .collect();
        let produced: Vec<&str> = host_groups.iter().map(|group| group.name()).collect();
        let deployed: Vec<&str> = deployments
            .iter()
            .map(|deployment| deployment.host_group_name.as_str())
            .collect();

        prop_assert_eq!(&produced, &expected);
        prop_assert_eq!(&deployed, &expected);
    }

    /// Non-jumpbox hosts tunnel through the jumpbox, jumpbox hosts do not
    #[test]
    fn prop_proxy_args_reference_jumpbox(manifest in valid_manifest()) {
        let (host_groups, _) = DeploymentBuilder::new().produce(&manifest).unwrap();

        let jumpbox = host_groups.iter().find(|group| group.is_jumpbox()).unwrap();
        let relay = &jumpbox.hosts()[0];
        let target = format!("{}@{}", relay.user(), relay.host());

        for group in &host_groups {
            for host in group.hosts() {
                if group.group_type() == GroupType::Jumpbox {
                    prop_assert_eq!(host.ssh_common_args(), "");
                } else {
                    prop_assert!(host.ssh_common_args().contains(&target));
                    prop_assert!(host.ssh_common_args().starts_with("-o ProxyCommand="));
                }
            }
        }
    }

    /// The host override wins over the public IP whenever it is set
    #[test]
    fn prop_jumpbox_address_fallback(manifest in valid_manifest()) {
        let (host_groups, _) = DeploymentBuilder::new().produce(&manifest).unwrap();

        let output = &manifest.vm_group("jumpbox").unwrap().network_infos[0].outputs[0];
        let expected = if output.host.is_empty() { &output.public_ip } else { &output.host };
        let jumpbox = host_groups.iter().find(|group| group.is_jumpbox()).unwrap();

        prop_assert_eq!(jumpbox.hosts()[0].host(), expected.as_str());
    }

    /// Standard hosts are addressed and aliased by their private IP
    #[test]
    fn prop_standard_hosts_use_private_ip(manifest in valid_manifest()) {
        let (host_groups, _) = DeploymentBuilder::new().produce(&manifest).unwrap();

        for group in host_groups.iter().filter(|group| !group.is_jumpbox()) {
            let outputs = &manifest.vm_group(group.name()).unwrap().network_infos[0].outputs;
            prop_assert_eq!(group.hosts().len(), outputs.len());
            for (host, output) in group.hosts().iter().zip(outputs) {
                prop_assert_eq!(host.alias(), output.ip.as_str());
                prop_assert_eq!(host.host(), output.ip.as_str());
            }
        }
    }

    /// A jumpbox count other than one always fails, whatever else is valid
    #[test]
    fn prop_jumpbox_count_invalid(
        manifest in valid_manifest(),
        count in (0usize..10).prop_filter("count must not be one", |count| *count != 1),
    ) {
        let mut manifest = manifest;
        for group in manifest.vm_groups.iter_mut().filter(|group| group.name == "jumpbox") {
            group.count = count;
        }

        let err = DeploymentBuilder::new().produce(&manifest).unwrap_err();
        prop_assert_eq!(
            err,
            ValidationError::JumpboxCountInvalid { group: "jumpbox".to_string(), count }
        );
    }

    /// A standard group whose count disagrees with its outputs always fails
    #[test]
    fn prop_host_count_mismatch(spec in standard_spec(), delta in 1usize..4) {
        let mut group = standard_group(0, &StandardSpec { roles: spec.roles.max(1), ..spec });
        group.count += delta;
        let manifest = Manifest::new(vec![jumpbox_group("", "1.2.3.4"), group]);

        let err = DeploymentBuilder::new().produce(&manifest).unwrap_err();
        let is_mismatch = matches!(err, ValidationError::HostCountMismatch { .. });
        prop_assert!(is_mismatch);
        prop_assert_eq!(err.group(), "group-0");
    }
}
