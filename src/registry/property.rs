// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::ManagedAccount;
use crate::constants::UNREGISTERED_HANDLER;
use crate::types::KubernetesKind;
use std::collections::HashMap;
use std::sync::Arc;

/// Behaviour metadata attached to a kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceProperties {
    pub kind: KubernetesKind,
    /// Name of the handler responsible for this kind
    pub handler: String,
    /// Whether deployments of this kind get a versioned name (`-v000`)
    pub versioned: bool,
}

impl ResourceProperties {
    pub fn unregistered(kind: &KubernetesKind) -> Self {
        Self {
            kind: kind.clone(),
            handler: UNREGISTERED_HANDLER.to_string(),
            versioned: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GlobalResourcePropertyRegistry {
    properties: HashMap<KubernetesKind, ResourceProperties>,
}

impl GlobalResourcePropertyRegistry {
    pub fn new(properties: impl IntoIterator<Item = ResourceProperties>) -> Self {
        Self {
            properties: properties
                .into_iter()
                .map(|p| (p.kind.clone(), p))
                .collect(),
        }
    }

    /// One handler per builtin kind. ConfigMaps and Secrets are versioned so a
    /// rollout never mutates the copy running pods still reference.
    pub fn builtin() -> Self {
        Self::new(KubernetesKind::BUILTIN.iter().map(|kind| ResourceProperties {
            kind: kind.clone(),
            handler: kind.name().to_ascii_lowercase(),
            versioned: *kind == KubernetesKind::CONFIG_MAP || *kind == KubernetesKind::SECRET,
        }))
    }

    pub fn get(&self, kind: &KubernetesKind) -> Option<&ResourceProperties> {
        self.properties.get(kind)
    }
}

impl Default for GlobalResourcePropertyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Per-account resource properties: account custom resources first, then the
/// global registry, then the unregistered fallback.
#[derive(Debug, Clone)]
pub struct ResourcePropertyRegistry {
    global: Arc<GlobalResourcePropertyRegistry>,
    custom: HashMap<KubernetesKind, ResourceProperties>,
}

impl ResourcePropertyRegistry {
    pub fn for_account(
        global: Arc<GlobalResourcePropertyRegistry>,
        account: &ManagedAccount,
    ) -> Self {
        let custom = account
            .custom_resources
            .iter()
            .map(|cr| {
                let kind = KubernetesKind::from_string(&cr.kubernetes_kind);
                let properties = ResourceProperties {
                    versioned: cr.versioned,
                    ..ResourceProperties::unregistered(&kind)
                };
                (kind, properties)
            })
            .collect();

        Self { global, custom }
    }

    pub fn get(&self, kind: &KubernetesKind) -> ResourceProperties {
        self.custom
            .get(kind)
            .or_else(|| self.global.get(kind))
            .cloned()
            .unwrap_or_else(|| ResourceProperties::unregistered(kind))
    }
}
