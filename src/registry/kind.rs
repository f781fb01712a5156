// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::ManagedAccount;
use crate::types::KubernetesKind;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindProperties {
    pub kind: KubernetesKind,
    pub namespaced: bool,
}

impl KindProperties {
    /// Properties assumed for a kind nobody registered
    pub fn unregistered(kind: &KubernetesKind) -> Self {
        Self {
            kind: kind.clone(),
            namespaced: true,
        }
    }
}

/// Kinds known to every account
#[derive(Debug, Clone)]
pub struct GlobalKindRegistry {
    kinds: HashMap<KubernetesKind, KindProperties>,
}

impl GlobalKindRegistry {
    pub fn new(properties: impl IntoIterator<Item = KindProperties>) -> Self {
        Self {
            kinds: properties
                .into_iter()
                .map(|p| (p.kind.clone(), p))
                .collect(),
        }
    }

    /// Registry of the builtin kinds; only `Namespace` is cluster scoped
    pub fn builtin() -> Self {
        Self::new(KubernetesKind::BUILTIN.iter().map(|kind| KindProperties {
            kind: kind.clone(),
            namespaced: *kind != KubernetesKind::NAMESPACE,
        }))
    }

    pub fn get(&self, kind: &KubernetesKind) -> Option<&KindProperties> {
        self.kinds.get(kind)
    }
}

impl Default for GlobalKindRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Per-account view of the kind registry.
///
/// Adds the account's custom resources on top of the global kinds and applies
/// the account's `kinds` / `omitKinds` filters.
#[derive(Debug, Clone)]
pub struct KindRegistry {
    global: Arc<GlobalKindRegistry>,
    custom: HashMap<KubernetesKind, KindProperties>,
    allowed: HashSet<KubernetesKind>,
    omitted: HashSet<KubernetesKind>,
}

impl KindRegistry {
    pub fn for_account(global: Arc<GlobalKindRegistry>, account: &ManagedAccount) -> Self {
        let custom = account
            .custom_resources
            .iter()
            .map(|cr| {
                let kind = KubernetesKind::from_string(&cr.kubernetes_kind);
                let properties = KindProperties {
                    kind: kind.clone(),
                    namespaced: cr.namespaced,
                };
                (kind, properties)
            })
            .collect();

        Self {
            global,
            custom,
            allowed: parse_kinds(&account.kinds),
            omitted: parse_kinds(&account.omit_kinds),
        }
    }

    pub fn properties(&self, kind: &KubernetesKind) -> KindProperties {
        self.custom
            .get(kind)
            .or_else(|| self.global.get(kind))
            .cloned()
            .unwrap_or_else(|| KindProperties::unregistered(kind))
    }

    /// Whether the account may operate on this kind
    pub fn is_valid_kind(&self, kind: &KubernetesKind) -> bool {
        if !self.allowed.is_empty() {
            return self.allowed.contains(kind);
        }
        !self.omitted.contains(kind)
    }
}

fn parse_kinds(kinds: &[String]) -> HashSet<KubernetesKind> {
    kinds.iter().map(|k| KubernetesKind::from_string(k)).collect()
}
