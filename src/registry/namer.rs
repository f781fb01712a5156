// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Naming strategies mapping manifests to application/cluster monikers

use crate::constants::{annotations, DEFAULT_NAMING_STRATEGY};
use crate::types::KubernetesManifest;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Logical placement of a manifest within an application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Moniker {
    pub app: Option<String>,
    pub cluster: Option<String>,
    pub stack: Option<String>,
    pub detail: Option<String>,
    pub sequence: Option<u32>,
}

pub trait ManifestNamer: Send + Sync + fmt::Debug {
    /// Strategy name accounts refer to in `namingStrategy`
    fn name(&self) -> &str;

    fn derive_moniker(&self, manifest: &KubernetesManifest) -> Moniker;

    fn apply_moniker(&self, manifest: &mut KubernetesManifest, moniker: &Moniker);
}

/// Stores the moniker in `moniker.spinnaker.io/*` annotations
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationsNamer;

impl ManifestNamer for AnnotationsNamer {
    fn name(&self) -> &str {
        DEFAULT_NAMING_STRATEGY
    }

    /// Missing annotations fall back to values derived from the manifest:
    /// the application is the name up to the first `-`, the cluster is
    /// `<kind> <name>`.
    fn derive_moniker(&self, manifest: &KubernetesManifest) -> Moniker {
        let existing = manifest.annotations();
        let name = manifest.name();

        let app = existing
            .get(annotations::APPLICATION)
            .cloned()
            .or_else(|| name.split('-').next().filter(|s| !s.is_empty()).map(String::from));
        let cluster = existing
            .get(annotations::CLUSTER)
            .cloned()
            .or_else(|| Some(format!("{} {}", manifest.kind().name().to_ascii_lowercase(), name)));

        Moniker {
            app,
            cluster,
            stack: existing.get(annotations::STACK).cloned(),
            detail: existing.get(annotations::DETAIL).cloned(),
            sequence: existing
                .get(annotations::SEQUENCE)
                .and_then(|s| s.parse().ok()),
        }
    }

    fn apply_moniker(&self, manifest: &mut KubernetesManifest, moniker: &Moniker) {
        let fields = [
            (annotations::APPLICATION, moniker.app.clone()),
            (annotations::CLUSTER, moniker.cluster.clone()),
            (annotations::STACK, moniker.stack.clone()),
            (annotations::DETAIL, moniker.detail.clone()),
            (annotations::SEQUENCE, moniker.sequence.map(|s| s.to_string())),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                manifest.set_annotation(key, value);
            }
        }
    }
}

/// Naming strategies available to accounts, keyed by name
#[derive(Debug, Clone)]
pub struct NamerRegistry {
    namers: HashMap<String, Arc<dyn ManifestNamer>>,
}

impl NamerRegistry {
    pub fn new(namers: Vec<Arc<dyn ManifestNamer>>) -> Self {
        Self {
            namers: namers
                .into_iter()
                .map(|n| (n.name().to_string(), n))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ManifestNamer>> {
        self.namers.get(name).cloned()
    }
}

impl Default for NamerRegistry {
    fn default() -> Self {
        Self::new(vec![Arc::new(AnnotationsNamer) as Arc<dyn ManifestNamer>])
    }
}
