// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifests as exchanged with kubectl

use crate::types::kind::KubernetesKind;
use kube::core::{DynamicObject, ObjectMeta, TypeMeta};
use kube::ResourceExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One cluster resource.
///
/// Wraps a [`DynamicObject`] so arbitrary kinds, including custom resources,
/// keep their full spec/status payload untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KubernetesManifest(DynamicObject);

/// The (kind, namespace, name) triple identifying a manifest in a cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestIdentity {
    pub kind: KubernetesKind,
    pub namespace: Option<String>,
    pub name: String,
}

impl fmt::Display for ManifestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{} {}/{}", self.kind, namespace, self.name),
            None => write!(f, "{} {}", self.kind, self.name),
        }
    }
}

impl KubernetesManifest {
    /// Create an empty manifest of the given kind
    pub fn new(kind: &KubernetesKind) -> Self {
        KubernetesManifest(DynamicObject {
            types: Some(TypeMeta {
                api_version: kind.default_api_version(),
                kind: kind.name().to_string(),
            }),
            metadata: ObjectMeta::default(),
            data: serde_json::Value::Object(serde_json::Map::new()),
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    pub fn kind(&self) -> KubernetesKind {
        match &self.0.types {
            Some(types) => KubernetesKind::from_api_version(&types.api_version, &types.kind),
            None => KubernetesKind::new("", None),
        }
    }

    pub fn api_version(&self) -> Option<&str> {
        self.0.types.as_ref().map(|t| t.api_version.as_str())
    }

    pub fn name(&self) -> String {
        self.0.name_any()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.0.metadata.name = Some(name.into());
    }

    pub fn namespace(&self) -> Option<String> {
        self.0.namespace()
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.0.metadata.namespace = Some(namespace.into());
    }

    pub fn annotations(&self) -> &BTreeMap<String, String> {
        self.0.annotations()
    }

    pub fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.annotations_mut().insert(key.into(), value.into());
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        self.0.labels()
    }

    /// Everything outside `apiVersion`, `kind` and `metadata`
    pub fn data(&self) -> &serde_json::Value {
        &self.0.data
    }

    pub fn data_mut(&mut self) -> &mut serde_json::Value {
        &mut self.0.data
    }

    pub fn identity(&self) -> ManifestIdentity {
        ManifestIdentity {
            kind: self.kind(),
            namespace: self.namespace(),
            name: self.name(),
        }
    }

    pub fn as_dynamic(&self) -> &DynamicObject {
        &self.0
    }

    pub fn into_dynamic(self) -> DynamicObject {
        self.0
    }
}

impl From<DynamicObject> for KubernetesManifest {
    fn from(object: DynamicObject) -> Self {
        KubernetesManifest(object)
    }
}
