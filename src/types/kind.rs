// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A Kubernetes resource kind, optionally qualified by its API group.
///
/// Comparison ignores case, so `Deployment.apps` and `deployment.APPS` are the
/// same kind. The core API group is represented as `None`.
#[derive(Debug, Clone)]
pub struct KubernetesKind {
    name: Cow<'static, str>,
    group: Option<Cow<'static, str>>,
}

impl KubernetesKind {
    pub const CONFIG_MAP: KubernetesKind = KubernetesKind::builtin("ConfigMap", None);
    pub const CRON_JOB: KubernetesKind = KubernetesKind::builtin("CronJob", Some("batch"));
    pub const DAEMON_SET: KubernetesKind = KubernetesKind::builtin("DaemonSet", Some("apps"));
    pub const DEPLOYMENT: KubernetesKind = KubernetesKind::builtin("Deployment", Some("apps"));
    pub const INGRESS: KubernetesKind =
        KubernetesKind::builtin("Ingress", Some("networking.k8s.io"));
    pub const JOB: KubernetesKind = KubernetesKind::builtin("Job", Some("batch"));
    pub const NAMESPACE: KubernetesKind = KubernetesKind::builtin("Namespace", None);
    pub const POD: KubernetesKind = KubernetesKind::builtin("Pod", None);
    pub const REPLICA_SET: KubernetesKind = KubernetesKind::builtin("ReplicaSet", Some("apps"));
    pub const SECRET: KubernetesKind = KubernetesKind::builtin("Secret", None);
    pub const SERVICE: KubernetesKind = KubernetesKind::builtin("Service", None);
    pub const SERVICE_ACCOUNT: KubernetesKind = KubernetesKind::builtin("ServiceAccount", None);
    pub const STATEFUL_SET: KubernetesKind = KubernetesKind::builtin("StatefulSet", Some("apps"));

    /// Kinds every cluster serves
    pub const BUILTIN: [KubernetesKind; 13] = [
        Self::CONFIG_MAP,
        Self::CRON_JOB,
        Self::DAEMON_SET,
        Self::DEPLOYMENT,
        Self::INGRESS,
        Self::JOB,
        Self::NAMESPACE,
        Self::POD,
        Self::REPLICA_SET,
        Self::SECRET,
        Self::SERVICE,
        Self::SERVICE_ACCOUNT,
        Self::STATEFUL_SET,
    ];

    const fn builtin(name: &'static str, group: Option<&'static str>) -> Self {
        let group = match group {
            Some(g) => Some(Cow::Borrowed(g)),
            None => None,
        };
        KubernetesKind {
            name: Cow::Borrowed(name),
            group,
        }
    }

    pub fn new(name: impl Into<String>, group: Option<String>) -> Self {
        KubernetesKind {
            name: Cow::Owned(name.into()),
            group: group.filter(|g| !g.is_empty()).map(Cow::Owned),
        }
    }

    /// Parse `name` or `name.group`.
    ///
    /// An unqualified name that matches a builtin kind picks up the builtin's
    /// group, so `deployment` resolves to `Deployment.apps`.
    pub fn from_string(value: &str) -> Self {
        match value.split_once('.') {
            Some((name, group)) => KubernetesKind::new(name, Some(group.to_string())),
            None => Self::BUILTIN
                .iter()
                .find(|k| k.name.eq_ignore_ascii_case(value))
                .cloned()
                .unwrap_or_else(|| KubernetesKind::new(value, None)),
        }
    }

    /// Build a kind from a manifest's `apiVersion` and `kind` fields
    pub fn from_api_version(api_version: &str, kind: &str) -> Self {
        let group = api_version
            .rsplit_once('/')
            .map(|(group, _version)| group.to_string());
        KubernetesKind::new(kind, group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// `apiVersion` used when a manifest is created from this kind alone
    pub fn default_api_version(&self) -> String {
        match self.group() {
            Some(group) => format!("{}/v1", group),
            None => "v1".to_string(),
        }
    }
}

impl PartialEq for KubernetesKind {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && match (self.group(), other.group()) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for KubernetesKind {}

impl Hash for KubernetesKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_ascii_lowercase().hash(state);
        self.group().map(str::to_ascii_lowercase).hash(state);
    }
}

impl fmt::Display for KubernetesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group() {
            Some(group) => write!(f, "{}.{}", self.name, group),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Serialize for KubernetesKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KubernetesKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(KubernetesKind::from_string(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_case() {
        let kind = KubernetesKind::new("deployment", Some("APPS".to_string()));
        assert_eq!(kind, KubernetesKind::DEPLOYMENT);
    }

    #[test]
    fn test_group_must_match() {
        let kind = KubernetesKind::new("Deployment", None);
        assert_ne!(kind, KubernetesKind::DEPLOYMENT);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut kinds = HashSet::new();
        kinds.insert(KubernetesKind::DEPLOYMENT);
        assert!(kinds.contains(&KubernetesKind::new("DEPLOYMENT", Some("apps".to_string()))));
    }

    #[test]
    fn test_from_string_resolves_builtin_group() {
        assert_eq!(
            KubernetesKind::from_string("deployment"),
            KubernetesKind::DEPLOYMENT
        );
        assert_eq!(KubernetesKind::from_string("service"), KubernetesKind::SERVICE);
    }

    #[test]
    fn test_from_string_qualified() {
        let kind = KubernetesKind::from_string("certificate.cert-manager.io");
        assert_eq!(kind.name(), "certificate");
        assert_eq!(kind.group(), Some("cert-manager.io"));
    }

    #[test]
    fn test_from_string_unknown_unqualified() {
        let kind = KubernetesKind::from_string("Widget");
        assert_eq!(kind.name(), "Widget");
        assert_eq!(kind.group(), None);
    }

    #[test]
    fn test_from_api_version() {
        assert_eq!(
            KubernetesKind::from_api_version("apps/v1", "Deployment"),
            KubernetesKind::DEPLOYMENT
        );
        assert_eq!(
            KubernetesKind::from_api_version("v1", "Service"),
            KubernetesKind::SERVICE
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(KubernetesKind::DEPLOYMENT.to_string(), "Deployment.apps");
        assert_eq!(KubernetesKind::POD.to_string(), "Pod");
    }

    #[test]
    fn test_default_api_version() {
        assert_eq!(KubernetesKind::DEPLOYMENT.default_api_version(), "apps/v1");
        assert_eq!(KubernetesKind::SECRET.default_api_version(), "v1");
    }
}
