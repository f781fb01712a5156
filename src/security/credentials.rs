// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed, per-account facade over a [`JobExecutor`].
//!
//! Executor failures are passed back exactly as raised. The only failure the
//! facade acts on is `AlreadyExists` from the create step of
//! [`KubernetesCredentials::create_or_replace`].

use crate::config::ManagedAccount;
use crate::error::{KubectlError, KubectlResult};
use crate::executor::JobExecutor;
use crate::registry::{
    KindProperties, KindRegistry, ManifestNamer, ResourceProperties, ResourcePropertyRegistry,
};
use crate::types::{KubernetesKind, KubernetesManifest, SelectorList, Task};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Credentials of one managed account.
///
/// Holds no per-call state, so a single instance can serve concurrent callers.
pub struct KubernetesCredentials {
    account: ManagedAccount,
    job_executor: Arc<dyn JobExecutor>,
    kind_registry: KindRegistry,
    resource_properties: ResourcePropertyRegistry,
    namer: Arc<dyn ManifestNamer>,
}

impl KubernetesCredentials {
    pub(crate) fn new(
        account: ManagedAccount,
        job_executor: Arc<dyn JobExecutor>,
        kind_registry: KindRegistry,
        resource_properties: ResourcePropertyRegistry,
        namer: Arc<dyn ManifestNamer>,
    ) -> Self {
        Self {
            account,
            job_executor,
            kind_registry,
            resource_properties,
            namer,
        }
    }

    pub fn account_name(&self) -> &str {
        &self.account.name
    }

    pub fn account(&self) -> &ManagedAccount {
        &self.account
    }

    pub fn is_valid_kind(&self, kind: &KubernetesKind) -> bool {
        self.kind_registry.is_valid_kind(kind)
    }

    pub fn kind_properties(&self, kind: &KubernetesKind) -> KindProperties {
        self.kind_registry.properties(kind)
    }

    pub fn resource_properties(&self, kind: &KubernetesKind) -> ResourceProperties {
        self.resource_properties.get(kind)
    }

    pub fn namer(&self) -> &dyn ManifestNamer {
        self.namer.as_ref()
    }

    /// List manifests of any of `kinds` in `namespace` (`None` for all namespaces)
    pub async fn list(
        &self,
        kinds: &[KubernetesKind],
        namespace: Option<&str>,
    ) -> KubectlResult<Vec<KubernetesManifest>> {
        self.list_with_selectors(kinds, namespace, &SelectorList::new())
            .await
    }

    /// An empty kind set lists nothing and does not reach the executor
    #[instrument(skip(self, kinds, selectors), fields(account = %self.account.name))]
    pub async fn list_with_selectors(
        &self,
        kinds: &[KubernetesKind],
        namespace: Option<&str>,
        selectors: &SelectorList,
    ) -> KubectlResult<Vec<KubernetesManifest>> {
        if kinds.is_empty() {
            debug!("No kinds requested, skipping list");
            return Ok(Vec::new());
        }

        self.job_executor
            .list(self, kinds, namespace, selectors)
            .await
    }

    /// Fetch one resource; `None` if it does not exist
    pub async fn get(
        &self,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
    ) -> KubectlResult<Option<KubernetesManifest>> {
        self.job_executor.get(self, kind, namespace, name).await
    }

    /// Create the manifest, replacing it instead if it already exists.
    ///
    /// Create doubles as the existence probe, so a resource created by someone
    /// else in the meantime is still replaced. Any other create failure is
    /// returned as-is without attempting replace, and a failed replace returns
    /// the replace failure.
    #[instrument(
        skip(self, manifest, task),
        fields(account = %self.account.name, resource = %manifest.identity())
    )]
    pub async fn create_or_replace(
        &self,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest> {
        match self.job_executor.create(self, manifest, task, op_name).await {
            Err(KubectlError::AlreadyExists { message }) => {
                info!("Resource already exists, replacing it: {}", message);
                self.job_executor
                    .replace(self, manifest, task, op_name)
                    .await
            }
            result => result,
        }
    }

    pub async fn delete(
        &self,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<()> {
        self.job_executor
            .delete(self, kind, namespace, name, task, op_name)
            .await
    }
}

impl fmt::Debug for KubernetesCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubernetesCredentials")
            .field("account", &self.account.name)
            .field("namer", &self.namer.name())
            .finish_non_exhaustive()
    }
}
