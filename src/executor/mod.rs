// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Executors run single cluster operations on behalf of an account.

pub mod classify;
pub mod kubectl;

pub use classify::classify_failure;
pub use kubectl::KubectlJobExecutor;

use crate::error::KubectlResult;
use crate::security::KubernetesCredentials;
use crate::types::{KubernetesKind, KubernetesManifest, SelectorList, Task};
use async_trait::async_trait;

/// One cluster operation per call, failing with a classified [`KubectlError`].
///
/// Every call receives the credentials that issued it; implementations use
/// them to route the operation to the right cluster.
///
/// [`KubectlError`]: crate::error::KubectlError
#[async_trait]
pub trait JobExecutor: Send + Sync {
    /// List resources of any of `kinds`; `namespace` of `None` means all namespaces
    async fn list(
        &self,
        credentials: &KubernetesCredentials,
        kinds: &[KubernetesKind],
        namespace: Option<&str>,
        selectors: &SelectorList,
    ) -> KubectlResult<Vec<KubernetesManifest>>;

    /// Fetch one resource, `None` when it does not exist
    async fn get(
        &self,
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
    ) -> KubectlResult<Option<KubernetesManifest>>;

    /// Fails with `AlreadyExists` when the resource is present
    async fn create(
        &self,
        credentials: &KubernetesCredentials,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest>;

    /// Fails with `NotFound` when the resource is absent
    async fn replace(
        &self,
        credentials: &KubernetesCredentials,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest>;

    async fn delete(
        &self,
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<()>;
}
