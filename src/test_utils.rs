// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for substituting the kubectl executor.

use crate::config::ManagedAccount;
use crate::error::{KubectlError, KubectlResult};
use crate::executor::JobExecutor;
use crate::security::{KubernetesCredentials, KubernetesCredentialsFactory};
use crate::types::{KubernetesKind, KubernetesManifest, ManifestIdentity, SelectorList, Task};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A call received by [`StubJobExecutor`], tagged with the issuing account
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List {
        account: String,
        kinds: Vec<KubernetesKind>,
        namespace: Option<String>,
        selectors: SelectorList,
    },
    Get {
        account: String,
        kind: KubernetesKind,
        namespace: Option<String>,
        name: String,
    },
    Create {
        account: String,
        manifest: KubernetesManifest,
        task: Task,
        op_name: String,
    },
    Replace {
        account: String,
        manifest: KubernetesManifest,
        task: Task,
        op_name: String,
    },
    Delete {
        account: String,
        kind: KubernetesKind,
        namespace: Option<String>,
        name: String,
    },
}

/// An in-memory executor.
///
/// Scripted responses are returned first, in order. Once a queue is drained
/// the stub behaves like a tiny cluster: create fails with `AlreadyExists` for
/// a stored identity, replace fails with `NotFound` for a missing one.
#[derive(Default)]
pub struct StubJobExecutor {
    list_responses: Mutex<VecDeque<KubectlResult<Vec<KubernetesManifest>>>>,
    create_responses: Mutex<VecDeque<KubectlResult<KubernetesManifest>>>,
    replace_responses: Mutex<VecDeque<KubectlResult<KubernetesManifest>>>,
    delete_responses: Mutex<VecDeque<KubectlResult<()>>>,
    cluster: Mutex<HashMap<ManifestIdentity, KubernetesManifest>>,
    calls: Mutex<Vec<Call>>,
}

impl StubJobExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list(self, response: KubectlResult<Vec<KubernetesManifest>>) -> Self {
        self.list_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn on_create(self, response: KubectlResult<KubernetesManifest>) -> Self {
        self.create_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn on_replace(self, response: KubectlResult<KubernetesManifest>) -> Self {
        self.replace_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn on_delete(self, response: KubectlResult<()>) -> Self {
        self.delete_responses.lock().unwrap().push_back(response);
        self
    }

    /// Seed the simulated cluster with an existing resource
    pub fn with_existing(self, manifest: KubernetesManifest) -> Self {
        self.cluster
            .lock()
            .unwrap()
            .insert(manifest.identity(), manifest);
        self
    }

    pub fn stored(&self, identity: &ManifestIdentity) -> Option<KubernetesManifest> {
        self.cluster.lock().unwrap().get(identity).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_count(&self) -> usize {
        self.count(|c| matches!(c, Call::List { .. }))
    }

    pub fn create_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Create { .. }))
    }

    pub fn replace_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Replace { .. }))
    }

    fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl JobExecutor for StubJobExecutor {
    async fn list(
        &self,
        credentials: &KubernetesCredentials,
        kinds: &[KubernetesKind],
        namespace: Option<&str>,
        selectors: &SelectorList,
    ) -> KubectlResult<Vec<KubernetesManifest>> {
        self.record(Call::List {
            account: credentials.account_name().to_string(),
            kinds: kinds.to_vec(),
            namespace: namespace.map(String::from),
            selectors: selectors.clone(),
        });
        if let Some(response) = self.list_responses.lock().unwrap().pop_front() {
            return response;
        }
        Ok(self
            .cluster
            .lock()
            .unwrap()
            .values()
            .filter(|m| kinds.contains(&m.kind()))
            .filter(|m| namespace.is_none() || m.namespace().as_deref() == namespace)
            .cloned()
            .collect())
    }

    async fn get(
        &self,
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
    ) -> KubectlResult<Option<KubernetesManifest>> {
        self.record(Call::Get {
            account: credentials.account_name().to_string(),
            kind: kind.clone(),
            namespace: namespace.map(String::from),
            name: name.to_string(),
        });
        let identity = ManifestIdentity {
            kind: kind.clone(),
            namespace: namespace.map(String::from),
            name: name.to_string(),
        };
        Ok(self.stored(&identity))
    }

    async fn create(
        &self,
        credentials: &KubernetesCredentials,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest> {
        self.record(Call::Create {
            account: credentials.account_name().to_string(),
            manifest: manifest.clone(),
            task: task.clone(),
            op_name: op_name.to_string(),
        });
        if let Some(response) = self.create_responses.lock().unwrap().pop_front() {
            return response;
        }
        let mut cluster = self.cluster.lock().unwrap();
        let identity = manifest.identity();
        if cluster.contains_key(&identity) {
            return Err(KubectlError::AlreadyExists {
                message: format!("Error from server (AlreadyExists): {} already exists", identity),
            });
        }
        cluster.insert(identity, manifest.clone());
        Ok(manifest.clone())
    }

    async fn replace(
        &self,
        credentials: &KubernetesCredentials,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest> {
        self.record(Call::Replace {
            account: credentials.account_name().to_string(),
            manifest: manifest.clone(),
            task: task.clone(),
            op_name: op_name.to_string(),
        });
        if let Some(response) = self.replace_responses.lock().unwrap().pop_front() {
            return response;
        }
        let mut cluster = self.cluster.lock().unwrap();
        let identity = manifest.identity();
        if !cluster.contains_key(&identity) {
            return Err(KubectlError::NotFound {
                message: format!("Error from server (NotFound): {} not found", identity),
            });
        }
        cluster.insert(identity, manifest.clone());
        Ok(manifest.clone())
    }

    async fn delete(
        &self,
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
        _task: &Task,
        _op_name: &str,
    ) -> KubectlResult<()> {
        self.record(Call::Delete {
            account: credentials.account_name().to_string(),
            kind: kind.clone(),
            namespace: namespace.map(String::from),
            name: name.to_string(),
        });
        if let Some(response) = self.delete_responses.lock().unwrap().pop_front() {
            return response;
        }
        let identity = ManifestIdentity {
            kind: kind.clone(),
            namespace: namespace.map(String::from),
            name: name.to_string(),
        };
        match self.cluster.lock().unwrap().remove(&identity) {
            Some(_) => Ok(()),
            None => Err(KubectlError::NotFound {
                message: format!("Error from server (NotFound): {} not found", identity),
            }),
        }
    }
}

/// Build credentials for `account` with default registries around `executor`
pub fn credentials_for(
    account: ManagedAccount,
    executor: Arc<dyn JobExecutor>,
) -> KubernetesCredentials {
    KubernetesCredentialsFactory::with_defaults(executor)
        .build(account)
        .expect("test account should be valid")
}

/// Route tracing output through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
