// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! [`JobExecutor`] backed by the kubectl binary

use crate::config::Config;
use crate::error::{KubectlError, KubectlResult};
use crate::executor::{classify_failure, JobExecutor};
use crate::security::KubernetesCredentials;
use crate::types::{KubernetesKind, KubernetesManifest, SelectorList, Task};
use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Runs every operation as a kubectl subprocess.
///
/// The account's `kubeconfigFile` and `context` select the cluster; manifests
/// go in on stdin and come back as `-o json`.
#[derive(Debug, Clone)]
pub struct KubectlJobExecutor {
    config: Config,
}

#[derive(Deserialize)]
struct ManifestList {
    #[serde(default)]
    items: Vec<KubernetesManifest>,
}

impl KubectlJobExecutor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn executable<'a>(&'a self, credentials: &'a KubernetesCredentials) -> &'a str {
        credentials
            .account()
            .kubectl_executable
            .as_deref()
            .unwrap_or(&self.config.kubectl_executable)
    }

    fn base_args(credentials: &KubernetesCredentials) -> Vec<String> {
        let account = credentials.account();
        let mut args = Vec::new();
        if let Some(kubeconfig) = &account.kubeconfig_file {
            args.extend(["--kubeconfig".to_string(), kubeconfig.clone()]);
        }
        if let Some(context) = &account.context {
            args.extend(["--context".to_string(), context.clone()]);
        }
        args
    }

    /// Namespace flags for a single named resource; cluster scoped kinds get none
    fn resource_namespace_args(
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
    ) -> Vec<String> {
        match namespace {
            Some(ns) if credentials.kind_properties(kind).namespaced => {
                vec!["--namespace".to_string(), ns.to_string()]
            }
            _ => Vec::new(),
        }
    }

    pub(crate) fn list_args(
        credentials: &KubernetesCredentials,
        kinds: &[KubernetesKind],
        namespace: Option<&str>,
        selectors: &SelectorList,
    ) -> Vec<String> {
        let mut args = Self::base_args(credentials);
        args.push("get".to_string());
        args.push(kinds.iter().map(kind_arg).collect::<Vec<_>>().join(","));
        match namespace {
            Some(ns) => args.extend(["--namespace".to_string(), ns.to_string()]),
            None => args.push("--all-namespaces".to_string()),
        }
        if !selectors.is_empty() {
            args.extend(["--selector".to_string(), selectors.to_string()]);
        }
        args.extend(["-o".to_string(), "json".to_string()]);
        args
    }

    pub(crate) fn get_args(
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
    ) -> Vec<String> {
        let mut args = Self::base_args(credentials);
        args.extend(["get".to_string(), kind_arg(kind), name.to_string()]);
        args.extend(Self::resource_namespace_args(credentials, kind, namespace));
        args.extend(["-o".to_string(), "json".to_string()]);
        args
    }

    /// `create` and `replace` read the manifest from stdin
    pub(crate) fn apply_args(credentials: &KubernetesCredentials, verb: &str) -> Vec<String> {
        let mut args = Self::base_args(credentials);
        args.extend([
            verb.to_string(),
            "-f".to_string(),
            "-".to_string(),
            "-o".to_string(),
            "json".to_string(),
        ]);
        args
    }

    pub(crate) fn delete_args(
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
    ) -> Vec<String> {
        let mut args = Self::base_args(credentials);
        args.extend(["delete".to_string(), kind_arg(kind), name.to_string()]);
        args.extend(Self::resource_namespace_args(credentials, kind, namespace));
        args
    }

    /// Run kubectl and return its stdout, classifying any failure
    async fn run(
        &self,
        credentials: &KubernetesCredentials,
        args: Vec<String>,
        stdin: Option<String>,
    ) -> KubectlResult<String> {
        let executable = self.executable(credentials);
        debug!("Running {} {}", executable, args.join(" "));

        let mut child = Command::new(executable)
            .args(&args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| KubectlError::Unclassified(Box::new(e)))?;

        // Feed stdin while collecting output so neither pipe can fill up and stall
        let pipe = child.stdin.take();
        let feed = async move {
            let (Some(input), Some(mut pipe)) = (stdin, pipe) else {
                return Ok(());
            };
            match pipe.write_all(input.as_bytes()).await {
                // kubectl may exit before reading stdin; its stderr then says why
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                result => result,
            }
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| KubectlError::Unclassified(Box::new(e)))?;
        fed.map_err(|e| KubectlError::Unclassified(Box::new(e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(output.status.code(), &stderr));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| KubectlError::failed_with("kubectl output is not valid UTF-8", e))
    }

    async fn apply(
        &self,
        credentials: &KubernetesCredentials,
        verb: &str,
        manifest: &KubernetesManifest,
    ) -> KubectlResult<KubernetesManifest> {
        let payload = manifest.to_json().map_err(|e| {
            KubectlError::failed_with(format!("Failed to serialize manifest: {}", e), e)
        })?;
        let stdout = self
            .run(credentials, Self::apply_args(credentials, verb), Some(payload))
            .await?;
        parse_manifest(&stdout)
    }
}

#[async_trait]
impl JobExecutor for KubectlJobExecutor {
    #[instrument(skip_all, fields(account = %credentials.account_name(), namespace = ?namespace))]
    async fn list(
        &self,
        credentials: &KubernetesCredentials,
        kinds: &[KubernetesKind],
        namespace: Option<&str>,
        selectors: &SelectorList,
    ) -> KubectlResult<Vec<KubernetesManifest>> {
        let args = Self::list_args(credentials, kinds, namespace, selectors);
        let stdout = self.run(credentials, args, None).await?;
        let manifests = parse_manifest_list(&stdout)?;
        debug!("kubectl returned {} manifests", manifests.len());
        Ok(manifests)
    }

    #[instrument(
        skip_all,
        fields(account = %credentials.account_name(), kind = %kind, name = %name)
    )]
    async fn get(
        &self,
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
    ) -> KubectlResult<Option<KubernetesManifest>> {
        let args = Self::get_args(credentials, kind, namespace, name);
        match self.run(credentials, args, None).await {
            Ok(stdout) => parse_manifest(&stdout).map(Some),
            Err(KubectlError::NotFound { .. }) => {
                debug!("{} {} not found", kind, name);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(
        skip_all,
        fields(account = %credentials.account_name(), task = %task, op = op_name)
    )]
    async fn create(
        &self,
        credentials: &KubernetesCredentials,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest> {
        info!("Creating {}", manifest.identity());
        self.apply(credentials, "create", manifest).await
    }

    #[instrument(
        skip_all,
        fields(account = %credentials.account_name(), task = %task, op = op_name)
    )]
    async fn replace(
        &self,
        credentials: &KubernetesCredentials,
        manifest: &KubernetesManifest,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<KubernetesManifest> {
        info!("Replacing {}", manifest.identity());
        self.apply(credentials, "replace", manifest).await
    }

    #[instrument(
        skip_all,
        fields(account = %credentials.account_name(), task = %task, op = op_name)
    )]
    async fn delete(
        &self,
        credentials: &KubernetesCredentials,
        kind: &KubernetesKind,
        namespace: Option<&str>,
        name: &str,
        task: &Task,
        op_name: &str,
    ) -> KubectlResult<()> {
        info!("Deleting {} {}", kind, name);
        let args = Self::delete_args(credentials, kind, namespace, name);
        self.run(credentials, args, None).await?;
        Ok(())
    }
}

fn kind_arg(kind: &KubernetesKind) -> String {
    kind.to_string().to_ascii_lowercase()
}

fn parse_manifest(stdout: &str) -> KubectlResult<KubernetesManifest> {
    serde_json::from_str(stdout).map_err(|e| {
        KubectlError::failed_with(format!("Failed to parse kubectl output: {}", e), e)
    })
}

fn parse_manifest_list(stdout: &str) -> KubectlResult<Vec<KubernetesManifest>> {
    serde_json::from_str::<ManifestList>(stdout)
        .map(|list| list.items)
        .map_err(|e| {
            KubectlError::failed_with(format!("Failed to parse kubectl output: {}", e), e)
        })
}
