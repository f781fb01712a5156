// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{kubectl, DEFAULT_NAMING_STRATEGY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Process-wide settings loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// kubectl binary used by accounts that do not override it
    pub kubectl_executable: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let kubectl_executable = match env::var("KUBECTL_EXECUTABLE") {
            Ok(path) if path.trim().is_empty() => {
                anyhow::bail!("KUBECTL_EXECUTABLE environment variable is set but empty")
            }
            Ok(path) => path,
            Err(env::VarError::NotPresent) => kubectl::DEFAULT_EXECUTABLE.to_string(),
            Err(e) => return Err(e).context("KUBECTL_EXECUTABLE is not valid unicode"),
        };

        Ok(Config { kubectl_executable })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kubectl_executable: kubectl::DEFAULT_EXECUTABLE.to_string(),
        }
    }
}

/// A custom resource kind declared on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResource {
    /// Kind as `name` or `name.group`, e.g. `certificate.cert-manager.io`
    pub kubernetes_kind: String,
    #[serde(default = "default_true")]
    pub namespaced: bool,
    #[serde(default)]
    pub versioned: bool,
}

/// Configuration of one managed Kubernetes account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAccount {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubectl_executable: Option<String>,
    /// Allow-list of kinds; empty means every kind not in `omit_kinds`
    #[serde(default)]
    pub kinds: Vec<String>,
    #[serde(default)]
    pub omit_kinds: Vec<String>,
    #[serde(default)]
    pub custom_resources: Vec<CustomResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming_strategy: Option<String>,
}

impl ManagedAccount {
    pub fn new(name: impl Into<String>) -> Self {
        ManagedAccount {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn naming_strategy(&self) -> &str {
        self.naming_strategy
            .as_deref()
            .unwrap_or(DEFAULT_NAMING_STRATEGY)
    }
}

fn default_true() -> bool {
    true
}
