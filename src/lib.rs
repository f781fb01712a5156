// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod executor;
pub mod registry;
pub mod security;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{CredentialsError, KubectlError};
pub use executor::{JobExecutor, KubectlJobExecutor};
pub use security::{KubernetesCredentials, KubernetesCredentialsFactory};
