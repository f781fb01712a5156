// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-account credentials and the factory that builds them.

pub mod credentials;
pub mod factory;

pub use credentials::KubernetesCredentials;
pub use factory::KubernetesCredentialsFactory;
