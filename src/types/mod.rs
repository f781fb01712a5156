// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by credentials, registries and executors.

pub mod kind;
pub mod manifest;
pub mod selector;
pub mod task;

pub use kind::KubernetesKind;
pub use manifest::{KubernetesManifest, ManifestIdentity};
pub use selector::{Selector, SelectorList};
pub use task::Task;
