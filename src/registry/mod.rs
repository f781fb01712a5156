// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only registries consulted when shaping requests for an account.

pub mod kind;
pub mod namer;
pub mod property;

pub use kind::{GlobalKindRegistry, KindProperties, KindRegistry};
pub use namer::{AnnotationsNamer, ManifestNamer, Moniker, NamerRegistry};
pub use property::{GlobalResourcePropertyRegistry, ResourceProperties, ResourcePropertyRegistry};
