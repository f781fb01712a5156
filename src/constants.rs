// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Moniker annotation keys written and read by the annotations namer
pub mod annotations {
    pub const APPLICATION: &str = "moniker.spinnaker.io/application";
    pub const CLUSTER: &str = "moniker.spinnaker.io/cluster";
    pub const STACK: &str = "moniker.spinnaker.io/stack";
    pub const DETAIL: &str = "moniker.spinnaker.io/detail";
    pub const SEQUENCE: &str = "moniker.spinnaker.io/sequence";
}

/// kubectl invocation defaults
pub mod kubectl {
    /// Executable used when neither the environment nor the account overrides it
    pub const DEFAULT_EXECUTABLE: &str = "kubectl";
    /// Marker kubectl prints in stderr when a create hits an existing resource
    pub const ALREADY_EXISTS_MARKER: &str = "(AlreadyExists)";
    /// Marker kubectl prints in stderr when the target resource is missing
    pub const NOT_FOUND_MARKER: &str = "(NotFound)";
}

/// Name of the naming strategy used when an account does not pick one
pub const DEFAULT_NAMING_STRATEGY: &str = "kubernetesAnnotations";

/// Handler name for kinds with no registered resource properties
pub const UNREGISTERED_HANDLER: &str = "unregistered-custom-resource";
