// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

/// Execution context of one logical operation.
///
/// Credentials pass it to the executor untouched; the executor uses the id to
/// correlate the kubectl runs it performs on the task's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    id: String,
}

impl Task {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
