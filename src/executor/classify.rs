// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Maps a failed kubectl run onto the closed [`KubectlError`] vocabulary.
//!
//! This is the only place that looks at diagnostic text.

use crate::constants::kubectl::{ALREADY_EXISTS_MARKER, NOT_FOUND_MARKER};
use crate::error::KubectlError;

/// Classify a kubectl run that exited unsuccessfully.
///
/// `exit_code` is `None` when the process was terminated by a signal.
pub fn classify_failure(exit_code: Option<i32>, stderr: &str) -> KubectlError {
    let stderr = stderr.trim();

    if stderr.contains(ALREADY_EXISTS_MARKER) {
        return KubectlError::AlreadyExists {
            message: stderr.to_string(),
        };
    }
    if stderr.contains(NOT_FOUND_MARKER) {
        return KubectlError::NotFound {
            message: stderr.to_string(),
        };
    }

    let message = match (stderr.is_empty(), exit_code) {
        (false, _) => stderr.to_string(),
        (true, Some(code)) => format!("kubectl exited with status {} and no output", code),
        (true, None) => "kubectl was terminated by a signal".to_string(),
    };
    KubectlError::failed(message)
}
