// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classified failure of a single kubectl operation.
///
/// This is a closed vocabulary: callers branch on the variant, never on the
/// message text. Messages are the raw diagnostics reported by kubectl.
#[derive(Error, Debug)]
pub enum KubectlError {
    /// kubectl reported an error that matched no more specific pattern
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The target resource already exists
    #[error("{message}")]
    AlreadyExists { message: String },

    /// The target resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// A failure raised outside kubectl's own output classification
    #[error("{0}")]
    Unclassified(#[source] BoxError),
}

impl KubectlError {
    pub fn failed(message: impl Into<String>) -> Self {
        KubectlError::Failed {
            message: message.into(),
            source: None,
        }
    }

    pub fn failed_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        KubectlError::Failed {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, KubectlError::AlreadyExists { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KubectlError::NotFound { .. })
    }
}

pub type KubectlResult<T> = std::result::Result<T, KubectlError>;

/// Errors raised while building credentials for an account.
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Unknown naming strategy '{strategy}' for account {account}")]
    UnknownNamingStrategy { account: String, strategy: String },

    #[error("Account {account} lists kind {kind} in both kinds and omitKinds")]
    ConflictingKinds { account: String, kind: String },
}

pub type Result<T> = std::result::Result<T, CredentialsError>;
