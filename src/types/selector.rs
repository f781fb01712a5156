// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label selectors in kubectl's `-l` syntax

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Equals { key: String, value: String },
    NotEquals { key: String, value: String },
    In { key: String, values: Vec<String> },
    NotIn { key: String, values: Vec<String> },
    Exists { key: String },
    NotExists { key: String },
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Equals { key, value } => write!(f, "{}={}", key, value),
            Selector::NotEquals { key, value } => write!(f, "{}!={}", key, value),
            Selector::In { key, values } => write!(f, "{} in ({})", key, values.join(",")),
            Selector::NotIn { key, values } => write!(f, "{} notin ({})", key, values.join(",")),
            Selector::Exists { key } => write!(f, "{}", key),
            Selector::NotExists { key } => write!(f, "!{}", key),
        }
    }
}

/// Conjunction of selectors; empty matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter()
    }
}

impl From<Vec<Selector>> for SelectorList {
    fn from(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}
