//! Caller identity, passed explicitly to role checks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Anything that can answer role membership for the caller of an operation.
pub trait Identity {
    fn is_in_role(&self, role: &str) -> bool;
}

/// A named caller with a fixed set of roles.
///
/// Role names are compared exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Principal {
    name: String,
    roles: BTreeSet<String>,
}

impl Principal {
    pub fn new<I, R>(name: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn anonymous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

impl Identity for Principal {
    fn is_in_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
