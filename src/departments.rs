//! The fixed department domain.
//!
//! Departments are configured once at startup as an ordered list of names and
//! never edited at runtime. The domain answers two questions for the rest of
//! the crate: "is this name a real department?" (store validation) and "in
//! what order do departments appear?" (hover resolution tie-breaking and
//! section layout).

use once_cell::sync::Lazy;

use crate::constants::DEFAULT_DEPARTMENTS;

static DEFAULT_DOMAIN: Lazy<DepartmentDomain> =
    Lazy::new(|| DepartmentDomain::new(DEFAULT_DEPARTMENTS.iter().copied()));

/// The fixed, ordered set of department names.
///
/// Order is the declared display order. Duplicate names collapse to their
/// first occurrence so membership and iteration stay consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartmentDomain {
    names: Vec<String>,
}

impl DepartmentDomain {
    /// Build a domain from an ordered list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Self { names: out }
    }

    /// The department list shipped with the app.
    pub fn default_domain() -> Self {
        DEFAULT_DOMAIN.clone()
    }

    /// Whether `name` is a member of the domain.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterate department names in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of departments.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
