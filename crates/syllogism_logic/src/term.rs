//! Terms: the atomic subjects and predicates of categorical propositions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque term such as `mammals` or `dogs`.
///
/// Terms carry no structure; two terms are the same term exactly when their
/// names are equal. A term can never be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term(String);

impl Term {
    /// Creates a term, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidTerm(name));
        }
        Ok(Self(name))
    }

    /// Builds a term from a known non-blank literal.
    pub(crate) fn placeholder(name: &'static str) -> Self {
        Self(name.to_string())
    }

    /// Returns the term's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Term::new(s)
    }
}

impl TryFrom<String> for Term {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Term::new(value)
    }
}

impl TryFrom<&str> for Term {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Term::new(value)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.0
    }
}

impl PartialEq<str> for Term {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
