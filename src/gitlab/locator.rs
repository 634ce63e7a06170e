//! Validated inputs that identify what to extract and how to authenticate.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ExtractionError;

/// Full path of a GitLab project, e.g. `group/project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Validates that the path is non-blank and trims surrounding whitespace.
    ///
    /// The value is otherwise opaque and passed to GitLab unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Configuration`] when the path is blank.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ExtractionError> {
        let trimmed = path.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExtractionError::Configuration {
                message: "repository path must not be empty".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the path.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty set of target branch names used to filter merge requests.
///
/// Order of first appearance is kept and repeated names are collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchFilter(Vec<String>);

impl BranchFilter {
    /// Builds a filter from branch names, ignoring blank entries.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Configuration`] when no non-blank branch
    /// name remains.
    pub fn new<I, S>(branches: I) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for branch in branches {
            let trimmed = branch.as_ref().trim();
            if !trimmed.is_empty() && !names.iter().any(|name| name == trimmed) {
                names.push(trimmed.to_owned());
            }
        }

        if names.is_empty() {
            return Err(ExtractionError::Configuration {
                message: "at least one target branch is required (use --branch or -b)".to_owned(),
            });
        }
        Ok(Self(names))
    }

    /// Returns the branch names in the order they were supplied.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Bearer credential used to authenticate against the GraphQL endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::MissingToken`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExtractionError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExtractionError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Global identifier of a merge request, e.g. `gid://gitlab/MergeRequest/1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeRequestId(String);

impl MergeRequestId {
    /// Wraps an identifier returned by GitLab.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MergeRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
