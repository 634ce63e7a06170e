//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.mr-notes.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MR_NOTES_REPO`, `MR_NOTES_TOKEN`, or the
//!    plain `GITLAB_ACCESS_TOKEN`
//! 4. **Command-line arguments** – `--repo`/`-r`, `--branch`/`-b`,
//!    `--token`/`-t`, and friends
//!
//! # Configuration File
//!
//! ```toml
//! repo = "group/project"
//! branch = ["main", "release"]
//! api_url = "https://gitlab.example.com/api/graphql"
//! page_size = 50
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::gitlab::{BranchFilter, DEFAULT_GRAPHQL_URL, ExtractionError, PageSize, ProjectPath};

/// Environment variable read when no token is configured.
pub const TOKEN_ENV_VAR: &str = "GITLAB_ACCESS_TOKEN";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use mr_notes::NotesConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = NotesConfig::load().expect("failed to load configuration");
/// let project = config.require_repository().expect("repository required");
/// let branches = config.require_branches().expect("branches required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MR_NOTES",
    discovery(
        dotfile_name = ".mr-notes.toml",
        config_file_name = "mr-notes.toml",
        app_name = "mr-notes"
    )
)]
pub struct NotesConfig {
    /// Full path of the GitLab project (e.g. `group/project`).
    ///
    /// Can be provided via:
    /// - CLI: `--repo <PATH>` or `-r <PATH>`
    /// - Environment: `MR_NOTES_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Target branches; merge requests targeting any of them are exported.
    ///
    /// Can be provided via:
    /// - CLI: `--branch <NAME>` / `-b <NAME>`, repeatable
    /// - Config file: `branch = ["main"]`
    #[ortho_config(cli_short = 'b')]
    pub branch: Vec<String>,

    /// Personal, project, or group access token for the GraphQL API.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `MR_NOTES_TOKEN` or `GITLAB_ACCESS_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GraphQL endpoint. Defaults to gitlab.com.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>`
    /// - Environment: `MR_NOTES_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Items requested per page (1 to 100). GitLab's default when unset.
    #[ortho_config()]
    pub page_size: Option<u32>,

    /// File to write records to instead of standard output.
    ///
    /// Can be provided via:
    /// - CLI: `--output <PATH>` or `-o <PATH>`
    /// - Config file: `output = "..."`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,
}

impl NotesConfig {
    /// Resolves the token from configuration or the `GITLAB_ACCESS_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::MissingToken`] when no token source provides
    /// a value.
    pub fn resolve_token(&self) -> Result<String, ExtractionError> {
        self.token
            .clone()
            .or_else(|| env::var(TOKEN_ENV_VAR).ok())
            .ok_or(ExtractionError::MissingToken)
    }

    /// Returns the validated project path.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Configuration`] when no repository is
    /// configured or the value is blank.
    pub fn require_repository(&self) -> Result<ProjectPath, ExtractionError> {
        let repo = self
            .repo
            .as_deref()
            .ok_or_else(|| ExtractionError::Configuration {
                message: "repository is required (use --repo or -r)".to_owned(),
            })?;
        ProjectPath::new(repo)
    }

    /// Returns the validated branch filter.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Configuration`] when no non-blank branch is
    /// configured.
    pub fn require_branches(&self) -> Result<BranchFilter, ExtractionError> {
        BranchFilter::new(&self.branch)
    }

    /// Returns the GraphQL endpoint, falling back to gitlab.com.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_GRAPHQL_URL)
    }

    /// Returns the validated page size, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidPagination`] when the configured
    /// value is out of range.
    pub fn page_size(&self) -> Result<Option<PageSize>, ExtractionError> {
        self.page_size.map(PageSize::new).transpose()
    }
}

#[cfg(test)]
mod tests;
