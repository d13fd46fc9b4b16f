//! Content-store connection settings.

use serde::{Deserialize, Serialize};

use crate::FetchError;

/// Query API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2021-08-31";

/// Document type that holds product records.
pub const DEFAULT_DOCUMENT_TYPE: &str = "productnew";

/// Environment variable that holds the read token by default.
pub const DEFAULT_TOKEN_ENV: &str = "SANITY_API_TOKEN";

/// Connection settings for the hosted content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStoreConfig {
    /// Project identifier, part of the API host name.
    pub project_id: String,
    /// Dataset to query.
    pub dataset: String,
    /// Dated API version, e.g. `2021-08-31`.
    pub api_version: String,
    /// Query the CDN host instead of the live API.
    pub use_cdn: bool,
    /// `_type` of product documents.
    pub document_type: String,
    /// Name of the environment variable holding the read token.
    pub token_env: String,
    /// Resolved read token. Never serialized.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: false,
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            token: None,
        }
    }
}

impl ContentStoreConfig {
    /// Settings for a project and dataset with everything else defaulted.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            ..Self::default()
        }
    }

    /// Set the read token directly.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Host root, e.g. `https://abc123.api.sanity.io`.
    pub fn base_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!("https://{}.{}.sanity.io", self.project_id, host)
    }

    /// Path of the query endpoint relative to [`base_url`](Self::base_url).
    pub fn query_path(&self) -> String {
        format!(
            "/v{}/data/query/{}",
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }

    /// Full query endpoint URL.
    pub fn query_url(&self) -> String {
        format!("{}{}", self.base_url(), self.query_path())
    }

    /// Check that the settings can form a valid endpoint.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.project_id.is_empty() {
            return Err(FetchError::InvalidUrl(
                "content store project_id is not set".to_string(),
            ));
        }
        if !is_slug(&self.project_id) {
            return Err(FetchError::InvalidUrl(format!(
                "content store project_id '{}' must be alphanumeric",
                self.project_id
            )));
        }
        if self.dataset.is_empty() || !is_slug(&self.dataset) {
            return Err(FetchError::InvalidUrl(format!(
                "content store dataset '{}' is not valid",
                self.dataset
            )));
        }
        if self.document_type.is_empty() {
            return Err(FetchError::InvalidUrl(
                "content store document_type is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlay `SANITY_PROJECT_ID`, `SANITY_DATASET` and the token variable
    /// from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay environment values from an arbitrary lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(project_id) = non_empty("SANITY_PROJECT_ID") {
            self.project_id = project_id;
        }
        if let Some(dataset) = non_empty("SANITY_DATASET") {
            self.dataset = dataset;
        }
        if let Some(token) = non_empty(&self.token_env) {
            self.token = Some(token);
        }
    }
}

fn is_slug(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
