//! Endpoint registry.
//!
//! The registry is a JSON object mapping endpoint names to URLs, kept in a
//! small file (`apis.json` by default) that operators edit freely. It is
//! reloaded from disk at the start of every cycle, so edits take effect on
//! the next run without a restart.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::CoreError;

/// Named endpoints to probe, unique by name.
///
/// Iteration order is sorted by name so console output is stable from run
/// to run regardless of how the file is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, String>,
}

impl EndpointRegistry {
    /// Loads the registry from a JSON object file.
    ///
    /// # Errors
    ///
    /// A missing file or malformed JSON propagates; the caller decides the
    /// blast radius (the scheduler aborts only the current cycle).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let endpoints: BTreeMap<String, String> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = endpoints.len(), "Loaded endpoint registry");
        Ok(Self { endpoints })
    }

    /// Builds a registry from name/URL pairs.
    pub fn from_pairs<N, U>(pairs: impl IntoIterator<Item = (N, U)>) -> Self
    where
        N: Into<String>,
        U: Into<String>,
    {
        Self {
            endpoints: pairs
                .into_iter()
                .map(|(name, url)| (name.into(), url.into()))
                .collect(),
        }
    }

    /// Iterates over `(name, url)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.endpoints
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"github": "https://api.github.com", "httpbin": "https://httpbin.org/get"}}"#
        )
        .unwrap();

        let registry = EndpointRegistry::load(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["github", "httpbin"]);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = EndpointRegistry::load("/definitely/not/here/apis.json").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        let err = EndpointRegistry::load(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_reload_reflects_edits() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": "http://one.example"}}"#).unwrap();
        file.flush().unwrap();

        let first = EndpointRegistry::load(file.path()).unwrap();
        assert_eq!(first.len(), 1);

        // Rewrite the file between cycles; the next load picks it up and
        // the registry loaded earlier is unchanged.
        let mut rewritten = std::fs::File::create(file.path()).unwrap();
        write!(
            rewritten,
            r#"{{"a": "http://one.example", "b": "http://two.example"}}"#
        )
        .unwrap();
        rewritten.flush().unwrap();

        let second = EndpointRegistry::load(file.path()).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let registry =
            EndpointRegistry::from_pairs([("zeta", "http://z"), ("alpha", "http://a")]);
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
