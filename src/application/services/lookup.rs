//! Document lookup service
//!
//! Loads documents through the `FileSystem` boundary and resolves paths
//! against them with a configured `PathGetter`.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{
    sample_record, DocumentFormat, DomainError, KeyPath, PathGetter, Value, SAMPLE_QUERIES,
};
use crate::infrastructure::traits::FileSystem;

/// Result of resolving one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupOutcome {
    pub path: KeyPath,
    /// Found value, `None` when the path did not resolve
    pub value: Option<Value>,
    #[serde(rename = "type")]
    pub type_name: Option<&'static str>,
}

impl LookupOutcome {
    fn new(path: KeyPath, value: Option<&Value>) -> Self {
        Self {
            path,
            type_name: value.map(Value::type_name),
            value: value.cloned(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }
}

/// Service for loading documents and resolving paths in them.
pub struct LookupService {
    fs: Arc<dyn FileSystem>,
    getter: PathGetter,
}

impl LookupService {
    /// Create a new lookup service.
    pub fn new(fs: Arc<dyn FileSystem>, getter: PathGetter) -> Self {
        Self { fs, getter }
    }

    pub fn getter(&self) -> PathGetter {
        self.getter
    }

    /// Load a document from disk.
    ///
    /// An explicit `format` wins; otherwise it is inferred from the extension.
    pub fn load(&self, path: &Path, format: Option<DocumentFormat>) -> ApplicationResult<Value> {
        debug!("load: path={}, format={:?}", path.display(), format);
        let format = format
            .or_else(|| DocumentFormat::from_path(path))
            .ok_or_else(|| ApplicationError::UnknownFormat(path.to_path_buf()))?;

        if !self.fs.is_file(path) {
            return Err(DomainError::DocumentNotFound(path.to_path_buf()).into());
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read document", path)?;
        self.load_str(&content, format)
    }

    /// Decode a document already held in memory (e.g. read from stdin).
    pub fn load_str(&self, content: &str, format: DocumentFormat) -> ApplicationResult<Value> {
        debug!("load_str: {} bytes as {}", content.len(), format);
        Ok(format.parse(content)?)
    }

    /// Resolve each path against `document`, preserving order.
    pub fn query<S: AsRef<str>>(
        &self,
        document: &Value,
        paths: impl IntoIterator<Item = S>,
    ) -> Vec<LookupOutcome> {
        paths
            .into_iter()
            .map(|raw| {
                let path = KeyPath::parse(raw.as_ref());
                let value = self.getter.get_path(document, &path);
                debug!("query: {} resolved={}", path, value.is_some());
                LookupOutcome::new(path, value)
            })
            .collect()
    }

    /// Resolve the demonstration queries against the sample record.
    pub fn demo(&self) -> Vec<LookupOutcome> {
        self.query(&sample_record(), SAMPLE_QUERIES)
    }
}
