//! Document formats that decode into [`Value`] trees.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value::Value;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Decode `content` into a value tree.
    ///
    /// Sequences become mappings keyed by index. A TOML document is always a
    /// table at the top level; a JSON document may be any value.
    pub fn parse(self, content: &str) -> Result<Value, DomainError> {
        let malformed = |message: String| DomainError::MalformedDocument {
            format: self,
            message,
        };
        match self {
            DocumentFormat::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(Value::from)
                .map_err(|e| malformed(e.to_string())),
            DocumentFormat::Toml => content
                .parse::<toml::Table>()
                .map(Value::from)
                .map_err(|e| malformed(e.message().to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("json"),
            DocumentFormat::Toml => f.write_str("toml"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(DomainError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::getter::get;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("user.json", Some(DocumentFormat::Json))]
    #[case("USER.JSON", Some(DocumentFormat::Json))]
    #[case("conf/app.toml", Some(DocumentFormat::Toml))]
    #[case("notes.yaml", None)]
    #[case("Makefile", None)]
    fn given_file_name_when_inferring_format_then_uses_extension(
        #[case] name: &str,
        #[case] expected: Option<DocumentFormat>,
    ) {
        assert_eq!(DocumentFormat::from_path(&PathBuf::from(name)), expected);
    }

    #[test]
    fn given_json_with_array_when_parsing_then_indices_resolve() {
        let doc = DocumentFormat::Json
            .parse(r#"{"user":{"friends":[{"fullName":"Franklin Kuhn"},{"fullName":"Hubert Sawayn"}]}}"#)
            .expect("parse json");

        assert_eq!(
            get(&doc, "user.friends.1.fullName"),
            Some(&Value::from("Hubert Sawayn"))
        );
    }

    #[test]
    fn given_toml_when_parsing_then_tables_resolve() {
        let doc = DocumentFormat::Toml
            .parse("[user.address]\nstreet = \"83727 Beatty Garden\"\n")
            .expect("parse toml");

        assert_eq!(
            get(&doc, "user.address.street"),
            Some(&Value::from("83727 Beatty Garden"))
        );
    }

    #[test]
    fn given_json_scalar_document_when_parsing_then_returns_scalar() {
        let doc = DocumentFormat::Json.parse("42").expect("parse json");
        assert_eq!(doc, Value::from(42));
    }

    #[rstest]
    #[case(DocumentFormat::Json, "{\"user\":")]
    #[case(DocumentFormat::Toml, "user = ")]
    fn given_broken_input_when_parsing_then_malformed_document(
        #[case] format: DocumentFormat,
        #[case] content: &str,
    ) {
        let err = format.parse(content).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedDocument { format: f, .. } if f == format
        ));
    }
}
