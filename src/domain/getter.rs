//! Path walking over nested values.
//!
//! The walk is a single left-to-right pass over the segments with one early
//! exit. Under [`AbsencePolicy::Falsy`] a stored `0`, `""`, `false` or `null`
//! is indistinguishable from a missing key; [`AbsencePolicy::Missing`] only
//! stops on keys that are not there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::error::DomainError;
use crate::domain::path::KeyPath;
use crate::domain::value::Value;

/// When the walk gives up and reports absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsencePolicy {
    /// Stop on a missing key or on any falsy value (`null`, `false`, `0`, `""`).
    #[default]
    Falsy,
    /// Stop only on a missing key or when descending into a non-mapping.
    Missing,
}

impl AbsencePolicy {
    fn stops_at(self, candidate: Option<&Value>) -> bool {
        match (self, candidate) {
            (_, None) => true,
            (AbsencePolicy::Falsy, Some(value)) => !value.is_truthy(),
            (AbsencePolicy::Missing, Some(_)) => false,
        }
    }
}

impl fmt::Display for AbsencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsencePolicy::Falsy => f.write_str("falsy"),
            AbsencePolicy::Missing => f.write_str("missing"),
        }
    }
}

impl FromStr for AbsencePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "falsy" => Ok(AbsencePolicy::Falsy),
            "missing" => Ok(AbsencePolicy::Missing),
            _ => Err(DomainError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Resolves dot-separated paths against a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathGetter {
    policy: AbsencePolicy,
}

impl PathGetter {
    pub fn new(policy: AbsencePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AbsencePolicy {
        self.policy
    }

    /// Retrieve the value at `path`, or `None` if the walk cannot complete.
    ///
    /// An empty path returns `object` itself.
    pub fn get<'a>(&self, object: &'a Value, path: &str) -> Option<&'a Value> {
        self.get_path(object, &KeyPath::parse(path))
    }

    /// Same as [`PathGetter::get`] with an already parsed path.
    pub fn get_path<'a>(&self, object: &'a Value, path: &KeyPath) -> Option<&'a Value> {
        let mut current = object;
        for (depth, segment) in path.iter().enumerate() {
            let candidate = current.lookup(segment);
            if self.policy.stops_at(candidate) {
                trace!(
                    "get: stopped at segment {:?} (depth {}) of {:?}",
                    segment,
                    depth,
                    path.to_string()
                );
                return None;
            }
            current = candidate?;
        }
        Some(current)
    }

    /// Resolve several paths against the same object, in order.
    pub fn resolve_all<'a, 'p>(
        &self,
        object: &'a Value,
        paths: impl IntoIterator<Item = &'p KeyPath>,
    ) -> Vec<Option<&'a Value>> {
        paths
            .into_iter()
            .map(|path| self.get_path(object, path))
            .collect()
    }

    pub fn get_str<'a>(&self, object: &'a Value, path: &str) -> Option<&'a str> {
        self.get(object, path).and_then(Value::as_str)
    }

    pub fn get_i64(&self, object: &Value, path: &str) -> Option<i64> {
        self.get(object, path).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, object: &Value, path: &str) -> Option<f64> {
        self.get(object, path).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, object: &Value, path: &str) -> Option<bool> {
        self.get(object, path).and_then(Value::as_bool)
    }
}

/// Retrieve the value at a dot-separated `path` inside `object`.
///
/// Walks one segment at a time and returns `None` as soon as a segment is
/// missing or resolves to a falsy value. Never panics, never mutates.
///
/// ```
/// use dotget::{get, Value};
///
/// let doc: Value = [("user", [("age", Value::from(30))].into_iter().collect::<Value>())]
///     .into_iter()
///     .collect();
/// assert_eq!(get(&doc, "user.age"), Some(&Value::from(30)));
/// assert_eq!(get(&doc, "user.name"), None);
/// ```
pub fn get<'a>(object: &'a Value, path: &str) -> Option<&'a Value> {
    PathGetter::default().get(object, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::sample_record;
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> Value {
        sample_record()
    }

    fn falsy_holder() -> Value {
        [
            ("zero", Value::from(0)),
            ("empty", Value::from("")),
            ("no", Value::from(false)),
            ("nothing", Value::Null),
            (
                "nested",
                [("zero", Value::from(0))].into_iter().collect::<Value>(),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case("user.fullName", Some(Value::from("Janis Pagac")))]
    #[case("user.age", Some(Value::from(30)))]
    #[case("user.address.street", Some(Value::from("83727 Beatty Garden")))]
    #[case("user.friends.0.fullName", Some(Value::from("Franklin Kuhn")))]
    #[case("user.friends.0.age", Some(Value::from(20)))]
    #[case("user.friends.1.age", None)]
    #[case("user.missing.x", None)]
    fn given_sample_record_when_getting_then_resolves_expected_value(
        record: Value,
        #[case] path: &str,
        #[case] expected: Option<Value>,
    ) {
        assert_eq!(get(&record, path), expected.as_ref());
    }

    #[rstest]
    fn given_empty_path_when_getting_then_returns_object_unchanged(record: Value) {
        assert_eq!(get(&record, ""), Some(&record));
        assert_eq!(get(&Value::Null, ""), Some(&Value::Null));
        assert_eq!(get(&Value::from(0), ""), Some(&Value::from(0)));
    }

    #[rstest]
    #[case("zero")]
    #[case("empty")]
    #[case("no")]
    #[case("nothing")]
    #[case("nested.zero")]
    fn given_falsy_terminal_when_falsy_policy_then_absent(#[case] path: &str) {
        assert_eq!(get(&falsy_holder(), path), None);
    }

    #[rstest]
    #[case("zero", Value::from(0))]
    #[case("empty", Value::from(""))]
    #[case("no", Value::from(false))]
    #[case("nothing", Value::Null)]
    #[case("nested.zero", Value::from(0))]
    fn given_falsy_terminal_when_missing_policy_then_returns_stored_value(
        #[case] path: &str,
        #[case] expected: Value,
    ) {
        let getter = PathGetter::new(AbsencePolicy::Missing);
        assert_eq!(getter.get(&falsy_holder(), path), Some(&expected));
    }

    #[test]
    fn given_falsy_intermediate_when_deeper_data_exists_then_absent() {
        // "flag" is an empty string; nothing under it is reachable anyway,
        // but the walk must stop before trying.
        let doc: Value = [("flag", Value::from("")), ("count", Value::from(0))]
            .into_iter()
            .collect();

        assert_eq!(get(&doc, "flag.0"), None);
        assert_eq!(get(&doc, "count.x.y"), None);
        assert_eq!(
            PathGetter::new(AbsencePolicy::Missing).get(&doc, "count.x"),
            None
        );
    }

    #[rstest]
    fn given_scalar_intermediate_when_getting_then_absent(record: Value) {
        assert_eq!(get(&record, "user.fullName.0"), None);
        assert_eq!(get(&record, "user.age.value"), None);
    }

    #[rstest]
    fn given_repeated_calls_when_getting_then_same_result_and_no_mutation(record: Value) {
        let before = record.clone();
        let first = get(&record, "user.address.city").cloned();
        let second = get(&record, "user.address.city").cloned();

        assert_eq!(first, second);
        assert_eq!(first, Some(Value::from("Hamilton")));
        assert_eq!(record, before);
    }

    #[test]
    fn given_empty_segment_when_key_is_empty_string_then_resolves() {
        let doc: Value = [(
            "a",
            [("", Value::from("blank key"))].into_iter().collect::<Value>(),
        )]
        .into_iter()
        .collect();

        assert_eq!(get(&doc, "a."), Some(&Value::from("blank key")));
        assert_eq!(get(&doc, "a..b"), None);
    }

    #[rstest]
    fn given_typed_accessors_when_category_matches_then_returns_value(record: Value) {
        let getter = PathGetter::default();

        assert_eq!(getter.get_str(&record, "user.fullName"), Some("Janis Pagac"));
        assert_eq!(getter.get_i64(&record, "user.age"), Some(30));
        assert_eq!(getter.get_f64(&record, "user.friends.0.age"), Some(20.0));
        assert_eq!(getter.get_str(&record, "user.age"), None);
        assert_eq!(getter.get_bool(&record, "user.age"), None);
    }

    #[rstest]
    fn given_several_paths_when_resolving_all_then_keeps_order(record: Value) {
        let paths = [
            KeyPath::parse("user.age"),
            KeyPath::parse("user.nope"),
            KeyPath::parse("user.address.city"),
        ];

        let results = PathGetter::default().resolve_all(&record, &paths);

        assert_eq!(
            results,
            vec![
                Some(&Value::from(30)),
                None,
                Some(&Value::from("Hamilton"))
            ]
        );
    }

    #[rstest]
    #[case("falsy", AbsencePolicy::Falsy)]
    #[case("Missing", AbsencePolicy::Missing)]
    fn given_policy_name_when_parsing_then_recognized(
        #[case] input: &str,
        #[case] expected: AbsencePolicy,
    ) {
        assert_eq!(input.parse::<AbsencePolicy>().ok(), Some(expected));
    }

    #[test]
    fn given_unknown_policy_name_when_parsing_then_errors() {
        assert!(matches!(
            "strict".parse::<AbsencePolicy>(),
            Err(DomainError::UnknownPolicy(name)) if name == "strict"
        ));
    }
}
