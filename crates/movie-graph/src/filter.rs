//! Per-field predicate matching over sparse filters.
//!
//! A filter is a sparse JSON map; each present key classifies into one
//! tagged predicate, and a record passes only if every predicate holds.
//! The user and movie call sites classify differently (the user filter
//! matches scalars exactly and id lists by containment; the movie filter
//! does case-insensitive substring matching, gates numeric filters on a
//! plausible release year, and compares nested objects key-by-key) but
//! share the same evaluation.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{Movie, MovieFilter, User, UserFilter};

/// Numeric filters only constrain a release year more recent than this.
const YEAR_FLOOR: f64 = 1800.0;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("field '{field}' does not hold a list")]
    NotAList { field: String },
    #[error("field '{field}' does not hold text")]
    NotText { field: String },
    #[error("field '{field}' does not hold an object")]
    NotAnObject { field: String },
    #[error("record could not be encoded for filtering: {error}")]
    Encode { error: String },
}

/// How a single filter term constrains a record field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldPredicate {
    /// The record field must equal the value; an absent field never matches.
    Exact(Value),
    /// Case-insensitive substring test against a text field.
    Substring(String),
    /// Some candidate must appear in the record's list field.
    ContainsAny(Vec<Value>),
    /// Some candidate must be a case-insensitive fragment of the text field.
    MentionsAny(Vec<String>),
    /// Every given key must equal the record's nested field exactly.
    FieldsEq(Map<String, Value>),
    /// No constraint.
    Ignore,
    /// Rejects every record.
    Never,
}

/// True when the user record satisfies every term of the filter.
pub fn matches_user(user: &User, filter: &UserFilter) -> Result<bool, FilterError> {
    let record = to_map(user)?;
    let terms = to_map(filter)?;
    for (field, value) in &terms {
        if !eval(&record, field, &user_predicate(value))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True when the movie record satisfies every term of the filter.
pub fn matches_movie(movie: &Movie, filter: &MovieFilter) -> Result<bool, FilterError> {
    let record = to_map(movie)?;
    let terms = to_map(filter)?;
    for (field, value) in &terms {
        if !eval(&record, field, &movie_predicate(field, value))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// User-style classification: lists match by containment, everything
/// else by strict equality.
fn user_predicate(value: &Value) -> FieldPredicate {
    match value {
        Value::Array(items) => FieldPredicate::ContainsAny(items.clone()),
        other => FieldPredicate::Exact(other.clone()),
    }
}

/// Movie-style classification.
fn movie_predicate(field: &str, value: &Value) -> FieldPredicate {
    match value {
        Value::Array(items) => FieldPredicate::MentionsAny(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
        ),
        Value::Number(number) => {
            // implausible numeric filters reject the record rather than
            // being ignored; only a post-1800 release year constrains
            if field == "releaseYear" && number.as_f64().is_some_and(|year| year > YEAR_FLOOR) {
                FieldPredicate::Exact(value.clone())
            } else {
                FieldPredicate::Never
            }
        }
        Value::String(text) if text.is_empty() => FieldPredicate::Ignore,
        Value::String(text) => FieldPredicate::Substring(text.clone()),
        Value::Bool(_) => FieldPredicate::Exact(value.clone()),
        Value::Object(nested) => FieldPredicate::FieldsEq(nested.clone()),
        Value::Null => FieldPredicate::Ignore,
    }
}

fn eval(
    record: &Map<String, Value>,
    field: &str,
    predicate: &FieldPredicate,
) -> Result<bool, FilterError> {
    match predicate {
        FieldPredicate::Ignore => Ok(true),
        FieldPredicate::Never => Ok(false),
        FieldPredicate::Exact(expected) => {
            Ok(record.get(field).is_some_and(|value| value == expected))
        }
        FieldPredicate::Substring(needle) => match record.get(field) {
            None | Some(Value::Null) => Err(FilterError::NotText {
                field: field.to_owned(),
            }),
            Some(value) => {
                let haystack = scalar_text(value).ok_or_else(|| FilterError::NotText {
                    field: field.to_owned(),
                })?;
                Ok(haystack.to_lowercase().contains(&needle.to_lowercase()))
            }
        },
        FieldPredicate::ContainsAny(candidates) => match record.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Array(items)) => {
                Ok(candidates.iter().any(|candidate| items.contains(candidate)))
            }
            // a text field is searched for each candidate as a fragment
            Some(Value::String(text)) => Ok(candidates
                .iter()
                .any(|candidate| candidate.as_str().is_some_and(|c| text.contains(c)))),
            Some(_) => Err(FilterError::NotAList {
                field: field.to_owned(),
            }),
        },
        FieldPredicate::MentionsAny(terms) => match record.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(value) => {
                let haystack = scalar_text(value)
                    .ok_or_else(|| FilterError::NotText {
                        field: field.to_owned(),
                    })?
                    .to_lowercase();
                Ok(terms
                    .iter()
                    .any(|term| haystack.contains(&term.to_lowercase())))
            }
        },
        FieldPredicate::FieldsEq(expected) => match record.get(field) {
            Some(Value::Object(nested)) => Ok(expected
                .iter()
                .all(|(key, value)| nested.get(key) == Some(value))),
            _ => Err(FilterError::NotAnObject {
                field: field.to_owned(),
            }),
        },
    }
}

/// Text view of a scalar; numbers and booleans coerce, containers do not.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn to_map<T: Serialize>(value: &T) -> Result<Map<String, Value>, FilterError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(FilterError::Encode {
            error: "expected a JSON object".to_owned(),
        }),
        Err(error) => Err(FilterError::Encode {
            error: error.to_string(),
        }),
    }
}
