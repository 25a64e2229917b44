//! Photo record and the validated input used to create or replace one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{codes, AppError, LocSegment, ValidationIssue};

/// A stored photo: caller-supplied metadata plus server-assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Photo {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Validated body for create and replace.
///
/// Defaults: a missing or null `description` stays `None`, a missing or null
/// `tags` becomes an empty list. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoInput {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub tags: Vec<String>,
}

impl PhotoInput {
    /// Validate a JSON request body, reporting every problem found.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let Some(fields) = body.as_object() else {
            return Err(AppError::Validation(vec![ValidationIssue::new(
                codes::MODEL_ATTRIBUTES_TYPE,
                vec!["body".into()],
                "Input should be a valid dictionary or object to extract fields from",
            )]));
        };

        let mut issues = Vec::new();
        let title = required_string(fields, "title", &mut issues);
        let description = optional_string(fields, "description", &mut issues);
        let url = required_string(fields, "url", &mut issues);
        let tags = optional_string_list(fields, "tags", &mut issues);

        match (title, url) {
            (Some(title), Some(url)) if issues.is_empty() => Ok(Self {
                title,
                description,
                url,
                tags,
            }),
            _ => Err(AppError::Validation(issues)),
        }
    }
}

fn field_loc(field: &str) -> Vec<LocSegment> {
    vec!["body".into(), field.into()]
}

fn required_string(
    fields: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match fields.get(field) {
        None => {
            issues.push(ValidationIssue::missing(field_loc(field)));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(ValidationIssue::string_type(field_loc(field)));
            None
        }
    }
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(ValidationIssue::string_type(field_loc(field)));
            None
        }
    }
}

fn optional_string_list(
    fields: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<String> {
    let items = match fields.get(field) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            issues.push(ValidationIssue::list_type(field_loc(field)));
            return Vec::new();
        }
    };

    let mut tags = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => tags.push(s.clone()),
            _ => {
                let mut loc = field_loc(field);
                loc.push(index.into());
                issues.push(ValidationIssue::string_type(loc));
            }
        }
    }
    tags
}
