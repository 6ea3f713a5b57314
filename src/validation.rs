//! Schema validation for submitted form payloads.
//!
//! Forms arrive as flat key/value pairs whose keys are nested under a root
//! name, e.g. `listing[title]=Cabin`. A [`Schema`] names the root and the
//! fields that must appear under it; [`validate`] checks every field and
//! reports all complaints at once.
use std::collections::HashMap;

use thiserror::Error;

/// Separates individual field complaints in a [`ValidationError`] message.
pub const MESSAGE_DELIMITER: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Required, non-blank text.
    Text,
    /// Text that may be missing or blank.
    OptionalText,
    /// Required finite number, optionally bounded.
    Number { min: Option<f64>, max: Option<f64> },
    /// Required whole number within an inclusive range.
    Integer { min: i64, max: i64 },
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub root: &'static str,
    pub fields: &'static [Field],
}

/// Upper bound on a nightly price.
pub const MAX_PRICE: f64 = 1e12;

pub const LISTING_SCHEMA: Schema = Schema {
    root: "listing",
    fields: &[
        Field { name: "title", kind: FieldKind::Text },
        Field { name: "description", kind: FieldKind::Text },
        Field { name: "image", kind: FieldKind::OptionalText },
        Field {
            name: "price",
            kind: FieldKind::Number { min: Some(0.0), max: Some(MAX_PRICE) },
        },
        Field { name: "location", kind: FieldKind::Text },
        Field { name: "country", kind: FieldKind::Text },
    ],
};

pub const REVIEW_SCHEMA: Schema = Schema {
    root: "review",
    fields: &[
        Field { name: "comment", kind: FieldKind::Text },
        Field {
            name: "rating",
            kind: FieldKind::Integer { min: 1, max: 5 },
        },
    ],
};

impl Schema {
    /// Collects the `root[field]` entries of a form, keyed by field name.
    fn section<'a>(&self, form: &'a HashMap<String, String>) -> HashMap<&'a str, &'a str> {
        form.iter()
            .filter_map(|(key, value)| {
                let name = key
                    .strip_prefix(self.root)?
                    .strip_prefix('[')?
                    .strip_suffix(']')?;
                Some((name, value.as_str()))
            })
            .collect()
    }

    fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Integer(i64),
    Absent,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", .complaints.join(MESSAGE_DELIMITER))]
pub struct ValidationError {
    complaints: Vec<String>,
}

impl ValidationError {
    pub fn complaints(&self) -> &[String] {
        &self.complaints
    }
}

/// Field values that passed their schema.
#[derive(Debug, Clone, Default)]
pub struct Validated {
    values: HashMap<&'static str, Value>,
}

impl Validated {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> String {
        self.optional_text(name).unwrap_or_default()
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(Value::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(Value::Number(n)) => *n,
            Some(Value::Integer(n)) => *n as f64,
            _ => 0.0,
        }
    }

    pub fn integer(&self, name: &str) -> i64 {
        match self.values.get(name) {
            Some(Value::Integer(n)) => *n,
            Some(Value::Number(n)) => *n as i64,
            _ => 0,
        }
    }
}

/// Checks `form` against `schema`, collecting every field complaint.
pub fn validate(
    form: &HashMap<String, String>,
    schema: &Schema,
) -> Result<Validated, ValidationError> {
    let section = schema.section(form);
    if section.is_empty() {
        return Err(ValidationError {
            complaints: vec![format!("\"{}\" is required", schema.root)],
        });
    }

    let mut complaints = Vec::new();
    let mut values = HashMap::with_capacity(schema.fields.len());

    for field in schema.fields {
        match check(field.kind, section.get(field.name).copied()) {
            Ok(value) => {
                values.insert(field.name, value);
            }
            Err(complaint) => {
                complaints.push(format!("\"{}.{}\" {}", schema.root, field.name, complaint))
            }
        }
    }

    let mut unknown: Vec<&str> = section
        .keys()
        .copied()
        .filter(|name| !schema.has_field(name))
        .collect();
    unknown.sort_unstable();
    for name in unknown {
        complaints.push(format!("\"{}.{}\" is not allowed", schema.root, name));
    }

    if complaints.is_empty() {
        Ok(Validated { values })
    } else {
        Err(ValidationError { complaints })
    }
}

fn check(kind: FieldKind, raw: Option<&str>) -> Result<Value, String> {
    let raw = raw.map(str::trim);
    match kind {
        FieldKind::Text => match raw {
            None => Err("is required".to_string()),
            Some("") => Err("is not allowed to be empty".to_string()),
            Some(text) => Ok(Value::Text(text.to_string())),
        },
        FieldKind::OptionalText => match raw {
            None | Some("") => Ok(Value::Absent),
            Some(text) => Ok(Value::Text(text.to_string())),
        },
        FieldKind::Number { min, max } => {
            let raw = raw.ok_or_else(|| "is required".to_string())?;
            let number = parse_number(raw)?;
            if let Some(min) = min.filter(|min| number < *min) {
                return Err(format!("must be greater than or equal to {min}"));
            }
            if let Some(max) = max.filter(|max| number > *max) {
                return Err(format!("must be less than or equal to {max}"));
            }
            Ok(Value::Number(number))
        }
        FieldKind::Integer { min, max } => {
            let raw = raw.ok_or_else(|| "is required".to_string())?;
            let number = match raw.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    parse_number(raw)?;
                    return Err("must be an integer".to_string());
                }
            };
            if number < min {
                return Err(format!("must be greater than or equal to {min}"));
            }
            if number > max {
                return Err(format!("must be less than or equal to {max}"));
            }
            Ok(Value::Integer(number))
        }
    }
}

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| "must be a number".to_string())
}
