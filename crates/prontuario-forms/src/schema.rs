use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// How a field is entered and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    LongText,
    /// Floating point measurement. Zero means "not measured".
    Number,
    Boolean,
    /// One of a fixed list of strings, or empty.
    Choice,
}

impl FieldKind {
    /// The value a blank form holds for this kind.
    pub fn default_value(&self) -> Value {
        match self {
            FieldKind::Text | FieldKind::LongText | FieldKind::Choice => {
                Value::String(String::new())
            }
            FieldKind::Number => Value::from(0.0_f64),
            FieldKind::Boolean => Value::Bool(false),
        }
    }
}

/// Inclusive bounds for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Zero is always accepted: it is the "not measured" default.
    pub fn contains(&self, value: f64) -> bool {
        value == 0.0 || (value >= self.min && value <= self.max)
    }
}

/// One input on a record form, addressed by a dotted JSON path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub path: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub range: Option<NumericRange>,
    pub unit: Option<String>,
    pub choices: Vec<String>,
}

impl Field {
    fn new(path: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            range: None,
            unit: None,
            choices: Vec::new(),
        }
    }

    pub fn text(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Text)
    }

    pub fn long_text(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::LongText)
    }

    pub fn boolean(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Boolean)
    }

    pub fn number(path: &str, label: &str, min: f64, max: f64) -> Self {
        Self {
            range: Some(NumericRange::new(min, max)),
            ..Self::new(path, label, FieldKind::Number)
        }
    }

    pub fn choice(path: &str, label: &str, choices: &[&str]) -> Self {
        Self {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            ..Self::new(path, label, FieldKind::Choice)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }
}

/// A titled group of fields. Field paths are stored fully qualified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
}

impl Section {
    /// Build a section whose field paths are relative to `id`.
    pub fn new(id: &str, name: &str, fields: Vec<Field>) -> Self {
        let fields = fields
            .into_iter()
            .map(|mut f| {
                f.path = format!("{id}.{}", f.path);
                f
            })
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fields,
        }
    }
}

/// A problem with one field of a submitted body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FieldError {
    pub path: String,
    pub label: String,
    pub message: String,
}
