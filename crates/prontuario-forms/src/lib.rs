//! prontuario-forms
//!
//! Record form definitions. Pure data, no HTTP dependency.
//! Each record type declares its sections and fields once; a single
//! engine builds blank bodies, applies edits, validates and renders them.

pub mod body;
pub mod error;
pub mod forms;
pub mod schema;

use prontuario_core::models::record_type::RecordType;
use serde_json::Value;

use error::FormError;
use schema::{Field, FieldError, FieldKind, Section};

/// Trait implemented by each record type's form.
pub trait RecordForm: Send + Sync {
    fn record_type(&self) -> RecordType;

    /// Human-readable title (e.g., "Cardiorespiratory assessment").
    fn name(&self) -> &str;

    fn sections(&self) -> &[Section];

    fn fields(&self) -> Vec<&Field> {
        self.sections().iter().flat_map(|s| &s.fields).collect()
    }

    fn field(&self, path: &str) -> Option<&Field> {
        self.sections()
            .iter()
            .flat_map(|s| &s.fields)
            .find(|f| f.path == path)
    }

    /// A complete body with every field at its default.
    fn blank_body(&self) -> Value {
        let mut out = Value::Object(serde_json::Map::new());
        for field in self.fields() {
            body::set_path(&mut out, &field.path, field.kind.default_value());
        }
        out
    }

    /// Parse `raw` according to the field's kind and store it in `body`.
    fn set_field(&self, body: &mut Value, path: &str, raw: &str) -> Result<(), FormError> {
        if !body.is_object() {
            return Err(FormError::NotAnObject);
        }
        let field = self.field(path).ok_or_else(|| FormError::UnknownField {
            record_type: self.record_type(),
            path: path.to_string(),
        })?;
        let value = parse_input(field, raw)?;
        body::set_path(body, &field.path, value);
        Ok(())
    }

    /// Check required fields and numeric ranges.
    fn validate(&self, body: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in self.fields() {
            let value = body::get_path(body, &field.path);
            match field.kind {
                FieldKind::Text | FieldKind::LongText | FieldKind::Choice => {
                    let text = value.and_then(Value::as_str).unwrap_or_default();
                    if field.required && text.trim().is_empty() {
                        errors.push(FieldError {
                            path: field.path.clone(),
                            label: field.label.clone(),
                            message: format!("{} is required", field.label),
                        });
                    }
                }
                FieldKind::Number => {
                    let number = value.and_then(Value::as_f64).unwrap_or(0.0);
                    if let Some(range) = field.range
                        && !range.contains(number)
                    {
                        errors.push(FieldError {
                            path: field.path.clone(),
                            label: field.label.clone(),
                            message: format!(
                                "{}: {} is outside range [{}, {}]",
                                field.label, number, range.min, range.max,
                            ),
                        });
                    }
                }
                FieldKind::Boolean => {}
            }
        }
        errors
    }

    /// Format a body as read-only text, section by section.
    fn render(&self, body: &Value) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for section in self.sections() {
            output.push_str(&format!("### {}\n", section.name));
            for field in &section.fields {
                let value = body::get_path(body, &field.path)
                    .map(|v| display_value(field, v))
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!("- {}: {}\n", field.label, value));
            }
            output.push('\n');
        }
        output
    }
}

fn parse_input(field: &Field, raw: &str) -> Result<Value, FormError> {
    let trimmed = raw.trim();
    let invalid = |expected: &str| FormError::InvalidValue {
        path: field.path.clone(),
        value: raw.to_string(),
        expected: expected.to_string(),
    };

    match field.kind {
        FieldKind::Text | FieldKind::LongText => Ok(Value::String(raw.to_string())),
        FieldKind::Number => {
            if trimmed.is_empty() {
                return Ok(FieldKind::Number.default_value());
            }
            // Decimal commas are common in pt-BR input.
            let number: f64 = trimmed
                .replace(',', ".")
                .parse()
                .map_err(|_| invalid("a number"))?;
            if !number.is_finite() {
                return Err(invalid("a finite number"));
            }
            Ok(Value::from(number))
        }
        FieldKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "sim" | "s" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "n" | "nao" | "não" | "0" | "" => Ok(Value::Bool(false)),
            _ => Err(invalid("yes or no")),
        },
        FieldKind::Choice => {
            if trimmed.is_empty() {
                return Ok(Value::String(String::new()));
            }
            field
                .choices
                .iter()
                .find(|c| c.eq_ignore_ascii_case(trimmed))
                .map(|c| Value::String(c.clone()))
                .ok_or_else(|| invalid(&format!("one of: {}", field.choices.join(", "))))
        }
    }
}

fn display_value(field: &Field, value: &Value) -> String {
    match (field.kind, value) {
        (FieldKind::Boolean, Value::Bool(b)) => (if *b { "yes" } else { "no" }).to_string(),
        (FieldKind::Number, Value::Number(n)) => {
            let n = n.as_f64().unwrap_or_default();
            if n == 0.0 {
                return "-".to_string();
            }
            match &field.unit {
                Some(unit) => format!("{n} {unit}"),
                None => n.to_string(),
            }
        }
        (_, Value::String(s)) if s.is_empty() => "-".to_string(),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    }
}

/// Return all registered record forms, in resolver precedence order.
pub fn all_forms() -> Vec<Box<dyn RecordForm>> {
    vec![
        Box::new(forms::neuro::NeurofunctionalForm),
        Box::new(forms::cardio::CardiorespiratoryForm),
        Box::new(forms::trauma::TraumaOrthopedicForm),
    ]
}

pub fn form_for(record_type: RecordType) -> Box<dyn RecordForm> {
    match record_type {
        RecordType::Neurofunctional => Box::new(forms::neuro::NeurofunctionalForm),
        RecordType::Cardiorespiratory => Box::new(forms::cardio::CardiorespiratoryForm),
        RecordType::TraumaOrthopedic => Box::new(forms::trauma::TraumaOrthopedicForm),
    }
}
