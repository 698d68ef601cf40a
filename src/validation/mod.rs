pub mod registration;

use accord::{Invalid, MultipleError, ValidatorResult};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

type FV = Box<dyn Fn(&Option<Value>) -> ValidatorResult>;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref DATE_FORMAT: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

const DATE_PATTERN: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub messages: Vec<String>,
}

impl ValidationError {
    // MultipleError to Vec<ValidationError>
    pub fn from_multiple(v: &MultipleError) -> Vec<ValidationError> {
        v.0.iter()
            .map(|e| {
                ValidationError {
                    field: e.tag.to_string(),
                    messages: e
                        .invalids
                        .iter()
                        .map(|i| i.human_readable.to_string())
                        .collect(),
                }
            })
            .collect()
    }
}

/// Returns true for an absent field or a falsy value (`null`, `false`, `0`
/// and `""`).
pub fn is_blank(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Returns the value only if it is a JSON string.
pub fn text(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().chain(c).collect(),
        None => String::new(),
    }
}

pub fn required() -> FV {
    Box::new(move |v: &Option<Value>| {
        if !is_blank(v) {
            return Ok(());
        }
        Err(Invalid {
            msg: "Must exist".to_string(),
            args: vec![],
            human_readable: "Must exist".to_string(),
        })
    })
}

/// Text having at least `min` characters, counted in UTF-16 code units.
pub fn min_length(label: &'static str, min: usize) -> FV {
    Box::new(move |v: &Option<Value>| {
        match text(v) {
            Some(s) if s.encode_utf16().count() >= min => Ok(()),
            _ => {
                Err(Invalid {
                    msg: "%1 must be at least %2 characters long".to_string(),
                    args: vec![label.to_string(), min.to_string()],
                    human_readable: format!(
                        "{} must be at least {} characters long",
                        capitalize(label),
                        min
                    ),
                })
            },
        }
    })
}

/// Text consisting only of ASCII digits, `min` to `max` of them.
pub fn digits(label: &'static str, min: usize, max: usize) -> FV {
    Box::new(move |v: &Option<Value>| {
        match text(v) {
            Some(s)
                if s.len() >= min && s.len() <= max && DIGITS.is_match(s) =>
            {
                Ok(())
            },
            _ => {
                Err(Invalid {
                    msg: "%1 must be %2-%3 digits".to_string(),
                    args: vec![
                        label.to_string(),
                        min.to_string(),
                        max.to_string(),
                    ],
                    human_readable: format!(
                        "{} must be {}-{} digits",
                        capitalize(label),
                        min,
                        max
                    ),
                })
            },
        }
    })
}

/// Text shaped like `YYYY-MM-DD`.
///
/// Only the shape is checked, `2025-13-01` passes.
pub fn date_format(label: &'static str) -> FV {
    Box::new(move |v: &Option<Value>| {
        match text(v) {
            Some(s) if DATE_FORMAT.is_match(s) => Ok(()),
            _ => {
                Err(Invalid {
                    msg: "Invalid %1 format".to_string(),
                    args: vec![label.to_string()],
                    human_readable: format!("Invalid {} format", label),
                })
            },
        }
    })
}

/// A real calendar date on or after `today`, if `today` is given.
///
/// Values which don't have the `YYYY-MM-DD` shape are left to
/// `date_format`.
pub fn not_past_if_given(label: &'static str, today: Option<NaiveDate>) -> FV {
    Box::new(move |v: &Option<Value>| {
        let today = match today {
            Some(d) => d,
            None => return Ok(()),
        };
        let s = match text(v) {
            Some(s) if DATE_FORMAT.is_match(s) => s,
            _ => return Ok(()),
        };
        match NaiveDate::parse_from_str(s, DATE_PATTERN) {
            Err(_) => {
                Err(Invalid {
                    msg: "Invalid %1".to_string(),
                    args: vec![label.to_string()],
                    human_readable: format!("Invalid {}", label),
                })
            },
            Ok(date) if date < today => {
                Err(Invalid {
                    msg: "%1 must not be in the past".to_string(),
                    args: vec![label.to_string()],
                    human_readable: format!(
                        "{} must not be in the past",
                        capitalize(label)
                    ),
                })
            },
            Ok(_) => Ok(()),
        }
    })
}
