//! # Registration form
use chrono::NaiveDate;
use serde_json::Value;

const DATE_PATTERN: &str = "%Y-%m-%d";

pub const PAST_DATE: &str = "Please select a future date";
pub const SUCCEEDED: &str = "Registration successful!";
pub const FAILED: &str = "Registration failed";

/// Values entered in the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Form {
    pub full_name: String,
    pub phone_number: String,
    pub attendance_date: String,
}

impl Form {
    /// Blocks a submission whose attendance date is earlier than `today`.
    ///
    /// A date which can't be read is let through, the server rejects it.
    pub fn check(&self, today: NaiveDate) -> Result<(), &'static str> {
        if is_past(&self.attendance_date, today) {
            return Err(PAST_DATE);
        }
        Ok(())
    }

    /// The body for `POST /register`.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "full_name": self.full_name,
            "phone_number": self.phone_number,
            "attendance_date": self.attendance_date,
        })
    }
}

pub fn is_past(date: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(date, DATE_PATTERN)
        .map(|d| d < today)
        .unwrap_or(false)
}

/// The earliest date the form accepts.
pub fn min_date(today: NaiveDate) -> String {
    today.format(DATE_PATTERN).to_string()
}

/// Reads the body of a `POST /register` response.
///
/// Returns the notice to show on success, otherwise the server message.
pub fn outcome(body: &Value) -> Result<&'static str, String> {
    if body["success"].as_bool().unwrap_or(false) {
        return Ok(SUCCEEDED);
    }
    Err(body["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .unwrap_or(FAILED)
        .to_string())
}
