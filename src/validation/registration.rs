use std::result::Result;

use chrono::NaiveDate;
use rocket_contrib::json::Json;

use crate::model::registration::NewRegistration;
use crate::request::registration::Registration as RequestData;
use crate::validation::{
    ValidationError, date_format, digits, min_length, not_past_if_given,
    required, text,
};

/// Why a submission was refused.
///
/// `message` is the first failure found, `errors` holds every failing field
/// of the same check.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub message: String,
    pub errors: Vec<ValidationError>,
}

impl Rejection {
    fn missing(errors: Vec<ValidationError>) -> Self {
        let fields: Vec<&str> =
            errors.iter().map(|e| e.field.as_str()).collect();
        Self {
            message: format!("Missing required fields: {}", fields.join(", ")),
            errors,
        }
    }

    fn invalid(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .first()
            .and_then(|e| e.messages.first())
            .map(|m| m.to_string())
            .unwrap_or_else(|| "The input is invalid".to_string());
        Self { message, errors }
    }
}

pub struct Validator<'a> {
    data: &'a Json<RequestData>,
    today: Option<NaiveDate>,
}

impl<'a> Validator<'a> {
    pub fn new(data: &'a Json<RequestData>) -> Self {
        Self { data, today: None }
    }

    /// Additionally requires the attendance date to be a real date which is
    /// not earlier than `today`.
    pub fn not_before(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Checks presence first, then the format of each field in order.
    #[allow(clippy::redundant_closure)]
    pub fn validate(&self) -> Result<NewRegistration, Rejection> {
        let r = &self.data.0;

        let result = rules! {
            "full_name" => r.full_name => [required()],
            "phone_number" => r.phone_number => [required()],
            "attendance_date" => r.attendance_date => [required()]
        };
        if let Err(v) = result {
            return Err(Rejection::missing(ValidationError::from_multiple(&v)));
        }

        let result = rules! {
            "full_name" => r.full_name => [min_length("full name", 2)],
            "phone_number" => r.phone_number => [
                digits("phone number", 10, 13)
            ],
            "attendance_date" => r.attendance_date => [
                date_format("attendance date"),
                not_past_if_given("attendance date", self.today)
            ]
        };
        if let Err(v) = result {
            return Err(Rejection::invalid(ValidationError::from_multiple(&v)));
        }

        match (
            text(&r.full_name),
            text(&r.phone_number),
            text(&r.attendance_date),
        ) {
            (Some(full_name), Some(phone_number), Some(attendance_date)) => {
                Ok(NewRegistration {
                    full_name: full_name.to_string(),
                    phone_number: phone_number.to_string(),
                    attendance_date: attendance_date.to_string(),
                })
            },
            _ => Err(Rejection::invalid(vec![])),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rocket_contrib::json::Json;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn data(body: Value) -> Json<RequestData> {
        Json(serde_json::from_value(body).unwrap())
    }

    fn valid() -> Value {
        json!({
            "full_name": "Oswald",
            "phone_number": "081234567890",
            "attendance_date": "2026-10-19",
        })
    }

    fn with(key: &str, value: Value) -> Json<RequestData> {
        let mut body = valid();
        body[key] = value;
        data(body)
    }

    #[test]
    fn test_validate() {
        let d = data(valid());
        let v = Validator::new(&d);

        let result = v.validate();
        assert_eq!(
            result,
            Ok(NewRegistration {
                full_name: "Oswald".to_string(),
                phone_number: "081234567890".to_string(),
                attendance_date: "2026-10-19".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_fields_are_default() {
        let d = Json(RequestData {
            ..Default::default()
        });
        let v = Validator::new(&d);

        let result = v.validate();
        if let Err(rejection) = &result {
            assert_eq!(
                rejection.message,
                "Missing required fields: full_name, phone_number, \
                 attendance_date"
            );
            assert_eq!(3, rejection.errors.len());
            assert_eq!("full_name", rejection.errors[0].field);
            assert_eq!(vec!["Must exist"], rejection.errors[0].messages);
        } else {
            panic!("must fail");
        }
    }

    #[rstest]
    #[case("full_name", Value::Null)]
    #[case("phone_number", json!(""))]
    #[case("attendance_date", json!(false))]
    #[case("phone_number", json!(0))]
    fn test_validate_field_is_missing(#[case] key: &str, #[case] value: Value) {
        let d = with(key, value);
        let v = Validator::new(&d);

        let rejection = v.validate().unwrap_err();
        assert_eq!(
            rejection.message,
            format!("Missing required fields: {}", key)
        );
        assert_eq!(1, rejection.errors.len());
        assert_eq!(key, rejection.errors[0].field);
    }

    #[test]
    fn test_validate_missing_fields_are_reported_before_formats() {
        let d = data(json!({
            "full_name": "O",
            "attendance_date": "tomorrow",
        }));
        let v = Validator::new(&d);

        let rejection = v.validate().unwrap_err();
        assert_eq!(rejection.message, "Missing required fields: phone_number");
    }

    #[rstest]
    #[case(json!("O"))]
    #[case(json!(12))]
    #[case(json!(["Oswald"]))]
    fn test_validate_full_name_is_invalid(#[case] value: Value) {
        let d = with("full_name", value);
        let v = Validator::new(&d);

        let rejection = v.validate().unwrap_err();
        assert_eq!(
            rejection.message,
            "Full name must be at least 2 characters long"
        );
        assert_eq!(
            rejection.errors,
            vec![ValidationError {
                field: "full_name".to_string(),
                messages: vec![
                    "Full name must be at least 2 characters long".to_string()
                ],
            }]
        );
    }

    #[test]
    fn test_validate_full_name_has_two_characters() {
        let d = with("full_name", json!("Al"));
        let v = Validator::new(&d);

        assert!(v.validate().is_ok());
    }

    #[rstest]
    #[case("12345")]
    #[case("12345678901234")]
    #[case("+6281234567")]
    #[case("0812 3456 789")]
    fn test_validate_phone_number_is_invalid(#[case] value: &str) {
        let d = with("phone_number", json!(value));
        let v = Validator::new(&d);

        let rejection = v.validate().unwrap_err();
        assert_eq!(rejection.message, "Phone number must be 10-13 digits");
    }

    #[rstest]
    #[case("1234567890")]
    #[case("1234567890123")]
    fn test_validate_phone_number(#[case] value: &str) {
        let d = with("phone_number", json!(value));
        let v = Validator::new(&d);

        assert!(v.validate().is_ok());
    }

    #[rstest]
    #[case(json!("19-10-2026"))]
    #[case(json!("2026/10/19"))]
    #[case(json!(20261019))]
    fn test_validate_attendance_date_is_invalid(#[case] value: Value) {
        let d = with("attendance_date", value);
        let v = Validator::new(&d);

        let rejection = v.validate().unwrap_err();
        assert_eq!(rejection.message, "Invalid attendance date format");
    }

    #[rstest]
    #[case("2025-13-01")]
    #[case("2000-01-01")]
    fn test_validate_attendance_date_shape_only(#[case] value: &str) {
        let d = with("attendance_date", json!(value));
        let v = Validator::new(&d);

        let result = v.validate().unwrap();
        assert_eq!(result.attendance_date, value);
    }

    #[test]
    fn test_validate_first_failure_is_the_message() {
        let d = data(json!({
            "full_name": "Oswald",
            "phone_number": "12345",
            "attendance_date": "2026/10/19",
        }));
        let v = Validator::new(&d);

        let rejection = v.validate().unwrap_err();
        assert_eq!(rejection.message, "Phone number must be 10-13 digits");
        assert_eq!(2, rejection.errors.len());
        assert_eq!("phone_number", rejection.errors[0].field);
        assert_eq!("attendance_date", rejection.errors[1].field);
    }

    #[rstest]
    #[case("2025-13-01", "Invalid attendance date")]
    #[case("2026-10-18", "Attendance date must not be in the past")]
    #[case("2026/10/20", "Invalid attendance date format")]
    fn test_validate_not_before_is_invalid(
        #[case] value: &str,
        #[case] message: &str,
    ) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let d = with("attendance_date", json!(value));
        let v = Validator::new(&d).not_before(today);

        let rejection = v.validate().unwrap_err();
        assert_eq!(rejection.message, message);
    }

    #[rstest]
    #[case("2026-10-19")]
    #[case("2027-01-01")]
    fn test_validate_not_before(#[case] value: &str) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let d = with("attendance_date", json!(value));
        let v = Validator::new(&d).not_before(today);

        assert!(v.validate().is_ok());
    }
}
