use serde_json::Value;

/// Registration (attendance form submission)
///
/// Fields are kept as raw JSON values so that a missing or mistyped field is
/// reported by validation instead of failing the body decoding.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Registration {
    pub full_name: Option<Value>,
    pub phone_number: Option<Value>,
    pub attendance_date: Option<Value>,
}
