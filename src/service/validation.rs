//! Request validation for user payloads and path ids.
//!
//! Every check returns a `Result` carrying the validated value, so a handler
//! cannot reach the store without first handling the rejection.

use crate::error::AppError;
use crate::model::{NewUser, UserChanges};
use axum::http::StatusCode;
use serde_json::Value;

pub const MISSING_FIELDS: &str = "name or email is missing in user data!";
pub const WRONG_TYPES: &str = "name or email have wrong data types!";
pub const MISSING_DATA: &str = "Missing user data to update";

/// Coerce a path segment to a user id. `None` never matches a stored record.
///
/// Accepts what numeric coercion of a string would yield as an integer:
/// decimal with optional fraction or exponent (`"1.0"`, `"1e0"`) and unsigned
/// `0x`/`0o`/`0b` literals.
pub fn coerce_id(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let prefixed = raw.get(..2).map(str::to_ascii_lowercase);
    let radix = match prefixed.as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = raw.get(2..)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return i64::from_str_radix(digits, radix)
            .ok()
            .and_then(|n| i32::try_from(n).ok());
    }
    let n: f64 = raw.parse().ok()?;
    if !n.is_finite() || n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return None;
    }
    Some(n as i32)
}

/// `null`, `false`, `0` and `""` count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Field value if present and truthy.
fn truthy<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !is_falsy(v))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Body of `POST /api/users`: both fields required, both strings.
    pub fn new_user(body: &Value) -> Result<NewUser, AppError> {
        let (Some(name), Some(email)) = (truthy(body, "name"), truthy(body, "email")) else {
            return Err(AppError::BadRequest(MISSING_FIELDS.into()));
        };
        match (name, email) {
            (Value::String(name), Value::String(email)) => Ok(NewUser {
                name: name.clone(),
                email: email.clone(),
            }),
            _ => Err(AppError::BadRequest(WRONG_TYPES.into())),
        }
    }

    /// Flat body of `PATCH /api/users/:id`. Falsy fields are dropped, so an empty
    /// string cannot clear a field.
    pub fn merge_changes(body: &Value) -> Result<UserChanges, AppError> {
        let field = |name: &str| match truthy(body, name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(AppError::BadRequest(WRONG_TYPES.into())),
        };
        Ok(UserChanges {
            name: field("name")?,
            email: field("email")?,
        })
    }

    /// Path id and `{"data": {...}}` body of `PUT /api/users/:id`. Rejections are
    /// plain-text. Every string field provided, empty included, replaces the stored value.
    pub fn replace_changes(raw_id: &str, body: &Value) -> Result<(i32, UserChanges), AppError> {
        let id = coerce_id(raw_id).ok_or_else(|| {
            AppError::Plain(StatusCode::BAD_REQUEST, format!("Invalid user id: {}", raw_id))
        })?;
        let data = body
            .get("data")
            .filter(|d| d.is_object())
            .ok_or_else(|| AppError::Plain(StatusCode::BAD_REQUEST, MISSING_DATA.into()))?;
        let field = |name: &str| match data.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(AppError::Plain(
                StatusCode::BAD_REQUEST,
                WRONG_TYPES.trim_end_matches('!').into(),
            )),
        };
        let changes = UserChanges {
            name: field("name")?,
            email: field("email")?,
        };
        Ok((id, changes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(m) => m,
            AppError::Plain(status, m) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                m
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case(" 12 ", Some(12))]
    #[case("-3", Some(-3))]
    #[case("1.0", Some(1))]
    #[case("1e0", Some(1))]
    #[case("2E1", Some(20))]
    #[case("0x1", Some(1))]
    #[case("0X1f", Some(31))]
    #[case("0b101", Some(5))]
    #[case("0o17", Some(15))]
    #[case("0x", None)]
    #[case("0x-1", None)]
    #[case("abc", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("1.5", None)]
    #[case("1e10", None)]
    #[case("99999999999", None)]
    #[case("", None)]
    fn coerces_ids(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(coerce_id(raw), expected);
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(false), true)]
    #[case(json!(0), true)]
    #[case(json!(0.0), true)]
    #[case(json!(""), true)]
    #[case(json!(true), false)]
    #[case(json!(1), false)]
    #[case(json!("x"), false)]
    #[case(json!([]), false)]
    #[case(json!({}), false)]
    fn falsy_values(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_falsy(&value), expected);
    }

    #[test]
    fn new_user_accepts_strings() {
        let user = RequestValidator::new_user(&json!({"name": "Ada", "email": "ada@example.com"})).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[rstest]
    #[case(json!({"email": "a@b.c"}))]
    #[case(json!({"name": "Ada"}))]
    #[case(json!({"name": "", "email": "a@b.c"}))]
    #[case(json!({"name": "Ada", "email": 0}))]
    #[case(json!({"name": null, "email": "a@b.c"}))]
    #[case(json!({}))]
    #[case(json!([1, 2]))]
    fn new_user_missing_fields(#[case] body: Value) {
        let err = RequestValidator::new_user(&body).unwrap_err();
        assert_eq!(message(err), MISSING_FIELDS);
    }

    #[rstest]
    #[case(json!({"name": 5, "email": "a@b.c"}))]
    #[case(json!({"name": "Ada", "email": true}))]
    #[case(json!({"name": ["Ada"], "email": "a@b.c"}))]
    fn new_user_wrong_types(#[case] body: Value) {
        let err = RequestValidator::new_user(&body).unwrap_err();
        assert_eq!(message(err), WRONG_TYPES);
    }

    #[test]
    fn merge_drops_falsy_fields() {
        let changes = RequestValidator::merge_changes(&json!({"name": "Bob", "email": ""})).unwrap();
        assert_eq!(
            changes,
            UserChanges {
                name: Some("Bob".into()),
                email: None
            }
        );
        assert_eq!(RequestValidator::merge_changes(&json!({})).unwrap(), UserChanges::default());
    }

    #[test]
    fn merge_rejects_truthy_non_strings() {
        let err = RequestValidator::merge_changes(&json!({"email": 42})).unwrap_err();
        assert_eq!(message(err), WRONG_TYPES);
    }

    #[test]
    fn replace_keeps_empty_strings() {
        let (id, changes) =
            RequestValidator::replace_changes("3", &json!({"data": {"name": "", "email": "x@y.z"}})).unwrap();
        assert_eq!(id, 3);
        assert_eq!(changes.name.as_deref(), Some(""));
        assert_eq!(changes.email.as_deref(), Some("x@y.z"));
    }

    #[rstest]
    #[case("abc", json!({"data": {"name": "A"}}), "Invalid user id: abc")]
    #[case("3", json!({"name": "A"}), MISSING_DATA)]
    #[case("3", json!({"data": "A"}), MISSING_DATA)]
    #[case("3", json!({"data": {"name": 1}}), "name or email have wrong data types")]
    fn replace_rejections_are_plain(#[case] id: &str, #[case] body: Value, #[case] expected: &str) {
        let err = RequestValidator::replace_changes(id, &body).unwrap_err();
        assert_eq!(message(err), expected);
    }
}
