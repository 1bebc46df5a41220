//! Validation that runs before any store call.

mod validation;
pub use validation::{coerce_id, is_falsy, RequestValidator, MISSING_DATA, MISSING_FIELDS, WRONG_TYPES};
