use lazy_static::lazy_static;
use regex::Regex;

use crate::app::resource::UserRequest;
use crate::error::resource::{ValidationError, ValidationErrorKind, ValidationFieldError};

pub const NAME_MAX_LENGTH: usize = 50;
pub const PHONE_MIN_LENGTH: usize = 10;
pub const PHONE_MAX_LENGTH: usize = 20;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("Expect a valid email regex");
}

/// Checks every field constraint of an incoming request, collecting one
/// error per violated field. Runs before any repository access; no side
/// effects.
pub fn user_request(request: &UserRequest) -> Result<(), ValidationError> {
    let mut fields = Vec::new();

    if request.first_name.trim().is_empty() {
        fields.push(ValidationFieldError::new(
            "/firstName",
            "First name is required",
            ValidationErrorKind::Required,
        ));
    } else if request.first_name.chars().count() > NAME_MAX_LENGTH {
        fields.push(ValidationFieldError::new(
            "/firstName",
            "First name must not exceed 50 characters",
            ValidationErrorKind::MaxLength(NAME_MAX_LENGTH as u64),
        ));
    }

    if request.last_name.trim().is_empty() {
        fields.push(ValidationFieldError::new(
            "/lastName",
            "Last name is required",
            ValidationErrorKind::Required,
        ));
    } else if request.last_name.chars().count() > NAME_MAX_LENGTH {
        fields.push(ValidationFieldError::new(
            "/lastName",
            "Last name must not exceed 50 characters",
            ValidationErrorKind::MaxLength(NAME_MAX_LENGTH as u64),
        ));
    }

    if request.email.trim().is_empty() {
        fields.push(ValidationFieldError::new(
            "/email",
            "Email is required",
            ValidationErrorKind::Required,
        ));
    } else if !EMAIL_PATTERN.is_match(&request.email) {
        fields.push(ValidationFieldError::new(
            "/email",
            "Email should be valid",
            ValidationErrorKind::Pattern("email".into()),
        ));
    }

    // A blank phone number is treated as absent.
    if let Some(phone) = &request.phone_number {
        if !phone.trim().is_empty() {
            let length = phone.chars().count();
            if length < PHONE_MIN_LENGTH {
                fields.push(ValidationFieldError::new(
                    "/phoneNumber",
                    "Phone number must be between 10 and 20 characters",
                    ValidationErrorKind::MinLength(PHONE_MIN_LENGTH as u64),
                ));
            } else if length > PHONE_MAX_LENGTH {
                fields.push(ValidationFieldError::new(
                    "/phoneNumber",
                    "Phone number must be between 10 and 20 characters",
                    ValidationErrorKind::MaxLength(PHONE_MAX_LENGTH as u64),
                ));
            }
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new("user::UserRequest", fields))
    }
}
