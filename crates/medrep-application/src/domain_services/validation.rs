//! Form Validation
//!
//! Client-side checks for the login, registration and upload forms. A form
//! that fails here never reaches the network.

use medrep_domain::constants::{
    ACCEPTED_UPLOAD_TYPES, LOGIN_PASSWORD_MIN_LENGTH, MAX_UPLOAD_BYTES, NAME_MIN_LENGTH,
    REGISTER_PASSWORD_MIN_LENGTH,
};
use medrep_domain::value_objects::{Credentials, FieldErrors, Registration, ReportUpload, Role};
use regex::Regex;
use serde_json::json;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").ok());

/// Login form as typed by the user
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    #[validate(custom(function = "validate_login_password"))]
    pub password: String,
}

impl LoginForm {
    /// Create a login form
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Per-field problems, if any
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
            .map_err(|errors| field_errors(&errors))
    }

    /// Credentials to send, with the email trimmed
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trim(), self.password.clone())
    }
}

/// Registration form as typed by the user
#[derive(Debug, Clone, Validate)]
pub struct RegistrationForm {
    /// Display name
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    #[validate(custom(function = "validate_register_password"))]
    pub password: String,

    /// Password typed a second time
    pub confirm_password: String,

    /// Requested role
    pub role: Role,

    /// Clinic name (clinic accounts)
    pub clinic_name: String,
    /// Medical license number (clinic accounts)
    pub license_number: String,
    /// Street address (clinic accounts)
    pub address: String,

    /// Department (government accounts)
    pub department: String,
    /// Employee id (government accounts)
    pub employee_id: String,

    /// Terms and conditions accepted
    pub agree_to_terms: bool,
    /// Privacy policy accepted
    pub agree_to_privacy: bool,
}

impl RegistrationForm {
    /// Empty form for the given role
    pub fn new(role: Role) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role,
            clinic_name: String::new(),
            license_number: String::new(),
            address: String::new(),
            department: String::new(),
            employee_id: String::new(),
            agree_to_terms: false,
            agree_to_privacy: false,
        }
    }

    /// Per-field problems, if any
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_errors(&errors),
        };

        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.add("confirm_password", "Passwords do not match");
        }

        match self.role {
            Role::Clinic => {
                require(&mut errors, "clinic_name", &self.clinic_name, "Clinic name is required");
                require(
                    &mut errors,
                    "license_number",
                    &self.license_number,
                    "License number is required",
                );
                require(&mut errors, "address", &self.address, "Address is required");
            }
            Role::Government => {
                require(&mut errors, "department", &self.department, "Department is required");
                require(&mut errors, "employee_id", &self.employee_id, "Employee ID is required");
            }
            Role::Patient => {}
        }

        if !self.agree_to_terms {
            errors.add("agree_to_terms", "You must agree to the terms and conditions");
        }
        if !self.agree_to_privacy {
            errors.add("agree_to_privacy", "You must agree to the privacy policy");
        }

        errors.into_result()
    }

    /// Request body for the backend
    pub fn registration(&self) -> Registration {
        let profile = match self.role {
            Role::Patient => None,
            Role::Clinic => Some(json!({
                "clinic_name": self.clinic_name.trim(),
                "license_number": self.license_number.trim(),
                "address": self.address.trim(),
            })),
            Role::Government => Some(json!({
                "department": self.department.trim(),
                "employee_id": self.employee_id.trim(),
            })),
        };

        Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            user_type: self.role,
            profile,
        }
    }
}

/// Check a file before upload
pub fn validate_upload(upload: &ReportUpload) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if upload.bytes.is_empty() {
        errors.add("file", "Please select a file to upload");
    } else if upload.size() > MAX_UPLOAD_BYTES {
        errors.add("file", format!("{} is too large (max 10MB)", upload.file_name));
    } else if !is_accepted_type(&upload.content_type) {
        errors.add(
            "file",
            format!("{} is not a supported file type", upload.file_name),
        );
    }

    errors.into_result()
}

/// True if `content_type` is one of the accepted upload types
pub fn is_accepted_type(content_type: &str) -> bool {
    let content_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    ACCEPTED_UPLOAD_TYPES.iter().any(|accepted| {
        accepted.strip_suffix('*').map_or_else(
            || content_type == *accepted,
            |family| content_type.starts_with(family),
        )
    })
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, failures) in errors.field_errors() {
        if let Some(first) = failures.first() {
            let message = first
                .message
                .as_ref()
                .map_or_else(|| first.code.to_string(), ToString::to_string);
            out.add(field.to_string(), message);
        }
    }
    out
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

// Custom validation functions

fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Ok(());
    }
    let shaped = EMAIL_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(email.trim()));
    if shaped {
        Ok(())
    } else {
        Err(failure("email", "Email is invalid"))
    }
}

fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.chars().count() >= LOGIN_PASSWORD_MIN_LENGTH {
        Ok(())
    } else {
        Err(failure(
            "password_length",
            "Password must be at least 6 characters",
        ))
    }
}

fn validate_register_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.chars().count() < REGISTER_PASSWORD_MIN_LENGTH {
        return Err(failure(
            "password_length",
            "Password must be at least 8 characters",
        ));
    }
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err(failure(
            "password_strength",
            "Password must contain uppercase, lowercase and number",
        ))
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        Err(failure("name_required", "Name is required"))
    } else if name.chars().count() < NAME_MIN_LENGTH {
        Err(failure("name_length", "Name must be at least 2 characters"))
    } else {
        Ok(())
    }
}
