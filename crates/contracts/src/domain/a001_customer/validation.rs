//! Client-side validation rules for a customer draft.
//!
//! Rules per field, first failing rule wins:
//! - `username`: required, then 3..=20 characters after trimming
//! - `password`: required only when creating; when present, at least 6 characters
//! - `email`: required, then `\S+@\S+\.\S+`
//! - `phone`, `address`, `companyName`: free text

use super::aggregate::{CustomerDto, CustomerField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Категория нарушенного правила
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Length,
    Format,
}

impl RuleKind {
    pub fn code(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Length => "length",
            RuleKind::Format => "format",
        }
    }
}

/// Ошибка валидации одного поля. `Display` даёт текст для пользователя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FieldError {
    #[error("Имя пользователя обязательно")]
    UsernameRequired,
    #[error("Имя пользователя должно быть от 3 до 20 символов")]
    UsernameLength,
    #[error("Пароль обязателен")]
    PasswordRequired,
    #[error("Пароль должен содержать не менее 6 символов")]
    PasswordLength,
    #[error("Email обязателен")]
    EmailRequired,
    #[error("Неверный формат email")]
    EmailFormat,
}

impl FieldError {
    pub fn kind(&self) -> RuleKind {
        match self {
            FieldError::UsernameRequired
            | FieldError::PasswordRequired
            | FieldError::EmailRequired => RuleKind::Required,
            FieldError::UsernameLength | FieldError::PasswordLength => RuleKind::Length,
            FieldError::EmailFormat => RuleKind::Format,
        }
    }
}

/// Ошибки одного черновика, по полю
pub type FieldErrors = BTreeMap<CustomerField, FieldError>;

/// Validates one draft. `password_required` is false when editing an
/// existing customer, where an empty password means "keep the current one".
pub fn validate_draft(dto: &CustomerDto, password_required: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(e) = check_username(&dto.username) {
        errors.insert(CustomerField::Username, e);
    }
    if let Err(e) = check_password(&dto.password, password_required) {
        errors.insert(CustomerField::Password, e);
    }
    if let Err(e) = check_email(&dto.email) {
        errors.insert(CustomerField::Email, e);
    }

    errors
}

pub fn check_username(username: &str) -> Result<(), FieldError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    let len = trimmed.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(FieldError::UsernameLength);
    }
    Ok(())
}

pub fn check_password(password: &str, required: bool) -> Result<(), FieldError> {
    if required && password.trim().is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    // an untouched password field on edit is fine; anything typed is checked as is,
    // so a whitespace-only password on edit is a length error, not "blank"
    if password.is_empty() {
        return Ok(());
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(FieldError::PasswordLength);
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::EmailFormat);
    }
    Ok(())
}
