//! Sign-up form validation.
//!
//! Rules run in a fixed order and stop at the first failure, so the form only
//! ever shows one message at a time.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length, counted in characters rather than bytes.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Credentials as typed into the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// First rule a set of credentials failed. `Display` is the inline form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("メールアドレスを入力してください")]
    EmptyEmail,
    #[error("有効なメールアドレスを入力してください")]
    InvalidEmail,
    #[error("パスワードを入力してください")]
    EmptyPassword,
    #[error("パスワードは6文字以上で入力してください")]
    ShortPassword,
    #[error("パスワードが一致しません")]
    PasswordMismatch,
}

/// Check credentials before they are sent to the auth provider.
///
/// # Errors
///
/// Returns the first failing rule: empty email, email without `@`, empty
/// password, password shorter than [`MIN_PASSWORD_CHARS`], or a confirmation
/// that does not match.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    let Credentials { email, password, confirm_password } = credentials;
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::ShortPassword);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
