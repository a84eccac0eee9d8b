//! Field validation for the sign-in and sign-up forms.
//!
//! Errors are collected per field so each input can show its own message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 8;

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn email_error(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required.".to_owned())
    } else if !is_valid_email(email) {
        Some("Invalid email format.".to_owned())
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required.".to_owned())
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters.".to_owned())
    } else {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignInErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[must_use]
pub fn validate_sign_in(email: &str, password: &str) -> SignInErrors {
    SignInErrors { email: email_error(email), password: password_error(password) }
}

/// Raw sign-up input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub terms: Option<String>,
}

impl SignUpErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.terms.is_none()
    }
}

#[must_use]
pub fn validate_sign_up(form: &SignUpForm) -> SignUpErrors {
    let required = |value: &str, message: &str| value.trim().is_empty().then(|| message.to_owned());
    let confirm_password = if form.confirm_password.is_empty() {
        Some("Please confirm your password.".to_owned())
    } else if form.password != form.confirm_password {
        Some("Passwords do not match.".to_owned())
    } else {
        None
    };
    SignUpErrors {
        first_name: required(&form.first_name, "First name is required."),
        last_name: required(&form.last_name, "Last name is required."),
        email: email_error(&form.email),
        password: password_error(&form.password),
        confirm_password,
        terms: (!form.agreed_to_terms).then(|| "You must agree to the terms.".to_owned()),
    }
}
