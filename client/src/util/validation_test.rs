use super::*;

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        first_name: "Sara".to_owned(),
        last_name: "Ahmadi".to_owned(),
        email: "sara@example.com".to_owned(),
        password: "password1".to_owned(),
        confirm_password: "password1".to_owned(),
        agreed_to_terms: true,
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_shape_checks() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.ir"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a b@c.de"));
}

// =============================================================
// Sign in
// =============================================================

#[test]
fn sign_in_requires_both_fields() {
    let errors = validate_sign_in("", "");
    assert_eq!(errors.email.as_deref(), Some("Email is required."));
    assert_eq!(errors.password.as_deref(), Some("Password is required."));
    assert!(!errors.is_empty());
}

#[test]
fn sign_in_rejects_bad_email_and_short_password() {
    let errors = validate_sign_in("nope", "short");
    assert_eq!(errors.email.as_deref(), Some("Invalid email format."));
    assert_eq!(errors.password.as_deref(), Some("Password must be at least 8 characters."));
}

#[test]
fn sign_in_accepts_valid_input() {
    assert!(validate_sign_in("a@b.co", "12345678").is_empty());
}

// =============================================================
// Sign up
// =============================================================

#[test]
fn sign_up_accepts_valid_form() {
    assert!(validate_sign_up(&valid_sign_up()).is_empty());
}

#[test]
fn sign_up_reports_each_missing_field() {
    let errors = validate_sign_up(&SignUpForm::default());
    assert_eq!(errors.first_name.as_deref(), Some("First name is required."));
    assert_eq!(errors.last_name.as_deref(), Some("Last name is required."));
    assert_eq!(errors.email.as_deref(), Some("Email is required."));
    assert_eq!(errors.password.as_deref(), Some("Password is required."));
    assert_eq!(errors.confirm_password.as_deref(), Some("Please confirm your password."));
    assert_eq!(errors.terms.as_deref(), Some("You must agree to the terms."));
}

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    let form = SignUpForm { confirm_password: "password2".to_owned(), ..valid_sign_up() };
    let errors = validate_sign_up(&form);
    assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match."));
    assert!(errors.email.is_none());
}
