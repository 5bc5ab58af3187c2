/// Validation utilities for user input

/// DUNAB transactions must stay within this inclusive range.
pub const MIN_TRANSACTION_AMOUNT: f64 = 1.0;
pub const MAX_TRANSACTION_AMOUNT: f64 = 10_000.0;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate password strength
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    if !password.chars().any(|c| c.is_alphabetic()) {
        return ValidationResult::err("Password must contain a letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Password must contain a digit");
    }

    ValidationResult::ok()
}

/// Validate a transaction amount
pub fn validate_amount(amount: f64) -> ValidationResult {
    if !amount.is_finite() {
        return ValidationResult::err("Amount must be a number");
    }

    if amount < MIN_TRANSACTION_AMOUNT {
        return ValidationResult::err(format!(
            "Amount must be at least {} DUNAB",
            MIN_TRANSACTION_AMOUNT
        ));
    }

    if amount > MAX_TRANSACTION_AMOUNT {
        return ValidationResult::err(format!(
            "Amount cannot exceed {} DUNAB",
            MAX_TRANSACTION_AMOUNT
        ));
    }

    ValidationResult::ok()
}

/// Validate that a required text field is non-blank
pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(validate_email("ana@unab.edu.co").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("no-at-sign").is_valid);
        assert!(!validate_email("@unab.edu.co").is_valid);
        assert!(!validate_email("ana@nodot").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
    }

    #[test]
    fn password_validation() {
        assert!(validate_password("abc123").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(!validate_password("ab1").is_valid);
        assert!(!validate_password("abcdef").is_valid);
        assert!(!validate_password("123456").is_valid);
    }

    #[test]
    fn amount_validation() {
        assert!(validate_amount(1.0).is_valid);
        assert!(validate_amount(10_000.0).is_valid);
        assert!(!validate_amount(0.99).is_valid);
        assert!(!validate_amount(10_000.01).is_valid);
        assert!(!validate_amount(f64::NAN).is_valid);
        assert!(!validate_amount(f64::INFINITY).is_valid);
    }

    #[test]
    fn required_validation() {
        assert!(validate_required("something", "Description").is_valid);
        let result = validate_required("   ", "Description");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Description is required"));
    }
}
