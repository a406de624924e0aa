//! Validation helpers for form submission
//!
//! All checks happen at the screen boundary; nothing here is enforced inside
//! the data model itself. Failed checks surface as per-field messages and
//! block submission.

/// Minimum review comment length, in characters
pub const MIN_COMMENT_LEN: usize = 10;

/// Minimum business description length, in characters
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Minimum sign-up password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate email format (basic shape check: local@domain.tld, no spaces)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("Invalid email format"),
    };
    if local.is_empty() || email.contains(char::is_whitespace) {
        return Err("Invalid email format");
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err("Invalid email format"),
    }
}

/// Validate sign-up password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Validate a star rating is in [1, 5]
pub fn validate_rating(rating: u8) -> Result<(), &'static str> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err("Rating must be between 1 and 5")
    }
}

/// Validate a review comment: required and at least 10 characters
pub fn validate_comment(comment: &str) -> Result<(), &'static str> {
    if comment.trim().is_empty() {
        return Err("Review comment is required");
    }
    if comment.chars().count() < MIN_COMMENT_LEN {
        return Err("Review must be at least 10 characters");
    }
    Ok(())
}

/// Validate a business description: required and at least 20 characters
pub fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.trim().is_empty() {
        return Err("Description is required");
    }
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err("Description must be at least 20 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.th").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@missing.local").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("spa ce@example.com").is_err());
        assert!(validate_email("trailing@dot.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("hunter2!").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_rating_bounds() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment("Great spot, would visit again").is_ok());
        assert!(validate_comment("").is_err());
        assert!(validate_comment("Too short").is_err());
    }

    #[test]
    fn test_validate_comment_length_boundary() {
        assert!(validate_comment("123456789").is_err());
        assert!(validate_comment("1234567890").is_ok());
    }

    #[test]
    fn test_validate_description_length_boundary() {
        assert!(validate_description(&"x".repeat(19)).is_err());
        assert!(validate_description(&"x".repeat(20)).is_ok());
        assert!(validate_description("").is_err());
    }
}
