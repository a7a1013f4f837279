use crate::domain::errors::{DomainError, DomainResult};

pub fn validate_and_normalize_email(email: &str) -> DomainResult<String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(DomainError::ValidationError(
            "Invalid email format. Must be in format user@domain.tld".to_string(),
        ));
    }

    // Require a TLD (dot after @)
    if let Some(at_pos) = trimmed.find('@') {
        let domain_part = &trimmed[at_pos + 1..];
        if !domain_part.contains('.') {
            return Err(DomainError::ValidationError(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            ));
        }
    }

    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let result = validate_and_normalize_email("shopper@example.com");
        assert_eq!(result.unwrap(), "shopper@example.com");
    }

    #[test]
    fn test_email_normalization() {
        let result = validate_and_normalize_email("  Shopper@Example.COM ");
        assert_eq!(result.unwrap(), "shopper@example.com");
    }

    #[test]
    fn test_invalid_email_no_at() {
        assert!(validate_and_normalize_email("shopperexample.com").is_err());
    }

    #[test]
    fn test_invalid_email_no_tld() {
        assert!(validate_and_normalize_email("shopper@example").is_err());
    }
}
