use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::tag::Taggable;
use crate::domain::errors::{DomainError, DomainResult};
use crate::shared::utils::email_validator::validate_and_normalize_email;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validate_text;

/// Loyalty tier, persisted as a single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Membership {
    #[default]
    #[serde(rename = "B")]
    Bronze,
    #[serde(rename = "S")]
    Silver,
    #[serde(rename = "G")]
    Gold,
}

impl Membership {
    pub fn code(&self) -> &'static str {
        match self {
            Membership::Bronze => "B",
            Membership::Silver => "S",
            Membership::Gold => "G",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Membership::Bronze => "Bronze",
            Membership::Silver => "Silver",
            Membership::Gold => "Gold",
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Membership {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "bronze" => Ok(Membership::Bronze),
            "s" | "silver" => Ok(Membership::Silver),
            "g" | "gold" => Ok(Membership::Gold),
            other => Err(DomainError::ValidationError(format!(
                "Invalid membership: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<String>,
    pub membership: Membership,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Taggable for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<String>,
    pub membership: Membership,
}

// ========== DTOs (Data Transfer Objects) ==========

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<String>,
    #[serde(default)]
    pub membership: Membership,
}

impl CreateCustomerRequest {
    pub fn into_draft(self) -> DomainResult<CustomerDraft> {
        validate_text("first_name", &self.first_name, 255)?;
        validate_text("last_name", &self.last_name, 255)?;
        validate_text("phone", &self.phone, 255)?;

        Ok(CustomerDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: validate_and_normalize_email(&self.email)?,
            phone: self.phone.trim().to_string(),
            birth_date: self.birth_date.map(|d| validate_birth_date(&d)).transpose()?,
            membership: self.membership,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub birth_date: Option<Option<String>>,
    pub membership: Option<Membership>,
}

impl UpdateCustomerRequest {
    pub fn apply_to(self, current: &Customer) -> DomainResult<CustomerDraft> {
        let text = |field: &str, value: Option<String>, fallback: &str| -> DomainResult<String> {
            match value {
                Some(v) => {
                    validate_text(field, &v, 255)?;
                    Ok(v.trim().to_string())
                }
                None => Ok(fallback.to_string()),
            }
        };

        Ok(CustomerDraft {
            first_name: text("first_name", self.first_name, &current.first_name)?,
            last_name: text("last_name", self.last_name, &current.last_name)?,
            email: match self.email {
                Some(email) => validate_and_normalize_email(&email)?,
                None => current.email.clone(),
            },
            phone: text("phone", self.phone, &current.phone)?,
            birth_date: match self.birth_date {
                Some(value) => value.map(|d| validate_birth_date(&d)).transpose()?,
                None => current.birth_date.clone(),
            },
            membership: self.membership.unwrap_or(current.membership),
        })
    }
}

fn validate_birth_date(value: &str) -> DomainResult<String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| {
            DomainError::ValidationError(format!(
                "birth_date '{}' must be a date in YYYY-MM-DD format",
                value
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_codes_round_trip_through_json() {
        assert_eq!(serde_json::to_string(&Membership::Gold).unwrap(), "\"G\"");
        let parsed: Membership = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(parsed, Membership::Silver);
        assert_eq!("bronze".parse::<Membership>().unwrap(), Membership::Bronze);
        assert!("platinum".parse::<Membership>().is_err());
    }

    #[test]
    fn test_create_request_normalizes_fields() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{"first_name": " Ada ", "last_name": "Lovelace", "email": "Ada@Example.com",
                "phone": "555-0100", "birth_date": "1815-12-10"}"#,
        )
        .unwrap();
        let draft = request.into_draft().unwrap();
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.membership, Membership::Bronze);
        assert_eq!(draft.birth_date.as_deref(), Some("1815-12-10"));
    }

    #[test]
    fn test_invalid_birth_date_is_rejected() {
        let request = CreateCustomerRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            birth_date: Some("10/12/1815".to_string()),
            membership: Membership::Gold,
        };
        assert!(request.into_draft().is_err());
    }
}
