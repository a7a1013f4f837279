use crate::domain::entities::content_type::EntityKind;
use crate::domain::entities::tag::Taggable;
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};

use super::validate_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub zip_code: Option<String>,
    pub customer_id: i64,
}

impl Taggable for Address {
    const KIND: EntityKind = EntityKind::Address;

    fn object_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddressRequest {
    pub street: String,
    pub city: String,
    pub zip_code: Option<String>,
}

impl CreateAddressRequest {
    pub fn validate(&self) -> DomainResult<()> {
        validate_text("street", &self.street, 255)?;
        validate_text("city", &self.city, 255)?;
        if let Some(ref zip) = self.zip_code {
            validate_text("zip_code", zip, 12)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_code_length_is_bounded() {
        let mut request = CreateAddressRequest {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            zip_code: Some("12345".to_string()),
        };
        assert!(request.validate().is_ok());

        request.zip_code = Some("1234567890123".to_string());
        assert!(request.validate().is_err());
    }
}
