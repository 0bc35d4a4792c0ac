use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// Wire representation of a user with the address embedded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(default)]
    pub address_id: String,
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zip_code: String,
}

/// Persisted user; the address lives in its own table.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address_id: String,
    pub role: String,
}

impl UserRecord {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub address_id: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl AddressRecord {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.country.trim().is_empty() {
            return Err(DomainError::InvalidInput("country is required".to_string()));
        }
        Ok(())
    }
}
