//! Request Models
//!
//! Typed API request payloads with validation. Request bodies are explicit
//! structs per operation; presence and shape checks happen here rather than
//! being deferred to storage.

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::email_validator;

/// Request payload for creating a new user record
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Unique login name
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    /// Self-reported gender
    #[validate(length(min = 1, max = 32, message = "Gender must be 1-32 characters"))]
    pub gender: String,

    /// Postal address
    #[validate(length(min = 1, max = 512, message = "Address must be 1-512 characters"))]
    pub address: String,

    /// Postal code
    #[validate(length(min = 1, max = 32, message = "Pincode must be 1-32 characters"))]
    pub pincode: String,

    /// Email address (must be unique and well-formed)
    #[validate(custom(function = "email_validator"))]
    pub email: String,

    /// Contact phone number
    #[validate(length(min = 1, max = 32, message = "Phone number must be 1-32 characters"))]
    pub phone_number: String,
}

/// Request payload for updating a user record
///
/// Every field is optional; absent fields are left untouched. Present fields
/// run the same validators as creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Gender must be 1-32 characters"))]
    pub gender: Option<String>,

    #[validate(length(min = 1, max = 512, message = "Address must be 1-512 characters"))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Pincode must be 1-32 characters"))]
    pub pincode: Option<String>,

    #[validate(custom(function = "email_validator"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Phone number must be 1-32 characters"))]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            username: "ann".to_string(),
            name: "Ann".to_string(),
            password: "x".to_string(),
            gender: "f".to_string(),
            address: "1 Rd".to_string(),
            pincode: "00000".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "555".to_string(),
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_username() {
        let mut request = create_request();
        request.username = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let mut request = create_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "ann",
            "name": "Ann",
            "password": "x",
            "gender": "f",
            "address": "1 Rd",
            "pincode": "00000",
            "email": "a@b.com",
            "phoneNumber": "555"
        }))
        .unwrap();
        assert_eq!(request.phone_number, "555");
    }

    #[test]
    fn test_update_request_empty_is_valid() {
        let request = UpdateUserRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_validates_present_fields() {
        let request = UpdateUserRequest {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
