//! Request DTOs
//!
//! Data structures for API request bodies and query parameters.

use serde::Deserialize;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Partial customer update request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150, message = "Age must be 0-150"))]
    pub age: Option<i32>,

    #[validate(length(max = 20, message = "Eye color must be at most 20 characters"))]
    pub eye_color: Option<String>,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,

    pub about: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be -90 to 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be -180 to 180"))]
    pub longitude: Option<f64>,

    pub tags: Option<Vec<String>>,
}

/// Query parameters for the distance endpoint
#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "searchText")]
    pub search_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_rejects_short_password() {
        let request = LoginRequest {
            username: "admin".into(),
            password: "short".into(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_rejects_bad_email() {
        let request = UpdateCustomerRequest {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_rejects_out_of_range_latitude() {
        let request = UpdateCustomerRequest {
            latitude: Some(120.0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_empty_is_valid() {
        assert!(UpdateCustomerRequest::default().validate().is_ok());
    }

    #[test]
    fn test_search_query_parameter_name_is_camel_case() {
        let query: SearchQuery =
            serde_json::from_str(r#"{"searchText": "vetron"}"#).unwrap();
        assert_eq!(query.search_text.as_deref(), Some("vetron"));
    }
}
