//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{AddressDto, AuthToken, CustomerDto, ZipGroupDto};

/// Bearer token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<AuthToken> for TokenResponse {
    fn from(token: AuthToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

/// Customer response with embedded address
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub index: Option<i32>,
    pub age: Option<i32>,
    pub eye_color: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub registered: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tags: Vec<String>,
    pub address: AddressResponse,
}

impl From<CustomerDto> for CustomerResponse {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id,
            index: dto.index,
            age: dto.age,
            eye_color: dto.eye_color,
            name: dto.name,
            gender: dto.gender,
            company: dto.company,
            email: dto.email,
            phone: dto.phone,
            about: dto.about,
            registered: dto.registered,
            latitude: dto.latitude,
            longitude: dto.longitude,
            tags: dto.tags,
            address: AddressResponse::from(dto.address),
        }
    }
}

/// Address embedded in customer responses
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: String,
}

impl From<AddressDto> for AddressResponse {
    fn from(dto: AddressDto) -> Self {
        Self {
            street: dto.street,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
        }
    }
}

/// Distance calculation response
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub distance_km: f64,
}

/// One zip-code group in the grouped customer listing
#[derive(Debug, Serialize)]
pub struct ZipGroupResponse {
    pub zip_code: String,
    pub customers: Vec<CustomerResponse>,
}

impl From<ZipGroupDto> for ZipGroupResponse {
    fn from(dto: ZipGroupDto) -> Self {
        Self {
            zip_code: dto.zip_code,
            customers: dto.customers.into_iter().map(CustomerResponse::from).collect(),
        }
    }
}
