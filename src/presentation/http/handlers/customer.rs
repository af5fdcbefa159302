//! Customer Handlers
//!
//! Edit, distance, search, and listing endpoints over customer records.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use validator::Validate;

use crate::application::dto::request::{DistanceQuery, SearchQuery, UpdateCustomerRequest};
use crate::application::dto::response::{CustomerResponse, DistanceResponse, ZipGroupResponse};
use crate::application::services::{
    CustomerError, CustomerService, CustomerServiceImpl, UpdateCustomerDto,
};
use crate::domain::Coordinates;
use crate::infrastructure::repositories::PgCustomerRepository;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn customer_service(state: &AppState) -> CustomerServiceImpl<PgCustomerRepository> {
    let repo = Arc::new(PgCustomerRepository::new(state.db.clone()));
    CustomerServiceImpl::new(repo)
}

fn map_customer_error(e: CustomerError) -> AppError {
    match e {
        CustomerError::NotFound => AppError::NotFound("Customer not found".into()),
        CustomerError::MissingCoordinates => {
            AppError::BadRequest("Customer's latitude or longitude is missing".into())
        }
        CustomerError::EmptySearch => {
            AppError::BadRequest("searchText must not be empty".into())
        }
        e => AppError::Internal(e.to_string()),
    }
}

/// PUT EditUser/{id} - apply a partial update to a customer record
pub async fn edit_customer(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let update = UpdateCustomerDto {
        name: body.name,
        age: body.age,
        eye_color: body.eye_color,
        gender: body.gender,
        company: body.company,
        email: body.email,
        phone: body.phone,
        about: body.about,
        latitude: body.latitude,
        longitude: body.longitude,
        tags: body.tags,
    };

    let customer = customer_service(&state)
        .edit_customer(&id, update)
        .await
        .map_err(map_customer_error)?;

    Ok(Json(CustomerResponse::from(customer)))
}

/// GET GetDistance/{id}?latitude=..&longitude=.. - haversine distance in km
/// between the stored customer's coordinates and the supplied point
pub async fn get_distance(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<DistanceResponse>, AppError> {
    let target = Coordinates::new(query.latitude, query.longitude)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let distance_km = customer_service(&state)
        .distance_to(&id, target)
        .await
        .map_err(map_customer_error)?;

    Ok(Json(DistanceResponse { distance_km }))
}

/// GET SearchUser?searchText=.. - free-text customer search
pub async fn search_customers(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let text = query.search_text.unwrap_or_default();

    let matches = customer_service(&state)
        .search(&text)
        .await
        .map_err(map_customer_error)?;

    Ok(Json(matches.into_iter().map(CustomerResponse::from).collect()))
}

/// GET GetCustomerListByZipCode - customers grouped by address zip code
pub async fn customers_by_zip(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
) -> Result<Json<Vec<ZipGroupResponse>>, AppError> {
    let groups = customer_service(&state)
        .customers_by_zip()
        .await
        .map_err(map_customer_error)?;

    Ok(Json(groups.into_iter().map(ZipGroupResponse::from).collect()))
}

/// GET GetAllCustomerList - every customer with its address (admin only)
pub async fn all_customers(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    auth.require_admin()?;

    let customers = customer_service(&state)
        .list_all()
        .await
        .map_err(map_customer_error)?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}
