//! Customer Repository Implementation
//!
//! PostgreSQL implementation of the CustomerRepository trait.
//! Maps between the database schema and the domain Customer entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Address, Customer, CustomerProfile, CustomerRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `customers` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: String,
    index: Option<i32>,
    age: Option<i32>,
    eye_color: Option<String>,
    name: Option<String>,
    gender: Option<String>,
    company: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    about: Option<String>,
    registered: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    tags: Vec<String>,
    address_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: self.id,
            index: self.index,
            age: self.age,
            eye_color: self.eye_color,
            name: self.name,
            gender: self.gender,
            company: self.company,
            email: self.email,
            phone: self.phone,
            about: self.about,
            registered: self.registered,
            latitude: self.latitude,
            longitude: self.longitude,
            tags: self.tags,
            address_id: self.address_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Join row for a customer with its address.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: String,
    index: Option<i32>,
    age: Option<i32>,
    eye_color: Option<String>,
    name: Option<String>,
    gender: Option<String>,
    company: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    about: Option<String>,
    registered: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    tags: Vec<String>,
    address_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: String,
}

impl ProfileRow {
    fn into_profile(self) -> CustomerProfile {
        let address = Address {
            id: self.address_id.clone(),
            street: self.street,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        };
        let customer = Customer {
            id: self.id,
            index: self.index,
            age: self.age,
            eye_color: self.eye_color,
            name: self.name,
            gender: self.gender,
            company: self.company,
            email: self.email,
            phone: self.phone,
            about: self.about,
            registered: self.registered,
            latitude: self.latitude,
            longitude: self.longitude,
            tags: self.tags,
            address_id: self.address_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        CustomerProfile { customer, address }
    }
}

const PROFILE_COLUMNS: &str = r#"
    c.id, c."index", c.age, c.eye_color, c.name, c.gender, c.company,
    c.email, c.phone, c.about, c.registered, c.latitude, c.longitude,
    c.tags, c.address_id, c.created_at, c.updated_at,
    a.street, a.city, a.state, a.zip_code
"#;

/// PostgreSQL customer repository implementation.
///
/// Provides read/update operations for customers against PostgreSQL.
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new PgCustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    /// Find a customer by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, "index", age, eye_color, name, gender, company, email,
                   phone, about, registered, latitude, longitude, tags,
                   address_id, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_customer()))
    }

    /// Find a customer joined with its address.
    async fn find_profile(&self, id: &str) -> Result<Option<CustomerProfile>, AppError> {
        let query = format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM customers c
            JOIN addresses a ON a.id = c.address_id
            WHERE c.id = $1
            "#
        );

        let row = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_profile()))
    }

    /// Persist an updated customer record.
    async fn update(&self, customer: &Customer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET name = $2,
                age = $3,
                eye_color = $4,
                gender = $5,
                company = $6,
                email = $7,
                phone = $8,
                about = $9,
                latitude = $10,
                longitude = $11,
                tags = $12,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, "index", age, eye_color, name, gender, company, email,
                      phone, about, registered, latitude, longitude, tags,
                      address_id, created_at, updated_at
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(customer.age)
        .bind(&customer.eye_color)
        .bind(&customer.gender)
        .bind(&customer.company)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.about)
        .bind(customer.latitude)
        .bind(customer.longitude)
        .bind(&customer.tags)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with id {} not found", customer.id)))?;

        Ok(row.into_customer())
    }

    /// Case-insensitive substring match over customer and address fields.
    async fn search(&self, term: &str) -> Result<Vec<CustomerProfile>, AppError> {
        let pattern = format!("%{}%", term);
        let query = format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM customers c
            JOIN addresses a ON a.id = c.address_id
            WHERE c.name ILIKE $1
               OR c.email ILIKE $1
               OR c.company ILIKE $1
               OR c.phone ILIKE $1
               OR a.city ILIKE $1
               OR a.zip_code ILIKE $1
            ORDER BY c.id
            "#
        );

        let rows = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_profile()).collect())
    }

    /// List every customer joined with its address.
    async fn list_all(&self) -> Result<Vec<CustomerProfile>, AppError> {
        let query = format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM customers c
            JOIN addresses a ON a.id = c.address_id
            ORDER BY c.id
            "#
        );

        let rows = sqlx::query_as::<_, ProfileRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_profile()).collect())
    }
}
