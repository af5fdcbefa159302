//! Customer Service
//!
//! Handles customer record operations: lookup, partial edit, free-text
//! search, distance calculation, and zip-code grouped listings.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Address, Coordinates, Customer, CustomerProfile, CustomerRepository};

/// Customer service trait
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Get a customer with its address by id
    async fn get_customer(&self, id: &str) -> Result<CustomerDto, CustomerError>;

    /// Apply a partial update to a customer record
    async fn edit_customer(
        &self,
        id: &str,
        update: UpdateCustomerDto,
    ) -> Result<CustomerDto, CustomerError>;

    /// Distance in kilometers between the stored customer's coordinates
    /// and the supplied point
    async fn distance_to(&self, id: &str, target: Coordinates) -> Result<f64, CustomerError>;

    /// Case-insensitive substring search across customer and address fields
    async fn search(&self, text: &str) -> Result<Vec<CustomerDto>, CustomerError>;

    /// All customers grouped by address zip code, groups sorted by zip
    async fn customers_by_zip(&self) -> Result<Vec<ZipGroupDto>, CustomerError>;

    /// Every customer joined with its address
    async fn list_all(&self) -> Result<Vec<CustomerDto>, CustomerError>;
}

/// Customer data transfer object
#[derive(Debug, Clone)]
pub struct CustomerDto {
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
    pub address: AddressDto,
}

/// Address portion of a customer DTO
#[derive(Debug, Clone)]
pub struct AddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: String,
}

impl From<CustomerProfile> for CustomerDto {
    fn from(profile: CustomerProfile) -> Self {
        let CustomerProfile { customer, address } = profile;
        Self {
            id: customer.id,
            index: customer.index,
            age: customer.age,
            eye_color: customer.eye_color,
            name: customer.name,
            gender: customer.gender,
            company: customer.company,
            email: customer.email,
            phone: customer.phone,
            about: customer.about,
            registered: customer.registered,
            latitude: customer.latitude,
            longitude: customer.longitude,
            tags: customer.tags,
            address: AddressDto::from(address),
        }
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
        }
    }
}

/// Partial update request; only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tags: Option<Vec<String>>,
}

/// Customers sharing one zip code
#[derive(Debug, Clone)]
pub struct ZipGroupDto {
    pub zip_code: String,
    pub customers: Vec<CustomerDto>,
}

/// Customer service errors
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer not found")]
    NotFound,

    #[error("Customer's latitude or longitude is missing")]
    MissingCoordinates,

    #[error("Search text must not be empty")]
    EmptySearch,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CustomerService implementation
pub struct CustomerServiceImpl<R>
where
    R: CustomerRepository,
{
    customer_repo: Arc<R>,
}

impl<R> CustomerServiceImpl<R>
where
    R: CustomerRepository,
{
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }

    fn apply_update(customer: &mut Customer, update: UpdateCustomerDto) {
        if let Some(name) = update.name {
            customer.name = Some(name);
        }
        if let Some(age) = update.age {
            customer.age = Some(age);
        }
        if let Some(eye_color) = update.eye_color {
            customer.eye_color = Some(eye_color);
        }
        if let Some(gender) = update.gender {
            customer.gender = Some(gender);
        }
        if let Some(company) = update.company {
            customer.company = Some(company);
        }
        if let Some(email) = update.email {
            customer.email = Some(email);
        }
        if let Some(phone) = update.phone {
            customer.phone = Some(phone);
        }
        if let Some(about) = update.about {
            customer.about = Some(about);
        }
        if let Some(latitude) = update.latitude {
            customer.latitude = Some(latitude);
        }
        if let Some(longitude) = update.longitude {
            customer.longitude = Some(longitude);
        }
        if let Some(tags) = update.tags {
            customer.tags = tags;
        }
    }
}

#[async_trait]
impl<R> CustomerService for CustomerServiceImpl<R>
where
    R: CustomerRepository + 'static,
{
    async fn get_customer(&self, id: &str) -> Result<CustomerDto, CustomerError> {
        let profile = self
            .customer_repo
            .find_profile(id)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?
            .ok_or(CustomerError::NotFound)?;

        Ok(CustomerDto::from(profile))
    }

    async fn edit_customer(
        &self,
        id: &str,
        update: UpdateCustomerDto,
    ) -> Result<CustomerDto, CustomerError> {
        let mut customer = self
            .customer_repo
            .find_by_id(id)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?
            .ok_or(CustomerError::NotFound)?;

        Self::apply_update(&mut customer, update);

        self.customer_repo
            .update(&customer)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        // Re-read joined with the address for the response shape
        let profile = self
            .customer_repo
            .find_profile(id)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?
            .ok_or(CustomerError::NotFound)?;

        Ok(CustomerDto::from(profile))
    }

    async fn distance_to(&self, id: &str, target: Coordinates) -> Result<f64, CustomerError> {
        let customer = self
            .customer_repo
            .find_by_id(id)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?
            .ok_or(CustomerError::NotFound)?;

        let (latitude, longitude) = match (customer.latitude, customer.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(CustomerError::MissingCoordinates),
        };

        let stored = Coordinates::new(latitude, longitude)
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        Ok(stored.haversine_distance_km(&target))
    }

    async fn search(&self, text: &str) -> Result<Vec<CustomerDto>, CustomerError> {
        let term = text.trim();
        if term.is_empty() {
            return Err(CustomerError::EmptySearch);
        }

        let profiles = self
            .customer_repo
            .search(term)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        Ok(profiles.into_iter().map(CustomerDto::from).collect())
    }

    async fn customers_by_zip(&self) -> Result<Vec<ZipGroupDto>, CustomerError> {
        let profiles = self
            .customer_repo
            .list_all()
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        // BTreeMap keeps the groups sorted by zip code
        let mut groups: BTreeMap<String, Vec<CustomerDto>> = BTreeMap::new();
        for profile in profiles {
            let zip = profile.address.zip_code.clone();
            groups.entry(zip).or_default().push(CustomerDto::from(profile));
        }

        Ok(groups
            .into_iter()
            .map(|(zip_code, customers)| ZipGroupDto {
                zip_code,
                customers,
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<CustomerDto>, CustomerError> {
        let profiles = self
            .customer_repo
            .list_all()
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        Ok(profiles.into_iter().map(CustomerDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::customer::MockCustomerRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn customer(id: &str, address_id: &str) -> Customer {
        let now = Utc::now();
        Customer {
            id: id.to_string(),
            index: Some(0),
            age: Some(28),
            eye_color: Some("brown".into()),
            name: Some("Prince Campos".into()),
            gender: Some("male".into()),
            company: Some("Vetron".into()),
            email: Some("princecampos@vetron.com".into()),
            phone: Some("+1 (935) 583-2109".into()),
            about: None,
            registered: Some("2015-05-08".into()),
            latitude: Some(48.8566),
            longitude: Some(2.3522),
            tags: vec![],
            address_id: address_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn address(id: &str, zip: &str) -> Address {
        Address {
            id: id.to_string(),
            street: Some("1 Rue de Rivoli".into()),
            city: Some("Paris".into()),
            state: None,
            zip_code: zip.to_string(),
        }
    }

    fn profile(id: &str, zip: &str) -> CustomerProfile {
        CustomerProfile {
            customer: customer(id, "addr"),
            address: address("addr", zip),
        }
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_profile().returning(|_| Ok(None));

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let result = service.get_customer("missing").await;

        assert!(matches!(result, Err(CustomerError::NotFound)));
    }

    #[tokio::test]
    async fn test_edit_customer_applies_only_supplied_fields() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .with(eq("c-1"))
            .returning(|_| Ok(Some(customer("c-1", "addr"))));
        repo.expect_update()
            .withf(|c: &Customer| {
                c.name.as_deref() == Some("Renamed")
                    && c.age == Some(28)
                    && c.email.as_deref() == Some("princecampos@vetron.com")
            })
            .returning(|c| Ok(c.clone()));
        repo.expect_find_profile().returning(|_| {
            let mut p = profile("c-1", "75001");
            p.customer.name = Some("Renamed".into());
            Ok(Some(p))
        });

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let update = UpdateCustomerDto {
            name: Some("Renamed".into()),
            ..Default::default()
        };

        let dto = service.edit_customer("c-1", update).await.unwrap();
        assert_eq!(dto.name.as_deref(), Some("Renamed"));
        assert_eq!(dto.age, Some(28));
    }

    #[tokio::test]
    async fn test_edit_customer_unknown_id_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let result = service
            .edit_customer("missing", UpdateCustomerDto::default())
            .await;

        assert!(matches!(result, Err(CustomerError::NotFound)));
    }

    #[tokio::test]
    async fn test_distance_to_known_point() {
        let mut repo = MockCustomerRepository::new();
        // Stored coordinates are Paris
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(customer("c-1", "addr"))));

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let london = Coordinates::new(51.5007, -0.1246).unwrap();

        let km = service.distance_to("c-1", london).await.unwrap();
        assert!((km - 343.5).abs() < 3.0, "expected ~343.5 km, got {km}");
    }

    #[tokio::test]
    async fn test_distance_to_missing_coordinates() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| {
            let mut c = customer("c-1", "addr");
            c.longitude = None;
            Ok(Some(c))
        });

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let target = Coordinates::new(0.0, 0.0).unwrap();

        let result = service.distance_to("c-1", target).await;
        assert!(matches!(result, Err(CustomerError::MissingCoordinates)));
    }

    #[tokio::test]
    async fn test_distance_to_unknown_customer() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let target = Coordinates::new(0.0, 0.0).unwrap();

        let result = service.distance_to("missing", target).await;
        assert!(matches!(result, Err(CustomerError::NotFound)));
    }

    #[tokio::test]
    async fn test_search_rejects_blank_text() {
        let repo = MockCustomerRepository::new();
        let service = CustomerServiceImpl::new(Arc::new(repo));

        let result = service.search("   ").await;
        assert!(matches!(result, Err(CustomerError::EmptySearch)));
    }

    #[tokio::test]
    async fn test_search_trims_term_before_querying() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_search()
            .with(eq("vetron"))
            .returning(|_| Ok(vec![profile("c-1", "75001")]));

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let results = service.search("  vetron  ").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "c-1");
    }

    #[tokio::test]
    async fn test_customers_by_zip_groups_and_sorts() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                profile("c-1", "90210"),
                profile("c-2", "10001"),
                profile("c-3", "90210"),
            ])
        });

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let groups = service.customers_by_zip().await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].zip_code, "10001");
        assert_eq!(groups[0].customers.len(), 1);
        assert_eq!(groups[1].zip_code, "90210");
        assert_eq!(groups[1].customers.len(), 2);

        // Every customer lands in exactly one group
        let total: usize = groups.iter().map(|g| g.customers.len()).sum();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_list_all_maps_profiles() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_list_all()
            .returning(|| Ok(vec![profile("c-1", "75001"), profile("c-2", "75002")]));

        let service = CustomerServiceImpl::new(Arc::new(repo));
        let all = service.list_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].address.zip_code, "75001");
    }
}
