use crate::domain::{CustomerCollection, CustomerRepository, RepositoryError};

use super::JsonCustomerRepository;

impl CustomerRepository for JsonCustomerRepository {
    fn load(&self) -> Result<CustomerCollection, RepositoryError> {
        self.load_entities()
    }

    fn save(&self, customers: &CustomerCollection) -> Result<(), RepositoryError> {
        self.save_entities(customers)
    }
}
