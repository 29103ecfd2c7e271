use crate::domain::{HotelCollection, HotelRepository, RepositoryError};

use super::JsonHotelRepository;

impl HotelRepository for JsonHotelRepository {
    fn load(&self) -> Result<HotelCollection, RepositoryError> {
        self.load_entities()
    }

    fn save(&self, hotels: &HotelCollection) -> Result<(), RepositoryError> {
        self.save_entities(hotels)
    }
}
