use crate::domain::{RepositoryError, ReservationCollection, ReservationRepository};

use super::JsonReservationRepository;

impl ReservationRepository for JsonReservationRepository {
    fn load(&self) -> Result<ReservationCollection, RepositoryError> {
        self.load_entities()
    }

    fn save(&self, reservations: &ReservationCollection) -> Result<(), RepositoryError> {
        self.save_entities(reservations)
    }
}
