//! Domain factories for creating domain entities and value objects.

use super::ReservationId;

/// Assigns identifiers to reservations created without one.
pub struct ReservationIdFactory;

impl ReservationIdFactory {
    /// Generate a new ReservationId from a random UUID v4.
    pub fn generate() -> ReservationId {
        ReservationId::from_uuid(uuid::Uuid::new_v4())
    }
}
