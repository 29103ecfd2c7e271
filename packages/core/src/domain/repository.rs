//! Repository traits (dependency inversion seam).
//!
//! Each repository persists one whole collection at a time: `load` reads every
//! record and `save` rewrites every record. There is no partial access.

use std::collections::BTreeMap;

use super::{
    entity::{Customer, Hotel, Reservation},
    error::RepositoryError,
    value_object::{CustomerId, HotelId, ReservationId},
};

/// All customers keyed by id
pub type CustomerCollection = BTreeMap<CustomerId, Customer>;

/// All hotels keyed by id
pub type HotelCollection = BTreeMap<HotelId, Hotel>;

/// All reservations keyed by id
pub type ReservationCollection = BTreeMap<ReservationId, Reservation>;

/// Storage for the customer collection
#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    /// Load every customer. A missing or unreadable collection yields an empty one.
    fn load(&self) -> Result<CustomerCollection, RepositoryError>;

    /// Replace the stored collection with `customers`
    fn save(&self, customers: &CustomerCollection) -> Result<(), RepositoryError>;
}

/// Storage for the hotel collection
#[cfg_attr(test, mockall::automock)]
pub trait HotelRepository: Send + Sync {
    /// Load every hotel. A missing or unreadable collection yields an empty one.
    fn load(&self) -> Result<HotelCollection, RepositoryError>;

    /// Replace the stored collection with `hotels`
    fn save(&self, hotels: &HotelCollection) -> Result<(), RepositoryError>;
}

/// Storage for the reservation collection
#[cfg_attr(test, mockall::automock)]
pub trait ReservationRepository: Send + Sync {
    /// Load every reservation. A missing or unreadable collection yields an empty one.
    fn load(&self) -> Result<ReservationCollection, RepositoryError>;

    /// Replace the stored collection with `reservations`
    fn save(&self, reservations: &ReservationCollection) -> Result<(), RepositoryError>;
}
