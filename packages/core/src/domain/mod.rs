//! Domain layer for the reservation system.
//!
//! This module contains business logic that is independent of
//! persistence formats and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Customer, CustomerPatch, Hotel, HotelPatch, Reservation};
pub use error::{HotelError, RepositoryError, ValueObjectError};
pub use factory::ReservationIdFactory;
pub use repository::{
    CustomerCollection, CustomerRepository, HotelCollection, HotelRepository,
    ReservationCollection, ReservationRepository,
};
pub use value_object::{CustomerId, HotelId, ReservationDate, ReservationId};
