//! On-disk record shapes.
//!
//! Each collection file is a JSON object keyed by entity id whose values use
//! the field names below. The conversion layer keeps the domain model free of
//! serialization concerns:
//!
//! ```text
//! JSON file → *Record (DTO) → domain entity
//! ```

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::{
    Customer, CustomerId, Hotel, HotelError, HotelId, Reservation, ReservationDate,
    ReservationId, ValueObjectError,
};

/// Reasons a stored collection is treated as malformed
#[derive(Debug, Error)]
pub enum RecordError {
    /// Content is not UTF-8 text
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Content is not a JSON object of well-formed records
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Object key differs from the id stored inside the record
    #[error("record stored under '{key}' carries id '{id}'")]
    KeyMismatch { key: String, id: String },

    /// A field failed value object validation
    #[error("invalid value: {0}")]
    InvalidValue(#[from] ValueObjectError),

    /// Hotel counters are inconsistent
    #[error("invalid hotel: {0}")]
    InvalidHotel(#[from] HotelError),
}

/// A persisted record that converts to and from one domain entity
pub trait Record: Serialize + DeserializeOwned {
    type Entity;
    type Key: Ord + Clone;

    /// Human readable collection name used in diagnostics
    const KIND: &'static str;

    /// Id stored inside the record
    fn id(&self) -> &str;

    /// Collection key for an entity
    fn key(entity: &Self::Entity) -> Self::Key;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn into_entity(self) -> Result<Self::Entity, RecordError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub name: String,
    pub email: String,
}

impl Record for CustomerRecord {
    type Entity = Customer;
    type Key = CustomerId;

    const KIND: &'static str = "customer";

    fn id(&self) -> &str {
        &self.customer_id
    }

    fn key(entity: &Customer) -> CustomerId {
        entity.id.clone()
    }

    fn from_entity(entity: &Customer) -> Self {
        Self {
            customer_id: entity.id.as_str().to_string(),
            name: entity.name.clone(),
            email: entity.email.clone(),
        }
    }

    fn into_entity(self) -> Result<Customer, RecordError> {
        Ok(Customer::new(
            CustomerId::new(self.customer_id)?,
            self.name,
            self.email,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    pub total_rooms: u32,
    pub reserved_rooms: u32,
}

impl Record for HotelRecord {
    type Entity = Hotel;
    type Key = HotelId;

    const KIND: &'static str = "hotel";

    fn id(&self) -> &str {
        &self.hotel_id
    }

    fn key(entity: &Hotel) -> HotelId {
        entity.id.clone()
    }

    fn from_entity(entity: &Hotel) -> Self {
        Self {
            hotel_id: entity.id.as_str().to_string(),
            name: entity.name.clone(),
            location: entity.location.clone(),
            total_rooms: entity.total_rooms(),
            reserved_rooms: entity.reserved_rooms(),
        }
    }

    fn into_entity(self) -> Result<Hotel, RecordError> {
        Ok(Hotel::restore(
            HotelId::new(self.hotel_id)?,
            self.name,
            self.location,
            self.total_rooms,
            self.reserved_rooms,
        )?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub reservation_id: String,
    pub hotel_id: String,
    pub customer_id: String,
    pub date_str: String,
}

impl Record for ReservationRecord {
    type Entity = Reservation;
    type Key = ReservationId;

    const KIND: &'static str = "reservation";

    fn id(&self) -> &str {
        &self.reservation_id
    }

    fn key(entity: &Reservation) -> ReservationId {
        entity.id().clone()
    }

    fn from_entity(entity: &Reservation) -> Self {
        Self {
            reservation_id: entity.id().as_str().to_string(),
            hotel_id: entity.hotel_id().as_str().to_string(),
            customer_id: entity.customer_id().as_str().to_string(),
            date_str: entity.date().to_string(),
        }
    }

    fn into_entity(self) -> Result<Reservation, RecordError> {
        Ok(Reservation::new(
            ReservationId::new(self.reservation_id)?,
            HotelId::new(self.hotel_id)?,
            CustomerId::new(self.customer_id)?,
            ReservationDate::parse(&self.date_str)?,
        ))
    }
}
