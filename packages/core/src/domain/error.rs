//! Domain layer error definitions.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// CustomerId validation error
    #[error("CustomerId cannot be empty")]
    CustomerIdEmpty,

    /// CustomerId too long error
    #[error("CustomerId cannot exceed {max} characters (got {actual})")]
    CustomerIdTooLong { max: usize, actual: usize },

    /// HotelId validation error
    #[error("HotelId cannot be empty")]
    HotelIdEmpty,

    /// HotelId too long error
    #[error("HotelId cannot exceed {max} characters (got {actual})")]
    HotelIdTooLong { max: usize, actual: usize },

    /// ReservationId validation error
    #[error("ReservationId cannot be empty")]
    ReservationIdEmpty,

    /// ReservationId too long error
    #[error("ReservationId cannot exceed {max} characters (got {actual})")]
    ReservationIdTooLong { max: usize, actual: usize },

    /// ReservationDate invalid format error (not YYYY-MM-DD)
    #[error("ReservationDate must use the YYYY-MM-DD format (got: {0})")]
    ReservationDateInvalidFormat(String),
}

/// Errors related to Hotel domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// Every room of the hotel is already reserved
    #[error("No rooms available ({reserved} of {total} reserved)")]
    FullyBooked { total: u32, reserved: u32 },

    /// Cancellation requested while no room is reserved
    #[error("No reserved rooms to cancel")]
    NoReservedRooms,

    /// Room total would drop below the rooms already reserved
    #[error("Total rooms cannot be lower than reserved rooms (total: {total}, reserved: {reserved})")]
    CapacityBelowReserved { total: u32, reserved: u32 },
}

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Backing file could not be read or written
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Records could not be encoded for writing
    #[error("Failed to encode records for '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
