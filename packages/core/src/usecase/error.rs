//! UseCase 層のエラー定義
//!
//! 各 Store の操作は失敗を戻り値（`Result`）で伝えます。
//! `Display` の内容がそのまま利用者向けメッセージになります。

use thiserror::Error;

use crate::domain::{CustomerId, HotelError, HotelId, RepositoryError, ReservationId};

/// Customer store errors
#[derive(Debug, Error)]
pub enum CustomerStoreError {
    #[error("Customer '{0}' already exists")]
    AlreadyExists(CustomerId),

    #[error("Customer '{0}' not found")]
    NotFound(CustomerId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Hotel store errors
#[derive(Debug, Error)]
pub enum HotelStoreError {
    #[error("Hotel '{0}' already exists")]
    AlreadyExists(HotelId),

    #[error("Hotel '{0}' not found")]
    NotFound(HotelId),

    /// The hotel exists but refused the change (full, nothing to cancel, ...)
    #[error("Hotel '{hotel_id}': {source}")]
    Rejected {
        hotel_id: HotelId,
        #[source]
        source: HotelError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HotelStoreError {
    /// Whether the hotel had no room left to reserve
    pub fn is_fully_booked(&self) -> bool {
        matches!(
            self,
            Self::Rejected {
                source: HotelError::FullyBooked { .. },
                ..
            }
        )
    }
}

/// Reservation store errors
#[derive(Debug, Error)]
pub enum ReservationStoreError {
    #[error("Reservation '{0}' already exists")]
    AlreadyExists(ReservationId),

    #[error("Reservation '{0}' not found")]
    NotFound(ReservationId),

    #[error("Hotel '{0}' not found")]
    HotelNotFound(HotelId),

    #[error("Customer '{0}' not found")]
    CustomerNotFound(CustomerId),

    #[error("No rooms available at hotel '{0}'")]
    NoAvailability(HotelId),

    /// Any other refusal from the hotel store
    #[error(transparent)]
    Hotel(HotelStoreError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CustomerStoreError {
    /// Whether the failure came from the backing storage rather than the request
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

impl HotelStoreError {
    /// Whether the failure came from the backing storage rather than the request
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

impl ReservationStoreError {
    /// Whether the failure came from the backing storage rather than the request
    pub fn is_storage_failure(&self) -> bool {
        match self {
            Self::Repository(_) => true,
            Self::Hotel(e) => e.is_storage_failure(),
            _ => false,
        }
    }
}
