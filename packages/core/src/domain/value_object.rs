//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use chrono::NaiveDate;
use innkeeper_shared::time::{format_date, parse_date, today};

use super::error::ValueObjectError;

/// Maximum length of any entity identifier
pub const MAX_ID_LENGTH: usize = 100;

/// Customer identifier value object.
///
/// Externally assigned, unique within the customer store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a new CustomerId.
    ///
    /// # Arguments
    ///
    /// * `id` - The customer identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the CustomerId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.trim().is_empty() {
            return Err(ValueObjectError::CustomerIdEmpty);
        }
        let len = id.chars().count();
        if len > MAX_ID_LENGTH {
            return Err(ValueObjectError::CustomerIdTooLong {
                max: MAX_ID_LENGTH,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hotel identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HotelId(String);

impl HotelId {
    /// Create a new HotelId.
    ///
    /// # Arguments
    ///
    /// * `id` - The hotel identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the HotelId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.trim().is_empty() {
            return Err(ValueObjectError::HotelIdEmpty);
        }
        let len = id.chars().count();
        if len > MAX_ID_LENGTH {
            return Err(ValueObjectError::HotelIdTooLong {
                max: MAX_ID_LENGTH,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HotelId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reservation identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationId(String);

impl ReservationId {
    /// Create a new ReservationId.
    ///
    /// # Arguments
    ///
    /// * `id` - The reservation identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the ReservationId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.trim().is_empty() {
            return Err(ValueObjectError::ReservationIdEmpty);
        }
        let len = id.chars().count();
        if len > MAX_ID_LENGTH {
            return Err(ValueObjectError::ReservationIdTooLong {
                max: MAX_ID_LENGTH,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Create a ReservationId from a UUID.
    ///
    /// The hyphenated form is never blank and always 36 characters long.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReservationId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date of a reservation (YYYY-MM-DD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationDate(NaiveDate);

impl ReservationDate {
    /// Parse a YYYY-MM-DD string.
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        parse_date(value)
            .map(Self)
            .map_err(|_| ValueObjectError::ReservationDateInvalidFormat(value.to_string()))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(today())
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}
