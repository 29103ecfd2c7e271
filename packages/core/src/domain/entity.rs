//! Core domain models for the reservation system.

use std::fmt;

use super::{
    error::HotelError,
    value_object::{CustomerId, HotelId, ReservationDate, ReservationId},
};

/// Represents a customer who can hold reservations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer identifier
    pub id: CustomerId,
    /// Customer name
    pub name: String,
    /// Contact e-mail address
    pub email: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: CustomerId, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// Apply the fields present in `patch`, leaving the others untouched
    pub fn apply_patch(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)
    }
}

/// Partial update for a customer. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    /// Whether the patch leaves every field as it is
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Represents a hotel with a fixed number of rooms
///
/// `reserved_rooms` only moves through [`Hotel::reserve_room`] and
/// [`Hotel::cancel_reservation`], and never exceeds `total_rooms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    /// Hotel identifier
    pub id: HotelId,
    /// Hotel name
    pub name: String,
    /// Where the hotel is located
    pub location: String,
    total_rooms: u32,
    reserved_rooms: u32,
}

impl Hotel {
    /// Create a new hotel with no reserved rooms
    pub fn new(id: HotelId, name: String, location: String, total_rooms: u32) -> Self {
        Self {
            id,
            name,
            location,
            total_rooms,
            reserved_rooms: 0,
        }
    }

    /// Rebuild a hotel from persisted counters
    ///
    /// # Errors
    ///
    /// Returns `HotelError::CapacityBelowReserved` if `reserved_rooms > total_rooms`
    pub fn restore(
        id: HotelId,
        name: String,
        location: String,
        total_rooms: u32,
        reserved_rooms: u32,
    ) -> Result<Self, HotelError> {
        if reserved_rooms > total_rooms {
            return Err(HotelError::CapacityBelowReserved {
                total: total_rooms,
                reserved: reserved_rooms,
            });
        }
        Ok(Self {
            id,
            name,
            location,
            total_rooms,
            reserved_rooms,
        })
    }

    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }

    pub fn reserved_rooms(&self) -> u32 {
        self.reserved_rooms
    }

    /// Rooms that can still be reserved
    pub fn available_rooms(&self) -> u32 {
        self.total_rooms - self.reserved_rooms
    }

    /// Reserve one room
    ///
    /// # Errors
    ///
    /// Returns `HotelError::FullyBooked` if no room is available
    pub fn reserve_room(&mut self) -> Result<(), HotelError> {
        if self.available_rooms() == 0 {
            return Err(HotelError::FullyBooked {
                total: self.total_rooms,
                reserved: self.reserved_rooms,
            });
        }
        self.reserved_rooms += 1;
        Ok(())
    }

    /// Release one reserved room
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NoReservedRooms` if nothing is reserved
    pub fn cancel_reservation(&mut self) -> Result<(), HotelError> {
        if self.reserved_rooms == 0 {
            return Err(HotelError::NoReservedRooms);
        }
        self.reserved_rooms -= 1;
        Ok(())
    }

    /// Apply the fields present in `patch`, leaving the others untouched
    ///
    /// Nothing is changed when the patch is rejected.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::CapacityBelowReserved` if the new room total is lower
    /// than the rooms already reserved
    pub fn apply_patch(&mut self, patch: HotelPatch) -> Result<(), HotelError> {
        if let Some(total_rooms) = patch.total_rooms
            && total_rooms < self.reserved_rooms
        {
            return Err(HotelError::CapacityBelowReserved {
                total: total_rooms,
                reserved: self.reserved_rooms,
            });
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(total_rooms) = patch.total_rooms {
            self.total_rooms = total_rooms;
        }
        Ok(())
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Total rooms: {}", self.total_rooms)?;
        writeln!(f, "Reserved rooms: {}", self.reserved_rooms)?;
        writeln!(f, "Available rooms: {}", self.available_rooms())
    }
}

/// Partial update for a hotel. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub total_rooms: Option<u32>,
}

impl HotelPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.total_rooms.is_none()
    }
}

/// Represents one room reserved by a customer at a hotel
///
/// The hotel and customer links never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    hotel_id: HotelId,
    customer_id: CustomerId,
    date: ReservationDate,
}

impl Reservation {
    /// Create a new reservation
    pub fn new(
        id: ReservationId,
        hotel_id: HotelId,
        customer_id: CustomerId,
        date: ReservationDate,
    ) -> Self {
        Self {
            id,
            hotel_id,
            customer_id,
            date,
        }
    }

    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    pub fn hotel_id(&self) -> &HotelId {
        &self.hotel_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn date(&self) -> ReservationDate {
        self.date
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation ID: {}", self.id)?;
        writeln!(f, "Hotel ID: {}", self.hotel_id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Date: {}", self.date)
    }
}
