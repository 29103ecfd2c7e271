//! Data transfer objects for the persisted record files.

pub mod record;

pub use record::{CustomerRecord, HotelRecord, Record, RecordError, ReservationRecord};
