//! Hotel reservation record store.
//!
//! Customers, hotels and reservations are each kept in their own JSON file.
//! Every operation loads the whole collection, applies the change and writes
//! the whole collection back. Creating a reservation takes one room of its
//! hotel and cancelling it gives the room back, so a hotel's reserved room
//! count always matches its active reservations.
//!
//! The crate is single-process and single-user: nothing guards the files
//! against concurrent writers.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod system;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::StoreConfig;
pub use system::ReservationSystem;
pub use ui::run;
