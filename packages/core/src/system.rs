//! Wiring of the three stores over their JSON files.

use std::sync::Arc;

use crate::{
    config::StoreConfig,
    infrastructure::repository::{
        JsonCustomerRepository, JsonHotelRepository, JsonReservationRepository,
    },
    usecase::{CustomerStore, HotelStore, ReservationStore},
};

/// The customer, hotel and reservation stores sharing one configuration
#[derive(Clone)]
pub struct ReservationSystem {
    pub customers: CustomerStore,
    pub hotels: HotelStore,
    pub reservations: ReservationStore,
}

impl ReservationSystem {
    /// Open the stores backed by the files named in `config`
    ///
    /// Nothing is read until the first operation.
    pub fn open(config: &StoreConfig) -> Self {
        let customers = CustomerStore::new(Arc::new(JsonCustomerRepository::new(
            &config.customer_file,
        )));
        let hotels = HotelStore::new(Arc::new(JsonHotelRepository::new(&config.hotel_file)));
        let reservations = ReservationStore::new(
            Arc::new(JsonReservationRepository::new(&config.reservation_file)),
            hotels.clone(),
            customers.clone(),
        );

        Self {
            customers,
            hotels,
            reservations,
        }
    }
}
