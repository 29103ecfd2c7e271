//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use innkeeper::{
    ReservationSystem, StoreConfig,
    domain::{CustomerId, HotelId, ReservationId},
};

/// Reservation system over a unique scratch directory, removed on drop
pub struct TestSystem {
    dir: PathBuf,
    pub system: ReservationSystem,
}

impl TestSystem {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("innkeeper-it-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("Failed to create scratch directory");
        let system = ReservationSystem::open(&StoreConfig::in_dir(&dir));
        Self { dir, system }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// A second, independent view over the same files
    pub fn reopen(&self) -> ReservationSystem {
        ReservationSystem::open(&StoreConfig::in_dir(&self.dir))
    }

    pub fn reserved_rooms(&self, id: &str) -> u32 {
        self.system
            .hotels
            .get(&hotel_id(id))
            .expect("hotel should exist")
            .reserved_rooms()
    }
}

impl Drop for TestSystem {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub fn hotel_id(id: &str) -> HotelId {
    HotelId::new(id.to_string()).unwrap()
}

pub fn customer_id(id: &str) -> CustomerId {
    CustomerId::new(id.to_string()).unwrap()
}

pub fn reservation_id(id: &str) -> ReservationId {
    ReservationId::new(id.to_string()).unwrap()
}
