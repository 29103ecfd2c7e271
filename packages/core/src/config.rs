//! File locations used by the stores.

use std::path::{Path, PathBuf};

pub const DEFAULT_CUSTOMER_FILE: &str = "customers.json";
pub const DEFAULT_HOTEL_FILE: &str = "hotels.json";
pub const DEFAULT_RESERVATION_FILE: &str = "reservations.json";
pub const DEFAULT_RESULT_FILE: &str = "results.txt";

/// Where each collection and the command results are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub customer_file: PathBuf,
    pub hotel_file: PathBuf,
    pub reservation_file: PathBuf,
    pub result_file: PathBuf,
}

impl StoreConfig {
    /// Default file names inside `data_dir`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            customer_file: data_dir.join(DEFAULT_CUSTOMER_FILE),
            hotel_file: data_dir.join(DEFAULT_HOTEL_FILE),
            reservation_file: data_dir.join(DEFAULT_RESERVATION_FILE),
            result_file: data_dir.join(DEFAULT_RESULT_FILE),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
