//! Command line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    config::StoreConfig,
    domain::{
        CustomerId, CustomerPatch, HotelId, HotelPatch, ReservationDate, ReservationId,
        ValueObjectError,
    },
};

/// Hotel, customer and reservation records kept in JSON files
#[derive(Debug, Parser)]
#[command(name = "innkeeper", version, about)]
pub struct Cli {
    /// Directory holding the record files and the results file
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Customer file (default: <DATA_DIR>/customers.json)
    #[arg(long, global = true)]
    pub customers: Option<PathBuf>,

    /// Hotel file (default: <DATA_DIR>/hotels.json)
    #[arg(long, global = true)]
    pub hotels: Option<PathBuf>,

    /// Reservation file (default: <DATA_DIR>/reservations.json)
    #[arg(long, global = true)]
    pub reservations: Option<PathBuf>,

    /// Results file, overwritten by every command (default: <DATA_DIR>/results.txt)
    #[arg(long, global = true)]
    pub results: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Resolve the file locations from the data directory and overrides
    pub fn store_config(&self) -> StoreConfig {
        let mut config = StoreConfig::in_dir(&self.data_dir);
        if let Some(path) = &self.customers {
            config.customer_file = path.clone();
        }
        if let Some(path) = &self.hotels {
            config.hotel_file = path.clone();
        }
        if let Some(path) = &self.reservations {
            config.reservation_file = path.clone();
        }
        if let Some(path) = &self.results {
            config.result_file = path.clone();
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage hotels
    #[command(subcommand)]
    Hotel(HotelCommand),

    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Manage reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),
}

#[derive(Debug, Subcommand)]
pub enum HotelCommand {
    /// Create a hotel
    Create {
        #[arg(value_parser = parse_hotel_id)]
        id: HotelId,
        name: String,
        location: String,
        /// Total number of rooms
        total_rooms: u32,
    },

    /// Show a hotel
    Show {
        #[arg(value_parser = parse_hotel_id)]
        id: HotelId,
    },

    /// Change a hotel; blank or omitted fields stay as they are
    Modify {
        #[arg(value_parser = parse_hotel_id)]
        id: HotelId,
        #[command(flatten)]
        fields: HotelFields,
    },

    /// Delete a hotel
    Delete {
        #[arg(value_parser = parse_hotel_id)]
        id: HotelId,
    },

    /// Reserve one room without creating a reservation record
    ReserveRoom {
        #[arg(value_parser = parse_hotel_id)]
        id: HotelId,
    },

    /// Release one reserved room without touching reservation records
    CancelRoom {
        #[arg(value_parser = parse_hotel_id)]
        id: HotelId,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct HotelFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub total_rooms: Option<u32>,
}

impl From<HotelFields> for HotelPatch {
    fn from(fields: HotelFields) -> Self {
        Self {
            name: non_blank(fields.name),
            location: non_blank(fields.location),
            total_rooms: fields.total_rooms,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Create a customer
    Create {
        #[arg(value_parser = parse_customer_id)]
        id: CustomerId,
        name: String,
        email: String,
    },

    /// Show a customer
    Show {
        #[arg(value_parser = parse_customer_id)]
        id: CustomerId,
    },

    /// Change a customer; blank or omitted fields stay as they are
    Modify {
        #[arg(value_parser = parse_customer_id)]
        id: CustomerId,
        #[command(flatten)]
        fields: CustomerFields,
    },

    /// Delete a customer
    Delete {
        #[arg(value_parser = parse_customer_id)]
        id: CustomerId,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<CustomerFields> for CustomerPatch {
    fn from(fields: CustomerFields) -> Self {
        Self {
            name: non_blank(fields.name),
            email: non_blank(fields.email),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ReservationCommand {
    /// Reserve a room at a hotel for a customer
    Create {
        #[arg(value_parser = parse_hotel_id)]
        hotel_id: HotelId,
        #[arg(value_parser = parse_customer_id)]
        customer_id: CustomerId,
        /// Reservation id (generated when omitted)
        #[arg(long, value_parser = parse_reservation_id)]
        id: Option<ReservationId>,
        /// Reservation date, YYYY-MM-DD (today when omitted)
        #[arg(long, value_parser = parse_reservation_date)]
        date: Option<ReservationDate>,
    },

    /// Show a reservation
    Show {
        #[arg(value_parser = parse_reservation_id)]
        id: ReservationId,
    },

    /// Cancel a reservation and release its room
    Cancel {
        #[arg(value_parser = parse_reservation_id)]
        id: ReservationId,
    },
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_hotel_id(value: &str) -> Result<HotelId, ValueObjectError> {
    HotelId::new(value.to_string())
}

fn parse_customer_id(value: &str) -> Result<CustomerId, ValueObjectError> {
    CustomerId::new(value.to_string())
}

fn parse_reservation_id(value: &str) -> Result<ReservationId, ValueObjectError> {
    ReservationId::new(value.to_string())
}

fn parse_reservation_date(value: &str) -> Result<ReservationDate, ValueObjectError> {
    ReservationDate::parse(value)
}
