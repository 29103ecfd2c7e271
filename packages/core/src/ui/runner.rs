//! Command dispatch.
//!
//! Each command calls one store operation, turns its result into a message,
//! overwrites the results file with it and echoes it to stdout.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::{
    domain::{CustomerPatch, HotelPatch, ReservationIdFactory},
    system::ReservationSystem,
    usecase::{CustomerStoreError, HotelStoreError, ReservationStoreError},
};

use super::{
    cli::{Cli, Command, CustomerCommand, HotelCommand, ReservationCommand},
    report::ResultWriter,
};

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Not found, duplicate id, no capacity, ...
    Rejected,
    /// The record files could not be read or written
    StorageFailure,
}

/// Message and status of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
}

impl Outcome {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    fn failure<E: StoreFailure>(context: impl fmt::Display, error: &E) -> Self {
        let status = if error.is_storage_failure() {
            Status::StorageFailure
        } else {
            Status::Rejected
        };
        Self {
            status,
            message: format!("{}: {}", context, error),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to write results to '{}': {source}", .path.display())]
    ResultFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Store errors as seen by the command line
trait StoreFailure: fmt::Display {
    fn is_storage_failure(&self) -> bool;
}

impl StoreFailure for CustomerStoreError {
    fn is_storage_failure(&self) -> bool {
        CustomerStoreError::is_storage_failure(self)
    }
}

impl StoreFailure for HotelStoreError {
    fn is_storage_failure(&self) -> bool {
        HotelStoreError::is_storage_failure(self)
    }
}

impl StoreFailure for ReservationStoreError {
    fn is_storage_failure(&self) -> bool {
        ReservationStoreError::is_storage_failure(self)
    }
}

/// Run the parsed command line against the configured files
pub fn run(cli: Cli) -> Result<Outcome, RunError> {
    let config = cli.store_config();
    let system = ReservationSystem::open(&config);

    let outcome = execute(&system, cli.command);

    let writer = ResultWriter::new(&config.result_file);
    writer
        .write(&outcome.message)
        .map_err(|source| RunError::ResultFile {
            path: writer.path().to_path_buf(),
            source,
        })?;
    println!("{}", outcome.message);

    Ok(outcome)
}

/// Execute one command and describe its result
pub fn execute(system: &ReservationSystem, command: Command) -> Outcome {
    match command {
        Command::Hotel(command) => execute_hotel(system, command),
        Command::Customer(command) => execute_customer(system, command),
        Command::Reservation(command) => execute_reservation(system, command),
    }
}

fn execute_hotel(system: &ReservationSystem, command: HotelCommand) -> Outcome {
    let hotels = &system.hotels;
    match command {
        HotelCommand::Create {
            id,
            name,
            location,
            total_rooms,
        } => match hotels.create(id.clone(), name, location, total_rooms) {
            Ok(_) => Outcome::success(format!("Hotel {} created successfully.", id)),
            Err(e) => Outcome::failure(format_args!("Could not create hotel {}", id), &e),
        },
        HotelCommand::Show { id } => match hotels.get_info(&id) {
            Ok(info) => Outcome::success(format!("Hotel information:\n{}", info)),
            Err(e) => Outcome::failure(format_args!("Could not show hotel {}", id), &e),
        },
        HotelCommand::Modify { id, fields } => {
            match hotels.modify(&id, HotelPatch::from(fields)) {
                Ok(_) => Outcome::success(format!("Hotel {} modified successfully.", id)),
                Err(e) => Outcome::failure(format_args!("Could not modify hotel {}", id), &e),
            }
        }
        HotelCommand::Delete { id } => match hotels.delete(&id) {
            Ok(_) => Outcome::success(format!("Hotel {} deleted successfully.", id)),
            Err(e) => Outcome::failure(format_args!("Could not delete hotel {}", id), &e),
        },
        HotelCommand::ReserveRoom { id } => match hotels.reserve_room(&id) {
            Ok(hotel) => Outcome::success(format!(
                "Room reserved at hotel {} ({} available).",
                id,
                hotel.available_rooms()
            )),
            Err(e) => Outcome::failure(format_args!("Could not reserve a room at hotel {}", id), &e),
        },
        HotelCommand::CancelRoom { id } => match hotels.cancel_reservation(&id) {
            Ok(hotel) => Outcome::success(format!(
                "Room reservation cancelled at hotel {} ({} available).",
                id,
                hotel.available_rooms()
            )),
            Err(e) => Outcome::failure(
                format_args!("Could not cancel a room reservation at hotel {}", id),
                &e,
            ),
        },
    }
}

fn execute_customer(system: &ReservationSystem, command: CustomerCommand) -> Outcome {
    let customers = &system.customers;
    match command {
        CustomerCommand::Create { id, name, email } => {
            match customers.create(id.clone(), name, email) {
                Ok(_) => Outcome::success(format!("Customer {} created successfully.", id)),
                Err(e) => Outcome::failure(format_args!("Could not create customer {}", id), &e),
            }
        }
        CustomerCommand::Show { id } => match customers.get_info(&id) {
            Ok(info) => Outcome::success(format!("Customer information:\n{}", info)),
            Err(e) => Outcome::failure(format_args!("Could not show customer {}", id), &e),
        },
        CustomerCommand::Modify { id, fields } => {
            match customers.modify(&id, CustomerPatch::from(fields)) {
                Ok(_) => Outcome::success(format!("Customer {} modified successfully.", id)),
                Err(e) => Outcome::failure(format_args!("Could not modify customer {}", id), &e),
            }
        }
        CustomerCommand::Delete { id } => match customers.delete(&id) {
            Ok(_) => Outcome::success(format!("Customer {} deleted successfully.", id)),
            Err(e) => Outcome::failure(format_args!("Could not delete customer {}", id), &e),
        },
    }
}

fn execute_reservation(system: &ReservationSystem, command: ReservationCommand) -> Outcome {
    let reservations = &system.reservations;
    match command {
        ReservationCommand::Create {
            hotel_id,
            customer_id,
            id,
            date,
        } => {
            let id = id.unwrap_or_else(ReservationIdFactory::generate);
            match reservations.create(id.clone(), hotel_id, customer_id, date) {
                Ok(reservation) => Outcome::success(format!(
                    "Reservation {} created for {}.",
                    id,
                    reservation.date()
                )),
                Err(e) => Outcome::failure(format_args!("Could not create reservation {}", id), &e),
            }
        }
        ReservationCommand::Show { id } => match reservations.get_info(&id) {
            Ok(info) => Outcome::success(format!("Reservation information:\n{}", info)),
            Err(e) => Outcome::failure(format_args!("Could not show reservation {}", id), &e),
        },
        ReservationCommand::Cancel { id } => match reservations.cancel(&id) {
            Ok(_) => Outcome::success(format!("Reservation {} cancelled.", id)),
            Err(e) => Outcome::failure(format_args!("Could not cancel reservation {}", id), &e),
        },
    }
}
