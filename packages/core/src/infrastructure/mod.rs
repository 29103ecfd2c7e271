//! Infrastructure layer: persistence formats and repository implementations.

pub mod dto;
pub mod repository;
