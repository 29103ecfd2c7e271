//! UseCase 層
//!
//! 顧客・ホテル・予約の各ストアを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の Repository trait を通じて永続化します。

pub mod customer;
pub mod error;
pub mod hotel;
pub mod reservation;

pub use customer::CustomerStore;
pub use error::{CustomerStoreError, HotelStoreError, ReservationStoreError};
pub use hotel::HotelStore;
pub use reservation::ReservationStore;
