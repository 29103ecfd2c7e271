//! UseCase: 予約ストア
//!
//! 予約の作成・取消はホテルストアと顧客ストアをまたいで動作し、
//! 「ホテルの予約済み部屋数 = そのホテルを参照する有効な予約の数」を保ちます。
//!
//! 作成の手順:
//! 1. ホテルの存在確認
//! 2. 顧客の存在確認
//! 3. ホテルの部屋を予約（ホテルを即時保存）
//! 4. 予約 ID の重複確認と予約の保存
//!
//! 手順 4 が失敗した場合は手順 3 の部屋予約を取り消します（補償処理）。
//! ファイル間のトランザクションは無いため、補償処理中にプロセスが落ちると
//! 予約済み部屋数が実際の予約数より多いまま残ります。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReservationStore::create() / cancel() / get_info()
//!
//! ### なぜこのテストが必要か
//! - 予約の作成・取消でホテルの予約済み部屋数が必ず連動することを保証する
//! - 失敗した作成が部屋を消費しないことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成・取消・再作成
//! - 異常系：存在しないホテル / 顧客、満室、予約 ID の重複、保存失敗
//! - エッジケース：ホテル削除後の予約取消、予約済み部屋数のずれ、ホテル保存失敗時の取消

use std::sync::Arc;

use crate::domain::{
    CustomerId, HotelError, HotelId, RepositoryError, Reservation, ReservationCollection,
    ReservationDate, ReservationId, ReservationRepository,
};

use super::{
    customer::CustomerStore,
    error::{HotelStoreError, ReservationStoreError},
    hotel::HotelStore,
};

/// 予約ストア
#[derive(Clone)]
pub struct ReservationStore {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ReservationRepository>,
    hotels: HotelStore,
    customers: CustomerStore,
}

impl ReservationStore {
    /// 新しい ReservationStore を作成
    pub fn new(
        repository: Arc<dyn ReservationRepository>,
        hotels: HotelStore,
        customers: CustomerStore,
    ) -> Self {
        Self {
            repository,
            hotels,
            customers,
        }
    }

    /// Load the whole reservation collection
    pub fn load(&self) -> Result<ReservationCollection, RepositoryError> {
        self.repository.load()
    }

    /// Persist the whole reservation collection
    pub fn save(&self, reservations: &ReservationCollection) -> Result<(), RepositoryError> {
        self.repository.save(reservations)
    }

    /// Reserve a room at `hotel_id` for `customer_id`
    ///
    /// `date` defaults to today.
    ///
    /// # Errors
    ///
    /// * `ReservationStoreError::HotelNotFound` / `CustomerNotFound` - dangling reference
    /// * `ReservationStoreError::NoAvailability` - the hotel is fully booked
    /// * `ReservationStoreError::AlreadyExists` - the id is taken; the room is released again
    pub fn create(
        &self,
        id: ReservationId,
        hotel_id: HotelId,
        customer_id: CustomerId,
        date: Option<ReservationDate>,
    ) -> Result<Reservation, ReservationStoreError> {
        // 1. ホテルの存在確認
        if !self.hotels.exists(&hotel_id)? {
            tracing::warn!("Hotel '{}' not found", hotel_id);
            return Err(ReservationStoreError::HotelNotFound(hotel_id));
        }

        // 2. 顧客の存在確認
        if !self.customers.exists(&customer_id)? {
            tracing::warn!("Customer '{}' not found", customer_id);
            return Err(ReservationStoreError::CustomerNotFound(customer_id));
        }

        // 3. 部屋を予約（ホテルはここで保存される）
        self.hotels
            .reserve_room(&hotel_id)
            .map_err(|e| Self::map_reserve_error(&hotel_id, e))?;

        // 4. 予約を保存。失敗したら部屋を戻す
        let reservation = Reservation::new(
            id,
            hotel_id,
            customer_id,
            date.unwrap_or_else(ReservationDate::today),
        );
        if let Err(e) = self.commit(&reservation) {
            self.release_room(reservation.hotel_id());
            return Err(e);
        }

        tracing::info!(
            "Created reservation '{}' (hotel '{}', customer '{}', {})",
            reservation.id(),
            reservation.hotel_id(),
            reservation.customer_id(),
            reservation.date()
        );
        Ok(reservation)
    }

    /// Cancel a reservation and release its room
    ///
    /// A hotel that no longer exists is skipped silently.
    pub fn cancel(&self, id: &ReservationId) -> Result<Reservation, ReservationStoreError> {
        let mut reservations = self.load()?;
        let Some(reservation) = reservations.remove(id) else {
            tracing::warn!("Reservation '{}' not found", id);
            return Err(ReservationStoreError::NotFound(id.clone()));
        };
        self.save(&reservations)?;

        match self.hotels.cancel_reservation(reservation.hotel_id()) {
            Ok(_) => {}
            Err(HotelStoreError::NotFound(hotel_id)) => {
                tracing::debug!(
                    "Hotel '{}' of reservation '{}' no longer exists",
                    hotel_id,
                    id
                );
            }
            Err(HotelStoreError::Repository(e)) => {
                tracing::error!(
                    "Reservation '{}' was removed but its room at hotel '{}' was not released: {}",
                    id,
                    reservation.hotel_id(),
                    e
                );
                return Err(ReservationStoreError::Repository(e));
            }
            Err(e) => {
                tracing::warn!(
                    "Room counter of hotel '{}' is out of sync: {}",
                    reservation.hotel_id(),
                    e
                );
            }
        }

        tracing::info!("Cancelled reservation '{}'", id);
        Ok(reservation)
    }

    /// Snapshot of one reservation
    pub fn get(&self, id: &ReservationId) -> Result<Reservation, ReservationStoreError> {
        self.load()?.remove(id).ok_or_else(|| {
            tracing::warn!("Reservation '{}' not found", id);
            ReservationStoreError::NotFound(id.clone())
        })
    }

    /// Formatted snapshot of one reservation
    pub fn get_info(&self, id: &ReservationId) -> Result<String, ReservationStoreError> {
        self.get(id).map(|reservation| reservation.to_string())
    }

    fn commit(&self, reservation: &Reservation) -> Result<(), ReservationStoreError> {
        let mut reservations = self.load()?;
        if reservations.contains_key(reservation.id()) {
            tracing::warn!("Reservation '{}' already exists", reservation.id());
            return Err(ReservationStoreError::AlreadyExists(reservation.id().clone()));
        }
        reservations.insert(reservation.id().clone(), reservation.clone());
        self.save(&reservations)?;
        Ok(())
    }

    /// Undo step 3 of `create`
    fn release_room(&self, hotel_id: &HotelId) {
        match self.hotels.cancel_reservation(hotel_id) {
            Ok(_) => tracing::debug!("Released the room taken at hotel '{}'", hotel_id),
            Err(e) => tracing::error!(
                "Failed to release the room taken at hotel '{}': {}",
                hotel_id,
                e
            ),
        }
    }

    fn map_reserve_error(hotel_id: &HotelId, error: HotelStoreError) -> ReservationStoreError {
        match error {
            HotelStoreError::NotFound(id) => ReservationStoreError::HotelNotFound(id),
            HotelStoreError::Rejected {
                source: HotelError::FullyBooked { .. },
                ..
            } => {
                tracing::warn!("No rooms available at hotel '{}'", hotel_id);
                ReservationStoreError::NoAvailability(hotel_id.clone())
            }
            HotelStoreError::Repository(e) => ReservationStoreError::Repository(e),
            other => ReservationStoreError::Hotel(other),
        }
    }
}
