//! UseCase: ホテルストア
//!
//! ホテルの CRUD に加えて、部屋の予約・予約取消（予約済み部屋数の増減）を提供します。
//! 予約済み部屋数はこのストアの `reserve_room` / `cancel_reservation` からのみ変化します。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - HotelStore の CRUD 操作と容量操作
//!
//! ### なぜこのテストが必要か
//! - 予約済み部屋数が総部屋数を超えないこと（過剰予約の防止）を保証する
//! - 「ホテルが存在しない」と「満室」が区別されることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成・参照・部分更新・削除・予約・予約取消
//! - 異常系：満室での予約、予約ゼロでの取消、存在しないホテル

use std::sync::Arc;

use crate::domain::{
    Hotel, HotelCollection, HotelError, HotelId, HotelPatch, HotelRepository, RepositoryError,
};

use super::error::HotelStoreError;

/// ホテルストア
#[derive(Clone)]
pub struct HotelStore {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn HotelRepository>,
}

impl HotelStore {
    /// 新しい HotelStore を作成
    pub fn new(repository: Arc<dyn HotelRepository>) -> Self {
        Self { repository }
    }

    /// Load the whole hotel collection
    pub fn load(&self) -> Result<HotelCollection, RepositoryError> {
        self.repository.load()
    }

    /// Persist the whole hotel collection
    pub fn save(&self, hotels: &HotelCollection) -> Result<(), RepositoryError> {
        self.repository.save(hotels)
    }

    /// Register a new hotel with no reserved rooms
    ///
    /// # Errors
    ///
    /// * `HotelStoreError::AlreadyExists` - the id is taken; nothing is saved
    pub fn create(
        &self,
        id: HotelId,
        name: String,
        location: String,
        total_rooms: u32,
    ) -> Result<Hotel, HotelStoreError> {
        let mut hotels = self.load()?;
        if hotels.contains_key(&id) {
            tracing::warn!("Hotel '{}' already exists", id);
            return Err(HotelStoreError::AlreadyExists(id));
        }

        let hotel = Hotel::new(id.clone(), name, location, total_rooms);
        hotels.insert(id, hotel.clone());
        self.save(&hotels)?;

        tracing::info!("Created hotel '{}' with {} rooms", hotel.id, total_rooms);
        Ok(hotel)
    }

    /// Remove a hotel, returning the removed record
    ///
    /// Reservations that still point at the hotel are left as they are.
    pub fn delete(&self, id: &HotelId) -> Result<Hotel, HotelStoreError> {
        let mut hotels = self.load()?;
        let Some(hotel) = hotels.remove(id) else {
            tracing::warn!("Hotel '{}' not found", id);
            return Err(HotelStoreError::NotFound(id.clone()));
        };
        self.save(&hotels)?;

        tracing::info!("Deleted hotel '{}'", id);
        Ok(hotel)
    }

    /// Snapshot of one hotel
    pub fn get(&self, id: &HotelId) -> Result<Hotel, HotelStoreError> {
        self.load()?.remove(id).ok_or_else(|| {
            tracing::warn!("Hotel '{}' not found", id);
            HotelStoreError::NotFound(id.clone())
        })
    }

    /// Formatted snapshot of one hotel
    pub fn get_info(&self, id: &HotelId) -> Result<String, HotelStoreError> {
        self.get(id).map(|hotel| hotel.to_string())
    }

    /// Whether a hotel with `id` is registered
    pub fn exists(&self, id: &HotelId) -> Result<bool, RepositoryError> {
        Ok(self.load()?.contains_key(id))
    }

    /// Apply a partial update; fields absent from `patch` keep their values
    ///
    /// # Errors
    ///
    /// * `HotelStoreError::Rejected` - the new room total is below the reserved rooms
    ///
    /// An empty patch returns the current record without saving.
    pub fn modify(&self, id: &HotelId, patch: HotelPatch) -> Result<Hotel, HotelStoreError> {
        if patch.is_empty() {
            tracing::debug!("Nothing to change for hotel '{}'", id);
            return self.get(id);
        }
        self.update(id, |hotel| hotel.apply_patch(patch))
            .inspect(|_| tracing::info!("Modified hotel '{}'", id))
    }

    /// Reserve one room
    ///
    /// # Errors
    ///
    /// * `HotelStoreError::NotFound` - no such hotel
    /// * `HotelStoreError::Rejected` with `HotelError::FullyBooked` - no room left
    pub fn reserve_room(&self, id: &HotelId) -> Result<Hotel, HotelStoreError> {
        self.update(id, Hotel::reserve_room).inspect(|hotel| {
            tracing::info!(
                "Reserved a room at hotel '{}' ({} of {} reserved)",
                id,
                hotel.reserved_rooms(),
                hotel.total_rooms()
            )
        })
    }

    /// Release one reserved room
    ///
    /// # Errors
    ///
    /// * `HotelStoreError::NotFound` - no such hotel
    /// * `HotelStoreError::Rejected` with `HotelError::NoReservedRooms` - nothing reserved
    pub fn cancel_reservation(&self, id: &HotelId) -> Result<Hotel, HotelStoreError> {
        self.update(id, Hotel::cancel_reservation).inspect(|hotel| {
            tracing::info!(
                "Released a room at hotel '{}' ({} of {} reserved)",
                id,
                hotel.reserved_rooms(),
                hotel.total_rooms()
            )
        })
    }

    /// Load, change one hotel, save. Nothing is saved when `change` fails.
    fn update<F>(&self, id: &HotelId, change: F) -> Result<Hotel, HotelStoreError>
    where
        F: FnOnce(&mut Hotel) -> Result<(), HotelError>,
    {
        let mut hotels = self.load()?;
        let Some(hotel) = hotels.get_mut(id) else {
            tracing::warn!("Hotel '{}' not found", id);
            return Err(HotelStoreError::NotFound(id.clone()));
        };

        if let Err(source) = change(hotel) {
            tracing::warn!("Hotel '{}' rejected the change: {}", id, source);
            return Err(HotelStoreError::Rejected {
                hotel_id: id.clone(),
                source,
            });
        }

        let updated = hotel.clone();
        self.save(&hotels)?;
        Ok(updated)
    }
}
