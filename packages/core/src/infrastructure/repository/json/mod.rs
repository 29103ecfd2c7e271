//! JSON file Repository 実装
//!
//! コレクション全体を 1 つの JSON ファイルとして読み書きします。
//!
//! - ファイルが存在しない場合は空のコレクションとして扱う
//! - 内容が壊れている場合も空のコレクションとして扱い、エラーログを出力する
//! - それ以外の I/O エラーは `RepositoryError::Io` として呼び出し元に返す

mod customer;
mod hotel;
mod reservation;

use std::{
    collections::BTreeMap,
    fs, io,
    marker::PhantomData,
    path::PathBuf,
};

use crate::{
    domain::RepositoryError,
    infrastructure::dto::{CustomerRecord, HotelRecord, Record, RecordError, ReservationRecord},
};

/// Customer collection stored as JSON
pub type JsonCustomerRepository = JsonFileRepository<CustomerRecord>;

/// Hotel collection stored as JSON
pub type JsonHotelRepository = JsonFileRepository<HotelRecord>;

/// Reservation collection stored as JSON
pub type JsonReservationRepository = JsonFileRepository<ReservationRecord>;

/// JSON file backed storage for one entity collection
#[derive(Debug, Clone)]
pub struct JsonFileRepository<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileRepository<R> {
    /// 新しい JsonFileRepository を作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Read the whole collection
    pub fn load_entities(&self) -> Result<BTreeMap<R::Key, R::Entity>, RepositoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No {} file at '{}', starting empty",
                    R::KIND,
                    self.path.display()
                );
                return Ok(BTreeMap::new());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Ok(self.discard_malformed(e));
            }
            Err(source) => {
                return Err(RepositoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let decoded = String::from_utf8(bytes)
            .map_err(RecordError::from)
            .and_then(|content| decode::<R>(&content));
        match decoded {
            Ok(entities) => Ok(entities),
            Err(e) => Ok(self.discard_malformed(e)),
        }
    }

    fn discard_malformed(&self, reason: impl std::fmt::Display) -> BTreeMap<R::Key, R::Entity> {
        tracing::error!(
            "Invalid {} data in '{}', treating it as empty: {}",
            R::KIND,
            self.path.display(),
            reason
        );
        BTreeMap::new()
    }

    /// Overwrite the file with the whole collection
    pub fn save_entities(
        &self,
        entities: &BTreeMap<R::Key, R::Entity>,
    ) -> Result<(), RepositoryError> {
        let records: BTreeMap<String, R> = entities
            .values()
            .map(|entity| {
                let record = R::from_entity(entity);
                (record.id().to_string(), record)
            })
            .collect();

        let mut content =
            serde_json::to_string_pretty(&records).map_err(|source| RepositoryError::Encode {
                path: self.path.clone(),
                source,
            })?;
        content.push('\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| RepositoryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, content).map_err(|source| RepositoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Saved {} {} record(s) to '{}'",
            entities.len(),
            R::KIND,
            self.path.display()
        );
        Ok(())
    }
}

fn decode<R: Record>(content: &str) -> Result<BTreeMap<R::Key, R::Entity>, RecordError> {
    let records: BTreeMap<String, R> = serde_json::from_str(content)?;
    records
        .into_iter()
        .map(|(key, record)| {
            if key != record.id() {
                return Err(RecordError::KeyMismatch {
                    key,
                    id: record.id().to_string(),
                });
            }
            let entity = record.into_entity()?;
            Ok((R::key(&entity), entity))
        })
        .collect()
}
