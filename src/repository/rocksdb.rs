use crate::ledger::ResultEntry;
use crate::repository::r#trait::{ResultArchive, ResultList, StoreError};
use crate::types::{AppError, RoundNumber};
use log::info;
use rocksdb::DB;
use std::path::Path;

/// RocksDB backed archive of sealed round lists, stored as JSON values.
pub struct RocksDBResultArchive {
    db: DB,
}

impl RocksDBResultArchive {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let db = DB::open_default(path.as_ref())
            .map_err(|e| AppError::Storage(format!("Failed to open RocksDB: {}", e)))?;
        info!("[Archive] Opened RocksDB at {}", path.as_ref().display());
        Ok(Self { db })
    }
}

impl ResultArchive for RocksDBResultArchive {
    fn load(&self, list: ResultList, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError> {
        let key = list.key(round);
        match self.db.get(key.as_bytes()) {
            Ok(Some(value)) => serde_json::from_slice(&value)
                .map_err(|e| StoreError::Unavailable(format!("Corrupt list {}: {}", key, e))),
            Ok(None) => Err(StoreError::Unavailable(format!("Missing list {}", key))),
            Err(e) => Err(StoreError::Unavailable(format!("RocksDB get failed: {}", e))),
        }
    }

    fn save(
        &mut self,
        list: ResultList,
        round: RoundNumber,
        entries: &[ResultEntry],
    ) -> Result<(), StoreError> {
        let key = list.key(round);
        let value = serde_json::to_vec(entries)
            .map_err(|e| StoreError::Unavailable(format!("Encode failed for {}: {}", key, e)))?;
        self.db
            .put(key.as_bytes(), value)
            .map_err(|e| StoreError::Unavailable(format!("RocksDB put failed: {}", e)))
    }

    fn remove(&mut self, list: ResultList, round: RoundNumber) -> Result<(), StoreError> {
        self.db
            .delete(list.key(round).as_bytes())
            .map_err(|e| StoreError::Unavailable(format!("RocksDB delete failed: {}", e)))
    }
}
