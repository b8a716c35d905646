mod r#trait;
mod memory;
#[cfg(feature = "rocksdb-backend")]
mod rocksdb;

// Store contracts
pub use r#trait::{
    LedgerEntryStore, ResultArchive, ResultList, RoundHistoryStore, StoreError,
    TermDepositRegistry,
};

// Store implementations
pub use memory::{MemoryEntryStore, MemoryResultArchive, MemoryRoundHistory, MemoryTermRegistry};
#[cfg(feature = "rocksdb-backend")]
pub use rocksdb::RocksDBResultArchive;
