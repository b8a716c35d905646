pub mod entry;
pub mod round;
pub mod term;

pub use entry::{Address, LedgerEntry, ResultEntry};
pub use round::{PayoutSchedule, PayoutShape, Round, SealedRound};
pub use term::{TermEntry, TermTier};
