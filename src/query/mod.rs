pub mod command;
pub mod dispatcher;
pub mod error;
pub mod response;

pub use command::{Command, USAGE};
pub use dispatcher::QueryDispatcher;
pub use error::{QueryError, RpcErrorBody};
pub use response::{
  CheckView, CurrentRoundView, HistoryRoundView, PayoutScheduleView, PayoutView, QueryResponse,
  RpcReply, SnapshotView, TermRewardView,
};
