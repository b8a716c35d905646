use crate::query::error::QueryError;

pub const USAGE: &str = "rewards \"command\"...
Available commands:
  current           - Print information about the current reward cycle.
  history           - Print the results of all past reward cycles.
  payouts  :round   - Print a list of all paid rewards in the past cycle :round
  snapshot :round   - Print a list of all addresses with their balances from the end of the past cycle :round.
  check :address    - Check the given :address for eligibility in the current rewards cycle.
  termrewards       - List every locked term deposit with its level and annual return.";

/// Parsed command. Round arguments stay raw: their valid range is only known
/// once the current round has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Current,
  History,
  /// `None` when the argument count is wrong.
  Payouts(Option<String>),
  Snapshot(Option<String>),
  Check(String),
  TermRewards,
}

impl Command {
  pub fn parse(name: &str, args: &[String]) -> Result<Self, QueryError> {
    match name {
      "current" => Ok(Command::Current),
      "history" => Ok(Command::History),
      "payouts" => Ok(Command::Payouts(single(args))),
      "snapshot" => Ok(Command::Snapshot(single(args))),
      "check" => single(args)
        .map(Command::Check)
        .ok_or_else(|| QueryError::InvalidParameter("Address required.".to_string())),
      "termrewards" => Ok(Command::TermRewards),
      _ => Err(QueryError::InvalidParameter(USAGE.to_string())),
    }
  }
}

fn single(args: &[String]) -> Option<String> {
  match args {
    [only] => Some(only.clone()),
    _ => None,
  }
}
