/**
* filename : address
* description: Decoding of user supplied address strings.
**/

use crate::ledger::Address;

const BASE58_CHARS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const MIN_LEN: usize = 26;
const MAX_LEN: usize = 35;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid address provided: {0}")]
pub struct InvalidAddress(pub String);

pub trait AddressCodec: Send + Sync {
  fn decode(&self, input: &str) -> Result<Address, InvalidAddress>;
}

/// Legacy base58 addresses, accepted only with one of the network prefixes.
#[derive(Debug, Clone)]
pub struct Base58AddressCodec {
  prefixes: Vec<char>,
}

impl Base58AddressCodec {
  pub fn new(prefixes: Vec<char>) -> Self {
    Self { prefixes }
  }
}

impl AddressCodec for Base58AddressCodec {
  fn decode(&self, input: &str) -> Result<Address, InvalidAddress> {
    let candidate = input.trim();
    let invalid = || InvalidAddress(input.to_string());

    if candidate.len() < MIN_LEN || candidate.len() > MAX_LEN {
      return Err(invalid());
    }
    if !candidate.chars().all(|c| BASE58_CHARS.contains(c)) {
      return Err(invalid());
    }
    match candidate.chars().next() {
      Some(first) if self.prefixes.contains(&first) => Ok(Address::new_unchecked(candidate)),
      _ => Err(invalid()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn codec() -> Base58AddressCodec {
    Base58AddressCodec::new(vec!['S'])
  }

  #[test]
  fn accepts_prefixed_base58() {
    let address = codec().decode("SXun9XDHLdBhG4Yd1ueZfLfRpC9kZgwT1b").unwrap();
    assert_eq!(address.as_str(), "SXun9XDHLdBhG4Yd1ueZfLfRpC9kZgwT1b");
  }

  #[test]
  fn rejects_foreign_prefix_and_bad_chars() {
    assert!(codec().decode("1BoatSLRHtKNngkdXEeobR76b53LETtpyT").is_err());
    // '0' and 'l' are outside the base58 alphabet
    assert!(codec().decode("SXun9XDHLdBhG4Yd1ueZfLfRpC9kZgw0lb").is_err());
    assert!(codec().decode("Sshort").is_err());
    assert!(codec().decode("").is_err());
  }
}
