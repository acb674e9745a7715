//! Depot token generation and validation

use rand::Rng;
use thiserror::Error;

/// URL-safe token alphabet, without the look-alike characters `0`, `1`, `I`,
/// `O` and `l`.
pub const ALPHABET: &[u8; 57] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of characters in every issued token
pub const TOKEN_LEN: usize = 12;

/// Error type for token validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token cannot be empty")]
    Empty,
    #[error("Token must be exactly {TOKEN_LEN} characters, got {0}")]
    InvalidLength(usize),
    #[error("Token contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Generate a fresh token.
///
/// Each character is drawn uniformly from [`ALPHABET`] using the thread-local
/// CSPRNG, giving roughly 70 bits of entropy per token.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validate a caller-supplied token before it is used as a depot path.
/// Only strings that [`generate`] could have produced are accepted, so
/// separators, `.`/`..` segments and null bytes never reach the filesystem.
pub fn validate(token: &str) -> Result<(), TokenError> {
    if token.is_empty() {
        return Err(TokenError::Empty);
    }

    if let Some(c) = token.chars().find(|c| !is_alphabet_char(*c)) {
        return Err(TokenError::InvalidCharacter(c));
    }

    // All characters are ASCII at this point, so byte length == char count
    if token.len() != TOKEN_LEN {
        return Err(TokenError::InvalidLength(token.len()));
    }

    Ok(())
}

fn is_alphabet_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}
