//! Types shared between the filedrop server and its tooling

pub mod token;

pub use token::{generate, validate, TokenError, ALPHABET, TOKEN_LEN};
