//! Shortcode candidate generation.
//!
//! Pure and stateless: every character is drawn independently and uniformly
//! from the alphabet. Uniqueness against the store is the allocator's job
//! ([`crate::application::allocator::ShortcodeAllocator`]), not this
//! module's.

use crate::error::AppError;
use rand::Rng;

/// Default alphabet: lowercase letters, digits, uppercase letters.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a random candidate code of exactly `length` characters drawn
/// from `alphabet`.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] if `length` is zero or `alphabet`
/// is empty.
///
/// # Examples
///
/// ```
/// use shortener_core::utils::code_generator::{DEFAULT_ALPHABET, generate_code};
///
/// let code = generate_code(5, DEFAULT_ALPHABET).unwrap();
/// assert_eq!(code.chars().count(), 5);
/// assert!(code.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
/// ```
pub fn generate_code(length: usize, alphabet: &str) -> Result<String, AppError> {
    if length == 0 {
        return Err(AppError::invalid_argument("code length must be positive"));
    }

    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(AppError::invalid_argument("alphabet must not be empty"));
    }

    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect())
}
