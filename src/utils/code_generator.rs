//! Random short code generation.
//!
//! Generated codes use the same alphabet and length window as caller-supplied
//! codes, so a generated code always passes
//! [`crate::utils::validation::is_valid_code`]. Collision handling is the
//! caller's job: [`crate::application::services::LinkService`] retries a
//! bounded number of times and the database unique constraint is the backstop.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated codes. Sits inside the accepted 6-8 character window.
pub const GENERATED_CODE_LEN: usize = 7;

/// Generates a random alphanumeric short code.
///
/// 62^7 possible codes makes accidental collisions rare at the scale this
/// service targets; the retry loop in the service covers the rest.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_CODE_LEN)
        .map(char::from)
        .collect()
}
