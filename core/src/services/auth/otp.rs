//! One-time code generation.

use rand::Rng;

/// Length of a generated one-time code, in decimal digits
pub const OTP_LENGTH: usize = 6;

/// Generate a uniformly random 6-digit one-time code
///
/// The range is [100000, 999999] inclusive: never fewer than six digits,
/// never a leading zero.
pub fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}
