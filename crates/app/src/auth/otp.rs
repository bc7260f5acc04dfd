//! One-time password generation.

use jiff::{SignedDuration, Timestamp};
use rand::Rng;

/// Number of digits in an OTP code.
pub const OTP_CODE_DIGITS: usize = 6;

/// How long a code stays valid.
pub const OTP_TTL_MINUTES: i64 = 5;

/// Generate a random 6-digit numeric code.
#[must_use]
pub fn generate_otp_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Expiry timestamp for a code issued at `now`.
#[must_use]
pub fn otp_expiry(now: Timestamp) -> Timestamp {
    now.saturating_add(SignedDuration::from_mins(OTP_TTL_MINUTES))
        .unwrap_or(Timestamp::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits() {
        for _attempt in 0..100 {
            let code = generate_otp_code();

            assert_eq!(code.len(), OTP_CODE_DIGITS, "code {code} has wrong length");
            assert!(
                code.chars().all(|c| c.is_ascii_digit()),
                "code {code} is not numeric"
            );
            assert_ne!(code.chars().next(), Some('0'), "codes never lead with 0");
        }
    }

    #[test]
    fn expiry_is_five_minutes_out() {
        let now = Timestamp::UNIX_EPOCH;

        assert_eq!(otp_expiry(now).as_second(), 300);
    }
}
