use rand::RngExt;

use crate::delivery::{DeliveryQueue, OtpEmail};
use crate::domain::repository::OtpCache;
use crate::domain::types::{OTP_LEN, OTP_TTL_SECS, validate_email};
use crate::error::{AccountsServiceError, FieldErrors};

/// Charset for generating OTP codes (numeric digits).
const CHARSET: &[u8] = b"0123456789";

/// `rand::rng()` is OS-seeded; code guessing within the 300 s window is the
/// threat model here, so the generator must stay on a CSPRNG.
fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── IssueOtp ─────────────────────────────────────────────────────────────────

pub struct IssueOtpInput {
    pub email: String,
}

pub struct IssueOtpUseCase<C: OtpCache> {
    pub cache: C,
    pub delivery: DeliveryQueue,
}

impl<C: OtpCache> IssueOtpUseCase<C> {
    /// Accepted for any well-formed address, registered or not, so account
    /// existence does not leak. Re-issue overwrites the prior entry: latest
    /// code wins.
    pub async fn execute(&self, input: IssueOtpInput) -> Result<(), AccountsServiceError> {
        let mut errors = FieldErrors::new();
        if !validate_email(&input.email) {
            errors.push("email", "enter a valid email address");
        }
        errors.into_result()?;

        let code = generate_code();
        self.cache.put(&input.email, &code, OTP_TTL_SECS).await?;

        // Fire-and-forget: the response does not wait on delivery.
        self.delivery.enqueue(OtpEmail {
            recipient: input.email,
            code,
        });
        Ok(())
    }
}

// ── ValidateOtp ──────────────────────────────────────────────────────────────

pub struct ValidateOtpInput {
    pub email: String,
    pub code: String,
}

pub struct ValidateOtpUseCase<C: OtpCache> {
    pub cache: C,
}

impl<C: OtpCache> ValidateOtpUseCase<C> {
    /// Absent entry means expired or never issued. A match consumes the entry
    /// (single-use); a mismatch leaves it in place.
    pub async fn execute(&self, input: ValidateOtpInput) -> Result<(), AccountsServiceError> {
        let mut errors = FieldErrors::new();
        if !validate_email(&input.email) {
            errors.push("email", "enter a valid email address");
        }
        errors.into_result()?;

        let stored = self
            .cache
            .get(&input.email)
            .await?
            .ok_or(AccountsServiceError::ExpiredOrNotFound)?;
        if stored != input.code {
            return Err(AccountsServiceError::InvalidCode);
        }
        self.cache.delete(&input.email).await?;
        Ok(())
    }
}
