//! Fire-and-forget OTP delivery: producers enqueue, a dedicated worker task
//! delivers with its own retry policy. Delivery failure never reaches the
//! issuing request.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

/// Email carrying a one-time code, handed to the delivery worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmail {
    pub recipient: String,
    pub code: String,
}

/// Outbound mail port. Implemented by the HTTP mail-API client and by test mailers.
pub trait Mailer: Send + Sync + 'static {
    fn send_otp(&self, email: &OtpEmail) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Attempts per email before the worker gives up (at-least-once, not forever).
pub const MAX_DELIVERY_ATTEMPTS: u32 = 3;

/// Producer handle for the delivery worker. Cheap to clone into `AppState`.
#[derive(Clone)]
pub struct DeliveryQueue {
    tx: mpsc::UnboundedSender<OtpEmail>,
}

impl DeliveryQueue {
    /// Create a queue together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OtpEmail>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Enqueue without blocking. A closed worker is logged, never surfaced.
    pub fn enqueue(&self, email: OtpEmail) {
        if let Err(e) = self.tx.send(email) {
            tracing::error!(recipient = %e.0.recipient, "delivery worker is gone, dropping OTP email");
        }
    }
}

/// Spawn the delivery worker and return the producer handle.
pub fn spawn_delivery_worker<M: Mailer>(mailer: M) -> DeliveryQueue {
    let (queue, mut rx) = DeliveryQueue::channel();
    tokio::spawn(async move {
        while let Some(email) = rx.recv().await {
            deliver_with_retry(&mailer, &email).await;
        }
    });
    queue
}

async fn deliver_with_retry<M: Mailer>(mailer: &M, email: &OtpEmail) {
    for attempt in 1..=MAX_DELIVERY_ATTEMPTS {
        match mailer.send_otp(email).await {
            Ok(()) => return,
            Err(e) if attempt < MAX_DELIVERY_ATTEMPTS => {
                tracing::warn!(
                    error = %e,
                    attempt,
                    recipient = %email.recipient,
                    "otp delivery failed, retrying"
                );
                sleep(Duration::from_secs(1 << attempt)).await;
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    recipient = %email.recipient,
                    "otp delivery failed, giving up"
                );
            }
        }
    }
}
