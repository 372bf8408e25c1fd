use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep_until};

/// One-shot game clock. The driver re-arms it after every step so the
/// delay can follow the score; a disarmed ticker never fires.
#[derive(Debug, Default)]
pub struct Ticker {
    sleep: Option<Pin<Box<Sleep>>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire once, `after` from now, replacing any pending deadline
    pub fn arm(&mut self, after: Duration) {
        let deadline = Instant::now() + after;
        match self.sleep.as_mut() {
            Some(sleep) => sleep.as_mut().reset(deadline),
            None => self.sleep = Some(Box::pin(sleep_until(deadline))),
        }
    }

    pub fn disarm(&mut self) {
        self.sleep = None;
    }

    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Resolves at the armed deadline and leaves the ticker disarmed.
    ///
    /// Cancel safe: dropping the future keeps the deadline.
    pub async fn fired(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
