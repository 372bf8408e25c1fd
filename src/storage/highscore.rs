use log::{error, info, warn};

use super::{HIGHSCORE_KEY, KeyValueStore};

/// Best score seen so far, written through to a [`KeyValueStore`]
#[derive(Debug)]
pub struct Highscore<S> {
    best: u32,
    store: S,
}

impl<S: KeyValueStore> Highscore<S> {
    /// Read the stored value. Anything missing or unparsable counts as 0.
    pub fn load(store: S) -> Self {
        let best = match store.get(HIGHSCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                warn!("ignoring malformed stored high score {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                warn!("could not read high score, starting from 0: {}", err);
                0
            }
        };

        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Raise the high score to `score` if it beats it. Returns whether it did.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory value
    /// is updated either way.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }

        info!("new high score {} (was {})", score, self.best);
        self.best = score;

        if let Err(err) = self.store.set(HIGHSCORE_KEY, &score.to_string()) {
            error!("failed to persist high score: {}", err);
        }

        true
    }
}
