//! Fire-and-forget generation on a worker thread
//!
//! The engine is a single synchronous actor, so the only suspending call in
//! the system runs off-thread and hands its result back over a channel. The
//! session loop polls the handle between commands; nothing else waits on
//! the outcome.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use tracing::debug;

use crate::config::Config;

use super::{generate_quests, GenerationRequest, QuestSeed};

/// Handle to one in-flight generation request
pub struct GenerationHandle {
    theme: String,
    rx: Receiver<Vec<QuestSeed>>,
    done: bool,
}

impl GenerationHandle {
    /// Theme the request was made with
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// True once the result has been taken (or the worker died)
    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Non-blocking poll for the result.
    ///
    /// Returns `Some` exactly once when the worker delivers. A worker that
    /// panicked counts as finished with no result; the caller simply never
    /// merges anything.
    pub fn try_take(&mut self) -> Option<Vec<QuestSeed>> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(seeds) => {
                self.done = true;
                Some(seeds)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                None
            }
        }
    }
}

/// Kick off a generation request on a background thread.
///
/// The session stays fully interactive while the request is pending; the
/// result (or the fallback set) arrives through the returned handle.
pub fn spawn_generation(config: Config, request: GenerationRequest) -> GenerationHandle {
    let (tx, rx) = channel();
    let theme = request.theme.clone();

    thread::spawn(move || {
        let seeds = generate_quests(&config, &request);
        debug!(count = seeds.len(), "generation worker finished");
        let _ = tx.send(seeds);
    });

    GenerationHandle {
        theme,
        rx,
        done: false,
    }
}
