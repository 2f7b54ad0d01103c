//! Intent channel between input sources and the game owner.
//!
//! Every input source gets its own clone of [`IntentSender`]; the single
//! [`IntentReceiver`] lives with the session and is only read at tick
//! boundaries. Closing the receiver detaches every sender at once.

use tokio::sync::mpsc;

use crate::translator::InputTranslator;
use crate::types::Direction;

/// Create a connected sender/receiver pair.
pub fn intent_channel() -> (IntentSender, IntentReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (IntentSender { tx }, IntentReceiver { rx })
}

/// Producer half held by an input source.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: mpsc::UnboundedSender<Direction>,
}

impl IntentSender {
    /// Queue an intent. Returns `false` once the receiver is closed.
    pub fn send(&self, dir: Direction) -> bool {
        self.tx.send(dir).is_ok()
    }

    pub fn is_attached(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Consumer half owned by the session.
#[derive(Debug)]
pub struct IntentReceiver {
    rx: mpsc::UnboundedReceiver<Direction>,
}

impl IntentReceiver {
    pub fn try_recv(&mut self) -> Option<Direction> {
        self.rx.try_recv().ok()
    }

    /// Feed every queued intent to `translator`, in arrival order.
    ///
    /// Returns how many were accepted.
    pub fn drain_into(&mut self, translator: &mut InputTranslator) -> usize {
        let mut accepted = 0;
        while let Some(dir) = self.try_recv() {
            if translator.offer(dir) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Detach all senders and drop anything still queued.
    pub fn close(&mut self) {
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
    }
}
