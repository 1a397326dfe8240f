//! Work deferred to the start of the next frame.
//!
//! A flip is queued while a frame is being drawn and applied before the
//! following frame draws, which gives the one-frame delay an entry
//! transition needs.

use std::rc::Weak;

use flume::{Receiver, Sender};

use crate::transition::PanelId;

/// Pending switch of one detail panel from entering to visible.
#[derive(Debug)]
pub struct DeferredFlip {
    panel: PanelId,
    lifeline: Weak<()>,
}

impl DeferredFlip {
    pub(crate) fn new(panel: PanelId, lifeline: Weak<()>) -> Self {
        Self { panel, lifeline }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    /// A flip is stale once the panel that queued it has been dropped.
    pub fn is_stale(&self) -> bool {
        self.lifeline.strong_count() == 0
    }
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    send: Sender<DeferredFlip>,
    recv: Receiver<DeferredFlip>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn schedule(&self, flip: DeferredFlip) {
        if let Err(err) = self.send.send(flip) {
            log::warn!(
                "Dropping deferred flip for {:?}: scheduler closed",
                err.into_inner().panel
            );
        }
    }

    /// Takes everything queued so far. Flips queued while the caller
    /// processes the result wait for the next drain.
    pub fn drain(&self) -> Vec<DeferredFlip> {
        self.recv.try_iter().collect()
    }

    pub fn pending(&self) -> usize {
        self.recv.len()
    }
}
