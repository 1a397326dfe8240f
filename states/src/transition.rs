//! Entry transition of a single detail panel.
//!
//! A panel starts out entering and becomes visible exactly once, one frame
//! after it is first drawn. The flip is fire-and-forget: it cannot be
//! cancelled, but it does nothing if the panel is gone by the time it runs.

use std::rc::Rc;

use crate::scheduler::{DeferredFlip, FrameScheduler};

/// Identity of one detail panel instance.
///
/// Ids are generations: collapsing a row and expanding it again yields a new
/// id, so a flip queued for the old instance can never reach the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(u64);

impl PanelId {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Visible,
}

#[derive(Debug)]
pub struct DetailPanelState {
    id: PanelId,
    phase: TransitionPhase,
    mounted: bool,
    // Deferred flips hold a `Weak` to this; dropping the panel disarms them.
    lifeline: Rc<()>,
}

impl DetailPanelState {
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            phase: TransitionPhase::Entering,
            mounted: false,
            lifeline: Rc::new(()),
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == TransitionPhase::Visible
    }

    /// Marks the panel as drawn. The first call queues the flip to visible
    /// and returns `true`; later calls do nothing.
    pub fn mount(&mut self, scheduler: &FrameScheduler) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        scheduler.schedule(DeferredFlip::new(self.id, Rc::downgrade(&self.lifeline)));
        log::trace!("Detail panel {:?} mounted, flip queued", self.id);
        true
    }

    pub(crate) fn reveal(&mut self) {
        self.phase = TransitionPhase::Visible;
    }
}
