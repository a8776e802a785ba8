//! Image-load gate for the initial layout
//!
//! Card images change the track's measured size as they arrive, so the first
//! layout waits until every image has settled. A failed load settles too.

/// Result of settling one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// Still waiting on other images.
    Pending(usize),
    /// This settle opened the gate; lay out now.
    Opened,
    /// The gate was already open; nothing to do.
    AlreadyOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGate {
    pending: usize,
    opened: bool,
}

impl ImageGate {
    /// Build a gate from each image's `complete` flag. Completed images add
    /// no wait.
    pub fn new<I>(completed: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let pending = completed.into_iter().filter(|done| !done).count();
        log::debug!("image gate waiting on {pending} image(s)");
        Self {
            pending,
            opened: false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// True when nothing is left to wait for.
    pub fn is_clear(&self) -> bool {
        self.pending == 0
    }

    /// Take the open transition for a gate that had nothing pending. Returns
    /// `true` once.
    pub fn open_if_clear(&mut self) -> bool {
        if self.opened || !self.is_clear() {
            return false;
        }
        self.opened = true;
        true
    }

    /// One pending image loaded or failed.
    pub fn settle(&mut self) -> GateStatus {
        if self.opened {
            return GateStatus::AlreadyOpen;
        }
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.opened = true;
            GateStatus::Opened
        } else {
            GateStatus::Pending(self.pending)
        }
    }
}
