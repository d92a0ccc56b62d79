//! Transient Form Notices
//!
//! A notice slot whose expiry only clears the notice it was armed for.

/// Message shown under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Current notice plus a generation bumped on every post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u32,
}

impl NoticeSlot {
    /// Replace the notice; returns the generation to pass to `expire`
    pub fn post(&mut self, notice: Notice) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notice);
        self.generation
    }

    /// Clear the notice if nothing was posted since `generation`
    pub fn expire(&mut self, generation: u32) {
        if self.generation == generation {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
