//! Deferred update hook for shapes whose outline derives from other state

/// Dirty flag owned by an [`Updatable`] value; starts dirty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateFlag {
    dirty: bool,
}

impl UpdateFlag {
    /// A flag that requests an initial update
    pub const fn new() -> Self {
        Self { dirty: true }
    }

    /// Whether an update is pending
    pub const fn is_set(self) -> bool {
        self.dirty
    }

    /// Mark an update as pending
    pub fn set(&mut self) {
        self.dirty = true;
    }

    /// Clear the pending update
    pub fn clear(&mut self) {
        self.dirty = false;
    }
}

impl Default for UpdateFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// A value that recomputes derived state (such as its bounding box) on request
pub trait Updatable {
    /// The flag tracking pending updates
    fn update_flag(&self) -> UpdateFlag;

    /// Mutable access to the flag
    fn update_flag_mut(&mut self) -> &mut UpdateFlag;

    /// Recompute derived state
    fn do_update(&mut self);

    /// Whether [`update`](Self::update) has been requested
    fn needs_update(&self) -> bool {
        self.update_flag().is_set()
    }

    /// Request that [`update`](Self::update) runs at the next opportunity
    fn request_update(&mut self) {
        self.update_flag_mut().set();
    }

    /// Clear the request and recompute derived state
    fn update(&mut self) {
        self.update_flag_mut().clear();
        self.do_update();
    }

    /// Run [`update`](Self::update) only if one was requested
    fn update_if_needed(&mut self) -> bool {
        if self.needs_update() {
            self.update();
            true
        } else {
            false
        }
    }
}

/// Updates every value that requested it, returning how many ran
pub fn update_all<'a>(items: impl IntoIterator<Item = &'a mut dyn Updatable>) -> usize {
    items
        .into_iter()
        .map(|item| item.update_if_needed())
        .filter(|&ran| ran)
        .count()
}
