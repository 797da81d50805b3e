//! Menu open/closed state. The DOM layer mirrors this single boolean into
//! three class flags (icon shape, overlay visibility, body scroll lock),
//! which must always agree.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Invert the state; returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force closed. Idempotent; used when an overlay link is activated.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
