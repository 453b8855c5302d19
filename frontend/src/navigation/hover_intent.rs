//! Hover-intent open/close logic for the desktop dropdowns.
//!
//! Opening is immediate, closing is deferred by a grace period so the pointer
//! can travel from a trigger into its panel. The machine owns the pending
//! timer handle; the caller only supplies a way to schedule one.

use gloo_timers::callback::Timeout;

/// A scheduled callback that can be cleared before it fires.
pub trait ClearTimer {
    fn clear(self);
}

impl ClearTimer for Timeout {
    fn clear(self) {
        drop(self.cancel());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOpenState<K> {
    Closed,
    Open(K),
}

/// Generation number of a scheduled close. Only the latest one may close the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CloseToken(u64);

struct PendingClose<K, T> {
    token: CloseToken,
    section: K,
    timer: T,
}

pub struct HoverIntent<K, T: ClearTimer> {
    state: MenuOpenState<K>,
    pending: Option<PendingClose<K, T>>,
    next_token: u64,
    grace_ms: u32,
    torn_down: bool,
}

impl<K: Copy + PartialEq, T: ClearTimer> HoverIntent<K, T> {
    pub fn new(grace_ms: u32) -> Self {
        Self {
            state: MenuOpenState::Closed,
            pending: None,
            next_token: 0,
            grace_ms,
            torn_down: false,
        }
    }

    pub fn state(&self) -> MenuOpenState<K> {
        self.state
    }

    pub fn open_key(&self) -> Option<K> {
        match self.state {
            MenuOpenState::Open(key) => Some(key),
            MenuOpenState::Closed => None,
        }
    }

    pub fn is_open(&self, key: K) -> bool {
        self.state == MenuOpenState::Open(key)
    }

    /// Section waiting on a deferred close, if any.
    pub fn pending_close(&self) -> Option<K> {
        self.pending.as_ref().map(|pending| pending.section)
    }

    pub fn grace_ms(&self) -> u32 {
        self.grace_ms
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Pointer entered the trigger for `key`. Opens it at once, replacing any
    /// other open section without passing through `Closed`.
    pub fn enter_trigger(&mut self, key: K) {
        if self.torn_down {
            return;
        }
        self.cancel_pending();
        self.state = MenuOpenState::Open(key);
    }

    /// Pointer left the trigger or panel of `key`. Schedules a close after the
    /// grace period through `schedule`, which receives the token to report back
    /// to [`close_elapsed`](Self::close_elapsed) and the delay in milliseconds.
    ///
    /// Does nothing unless `key` is the open section.
    pub fn leave<F>(&mut self, key: K, schedule: F)
    where
        F: FnOnce(CloseToken, u32) -> T,
    {
        if self.torn_down || !self.is_open(key) {
            return;
        }
        self.cancel_pending();
        let token = CloseToken(self.next_token);
        self.next_token += 1;
        let timer = schedule(token, self.grace_ms);
        self.pending = Some(PendingClose {
            token,
            section: key,
            timer,
        });
    }

    /// Pointer entered the dropdown panel of `key`. Keeps it open.
    pub fn enter_panel(&mut self, key: K) {
        if self.torn_down || !self.is_open(key) {
            return;
        }
        self.cancel_pending();
    }

    /// The timer behind `token` fired. Returns true if this closed the menu.
    ///
    /// Tokens that were cancelled, superseded or outlived the component are
    /// ignored.
    pub fn close_elapsed(&mut self, token: CloseToken) -> bool {
        if self.torn_down {
            return false;
        }
        match self.pending.as_ref() {
            Some(pending) if pending.token == token => {}
            _ => return false,
        }
        // The timer has already run, so its handle is dropped rather than cleared.
        self.pending = None;
        self.state = MenuOpenState::Closed;
        true
    }

    /// Close immediately: outside click, Escape, item activation, navigation.
    pub fn dismiss(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_pending();
        self.state = MenuOpenState::Closed;
    }

    /// Component is unmounting. Clears the pending timer and freezes the state.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.torn_down = true;
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.timer.clear();
        }
    }
}
