//! Skip redraws when nothing on screen changed.
//!
//! The frontend polls input every frame but the board only changes once per
//! generation (or on user input), so most frames are identical. Each frame is
//! summarized as a fingerprint; a redraw happens when the fingerprint changes,
//! and otherwise at most once per `max_idle_ms` so a damaged terminal heals.

use crate::grid_view::{Overlay, Viewport};
use crate::engine::LifeSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    max_idle_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(max_idle_ms: u64) -> Self {
        Self {
            max_idle_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders the first frame, any frame whose fingerprint differs from the
    /// last rendered one, and otherwise once `max_idle_ms` has passed.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.max_idle_ms;

        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

/// Fingerprint everything [`crate::GridView`] draws for a frame.
pub fn frame_fingerprint(snap: &LifeSnapshot<'_>, overlay: &Overlay<'_>, viewport: Viewport) -> u64 {
    const PRIME: u64 = 0x100000001b3;

    let mut state = snap.grid.fingerprint();
    let mut mix = |v: u64| {
        for b in v.to_le_bytes() {
            state ^= b as u64;
            state = state.wrapping_mul(PRIME);
        }
    };

    mix(snap.generation);
    mix(snap.running as u64);
    mix(snap.interval_ms as u64);
    mix(overlay.cursor.map_or(u64::MAX, |c| c as u64));
    mix(overlay.message.map_or(0, |m| m.len() as u64 + 1));
    for b in overlay.message.unwrap_or("").bytes() {
        mix(b as u64);
    }
    mix(((viewport.width as u64) << 16) | viewport.height as u64);

    state
}
