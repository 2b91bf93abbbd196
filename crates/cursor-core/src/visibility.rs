//! Visibility and interaction state for the cursor glyph.
//!
//! Moves (and presses) reveal the glyph and restart an idle-hide debounce.
//! Press and hover are independent flags. A fixed-period breathing ticker
//! re-rolls the idle glyph scale, but only while neither flag is set.

use crate::params::CursorParams;
use crate::timer::{Debounce, Ticker};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Idle,
    Moving,
    Clicking,
    Hovering,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub is_visible: bool,
    pub is_clicking: bool,
    pub is_hovering: bool,
    pub breath_scale: f32,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            is_visible: false,
            is_clicking: false,
            is_hovering: false,
            breath_scale: 1.0,
        }
    }
}

impl CursorState {
    /// Clicking wins over hovering; both win over plain movement.
    pub fn mode(&self) -> CursorMode {
        if self.is_clicking {
            CursorMode::Clicking
        } else if self.is_hovering {
            CursorMode::Hovering
        } else if self.is_visible {
            CursorMode::Moving
        } else {
            CursorMode::Idle
        }
    }

    #[inline]
    pub fn breathing_allowed(&self) -> bool {
        !self.is_clicking && !self.is_hovering
    }
}

pub struct VisibilityController {
    state: CursorState,
    hide: Debounce,
    breath: Ticker,
    breath_range: (f32, f32),
    rng: StdRng,
}

impl VisibilityController {
    pub fn new(params: &CursorParams, seed: u64) -> Self {
        Self {
            state: CursorState::default(),
            hide: Debounce::new(params.idle_hide_ms),
            breath: Ticker::new(params.breath_period_ms),
            breath_range: params.breath_scale,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn hide_deadline(&self) -> Option<u64> {
        self.hide.deadline()
    }

    /// Starts the breathing ticker.
    pub fn start(&mut self, now_ms: u64) {
        self.breath.start(now_ms);
    }

    /// Cancels the pending hide, stops breathing and drops back to the
    /// hidden, unpressed state. Breath scale is kept.
    pub fn stop(&mut self) {
        self.hide.cancel();
        self.breath.stop();
        self.state = CursorState {
            breath_scale: self.state.breath_scale,
            ..CursorState::default()
        };
    }

    pub fn on_move(&mut self, now_ms: u64) {
        self.reveal(now_ms);
    }

    pub fn on_press(&mut self, down: bool, now_ms: u64) {
        self.state.is_clicking = down;
        if down {
            self.reveal(now_ms);
        }
    }

    pub fn on_hover(&mut self, actionable: bool) {
        self.state.is_hovering = actionable;
    }

    pub fn tick(&mut self, now_ms: u64) {
        if self.hide.fire_if_due(now_ms) {
            self.state.is_visible = false;
            log::debug!("[visibility] idle, hiding glyph at {}ms", now_ms);
        }
        if self.breath.poll(now_ms) && self.state.breathing_allowed() {
            let (lo, hi) = self.breath_range;
            self.state.breath_scale = self.rng.gen_range(lo..=hi);
        }
    }

    fn reveal(&mut self, now_ms: u64) {
        if !self.state.is_visible {
            log::debug!("[visibility] showing glyph at {}ms", now_ms);
        }
        self.state.is_visible = true;
        self.hide.arm(now_ms);
    }
}
