//! Parameters plus redraw scheduling, as driven by a UI.

use std::time::Duration;

use crate::{
    debounce::{DEFAULT_WINDOW, Debouncer},
    params::Parameters,
};

/// One user edit, as produced by a single control.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamEdit {
    Depth(f64),
    Angle(f64),
    RootLength(f64),
    ShorterChild(bool),
    RootWeight(f64),
    ThinnerChild(bool),
    RootColor(String),
    MultiColored(bool),
    Scale(f64),
}

/// Owns the live [`Parameters`] and decides when to redraw.
///
/// Every mutation goes through [`Session::apply`] or [`Session::reset`],
/// which validate through the `Parameters` setters and then request a
/// debounced redraw. The host polls [`Session::poll_redraw`] each frame and
/// renders when it returns `Some`.
#[derive(Clone, Debug)]
pub struct Session {
    params: Parameters,
    redraw: Debouncer,
}

impl Session {
    /// Starts with default parameters and one redraw pending.
    pub fn new(now: Duration) -> Self {
        Self::with_window(DEFAULT_WINDOW, now)
    }

    pub fn with_window(window: Duration, now: Duration) -> Self {
        let mut redraw = Debouncer::new(window);
        redraw.request(now);
        Self {
            params: Parameters::default(),
            redraw,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Applies one edit and requests a redraw.
    ///
    /// ### Returns
    /// The generation of the redraw request.
    pub fn apply(&mut self, edit: ParamEdit, now: Duration) -> u64 {
        let p = &mut self.params;
        match edit {
            ParamEdit::Depth(v) => p.set_depth(v),
            ParamEdit::Angle(v) => p.set_angle(v),
            ParamEdit::RootLength(v) => p.set_root_length(v),
            ParamEdit::ShorterChild(v) => p.set_shorter_child(v),
            ParamEdit::RootWeight(v) => p.set_root_weight(v),
            ParamEdit::ThinnerChild(v) => p.set_thinner_child(v),
            ParamEdit::RootColor(v) => p.set_root_color(&v),
            ParamEdit::MultiColored(v) => p.set_multi_colored(v),
            ParamEdit::Scale(v) => p.set_scale(v),
        }
        self.redraw.request(now)
    }

    /// Restores default parameters and requests a redraw.
    pub fn reset(&mut self, now: Duration) -> u64 {
        self.params.reset();
        self.redraw.request(now)
    }

    /// Requests a redraw without changing parameters, e.g. after a resize.
    pub fn request_redraw(&mut self, now: Duration) -> u64 {
        self.redraw.request(now)
    }

    /// `Some(generation)` when a redraw is due now.
    pub fn poll_redraw(&mut self, now: Duration) -> Option<u64> {
        self.redraw.poll(now)
    }

    /// Time left before the pending redraw is due, if one is pending.
    pub fn time_until_redraw(&self, now: Duration) -> Option<Duration> {
        self.redraw.time_until_fire(now)
    }
}
