//! Validated tree parameters.
//!
//! [`Parameters`] is the single place where user input is checked. Every
//! setter clamps (and, for depth, rounds) on write, so a `Parameters` value
//! always satisfies its ranges and the generator never has to validate.

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::{
    color::{self, Hsl},
    config::GrowthRules,
};

pub const DEPTH_RANGE: RangeInclusive<i32> = 1..=15;
pub const ANGLE_RANGE: RangeInclusive<f32> = 0.0..=360.0;
pub const ROOT_LENGTH_RANGE: RangeInclusive<f32> = 1.0..=200.0;
pub const ROOT_WEIGHT_RANGE: RangeInclusive<f32> = 1.0..=30.0;
pub const SCALE_RANGE: RangeInclusive<f32> = 0.1..=2.0;

pub const DEFAULT_DEPTH: i32 = 11;
pub const DEFAULT_ANGLE: f32 = 30.0;
pub const DEFAULT_ROOT_LENGTH: f32 = 170.0;
pub const DEFAULT_SHORTER_CHILD: bool = true;
pub const DEFAULT_ROOT_WEIGHT: f32 = 1.0;
pub const DEFAULT_THINNER_CHILD: bool = true;
pub const DEFAULT_ROOT_COLOR: [u8; 3] = [0xff, 0x81, 0xe6];
pub const DEFAULT_MULTI_COLORED: bool = true;
pub const DEFAULT_SCALE: f32 = 1.0;

/// Generation parameters with their range invariants enforced.
///
/// Fields are private; use the setters, which clamp out-of-range input to
/// the nearest bound. `NaN` input resets a numeric field to its default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    depth: i32,
    angle: f32,
    root_length: f32,
    shorter_child: bool,
    root_weight: f32,
    thinner_child: bool,
    root_color: [u8; 3],
    multi_colored: bool,
    scale: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            angle: DEFAULT_ANGLE,
            root_length: DEFAULT_ROOT_LENGTH,
            shorter_child: DEFAULT_SHORTER_CHILD,
            root_weight: DEFAULT_ROOT_WEIGHT,
            thinner_child: DEFAULT_THINNER_CHILD,
            root_color: DEFAULT_ROOT_COLOR,
            multi_colored: DEFAULT_MULTI_COLORED,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Parameters {
    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn root_length(&self) -> f32 {
        self.root_length
    }

    pub fn shorter_child(&self) -> bool {
        self.shorter_child
    }

    pub fn root_weight(&self) -> f32 {
        self.root_weight
    }

    pub fn thinner_child(&self) -> bool {
        self.thinner_child
    }

    /// Root color as 8-bit RGB channels.
    pub fn root_rgb(&self) -> [u8; 3] {
        self.root_color
    }

    /// Root color as a lowercase `#rrggbb` string.
    pub fn root_color(&self) -> String {
        color::to_hex(self.root_color)
    }

    pub fn root_hsl(&self) -> Hsl {
        Hsl::from_rgb(self.root_color)
    }

    pub fn multi_colored(&self) -> bool {
        self.multi_colored
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the depth, rounding to the nearest integer before clamping.
    pub fn set_depth(&mut self, value: f64) {
        if value.is_nan() {
            debug!(field = "depth", "non-numeric input, using default");
            self.depth = DEFAULT_DEPTH;
            return;
        }
        let lo = f64::from(*DEPTH_RANGE.start());
        let hi = f64::from(*DEPTH_RANGE.end());
        let clamped = value.round().clamp(lo, hi);
        if clamped != value {
            debug!(field = "depth", value, clamped, "adjusted input");
        }
        self.depth = clamped as i32;
    }

    pub fn set_angle(&mut self, value: f64) {
        self.angle = clamp_field("angle", value, &ANGLE_RANGE, DEFAULT_ANGLE);
    }

    pub fn set_root_length(&mut self, value: f64) {
        self.root_length =
            clamp_field("root_length", value, &ROOT_LENGTH_RANGE, DEFAULT_ROOT_LENGTH);
    }

    pub fn set_shorter_child(&mut self, value: bool) {
        self.shorter_child = value;
    }

    pub fn set_root_weight(&mut self, value: f64) {
        self.root_weight =
            clamp_field("root_weight", value, &ROOT_WEIGHT_RANGE, DEFAULT_ROOT_WEIGHT);
    }

    pub fn set_thinner_child(&mut self, value: bool) {
        self.thinner_child = value;
    }

    /// Sets the root color from a `#rrggbb` string.
    ///
    /// Anything that does not parse reverts the color to
    /// [`DEFAULT_ROOT_COLOR`].
    pub fn set_root_color(&mut self, value: &str) {
        self.root_color = match color::parse_hex(value) {
            Ok(rgb) => rgb,
            Err(err) => {
                warn!(%err, value, "rejected root color, reverting to default");
                DEFAULT_ROOT_COLOR
            }
        };
    }

    pub fn set_multi_colored(&mut self, value: bool) {
        self.multi_colored = value;
    }

    pub fn set_scale(&mut self, value: f64) {
        self.scale = clamp_field("scale", value, &SCALE_RANGE, DEFAULT_SCALE);
    }

    /// Snapshot of the fields the generator reads.
    pub fn rules(&self) -> GrowthRules {
        GrowthRules {
            max_depth: self.depth,
            angle_degrees: self.angle,
            root_length: self.root_length,
            shorter_child: self.shorter_child,
            root_weight: self.root_weight,
            thinner_child: self.thinner_child,
            root_color: self.root_hsl(),
            multi_colored: self.multi_colored,
        }
    }
}

fn clamp_field(field: &'static str, value: f64, range: &RangeInclusive<f32>, default: f32) -> f32 {
    if value.is_nan() {
        debug!(field, "non-numeric input, using default");
        return default;
    }
    let clamped = value.clamp(f64::from(*range.start()), f64::from(*range.end()));
    if clamped != value {
        debug!(field, value, clamped, "clamped out-of-range input");
    }
    clamped as f32
}
