use crate::{color::Hsl, params::Parameters};

/// Child length as a fraction of its parent's, when `shorter_child` is set.
pub const LENGTH_MULTIPLIER: f32 = 0.75;
/// Child stroke width as a fraction of its parent's, when `thinner_child` is set.
pub const WEIGHT_MULTIPLIER: f32 = 0.9;
/// Child hue as a fraction of its parent's, when `multi_colored` is set.
pub const HUE_MULTIPLIER: f32 = 0.75;

/// Everything the generator reads, as a plain snapshot.
///
/// Built from [`Parameters::rules`]. Unlike [`Parameters`] nothing here is
/// validated; `max_depth <= 0` is allowed and yields an empty tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthRules {
    pub max_depth: i32,
    pub angle_degrees: f32,
    pub root_length: f32,
    pub shorter_child: bool,
    pub root_weight: f32,
    pub thinner_child: bool,
    pub root_color: Hsl,
    pub multi_colored: bool,
}

impl Default for GrowthRules {
    fn default() -> Self {
        Parameters::default().rules()
    }
}

impl From<&Parameters> for GrowthRules {
    fn from(params: &Parameters) -> Self {
        params.rules()
    }
}
