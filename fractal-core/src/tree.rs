//! Recursive branch generation.
//!
//! The tree is never stored. [`walk`] visits every branch in pre-order and
//! hands it to a callback; each recursive call gets its own [`Pen`] by
//! value, so sibling branches cannot see each other's heading.
//!
//! Coordinates are tree-local and use screen convention: the root starts at
//! the origin, `y` grows downward and the root grows along `-y`. A positive
//! angle turns the heading clockwise on screen.

use glam::Vec2;

use crate::{
    color::Hsl,
    config::{GrowthRules, HUE_MULTIPLIER, LENGTH_MULTIPLIER, WEIGHT_MULTIPLIER},
};

/// Direction of the root segment.
pub const ROOT_HEADING: Vec2 = Vec2::NEG_Y;

/// One drawable segment of the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branch {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Hsl,
    /// `0` for the root.
    pub depth: u32,
}

/// Per-call drawing state.
#[derive(Clone, Copy, Debug)]
struct Pen {
    pos: Vec2,
    heading: Vec2,
    depth: u32,
    length: f32,
    width: f32,
    hue: f32,
}

/// Visits every branch described by `rules` in pre-order.
///
/// A branch is visited before its children, the `+angle` child subtree
/// before the `-angle` one. With `max_depth = d >= 1` exactly `2^d - 1`
/// branches are visited; with `d <= 0` none are.
///
/// Runtime is exponential in `max_depth`; [`Parameters`](crate::params::Parameters)
/// caps it at 15.
pub fn walk(rules: &GrowthRules, mut visit: impl FnMut(Branch)) {
    let Ok(leaf_depth) = u32::try_from(rules.max_depth.saturating_sub(1)) else {
        return;
    };

    let radians = rules.angle_degrees.to_radians();
    let turns = [Vec2::from_angle(radians), Vec2::from_angle(-radians)];

    let root = Pen {
        pos: Vec2::ZERO,
        heading: ROOT_HEADING,
        depth: 0,
        length: rules.root_length,
        width: rules.root_weight,
        hue: rules.root_color.hue,
    };

    grow(rules, &turns, leaf_depth, root, &mut visit);
}

fn grow<F: FnMut(Branch)>(
    rules: &GrowthRules,
    turns: &[Vec2; 2],
    leaf_depth: u32,
    pen: Pen,
    visit: &mut F,
) {
    let end = pen.pos + pen.heading * pen.length;

    visit(Branch {
        start: pen.pos,
        end,
        width: pen.width,
        color: Hsl::new(pen.hue, rules.root_color.saturation, rules.root_color.lightness),
        depth: pen.depth,
    });

    if pen.depth >= leaf_depth {
        return;
    }

    let child = Pen {
        pos: end,
        heading: pen.heading,
        depth: pen.depth + 1,
        length: shrink(pen.length, rules.shorter_child, LENGTH_MULTIPLIER),
        width: shrink(pen.width, rules.thinner_child, WEIGHT_MULTIPLIER),
        hue: shrink(pen.hue, rules.multi_colored, HUE_MULTIPLIER),
    };

    for turn in turns {
        let heading = turn.rotate(child.heading);
        grow(rules, turns, leaf_depth, Pen { heading, ..child }, visit);
    }
}

#[inline]
fn shrink(value: f32, enabled: bool, factor: f32) -> f32 {
    if enabled { value * factor } else { value }
}

/// Collects every branch of the tree, in pre-order.
pub fn branches(rules: &GrowthRules) -> Vec<Branch> {
    let mut out = Vec::with_capacity(segment_count(rules.max_depth).min(1 << 16));
    walk(rules, |b| out.push(b));
    out
}

/// Number of segments a tree of the given depth has: `2^d - 1`, or `0`
/// for `d <= 0`. Saturates at `usize::MAX`.
pub fn segment_count(max_depth: i32) -> usize {
    let Ok(d) = u32::try_from(max_depth) else {
        return 0;
    };
    1usize.checked_shl(d).map_or(usize::MAX, |n| n - 1)
}
