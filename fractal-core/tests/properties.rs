//! Property-based tests for tree generation and parameter invariants.

use proptest::prelude::*;

use fractal_core::{
    color::{hex_to_hsl, to_hex},
    config::GrowthRules,
    params::{
        ANGLE_RANGE, DEPTH_RANGE, Parameters, ROOT_LENGTH_RANGE, ROOT_WEIGHT_RANGE, SCALE_RANGE,
    },
    tree::{self, segment_count},
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Growth rules with every field in its valid range, depth kept small.
fn arb_rules() -> impl Strategy<Value = GrowthRules> {
    (
        1i32..=9,
        0.0f32..=360.0,
        1.0f32..=200.0,
        any::<bool>(),
        1.0f32..=30.0,
        any::<bool>(),
        any::<[u8; 3]>(),
        any::<bool>(),
    )
        .prop_map(
            |(max_depth, angle, length, shorter, weight, thinner, rgb, multi)| {
                let mut p = Parameters::default();
                p.set_depth(f64::from(max_depth));
                p.set_angle(f64::from(angle));
                p.set_root_length(f64::from(length));
                p.set_shorter_child(shorter);
                p.set_root_weight(f64::from(weight));
                p.set_thinner_child(thinner);
                p.set_root_color(&to_hex(rgb));
                p.set_multi_colored(multi);
                p.rules()
            },
        )
}

/// Any finite or infinite number, including far out-of-range values.
fn arb_input() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6f64..1.0e6,
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
    ]
}

fn in_range(value: f32, range: &std::ops::RangeInclusive<f32>) -> bool {
    range.contains(&value)
}

// ---------------------------------------------------------------------------
// Tree generation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn segment_count_is_two_to_the_depth_minus_one(rules in arb_rules()) {
        let mut visited = 0usize;
        tree::walk(&rules, |_| visited += 1);
        prop_assert_eq!(visited, (1usize << rules.max_depth) - 1);
        prop_assert_eq!(visited, segment_count(rules.max_depth));
    }

    #[test]
    fn non_positive_depth_is_empty(max_depth in i32::MIN..=0) {
        let rules = GrowthRules { max_depth, ..GrowthRules::default() };
        prop_assert!(tree::branches(&rules).is_empty());
    }

    #[test]
    fn generation_is_bit_identical(rules in arb_rules()) {
        prop_assert_eq!(tree::branches(&rules), tree::branches(&rules));
    }

    #[test]
    fn depth_never_exceeds_leaf_level(rules in arb_rules()) {
        let leaf = (rules.max_depth - 1) as u32;
        let mut leaves = 0usize;
        tree::walk(&rules, |b| {
            assert!(b.depth <= leaf);
            if b.depth == leaf {
                leaves += 1;
            }
        });
        prop_assert_eq!(leaves, 1usize << leaf);
    }
}

// ---------------------------------------------------------------------------
// Parameter clamping
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn setters_keep_every_field_in_range(
        depth in arb_input(),
        angle in arb_input(),
        length in arb_input(),
        weight in arb_input(),
        scale in arb_input(),
    ) {
        let mut p = Parameters::default();
        p.set_depth(depth);
        p.set_angle(angle);
        p.set_root_length(length);
        p.set_root_weight(weight);
        p.set_scale(scale);

        prop_assert!(DEPTH_RANGE.contains(&p.depth()));
        prop_assert!(in_range(p.angle(), &ANGLE_RANGE));
        prop_assert!(in_range(p.root_length(), &ROOT_LENGTH_RANGE));
        prop_assert!(in_range(p.root_weight(), &ROOT_WEIGHT_RANGE));
        prop_assert!(in_range(p.scale(), &SCALE_RANGE));
    }

    #[test]
    fn in_range_depth_rounds_to_nearest(depth in 1.0f64..=15.0) {
        let mut p = Parameters::default();
        p.set_depth(depth);
        prop_assert_eq!(p.depth(), depth.round() as i32);
    }

    #[test]
    fn reset_undoes_any_history(
        depth in arb_input(),
        angle in arb_input(),
        color in ".{0,8}",
        toggle in any::<bool>(),
    ) {
        let mut p = Parameters::default();
        p.set_depth(depth);
        p.set_angle(angle);
        p.set_root_color(&color);
        p.set_shorter_child(toggle);
        p.set_multi_colored(toggle);

        p.reset();

        prop_assert_eq!(p, Parameters::default());
    }
}

// ---------------------------------------------------------------------------
// Color conversion
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn hsl_components_stay_in_range(rgb in any::<[u8; 3]>()) {
        let hsl = hex_to_hsl(&to_hex(rgb)).unwrap();
        prop_assert!((0.0..360.0).contains(&hsl.hue));
        prop_assert!((0.0..=100.0).contains(&hsl.saturation));
        prop_assert!((0.0..=100.0).contains(&hsl.lightness));
    }

    #[test]
    fn gray_levels_are_achromatic(level in any::<u8>()) {
        let hsl = hex_to_hsl(&to_hex([level; 3])).unwrap();
        prop_assert_eq!(hsl.hue, 0.0);
        prop_assert_eq!(hsl.saturation, 0.0);
    }

    #[test]
    fn malformed_colors_revert_to_default(text in "[^#].{0,8}") {
        let mut p = Parameters::default();
        p.set_root_color("#010203");
        p.set_root_color(&text);
        prop_assert_eq!(p.root_color(), "#ff81e6");
    }
}
