//! Full-tree rendering onto a [`Canvas`].

use glam::Vec2;
use tracing::debug;

use crate::{canvas::Canvas, color::Hsl, params::Parameters, tree};

/// Color the surface is cleared to before every redraw.
pub const BACKGROUND: Hsl = Hsl::new(0.0, 0.0, 11.8);

/// Clears `canvas` and draws the whole tree described by `params`.
///
/// The root is placed at the bottom center of a `viewport`-sized surface
/// and the tree is scaled by [`Parameters::scale`] around that point. Every
/// call starts from scratch: clear, reset the transform, regenerate.
///
/// ### Returns
/// The number of segments drawn.
pub fn render<C: Canvas + ?Sized>(params: &Parameters, canvas: &mut C, viewport: Vec2) -> usize {
    canvas.clear(BACKGROUND);
    canvas.reset_transform();
    canvas.translate(Vec2::new(viewport.x / 2.0, viewport.y));
    canvas.scale(params.scale());

    let rules = params.rules();
    let mut drawn = 0usize;
    tree::walk(&rules, |branch| {
        canvas.set_stroke_width(branch.width);
        canvas.set_stroke_color(branch.color);
        canvas.draw_line(branch.start, branch.end);
        drawn += 1;
    });

    debug!(drawn, depth = rules.max_depth, ?viewport, "rendered tree");
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, Recorder};

    #[test]
    fn render_clears_then_draws_every_segment() {
        let mut params = Parameters::default();
        params.set_depth(5.0);
        let mut surface = Recorder::new();

        let drawn = render(&params, &mut surface, Vec2::new(800.0, 600.0));

        assert_eq!(drawn, 31);
        assert_eq!(surface.commands()[0], DrawCommand::Clear(BACKGROUND));
        assert_eq!(surface.lines().count(), 31);
    }

    #[test]
    fn root_sits_at_bottom_center_and_scales() {
        let mut params = Parameters::default();
        params.set_depth(1.0);
        params.set_root_length(100.0);
        params.set_root_weight(4.0);
        params.set_scale(0.5);
        let mut surface = Recorder::new();

        render(&params, &mut surface, Vec2::new(800.0, 600.0));

        let root = surface.lines().next().copied().unwrap();
        assert!((root.from - Vec2::new(400.0, 600.0)).length() < 1e-4);
        assert!((root.to - Vec2::new(400.0, 550.0)).length() < 1e-4);
        assert!((root.width - 2.0).abs() < 1e-6);
    }

    #[test]
    fn redraw_replaces_previous_frame() {
        let mut params = Parameters::default();
        params.set_depth(6.0);
        let mut surface = Recorder::new();
        let viewport = Vec2::new(640.0, 480.0);

        render(&params, &mut surface, viewport);
        params.set_depth(2.0);
        let drawn = render(&params, &mut surface, viewport);

        assert_eq!(drawn, 3);
        assert_eq!(surface.lines().count(), 3);
        assert_eq!(surface.transform().depth(), 0);
    }

    #[test]
    fn repeated_renders_are_identical() {
        let params = Parameters::default();
        let viewport = Vec2::new(1024.0, 768.0);
        let mut a = Recorder::new();
        let mut b = Recorder::new();

        render(&params, &mut a, viewport);
        render(&params, &mut b, viewport);

        assert_eq!(a.commands(), b.commands());
    }
}
