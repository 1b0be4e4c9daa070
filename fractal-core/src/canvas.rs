//! Drawing surface abstraction.
//!
//! [`Canvas`] is the boundary between tree rendering and whatever actually
//! puts pixels on screen. [`Recorder`] is the in-crate implementation: it
//! keeps a display list in surface coordinates that a host can replay.

use glam::{Affine2, Vec2};

use crate::color::Hsl;

/// A 2-D drawing surface with a push/pop transform stack.
pub trait Canvas {
    /// Fills the whole surface and discards everything drawn so far.
    fn clear(&mut self, color: Hsl);
    fn set_stroke_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: Hsl);
    /// Draws a line between two points in the current local frame.
    fn draw_line(&mut self, from: Vec2, to: Vec2);
    fn translate(&mut self, offset: Vec2);
    /// Rotates the local frame; positive is clockwise on a y-down surface.
    fn rotate(&mut self, degrees: f32);
    fn scale(&mut self, factor: f32);
    fn push_transform(&mut self);
    /// Restores the last pushed transform. Does nothing if none was pushed.
    fn pop_transform(&mut self);
    /// Back to the identity transform, with nothing pushed.
    fn reset_transform(&mut self);
}

/// Current local-to-surface transform plus a save stack.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformStack {
    current: Affine2,
    saved: Vec<Affine2>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            current: Affine2::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Affine2 {
        self.current
    }

    /// Number of transforms currently pushed.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine2::from_translation(offset);
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.current = self.current * Affine2::from_angle(degrees.to_radians());
    }

    pub fn scale(&mut self, factor: f32) {
        self.current = self.current * Affine2::from_scale(Vec2::splat(factor));
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    pub fn pop(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn reset(&mut self) {
        self.current = Affine2::IDENTITY;
        self.saved.clear();
    }

    /// Maps a local point to surface coordinates.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.current.transform_point2(p)
    }

    /// How much a unit length in the local frame grows on the surface.
    ///
    /// Only uniform scaling is ever applied, so the x axis is representative.
    #[inline]
    pub fn stroke_scale(&self) -> f32 {
        self.current.matrix2.x_axis.length()
    }
}

/// A line in surface coordinates, as it will appear on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Hsl,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Hsl),
    Line(Segment),
}

/// A [`Canvas`] that records what was drawn.
///
/// Lines are stored already transformed, with their width scaled by the
/// transform, so replaying needs no transform state. `clear` drops the
/// previous contents, just like clearing a real canvas.
#[derive(Clone, Debug)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
    transform: TransformStack,
    stroke_width: f32,
    stroke_color: Hsl,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform: TransformStack::new(),
            stroke_width: 1.0,
            stroke_color: Hsl::new(0.0, 0.0, 0.0),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(s) => Some(s),
            DrawCommand::Clear(_) => None,
        })
    }

    /// The color of the most recent `clear`, if any.
    pub fn background(&self) -> Option<Hsl> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            DrawCommand::Line(_) => None,
        })
    }

    pub fn transform(&self) -> &TransformStack {
        &self.transform
    }
}

impl Canvas for Recorder {
    fn clear(&mut self, color: Hsl) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn set_stroke_color(&mut self, color: Hsl) {
        self.stroke_color = color;
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line(Segment {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
            width: self.stroke_width * self.transform.stroke_scale(),
            color: self.stroke_color,
        }));
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform.translate(offset);
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform.rotate(degrees);
    }

    fn scale(&mut self, factor: f32) {
        self.transform.scale(factor);
    }

    fn push_transform(&mut self) {
        self.transform.push();
    }

    fn pop_transform(&mut self) {
        self.transform.pop();
    }

    fn reset_transform(&mut self) {
        self.transform.reset();
    }
}
