//! Drawing layers the engine renders into.
//!
//! A frame goes to two independently clearable layers: a *transient* one
//! holding circles and vectors, wiped before every frame, and a *persistent*
//! one holding the traced path, only wiped on request.

use crate::float_types::Real;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, as understood by SVG and canvas.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One primitive emitted by the engine, in screen coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Line {
        from: Point2<Real>,
        to: Point2<Real>,
        color: Color,
    },
    Circle {
        center: Point2<Real>,
        radius: Real,
        color: Color,
    },
    Clear,
}

/// Sink for draw commands.
pub trait Surface {
    fn draw_line(&mut self, from: Point2<Real>, to: Point2<Real>, color: Color);
    fn draw_circle(&mut self, center: Point2<Real>, radius: Real, color: Color);
    fn clear(&mut self);
}

/// Surface that keeps everything drawn since its last clear.
///
/// A clear drops earlier commands and leaves a single [`DrawCommand::Clear`]
/// marker, so draining the recording still replays correctly on a real canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            clears: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times [`Surface::clear`] was called over the surface's lifetime.
    pub const fn clear_count(&self) -> usize {
        self.clears
    }

    /// Takes the recorded commands, leaving the surface empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point2<Real>, Real)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    /// True when nothing has been drawn since the last clear.
    pub fn is_blank(&self) -> bool {
        self.commands.iter().all(|c| matches!(c, DrawCommand::Clear))
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: Point2<Real>, to: Point2<Real>, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_circle(&mut self, center: Point2<Real>, radius: Real, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn draw_line(&mut self, from: Point2<Real>, to: Point2<Real>, color: Color) {
        (**self).draw_line(from, to, color);
    }

    fn draw_circle(&mut self, center: Point2<Real>, radius: Real, color: Color) {
        (**self).draw_circle(center, radius, color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_only_a_marker() {
        let mut surface = RecordingSurface::new();
        surface.draw_line(Point2::origin(), Point2::new(1.0, 1.0), Color::WHITE);
        surface.draw_circle(Point2::origin(), 2.0, Color::WHITE);
        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.circles().count(), 1);

        surface.clear();
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
        assert!(surface.is_blank());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn hex_colours() {
        assert_eq!(Color::CYAN.to_hex(), "#00ffff");
        assert_eq!(Color::rgb(18, 52, 86).to_hex(), "#123456");
    }
}
