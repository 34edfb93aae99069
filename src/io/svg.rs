//! SVG export of recorded frames and sampled outlines.

use crate::float_types::Real;
use crate::surface::{Color, DrawCommand, RecordingSurface};
use crate::viewport::Viewport;
use nalgebra::Point2;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path, Rectangle};

fn blank_document(viewport: Viewport, background: Color) -> Document {
    let (w, h) = (viewport.width as f32, viewport.height as f32);
    Document::new()
        .set("viewBox", (0, 0, w, h))
        .set("width", w)
        .set("height", h)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", w)
                .set("height", h)
                .set("fill", background.to_hex()),
        )
}

/// Paints the layers in order (bottom first) onto a `viewport`-sized canvas.
///
/// Typically `&[&persistent, &transient]`, so the overlay sits on the trace.
pub fn layers_to_svg(viewport: Viewport, background: Color, layers: &[&RecordingSurface]) -> Document {
    let mut document = blank_document(viewport, background);
    for layer in layers {
        for command in layer.commands() {
            match command {
                DrawCommand::Line { from, to, color } => {
                    document = document.add(
                        Line::new()
                            .set("x1", from.x as f32)
                            .set("y1", from.y as f32)
                            .set("x2", to.x as f32)
                            .set("y2", to.y as f32)
                            .set("stroke", color.to_hex())
                            .set("stroke-width", 1),
                    );
                },
                DrawCommand::Circle { center, radius, color } => {
                    document = document.add(
                        Circle::new()
                            .set("cx", center.x as f32)
                            .set("cy", center.y as f32)
                            .set("r", *radius as f32)
                            .set("fill", "none")
                            .set("stroke", color.to_hex())
                            .set("stroke-width", 1),
                    );
                },
                DrawCommand::Clear => {},
            }
        }
    }
    document
}

/// One closed `<path>` per outline, each through screen-space points, e.g.
/// sampled outlines mapped with [`Viewport::to_screen`].
pub fn outlines_to_svg(
    viewport: Viewport,
    background: Color,
    stroke: Color,
    outlines: &[Vec<Point2<Real>>],
) -> Document {
    let mut document = blank_document(viewport, background);
    for points in outlines {
        let Some((first, rest)) = points.split_first() else {
            continue;
        };
        let data = rest
            .iter()
            .fold(Data::new().move_to((first.x as f32, first.y as f32)), |data, p| {
                data.line_to((p.x as f32, p.y as f32))
            })
            .close();
        document = document.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", stroke.to_hex())
                .set("stroke-width", 1),
        );
    }
    document
}
