// main.rs
//
// Headless session: load a drawing, let the scheduler run it for a while,
// then write the accumulated trace (and the last overlay) to an SVG file.
//
//     epicycles <drawing.json> [seconds] [out.svg]
//
// Log verbosity follows RUST_LOG, e.g. `RUST_LOG=epicycles=debug`.

use std::fs;
use std::time::Duration;

use epicycles::io::json::DrawingData;
use epicycles::io::svg::{layers_to_svg, outlines_to_svg};
use epicycles::sampling::sample_outline;
use epicycles::scheduler::Scheduler;
use epicycles::viewport::Viewport;
use epicycles::{Color, Command, EngineConfig, RecordingSurface};
use nalgebra::Point2;
use tracing::info;
use tracing_subscriber::EnvFilter;

const VIEWPORT: Viewport = Viewport::new(1280.0, 900.0);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(drawing_path) = args.next() else {
        eprintln!("usage: epicycles <drawing.json> [seconds] [out.svg]");
        std::process::exit(2);
    };
    let seconds: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(2.0);
    let out_path = args.next().unwrap_or_else(|| "epicycles.svg".to_string());

    let config = EngineConfig::default();
    let engine = DrawingData::from_file(&drawing_path)?.into_engine(VIEWPORT, config.clone())?;
    info!(path = %drawing_path, curves = engine.curve_count(), "drawing loaded");

    // reference outline of every curve at the starting term count
    let outlines: Vec<Vec<Point2<_>>> = (0..engine.curve_count())
        .filter_map(|curve| engine.terms(curve))
        .map(|terms| {
            sample_outline(terms, engine.term_count(), 2000)
                .into_iter()
                .map(|p| VIEWPORT.to_screen(p * engine.scale_factor()))
                .collect()
        })
        .collect();
    let outline_path = match out_path.strip_suffix(".svg") {
        Some(stem) => format!("{stem}.outline.svg"),
        None => format!("{out_path}.outline.svg"),
    };
    let outline_svg = outlines_to_svg(VIEWPORT, Color::BLACK, config.path_color, &outlines);
    fs::write(&outline_path, outline_svg.to_string())?;

    let (scheduler, control) = Scheduler::new(engine, RecordingSurface::new(), RecordingSurface::new());
    let session = tokio::spawn(scheduler.run());

    control.send(Command::Toggle)?;
    tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
    control.send(Command::Quit)?;

    let report = session.await?;
    info!(ticks = report.ticks, "session finished");

    let document = layers_to_svg(VIEWPORT, Color::BLACK, &[&report.persistent, &report.transient]);
    fs::write(&out_path, document.to_string())?;
    info!(out = %out_path, outline = %outline_path, "wrote svg");
    Ok(())
}
