use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use vgshapes::logging::{init_logging, LoggingConfig};
use vgshapes::{lookup_color, Backend, Canvas, GradientStop, Recorder, Rgb};

/// vgshapes-demo: draws a reference card of shapes, paint, text and images
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Image file to show in the image cell
    #[clap(short, long)]
    image: Option<PathBuf>,

    /// Write the raw raster to this file instead of only presenting it
    #[clap(short, long)]
    save: Option<PathBuf>,

    /// Record the drawing calls without touching the display
    #[clap(long)]
    dry_run: bool,

    /// Exit right after drawing instead of waiting for a key
    #[clap(long)]
    no_wait: bool,

    /// Log filter in env_logger syntax, e.g. "debug" or "vgshapes=debug"
    #[clap(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    if args.dry_run {
        let recorder = Recorder::default();
        let canvas = Canvas::init(recorder.clone())?;
        draw(&canvas, &args);
        canvas.finish();
        log::info!("dry run recorded {} drawing calls", recorder.len());
        return Ok(());
    }

    run_native(&args)
}

#[cfg(feature = "openvg")]
fn run_native(args: &Args) -> Result<()> {
    let canvas = Canvas::init(vgshapes::OpenVg::acquire()?)?;
    draw(&canvas, args);

    if !args.no_wait {
        wait_for_key();
    }
    canvas.finish();
    Ok(())
}

#[cfg(not(feature = "openvg"))]
fn run_native(_args: &Args) -> Result<()> {
    anyhow::bail!("built without the `openvg` feature; use --dry-run or rebuild with it enabled")
}

#[cfg(feature = "openvg")]
fn wait_for_key() {
    match vgshapes::RawTerminal::enter() {
        Ok(term) => {
            if let Err(err) = term.read_key() {
                log::warn!("reading key failed: {err}");
            }
        }
        Err(err) => log::warn!("stdin is not a terminal, not waiting: {err}"),
    }
}

/// Draws the reference card on whatever backend the canvas runs on.
fn draw<B: Backend>(canvas: &Canvas<B>, args: &Args) {
    let (width, height) = (canvas.width(), canvas.height());
    let (w, h) = (width as f32, height as f32);
    let cell = w / 6.0;
    let label_size = (w / 80.0).max(8.0) as i32;

    canvas.start_color(width, height, "white", None);

    // title bar
    let stops = [
        GradientStop::new(0.0, lookup_color("steelblue"), 1.0),
        GradientStop::new(1.0, lookup_color("midnightblue"), 1.0),
    ];
    canvas.fill_linear_gradient(0.0, h, w, h, &stops);
    canvas.rect(0.0, h * 0.9, w, h * 0.1);
    canvas.fill_color("white", None);
    canvas.text_mid(w / 2.0, h * 0.935, "vgshapes reference", "sans", label_size * 3);

    let row = h * 0.65;
    let label = |x: f32, y: f32, name: &str| {
        canvas.fill_color("black", None);
        canvas.text_mid(x, y - cell * 0.45, name, "sans", label_size);
    };

    // shapes
    canvas.fill_color("rgb(44,77,232)", None);
    let cx = cell * 0.5;
    canvas.rect(cx - cell * 0.3, row - cell * 0.2, cell * 0.6, cell * 0.4);
    label(cx, row, "Rect");

    let cx = cell * 1.5;
    canvas.fill_color("rgb(44,77,232)", None);
    canvas.roundrect(cx - cell * 0.3, row - cell * 0.2, cell * 0.6, cell * 0.4, 20.0, 20.0);
    label(cx, row, "Roundrect");

    let cx = cell * 2.5;
    canvas.fill_color("rgb(44,77,232)", None);
    canvas.ellipse(cx, row, cell * 0.6, cell * 0.4);
    label(cx, row, "Ellipse");

    let cx = cell * 3.5;
    canvas.fill_radial_gradient(
        cx,
        row,
        cx - cell * 0.1,
        row + cell * 0.1,
        cell * 0.3,
        &[
            GradientStop::new(0.0, Rgb::WHITE, 1.0),
            GradientStop::new(1.0, Rgb::new(44, 77, 232), 1.0),
        ],
    );
    canvas.circle(cx, row, cell * 0.5);
    label(cx, row, "Circle");

    let cx = cell * 4.5;
    canvas.fill_color("rgb(44,77,232)", Some(0.6));
    canvas.polygon(
        &[cx - cell * 0.3, cx, cx + cell * 0.3],
        &[row - cell * 0.2, row + cell * 0.2, row - cell * 0.2],
    );
    label(cx, row, "Polygon");

    // strokes
    let row = h * 0.35;
    canvas.stroke_color("rgb(44,77,232)", None);
    canvas.stroke_width(4.0);
    canvas.fill_color("white", Some(0.0));

    let cx = cell * 0.5;
    canvas.line(cx - cell * 0.3, row, cx + cell * 0.3, row);
    label(cx, row, "Line");

    let cx = cell * 1.5;
    canvas.fill_color("white", Some(0.0));
    canvas.qbezier(cx - cell * 0.3, row, cx, row + cell * 0.4, cx + cell * 0.3, row);
    label(cx, row, "Qbezier");

    let cx = cell * 2.5;
    canvas.fill_color("white", Some(0.0));
    canvas.cbezier(
        cx - cell * 0.3,
        row,
        cx - cell * 0.1,
        row + cell * 0.4,
        cx + cell * 0.1,
        row - cell * 0.4,
        cx + cell * 0.3,
        row,
    );
    label(cx, row, "Cbezier");

    let cx = cell * 3.5;
    canvas.fill_color("white", Some(0.0));
    canvas.arc(cx, row, cell * 0.5, cell * 0.5, 0.0, 180.0);
    label(cx, row, "Arc");

    let cx = cell * 4.5;
    canvas.fill_color("white", Some(0.0));
    canvas.polyline(
        &[cx - cell * 0.3, cx - cell * 0.1, cx + cell * 0.1, cx + cell * 0.3],
        &[row, row + cell * 0.2, row - cell * 0.2, row],
    );
    label(cx, row, "Polyline");
    canvas.stroke_width(0.0);

    // image cell
    let cx = cell * 5.5;
    let (iw, ih) = ((cell * 0.6) as i32, (cell * 0.6) as i32);
    let (ix, iy) = (cx - iw as f32 / 2.0, h * 0.5 - ih as f32 / 2.0);
    match &args.image {
        Some(path) => match canvas.open_image(path) {
            Ok(image) => {
                canvas.translate(ix, iy);
                image.draw();
                canvas.reset_matrix();
            }
            Err(err) => {
                log::warn!("{err}");
                canvas.placeholder_image(ix, iy, iw, ih, &path.display().to_string());
            }
        },
        None => canvas.placeholder_image(ix, iy, iw, ih, "no image"),
    }

    // text
    let y = h * 0.12;
    canvas.fill_color("black", None);
    canvas.text(cell * 0.2, y, "Sans", "sans", label_size * 2);
    canvas.text_mid(w / 2.0, y, "Serif", "serif", label_size * 2);
    canvas.text_end(w - cell * 0.2, y, "Mono", "mono", label_size * 2);

    let caption = "rotated";
    let tw = canvas.text_width(caption, "sans", label_size);
    canvas.translate(w / 2.0, h * 0.2);
    canvas.rotate(10.0);
    canvas.fill_color("gray", None);
    canvas.text(-tw / 2.0, 0.0, caption, "sans", label_size);
    canvas.reset_matrix();

    match &args.save {
        Some(path) => canvas.save_end(path),
        None => canvas.end(),
    }
}
