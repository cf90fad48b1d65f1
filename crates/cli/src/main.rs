use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use convexhull::api::{Algorithm, Point, Viewport};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod record;
mod svg;

use provenance::{write_sidecar, Payload};
use record::HullRecord;
use svg::SvgRenderer;

/// Provenance params of `run`.
#[derive(Serialize)]
struct RunParams<'a> {
    algo: &'a str,
    points: usize,
    vertices: usize,
    polygon: bool,
    shape: Option<&'a str>,
    seed: Option<u64>,
}

/// Provenance params of `figure`.
#[derive(Serialize)]
struct FigureParams<'a> {
    algo: &'a str,
    width: u32,
    height: u32,
    clipped: usize,
}

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls by Graham's scan or Jarvis' march")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and write it as JSON next to a provenance sidecar
    Run {
        /// graham | jarvis
        #[arg(long, default_value = "graham")]
        algo: String,
        /// CSV or Parquet file with `x` and `y` columns
        #[arg(long, conflicts_with = "random")]
        input: Option<String>,
        /// Draw this many random points instead of reading a file
        #[arg(long)]
        random: Option<usize>,
        /// box | disk | circle
        #[arg(long, default_value = "disk")]
        shape: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Render a `run` output as an SVG figure
    Figure {
        #[arg(long)]
        from: String,
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = 600)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            input,
            random,
            shape,
            seed,
            out,
        } => run(&algo, input, random, &shape, seed, &out),
        Action::Figure {
            from,
            out,
            width,
            height,
        } => figure(&from, &out, width, height),
        Action::Report => report(),
    }
}

fn run(
    algo: &str,
    input: Option<String>,
    random: Option<usize>,
    shape: &str,
    seed: u64,
    out: &str,
) -> Result<()> {
    let algo: Algorithm = algo.parse()?;
    tracing::info!(%algo, input = ?input, random = ?random, seed, out, "run");
    let (points, source): (Vec<Point>, String) = match (&input, random) {
        (Some(path), None) => (input::read_points(Path::new(path))?, path.clone()),
        (None, Some(n)) => {
            let shape = input::parse_shape(shape)?;
            (
                input::random_points(n, shape, seed),
                format!("random:{shape:?}:{n}:{seed}"),
            )
        }
        _ => bail!("pass exactly one of --input or --random"),
    };

    let hull = algo
        .build(&points)
        .with_context(|| format!("{} failed on {}", algo.label(), source))?;
    tracing::info!(
        points = points.len(),
        vertices = hull.len(),
        area = hull.signed_area(),
        drawn = hull.polygon().is_some(),
        "hull"
    );

    let out_path = Path::new(out);
    HullRecord::new(algo, &points, &hull).write(out_path)?;
    let payload = Payload::new(&RunParams {
        algo: algo.key(),
        points: points.len(),
        vertices: hull.len(),
        polygon: hull.polygon().is_some(),
        shape: random.map(|_| shape),
        seed: random.map(|_| seed),
    })?
    .with_input(source);
    write_sidecar(out_path, payload)?;
    Ok(())
}

fn figure(from: &str, out: &str, width: u32, height: u32) -> Result<()> {
    tracing::info!(from, out, width, height, "figure");
    let rec = HullRecord::read(Path::new(from))?;
    let mut renderer = SvgRenderer::new(Viewport::new(width, height));
    rec.frame().draw(&mut renderer);
    let clipped = renderer.clipped();
    if clipped > 0 {
        tracing::warn!(clipped, "points outside the normalized viewport");
    }

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, renderer.finish())
        .with_context(|| format!("writing {}", out_path.display()))?;

    let payload = Payload::new(&FigureParams {
        algo: &rec.algo,
        width,
        height,
        clipped,
    })?
    .with_input(from);
    write_sidecar(out_path, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": convexhull::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.key()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
