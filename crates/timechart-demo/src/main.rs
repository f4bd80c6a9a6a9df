// File: crates/timechart-demo/src/main.rs
// Summary: Demo loads a time series CSV, lays out a two-row chart and replays a scripted gesture session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use timechart_core::{
    AxisSlot, ChartConfig, ChartContainer, LayoutResult, Modifiers, Notification, PointerEvent, RowDescriptor,
    TimeRange,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "timechart-demo", about = "Replay pan/zoom gestures against a chart layout")]
struct Args {
    /// CSV with `time_ms,value` rows; a synthetic day of samples is used when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML chart configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width in pixels (overrides the config file).
    #[arg(long)]
    width: Option<f64>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading chart config");
            ChartConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?
        }
        None => ChartConfig::default(),
    };
    if let Some(w) = args.width {
        config.layout.width = w;
    }
    // The demo is about interaction; switch it on unless the file said otherwise.
    if args.config.is_none() {
        config.interaction.pan_enabled = true;
        config.interaction.drag_zoom_enabled = true;
        config.interaction.min_duration_ms = 60_000;
    }

    let samples = match &args.data {
        Some(path) => load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => synthetic_day(),
    };
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }
    println!("Loaded {} samples", samples.len());

    let range = extents(&samples)?;
    println!("Time range: {range} ({})", range.humanize_duration());

    let rows = vec![
        RowDescriptor::new(200.0)
            .axis(AxisSlot::new("value", 50.0))
            .plot()
            .axis(AxisSlot::named("delta")),
        RowDescriptor::new(80.0)
            .axis(AxisSlot::named("count"))
            .axis(AxisSlot::new("rate", 45.0))
            .plot(),
    ];
    let mut chart = ChartContainer::new(rows, range, config).context("initial layout failed")?;
    print_layout(chart.layout());

    let layout = chart.layout();
    let left = layout.plot_left();
    let w = layout.plot_width;
    let y = layout.rows_top() + 20.0;
    let script = [
        PointerEvent::Move { x: left + w * 0.5, y, button_held: false },
        PointerEvent::Down { x: left + w * 0.5, y, modifiers: Modifiers::NONE },
        PointerEvent::Move { x: left + w * 0.6, y, button_held: true },
        PointerEvent::Move { x: left + w * 0.7, y, button_held: true },
        PointerEvent::Up { x: left + w * 0.7, y },
        PointerEvent::Wheel { x: left + w * 0.25, y, delta_y: -300.0 },
        PointerEvent::Down { x: left + w * 0.2, y, modifiers: Modifiers::SHIFT },
        PointerEvent::Move { x: left + w * 0.4, y, button_held: true },
        PointerEvent::Up { x: left + w * 0.4, y },
        PointerEvent::Down { x: left + w * 0.3, y, modifiers: Modifiers::NONE },
        PointerEvent::Up { x: left + w * 0.3, y },
        PointerEvent::Leave,
    ];

    for event in &script {
        let notifications = chart.dispatch(event).context("layout failed while replaying gestures")?;
        println!("{event:?}");
        for n in &notifications {
            print_notification(n);
        }
    }

    let final_range = chart.time_range();
    let visible = samples.iter().filter(|(t, _)| final_range.contains(timechart_core::time_range::time_from_millis(*t))).count();
    println!("Final range: {final_range}; {visible} of {} samples visible", samples.len());
    Ok(())
}

fn print_layout(layout: &LayoutResult) {
    println!(
        "Layout: left {:?} = {}px, right {:?} = {}px, plot {}px, height {}px",
        layout.left_widths, layout.left_width, layout.right_widths, layout.right_width, layout.plot_width, layout.total_height
    );
    for row in &layout.rows {
        let axes: Vec<String> = row.axes.iter().map(|a| format!("{}@{}", a.id, a.x)).collect();
        println!("  row {} at y={} h={} axes [{}]", row.index, row.offset, row.height, axes.join(", "));
    }
    for e in &layout.row_errors {
        println!("  skipped: {e}");
    }
}

fn print_notification(n: &Notification) {
    match n {
        Notification::TimeRangeChanged(r) => println!("  -> time range {r}"),
        Notification::ZoomBoxPreview(Some(r)) => println!("  -> zoom box {r}"),
        Notification::ZoomBoxPreview(None) => println!("  -> zoom box cleared"),
        Notification::TrackerChanged(Some(t)) => println!("  -> tracker {} at x={:.1}", t.time, t.x),
        Notification::TrackerChanged(None) => println!("  -> tracker hidden"),
        Notification::BackgroundClick => println!("  -> background click"),
    }
}

fn extents(samples: &[(i64, f64)]) -> Result<TimeRange> {
    let begin = samples.iter().map(|(t, _)| *t).min().unwrap_or(0);
    let end = samples.iter().map(|(t, _)| *t).max().unwrap_or(0);
    // Give single-sample series some width.
    let end = if end == begin { begin + 1_000 } else { end };
    Ok(TimeRange::from_millis(begin, end)?)
}

/// One sample per minute over a day, a slow sine.
fn synthetic_day() -> Vec<(i64, f64)> {
    let start = 1_700_000_000_000i64;
    (0..1_440)
        .map(|i| {
            let t = start + i * 60_000;
            (t, (i as f64 / 90.0).sin() * 10.0 + 20.0)
        })
        .collect()
}

fn load_series_csv(path: &Path) -> Result<Vec<(i64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let col = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
    };
    let it = col(&["time_ms", "time", "timestamp", "t"]).unwrap_or(0);
    let iv = col(&["value", "v", "y"]).unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let t = rec.get(it).and_then(|s| s.trim().parse::<f64>().ok());
        let v = rec.get(iv).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(t), Some(v)) = (t, v) {
            out.push((t as i64, v));
        }
    }
    Ok(out)
}
