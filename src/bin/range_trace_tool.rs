use chart_range::api::{RangeSelectorConfig, RangeSelectorEngine, SelectionSnapshot};
use chart_range::core::{ChartPixelBounds, Reading};
use chart_range::interaction::{DragMode, RangeSelection};
use chart_range::render::NullRenderer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: range_trace_tool --input <path> [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GestureTraceFile {
    trace_name: String,
    #[serde(default)]
    config: Option<RangeSelectorConfig>,
    layout: ChartPixelBounds,
    readings: Vec<TraceReading>,
    #[serde(default)]
    initial_range: Option<RangeSelection>,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceReading {
    timestamp: DateTime<Utc>,
    value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TraceStep {
    PanBegin { x: f64 },
    PanUpdate { x: f64 },
    PanEnd,
    PinchBegin,
    PinchUpdate { scale: f64 },
    PinchEnd,
    Layout { bounds: ChartPixelBounds },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StepOutcome {
    step_index: usize,
    mode: DragMode,
    start_px: Option<f64>,
    end_px: Option<f64>,
    zoom_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    committed: Option<RangeSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GestureTraceResult {
    trace_name: String,
    steps: Vec<StepOutcome>,
    commits: Vec<RangeSelection>,
    final_snapshot: SelectionSnapshot,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = chart_range::telemetry::init_default_tracing();
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace: GestureTraceFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let result = replay(trace)?;
    let json = serde_json::to_string_pretty(&result)
        .map_err(|err| format!("failed to serialize result: {err}"))?;
    match &args.output {
        Some(path) => write_output(path, &json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn replay(trace: GestureTraceFile) -> Result<GestureTraceResult, String> {
    let config = trace.config.unwrap_or_default();
    let mut engine =
        RangeSelectorEngine::new(NullRenderer::default(), config).map_err(|e| e.to_string())?;

    let readings = trace
        .readings
        .into_iter()
        .map(|reading| Reading::new(reading.timestamp, reading.value))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    engine.set_readings(readings);
    engine.publish_layout(trace.layout);
    if let Some(range) = trace.initial_range {
        engine.set_initial_range(range.start, range.end);
    }

    let mut steps = Vec::with_capacity(trace.steps.len());
    let mut commits = Vec::new();
    for (step_index, step) in trace.steps.into_iter().enumerate() {
        let mut committed = None;
        match step {
            TraceStep::PanBegin { x } => {
                engine.pan_begin(x);
            }
            TraceStep::PanUpdate { x } => {
                engine.pan_update(x);
            }
            TraceStep::PanEnd => {
                committed = engine.pan_end();
                commits.extend(committed);
            }
            TraceStep::PinchBegin => engine.pinch_begin(),
            TraceStep::PinchUpdate { scale } => {
                engine.pinch_update(scale);
            }
            TraceStep::PinchEnd => engine.pinch_end(),
            TraceStep::Layout { bounds } => engine.publish_layout(bounds),
        }
        steps.push(StepOutcome {
            step_index,
            mode: engine.selector().mode(),
            start_px: engine.selector().start().pixel_offset,
            end_px: engine.selector().end().pixel_offset,
            zoom_level: engine.zoom_level(),
            committed,
        });
    }

    Ok(GestureTraceResult {
        trace_name: trace.trace_name,
        steps,
        commits,
        final_snapshot: engine.snapshot(),
    })
}

fn write_output(path: &Path, json: &str) -> Result<(), String> {
    fs::write(path, json).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs { input, output })
}
