use clap::Parser;
use inkdigit::{
    Candidate, GestureConfig, GestureEvent, Ink, Outcome, Point, Pointer, Recognizer,
    RecognizerConfig, Rejection, Stroke, Surface,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replays recorded ink through the digit recognizer")]
struct Cli {
    /// Ink as JSON: a list of strokes, each a list of `[x, y]` pairs.
    #[arg(short, long, value_name = "FILE", required_unless_present = "print_example")]
    ink: Option<PathBuf>,
    /// Optional JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Include the ranked candidates in the output.
    #[arg(long)]
    explain: bool,
    /// Print the default config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for recognition decisions.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
struct RecognizerConfigJson {
    resample_points: usize,
    max_distance: f32,
    confidence_gap: f32,
    min_points: usize,
    vertical_line_ratio: f32,
    vertical_line_min_height: f32,
    parallel: bool,
}

impl Default for RecognizerConfigJson {
    fn default() -> Self {
        let cfg = RecognizerConfig::default();
        Self {
            resample_points: cfg.resample_points,
            max_distance: cfg.max_distance,
            confidence_gap: cfg.confidence_gap,
            min_points: cfg.min_points,
            vertical_line_ratio: cfg.vertical_line_ratio,
            vertical_line_min_height: cfg.vertical_line_min_height,
            parallel: cfg.parallel,
        }
    }
}

impl From<&RecognizerConfigJson> for RecognizerConfig {
    fn from(value: &RecognizerConfigJson) -> Self {
        Self {
            resample_points: value.resample_points,
            max_distance: value.max_distance,
            confidence_gap: value.confidence_gap,
            min_points: value.min_points,
            vertical_line_ratio: value.vertical_line_ratio,
            vertical_line_min_height: value.vertical_line_min_height,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
struct GestureConfigJson {
    movement_threshold_px: f32,
    debounce_ms: u64,
    min_stroke_points: usize,
    /// Simulated pause between recorded strokes.
    stroke_gap_ms: u64,
    /// Simulated time between consecutive samples.
    sample_interval_ms: u64,
}

impl Default for GestureConfigJson {
    fn default() -> Self {
        let cfg = GestureConfig::default();
        Self {
            movement_threshold_px: cfg.movement_threshold_px,
            debounce_ms: cfg.debounce.as_millis() as u64,
            min_stroke_points: cfg.min_stroke_points,
            stroke_gap_ms: 250,
            sample_interval_ms: 8,
        }
    }
}

impl From<&GestureConfigJson> for GestureConfig {
    fn from(value: &GestureConfigJson) -> Self {
        Self {
            movement_threshold_px: value.movement_threshold_px,
            debounce: Duration::from_millis(value.debounce_ms),
            min_stroke_points: value.min_stroke_points,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct Config {
    output_path: Option<String>,
    recognizer: RecognizerConfigJson,
    gesture: GestureConfigJson,
}

#[derive(Debug, Serialize)]
struct CandidateRecord {
    digit: u8,
    distance: f32,
    penalty: f32,
    score: f32,
}

impl From<&Candidate> for CandidateRecord {
    fn from(value: &Candidate) -> Self {
        Self {
            digit: value.digit.value(),
            distance: value.distance,
            penalty: value.penalty,
            score: value.score(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    /// Digit from classifying the whole ink at once.
    digit: Option<u8>,
    outcome: &'static str,
    rejection: Option<&'static str>,
    /// Digit reported by replaying the strokes through a gesture surface.
    settled: Vec<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<Vec<CandidateRecord>>,
}

fn rejection_name(reason: Rejection) -> &'static str {
    match reason {
        Rejection::TooFewPoints => "too_few_points",
        Rejection::NoCandidates => "no_candidates",
        Rejection::AboveMaxDistance => "above_max_distance",
        Rejection::AmbiguousGap => "ambiguous_gap",
    }
}

fn load_ink(path: &Path) -> Result<Ink, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let strokes: Vec<Vec<[f32; 2]>> = serde_json::from_str(&text)?;
    Ok(strokes
        .into_iter()
        .map(|stroke| {
            stroke
                .into_iter()
                .map(|[x, y]| Point::new(x, y))
                .collect::<Stroke>()
        })
        .collect())
}

/// Feeds every stroke through a surface as pen input and collects the
/// settled digits, the way an interactive session would see them.
fn replay(surface: &mut Surface, ink: &Ink, gesture: &GestureConfigJson) -> Vec<Option<u8>> {
    let sample = Duration::from_millis(gesture.sample_interval_ms);
    let gap = Duration::from_millis(gesture.stroke_gap_ms);
    let mut events: Vec<GestureEvent> = Vec::new();
    let mut now = Instant::now();

    for stroke in ink.strokes() {
        let Some((&first, rest)) = stroke.points().split_first() else {
            continue;
        };
        surface.poll(now, &mut events);
        surface.press(Pointer::pen(), first, now);
        for &p in rest {
            now += sample;
            surface.move_to(p, &mut events);
        }
        surface.release(now, &mut events);
        now += gap;
    }
    if let Some(deadline) = surface.deadline() {
        surface.poll(deadline, &mut events);
    }

    events
        .into_iter()
        .filter_map(|event| match event {
            GestureEvent::Settled { digit, .. } => Some(digit.map(|d| d.value())),
            _ => None,
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("inkdigit=debug".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{}", serde_json::to_string_pretty(&Config::default())?);
        return Ok(());
    }

    let config: Config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let ink_path = cli.ink.ok_or("--ink is required")?;
    let ink = load_ink(&ink_path)?;

    let recognizer = Recognizer::with_config(RecognizerConfig::from(&config.recognizer))?;
    let mut surface = Surface::with_config(GestureConfig::from(&config.gesture), recognizer.clone())?;

    let explanation = recognizer.explain(&ink);
    let (outcome, rejection) = match explanation.outcome {
        Outcome::FastPath(_) => ("fast_path", None),
        Outcome::Accepted(_) => ("accepted", None),
        Outcome::Rejected(reason) => ("rejected", Some(rejection_name(reason))),
    };
    let settled = replay(&mut surface, &ink, &config.gesture);
    tracing::info!(
        strokes = ink.strokes().len(),
        points = ink.point_count(),
        outcome,
        "replayed ink"
    );

    let output = Output {
        digit: explanation.outcome.digit().map(|d| d.value()),
        outcome,
        rejection,
        settled,
        candidates: cli
            .explain
            .then(|| explanation.candidates.iter().map(CandidateRecord::from).collect()),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
