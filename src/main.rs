//! Headless runner: plays the game with a simple autopilot for a fixed span
//! of simulated time and logs how it went.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use glam::Vec2;
use log::info;
use ordered_float::OrderedFloat;
use turkey_field::numeric::whole_seconds;
use turkey_field::render::TallyCanvas;
use turkey_field::{
    init_logging, Field, FieldConfig, Phase, PointerButton, SprintPhase, CATCH_RADIUS,
};

/// Distance beyond which the autopilot sprints after its quarry.
const SPRINT_DISTANCE: f32 = 200.0;

/// A farmer-versus-turkeys arcade simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding the default field configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the field's random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds to play
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,

    /// Frames per simulated second
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Debug, Default)]
struct Tally {
    wins: u32,
    losses: u32,
    catches: u32,
}

impl Tally {
    fn record(&mut self, field: &Field, phase: Phase) {
        match phase {
            Phase::Won => self.wins += 1,
            Phase::Lost => self.losses += 1,
            Phase::Intro | Phase::Playing => return,
        }
        self.catches += field.farmer().caught();
        info!(
            "session over ({phase:?}) after {}s: {}",
            field.session().play_seconds(),
            field.message()
        );
    }
}

/// Steers at the nearest catchable turkey, grabs it when in reach and
/// retries once a session ends.
fn autopilot(field: &mut Field) {
    let now = field.now();
    let farmer = field.farmer().position();
    match field.phase() {
        Phase::Intro => {}
        Phase::Won | Phase::Lost => {
            let bounds = field.config().bounds;
            let retry = Vec2::new(bounds.center().x, bounds.bottom() + 20.0);
            field.on_pointer_action(retry, PointerButton::Primary);
        }
        Phase::Playing => {
            let quarry = field
                .turkeys()
                .iter()
                .filter(|turkey| !turkey.is_zombie(now))
                .map(turkey_field::Turkey::position)
                .min_by_key(|position| OrderedFloat(position.distance(farmer)));
            let Some(quarry) = quarry else {
                return;
            };
            let gap = quarry.distance(farmer);
            field.on_pointer_move(quarry);
            if gap <= CATCH_RADIUS {
                field.on_pointer_action(farmer, PointerButton::Primary);
            } else if gap > SPRINT_DISTANCE
                && field.farmer().sprint_phase(now) == SprintPhase::Idle
            {
                field.on_pointer_action(quarry, PointerButton::Secondary);
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.fps > 0, "--fps must be at least 1");

    let mut config = match &args.config {
        Some(path) => FieldConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FieldConfig::default(),
    };
    config.seed = args.seed.or(config.seed);

    let mut field = Field::new(config).context("building the field")?;
    let mut canvas = TallyCanvas::new();
    let frame_seconds = 1.0 / f64::from(args.fps);
    let frames = whole_seconds(args.seconds * f64::from(args.fps));
    let mut tally = Tally::default();
    let mut phase = field.phase();

    for _ in 0..frames {
        autopilot(&mut field);
        field.draw(&mut canvas, frame_seconds);
        let next = field.phase();
        if next != phase {
            tally.record(&field, next);
            phase = next;
        }
    }

    info!(
        "played {:.0}s: {} win(s), {} loss(es), {} turkeys caught, {} on the field now",
        field.now(),
        tally.wins,
        tally.losses,
        tally.catches,
        field.turkeys().len()
    );
    info!(
        "draw calls: {} sprites, {} texts, {} missing images",
        canvas.sprites, canvas.texts, canvas.missing
    );
    Ok(())
}
