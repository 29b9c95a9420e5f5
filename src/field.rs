//! The turkey field: owns every entity, runs the frame loop and routes input.
//!
//! One call to [`Field::draw`] is one frame. Within a frame the order is
//! fixed: the clock advances, the extinction check runs, the story catches up
//! second by second, the farmer moves, then every turkey moves against a
//! snapshot taken after the farmer's move. Bites and kills raised by zombies
//! are applied once the whole flock has moved. Rendering reads the resulting
//! state and never mutates the simulation.

use glam::Vec2;
use log::{debug, info};

use crate::appearance::ImageId;
use crate::clock::SimClock;
use crate::config::{ConfigError, FieldConfig};
use crate::farmer::Farmer;
use crate::hud::{progress_text, timer_text};
use crate::input::{PointerButton, UnknownButton};
use crate::render::{Canvas, Color, Font, MissingImage, MissingImageLog};
use crate::rng::{field_rng, FieldRng};
use crate::session::{Phase, Session};
use crate::steering::Steerable;
use crate::timeline::{Beat, EATEN_MESSAGE, EXTINCTION_MESSAGE, WIN_MESSAGE};
use crate::turkey::{Senses, Turkey, TurkeyId, TurkeySighting};
use crate::TARGET_DEADBAND;

/// Vertical position of the title banner.
const TITLE_Y: f32 = 10.0;

/// The whole game.
#[derive(Debug)]
pub struct Field {
    config: FieldConfig,
    rng: FieldRng,
    clock: SimClock,
    wins: u32,
    session: Session,
    missing: MissingImageLog,
}

impl Field {
    /// Builds a field in its intro phase.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `config` fails validation.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::config::FieldConfig;
    /// use turkey_field::field::Field;
    /// use turkey_field::session::Phase;
    ///
    /// let field = Field::new(FieldConfig { seed: Some(1), ..FieldConfig::default() })?;
    /// assert_eq!(field.phase(), Phase::Intro);
    /// # Ok::<(), turkey_field::config::ConfigError>(())
    /// ```
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = field_rng(config.seed);
        let clock = SimClock::new(config.max_frame_seconds);
        let session = Session::new(&config, 0, clock.now());
        Ok(Self {
            config,
            rng,
            clock,
            wins: 0,
            session,
            missing: MissingImageLog::default(),
        })
    }

    /// Configuration the field was built with.
    #[must_use]
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Current simulation time in seconds.
    #[must_use]
    pub const fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Sessions won so far.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// State of the running session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the running session, for hosts staging scenarios.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// The player.
    #[must_use]
    pub const fn farmer(&self) -> &Farmer {
        &self.session.farmer
    }

    /// Every turkey on the field.
    #[must_use]
    pub fn turkeys(&self) -> &[Turkey] {
        &self.session.turkeys
    }

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Text currently shown to the player.
    #[must_use]
    pub fn message(&self) -> &str {
        self.session.message().text()
    }

    /// Images the canvas could not resolve so far.
    #[must_use]
    pub const fn missing_images(&self) -> &MissingImageLog {
        &self.missing
    }

    /// Throws the session away and starts a new intro at the current time.
    pub fn reset(&mut self) {
        info!("resetting session after {} win(s)", self.wins);
        self.session = Session::new(&self.config, self.wins, self.clock.now());
    }

    /// Advances the simulation by `elapsed_seconds` and renders the result.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, elapsed_seconds: f64) {
        self.advance(elapsed_seconds);
        self.render(canvas);
    }

    /// Runs one frame of simulation without drawing.
    pub fn advance(&mut self, elapsed_seconds: f64) {
        self.clock.advance(elapsed_seconds);
        let now = self.clock.now();

        let cap = self.session.difficulty.cap();
        if self.session.zombie_count(now) >= cap {
            self.session.farmer.make_dead(EXTINCTION_MESSAGE);
        }

        if self.session.is_won() {
            if self.session.message().text() != WIN_MESSAGE {
                info!("session won with {} catches", self.session.farmer.caught());
                self.session.tell(WIN_MESSAGE);
            }
            return;
        }

        if let Some(cause) = self.session.farmer.death_message().map(str::to_owned) {
            self.session.tell(cause);
        } else {
            self.catch_up_story(now);
        }

        if self.session.has_started() {
            if let Some(notice) = self.session.farmer.advance(now) {
                self.session.tell(notice.message());
            }
        } else {
            self.session.farmer.face_south();
        }

        if !self.session.farmer.is_dead() {
            self.move_flock(now);
        }
    }

    fn catch_up_story(&mut self, now: f64) {
        let due = crate::numeric::whole_seconds(now - self.session.started_at);
        while self.session.seconds_passed < due {
            self.session.seconds_passed += 1;
            self.story_second(now);
        }
    }

    fn story_second(&mut self, now: f64) {
        let session = &mut self.session;
        session.expire_message(self.config.message_seconds);
        match Beat::at(session.seconds_passed) {
            Some(Beat::ReleaseFlock) => session.release_flock(&self.config, now, &mut self.rng),
            Some(Beat::ReleaseSickTurkey) => {
                session.release_sick_turkey(&self.config, now, &mut self.rng);
            }
            Some(Beat::CatchHint) if session.farmer.caught() > 0 => {}
            Some(beat) => {
                if let Some(text) = beat.message(session.difficulty.quota) {
                    session.tell(text);
                }
            }
            None => {}
        }
        if session.spawn_if_due(&self.config, now, &mut self.rng) {
            debug!(
                "steady spawn at second {}, next in {}s",
                session.seconds_passed,
                session.spawn.interval()
            );
        }
    }

    fn move_flock(&mut self, now: f64) {
        let flock: Vec<TurkeySighting> = self
            .session
            .turkeys
            .iter()
            .map(|turkey| turkey.sighting(now))
            .collect();
        let senses = Senses {
            farmer: self.session.farmer.position(),
            flock: &flock,
        };

        let mut bitten: Vec<TurkeyId> = Vec::new();
        let mut farmer_eaten = false;
        for turkey in &mut self.session.turkeys {
            let outcome = turkey.update(&senses, now, &mut self.rng);
            bitten.extend(outcome.infected);
            farmer_eaten |= outcome.ate_farmer;
        }

        let incubation = self.config.default_incubation_seconds;
        for turkey in &mut self.session.turkeys {
            if bitten.contains(&turkey.id()) {
                turkey.infect_for(now, incubation);
            }
            turkey.refresh_appearance(now);
        }
        if farmer_eaten {
            self.session.farmer.make_dead(EATEN_MESSAGE);
        }
    }

    /// Retargets the farmer at the pointer unless it is already close.
    pub fn on_pointer_move(&mut self, point: Vec2) {
        let farmer = &mut self.session.farmer;
        if farmer.steer().distance_to(point) > TARGET_DEADBAND {
            farmer.set_target(point);
        }
    }

    /// Handles a pointer event with a button.
    ///
    /// A primary click below the field retries after a win (one step harder)
    /// or a death; anywhere else it tries to catch. Primary clicks are
    /// ignored until play has run for a second. A secondary click sprints.
    pub fn on_pointer_action(&mut self, point: Vec2, button: PointerButton) {
        self.on_pointer_move(point);
        match button {
            PointerButton::Primary if self.session.accepts_actions() => {
                let below_field = point.y > self.config.bounds.bottom();
                if below_field && self.session.is_won() {
                    self.wins += 1;
                    self.reset();
                } else if below_field && self.session.farmer.is_dead() {
                    self.reset();
                } else {
                    self.catch();
                }
            }
            PointerButton::Secondary => self.session.farmer.sprint(self.clock.now()),
            PointerButton::Primary | PointerButton::None => {}
        }
    }

    /// Decodes a raw host button code and handles the event.
    ///
    /// # Errors
    /// Returns [`UnknownButton`] for codes other than `-1`, `1` and `3`;
    /// the event is then ignored entirely.
    pub fn on_pointer_event(&mut self, x: f32, y: f32, code: i32) -> Result<(), UnknownButton> {
        let button = PointerButton::try_from(code)?;
        self.on_pointer_action(Vec2::new(x, y), button);
        Ok(())
    }

    /// Catches every non-zombie turkey within reach of the farmer.
    pub fn catch(&mut self) -> u32 {
        let now = self.clock.now();
        self.session
            .farmer
            .try_to_catch(&mut self.session.turkeys, now)
    }

    /// Issues this frame's draw calls.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let now = self.clock.now();
        let bounds = self.config.bounds;
        let center = self.config.canvas_center();
        let session = &self.session;
        let mut painter = Painter {
            canvas,
            missing: &mut self.missing,
            debug: self.config.debug,
        };

        painter.sprite("background", Vec2::ZERO);
        let title = if session.zombie_count(now) == 0 {
            "title"
        } else {
            "title_zombies"
        };
        painter.sprite(title, Vec2::new(bounds.left(), TITLE_Y));

        let timer = Vec2::new(bounds.right() - 60.0, bounds.bottom() + 40.0);
        if session.is_won() {
            painter.text(&timer_text(session.play_seconds()), timer, Font::Regular);
            painter.centered_named("you_win", Vec2::new(center.x - 40.0, center.y - 20.0));
        } else {
            let farmer = &session.farmer;
            if farmer.is_dead() {
                painter.centered_named("game_over", Vec2::new(center.x, center.y - 20.0));
            }
            if session.has_started() {
                painter.text(&timer_text(session.play_seconds()), timer, Font::Regular);
                painter.text(
                    &progress_text(farmer.caught(), session.difficulty.quota),
                    Vec2::new(bounds.right() - 180.0, 30.0),
                    Font::Regular,
                );
            }
            if !farmer.is_dead() {
                painter.walker(farmer.image(now), farmer.steer());
                for turkey in &session.turkeys {
                    painter.walker(turkey.image(now), turkey.steer());
                    if let Some(left) = turkey.seconds_until_zombie(now) {
                        let at = turkey.position() + Vec2::new(-4.0, 6.0);
                        painter.text(&left.to_string(), at, Font::Regular);
                    }
                }
            }
        }

        painter.text(
            session.message().text(),
            Vec2::new(bounds.left(), bounds.bottom() + 45.0),
            Font::Message,
        );
    }
}

struct Painter<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    missing: &'a mut MissingImageLog,
    debug: bool,
}

impl<C: Canvas + ?Sized> Painter<'_, C> {
    fn settle(&mut self, drawn: Result<(), MissingImage>) {
        if let Err(missing) = drawn {
            self.missing.report(missing);
        }
    }

    fn sprite(&mut self, name: &str, at: Vec2) {
        let drawn = self.canvas.draw_sprite(&ImageId::from(name), at.x, at.y);
        self.settle(drawn);
    }

    fn centered_named(&mut self, name: &str, at: Vec2) {
        let drawn = self
            .canvas
            .draw_centered_sprite(&ImageId::from(name), at.x, at.y);
        self.settle(drawn);
    }

    fn text(&mut self, text: &str, at: Vec2, font: Font) {
        self.canvas.draw_text(text, at.x, at.y, font, Color::WHITE);
    }

    fn walker(&mut self, image: Option<&ImageId>, steer: &Steerable) {
        let at = steer.position();
        if let Some(image) = image {
            let drawn = self.canvas.draw_centered_sprite(image, at.x, at.y);
            self.settle(drawn);
        }
        if self.debug {
            self.canvas.draw_line(at, steer.target(), Color::BLACK);
            let label = format!("{}: {}", steer.direction(), steer.facing());
            self.text(&label, at + Vec2::new(0.0, 20.0), Font::Regular);
        }
    }
}
