//! State of one game session and how wins scale the next one.
//!
//! A session is rebuilt wholesale on reset. Only the win count survives,
//! held by the field and fed back in through [`Difficulty::for_wins`].

use log::info;
use rand::Rng;

use crate::config::FieldConfig;
use crate::farmer::Farmer;
use crate::rng::RngExt;
use crate::timeline::SpawnSchedule;
use crate::turkey::{Turkey, TurkeyId};

/// Session parameters derived from the win count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Turkeys released at the start of play; non-positive releases none.
    pub starting_turkeys: i32,
    /// Chance a steadily spawned turkey arrives infected.
    pub infection_chance: f64,
    /// Catches needed to win.
    pub quota: u32,
    /// Population cap, also the zombie count that ends the game.
    pub max_turkeys: u32,
}

impl Difficulty {
    /// Difficulty after `wins` victories.
    ///
    /// The starting flock shrinks without a floor, so enough wins leave the
    /// field empty at the start of play.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::config::FieldConfig;
    /// use turkey_field::session::Difficulty;
    /// let hard = Difficulty::for_wins(&FieldConfig::default(), 2);
    /// assert_eq!((hard.starting_turkeys, hard.quota, hard.max_turkeys), (3, 20, 40));
    /// ```
    #[must_use]
    pub fn for_wins(config: &FieldConfig, wins: u32) -> Self {
        let scaling = &config.win_scaling;
        let steps = i32::try_from(wins).unwrap_or(i32::MAX);
        Self {
            starting_turkeys: config
                .starting_turkeys
                .saturating_add(scaling.starting_turkeys.saturating_mul(steps)),
            infection_chance: config.infection_chance
                + scaling.infection_chance * f64::from(wins),
            quota: config
                .quota
                .saturating_add(scaling.quota.saturating_mul(wins)),
            max_turkeys: config
                .max_turkeys
                .saturating_add(scaling.max_turkeys.saturating_mul(wins)),
        }
    }

    /// Population cap as a collection length.
    #[must_use]
    pub fn cap(&self) -> usize {
        usize::try_from(self.max_turkeys).unwrap_or(usize::MAX)
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Story beats before the flock is released.
    Intro,
    /// The farmer is hunting.
    Playing,
    /// The quota was met.
    Won,
    /// The farmer died.
    Lost,
}

/// Line of text shown under the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    text: String,
    shown_at: u32,
}

impl Message {
    /// Current text; empty when nothing is shown.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Everything that is thrown away on reset.
#[derive(Debug, Clone)]
pub struct Session {
    /// Parameters fixed for this session.
    pub difficulty: Difficulty,
    /// The player.
    pub farmer: Farmer,
    /// Every turkey on the field, in spawn order.
    pub turkeys: Vec<Turkey>,
    /// Story seconds visited so far.
    pub seconds_passed: u32,
    /// Story second play began, once it has.
    pub game_start_second: Option<u32>,
    /// Steady spawn timing.
    pub spawn: SpawnSchedule,
    /// Clock time the session began.
    pub started_at: f64,
    message: Message,
    next_turkey: u64,
}

impl Session {
    /// A fresh session after `wins` victories, starting at `now`.
    #[must_use]
    pub fn new(config: &FieldConfig, wins: u32, now: f64) -> Self {
        let difficulty = Difficulty::for_wins(config, wins);
        info!(
            "new session: quota {}, cap {}, infection chance {:.2}",
            difficulty.quota, difficulty.max_turkeys, difficulty.infection_chance
        );
        Self {
            difficulty,
            farmer: Farmer::new(
                config.canvas_center(),
                config.farmer_speed,
                config.bounds,
                now,
            ),
            turkeys: Vec::new(),
            seconds_passed: 0,
            game_start_second: None,
            spawn: SpawnSchedule::new(config.first_spawn_interval_seconds),
            started_at: now,
            message: Message::default(),
            next_turkey: 0,
        }
    }

    /// Shows `text` and stamps it with the current story second.
    pub fn tell(&mut self, text: impl Into<String>) {
        self.message = Message {
            text: text.into(),
            shown_at: self.seconds_passed,
        };
    }

    /// Current player message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Clears the message once it has been up longer than `lifetime`.
    pub fn expire_message(&mut self, lifetime: u32) {
        if self.seconds_passed.saturating_sub(self.message.shown_at) > lifetime {
            self.tell("");
        }
    }

    /// Whether play has begun and the story clock has reached it.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.game_start_second
            .is_some_and(|start| self.seconds_passed >= start)
    }

    /// Whether the player may act on the field.
    #[must_use]
    pub fn accepts_actions(&self) -> bool {
        self.game_start_second
            .is_some_and(|start| self.seconds_passed > start)
    }

    /// Seconds of play shown on the timer.
    #[must_use]
    pub fn play_seconds(&self) -> u32 {
        self.game_start_second
            .map_or(0, |start| self.seconds_passed.saturating_sub(start))
    }

    /// Whether the quota has been met.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.farmer.caught() >= self.difficulty.quota
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.farmer.is_dead() {
            Phase::Lost
        } else if self.game_start_second.is_some() {
            Phase::Playing
        } else {
            Phase::Intro
        }
    }

    /// Number of turkeys that have turned at `now`.
    #[must_use]
    pub fn zombie_count(&self, now: f64) -> usize {
        self.turkeys
            .iter()
            .filter(|turkey| turkey.is_zombie(now))
            .count()
    }

    /// Builds a turkey with the next free id, not yet on the field.
    pub fn hatch<R: Rng + ?Sized>(
        &mut self,
        config: &FieldConfig,
        now: f64,
        rng: &mut R,
    ) -> Turkey {
        let id = TurkeyId(self.next_turkey);
        self.next_turkey += 1;
        Turkey::spawn(
            id,
            config.turkey_speed,
            (
                config.turkey_speed_min_multiplier,
                config.turkey_speed_max_multiplier,
            ),
            config.bounds,
            now,
            rng,
        )
    }

    /// Releases the starting flock and starts the game timer.
    pub fn release_flock<R: Rng + ?Sized>(&mut self, config: &FieldConfig, now: f64, rng: &mut R) {
        let count = u32::try_from(self.difficulty.starting_turkeys).unwrap_or(0);
        for _ in 0..count {
            let turkey = self.hatch(config, now, rng);
            self.turkeys.push(turkey);
        }
        self.game_start_second = Some(self.seconds_passed);
        info!("play started with {count} turkey(s)");
    }

    /// Releases a sick turkey on the side facing away from the farmer.
    pub fn release_sick_turkey<R: Rng + ?Sized>(
        &mut self,
        config: &FieldConfig,
        now: f64,
        rng: &mut R,
    ) {
        let mut turkey = self.hatch(config, now, rng);
        turkey.infect_for(now, config.intro_sick_incubation_seconds);
        let far_side = self.farmer.steer().closest_side().opposite();
        turkey.place(config.bounds.project_onto(turkey.position(), far_side));
        self.turkeys.push(turkey);
    }

    /// Adds a turkey if the steady schedule says one is due this second.
    ///
    /// Returns whether a turkey joined.
    pub fn spawn_if_due<R: Rng + ?Sized>(
        &mut self,
        config: &FieldConfig,
        now: f64,
        rng: &mut R,
    ) -> bool {
        if !self
            .spawn
            .is_due(self.seconds_passed, self.turkeys.len(), self.difficulty.cap())
        {
            return false;
        }
        let mut turkey = self.hatch(config, now, rng);
        if rng.chance(self.difficulty.infection_chance) {
            let incubation = rng.gen_range(
                config.spawn_incubation_min_seconds..config.spawn_incubation_max_seconds,
            );
            turkey.infect_for(now, f64::from(incubation));
        }
        self.turkeys.push(turkey);
        self.spawn.reschedule(
            config.spawn_interval_min_seconds,
            config.spawn_interval_max_seconds,
            rng,
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::field_rng;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 10, 30)]
    #[case(1, 4, 15, 35)]
    #[case(6, -1, 40, 60)]
    fn difficulty_scales_with_wins(
        #[case] wins: u32,
        #[case] starting: i32,
        #[case] quota: u32,
        #[case] cap: u32,
    ) {
        let difficulty = Difficulty::for_wins(&FieldConfig::default(), wins);
        assert_eq!(difficulty.starting_turkeys, starting);
        assert_eq!(difficulty.quota, quota);
        assert_eq!(difficulty.max_turkeys, cap);
    }

    #[test]
    fn negative_flock_releases_nobody() {
        let config = FieldConfig::default();
        let mut session = Session::new(&config, 7, 0.0);
        session.release_flock(&config, 0.0, &mut field_rng(Some(1)));
        assert!(session.turkeys.is_empty());
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn sick_turkey_lands_across_from_the_farmer() {
        let config = FieldConfig::default();
        let mut session = Session::new(&config, 0, 0.0);
        session.farmer.set_target(glam::Vec2::new(375.0, 60.0));
        let mut rng = field_rng(Some(2));
        let mut clock = 0.0;
        while session.farmer.position().y > 60.0 {
            session.farmer.advance(clock);
            clock += 0.5;
        }
        session.release_sick_turkey(&config, clock, &mut rng);
        let sick = session.turkeys.first().expect("sick turkey");
        assert!(sick.is_infected());
        assert!((sick.position().y - 650.0).abs() < f32::EPSILON);
    }

    #[test]
    fn messages_expire_after_their_lifetime() {
        let mut session = Session::new(&FieldConfig::default(), 0, 0.0);
        session.seconds_passed = 5;
        session.tell("hello");
        session.seconds_passed = 11;
        session.expire_message(6);
        assert_eq!(session.message().text(), "hello");
        session.seconds_passed = 12;
        session.expire_message(6);
        assert_eq!(session.message().text(), "");
    }
}
