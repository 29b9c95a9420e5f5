//! Scripted intro beats and the steady spawn schedule.
//!
//! The story is keyed to whole seconds since the session started. Each
//! second is visited exactly once, in order, even when a long frame covers
//! several of them.

use rand::Rng;

/// Greeting shown one second in.
pub const VERSION_BANNER: &str = concat!("Turkey Farmer v", env!("CARGO_PKG_VERSION"));

/// Shown when a zombie reaches the farmer.
pub const EATEN_MESSAGE: &str = "You have been eaten by a zombie turkey! Click HERE to try again.";

/// Shown when the zombie population reaches the cap.
pub const EXTINCTION_MESSAGE: &str =
    "There are no more healthy turkeys in the world. Click HERE to retry.";

/// Shown while the session is won.
pub const WIN_MESSAGE: &str = "Click HERE to play again with a little more challenge";

/// Second after which steady spawning begins.
pub const STEADY_SPAWN_AFTER: u32 = 30;

/// One scripted event of the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    /// Show the version banner.
    Banner,
    /// State the catch quota.
    Goal,
    /// Hint at the illness.
    Warning,
    /// Clear the message line.
    Clear,
    /// Release the starting flock and start the game timer.
    ReleaseFlock,
    /// Explain catching, unless the player already caught something.
    CatchHint,
    /// Explain sprinting.
    SprintHint,
    /// Warn about the sick turkey.
    SickWarning,
    /// Release a sick turkey on the far side of the field.
    ReleaseSickTurkey,
}

impl Beat {
    /// Beat scheduled for `second`, if any.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::timeline::Beat;
    /// assert_eq!(Beat::at(15), Some(Beat::ReleaseFlock));
    /// assert_eq!(Beat::at(16), None);
    /// ```
    #[must_use]
    pub const fn at(second: u32) -> Option<Self> {
        match second {
            1 => Some(Self::Banner),
            5 => Some(Self::Goal),
            9 => Some(Self::Warning),
            14 | 25 => Some(Self::Clear),
            15 => Some(Self::ReleaseFlock),
            18 => Some(Self::CatchHint),
            21 => Some(Self::SprintHint),
            26 => Some(Self::SickWarning),
            27 => Some(Self::ReleaseSickTurkey),
            _ => None,
        }
    }

    /// Text this beat shows, if it only speaks to the player.
    #[must_use]
    pub fn message(self, quota: u32) -> Option<String> {
        let text = match self {
            Self::Banner => VERSION_BANNER.to_owned(),
            Self::Goal => format!("Catch {quota} turkeys for Thanksgiving dinner."),
            Self::Warning => "Be careful! There's a strange illness going around.".to_owned(),
            Self::Clear => String::new(),
            Self::CatchHint => "Left-click while near a turkey to catch it!".to_owned(),
            Self::SprintHint => "Right-click to sprint.".to_owned(),
            Self::SickWarning => "Catch the sick turkey before something bad happens!".to_owned(),
            Self::ReleaseFlock | Self::ReleaseSickTurkey => return None,
        };
        Some(text)
    }
}

/// When the next steady spawn is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSchedule {
    interval: u32,
}

impl SpawnSchedule {
    /// A schedule firing every `interval` seconds until rescheduled.
    #[must_use]
    pub const fn new(interval: u32) -> Self {
        Self { interval }
    }

    /// Seconds between spawns.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Whether a turkey should join at `second` given the current
    /// population and cap.
    #[must_use]
    pub const fn is_due(&self, second: u32, population: usize, cap: usize) -> bool {
        second > STEADY_SPAWN_AFTER
            && population < cap
            && self.interval != 0
            && second % self.interval == 0
    }

    /// Draws a fresh interval from `[min, max)`.
    pub fn reschedule<R: Rng + ?Sized>(&mut self, min: u32, max: u32, rng: &mut R) {
        self.interval = if max > min { rng.gen_range(min..max) } else { min };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    #[test]
    fn story_is_sparse() {
        let beats = (0..=40).filter_map(Beat::at).count();
        assert_eq!(beats, 10);
    }

    #[rstest]
    #[case(Beat::Goal, Some("Catch 15 turkeys for Thanksgiving dinner."))]
    #[case(Beat::Clear, Some(""))]
    #[case(Beat::ReleaseFlock, None)]
    fn beat_text(#[case] beat: Beat, #[case] expected: Option<&str>) {
        assert_eq!(beat.message(15).as_deref(), expected);
    }

    #[rstest]
    #[case(30, 5, 30, false)]
    #[case(40, 5, 30, true)]
    #[case(41, 5, 30, false)]
    #[case(40, 30, 30, false)]
    fn spawns_only_on_schedule(
        #[case] second: u32,
        #[case] population: usize,
        #[case] cap: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(SpawnSchedule::new(10).is_due(second, population, cap), expected);
    }

    #[test]
    fn reschedule_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut schedule = SpawnSchedule::new(10);
        for _ in 0..50 {
            schedule.reschedule(2, 20, &mut rng);
            assert!((2..20).contains(&schedule.interval()));
        }
    }
}
