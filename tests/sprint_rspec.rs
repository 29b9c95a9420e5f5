//! Behaviour tests for the farmer's sprint cycle using rust-rspec.
//!
//! Verifies the speed multiplier over the sprint, recovery and rest windows
//! and that a dead farmer cannot sprint.

use glam::Vec2;
use turkey_field::farmer::{Farmer, SprintPhase};

#[derive(Clone, Debug)]
struct Runner {
    farmer: Farmer,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            farmer: Farmer::new(Vec2::new(375.0, 375.0), 55.0, test_utils::bounds(), 0.0),
        }
    }
}

#[test]
fn sprint_doubles_then_halves_then_restores_speed() {
    rspec::run(&rspec::given("a farmer standing in the field", Runner::default(), |ctx| {
        ctx.when("they sprint at t=0", |ctx| {
            ctx.before_each(|runner| runner.farmer.sprint(0.0));
            ctx.then("speed is doubled through t=5", |runner| {
                for now in [0.0, 2.5, 5.0] {
                    assert_eq!(runner.farmer.speed_multiplier(now), 2.0);
                }
            });
            ctx.then("speed is halved until t=15", |runner| {
                for now in [5.01, 10.0, 15.0] {
                    assert_eq!(runner.farmer.speed_multiplier(now), 0.5);
                }
            });
            ctx.then("speed is back to normal afterwards", |runner| {
                assert_eq!(runner.farmer.speed_multiplier(15.01), 1.0);
                assert_eq!(runner.farmer.sprint_phase(60.0), SprintPhase::Idle);
            });
        });
        ctx.when("they die before sprinting", |ctx| {
            ctx.before_each(|runner| {
                *runner = Runner::default();
                runner.farmer.make_dead("eaten");
                runner.farmer.sprint(0.0);
            });
            ctx.then("the sprint never starts", |runner| {
                assert_eq!(runner.farmer.speed_multiplier(1.0), 1.0);
                assert!(runner.farmer.is_dead());
            });
        });
    }));
}
