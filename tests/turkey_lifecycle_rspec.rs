//! Behaviour tests for the turkey infection lifecycle using rust-rspec.
//!
//! Verifies that incubation is strict, that turning is permanent and that the
//! zombie look is applied exactly once.

use turkey_field::turkey::{Health, Turkey};
use turkey_field::DEFAULT_INCUBATION_SECONDS;

#[derive(Clone, Debug)]
struct Coop {
    turkey: Turkey,
    swaps: u32,
}

impl Default for Coop {
    fn default() -> Self {
        Self {
            turkey: test_utils::turkey_at(1, 300.0, 300.0),
            swaps: 0,
        }
    }
}

impl Coop {
    fn observe(&mut self, now: f64) {
        if self.turkey.refresh_appearance(now) {
            self.swaps += 1;
        }
    }
}

#[test]
fn infected_turkey_turns_after_incubation() {
    rspec::run(&rspec::given(
        "a turkey infected at time zero with the default incubation",
        Coop::default(),
        |ctx| {
            ctx.before_each(|coop| {
                coop.turkey.infect_for(0.0, DEFAULT_INCUBATION_SECONDS);
            });
            ctx.when("8.9 seconds have passed", |ctx| {
                ctx.before_each(|coop| coop.observe(8.9));
                ctx.then("it is still only infected", |coop| {
                    assert_eq!(coop.turkey.health(8.9), Health::Infected);
                    assert!(!coop.turkey.is_zombie(8.9));
                    assert_eq!(coop.swaps, 0);
                });
            });
            ctx.when("9.1 seconds have passed and it is observed repeatedly", |ctx| {
                ctx.before_each(|coop| {
                    coop.observe(9.1);
                    coop.observe(9.5);
                    coop.observe(30.0);
                });
                ctx.then("it is a zombie and changed its look once", |coop| {
                    assert!(coop.turkey.is_zombie(9.1));
                    assert_eq!(coop.swaps, 1);
                });
                ctx.then("a second infection cannot reset the clock", |coop| {
                    let mut again = coop.turkey.clone();
                    assert!(!again.infect_for(20.0, DEFAULT_INCUBATION_SECONDS));
                    assert!(again.is_zombie(21.0));
                });
            });
        },
    ));
}
