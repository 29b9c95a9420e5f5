//! Scenario tests for catching, steering and the end-of-game rules.

use anyhow::{ensure, Context, Result};
use approx::relative_eq;
use glam::Vec2;
use rstest::rstest;
use test_utils::{infected_at, playing_field, run_seconds, seeded_config, seeded_field, turkey_at};
use turkey_field::bounds::Bounds;
use turkey_field::farmer::Farmer;
use turkey_field::field::Field;
use turkey_field::session::Phase;
use turkey_field::steering::Steerable;
use turkey_field::timeline::EXTINCTION_MESSAGE;
use turkey_field::CATCH_RADIUS;

fn farmer() -> Farmer {
    Farmer::new(Vec2::new(375.0, 375.0), 55.0, test_utils::bounds(), 0.0)
}

#[test]
fn catching_a_nearby_turkey() -> Result<()> {
    let mut farmer = farmer();
    let mut turkeys = vec![turkey_at(1, 375.0, 400.0)];
    let caught = farmer.try_to_catch(&mut turkeys, 0.0);
    ensure!(caught == 1, "expected one catch, got {caught}");
    ensure!(turkeys.is_empty(), "caught turkey should leave the field");
    ensure!(farmer.caught() == 1, "catch count should be one");
    Ok(())
}

#[rstest]
#[case(CATCH_RADIUS, true)]
#[case(45.01, false)]
fn catch_radius_is_inclusive(#[case] gap: f32, #[case] expected: bool) -> Result<()> {
    let mut farmer = farmer();
    let mut turkeys = vec![turkey_at(1, 375.0 + gap, 375.0)];
    let caught = farmer.try_to_catch(&mut turkeys, 0.0) == 1;
    ensure!(caught == expected, "turkey {gap} away: caught {caught}");
    Ok(())
}

#[test]
fn several_turkeys_in_reach_are_caught_together() -> Result<()> {
    let mut farmer = farmer();
    let mut turkeys = vec![
        turkey_at(1, 380.0, 375.0),
        turkey_at(2, 375.0, 340.0),
        turkey_at(3, 500.0, 500.0),
        infected_at(4, 370.0, 370.0, 0.5),
    ];
    let caught = farmer.try_to_catch(&mut turkeys, 1.0);
    ensure!(caught == 2, "expected two catches, got {caught}");
    let left: Vec<u64> = turkeys.iter().map(|turkey| turkey.id().0).collect();
    ensure!(left == [3, 4], "zombie and distant turkey should remain, got {left:?}");
    Ok(())
}

#[test]
fn steering_converges_on_its_target() -> Result<()> {
    let bounds = Bounds::new(-10.0, 200.0, 10.0, -10.0)?;
    let mut steer = Steerable::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 50.0, bounds);
    steer.advance(0.0, 1.0);
    steer.advance(1.0, 1.0);
    ensure!(
        relative_eq!(steer.position().x, 50.0, epsilon = 1e-4),
        "halfway after one second, got {}",
        steer.position()
    );
    steer.advance(2.0, 1.0);
    ensure!(
        steer.position() == Vec2::new(100.0, 0.0),
        "should snap onto the target, got {}",
        steer.position()
    );
    Ok(())
}

fn fill_with_zombies(field: &mut Field, count: u64) {
    for n in 0..count {
        let x = 60.0 + 18.0 * f32::from(u16::try_from(n % 30).unwrap_or(0));
        let zombie = infected_at(1_000 + n, x, 60.0, 0.0);
        field.session_mut().turkeys.push(zombie);
    }
}

#[test]
fn a_full_house_of_zombies_ends_the_game() -> Result<()> {
    let mut field = seeded_field(11)?;
    fill_with_zombies(&mut field, 30);
    field.advance(0.1);
    ensure!(field.phase() == Phase::Lost, "expected loss, got {:?}", field.phase());
    ensure!(
        field.message() == EXTINCTION_MESSAGE,
        "unexpected message {:?}",
        field.message()
    );
    let before: Vec<Vec2> = field.turkeys().iter().map(|t| t.position()).collect();
    field.advance(1.0);
    let after: Vec<Vec2> = field.turkeys().iter().map(|t| t.position()).collect();
    ensure!(before == after, "turkeys must freeze once the farmer is dead");
    Ok(())
}

#[test]
fn one_zombie_short_of_the_cap_plays_on() -> Result<()> {
    let mut field = seeded_field(11)?;
    fill_with_zombies(&mut field, 29);
    field.advance(0.1);
    ensure!(!field.farmer().is_dead(), "29 zombies should not end the game");
    Ok(())
}

#[test]
fn sick_turkey_arrives_on_the_far_side() -> Result<()> {
    let mut field = seeded_field(5)?;
    run_seconds(&mut field, 27);
    let bounds = field.config().bounds;
    let far_side = field.farmer().steer().closest_side().opposite();
    let sick = field
        .turkeys()
        .iter()
        .find(|turkey| turkey.is_infected())
        .context("a sick turkey should be on the field")?;
    ensure!(
        bounds.distance_from_side(sick.position(), far_side).abs() < 1e-3,
        "sick turkey at {} is not on {far_side:?}",
        sick.position()
    );
    ensure!(
        sick.seconds_until_zombie(field.now()) == Some(4),
        "sick turkey should turn in four seconds"
    );
    Ok(())
}

#[test]
fn steady_spawns_begin_after_thirty_seconds() -> Result<()> {
    let config = turkey_field::config::FieldConfig {
        intro_sick_incubation_seconds: 1_000.0,
        ..seeded_config(3)
    };
    let mut field = Field::new(config)?;
    run_seconds(&mut field, 39);
    let before = field.turkeys().len();
    ensure!(before == 6, "starting flock plus sick turkey, got {before}");
    run_seconds(&mut field, 1);
    let after = field.turkeys().len();
    ensure!(after == 7, "a turkey should join at second 40, got {after}");
    Ok(())
}

#[test]
fn losing_and_retrying_keeps_the_difficulty() -> Result<()> {
    let mut field = playing_field(9)?;
    field.session_mut().farmer.make_dead("eaten");
    field.advance(0.1);
    field.on_pointer_event(375.0, 500.0, 1)?;
    ensure!(field.phase() == Phase::Lost, "a click on the field must not retry");
    field.on_pointer_event(375.0, 700.0, 1)?;
    ensure!(field.phase() == Phase::Intro, "a click below the field retries");
    ensure!(field.wins() == 0, "a loss is not a win");
    ensure!(field.session().difficulty.quota == 10, "quota should not change");
    Ok(())
}
