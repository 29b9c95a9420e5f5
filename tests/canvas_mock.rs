//! Verifies the render boundary with a mocked canvas.

use glam::Vec2;
use mockall::mock;
use test_utils::{infected_at, seeded_field};
use turkey_field::appearance::ImageId;
use turkey_field::render::{Canvas, Color, Font, MissingImage};

mock! {
    Surface {}
    impl Canvas for Surface {
        fn draw_sprite(&mut self, image: &ImageId, x: f32, y: f32) -> Result<(), MissingImage>;
        fn draw_centered_sprite(
            &mut self,
            image: &ImageId,
            x: f32,
            y: f32,
        ) -> Result<(), MissingImage>;
        fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color);
        fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    }
}

#[test]
fn missing_farmer_image_is_reported_not_fatal() -> anyhow::Result<()> {
    let mut field = seeded_field(21)?;
    let mut surface = MockSurface::new();
    surface
        .expect_draw_sprite()
        .withf(|image, x, y| image.as_str() == "background" && *x == 0.0 && *y == 0.0)
        .times(2)
        .returning(|_, _, _| Ok(()));
    surface
        .expect_draw_sprite()
        .withf(|image, x, y| image.as_str() == "title" && *x == 50.0 && *y == 10.0)
        .times(2)
        .returning(|_, _, _| Ok(()));
    surface
        .expect_draw_centered_sprite()
        .times(2)
        .returning(|image, _, _| Err(MissingImage(image.clone())));
    surface
        .expect_draw_text()
        .withf(|_, x, y, font, color| {
            *font == Font::Message && *x == 50.0 && *y == 695.0 && *color == Color::WHITE
        })
        .times(2)
        .return_const(());
    surface.expect_draw_line().never();

    field.draw(&mut surface, 1.0);
    field.draw(&mut surface, 0.5);

    anyhow::ensure!(
        field.missing_images().len() == 1,
        "the farmer image should be reported once"
    );
    anyhow::ensure!(field.farmer().position() == Vec2::new(375.0, 375.0));
    Ok(())
}

#[test]
fn dead_farmer_frame_shows_game_over() -> anyhow::Result<()> {
    let mut field = seeded_field(22)?;
    for n in 0..30_u8 {
        let x = 60.0 + 18.0 * f32::from(n);
        field
            .session_mut()
            .turkeys
            .push(infected_at(u64::from(n), x, 60.0, 0.0));
    }
    let mut surface = MockSurface::new();
    surface
        .expect_draw_sprite()
        .withf(|image, _, _| image.as_str() == "background" || image.as_str() == "title_zombies")
        .times(2)
        .returning(|_, _, _| Ok(()));
    surface
        .expect_draw_centered_sprite()
        .withf(|image, x, y| image.as_str() == "game_over" && *x == 375.0 && *y == 355.0)
        .times(1)
        .returning(|_, _, _| Ok(()));
    surface
        .expect_draw_text()
        .withf(|text, _, _, font, _| {
            *font == Font::Message && text.starts_with("There are no more healthy turkeys")
        })
        .times(1)
        .return_const(());

    field.draw(&mut surface, 0.1);
    Ok(())
}
