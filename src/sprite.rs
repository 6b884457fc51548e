use std::path::Path;
use raylib::prelude::*;
use crate::constants::*;
use crate::error::{GliderError, GliderResult};
use crate::texture_loader::load_texture_with_exif_rotation;

enum SpriteImage {
    Texture(Texture2D),
    // Drawn once at startup; render textures come out upside down
    Rendered(RenderTexture2D),
}

/// The picture carried by the window. Its long axis points along +x, so a
/// rotation of 0 means travelling to the right.
pub struct Sprite {
    image: SpriteImage,
    rotation: f32,
}

impl Sprite {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, path: Option<&Path>) -> GliderResult<Self> {
        match path {
            Some(path) => Ok(Self {
                image: SpriteImage::Texture(load_texture_with_exif_rotation(rl, thread, path)?),
                rotation: 0.0,
            }),
            None => Self::rocket(rl, thread),
        }
    }

    /// Built-in rocket, nose to the right.
    pub fn rocket(rl: &mut RaylibHandle, thread: &RaylibThread) -> GliderResult<Self> {
        let mut target = rl.load_render_texture(thread, ROCKET_LENGTH as u32, ROCKET_WIDTH as u32)
            .map_err(|e| GliderError::texture(format!("rocket render texture: {}", e)))?;

        let length = ROCKET_LENGTH as f32;
        let mid = ROCKET_WIDTH as f32 * 0.5;

        rl.draw_texture_mode(thread, &mut target, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLANK);

            // Fins, body, nose, porthole, exhaust
            d.draw_rectangle(18, 2, 16, ROCKET_WIDTH - 4, Color::MAROON);
            d.draw_rectangle(16, ROCKET_WIDTH / 2 - 9, 70, 18, Color::LIGHTGRAY);
            d.draw_poly(Vector2::new(length - 22.0, mid), 3, 22.0, 0.0, Color::RED);
            d.draw_circle(66, ROCKET_WIDTH / 2, 5.0, Color::SKYBLUE);
            d.draw_poly(Vector2::new(10.0, mid), 3, 10.0, 180.0, Color::ORANGE);
        });

        Ok(Self {
            image: SpriteImage::Rendered(target),
            rotation: 0.0,
        })
    }

    pub fn size(&self) -> (f32, f32) {
        match &self.image {
            SpriteImage::Texture(t) => (t.width() as f32, t.height() as f32),
            SpriteImage::Rendered(t) => (t.width() as f32, t.height() as f32),
        }
    }

    /// Square box that holds the sprite at any rotation.
    pub fn max_size(&self) -> (f32, f32) {
        let (width, height) = self.size();
        let diagonal = width.hypot(height);
        (diagonal, diagonal)
    }

    pub fn rotate(&mut self, angle_degrees: f32) {
        self.rotation = angle_degrees;
    }

    /// Draws the sprite centred in a square window of side `window_size`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, window_size: f32) {
        let (tex_width, tex_height) = self.size();
        let centre = window_size * 0.5;

        // Relative to the dest rectangle (ie. the centre of the image)
        let origin = Vector2::new(tex_width * 0.5, tex_height * 0.5);
        let dest = Rectangle::new(centre, centre, tex_width, tex_height);

        match &self.image {
            SpriteImage::Texture(texture) => d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                dest,
                origin,
                self.rotation,
                Color::WHITE,
            ),
            SpriteImage::Rendered(target) => d.draw_texture_pro(
                target,
                Rectangle::new(0.0, 0.0, tex_width, -tex_height),
                dest,
                origin,
                self.rotation,
                Color::WHITE,
            ),
        }
    }
}
