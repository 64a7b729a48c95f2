//! SDL2 backend
//!
//! Thin wrapper over window, canvas, event pump, sprite sheet and font. The
//! only fallible code in the crate lives in construction here: every SDL
//! error maps to a `String` and aborts startup. Draw calls never fail the
//! game; a bad draw is logged and skipped.

use std::time::Instant;

use sdl2::EventPump;
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use super::{Color, Event, Key, Platform, SpriteRegion};
use crate::config::Config;

/// SDL2 implementation of [`Platform`].
///
/// Borrows the texture creator and TTF context, which must be constructed by
/// the caller and outlive the platform.
pub struct SdlPlatform<'a> {
    canvas: Canvas<Window>,
    events: EventPump,
    texture_creator: &'a TextureCreator<WindowContext>,
    sprite_sheet: Texture<'a>,
    font: Font<'a, 'static>,
    start: Instant,
}

impl<'a> SdlPlatform<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        events: EventPump,
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf: &'a Sdl2TtfContext,
        config: &Config,
    ) -> Result<Self, String> {
        let font = ttf.load_font(&config.font_path, config.font_size)?;

        let mut sheet = Surface::load_bmp(&config.sprite_sheet)?;
        // Black pixels in the sheet are transparent
        sheet.set_color_key(true, SdlColor::RGB(0, 0, 0))?;
        let sprite_sheet = texture_creator
            .create_texture_from_surface(&sheet)
            .map_err(|e| e.to_string())?;

        log::info!(
            "Loaded sprite sheet {} and font {}",
            config.sprite_sheet,
            config.font_path
        );

        Ok(Self {
            canvas,
            events,
            texture_creator,
            sprite_sheet,
            font,
            start: Instant::now(),
        })
    }
}

impl Platform for SdlPlatform<'_> {
    fn poll_event(&mut self) -> Option<Event> {
        while let Some(event) = self.events.poll_event() {
            if let Some(mapped) = translate_event(&event) {
                return Some(mapped);
            }
        }
        None
    }

    fn now_millis(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.clear();
    }

    fn draw_sprite(&mut self, x: i32, y: i32, region: &SpriteRegion) {
        let src = Rect::new(region.x, region.y, region.w, region.h);
        let dst = Rect::new(x, y, region.w, region.h);
        if let Err(message) = self.canvas.copy(&self.sprite_sheet, src, dst) {
            log::warn!("Sprite draw failed: {message}");
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let surface = match self.font.render(text).solid(to_sdl(color)) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("Text render failed: {e}");
                return;
            }
        };
        let texture = match self.texture_creator.create_texture_from_surface(&surface) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("Text upload failed: {e}");
                return;
            }
        };
        let dst = Rect::new(x, y, surface.width(), surface.height());
        if let Err(message) = self.canvas.copy(&texture, None, dst) {
            log::warn!("Text draw failed: {message}");
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

fn to_sdl(color: Color) -> SdlColor {
    SdlColor::RGB(color.r, color.g, color.b)
}

fn translate_event(event: &SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Quit),
        SdlEvent::KeyDown {
            keycode: Some(key), ..
        } => translate_key(*key).map(Event::KeyDown),
        SdlEvent::KeyUp {
            keycode: Some(key), ..
        } => translate_key(*key).map(Event::KeyUp),
        _ => None,
    }
}

fn translate_key(key: Keycode) -> Option<Key> {
    match key {
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Space => Some(Key::Space),
        Keycode::Escape => Some(Key::Escape),
        Keycode::G => Some(Key::G),
        Keycode::Q => Some(Key::Q),
        Keycode::Y => Some(Key::Y),
        Keycode::N => Some(Key::N),
        _ => None,
    }
}
