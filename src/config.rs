//! Runtime configuration
//!
//! Every tuning constant the game reads lives here, loaded once at startup.
//! An optional `pong.json` next to the binary overrides any subset of the
//! defaults; a missing file is fine, a malformed one aborts startup.

use std::path::Path;

use serde::Deserialize;

use crate::sim::GameArea;

/// Game configuration.
///
/// Defaults reproduce the classic table: a 500x400 window at 30 Hz, a 20 px
/// score strip above the play area, 60x15 paddles and a radius-7 ball.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // Window
    pub window_width: i32,
    pub window_height: i32,
    pub window_caption: String,

    // Timing
    pub frames_per_second: u32,

    // Game area
    pub area_left: i32,
    pub area_right: i32,
    pub area_top: i32,
    pub area_bottom: i32,

    // Entity dimensions
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub ball_radius: i32,

    // Start coordinates
    pub computer_start_x: i32,
    pub computer_start_y: i32,
    pub player_start_x: i32,
    pub player_start_y: i32,
    pub ball_start_x: i32,
    pub ball_start_y: i32,

    // Speeds (pixels per tick)
    pub ball_init_speed: i32,
    pub ball_change_speed: i32,
    pub paddle_speed: i32,

    // First side to reach this many points wins the match
    pub score_target: u32,

    // Sprite sheet clips
    pub computer_img_x: i32,
    pub computer_img_y: i32,
    pub player_img_x: i32,
    pub player_img_y: i32,
    pub ball_img_x: i32,
    pub ball_img_y: i32,

    // Assets
    pub sprite_sheet: String,
    pub font_path: String,
    pub font_size: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 500,
            window_height: 400,
            window_caption: "Pong".to_string(),

            frames_per_second: 30,

            area_left: 0,
            area_right: 500,
            area_top: 20,
            area_bottom: 400,

            paddle_width: 60,
            paddle_height: 15,
            ball_radius: 7,

            computer_start_x: (500 - 60) / 2,
            computer_start_y: 20,
            player_start_x: (500 - 60) / 2,
            player_start_y: 400 - 15,
            ball_start_x: 500 / 2,
            ball_start_y: (20 + 400) / 2,

            ball_init_speed: 5,
            ball_change_speed: 1,
            paddle_speed: 5,

            score_target: 5,

            computer_img_x: 0,
            computer_img_y: 0,
            player_img_x: 0,
            player_img_y: 16,
            ball_img_x: 68,
            ball_img_y: 1,

            sprite_sheet: "assets/sprites.bmp".to_string(),
            font_path: "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string(),
            font_size: 12,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = serde_json::from_str(&text)
                    .map_err(|e| format!("invalid config {}: {e}", path.display()))?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(_) => {
                log::info!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Milliseconds per tick.
    pub fn frame_interval(&self) -> u32 {
        1000 / self.frames_per_second
    }

    /// The rectangle bounding legal ball and paddle positions.
    pub fn game_area(&self) -> GameArea {
        GameArea {
            left: self.area_left,
            right: self.area_right,
            top: self.area_top,
            bottom: self.area_bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_table() {
        let config = Config::default();
        assert_eq!(config.window_width, 500);
        assert_eq!(config.window_height, 400);
        assert_eq!(config.frame_interval(), 33);
        assert_eq!(config.player_start_y, 385);
        assert_eq!(config.ball_start_x, 250);
        assert_eq!(config.ball_start_y, 210);
        assert_eq!(config.score_target, 5);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config: Config = serde_json::from_str(r#"{"window_width": 800}"#).unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 400);
        assert_eq!(config.paddle_speed, 5);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("does-not-exist.json")).unwrap();
        assert_eq!(config.window_caption, "Pong");
    }
}
