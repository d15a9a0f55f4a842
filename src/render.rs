use crate::config::{BACKGROUND_COLOR, FINISH_LINE_COLOR, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Game;
use crate::player::Player;
use crate::track::Track;
use macroquad::prelude::*;

const HUD_FONT_SIZE: u16 = 20;
const HUD_X: f32 = 10.0;
const HUD_LINE_Y: [f32; 3] = [10.0, 40.0, 70.0];
const BANNER_FONT_SIZE: u16 = 40;
const HINT_FONT_SIZE: u16 = 20;

pub const PAUSED_TEXT: &str = "Paused";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RESTART_HINT_TEXT: &str = "Press Enter to restart";

/// Score, lives and lap counter lines shown in the top-left corner
pub fn hud_lines(game: &Game) -> [String; 3] {
    [
        format!("Score: {}", game.player.score),
        format!("Lives: {}", game.player.lives),
        format!("Laps: {}", game.lap_count),
    ]
}

// Draws text with its top edge at `y` rather than its baseline
fn draw_text_top(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text(text, x, y + dims.offset_y, font_size as f32, color);
}

// Horizontally centred text, top edge at `y`
fn draw_text_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = SCREEN_WIDTH / 2.0 - dims.width / 2.0;
    draw_text(text, x, y + dims.offset_y, font_size as f32, color);
}

// Handles drawing the game state using macroquad
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    pub fn draw_frame(&self, game: &Game) {
        clear_background(BACKGROUND_COLOR);

        if game.is_over() {
            Self::draw_game_over();
            return;
        }

        Self::draw_track(&game.track);
        Self::draw_player(&game.player);
        Self::draw_hud(game);

        if game.is_paused() {
            draw_text_centered(PAUSED_TEXT, SCREEN_HEIGHT / 2.0 - 20.0, BANNER_FONT_SIZE, RED);
        }
    }

    fn draw_track(track: &Track) {
        draw_rectangle(0.0, 0.0, track.size.x, track.size.y, track.color);
        for obstacle in &track.obstacles {
            draw_rectangle(
                obstacle.position.x,
                obstacle.position.y,
                obstacle.size.x,
                obstacle.size.y,
                obstacle.color,
            );
        }
        let line = track.finish_line;
        draw_rectangle(line.x, line.y, line.w, line.h, FINISH_LINE_COLOR);
    }

    // The car is drawn as a circle centred on its position
    fn draw_player(player: &Player) {
        draw_circle(player.position.x, player.position.y, player.radius(), player.color);
    }

    fn draw_hud(game: &Game) {
        for (line, y) in hud_lines(game).iter().zip(HUD_LINE_Y) {
            draw_text_top(line, HUD_X, y, HUD_FONT_SIZE, BLACK);
        }
    }

    fn draw_game_over() {
        draw_text_centered(GAME_OVER_TEXT, SCREEN_HEIGHT / 2.0 - 20.0, BANNER_FONT_SIZE, RED);
        draw_text_centered(RESTART_HINT_TEXT, SCREEN_HEIGHT / 2.0 + 20.0, HINT_FONT_SIZE, BLACK);
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::ObstacleGenerator;

    #[test]
    fn test_hud_lines_fresh_game() {
        let game = Game::new(ObstacleGenerator::new(0));
        assert_eq!(hud_lines(&game), ["Score: 0", "Lives: 3", "Laps: 0"]);
    }

    #[test]
    fn test_hud_lines_follow_state() {
        let mut game = Game::new(ObstacleGenerator::new(0));
        game.player.score = 700;
        game.player.lives = 1;
        game.lap_count = 7;
        assert_eq!(hud_lines(&game), ["Score: 700", "Lives: 1", "Laps: 7"]);
    }
}
