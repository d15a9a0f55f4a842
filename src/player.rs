use crate::config::{
    INITIAL_LIVES, PLAYER_COLOR, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_START_X, PLAYER_START_Y,
    PLAYER_WIDTH,
};
use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};

/// Start point the player returns to after a lap or a crash
pub const START_POSITION: Vec2 = Vec2::new(PLAYER_START_X, PLAYER_START_Y);

// The player-controlled car
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2, // Top-left corner of the bounding box
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    pub score: u32,
    pub lives: u32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: START_POSITION,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            color: PLAYER_COLOR,
            score: 0,
            lives: INITIAL_LIVES,
        }
    }

    /// Moves by `speed` along each axis of `direction` (components are -1, 0 or 1).
    /// Diagonals are not normalized.
    pub fn translate(&mut self, direction: Vec2) {
        self.position += direction * self.speed;
    }

    pub fn reset_position(&mut self) {
        self.position = START_POSITION;
    }

    // Axis-aligned bounding box used for collisions
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.position, Vec2::new(400.0, 550.0));
        assert_eq!(player.size, Vec2::new(50.0, 30.0));
        assert_approx_eq!(player.speed, 5.0);
        assert_eq!(player.score, 0);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_translate_axis_and_diagonal() {
        let mut player = Player::new();
        player.translate(Vec2::new(0.0, -1.0));
        assert_approx_eq!(player.position.x, 400.0);
        assert_approx_eq!(player.position.y, 545.0);

        // Diagonal moves the full speed on both axes
        player.translate(Vec2::new(1.0, -1.0));
        assert_approx_eq!(player.position.x, 405.0);
        assert_approx_eq!(player.position.y, 540.0);
    }

    #[test]
    fn test_reset_position_and_bounds() {
        let mut player = Player::new();
        player.position = Vec2::new(10.0, 20.0);
        let bounds = player.bounds();
        assert_approx_eq!(bounds.x, 10.0);
        assert_approx_eq!(bounds.y, 20.0);
        assert_approx_eq!(bounds.w, 50.0);
        assert_approx_eq!(bounds.h, 30.0);

        player.reset_position();
        assert_eq!(player.position, START_POSITION);
        assert_approx_eq!(player.radius(), 25.0);
    }
}
