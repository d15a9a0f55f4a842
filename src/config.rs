//! Configuration constants for the racing game.

use macroquad::color::Color;

// Screen
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const WINDOW_TITLE: &str = "Racing Game";
pub const FRAME_RATE: u32 = 60; // Simulation ticks per second

// Player
pub const PLAYER_SPEED: f32 = 5.0; // Units per tick on each held axis
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_START_X: f32 = SCREEN_WIDTH / 2.0;
pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT - 50.0;
pub const INITIAL_LIVES: u32 = 3;

// Obstacles
pub const OBSTACLE_SIZE: f32 = 50.0;
pub const OBSTACLE_MARGIN: u32 = 100; // Kept clear on the right, top and bottom of the track
pub const INITIAL_OBSTACLES: [(f32, f32); 2] = [(100.0, 300.0), (300.0, 200.0)];

// Finish line
pub const FINISH_LINE_WIDTH: f32 = 300.0;
pub const FINISH_LINE_HEIGHT: f32 = 10.0;
pub const FINISH_LINE_X: f32 = SCREEN_WIDTH / 2.0 - FINISH_LINE_WIDTH / 2.0;
pub const FINISH_LINE_Y: f32 = 50.0;

// Scoring
pub const LAP_SCORE: u32 = 100;

// Colours
pub const BACKGROUND_COLOR: Color = Color::new(0.96, 0.96, 0.96, 1.0);
pub const TRACK_COLOR: Color = Color::new(0.31, 0.31, 0.31, 1.0);
pub const PLAYER_COLOR: Color = Color::new(0.0, 0.47, 0.95, 1.0);
pub const OBSTACLE_COLOR: Color = Color::new(0.9, 0.16, 0.22, 1.0);
pub const FINISH_LINE_COLOR: Color = Color::new(0.0, 0.89, 0.19, 1.0);
