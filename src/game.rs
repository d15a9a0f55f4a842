use crate::collision::{check_collision, crosses_finish_line};
use crate::config::{FRAME_RATE, LAP_SCORE};
use crate::debug_game;
use crate::input::{InputSnapshot, InputTracker, KeyStates};
use crate::player::Player;
use crate::render::Renderer;
use crate::track::{ObstacleGenerator, Track};
use log::info;
use macroquad::prelude::{get_frame_time, next_frame};

/// Where the game currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// What a single tick did, mostly for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    None,
    PauseToggled,
    Collision,
    GameOver,
    LapCompleted,
    Restarted,
}

/// The Game struct owns the player, the track and the lap counters
pub struct Game {
    pub player: Player,
    pub track: Track,
    pub phase: GamePhase,
    pub lap_count: u32,
    pub objects: usize, // Obstacles to generate on the next lap
    generator: ObstacleGenerator,
    time_accumulator: f32,
    tick_duration: f32,
}

impl Game {
    /// Create a new game whose random obstacle layouts come from `generator`
    pub fn new(generator: ObstacleGenerator) -> Self {
        info!("Obstacle generator seeded with {}", generator.seed());
        let mut game = Game {
            player: Player::new(),
            track: Track::new(),
            phase: GamePhase::Running,
            lap_count: 0,
            objects: 0,
            generator,
            time_accumulator: 0.0,
            tick_duration: 1.0 / FRAME_RATE as f32,
        };
        game.init();
        game
    }

    /// Puts every piece of state back to the opening position.
    /// The obstacle generator keeps its sequence.
    pub fn init(&mut self) {
        self.player = Player::new();
        self.track = Track::new();
        self.phase = GamePhase::Running;
        self.lap_count = 0;
        self.objects = 0;
        info!(
            "New race: Lives {}, {} obstacles on track",
            self.player.lives,
            self.track.obstacles.len()
        );
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Advance the game by one tick using this tick's input
    pub fn update(&mut self, input: &InputSnapshot) -> TickEvent {
        if self.is_over() {
            if input.restart_pressed {
                info!("Restarting after game over");
                self.init();
                return TickEvent::Restarted;
            }
            return TickEvent::None;
        }

        if input.pause_pressed {
            self.phase = match self.phase {
                GamePhase::Paused => GamePhase::Running,
                _ => GamePhase::Paused,
            };
            info!("Game {}", if self.is_paused() { "paused" } else { "resumed" });
        }

        if self.is_paused() {
            return if input.pause_pressed {
                TickEvent::PauseToggled
            } else {
                TickEvent::None
            };
        }

        self.player.translate(input.direction());

        if let Some(event) = self.check_obstacles() {
            // A crash sends the player back to the start, so the finish line
            // is not checked on the same tick.
            return event;
        }

        if crosses_finish_line(&self.player, &self.track) {
            self.complete_lap();
            return TickEvent::LapCompleted;
        }

        if input.pause_pressed {
            TickEvent::PauseToggled
        } else {
            TickEvent::None
        }
    }

    // Handles the first obstacle the player hits, if any
    fn check_obstacles(&mut self) -> Option<TickEvent> {
        let hit = self
            .track
            .obstacles
            .iter()
            .position(|obstacle| check_collision(&self.player, obstacle))?;

        debug_game!(
            "Hit obstacle {} at ({:.0}, {:.0})",
            hit,
            self.player.position.x,
            self.player.position.y
        );

        self.player.lives = self.player.lives.saturating_sub(1);
        self.player.reset_position();
        self.player.score = 0;
        self.lap_count = 0;

        if self.player.lives == 0 {
            self.phase = GamePhase::GameOver;
            info!("Game over after a collision, Lives 0");
            Some(TickEvent::GameOver)
        } else {
            info!("Collision! Lives {} remaining", self.player.lives);
            Some(TickEvent::Collision)
        }
    }

    fn complete_lap(&mut self) {
        self.objects += 1;
        let obstacles = self.generator.generate(self.objects);
        self.track.replace_obstacles(obstacles);
        self.lap_count += 1;
        self.player.score += LAP_SCORE;
        self.player.reset_position();
        info!(
            "Lap {} completed, score {}, {} obstacles next lap",
            self.lap_count, self.player.score, self.objects
        );
    }

    /// Run the main game loop using the provided renderer
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");
        let mut tracker = InputTracker::new();

        while !Renderer::window_should_close() {
            self.time_accumulator += get_frame_time();

            // Fixed simulation update loop
            while self.time_accumulator >= self.tick_duration {
                self.time_accumulator -= self.tick_duration;
                let input = tracker.next(KeyStates::poll());
                let event = self.update(&input);
                if event != TickEvent::None {
                    debug_game!("Tick event: {:?}", event);
                }
            }

            renderer.draw_frame(self);
            next_frame().await;
        }

        info!("Exiting racing game.");
    }
}
