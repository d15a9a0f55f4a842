use crate::config::*;
use crate::debug_track;
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};

// A static block the player has to steer around
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec2, // Top-left corner
    pub size: Vec2,
    pub color: Color,
}

impl Obstacle {
    pub fn new(position: Vec2) -> Self {
        Obstacle {
            position,
            size: Vec2::new(OBSTACLE_SIZE, OBSTACLE_SIZE),
            color: OBSTACLE_COLOR,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

// The race track: obstacles, playfield size and the finish line
#[derive(Debug, Clone)]
pub struct Track {
    pub obstacles: Vec<Obstacle>,
    pub size: Vec2,
    pub color: Color,
    pub finish_line: Rect, // Never changes once the track is built
}

impl Track {
    /// Builds the opening layout with its two fixed obstacles.
    pub fn new() -> Self {
        Track {
            obstacles: INITIAL_OBSTACLES
                .iter()
                .map(|&(x, y)| Obstacle::new(Vec2::new(x, y)))
                .collect(),
            size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            color: TRACK_COLOR,
            finish_line: Rect::new(
                FINISH_LINE_X,
                FINISH_LINE_Y,
                FINISH_LINE_WIDTH,
                FINISH_LINE_HEIGHT,
            ),
        }
    }

    // Swaps in a whole new obstacle set; individual obstacles are never edited
    pub fn replace_obstacles(&mut self, obstacles: Vec<Obstacle>) {
        debug_track!(
            "Replacing {} obstacles with {}",
            self.obstacles.len(),
            obstacles.len()
        );
        self.obstacles = obstacles;
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

/// Places obstacles at random positions from a generator seeded once per run.
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    seed: u64,
    rng: StdRng,
}

impl ObstacleGenerator {
    pub fn new(seed: u64) -> Self {
        ObstacleGenerator {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Produces exactly `count` obstacles with x in [0, width - 100) and
    /// y in [100, height - 100), on whole-unit positions.
    pub fn generate(&mut self, count: usize) -> Vec<Obstacle> {
        let max_x = SCREEN_WIDTH as u32 - OBSTACLE_MARGIN;
        let min_y = OBSTACLE_MARGIN;
        let max_y = SCREEN_HEIGHT as u32 - OBSTACLE_MARGIN;

        let obstacles: Vec<Obstacle> = (0..count)
            .map(|_| {
                let x = self.rng.gen_range(0..max_x);
                let y = self.rng.gen_range(min_y..max_y);
                Obstacle::new(Vec2::new(x as f32, y as f32))
            })
            .collect();

        for (i, obstacle) in obstacles.iter().enumerate() {
            debug_track!(
                "Obstacle {} placed at ({:.0}, {:.0})",
                i,
                obstacle.position.x,
                obstacle.position.y
            );
        }
        obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_track_layout() {
        let track = Track::new();
        assert_eq!(track.obstacles.len(), 2);
        assert_eq!(track.obstacles[0].position, Vec2::new(100.0, 300.0));
        assert_eq!(track.obstacles[1].position, Vec2::new(300.0, 200.0));
        assert_eq!(track.size, Vec2::new(800.0, 600.0));
        assert_eq!(track.finish_line, Rect::new(250.0, 50.0, 300.0, 10.0));
    }

    #[test]
    fn test_obstacle_defaults() {
        let obstacle = Obstacle::new(Vec2::new(5.0, 7.0));
        assert_eq!(obstacle.size, Vec2::new(50.0, 50.0));
        assert_eq!(obstacle.color, OBSTACLE_COLOR);
        assert_eq!(obstacle.bounds(), Rect::new(5.0, 7.0, 50.0, 50.0));
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let mut generator = ObstacleGenerator::new(1);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_generate_count_and_bounds() {
        let mut generator = ObstacleGenerator::new(42);
        for count in [1, 5, 50, 500] {
            let obstacles = generator.generate(count);
            assert_eq!(obstacles.len(), count);
            for obstacle in &obstacles {
                let pos = obstacle.position;
                assert!(pos.x >= 0.0 && pos.x < 700.0, "x out of range: {}", pos.x);
                assert!(pos.y >= 100.0 && pos.y < 500.0, "y out of range: {}", pos.y);
                assert_eq!(pos.x.fract(), 0.0);
                assert_eq!(pos.y.fract(), 0.0);
                assert_eq!(obstacle.size, Vec2::new(50.0, 50.0));
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = ObstacleGenerator::new(7);
        let mut b = ObstacleGenerator::new(7);
        assert_eq!(a.generate(10), b.generate(10));
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_successive_calls_differ() {
        // A single generator keeps advancing instead of restarting its sequence
        let mut generator = ObstacleGenerator::new(99);
        let first = generator.generate(20);
        let second = generator.generate(20);
        assert_ne!(first, second);
    }

    #[test]
    fn test_replace_obstacles_keeps_finish_line() {
        let mut track = Track::new();
        let finish_line = track.finish_line;
        let mut generator = ObstacleGenerator::new(3);
        track.replace_obstacles(generator.generate(4));
        assert_eq!(track.obstacles.len(), 4);
        assert_eq!(track.finish_line, finish_line);
    }
}
