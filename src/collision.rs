//! Axis-aligned rectangle overlap tests.
//!
//! Overlap is strict: rectangles that only share an edge do not collide. The
//! same predicate serves obstacle hits and finish-line crossings.

use crate::player::Player;
use crate::track::{Obstacle, Track};
use macroquad::math::Rect;

/// Returns true when the interiors of `a` and `b` intersect on both axes.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

pub fn check_collision(player: &Player, obstacle: &Obstacle) -> bool {
    rects_overlap(&player.bounds(), &obstacle.bounds())
}

pub fn crosses_finish_line(player: &Player, track: &Track) -> bool {
    rects_overlap(&player.bounds(), &track.finish_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
        assert!(!rects_overlap(&a, &corner));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x only
        let b = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_player_obstacle_collision() {
        let mut player = Player::new();
        let obstacle = Obstacle::new(Vec2::new(100.0, 300.0));

        player.position = Vec2::new(60.0, 290.0);
        assert!(check_collision(&player, &obstacle));

        // Player's right edge at x = 100 only touches the obstacle
        player.position = Vec2::new(50.0, 290.0);
        assert!(!check_collision(&player, &obstacle));
    }

    #[test]
    fn test_finish_line_crossing() {
        let track = Track::new();
        let mut player = Player::new();
        assert!(!crosses_finish_line(&player, &track));

        // Bottom edge at y = 50 touches the line without crossing
        player.position = Vec2::new(400.0, 20.0);
        assert!(!crosses_finish_line(&player, &track));

        player.position = Vec2::new(400.0, 55.0);
        assert!(crosses_finish_line(&player, &track));

        // Top edge at y = 60 is just below the line
        player.position = Vec2::new(400.0, 60.0);
        assert!(!crosses_finish_line(&player, &track));
    }
}
