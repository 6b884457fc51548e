use rand::Rng;
use raylib::prelude::*;
use crate::constants::*;
use crate::geometry::{angle_between, length, pick_edge_pair, Edge, ScreenBounds};

/// Everything one flight needs: where it starts and ends, how the sprite is
/// oriented and how long the trip takes at constant speed.
#[derive(Debug, Clone, Copy)]
pub struct MotionPlan {
    pub from_edge: Edge,
    pub to_edge: Edge,
    pub from: Vector2,
    pub to: Vector2,
    pub angle_degrees: f32,
    pub duration_seconds: f32,
}

impl MotionPlan {
    pub fn random<R: Rng + ?Sized>(bounds: &ScreenBounds, rng: &mut R) -> Self {
        let (from_edge, to_edge) = pick_edge_pair(rng);
        let from = from_edge.random_point(bounds, rng);
        let to = to_edge.random_point(bounds, rng);
        Self::between(from_edge, from, to_edge, to)
    }

    pub fn between(from_edge: Edge, from: Vector2, to_edge: Edge, to: Vector2) -> Self {
        let direction = Vector2::new(to.x - from.x, to.y - from.y);
        let reference = Vector2::new(REFERENCE_X, REFERENCE_Y);

        Self {
            from_edge,
            to_edge,
            from,
            to,
            angle_degrees: angle_between(reference, direction),
            duration_seconds: length(direction) / SPEED,
        }
    }

    pub fn distance(&self) -> f32 {
        length(Vector2::new(self.to.x - self.from.x, self.to.y - self.from.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn top_middle_to_right_top_corner() {
        let bounds = ScreenBounds::new(1920.0, 1080.0);
        let plan = MotionPlan::between(
            Edge::Top,
            Edge::Top.point(&bounds, 5),
            Edge::Right,
            Edge::Right.point(&bounds, 0),
        );

        assert_eq!(plan.distance(), 960.0);
        assert!((plan.duration_seconds - 0.872_727).abs() < 1e-5);
        assert_eq!(plan.angle_degrees, 0.0);
    }

    #[test]
    fn diagonal_duration_follows_distance() {
        let plan = MotionPlan::between(
            Edge::Left,
            Vector2::new(0.0, 0.0),
            Edge::Bottom,
            Vector2::new(1100.0 * 0.6, 1100.0 * 0.8),
        );
        assert!((plan.duration_seconds - 1.0).abs() < 1e-5);
        assert!((plan.angle_degrees - 53.130_1).abs() < 1e-3);
    }

    #[test]
    fn shared_corner_gives_zero_duration() {
        let bounds = ScreenBounds::new(800.0, 600.0);
        let plan = MotionPlan::between(
            Edge::Top,
            Edge::Top.point(&bounds, 10),
            Edge::Right,
            Edge::Right.point(&bounds, 0),
        );
        assert_eq!(plan.duration_seconds, 0.0);
        assert_eq!(plan.angle_degrees, 0.0);
    }

    #[test]
    fn random_plans_hold_their_invariants() {
        let bounds = ScreenBounds::new(1920.0, 1080.0);
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..500 {
            let plan = MotionPlan::random(&bounds, &mut rng);

            assert_ne!(plan.from_edge, plan.to_edge);
            assert!(bounds.edges_of(plan.from).contains(&plan.from_edge));
            assert!(bounds.edges_of(plan.to).contains(&plan.to_edge));

            assert!(plan.duration_seconds >= 0.0);
            assert!((plan.duration_seconds - plan.distance() / SPEED).abs() < 1e-6);
            assert!((0.0..=180.0).contains(&plan.angle_degrees));
        }
    }
}
