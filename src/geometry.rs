use rand::Rng;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use crate::constants::*;

/// Rectangle the window centre travels within, fixed for the process lifetime.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ScreenBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            max_x: width,
            min_y: 0.0,
            max_y: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Which edges `point` lies on. A corner lies on two.
    pub fn edges_of(&self, point: Vector2) -> Vec<Edge> {
        Edge::ALL
            .into_iter()
            .filter(|edge| match edge {
                Edge::Top    => point.y == self.min_y,
                Edge::Bottom => point.y == self.max_y,
                Edge::Left   => point.x == self.min_x,
                Edge::Right  => point.x == self.max_x,
            })
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Point `index` (0..=EDGE_DIVISIONS) of the evenly spaced candidates on this edge.
    pub fn point(self, bounds: &ScreenBounds, index: usize) -> Vector2 {
        let step_x = bounds.width() / EDGE_DIVISIONS as f32;
        let step_y = bounds.height() / EDGE_DIVISIONS as f32;
        let along_x = (bounds.min_x + step_x * index as f32).min(bounds.max_x);
        let along_y = (bounds.min_y + step_y * index as f32).min(bounds.max_y);

        match self {
            Edge::Top    => Vector2::new(along_x, bounds.min_y),
            Edge::Bottom => Vector2::new(along_x, bounds.max_y),
            Edge::Left   => Vector2::new(bounds.min_x, along_y),
            Edge::Right  => Vector2::new(bounds.max_x, along_y),
        }
    }

    pub fn candidates(self, bounds: &ScreenBounds) -> Vec<Vector2> {
        (0..EDGE_POINT_COUNT).map(|i| self.point(bounds, i)).collect()
    }

    pub fn random_point<R: Rng + ?Sized>(self, bounds: &ScreenBounds, rng: &mut R) -> Vector2 {
        let candidates = self.candidates(bounds);
        candidates[rng.random_range(0..candidates.len())]
    }
}

/// Two different edges, drawn without replacement.
pub fn pick_edge_pair<R: Rng + ?Sized>(rng: &mut R) -> (Edge, Edge) {
    let mut edges = Edge::ALL;
    edges.shuffle(rng);
    (edges[0], edges[1])
}

pub fn length(v: Vector2) -> f32 {
    v.x.hypot(v.y)
}

/// Unsigned angle between two vectors, in degrees within [0, 180].
/// Zero-length vectors have no direction; the angle is 0 for them.
pub fn angle_between(a: Vector2, b: Vector2) -> f32 {
    let lengths = length(a) * length(b);
    if lengths == 0.0 {
        return 0.0;
    }
    let cos = ((a.x * b.x + a.y * b.y) / lengths).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
