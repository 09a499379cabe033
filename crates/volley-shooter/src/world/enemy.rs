use volley_engine::coords::{Rect, Vec2};

const SIZE: Vec2 = Vec2::new(20.0, 20.0);

#[rustfmt::skip]
const FORMATION: [(f32, f32); 7] = [
    (140.0, 60.0), (180.0, 60.0), (220.0, 60.0), (260.0, 60.0),
    (160.0, 140.0), (200.0, 140.0), (240.0, 140.0),
];

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, alive: true }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, SIZE)
    }
}

/// The starting enemy formation.
pub fn formation() -> Vec<Enemy> {
    FORMATION
        .iter()
        .map(|&(x, y)| Enemy::new(Vec2::new(x, y)))
        .collect()
}
