use volley_engine::coords::{Rect, Vec2};

use super::enemy::Enemy;

const SIZE: Vec2 = Vec2::new(4.0, 12.0);
const SPEED: f32 = 300.0; // px/s, upwards

/// Outcome of checking a bullet against the field and the enemies.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Collision {
    None,
    LeftField,
    Hit,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pos: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, SIZE)
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.y -= SPEED * dt;
    }

    /// Kills the first enemy this bullet overlaps.
    ///
    /// Enemies hit earlier in the same step are still in `enemies` and still
    /// stop bullets until they are dropped. A bullet entirely above the field
    /// never hits anything.
    pub fn collide(&self, enemies: &mut [Enemy]) -> Collision {
        if self.pos.y + SIZE.y < 0.0 {
            return Collision::LeftField;
        }
        let bounds = self.bounds();
        match enemies.iter_mut().find(|e| e.bounds().overlaps(bounds)) {
            Some(enemy) => {
                enemy.alive = false;
                Collision::Hit
            }
            None => Collision::None,
        }
    }
}
