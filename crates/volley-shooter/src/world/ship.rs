use volley_engine::coords::{Rect, Vec2};

use super::bullet::Bullet;

const SIZE: Vec2 = Vec2::new(40.0, 40.0);
const Y: f32 = 380.0;
const SPEED: f32 = 200.0; // px/s

/// The player's ship. Moves horizontally only.
#[derive(Debug, Clone)]
pub struct Ship {
    pos: Vec2,
    /// -1 left, 0 still, 1 right.
    pub direction: i8,
    field_width: f32,
}

impl Ship {
    pub fn new(x: f32, field_width: f32) -> Self {
        Self {
            pos: Vec2::new(x, Y),
            direction: 0,
            field_width,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, SIZE)
    }

    /// Moves by `direction * SPEED * dt`, kept fully inside the field.
    pub fn advance(&mut self, dt: f32) {
        if self.direction == 0 {
            return;
        }
        let half = SIZE.x / 2.0;
        let x = self.pos.x + f32::from(self.direction) * SPEED * dt;
        self.pos.x = x.clamp(half, self.field_width - half);
    }

    /// A bullet leaving the ship's top edge.
    pub fn fire(&self) -> Bullet {
        Bullet::new(Vec2::new(self.pos.x, self.pos.y - SIZE.y / 2.0))
    }
}
