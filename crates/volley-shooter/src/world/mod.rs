//! Shooter simulation. Pure game state, no GPU or window types.

mod bullet;
mod enemy;
mod ship;

pub use bullet::{Bullet, Collision};
pub use enemy::Enemy;
pub use ship::Ship;

use volley_engine::paint::Color;
use volley_engine::render::DrawList;

pub const FIELD_WIDTH: f32 = 400.0;
pub const FIELD_HEIGHT: f32 = 400.0;

/// Minimum time between two shots, in seconds.
pub const FIRE_COOLDOWN: f64 = 0.3;

/// Player intent for one step.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    /// -1 left, 0 still, 1 right.
    pub steer: i8,
    pub fire: bool,
}

#[derive(Debug, Clone)]
pub struct World {
    ship: Ship,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    time: f64,
    last_shot: Option<f64>,
    cleared: bool,
}

impl World {
    pub fn new() -> Self {
        Self {
            ship: Ship::new(FIELD_WIDTH / 2.0, FIELD_WIDTH),
            bullets: Vec::new(),
            enemies: enemy::formation(),
            time: 0.0,
            last_shot: None,
            cleared: false,
        }
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Advances the game by `dt` seconds.
    ///
    /// Order: fire, move ship, move bullets, resolve hits, drop dead enemies.
    pub fn step(&mut self, dt: f32, controls: Controls) {
        self.time += f64::from(dt);

        if controls.fire {
            self.try_fire();
        }

        self.ship.direction = controls.steer.signum();
        self.ship.advance(dt);

        for bullet in &mut self.bullets {
            bullet.advance(dt);
        }

        let enemies = &mut self.enemies;
        self.bullets
            .retain(|b| b.collide(enemies) == Collision::None);
        self.enemies.retain(|e| e.alive);

        if self.enemies.is_empty() && !self.cleared {
            self.cleared = true;
            log::info!("all enemies destroyed after {:.1}s", self.time);
        }
    }

    fn try_fire(&mut self) {
        if self
            .last_shot
            .is_some_and(|t| self.time - t < FIRE_COOLDOWN)
        {
            return;
        }
        self.last_shot = Some(self.time);
        self.bullets.push(self.ship.fire());
        log::trace!("shot fired at x={:.0}", self.ship.position().x);
    }

    /// Records every entity as a white rectangle.
    pub fn record(&self, list: &mut DrawList) {
        list.fill_rect(self.ship.bounds(), Color::WHITE);
        for bullet in &self.bullets {
            list.fill_rect(bullet.bounds(), Color::WHITE);
        }
        for enemy in &self.enemies {
            list.fill_rect(enemy.bounds(), Color::WHITE);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volley_engine::coords::Vec2;

    const STILL: Controls = Controls { steer: 0, fire: false };
    const FIRE: Controls = Controls { steer: 0, fire: true };

    fn run(world: &mut World, steps: usize, dt: f32, controls: Controls) {
        for _ in 0..steps {
            world.step(dt, controls);
        }
    }

    #[test]
    fn starts_with_full_formation_and_centered_ship() {
        let world = World::new();
        assert_eq!(world.enemies().len(), 7);
        assert!(world.bullets().is_empty());
        assert_eq!(world.ship().position(), Vec2::new(FIELD_WIDTH / 2.0, 380.0));
    }

    #[test]
    fn ship_stays_inside_the_field() {
        let mut world = World::new();
        run(&mut world, 50, 0.1, Controls { steer: 1, fire: false });
        assert_eq!(world.ship().position().x, FIELD_WIDTH - 20.0);

        run(&mut world, 50, 0.1, Controls { steer: -1, fire: false });
        assert_eq!(world.ship().position().x, 20.0);
    }

    #[test]
    fn shots_are_rate_limited() {
        let mut world = World::new();
        // t = 0.125, 0.25, 0.375, 0.5: shots at 0.125 and 0.5.
        run(&mut world, 4, 0.125, FIRE);
        assert_eq!(world.bullets().len(), 2);
    }

    #[test]
    fn bullet_kills_the_enemy_above_the_ship() {
        let mut world = World::new();
        world.step(0.05, FIRE);
        run(&mut world, 19, 0.05, STILL);

        assert!(world.bullets().is_empty());
        assert_eq!(world.enemies().len(), 6);
        assert!(world
            .enemies()
            .iter()
            .all(|e| e.pos != Vec2::new(200.0, 140.0)));
    }

    #[test]
    fn bullet_is_dropped_after_leaving_the_field() {
        let mut world = World::new();
        run(&mut world, 20, 0.1, Controls { steer: -1, fire: false });
        assert_eq!(world.ship().position().x, 20.0);

        world.step(0.1, FIRE);
        run(&mut world, 11, 0.1, STILL);
        assert_eq!(world.bullets().len(), 1);

        world.step(0.1, STILL);
        assert!(world.bullets().is_empty());
        assert_eq!(world.enemies().len(), 7);
    }

    #[test]
    fn one_bullet_kills_at_most_one_enemy() {
        let mut enemies = vec![
            Enemy::new(Vec2::new(100.0, 100.0)),
            Enemy::new(Vec2::new(100.0, 100.0)),
        ];
        let bullet = Bullet::new(Vec2::new(100.0, 100.0));

        assert_eq!(bullet.collide(&mut enemies), Collision::Hit);
        assert_eq!(enemies.iter().filter(|e| e.alive).count(), 1);
    }

    #[test]
    fn enemy_hit_this_step_still_absorbs_a_second_bullet() {
        let mut world = World::new();
        let target = world.enemies()[4].pos;
        world.bullets = vec![Bullet::new(target), Bullet::new(target)];

        world.step(0.0, STILL);

        assert!(world.bullets().is_empty());
        assert_eq!(world.enemies().len(), 6);
    }

    #[test]
    fn records_one_rect_per_entity() {
        let mut world = World::new();
        world.step(0.01, FIRE);

        let mut list = DrawList::new();
        world.record(&mut list);
        assert_eq!(list.len(), 1 + 1 + 7);
    }
}
