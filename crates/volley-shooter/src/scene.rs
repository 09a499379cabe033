use anyhow::Result;

use volley_engine::core::Scene;
use volley_engine::input::{Key, KeyState, SharedInput};
use volley_engine::paint::Color;
use volley_engine::render::Painter;
use volley_engine::time::FrameClock;

use crate::world::{Controls, World};

pub struct ShooterScene {
    world: World,
    painter: Painter,
    input: SharedInput,
    clock: FrameClock,
    steer: i8,
}

impl ShooterScene {
    pub fn new(painter: Painter, input: SharedInput) -> Self {
        Self {
            world: World::new(),
            painter,
            input,
            clock: FrameClock::new(),
            steer: 0,
        }
    }
}

impl Scene for ShooterScene {
    fn update_state(&mut self) -> Result<()> {
        let time = self.clock.tick();
        let controls = controls(&self.input, self.steer);
        self.steer = controls.steer;
        self.world.step(time.dt, controls);
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        self.world.record(self.painter.list());
        self.painter.present(Color::BLACK)
    }
}

fn controls(input: &SharedInput, steer: i8) -> Controls {
    Controls {
        steer: steering(steer, &input.transitions()),
        // A tap can start and end between two frames.
        fire: input.key_down(Key::Space) || input.key_pressed(Key::Space),
    }
}

/// The last arrow pressed sets the direction; releasing either arrow stops.
fn steering(mut steer: i8, transitions: &[(Key, KeyState)]) -> i8 {
    for &(key, state) in transitions {
        let dir = match key {
            Key::ArrowLeft | Key::A => -1,
            Key::ArrowRight | Key::D => 1,
            _ => continue,
        };
        steer = match state {
            KeyState::Pressed => dir,
            KeyState::Released => 0,
        };
    }
    steer
}
