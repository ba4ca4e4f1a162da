use crate::constants::MIN_FLOAT_HEIGHT;
use crate::registry::{Entity, SceneRegistry};
use glam::Quat;
use std::time::Duration;

/// Drives the idle float/spin of registry entities.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    elapsed_sec: f64,
    min_height: f32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(MIN_FLOAT_HEIGHT)
    }
}

impl AnimationClock {
    pub fn new(min_height: f32) -> Self {
        Self {
            elapsed_sec: 0.0,
            min_height,
        }
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    pub fn tick(&mut self, dt: Duration, registry: &mut SceneRegistry) {
        self.elapsed_sec += dt.as_secs_f64();
        let t = self.elapsed_sec as f32;
        let dt_sec = dt.as_secs_f32();
        for entity in registry.entities_mut() {
            self.step_entity(entity, t, dt_sec);
        }
    }

    fn step_entity(&self, entity: &mut Entity, t: f32, dt_sec: f32) {
        let Some(p) = entity.float else {
            return;
        };
        // resting x doubles as the phase so neighbours bob out of step
        let phase = entity.rest.translation.x;
        let y = entity.rest.translation.y + (t * p.speed + phase).sin() * p.amplitude;
        entity.transform.translation = entity.rest.translation;
        entity.transform.translation.y = y.max(self.min_height);
        entity.spin += p.rotation_speed * dt_sec;
        entity.transform.rotation = entity.rest.rotation * Quat::from_rotation_y(entity.spin);
    }
}
