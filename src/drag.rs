use crate::config::Settings;

/// Mouse-drag rotation with inertia that decays once per tick after release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragRotate {
    /// Accumulated (pitch, yaw) in degrees.
    rotation: (f32, f32),
    inertia: (f32, f32),
    last_position: Option<(f32, f32)>,
    dragging: bool,
    speed: f32,
    multiplier: f32,
    decay: f32,
    threshold: f32,
}

impl DragRotate {
    pub fn new(settings: &Settings) -> Self {
        DragRotate {
            rotation: (0.0, 0.0),
            inertia: (0.0, 0.0),
            last_position: None,
            dragging: false,
            speed: settings.rotate_speed,
            multiplier: settings.inertia_multiplier,
            decay: settings.inertia_decay,
            threshold: settings.inertia_threshold,
        }
    }

    pub fn rotation(&self) -> (f32, f32) {
        self.rotation
    }

    #[cfg(test)]
    pub fn inertia(&self) -> (f32, f32) {
        self.inertia
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn rotate(&mut self, (pitch, yaw): (f32, f32)) {
        self.rotation.0 = (self.rotation.0 + pitch) % 360.0;
        self.rotation.1 = (self.rotation.1 + yaw) % 360.0;
    }

    fn coasting(&self) -> bool {
        self.inertia.0.abs() > self.threshold || self.inertia.1.abs() > self.threshold
    }

    /// Advance one frame. `position` is in frame pixels, y growing downward.
    pub fn tick(&mut self, held: bool, position: Option<(f32, f32)>) {
        if held {
            if !self.dragging {
                self.last_position = position;
                self.dragging = true;
                return;
            }
            if let (Some(current), Some(last)) = (position, self.last_position) {
                let dx = current.0 - last.0;
                // screen y points down, pitch follows upward motion
                let dy = last.1 - current.1;
                self.rotate((dy * self.speed, -dx * self.speed));
                self.inertia = (dy * self.multiplier, -dx * self.multiplier);
            }
            if position.is_some() {
                self.last_position = position;
            }
            return;
        }

        self.dragging = false;
        if self.coasting() {
            let inertia = self.inertia;
            self.rotate(inertia);
            self.inertia = (inertia.0 * self.decay, inertia.1 * self.decay);
        }
    }
}
