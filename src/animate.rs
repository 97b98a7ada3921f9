use three_d::*;

/// Euler angles accumulated at a fixed per-tick rate.
pub struct Spin {
    angles: Vec3,
    rate: Vec3,
}

impl Spin {
    pub fn new(rate: [f32; 3]) -> Self {
        Self {
            angles: vec3(0.0, 0.0, 0.0),
            rate: rate.into(),
        }
    }

    pub fn step(&mut self) {
        self.angles += self.rate;
    }

    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    /// Rotation matrix for the accumulated angles, X·Y·Z order.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_angle_x(radians(self.angles.x))
            * Mat4::from_angle_y(radians(self.angles.y))
            * Mat4::from_angle_z(radians(self.angles.z))
    }
}

/// Absolute camera position for a page scroll offset, one factor per axis.
pub fn camera_position_for_scroll(scroll_top: f32, coefficients: [f32; 3]) -> Vec3 {
    vec3(
        scroll_top * coefficients[0],
        scroll_top * coefficients[1],
        scroll_top * coefficients[2],
    )
}

/// Reports the scroll offset only when it changed since the last look,
/// so scroll-driven spins advance once per scroll change like an `onscroll`
/// handler would.
pub struct ScrollTracker {
    last: f32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self { last: 0.0 }
    }

    pub fn update(&mut self, offset: f32) -> Option<f32> {
        if (offset - self.last).abs() > f32::EPSILON {
            self.last = offset;
            Some(offset)
        } else {
            None
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_accumulates_its_rate() {
        let mut spin = Spin::new([0.01, 0.005, 0.01]);
        for _ in 0..10 {
            spin.step();
        }
        assert!((spin.angles().x - 0.1).abs() < 1e-6);
        assert!((spin.angles().y - 0.05).abs() < 1e-6);
        assert!((spin.angles().z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn unstepped_spin_is_the_identity() {
        let spin = Spin::new([0.05, 0.075, 0.05]);
        assert_eq!(spin.matrix(), Mat4::identity());
    }

    #[test]
    fn scroll_moves_the_camera_by_the_coefficients() {
        let position = camera_position_for_scroll(100.0, [-0.001, -0.0002, -0.01]);
        assert!((position.x + 0.1).abs() < 1e-6);
        assert!((position.y + 0.02).abs() < 1e-6);
        assert!((position.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_scroll_is_the_origin() {
        let position = camera_position_for_scroll(0.0, [-0.001, -0.0002, -0.01]);
        assert_eq!(position, vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn tracker_fires_once_per_change() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.update(0.0), None);
        assert_eq!(tracker.update(120.0), Some(120.0));
        assert_eq!(tracker.update(120.0), None);
        assert_eq!(tracker.update(80.0), Some(80.0));
    }
}
