use crate::utils::vector2d::Vector2D;

// One semi-implicit Euler step per tick, no sub-stepping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl Kinematics {
    pub fn at_origin() -> Self {
        Kinematics::default()
    }

    pub fn integrate(&mut self, acceleration: Vector2D, delta_time: f64) {
        self.acceleration = acceleration;

        self.velocity.x += acceleration.x * delta_time;
        self.position.x += self.velocity.x * delta_time;

        self.velocity.y += acceleration.y * delta_time;
        self.position.y += self.velocity.y * delta_time;
    }

    // Downrange position is kept.
    pub fn come_to_rest(&mut self) {
        self.position.y = 0.0;
        self.velocity = Vector2D::ZERO;
        self.acceleration = Vector2D::ZERO;
    }

    pub fn clamp_to_ground(&mut self) {
        if self.position.y < 0.0 {
            self.position.y = 0.0;
        }
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.y
    }

    pub fn get_downrange(&self) -> f64 {
        self.position.x.abs()
    }

    pub fn get_vertical_velocity(&self) -> f64 {
        self.velocity.y
    }

    pub fn get_velocity_magnitude(&self) -> f64 {
        self.velocity.magnitude()
    }
}
