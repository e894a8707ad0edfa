use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

// x is downrange, y is altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn direction(&self, min_magnitude: f64) -> Option<Self> {
        let mag = self.magnitude();
        if mag > min_magnitude {
            Some(*self / mag)
        } else {
            None
        }
    }

    pub fn distance_squared(&self, other: &Vector2D) -> f64 {
        let d = *self - *other;
        d.x * d.x + d.y * d.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_of_velocity() {
        let v = Vector2D::new(3.0, -4.0);
        let unit = v.direction(1e-6).expect("non-zero vector has a direction");
        assert_relative_eq!(unit.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(unit.y, -0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_below_threshold() {
        assert!(Vector2D::ZERO.direction(1e-6).is_none());
        assert!(Vector2D::new(1e-7, 0.0).direction(1e-6).is_none());
    }

    #[test]
    fn test_distance_squared() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(4.0, 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }
}
