/// A 2D vector where the components are 32-bit floats.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Vec2f(pub f32, pub f32);

impl Vec2f {
    pub const ZERO: Vec2f = Vec2f(0.0, 0.0);
    pub const ONE: Vec2f = Vec2f(1.0, 1.0);

    /// Obtains the length of the vector.
    pub fn length(self) -> f32 {
        (self.0 * self.0 + self.1 * self.1).sqrt()
    }

    /// Obtains the squared length of the vector.
    pub fn length_squared(self) -> f32 {
        self.0 * self.0 + self.1 * self.1
    }

    /// Distance between two points.
    pub fn distance(self, other: Vec2f) -> f32 {
        (other - self).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(self, other: Vec2f) -> f32 {
        (other - self).length_squared()
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Vec2f) -> f32 {
        self.0 * other.0 + self.1 * other.1
    }

    /// Calculates the 2D cross product, the z-component of the 3D cross product.
    pub fn cross(self, other: Vec2f) -> f32 {
        self.0 * other.1 - self.1 * other.0
    }

    /// Linearly interpolates between two vectors.
    pub fn lerp(self, other: Vec2f, t: f32) -> Vec2f {
        Vec2f(
            self.0 + (other.0 - self.0) * t,
            self.1 + (other.1 - self.1) * t,
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(self, s: f32) -> Vec2f {
        Vec2f(self.0 * s, self.1 * s)
    }

    /// Rotates the vector by an angle given in radians.
    pub fn rotate(self, radians: f32) -> Vec2f {
        let (sin, cos) = radians.sin_cos();
        Vec2f(
            self.0 * cos - self.1 * sin,
            self.0 * sin + self.1 * cos,
        )
    }

    /// Angle of the vector from the positive x-axis, in radians.
    pub fn angle(self) -> f32 {
        self.1.atan2(self.0)
    }

    /// Normalizes the vector to a unit vector.
    pub fn normalized(self) -> Vec2f {
        let len = self.length();
        if len == 0.0 {
            Vec2f(0.0, 0.0)
        } else {
            Vec2f(self.0 / len, self.1 / len)
        }
    }

    /// Rounds the components of the vector to the nearest integer.
    pub fn round(self) -> Vec2f {
        Vec2f(self.0.round(), self.1.round())
    }
}

impl std::ops::Add for Vec2f {
    type Output = Vec2f;

    fn add(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::AddAssign for Vec2f {
    fn add_assign(&mut self, other: Vec2f) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl std::ops::Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::SubAssign for Vec2f {
    fn sub_assign(&mut self, other: Vec2f) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<Vec2f> for (f32, f32) {
    fn from(v: Vec2f) -> (f32, f32) {
        (v.0, v.1)
    }
}

impl From<(f32, f32)> for Vec2f {
    fn from(v: (f32, f32)) -> Vec2f {
        Vec2f(v.0, v.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2f, b: Vec2f) -> bool {
        a.distance(b) < 1e-5
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2f(1.0, 0.0).rotate(std::f32::consts::FRAC_PI_2);
        assert!(close(v, Vec2f(0.0, 1.0)));
    }

    #[test]
    fn rotate_zero_is_exact() {
        let v = Vec2f(3.25, -7.5);
        assert_eq!(v.rotate(0.0), v);
    }

    #[test]
    fn cross_sign() {
        assert!(Vec2f(1.0, 0.0).cross(Vec2f(0.0, 1.0)) > 0.0);
        assert!(Vec2f(0.0, 1.0).cross(Vec2f(1.0, 0.0)) < 0.0);
        assert_eq!(Vec2f(2.0, 2.0).cross(Vec2f(1.0, 1.0)), 0.0);
    }

    #[test]
    fn angle_of_axes() {
        assert_eq!(Vec2f(1.0, 0.0).angle(), 0.0);
        assert!((Vec2f(0.0, 1.0).angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn distance_and_lerp() {
        let a = Vec2f(0.0, 0.0);
        let b = Vec2f(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.lerp(b, 0.5), Vec2f(1.5, 2.0));
    }

    #[test]
    fn normalized_zero_vector() {
        assert_eq!(Vec2f::ZERO.normalized(), Vec2f::ZERO);
    }
}
