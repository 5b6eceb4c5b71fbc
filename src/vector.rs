use std::ops::Add;

/// A 2D value type. Addition always yields a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl core::fmt::Display for Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn addition_is_component_wise_and_commutative() {
        let v1 = Vector::new(1.0, 2.0);
        let v2 = Vector::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector::new(4.0, 6.0));
        assert_eq!(v1 + v2, v2 + v1);
        // operands are copies, so both are still intact
        assert_eq!(v1, Vector::new(1.0, 2.0));
        assert_eq!(v2, Vector::new(3.0, 4.0));
    }

    #[test]
    fn renders_like_a_constructor_call() {
        assert_eq!((Vector::new(1.0, 2.0) + Vector::new(3.0, 4.0)).to_string(), "Vector(4, 6)");
        assert_eq!(Vector::new(-0.5, 2.25).to_string(), "Vector(-0.5, 2.25)");
    }
}
