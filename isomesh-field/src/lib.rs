//! Scalar fields sampled by the marching cubes traversal
//!
//! A field assigns a value to every point of space. Points with a positive value are inside of
//! the volume, points with zero or negative value are outside.

#![warn(missing_docs)]

mod metaball;
mod shapes;
mod terrain;

use isomesh_math::Point3;

pub use terrain::NoiseTerrain;
pub use metaball::{Metaball, MetaballField, Motion};
pub use shapes::{Constant, Plane, Sphere};

/// Capability interface of a scalar field
pub trait ScalarField {
    /// Returns the field value at the position
    ///
    /// Must be callable any number of times per cycle and in any order.
    fn evaluate(&self, position: Point3) -> f32;

    /// Moves internal animation state one step forward
    ///
    /// Called exactly once at the start of each traversal cycle, before any evaluation.
    fn advance(&mut self) {}
}

impl<T: ScalarField + ?Sized> ScalarField for &mut T {
    fn evaluate(&self, position: Point3) -> f32 {
        (**self).evaluate(position)
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<T: ScalarField + ?Sized> ScalarField for Box<T> {
    fn evaluate(&self, position: Point3) -> f32 {
        (**self).evaluate(position)
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// Scalar field defined by a closure, static in time
pub struct FnField<F> {
    f: F,
}

impl<F> FnField<F>
where
    F: Fn(Point3) -> f32,
{
    /// Constructs the field from a closure
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ScalarField for FnField<F>
where
    F: Fn(Point3) -> f32,
{
    fn evaluate(&self, position: Point3) -> f32 {
        (self.f)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_math::point3;

    struct Counter {
        ticks: u32,
    }

    impl ScalarField for Counter {
        fn evaluate(&self, _position: Point3) -> f32 {
            self.ticks as f32
        }

        fn advance(&mut self) {
            self.ticks += 1;
        }
    }

    #[test]
    fn boxed_field_forwards_advance() {
        let mut field: Box<dyn ScalarField> = Box::new(Counter { ticks: 0 });
        field.advance();
        field.advance();
        assert_eq!(field.evaluate(point3(0.0, 0.0, 0.0)), 2.0);
    }

    #[test]
    fn closure_field_is_static() {
        let mut field = FnField::new(|p: Point3| p.x - 0.5);
        field.advance();
        assert_eq!(field.evaluate(point3(1.0, 7.0, -3.0)), 0.5);
    }
}
