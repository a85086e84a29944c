use crate::{Circle, Rectangle, Shape};

/// One callback per variant of [`Shape`].
///
/// Implementors must cover every variant, which moves the exhaustiveness
/// check out of each call site and into this trait plus [`Shape::accept`].
pub trait ShapeVisitor {
    type Output;

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Self::Output;
    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;
}

impl Shape {
    /// Calls the single callback of `visitor` that matches this shape and
    /// hands its result back untouched.
    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Shape::Rectangle(r) => visitor.visit_rectangle(r),
            Shape::Circle(c) => visitor.visit_circle(c),
        }
    }
}

/// A visitor built from a pair of closures.
pub struct FnVisitor<R, C> {
    on_rectangle: R,
    on_circle: C,
}

impl<R, C> FnVisitor<R, C> {
    pub fn new(on_rectangle: R, on_circle: C) -> Self {
        Self {
            on_rectangle,
            on_circle,
        }
    }
}

impl<T, R, C> ShapeVisitor for FnVisitor<R, C>
where
    R: FnMut(&Rectangle) -> T,
    C: FnMut(&Circle) -> T,
{
    type Output = T;

    #[inline]
    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> T {
        (self.on_rectangle)(rectangle)
    }

    #[inline]
    fn visit_circle(&mut self, circle: &Circle) -> T {
        (self.on_circle)(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeDesignator;

    #[derive(Default)]
    struct Counter {
        rectangles: u32,
        circles: u32,
    }

    impl ShapeVisitor for Counter {
        type Output = ShapeDesignator;

        fn visit_rectangle(&mut self, _: &Rectangle) -> ShapeDesignator {
            self.rectangles += 1;
            ShapeDesignator::Rectangle
        }

        fn visit_circle(&mut self, _: &Circle) -> ShapeDesignator {
            self.circles += 1;
            ShapeDesignator::Circle
        }
    }

    #[test]
    fn calls_exactly_one_matching_callback() {
        let shapes = [
            Shape::rectangle(2.0, 3.0).unwrap(),
            Shape::circle(5.0).unwrap(),
        ];
        for s in shapes {
            let mut counter = Counter::default();
            let visited = s.accept(&mut counter);
            assert_eq!(visited, s.designator());
            assert_eq!(counter.rectangles + counter.circles, 1);
        }
    }

    #[test]
    fn returns_callback_result_unchanged() {
        let mut v = FnVisitor::new(|r: &Rectangle| r.half_height(), |c: &Circle| c.radius());
        assert_eq!(Shape::rectangle(2.0, 3.0).unwrap().accept(&mut v), 3.0);
        assert_eq!(Shape::circle(5.0).unwrap().accept(&mut v), 5.0);
    }
}
