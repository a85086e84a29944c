use std::io::{self, Write};

use crate::{Circle, Rectangle, Shape, ShapeVisitor};

fn rectangle_info(r: &Rectangle) -> String {
    let size = r.size();
    format!("width: {}; height: {}", size.x, size.y)
}

fn circle_info(c: &Circle) -> String {
    format!("radius: {};", c.radius())
}

/// Describes a shape using a direct, exhaustive `match`.
pub fn info(shape: &Shape) -> String {
    match shape {
        Shape::Rectangle(r) => rectangle_info(r),
        Shape::Circle(c) => circle_info(c),
    }
}

pub fn write_info(shape: &Shape, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", info(shape))
}

pub fn print_info(shape: &Shape) {
    if let Err(err) = write_info(shape, &mut io::stdout().lock()) {
        log::error!("failed to print shape info: {:?}", err);
    }
}

/// Produces the same line as [`info`], one variant at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoVisitor;

impl ShapeVisitor for InfoVisitor {
    type Output = String;

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> String {
        rectangle_info(rectangle)
    }

    fn visit_circle(&mut self, circle: &Circle) -> String {
        circle_info(circle)
    }
}

/// Dispatches `shape` through `visitor` and returns its result; nothing is
/// written. Use [`print_info_using_visitor`] to print.
pub fn print_info_via_visitor<V: ShapeVisitor>(shape: &Shape, visitor: &mut V) -> V::Output {
    log::trace!("visiting {}", shape.designator());
    shape.accept(visitor)
}

pub fn write_info_using_visitor(shape: &Shape, out: &mut impl Write) -> io::Result<()> {
    let line = print_info_via_visitor(shape, &mut InfoVisitor);
    writeln!(out, "{}", line)
}

pub fn print_info_using_visitor(shape: &Shape) {
    if let Err(err) = write_info_using_visitor(shape, &mut io::stdout().lock()) {
        log::error!("failed to print shape info: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeDesignator;

    fn sample(d: ShapeDesignator) -> Shape {
        match d {
            ShapeDesignator::Rectangle => Shape::rectangle(2.0, 3.0).unwrap(),
            ShapeDesignator::Circle => Shape::circle(5.0).unwrap(),
        }
    }

    fn written(shape: &Shape) -> String {
        let mut out = Vec::new();
        write_info(shape, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rectangle_line() {
        let s = sample(ShapeDesignator::Rectangle);
        assert_eq!(written(&s), "width: 4; height: 6\n");
        assert!(info(&s).contains("width: 4; height: 6"));
    }

    #[test]
    fn circle_line() {
        let s = sample(ShapeDesignator::Circle);
        assert!(written(&s).contains("radius: 5"));
        assert_eq!(info(&s), "radius: 5;");
    }

    #[test]
    fn fractional_values() {
        let s = Shape::rectangle(0.25, 1.5).unwrap();
        assert_eq!(info(&s), "width: 0.5; height: 3");
    }

    #[test]
    fn idempotent() {
        for d in ShapeDesignator::ALL {
            let s = sample(d);
            assert_eq!(info(&s), info(&s));
            assert_eq!(written(&s), written(&s));
        }
    }

    #[test]
    fn visitor_matches_direct_dispatch() {
        for d in ShapeDesignator::ALL {
            let s = sample(d);
            assert_eq!(print_info_via_visitor(&s, &mut InfoVisitor), info(&s));

            let mut out = Vec::new();
            write_info_using_visitor(&s, &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), written(&s));
        }
    }

    #[test]
    fn printing_does_not_panic() {
        for d in ShapeDesignator::ALL {
            print_info(&sample(d));
            print_info_using_visitor(&sample(d));
        }
    }
}
