use crate::Shape;

/// Rectangles narrower than this half width fail the screen.
pub const MIN_HALF_WIDTH: f32 = 1.0;

/// The match is the only thing that decides the result, and every arm
/// yields a value instead of returning early from the function.
pub fn passes_screen(shape: &Shape) -> bool {
    match shape {
        Shape::Rectangle(r) => r.half_width() >= MIN_HALF_WIDTH,
        Shape::Circle(_) => true,
    }
}

/// Screens `shape`, then runs the follow-up step that applies to every shape.
pub fn screen(shape: &Shape) -> bool {
    let passed = passes_screen(shape);
    log::debug!("{} screened, passed: {}", shape.designator(), passed);
    passed
}

#[test]
fn narrow_rectangles_fail() {
    assert!(!screen(&Shape::rectangle(0.5, 10.0).unwrap()));
    assert!(screen(&Shape::rectangle(1.0, 0.1).unwrap()));
    assert!(screen(&Shape::rectangle(2.0, 3.0).unwrap()));
}

#[test]
fn circles_always_pass() {
    assert!(screen(&Shape::circle(0.01).unwrap()));
    assert!(screen(&Shape::circle(5.0).unwrap()));
}
