mod favorite;
mod info;
mod screen;
mod shape;
mod visit;

pub use favorite::{Favorite, ShapeDefinition};
pub use info::*;
pub use screen::{passes_screen, screen, MIN_HALF_WIDTH};
pub use shape::*;
pub use visit::{FnVisitor, ShapeVisitor};
