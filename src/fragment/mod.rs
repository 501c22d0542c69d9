mod keymap;
mod model;
mod normalize;

pub use keymap::{Field, KeyMap};
pub use model::{Adventure, ImageParams, ImageRef, RichText};
pub use normalize::normalize;
