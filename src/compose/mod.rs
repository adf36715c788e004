//! Layer composition - ordering theme assets and text into a card bar

mod builder;
mod layer;
mod text;

// Re-export public API
pub use builder::{
    box_column_taken, is_darkened, shows_count_box, shows_legendary_icon, BarLayout,
    CardBarBuilder, MAX_COUNT_DIGIT,
};
pub use layer::{ImagePlacement, ImageSource, Layer, TextPlacement};
pub use text::{OutlinedText, TextLayout, TextStyle};
