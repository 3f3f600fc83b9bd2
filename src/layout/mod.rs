//! Utilities for positioning text on pages: margins, baseline helpers, and
//! the two width-fitting primitives every guide page leans on: greedy word
//! wrapping ([wrap_words]) and ellipsis truncation ([truncate_to_width]).

mod margins;
mod text;

pub use margins::*;
pub use text::*;
