//! Renders a chess-openings study guide as a PDF: a cover, a table of
//! contents, one richly laid out page per opening, and a handful of fixed
//! reference pages. The lower half of the crate is a small PDF document
//! builder (pages, fonts, images, shapes, outline); the upper half is the
//! guide layout itself.

pub mod board;

mod colour;
pub use colour::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

pub mod guide;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

mod pagesize;
pub use pagesize::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
