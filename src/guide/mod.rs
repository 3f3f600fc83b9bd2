//! Turns a set of opening records into the finished guide: cover, table of
//! contents, one detail page per opening (grouped by tier), then the fixed
//! reference pages. Page geometry throughout mirrors the print layout the
//! guide was designed against: A4, coordinates in centimetres from the
//! bottom-left corner.

pub mod record;
pub mod theme;

mod checklist;
mod cover;
mod opening;
mod structures;
mod tactics;
mod toc;
mod zones;

pub use record::{categorize, load_openings, OpeningRecord, Tier, TieredOpenings};

use crate::board::{parse_squares, render_diagram, Board, DiagramStyle, PositionError};
use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::image::Image;
use crate::layout::{truncate_to_width, width_of_text, wrap_words};
use crate::page::{ImageLayout, Page, SpanFont};
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;
use image::DynamicImage;
use theme::{cm, Theme};

/// Outer page margin of the print layout
fn margin() -> Pt {
    cm(0.8)
}

pub struct GuideRenderer {
    doc: Document,
    theme: Theme,
    /// 1-based number of the page currently being laid out
    page_num: usize,
}

impl GuideRenderer {
    pub fn new(regular: Font, bold: Font) -> GuideRenderer {
        let mut doc = Document::default();
        let theme = Theme {
            regular: doc.add_font(regular),
            bold: doc.add_font(bold),
        };
        GuideRenderer {
            doc,
            theme,
            page_num: 0,
        }
    }

    /// Lay out the whole guide and hand back the finished document
    pub fn generate(mut self, openings: Vec<OpeningRecord>) -> Document {
        let tiers = categorize(openings);
        log::info!(
            "laying out {} openings ({} beginner, {} intermediate, {} advanced)",
            tiers.total(),
            tiers.beginner.len(),
            tiers.intermediate.len(),
            tiers.advanced.len()
        );

        self.render_cover(&tiers);
        self.render_toc(&tiers);
        for tier in Tier::ALL {
            let openings = tiers.bucket(tier);
            if !openings.is_empty() {
                // points at the first detail page of the tier, rendered next
                self.doc
                    .add_bookmark(format!("{} openings", tier.label()), self.page_num);
            }
            for op in openings {
                self.render_opening(op);
                log::debug!("laid out {} (from {})", op.name, op.source);
            }
        }
        self.render_checklist();
        self.render_zones();
        self.render_pawn_structures();
        self.render_tactics();

        self.doc
    }

    fn start_page(&mut self) -> Page {
        self.page_num += 1;
        Page::new(A4, None)
    }

    fn push_page(&mut self, page: Page) {
        self.doc.add_page(page);
    }

    fn push_page_with_bookmark(&mut self, page: Page, title: &str) {
        self.doc.add_page(page);
        self.doc.add_bookmark(title, self.page_num - 1);
    }

    fn font(&self, id: Id<Font>) -> &Font {
        &self.doc.fonts[id]
    }

    // -- text placement, always at the baseline like the page coordinates --

    fn draw_text(
        &self,
        page: &mut Page,
        text: &str,
        font: Id<Font>,
        size: Pt,
        colour: Colour,
        x: Pt,
        y: Pt,
    ) {
        page.add_text(text, SpanFont { id: font, size }, colour, (x, y));
    }

    fn draw_centred(
        &self,
        page: &mut Page,
        text: &str,
        font: Id<Font>,
        size: Pt,
        colour: Colour,
        centre_x: Pt,
        y: Pt,
    ) {
        let width = width_of_text(text, self.font(font), size);
        self.draw_text(page, text, font, size, colour, centre_x - width / 2.0, y);
    }

    fn draw_right(
        &self,
        page: &mut Page,
        text: &str,
        font: Id<Font>,
        size: Pt,
        colour: Colour,
        right_x: Pt,
        y: Pt,
    ) {
        let width = width_of_text(text, self.font(font), size);
        self.draw_text(page, text, font, size, colour, right_x - width, y);
    }

    fn fit(&self, text: &str, font: Id<Font>, size: Pt, max_width: Pt) -> String {
        truncate_to_width(text, self.font(font), size, max_width)
    }

    fn wrap(&self, text: &str, font: Id<Font>, size: Pt, max_width: Pt) -> Vec<String> {
        wrap_words(text, self.font(font), size, max_width).collect()
    }

    /// Rasterize a position and place it on the page. A position that fails
    /// to parse is logged and skipped; the page simply goes without its
    /// diagram.
    fn draw_diagram(
        &mut self,
        page: &mut Page,
        board: Result<Board, PositionError>,
        green: &[String],
        red: &[String],
        pixels: u32,
        position: Rect,
    ) {
        let board = match board {
            Ok(board) => board,
            Err(err) => {
                log::debug!("omitting board diagram: {err}");
                return;
            }
        };
        let style = DiagramStyle {
            size: pixels,
            green: parse_squares(green),
            red: parse_squares(red),
        };
        let raster = render_diagram(&board, &style);
        let image_id = self
            .doc
            .add_image(Image::new_raster(DynamicImage::ImageRgba8(raster)));
        page.add_image(ImageLayout { image_id, position });
    }

    /// The shared `— N —` page footer
    fn footer(&self, page: &mut Page) {
        let (width, _) = A4;
        self.draw_centred(
            page,
            &format!("— {} —", self.page_num),
            self.theme.regular,
            Pt(9.0),
            theme::GRAY,
            width / 2.0,
            cm(0.5),
        );
    }

    /// Header/stripe colour for a tier
    fn tier_colour(tier: Tier) -> Colour {
        match tier {
            Tier::Beginner => theme::GREEN_DARK,
            Tier::Intermediate => theme::YELLOW_DARK,
            Tier::Advanced => theme::RED_DARK,
        }
    }
}

/// Format a win-rate percentage for display, blank when unknown
fn percent(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.0}%"),
        None => String::new(),
    }
}
