use crate::colour::Colour;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

/// A font selection for a span of text: which document font, at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text placed at an absolute baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// An image placed to fill an absolute rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// A vector primitive drawn with raw path operators
#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    /// A filled rectangle, optionally with rounded corners
    Rect {
        rect: Rect,
        colour: Colour,
        corner_radius: Option<Pt>,
    },
    /// A filled circle
    Circle {
        center: (Pt, Pt),
        radius: Pt,
        colour: Colour,
    },
    /// A stroked line segment
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        colour: Colour,
        width: Pt,
    },
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Shape(Shape),
}

/// A single page: its geometry and the ordered list of content to draw on it.
/// Contents are rendered in insertion order, so later items paint over
/// earlier ones.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content should live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out content
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new empty page of the given size. When no margins are
    /// supplied the content box covers the full page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: size.0,
                y2: size.1,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: size.0 - margins.right,
                y2: size.1 - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Place a single run of text at an absolute baseline position
    pub fn add_text<S: ToString>(
        &mut self,
        text: S,
        font: SpanFont,
        colour: Colour,
        coords: (Pt, Pt),
    ) {
        self.add_span(SpanLayout {
            text: text.to_string(),
            font,
            colour,
            coords,
        });
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.contents.push(PageContents::Shape(shape));
    }

    /// Fill a rectangle with a flat colour
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.add_shape(Shape::Rect {
            rect,
            colour,
            corner_radius: None,
        });
    }

    /// Fill a rounded rectangle with a flat colour
    pub fn fill_round_rect(&mut self, rect: Rect, radius: Pt, colour: Colour) {
        self.add_shape(Shape::Rect {
            rect,
            colour,
            corner_radius: Some(radius),
        });
    }

    /// Fill a circle with a flat colour
    pub fn fill_circle(&mut self, center: (Pt, Pt), radius: Pt, colour: Colour) {
        self.add_shape(Shape::Circle {
            center,
            radius,
            colour,
        });
    }

    /// Stroke a straight line segment
    pub fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), width: Pt, colour: Colour) {
        self.add_shape(Shape::Line {
            from,
            to,
            colour,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn margins_shrink_the_content_box() {
        let page = Page::new(pagesize::A4, Some(Margins::all(Pt(20.0))));
        assert_eq!(page.media_box.x1, Pt(0.0));
        assert_eq!(page.content_box.x1, Pt(20.0));
        assert_eq!(page.content_box.x2, pagesize::A4.0 - Pt(20.0));
        assert_eq!(page.content_box.y2, pagesize::A4.1 - Pt(20.0));
    }

    #[test]
    fn contents_retain_insertion_order() {
        let mut page = Page::new(pagesize::A4, None);
        page.fill_rect(
            Rect::xywh(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)),
            crate::colours::BLACK,
        );
        page.fill_circle((Pt(5.0), Pt(5.0)), Pt(2.0), crate::colours::WHITE);
        assert!(matches!(
            page.contents[0],
            PageContents::Shape(Shape::Rect { .. })
        ));
        assert!(matches!(
            page.contents[1],
            PageContents::Shape(Shape::Circle { .. })
        ));
    }
}
