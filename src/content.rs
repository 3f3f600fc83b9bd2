//! Shared content-stream rendering for pages.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, Shape, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Arena;
use std::io::Write;

/// Magic fraction of the radius at which Bézier control points approximate a
/// circular arc
const KAPPA: f32 = 0.552_284_8;

/// Renders page contents to a PDF content stream, converting the high-level
/// content items into low-level operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.x2 - image.position.x1,
                    image.position.y2 - image.position.y1,
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::Shape(shape) => {
                render_shape(&mut content, shape)?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_shape(content: &mut Vec<u8>, shape: &Shape) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    match shape {
        Shape::Rect {
            rect,
            colour,
            corner_radius: None,
        } => {
            write_fill_colour(content, *colour)?;
            write!(
                content,
                "{} {} {} {} re\nf\n",
                rect.x1,
                rect.y1,
                rect.width(),
                rect.height()
            )?;
        }
        Shape::Rect {
            rect,
            colour,
            corner_radius: Some(radius),
        } => {
            write_fill_colour(content, *colour)?;
            write_round_rect_path(content, rect, *radius)?;
            write!(content, "f\n")?;
        }
        Shape::Circle {
            center,
            radius,
            colour,
        } => {
            write_fill_colour(content, *colour)?;
            write_circle_path(content, *center, *radius)?;
            write!(content, "f\n")?;
        }
        Shape::Line {
            from,
            to,
            colour,
            width,
        } => {
            write_stroke_colour(content, *colour)?;
            write!(content, "{} w\n", width)?;
            write!(content, "{} {} m\n{} {} l\nS\n", from.0, from.1, to.0, to.1)?;
        }
    }
    write!(content, "Q\n")?;
    Ok(())
}

/// A closed rounded-rectangle path, corners approximated with Bézier arcs.
/// The radius is clamped so opposite corners can never overlap.
#[allow(clippy::write_with_newline)]
fn write_round_rect_path(
    content: &mut Vec<u8>,
    rect: &Rect,
    radius: Pt,
) -> Result<(), std::io::Error> {
    let r = Pt(radius
        .0
        .min(rect.width().0 / 2.0)
        .min(rect.height().0 / 2.0));
    let k = r * KAPPA;
    let Rect { x1, y1, x2, y2 } = *rect;

    write!(content, "{} {} m\n", x1 + r, y1)?;
    write!(content, "{} {} l\n", x2 - r, y1)?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        x2 - r + k,
        y1,
        x2,
        y1 + r - k,
        x2,
        y1 + r
    )?;
    write!(content, "{} {} l\n", x2, y2 - r)?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        x2,
        y2 - r + k,
        x2 - r + k,
        y2,
        x2 - r,
        y2
    )?;
    write!(content, "{} {} l\n", x1 + r, y2)?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        x1 + r - k,
        y2,
        x1,
        y2 - r + k,
        x1,
        y2 - r
    )?;
    write!(content, "{} {} l\n", x1, y1 + r)?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        x1,
        y1 + r - k,
        x1 + r - k,
        y1,
        x1 + r,
        y1
    )?;
    write!(content, "h\n")?;
    Ok(())
}

/// A closed circle path from four Bézier quarter-arcs
#[allow(clippy::write_with_newline)]
fn write_circle_path(
    content: &mut Vec<u8>,
    (cx, cy): (Pt, Pt),
    radius: Pt,
) -> Result<(), std::io::Error> {
    let k = radius * KAPPA;
    write!(content, "{} {} m\n", cx + radius, cy)?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx + radius,
        cy + k,
        cx + k,
        cy + radius,
        cx,
        cy + radius
    )?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx - k,
        cy + radius,
        cx - radius,
        cy + k,
        cx - radius,
        cy
    )?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx - radius,
        cy - k,
        cx - k,
        cy - radius,
        cx,
        cy - radius
    )?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx + k,
        cy - radius,
        cx + radius,
        cy - k,
        cx + radius,
        cy
    )?;
    write!(content, "h\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    if spans.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;

    // unwrap is safe, as we know spans isn't empty
    let mut current_font: SpanFont = spans.first().unwrap().font;
    let mut current_colour: Colour = spans.first().unwrap().colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            let font = &fonts[current_font.id];
            let gid = font
                .glyph_id(ch)
                .or_else(|| font.replacement_glyph_id())
                .or_else(|| font.glyph_id('?'))
                .unwrap_or(0);
            write!(content, "{gid:04x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::Rgb { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::Rgb { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    fn render(shape: Shape) -> String {
        let fonts: Arena<Font> = Arena::new();
        let contents = vec![PageContents::Shape(shape)];
        String::from_utf8(render_contents(&contents, &fonts).unwrap()).unwrap()
    }

    #[test]
    fn empty_contents_render_to_nothing() {
        let fonts: Arena<Font> = Arena::new();
        assert!(render_contents(&[], &fonts).unwrap().is_empty());
    }

    #[test]
    fn plain_rect_uses_the_re_operator() {
        let ops = render(Shape::Rect {
            rect: Rect::xywh(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0)),
            colour: colours::BLACK,
            corner_radius: None,
        });
        assert!(ops.contains("10 20 30 40 re\nf\n"), "ops were: {ops}");
        assert!(ops.starts_with("q\n") && ops.ends_with("Q\n"));
    }

    #[test]
    fn rounded_rect_emits_four_corner_curves() {
        let ops = render(Shape::Rect {
            rect: Rect::xywh(Pt(0.0), Pt(0.0), Pt(100.0), Pt(50.0)),
            colour: colours::WHITE,
            corner_radius: Some(Pt(5.0)),
        });
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(ops.contains("h\nf\n"));
    }

    #[test]
    fn circle_closes_its_path() {
        let ops = render(Shape::Circle {
            center: (Pt(50.0), Pt(50.0)),
            radius: Pt(10.0),
            colour: colours::RED,
        });
        assert!(ops.contains("60 50 m\n"));
        assert_eq!(ops.matches(" c\n").count(), 4);
    }

    #[test]
    fn line_strokes_with_width_and_colour() {
        let ops = render(Shape::Line {
            from: (Pt(0.0), Pt(1.0)),
            to: (Pt(2.0), Pt(3.0)),
            colour: colours::BLACK,
            width: Pt(2.0),
        });
        assert!(ops.contains("0 G\n"));
        assert!(ops.contains("2 w\n"));
        assert!(ops.contains("0 1 m\n2 3 l\nS\n"));
    }
}
