//! Rasterizes a [Board](super::Board) into an RGBA image: the classic
//! light/dark square palette, optional green/red square highlighting, and
//! procedural piece glyphs built from circles, boxes, and triangles. The
//! result is placed on pages through [Image::new_raster](crate::Image::new_raster).

use super::{Board, Piece, PieceKind, Side, Square};
use image::{Rgba, RgbaImage};

/// Light square fill
pub const LIGHT_SQUARE: [u8; 3] = [0xf0, 0xd9, 0xb5];
/// Dark square fill
pub const DARK_SQUARE: [u8; 3] = [0xb5, 0x88, 0x63];
/// Fill for green-highlighted squares
pub const GREEN_HIGHLIGHT: [u8; 3] = [0x90, 0xee, 0x90];
/// Fill for red-highlighted squares
pub const RED_HIGHLIGHT: [u8; 3] = [0xff, 0xb6, 0xc1];

/// How to draw a diagram: the pixel edge length (rounded down to a multiple
/// of 8) and which squares to flood with the highlight fills
#[derive(Debug, Default, Clone)]
pub struct DiagramStyle {
    pub size: u32,
    pub green: Vec<Square>,
    pub red: Vec<Square>,
}

impl DiagramStyle {
    pub fn sized(size: u32) -> DiagramStyle {
        DiagramStyle {
            size,
            ..DiagramStyle::default()
        }
    }
}

/// Render the position as a square RGBA image, white's side at the bottom
pub fn render_diagram(board: &Board, style: &DiagramStyle) -> RgbaImage {
    let square_px = (style.size / 8).max(4);
    let size = square_px * 8;
    let mut img = RgbaImage::new(size, size);

    for rank in 0..8u8 {
        for file in 0..8u8 {
            let square = Square { file, rank };
            let fill = square_fill(square, style);
            let x0 = file as u32 * square_px;
            // rank 7 renders at the top of the image
            let y0 = (7 - rank) as u32 * square_px;
            for y in y0..y0 + square_px {
                for x in x0..x0 + square_px {
                    img.put_pixel(x, y, Rgba([fill[0], fill[1], fill[2], 0xff]));
                }
            }
            if let Some(piece) = board.piece_at(square) {
                draw_piece(&mut img, piece, x0, y0, square_px);
            }
        }
    }

    img
}

fn square_fill(square: Square, style: &DiagramStyle) -> [u8; 3] {
    if style.green.contains(&square) {
        GREEN_HIGHLIGHT
    } else if style.red.contains(&square) {
        RED_HIGHLIGHT
    } else if (square.file + square.rank) % 2 == 0 {
        DARK_SQUARE
    } else {
        LIGHT_SQUARE
    }
}

/// A primitive in the 100x100 glyph cell (y grows downward)
enum Glyph {
    Disc { cx: f32, cy: f32, r: f32 },
    Box { x: f32, y: f32, w: f32, h: f32 },
    Tri { a: (f32, f32), b: (f32, f32), c: (f32, f32) },
}

impl Glyph {
    fn contains(&self, u: f32, v: f32) -> bool {
        match *self {
            Glyph::Disc { cx, cy, r } => {
                let (du, dv) = (u - cx, v - cy);
                du * du + dv * dv <= r * r
            }
            Glyph::Box { x, y, w, h } => u >= x && u <= x + w && v >= y && v <= y + h,
            Glyph::Tri { a, b, c } => {
                let sign =
                    |p: (f32, f32), q: (f32, f32), r: (f32, f32)| {
                        (p.0 - r.0) * (q.1 - r.1) - (q.0 - r.0) * (p.1 - r.1)
                    };
                let d1 = sign((u, v), a, b);
                let d2 = sign((u, v), b, c);
                let d3 = sign((u, v), c, a);
                let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(has_neg && has_pos)
            }
        }
    }
}

/// Silhouettes for each piece kind, in the 100x100 glyph cell
fn glyphs(kind: PieceKind) -> Vec<Glyph> {
    use Glyph::*;
    match kind {
        PieceKind::Pawn => vec![
            Disc { cx: 50.0, cy: 34.0, r: 13.0 },
            Tri { a: (32.0, 78.0), b: (68.0, 78.0), c: (50.0, 42.0) },
            Box { x: 28.0, y: 76.0, w: 44.0, h: 9.0 },
        ],
        PieceKind::Rook => vec![
            Box { x: 32.0, y: 30.0, w: 36.0, h: 46.0 },
            Box { x: 28.0, y: 18.0, w: 11.0, h: 14.0 },
            Box { x: 44.5, y: 18.0, w: 11.0, h: 14.0 },
            Box { x: 61.0, y: 18.0, w: 11.0, h: 14.0 },
            Box { x: 25.0, y: 76.0, w: 50.0, h: 9.0 },
        ],
        PieceKind::Knight => vec![
            Tri { a: (32.0, 78.0), b: (70.0, 78.0), c: (62.0, 30.0) },
            Tri { a: (62.0, 30.0), b: (36.0, 22.0), c: (30.0, 48.0) },
            Disc { cx: 46.0, cy: 30.0, r: 11.0 },
            Box { x: 27.0, y: 76.0, w: 46.0, h: 9.0 },
        ],
        PieceKind::Bishop => vec![
            Disc { cx: 50.0, cy: 22.0, r: 7.0 },
            Tri { a: (34.0, 74.0), b: (66.0, 74.0), c: (50.0, 30.0) },
            Box { x: 28.0, y: 74.0, w: 44.0, h: 9.0 },
        ],
        PieceKind::Queen => vec![
            Disc { cx: 32.0, cy: 26.0, r: 6.0 },
            Disc { cx: 50.0, cy: 20.0, r: 6.0 },
            Disc { cx: 68.0, cy: 26.0, r: 6.0 },
            Tri { a: (30.0, 76.0), b: (70.0, 76.0), c: (50.0, 26.0) },
            Box { x: 26.0, y: 76.0, w: 48.0, h: 9.0 },
        ],
        PieceKind::King => vec![
            Box { x: 46.5, y: 10.0, w: 7.0, h: 22.0 },
            Box { x: 39.0, y: 16.5, w: 22.0, h: 7.0 },
            Tri { a: (31.0, 76.0), b: (69.0, 76.0), c: (50.0, 32.0) },
            Box { x: 26.0, y: 76.0, w: 48.0, h: 9.0 },
        ],
    }
}

fn draw_piece(img: &mut RgbaImage, piece: Piece, x0: u32, y0: u32, square_px: u32) {
    let (body, rim) = match piece.side {
        Side::White => ([0xf8, 0xf8, 0xf5], [0x30, 0x30, 0x30]),
        Side::Black => ([0x26, 0x26, 0x26], [0x9a, 0x9a, 0x9a]),
    };
    let shapes = glyphs(piece.kind);

    // the rim is the silhouette at full scale; the body is the same
    // silhouette shrunk toward the cell's visual centre
    const BODY_SCALE: f32 = 0.85;
    const CENTRE: (f32, f32) = (50.0, 52.0);

    for py in 0..square_px {
        for px in 0..square_px {
            let u = (px as f32 + 0.5) / square_px as f32 * 100.0;
            let v = (py as f32 + 0.5) / square_px as f32 * 100.0;
            if !shapes.iter().any(|s| s.contains(u, v)) {
                continue;
            }
            let bu = CENTRE.0 + (u - CENTRE.0) / BODY_SCALE;
            let bv = CENTRE.1 + (v - CENTRE.1) / BODY_SCALE;
            let colour = if shapes.iter().any(|s| s.contains(bu, bv)) {
                body
            } else {
                rim
            };
            img.put_pixel(
                x0 + px,
                y0 + py,
                Rgba([colour[0], colour[1], colour[2], 0xff]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_squares;

    fn px(img: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
        let p = img.get_pixel(x, y).0;
        [p[0], p[1], p[2]]
    }

    #[test]
    fn image_size_is_a_multiple_of_eight() {
        let img = render_diagram(&Board::start(), &DiagramStyle::sized(330));
        assert_eq!(img.width(), 328);
        assert_eq!(img.height(), 328);
    }

    #[test]
    fn empty_squares_use_the_classic_palette() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        let img = render_diagram(&board, &DiagramStyle::sized(160));
        let sq = 20;
        // a8 (top-left) is a light square, b8 dark
        assert_eq!(px(&img, sq / 2, sq / 2), LIGHT_SQUARE);
        assert_eq!(px(&img, sq + sq / 2, sq / 2), DARK_SQUARE);
        // a1 (bottom-left) is dark
        assert_eq!(px(&img, sq / 2, 7 * sq + sq / 2), DARK_SQUARE);
    }

    #[test]
    fn highlights_flood_their_squares() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        let style = DiagramStyle {
            size: 160,
            green: parse_squares(&["e4"]),
            red: parse_squares(&["d5"]),
        };
        let img = render_diagram(&board, &style);
        let sq = 20;
        // e4: file 4, rank 3 → x cell 4, y cell 4 from the top
        assert_eq!(px(&img, 4 * sq + sq / 2, 4 * sq + sq / 2), GREEN_HIGHLIGHT);
        // d5: file 3, rank 4 → x cell 3, y cell 3 from the top
        assert_eq!(px(&img, 3 * sq + sq / 2, 3 * sq + sq / 2), RED_HIGHLIGHT);
    }

    #[test]
    fn pieces_paint_over_their_squares() {
        let img = render_diagram(&Board::start(), &DiagramStyle::sized(320));
        let sq = 40;
        // centre of e1: the white king's body
        let centre = px(&img, 4 * sq + sq / 2, 7 * sq + sq / 2);
        assert_ne!(centre, LIGHT_SQUARE);
        assert_ne!(centre, DARK_SQUARE);
    }
}
