//! The guide's fixed palette and the fonts every page shares

use crate::colour::Colour;
use crate::font::Font;
use crate::units::{Cm, Pt};
use id_arena::Id;

pub const DARK: Colour = Colour::new_rgb_bytes(0x1a, 0x23, 0x32);
pub const GOLD: Colour = Colour::new_rgb_bytes(0xd4, 0xaf, 0x37);
pub const LIGHT: Colour = Colour::new_rgb_bytes(0xf5, 0xf5, 0xf5);
pub const GREEN: Colour = Colour::new_rgb_bytes(0x90, 0xee, 0x90);
pub const RED: Colour = Colour::new_rgb_bytes(0xff, 0xb6, 0xc1);
pub const GRAY: Colour = Colour::new_rgb_bytes(0x66, 0x66, 0x66);
pub const GRAY_LIGHT: Colour = Colour::new_rgb_bytes(0xaa, 0xaa, 0xaa);
pub const WHITE: Colour = Colour::new_rgb_bytes(0xff, 0xff, 0xff);

pub const GREEN_BG: Colour = Colour::new_rgb_bytes(0xe8, 0xf5, 0xe9);
pub const YELLOW_BG: Colour = Colour::new_rgb_bytes(0xff, 0xf8, 0xe1);
pub const RED_BG: Colour = Colour::new_rgb_bytes(0xff, 0xeb, 0xee);

pub const GREEN_DARK: Colour = Colour::new_rgb_bytes(0x2e, 0x7d, 0x32);
pub const YELLOW_DARK: Colour = Colour::new_rgb_bytes(0xf5, 0x7c, 0x00);
pub const RED_DARK: Colour = Colour::new_rgb_bytes(0xc6, 0x28, 0x28);

pub const GREEN_MEDIUM: Colour = Colour::new_rgb_bytes(0x66, 0xbb, 0x6a);
pub const YELLOW_MEDIUM: Colour = Colour::new_rgb_bytes(0xff, 0xb7, 0x4d);
pub const RED_MEDIUM: Colour = Colour::new_rgb_bytes(0xef, 0x53, 0x50);

/// The two faces the guide is set in
#[derive(Copy, Clone)]
pub struct Theme {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
}

/// Page coordinates mirror the print layout, which is specified in
/// centimetres
pub fn cm(value: f32) -> Pt {
    Cm(value).into()
}
