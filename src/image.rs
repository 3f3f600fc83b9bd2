use crate::refs::{ObjectReferences, RefType};
use image::{DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

/// A raster image to be embedded in the document, stored as zlib-flated RGB
/// with an optional soft mask carrying the alpha channel. All images the
/// guide draws are rasterized in-process, so there is no file-loading path.
pub struct Image {
    image: DynamicImage,
    pub width: f32,
    pub height: f32,
}

struct EncodeOutput {
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Wrap an already-decoded image
    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            image,
            width,
            height,
        }
    }

    fn encode(&self) -> EncodeOutput {
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = self.image.color().has_alpha().then(|| {
            let alphas: Vec<_> = self.image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });

        let bytes = compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level);

        EncodeOutput { bytes, mask }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }

        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn decoded_image_reports_dimensions() {
        let img = RgbaImage::from_pixel(12, 8, image::Rgba([10, 20, 30, 255]));
        let image = Image::new_raster(DynamicImage::ImageRgba8(img));
        assert_eq!(image.width, 12.0);
        assert_eq!(image.height, 8.0);
    }

    #[test]
    fn rgba_images_carry_an_alpha_mask() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 128]));
        let image = Image::new_raster(DynamicImage::ImageRgba8(img));
        let encoded = image.encode();
        assert!(encoded.mask.is_some());
    }

    #[test]
    fn opaque_images_have_no_mask() {
        let img = RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 50]));
        let image = Image::new_raster(DynamicImage::ImageRgb8(img));
        let encoded = image.encode();
        assert!(encoded.mask.is_none());
    }
}
