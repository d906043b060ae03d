//! Simple RGBA canvas that layer drawings are rasterized into.

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Rgba8,
}

impl ImageFormat {
    fn stride(&self) -> u32 {
        match self {
            ImageFormat::Rgba8 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Image {
    size: (u32, u32),
    data: Vec<u8>,
    format: ImageFormat,
}

impl Image {
    pub fn new_filled_rgba8(size: (u32, u32), pixel: Pixel) -> Self {
        let format = ImageFormat::Rgba8;
        let pixel_count = size.0 as usize * size.1 as usize;

        let mut data = Vec::with_capacity(pixel_count * format.stride() as usize);
        for _ in 0..pixel_count {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }

        Self { size, data, format }
    }

    pub fn encode_png<W: Write>(&self, output: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(output, self.size.0, self.size.1);

        match self.format {
            ImageFormat::Rgba8 => {
                encoder.set_color(png::ColorType::RGBA);
                encoder.set_depth(png::BitDepth::Eight);
            }
        }

        let mut output_writer = encoder.write_header()?;
        output_writer.write_image_data(&self.data)?;

        // On drop, output_writer will write the last chunk of the PNG file.
        Ok(())
    }

    #[cfg(test)]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Fills the rectangle starting at `pos` with the given size, clipped to
    /// the image.
    pub fn fill_rect(&mut self, pos: (u32, u32), size: (u32, u32), pixel: Pixel) {
        let (x_end, y_end) = self.clip(pos, size);

        for y in pos.1..y_end {
            for x in pos.0..x_end {
                self.set_pixel((x, y), pixel);
            }
        }
    }

    /// Draws a border `thickness` pixels wide just inside the given rectangle.
    pub fn stroke_rect(&mut self, pos: (u32, u32), size: (u32, u32), thickness: u32, pixel: Pixel) {
        let thickness = thickness.min(size.0).min(size.1);
        if thickness == 0 {
            return;
        }

        let right = pos.0 + size.0 - thickness;
        let bottom = pos.1 + size.1 - thickness;

        self.fill_rect(pos, (size.0, thickness), pixel);
        self.fill_rect((pos.0, bottom), (size.0, thickness), pixel);
        self.fill_rect(pos, (thickness, size.1), pixel);
        self.fill_rect((right, pos.1), (thickness, size.1), pixel);
    }

    #[cfg(test)]
    pub fn get_pixel(&self, pos: (u32, u32)) -> Pixel {
        assert!(pos.0 < self.size.0);
        assert!(pos.1 < self.size.1);

        let start = self.offset(pos);

        Pixel {
            r: self.data[start],
            g: self.data[start + 1],
            b: self.data[start + 2],
            a: self.data[start + 3],
        }
    }

    pub fn set_pixel(&mut self, pos: (u32, u32), pixel: Pixel) {
        assert!(pos.0 < self.size.0);
        assert!(pos.1 < self.size.1);

        let start = self.offset(pos);

        self.data[start] = pixel.r;
        self.data[start + 1] = pixel.g;
        self.data[start + 2] = pixel.b;
        self.data[start + 3] = pixel.a;
    }

    fn offset(&self, pos: (u32, u32)) -> usize {
        let stride = self.format.stride() as usize;
        stride * (pos.0 as usize + pos.1 as usize * self.size.0 as usize)
    }

    fn clip(&self, pos: (u32, u32), size: (u32, u32)) -> (u32, u32) {
        (
            pos.0.saturating_add(size.0).min(self.size.0),
            pos.1.saturating_add(size.1).min(self.size.1),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CLEAR: Pixel = Pixel::new(0, 0, 0, 0);
    const RED: Pixel = Pixel::opaque(255, 0, 0);
    const BLUE: Pixel = Pixel::opaque(0, 0, 255);

    #[test]
    fn filled() {
        let image = Image::new_filled_rgba8((3, 2), RED);

        assert_eq!(image.size(), (3, 2));
        assert_eq!(image.get_pixel((0, 0)), RED);
        assert_eq!(image.get_pixel((2, 1)), RED);
    }

    #[test]
    fn set_pixel() {
        let mut source = Image::new_filled_rgba8((3, 3), CLEAR);

        source.set_pixel((0, 0), Pixel::new(1, 2, 3, 4));
        assert_eq!(source.get_pixel((0, 0)), Pixel::new(1, 2, 3, 4));

        source.set_pixel((2, 2), Pixel::new(5, 6, 7, 8));
        assert_eq!(source.get_pixel((2, 2)), Pixel::new(5, 6, 7, 8));

        assert_eq!(&source.data[0..4], &[1, 2, 3, 4]);
        assert_eq!(&source.data[(source.data.len() - 4)..], &[5, 6, 7, 8]);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut image = Image::new_filled_rgba8((4, 4), CLEAR);
        image.fill_rect((2, 2), (10, 10), RED);

        assert_eq!(image.get_pixel((1, 1)), CLEAR);
        assert_eq!(image.get_pixel((2, 2)), RED);
        assert_eq!(image.get_pixel((3, 3)), RED);
    }

    #[test]
    fn stroke_rect_leaves_inside_alone() {
        let mut image = Image::new_filled_rgba8((5, 5), CLEAR);
        image.fill_rect((0, 0), (5, 5), RED);
        image.stroke_rect((0, 0), (5, 5), 1, BLUE);

        assert_eq!(image.get_pixel((0, 0)), BLUE);
        assert_eq!(image.get_pixel((4, 2)), BLUE);
        assert_eq!(image.get_pixel((2, 4)), BLUE);
        assert_eq!(image.get_pixel((2, 2)), RED);
    }

    #[test]
    fn encodes_png() {
        let image = Image::new_filled_rgba8((2, 2), RED);
        let mut encoded = Vec::new();
        image.encode_png(&mut encoded).unwrap();

        assert_eq!(&encoded[1..4], b"PNG");
    }
}
