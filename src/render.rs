//! Draws a single layer of a pallet plan as a picture.
//!
//! The canvas covers the pallet footprint with the origin in the top-left
//! corner and `y` growing downwards, matching the coordinates the packer
//! produces. Every package gets its own color, assigned in the order packages
//! appear in the plan so a package keeps its color from layer to layer.

use std::fmt::Write;

use layerpack::{Layer, PackageKey, PackingResult, Pallet};

use crate::image::{Image, Pixel};

const BACKGROUND: Pixel = Pixel::opaque(0xee, 0xee, 0xee);
const BORDER: Pixel = Pixel::opaque(0x20, 0x20, 0x20);

const PALETTE: &[Pixel] = &[
    Pixel::opaque(0x4e, 0x79, 0xa7),
    Pixel::opaque(0xf2, 0x8e, 0x2b),
    Pixel::opaque(0xe1, 0x57, 0x59),
    Pixel::opaque(0x76, 0xb7, 0xb2),
    Pixel::opaque(0x59, 0xa1, 0x4f),
    Pixel::opaque(0xed, 0xc9, 0x48),
    Pixel::opaque(0xb0, 0x7a, 0xa1),
    Pixel::opaque(0xff, 0x9d, 0xa7),
    Pixel::opaque(0x9c, 0x75, 0x5f),
    Pixel::opaque(0xba, 0xb0, 0xac),
];

/// Picks a stable color for each package in a plan.
#[derive(Debug, Clone)]
pub struct Palette {
    keys: Vec<PackageKey>,
}

impl Palette {
    pub fn for_result(result: &PackingResult) -> Self {
        let mut keys: Vec<PackageKey> = Vec::new();

        let placed = result.layers().iter().flat_map(Layer::items);
        for item in placed {
            let key = item.key();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        Self { keys }
    }

    fn color(&self, key: &PackageKey) -> Pixel {
        let index = self
            .keys
            .iter()
            .position(|known| known == key)
            .unwrap_or(0);

        PALETTE[index % PALETTE.len()]
    }
}

/// Largest canvas we're willing to allocate, in pixels. At four bytes per
/// pixel this is 256 MiB.
pub const MAX_PIXELS: u64 = 1 << 26;

/// How large a canvas for `pallet` is at the given scale, or `None` if it
/// wouldn't fit in 32 bits or would have more than [`MAX_PIXELS`] pixels.
///
/// [`MAX_PIXELS`]: constant.MAX_PIXELS.html
pub fn canvas_size(pallet: &Pallet, scale: u32) -> Option<(u32, u32)> {
    let width = pallet.width().checked_mul(scale)?;
    let depth = pallet.depth().checked_mul(scale)?;

    if u64::from(width) * u64::from(depth) > MAX_PIXELS {
        return None;
    }

    Some((width, depth))
}

pub(crate) fn render_png(layer: &Layer, pallet: &Pallet, palette: &Palette, scale: u32) -> Image {
    let size = (pallet.width() * scale, pallet.depth() * scale);
    let border = (scale / 4).max(1);

    let mut image = Image::new_filled_rgba8(size, BACKGROUND);

    for item in layer.items() {
        let pos = (item.x * scale, item.y * scale);
        let item_size = (item.width * scale, item.depth * scale);

        image.fill_rect(pos, item_size, palette.color(&item.key()));
        image.stroke_rect(pos, item_size, border, BORDER);
    }

    image
}

pub fn render_svg(layer: &Layer, pallet: &Pallet, palette: &Palette, scale: u32) -> String {
    let (width, depth) = pallet.footprint();
    let mut svg = String::new();

    // Writing into a String can't fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        u64::from(width) * u64::from(scale),
        u64::from(depth) * u64::from(scale),
        width,
        depth
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        width,
        depth,
        hex(BACKGROUND)
    );

    for item in layer.items() {
        let font_size = f64::from(item.width.min(item.depth)) / 4.0;

        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            item.x,
            item.y,
            item.width,
            item.depth,
            hex(palette.color(&item.key())),
            hex(BORDER),
            1.0 / f64::from(scale.max(1)),
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            f64::from(item.x) + f64::from(item.width) / 2.0,
            f64::from(item.y) + f64::from(item.depth) / 2.0,
            font_size,
            escape_xml(&item.name)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn hex(pixel: Pixel) -> String {
    format!("#{:02x}{:02x}{:02x}", pixel.r, pixel.g, pixel.b)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod test {
    use super::*;

    use layerpack::{LayerPacker, PackageList, PackageSpec};

    fn plan() -> PackingResult {
        let packages = PackageList::from_specs(vec![
            PackageSpec::new("A & B", (4, 1, 4), 1),
            PackageSpec::new("C", (2, 1, 2), 1),
        ])
        .unwrap();

        LayerPacker::new(Pallet::new(8, 4, 1).unwrap())
            .plan(&packages)
            .unwrap()
    }

    #[test]
    fn png_colors_packages() {
        let result = plan();
        let palette = Palette::for_result(&result);
        let layer = result.layer(1).unwrap();

        let image = render_png(layer, result.pallet(), &palette, 2);

        assert_eq!(image.size(), (16, 8));
        assert_eq!(image.get_pixel((0, 0)), BORDER);
        assert_eq!(image.get_pixel((3, 3)), PALETTE[0]);
        assert_eq!(image.get_pixel((10, 1)), PALETTE[1]);
        assert_eq!(image.get_pixel((10, 6)), BACKGROUND);
        assert_eq!(image.get_pixel((15, 7)), BACKGROUND);
    }

    #[test]
    fn svg_labels_are_escaped() {
        let result = plan();
        let palette = Palette::for_result(&result);
        let layer = result.layer(1).unwrap();

        let svg = render_svg(layer, result.pallet(), &palette, 10);

        insta::assert_snapshot!(svg.trim_end(), @r###"
        <svg xmlns="http://www.w3.org/2000/svg" width="80" height="40" viewBox="0 0 8 4">
          <rect x="0" y="0" width="8" height="4" fill="#eeeeee"/>
          <rect x="0" y="0" width="4" height="4" fill="#4e79a7" stroke="#202020" stroke-width="0.1"/>
          <text x="2" y="2" font-size="1" text-anchor="middle" dominant-baseline="middle">A &amp; B</text>
          <rect x="4" y="0" width="2" height="2" fill="#f28e2b" stroke="#202020" stroke-width="0.1"/>
          <text x="5" y="1" font-size="0.5" text-anchor="middle" dominant-baseline="middle">C</text>
        </svg>
        "###);
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let pallet = Pallet::new(u32::MAX, 10, 10).unwrap();

        assert_eq!(canvas_size(&pallet, 2), None);
        assert_eq!(canvas_size(&pallet, 1), None);
    }

    #[test]
    fn canvas_pixel_count_is_capped() {
        let huge = Pallet::new(40_000, 40_000, 10).unwrap();
        assert_eq!(canvas_size(&huge, 1), None);

        let square = Pallet::new(8192, 8192, 10).unwrap();
        assert_eq!(canvas_size(&square, 1), Some((8192, 8192)));
        assert_eq!(canvas_size(&square, 2), None);

        let small = Pallet::new(120, 80, 10).unwrap();
        assert_eq!(canvas_size(&small, 4), Some((480, 320)));
    }
}
