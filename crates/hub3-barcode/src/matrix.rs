//! # Module Matrix
//!
//! A 2D symbol as a grid of dark and light cells, and its SVG and PNG
//! renderings.
//!
//! ## Geometry
//! ```text
//!   pad = quiet_zone × module_width (all four sides)
//!
//!   ┌────────────────────────────────────┐
//!   │ pad                                │
//!   │    ██ █ █ ███  █ ██ ...            │  one cell = module_width
//!   │    ██ █ █ ███  █ ██ ...            │           × module_height
//!   │                                pad │
//!   └────────────────────────────────────┘
//! ```

use ::image::codecs::png::PngEncoder;
use ::image::{ExtendedColorType, ImageBuffer, ImageEncoder, Luma};

use crate::encoder::EncodeOptions;
use crate::error::{BarcodeError, BarcodeResult};

/// Dark/light cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl ModuleMatrix {
    /// An all-light matrix.
    pub fn new(width: u32, height: u32) -> Self {
        ModuleMatrix {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Builds a matrix by asking `dark(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, dark: F) -> Self
    where
        F: Fn(u32, u32) -> bool,
    {
        let mut matrix = ModuleMatrix::new(width, height);
        for y in 0..height {
            for x in 0..width {
                matrix.set(x, y, dark(x, y));
            }
        }
        matrix
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell value; anything outside the matrix is light.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[self.offset(x, y)]
    }

    /// Sets one cell. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, dark: bool) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.cells[offset] = dark;
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn row(&self, y: u32) -> &[bool] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The smallest sub-matrix holding every dark cell, or `None` when the
    /// matrix is entirely light. Encoders pad symbols differently; cropping
    /// lets [`EncodeOptions::quiet_zone`] alone decide the margin.
    pub fn crop_to_content(&self) -> Option<ModuleMatrix> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    let (x0, y0, x1, y1) = bounds.unwrap_or((x, y, x, y));
                    bounds = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
                }
            }
        }

        let (x0, y0, x1, y1) = bounds?;
        Some(ModuleMatrix::from_fn(x1 - x0 + 1, y1 - y0 + 1, |x, y| {
            self.get(x0 + x, y0 + y)
        }))
    }

    /// Output size in units for the given geometry, quiet zone included.
    pub fn output_size(&self, options: &EncodeOptions) -> (u32, u32) {
        let pad = options.quiet_zone * options.module_width;
        (
            self.width * options.module_width + 2 * pad,
            self.height * options.module_height + 2 * pad,
        )
    }

    /// Renders black rectangles on a white background.
    ///
    /// Identical consecutive rows are merged into one band, and every
    /// horizontal run of dark cells within a band becomes one `<rect>`.
    pub fn to_svg(&self, options: &EncodeOptions) -> String {
        let (mw, mh) = (options.module_width, options.module_height);
        let pad = options.quiet_zone * mw;
        let (width, height) = self.output_size(options);

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        svg.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/><g fill="#000000">"##);

        let mut y = 0;
        while y < self.height {
            let row = self.row(y);
            let mut band = 1;
            while y + band < self.height && self.row(y + band) == row {
                band += 1;
            }

            let mut x = 0;
            while x < self.width {
                if !row[x as usize] {
                    x += 1;
                    continue;
                }
                let start = x;
                while x < self.width && row[x as usize] {
                    x += 1;
                }
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}"/>"#,
                    pad + start * mw,
                    pad + y * mh,
                    (x - start) * mw,
                    band * mh
                ));
            }

            y += band;
        }

        svg.push_str("</g></svg>");
        svg
    }

    /// Renders an 8-bit greyscale PNG.
    pub fn to_png(&self, options: &EncodeOptions) -> BarcodeResult<Vec<u8>> {
        options.check()?;

        let (mw, mh) = (options.module_width, options.module_height);
        let pad = options.quiet_zone * mw;
        let (width, height) = self.output_size(options);

        let image: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |px, py| {
            let dark = px >= pad && py >= pad && self.get((px - pad) / mw, (py - pad) / mh);
            Luma([if dark { 0 } else { 255 }])
        });

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(image.as_raw(), width, height, ExtendedColorType::L8)
            .map_err(|e| BarcodeError::Encoding(format!("PNG encoding failed: {}", e)))?;

        Ok(bytes)
    }
}
