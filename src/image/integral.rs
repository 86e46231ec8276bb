//! Integral images (summed-area tables) over multi-channel views.
//!
//! Each cell accumulates the intensities of every channel of every pixel in
//! the rectangle from the image origin up to and including that pixel, so the
//! sum of any rectangular window comes back from four lookups.

use crate::image::ImageView;

/// Summed-area table with one `i64` cell per source pixel.
///
/// Built once per source image inside a matching operation and immutable
/// afterwards; it is never shared or cached across calls.
pub struct IntegralImage {
    data: Vec<i64>,
    width: usize,
    height: usize,
}

impl IntegralImage {
    /// Builds the table in a single row-major pass over `src`.
    ///
    /// Per row, a running prefix sum over all channels is added to the cell
    /// directly above, which yields the cumulative rectangle sum.
    pub fn build(src: ImageView<'_, u8>) -> Self {
        let width = src.width();
        let height = src.height();
        let channels = src.channels();
        let mut data = vec![0i64; width * height];

        for y in 0..height {
            let row = src.row(y).expect("row within bounds for integral build");
            let mut run = 0i64;
            for x in 0..width {
                let pixel = &row[x * channels..(x + 1) * channels];
                run += pixel.iter().map(|&v| i64::from(v)).sum::<i64>();
                let above = if y > 0 { data[(y - 1) * width + x] } else { 0 };
                data[y * width + x] = run + above;
            }
        }

        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the table width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the table height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cumulative sum over the rectangle `[0, x] x [0, y]`.
    ///
    /// Requires `x < width` and `y < height`.
    pub fn at(&self, x: usize, y: usize) -> i64 {
        self.data[y * self.width + x]
    }

    /// Returns the total intensity sum of the source image.
    pub fn total(&self) -> i64 {
        self.data[self.data.len() - 1]
    }

    /// Returns the exact intensity sum of the `nw x nh` window whose top-left
    /// pixel is `(x, y)`, from four corner lookups.
    ///
    /// Requires `x + nw <= width` and `y + nh <= height`.
    pub fn window_sum(&self, x: usize, y: usize, nw: usize, nh: usize) -> i64 {
        debug_assert!(x + nw <= self.width && y + nh <= self.height);
        self.corner(x, y) + self.corner(x + nw, y + nh)
            - self.corner(x, y + nh)
            - self.corner(x + nw, y)
    }

    // Exclusive corner lookup: sum over [0, a) x [0, b), zero on the
    // top/left border.
    fn corner(&self, a: usize, b: usize) -> i64 {
        if a == 0 || b == 0 {
            0
        } else {
            self.data[(b - 1) * self.width + (a - 1)]
        }
    }
}
