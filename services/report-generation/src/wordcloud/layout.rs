//! Word placement
//!
//! Words are sized relative to their predecessor in the ranking and placed
//! largest first along an Archimedean spiral that starts at the canvas
//! center. Collisions are checked against a coarse occupancy grid through a
//! summed-area table, so each candidate position costs O(1).

use pdfvocab_models::RankedList;
use pdfvocab_utils::WordCloudConfig;

/// Occupancy grid resolution in pixels.
const CELL: u32 = 4;

/// Pixel extent of `text` at `font_size`.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> (u32, u32);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: u64,
    pub rank: usize,
    pub font_size: f32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub placed: Vec<PlacedWord>,
    pub skipped: Vec<String>,
}

pub fn layout_words(
    ranked: &RankedList,
    max_words: usize,
    config: &WordCloudConfig,
    measure: &impl TextMeasure,
) -> Layout {
    let mut grid = OccupancyGrid::new(config.width, config.height);
    let mut placed = Vec::new();
    let mut skipped = Vec::new();

    let mut font_size = config.max_font_size;
    let mut last_count: Option<u64> = None;

    for (rank, entry) in ranked.iter().take(max_words).enumerate() {
        if let Some(previous) = last_count {
            let ratio = entry.count as f32 / previous.max(1) as f32;
            let rs = config.relative_scaling;
            font_size = ((rs * ratio + (1.0 - rs)) * font_size).round();
        }
        last_count = Some(entry.count);

        let mut size = font_size.max(config.min_font_size);
        let position = loop {
            let (width, height) = measure.measure(&entry.word, size);
            if let Some((x, y)) = find_position(&grid, width + 2 * config.margin, height + 2 * config.margin) {
                break Some((x, y, width, height));
            }
            size -= config.font_step;
            if size < config.min_font_size {
                break None;
            }
        };

        match position {
            Some((x, y, width, height)) => {
                grid.occupy(x, y, width + 2 * config.margin, height + 2 * config.margin);
                placed.push(PlacedWord {
                    word: entry.word.clone(),
                    count: entry.count,
                    rank,
                    font_size: size,
                    x: (x + config.margin) as i32,
                    y: (y + config.margin) as i32,
                    width,
                    height,
                });
                // later words never outgrow one that had to shrink
                font_size = size;
            }
            None => skipped.push(entry.word.clone()),
        }
    }

    Layout { placed, skipped }
}

/// Walk the spiral outwards until a free box of `w` x `h` is found.
fn find_position(grid: &OccupancyGrid, w: u32, h: u32) -> Option<(u32, u32)> {
    if w == 0 || h == 0 || w > grid.width || h > grid.height {
        return None;
    }

    let cx = (grid.width - w) as f32 / 2.0;
    let cy = (grid.height - h) as f32 / 2.0;
    let max_radius = (grid.width as f32).hypot(grid.height as f32) / 2.0;
    let spacing = CELL as f32;
    let aspect = grid.width as f32 / grid.height as f32;

    let mut theta: f32 = 0.0;
    loop {
        let radius = spacing * theta / std::f32::consts::TAU;
        if radius > max_radius {
            return None;
        }

        let x = cx + radius * aspect * theta.cos();
        let y = cy + radius * theta.sin();
        if x >= 0.0 && y >= 0.0 {
            let (x, y) = (x as u32, y as u32);
            if x + w <= grid.width && y + h <= grid.height && grid.is_free(x, y, w, h) {
                return Some((x, y));
            }
        }

        theta += spacing / radius.max(spacing);
    }
}

struct OccupancyGrid {
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
    occupied: Vec<bool>,
    /// Summed-area table over `occupied`, (cols + 1) x (rows + 1).
    sums: Vec<u32>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32) -> Self {
        let cols = width.div_ceil(CELL) as usize;
        let rows = height.div_ceil(CELL) as usize;
        Self {
            width,
            height,
            cols,
            rows,
            occupied: vec![false; cols * rows],
            sums: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    fn cell_range(&self, x: u32, y: u32, w: u32, h: u32) -> (usize, usize, usize, usize) {
        let c0 = (x / CELL) as usize;
        let r0 = (y / CELL) as usize;
        let c1 = (((x + w - 1) / CELL) as usize).min(self.cols - 1);
        let r1 = (((y + h - 1) / CELL) as usize).min(self.rows - 1);
        (c0, r0, c1, r1)
    }

    fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        let (c0, r0, c1, r1) = self.cell_range(x, y, w, h);
        let stride = self.cols + 1;
        let at = |c: usize, r: usize| self.sums[r * stride + c];
        let total = at(c1 + 1, r1 + 1) + at(c0, r0) - at(c0, r1 + 1) - at(c1 + 1, r0);
        total == 0
    }

    fn occupy(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let (c0, r0, c1, r1) = self.cell_range(x, y, w, h);
        for r in r0..=r1 {
            for c in c0..=c1 {
                self.occupied[r * self.cols + c] = true;
            }
        }
        self.rebuild_sums();
    }

    fn rebuild_sums(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_sum = 0;
            for c in 0..self.cols {
                row_sum += self.occupied[r * self.cols + c] as u32;
                self.sums[(r + 1) * stride + c + 1] = self.sums[r * stride + c + 1] + row_sum;
            }
        }
    }
}
