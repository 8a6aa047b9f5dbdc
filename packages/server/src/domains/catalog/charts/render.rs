//! Chart rasterization.
//!
//! Charts are drawn straight into an RGB buffer: dark background, turquoise
//! accents. Only geometry is drawn; titles, axis labels, percentages and the
//! legend are part of the HTML page around the image.

use std::f64::consts::TAU;

use catalog::CatalogSnapshot;
use image::{Rgb, RgbImage};

pub const BACKGROUND: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
pub const ACCENT: Rgb<u8> = Rgb([0x40, 0xe0, 0xd0]);
pub const AXIS: Rgb<u8> = Rgb([0x33, 0x33, 0x33]);

/// Wedge colours, cycled when there are more labels than entries.
pub const PIE_PALETTE: [Rgb<u8>; 4] = [
    Rgb([0x40, 0xe0, 0xd0]),
    Rgb([0x5a, 0xe6, 0xd8]),
    Rgb([0x74, 0xec, 0xe0]),
    Rgb([0x8e, 0xf2, 0xe8]),
];

pub const BAR_ALPHA: f64 = 0.7;
const GRID_ALPHA: f64 = 0.1;
/// Fraction of each slot covered by its bar
const BAR_WIDTH: f64 = 0.6;

pub const BAR_SIZE: (u32, u32) = (1600, 1000);
pub const BAR_MARGIN_LEFT: u32 = 90;
pub const BAR_MARGIN_RIGHT: u32 = 40;
pub const BAR_MARGIN_TOP: u32 = 60;
pub const BAR_MARGIN_BOTTOM: u32 = 120;

pub const PIE_SIZE: u32 = 1000;
pub const PIE_RADIUS: f64 = 400.0;
/// Ring width as a fraction of the radius
const PIE_RING: f64 = 0.8;
/// Half of the 2px separator line
const PIE_EDGE: f64 = 1.0;

/// Mix `src` over `dst` with opacity `alpha`.
pub fn blend(dst: Rgb<u8>, src: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let mix = |d: u8, s: u8| (d as f64 * (1.0 - alpha) + s as f64 * alpha).round() as u8;
    Rgb([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
    ])
}

/// Fill `[x0, x1) x [y0, y1)` with `color` at `alpha`, clipped to the image.
fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>, alpha: f64) {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let dst = *img.get_pixel(x, y);
            img.put_pixel(x, y, blend(dst, color, alpha));
        }
    }
}

/// Round a positive step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Y-axis scale for a bar chart: (upper bound, tick step).
pub fn bar_scale(max_price: f64) -> (f64, f64) {
    let top = max_price.max(1.0) * 1.05;
    let step = nice_step(top / 5.0);
    ((top / step).ceil() * step, step)
}

/// Horizontal pixel span `[x0, x1)` of bar `index` out of `count`.
pub fn bar_span(index: usize, count: usize) -> (u32, u32) {
    let plot_width = (BAR_SIZE.0 - BAR_MARGIN_LEFT - BAR_MARGIN_RIGHT) as f64;
    let slot = plot_width / count.max(1) as f64;
    let start = BAR_MARGIN_LEFT as f64 + index as f64 * slot + slot * (1.0 - BAR_WIDTH) / 2.0;
    let x0 = start.round() as u32;
    let x1 = ((start + slot * BAR_WIDTH).round() as u32).max(x0 + 1);
    (x0, x1)
}

/// One bar per record, in record order, height proportional to price.
pub fn render_bar_chart(snapshot: &CatalogSnapshot) -> RgbImage {
    let (width, height) = BAR_SIZE;
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let bottom = height - BAR_MARGIN_BOTTOM;
    let plot_height = (bottom - BAR_MARGIN_TOP) as f64;
    let right = width - BAR_MARGIN_RIGHT;
    let (y_max, step) = bar_scale(snapshot.max_price());
    let to_y = |value: f64| bottom - ((value / y_max) * plot_height).round() as u32;

    let mut tick = step;
    while tick <= y_max + f64::EPSILON {
        let y = to_y(tick);
        fill_rect(&mut img, BAR_MARGIN_LEFT, y, right, y + 1, ACCENT, GRID_ALPHA);
        tick += step;
    }

    let records = snapshot.records();
    for (i, record) in records.iter().enumerate() {
        let (x0, x1) = bar_span(i, records.len());
        let top = to_y(record.price.min(y_max));
        fill_rect(&mut img, x0, top, x1, bottom, ACCENT, BAR_ALPHA);
    }

    // left and bottom spines
    fill_rect(&mut img, BAR_MARGIN_LEFT - 2, BAR_MARGIN_TOP, BAR_MARGIN_LEFT, bottom + 2, AXIS, 1.0);
    fill_rect(&mut img, BAR_MARGIN_LEFT - 2, bottom, right, bottom + 2, AXIS, 1.0);

    img
}

/// Wedge boundaries in radians, clockwise from 12 o'clock.
pub fn wedge_angles(shares: &[f64]) -> Vec<(f64, f64)> {
    let mut start = 0.0;
    shares
        .iter()
        .map(|share| {
            let end = start + share * TAU;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// Colour of the chart at point `(x, y)`, or `None` for background.
fn pie_sample(x: f64, y: f64, wedges: &[(f64, f64)]) -> Option<Rgb<u8>> {
    let center = PIE_SIZE as f64 / 2.0;
    let dx = x - center;
    let dy = center - y;
    let radius = dx.hypot(dy);
    if radius > PIE_RADIUS || radius < PIE_RADIUS * (1.0 - PIE_RING) {
        return None;
    }

    // 0 at 12 o'clock, growing clockwise
    let theta = dx.atan2(dy).rem_euclid(TAU);

    if wedges.len() > 1 {
        for &(start, _) in wedges {
            let offset = theta - start;
            if offset.cos() > 0.0 && (radius * offset.sin()).abs() < PIE_EDGE {
                return Some(BACKGROUND);
            }
        }
    }

    let index = wedges
        .iter()
        .position(|&(_, end)| theta < end)
        .unwrap_or(wedges.len().saturating_sub(1));
    Some(PIE_PALETTE[index % PIE_PALETTE.len()])
}

/// Ring chart of availability labels, largest group first.
pub fn render_pie_chart(snapshot: &CatalogSnapshot) -> RgbImage {
    let mut img = RgbImage::from_pixel(PIE_SIZE, PIE_SIZE, BACKGROUND);
    let shares: Vec<f64> = snapshot
        .availability_counts()
        .iter()
        .map(|c| c.share)
        .collect();
    if shares.is_empty() {
        return img;
    }
    let wedges = wedge_angles(&shares);

    // 2x2 supersampling smooths the ring edges
    const OFFSETS: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mut sum = [0u32; 3];
        let mut hit = false;
        for (ox, oy) in OFFSETS {
            let color = pie_sample(x as f64 + ox, y as f64 + oy, &wedges);
            hit |= color.is_some();
            let color = color.unwrap_or(BACKGROUND);
            for c in 0..3 {
                sum[c] += color[c] as u32;
            }
        }
        if hit {
            *pixel = Rgb([
                (sum[0] / 4) as u8,
                (sum[1] / 4) as u8,
                (sum[2] / 4) as u8,
            ]);
        }
    }

    img
}
