//! Scan conversion
//!
//! All coordinates given to these functions are device-space (nominal
//! pixels); the sample rate of the destination buffer determines the sample
//! grid actually written. Pixel-coverage decisions are exact and
//! reproducible: the line walker is pure integer stepping and the triangle
//! test is a signed edge-function evaluation.

use crate::color::Rgba;
use crate::element::Texture;
use crate::sample::SampleBuffer;

/// Plot a single sample at the nearest sample to (x, y)
///
/// Coordinates are scaled to the sample grid and floored; out-of-bounds
/// plots are discarded and in-bounds plots overwrite.
pub fn point(buf: &mut SampleBuffer, x: f64, y: f64, color: Rgba) {
    let rate = buf.rate() as f64;
    let sx = (x * rate).floor() as i64;
    let sy = (y * rate).floor() as i64;
    buf.set(sx, sy, color);
}

/// Rasterize a one-sample-wide line from (x0, y0) to (x1, y1)
///
/// Midpoint/Bresenham stepping on integer sample coordinates, no float
/// accumulation, so long lines cannot drift. The walk always proceeds in the
/// increasing direction of the dominant axis, which makes the plotted sample
/// set independent of endpoint order. For integer endpoints exactly
/// `max(|dx|, |dy|) + 1` samples come out, each adjacent pair 8-connected.
/// No width, caps, or joins are modeled.
pub fn line(buf: &mut SampleBuffer, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba) {
    let rate = buf.rate() as f64;
    let x0 = (x0 * rate).floor() as i64;
    let y0 = (y0 * rate).floor() as i64;
    let x1 = (x1 * rate).floor() as i64;
    let y1 = (y1 * rate).floor() as i64;

    let dx = x1 - x0;
    let dy = y1 - y0;
    let adx = dx.abs();
    let ady = dy.abs();
    // minor axis advances toward the far endpoint: increasing when dx and dy
    // agree in sign, decreasing otherwise
    let step = if (dx < 0) == (dy < 0) { 1 } else { -1 };

    if ady <= adx {
        // x-dominant
        let (mut x, mut y, xend) = if dx >= 0 { (x0, y0, x1) } else { (x1, y1, x0) };
        let mut err = 2 * ady - adx;
        buf.set(x, y, color);
        while x < xend {
            x += 1;
            if err < 0 {
                err += 2 * ady;
            } else {
                y += step;
                err += 2 * (ady - adx);
            }
            buf.set(x, y, color);
        }
    } else {
        // y-dominant
        let (mut x, mut y, yend) = if dy >= 0 { (x0, y0, y1) } else { (x1, y1, y0) };
        let mut err = 2 * adx - ady;
        buf.set(x, y, color);
        while y < yend {
            y += 1;
            if err <= 0 {
                err += 2 * adx;
            } else {
                x += step;
                err += 2 * (adx - ady);
            }
            buf.set(x, y, color);
        }
    }
}

/// Fill a triangle, supersampled
///
/// Every integer pixel in the bounding box is probed at `rate * rate`
/// sub-sample offsets (a/N, b/N). A sub-sample is covered iff all three edge
/// functions, multiplied by the sign of the twice-signed area, are >= 0:
/// closed half-planes, independent of winding order. Sub-samples exactly on
/// an edge produce a zero product and count as covered. A zero-area triangle
/// plots nothing; without the guard the zero products would cover the whole
/// bounding box.
pub fn triangle(
    buf: &mut SampleBuffer,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Rgba,
) {
    let dx0 = x1 - x0;
    let dy0 = y1 - y0;
    let dx1 = x2 - x1;
    let dy1 = y2 - y1;
    let dx2 = x0 - x2;
    let dy2 = y0 - y2;

    // twice the signed area; its sign encodes the winding order
    let area = dx0 * dy1 - dy0 * dx1;
    if area == 0.0 {
        return;
    }

    // bounding box clipped to the viewport; samples outside would be
    // discarded anyway
    let min_x = (x0.min(x1).min(x2).floor() as i64).max(0);
    let max_x = (x0.max(x1).max(x2).floor() as i64).min(buf.width() as i64 - 1);
    let min_y = (y0.min(y1).min(y2).floor() as i64).max(0);
    let max_y = (y0.max(y1).max(y2).floor() as i64).min(buf.height() as i64 - 1);

    let rate = buf.rate();
    let n = rate as f64;
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            for a in 0..rate {
                for b in 0..rate {
                    let px = x as f64 + a as f64 / n;
                    let py = y as f64 + b as f64 / n;
                    let e0 = (py - y0) * dx0 - (px - x0) * dy0;
                    let e1 = (py - y1) * dx1 - (px - x1) * dy1;
                    let e2 = (py - y2) * dx2 - (px - x2) * dy2;
                    if e0 * area >= 0.0 && e1 * area >= 0.0 && e2 * area >= 0.0 {
                        buf.set(x * rate as i64 + a as i64, y * rate as i64 + b as i64, color);
                    }
                }
            }
        }
    }
}

/// Resample a texture into the device-space box (x0, y0)-(x1, y1)
///
/// Extension point: texture sampling is out of scope and this is a no-op.
pub fn image(_buf: &mut SampleBuffer, _x0: f64, _y0: f64, _x1: f64, _y1: f64, _tex: &Texture) {}
