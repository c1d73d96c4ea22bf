use softras::raster;
use softras::{Rgba, SampleBuffer};

fn lit(buf: &SampleBuffer) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    for sy in 0..buf.sample_height() {
        for sx in 0..buf.sample_width() {
            if buf.get(sx, sy) != Rgba::white() {
                out.push((sx as i64, sy as i64));
            }
        }
    }
    out
}

fn raster_line(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(i64, i64)> {
    let mut buf = SampleBuffer::new(64, 64, 1);
    raster::line(&mut buf, x0, y0, x1, y1, Rgba::black());
    lit(&buf)
}

#[test]
fn sample_count_is_major_delta_plus_one() {
    let cases: [(f64, f64, f64, f64); 5] = [
        (1.0, 1.0, 10.0, 4.0),
        (2.0, 5.0, 20.0, 20.0),
        (5.0, 2.0, 5.0, 60.0),
        (7.0, 50.0, 12.0, 3.0),
        (30.0, 10.0, 3.0, 10.0),
    ];
    for &(x0, y0, x1, y1) in &cases {
        let dx = (x1 - x0).abs() as usize;
        let dy = (y1 - y0).abs() as usize;
        let samples = raster_line(x0, y0, x1, y1);
        assert_eq!(
            samples.len(),
            dx.max(dy) + 1,
            "line ({},{})-({},{})",
            x0,
            y0,
            x1,
            y1
        );
    }
}

#[test]
fn zero_length_line_plots_one_sample() {
    let samples = raster_line(3.0, 7.0, 3.0, 7.0);
    assert_eq!(samples, vec![(3, 7)]);
}

#[test]
fn consecutive_samples_are_eight_connected() {
    let cases = [
        (1.0, 1.0, 40.0, 13.0),
        (13.0, 40.0, 1.0, 1.0),
        (60.0, 2.0, 2.0, 50.0),
        (0.0, 0.0, 63.0, 63.0),
    ];
    for &(x0, y0, x1, y1) in &cases {
        let mut samples = raster_line(x0, y0, x1, y1);
        let x_dominant = (x1 - x0).abs() >= (y1 - y0).abs();
        if x_dominant {
            samples.sort_by_key(|&(x, _)| x);
        } else {
            samples.sort_by_key(|&(_, y)| y);
        }
        for pair in samples.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            let chebyshev = (bx - ax).abs().max((by - ay).abs());
            assert_eq!(chebyshev, 1, "gap between {:?} and {:?}", pair[0], pair[1]);
        }
    }
}

#[test]
fn endpoint_swap_yields_the_same_samples() {
    let cases = [
        (1.0, 1.0, 10.0, 4.0),
        (5.0, 2.0, 5.0, 60.0),
        (7.0, 50.0, 12.0, 3.0),
        (2.0, 3.0, 55.0, 40.0),
        (0.0, 60.0, 60.0, 0.0),
    ];
    for &(x0, y0, x1, y1) in &cases {
        let mut forward = raster_line(x0, y0, x1, y1);
        let mut backward = raster_line(x1, y1, x0, y0);
        forward.sort_unstable();
        backward.sort_unstable();
        assert_eq!(forward, backward, "line ({},{})-({},{})", x0, y0, x1, y1);
    }
}

#[test]
fn endpoints_scale_with_the_sample_rate() {
    let mut buf = SampleBuffer::new(16, 16, 2);
    raster::line(&mut buf, 0.0, 0.0, 4.0, 0.0, Rgba::black());
    let samples = lit(&buf);
    // (0,0)-(4,0) lands on sample coordinates (0,0)-(8,0)
    assert_eq!(samples.len(), 9);
    assert!(samples.iter().all(|&(_, sy)| sy == 0));
    assert!(samples.iter().all(|&(sx, _)| (0..=8).contains(&sx)));
}

#[test]
fn out_of_viewport_segments_are_clipped_silently() {
    let mut buf = SampleBuffer::new(8, 8, 1);
    raster::line(&mut buf, -5.0, -5.0, -1.0, -1.0, Rgba::black());
    assert!(lit(&buf).is_empty());
    raster::line(&mut buf, 4.0, -3.0, 4.0, 3.0, Rgba::black());
    let samples = lit(&buf);
    // only the in-viewport half of the segment lands
    assert_eq!(samples, vec![(4, 0), (4, 1), (4, 2), (4, 3)]);
}
