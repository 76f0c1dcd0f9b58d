//! Line, ellipse and arc rasterization
//!
//! Everything here samples closed-form curve equations at unit steps
//! and sets pixels one at a time. All intermediate math runs in signed
//! integers with truncation toward zero; points that leave the panel
//! during sampling or rotation are dropped silently, only the anchor
//! points of a primitive are validated up front.

use phosphor_math::{cos, ipow, isqrt, sin, Angle, Q30};

use crate::frame::{DrawError, Frame, Point, HEIGHT, WIDTH};

/// Rotate a point around a center, in whole degrees
///
/// Returns `None` when the rotated point leaves the panel. A zero
/// angle is the identity and skips the trig entirely.
pub fn rotate_point(p: Point, center: Point, degrees: u16) -> Option<Point> {
    let (x, y) = rotate(i32::from(p.x), i32::from(p.y), center, u32::from(degrees));

    if (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
        Some(Point::new(x as u8, y as u8))
    } else {
        None
    }
}

/// Rotation on intermediate signed coordinates
fn rotate(x: i32, y: i32, center: Point, degrees: u32) -> (i32, i32) {
    if degrees == 0 {
        return (x, y);
    }

    let angle = Angle::from_degrees(degrees as i32);
    let s = i64::from(sin(angle).raw());
    let c = i64::from(cos(angle).raw());
    let scale = i64::from(Q30::ONE.raw());

    let cx = i32::from(center.x);
    let cy = i32::from(center.y);
    let dx = i64::from(x - cx);
    let dy = i64::from(y - cy);

    let rx = cx + ((dx * c - dy * s) / scale) as i32;
    let ry = cy + ((dx * s + dy * c) / scale) as i32;
    (rx, ry)
}

/// Draw a line between two points
///
/// Fails if either endpoint is off-screen.
pub fn draw_line(frame: &mut Frame, mut a: Point, mut b: Point) -> Result<(), DrawError> {
    if !Frame::contains(a) || !Frame::contains(b) {
        return Err(DrawError::OffScreen);
    }

    // Keep a left of b
    if a.x > b.x {
        core::mem::swap(&mut a, &mut b);
    }

    // Endpoints are always drawn explicitly
    frame.plot(i32::from(a.x), i32::from(a.y));
    frame.plot(i32::from(b.x), i32::from(b.y));

    let dx = i32::from(b.x) - i32::from(a.x);
    let dy = i32::from(b.y) - i32::from(a.y);
    let step = if a.y < b.y { 1 } else { -1 };

    if dx == 0 {
        let mut y = i32::from(a.y);
        while y != i32::from(b.y) {
            frame.plot(i32::from(a.x), y);
            y += step;
        }
    } else {
        for x in i32::from(a.x)..=i32::from(b.x) {
            let offset = x - i32::from(a.x);
            let mut y = i32::from(a.y) + dy * offset / dx;
            let next = i32::from(a.y) + dy * (offset + 1) / dx;

            frame.plot(x, y);

            // Fill every row between consecutive samples so steep
            // slopes leave no column gaps
            while y != next {
                frame.plot(x, y);
                y += step;
            }
        }
    }

    Ok(())
}

/// Draw an ellipse from its center, two radii and a rotation
///
/// Fails if the center is off-screen; the outline clips silently.
pub fn draw_ellipse(
    frame: &mut Frame,
    center: Point,
    major: u8,
    minor: u8,
    degrees: u16,
) -> Result<(), DrawError> {
    if !Frame::contains(center) {
        return Err(DrawError::OffScreen);
    }

    let cx = i32::from(center.x);
    let cy = i32::from(center.y);
    let major = i64::from(major);
    let minor = i64::from(minor);
    let major_sq = ipow(major, 2);
    let minor_sq = ipow(minor, 2);
    let rotation = u32::from(degrees);

    // Scan columns, solving for the two row intersections
    for offset in -major..major {
        let x = cx + offset as i32;
        let height = isqrt((minor_sq * (major_sq - ipow(offset, 2)) / major_sq) as u32) as i32;

        let (px, py) = rotate(x, cy + height, center, rotation);
        frame.plot(px, py);
        let (px, py) = rotate(x, cy - height, center, rotation);
        frame.plot(px, py);
    }

    // Scan rows as well; unit column steps undersample the steep
    // flanks of the curve
    for offset in -minor..minor {
        let y = cy + offset as i32;
        let width = isqrt((major_sq * (minor_sq - ipow(offset, 2)) / minor_sq) as u32) as i32;

        let (px, py) = rotate(cx + width, y, center, rotation);
        frame.plot(px, py);
        let (px, py) = rotate(cx - width, y, center, rotation);
        frame.plot(px, py);
    }

    Ok(())
}

/// Draw a circle from its center and radius
pub fn draw_circle(frame: &mut Frame, center: Point, radius: u8) -> Result<(), DrawError> {
    draw_ellipse(frame, center, radius, radius, 0)
}

/// Draw a circular arc of `degrees`, starting `offset` degrees around
///
/// Fails if the center is off-screen; the arc clips silently.
pub fn draw_arc(
    frame: &mut Frame,
    center: Point,
    radius: u8,
    degrees: u16,
    offset: u16,
) -> Result<(), DrawError> {
    if !Frame::contains(center) {
        return Err(DrawError::OffScreen);
    }

    let mut span = u32::from(degrees);
    let mut offset = u32::from(offset);

    // The per-axis scans below only hold within one quadrant, so peel
    // off 90-degree spans and rotate each into place
    while span > 90 {
        arc_span(frame, center, radius, 90, offset);
        span -= 90;
        offset += 90;
    }
    arc_span(frame, center, radius, span, offset);

    Ok(())
}

/// Rasterize an arc of at most 90 degrees, rotated by `offset`
fn arc_span(frame: &mut Frame, center: Point, radius: u8, span: u32, offset: u32) {
    let cx = i32::from(center.x);
    let cy = i32::from(center.y);
    let r_sq = ipow(i64::from(radius), 2);
    let angle = Angle::from_degrees(span as i32);

    // Scan rows up to r*sin(span), solving the circle equation for x
    let y_max = cy + sin(angle).scale(i32::from(radius));
    let mut y = cy;
    while y <= y_max {
        let x = cx + isqrt((r_sq - ipow(i64::from(y - cy), 2)) as u32) as i32;
        let (px, py) = rotate(x, y, center, offset);
        frame.plot(px, py);
        y += 1;
    }

    // Scan columns up to r*cos(span), solving for y; together the two
    // scans cover the quadrant, meeting at `span`
    let x_max = cx + cos(angle).scale(i32::from(radius));
    let mut x = cx;
    while x <= x_max {
        let py = cy + isqrt((r_sq - ipow(i64::from(x - cx), 2)) as u32) as i32;
        let (px, py) = rotate(x, py, center, offset);
        frame.plot(px, py);
        x += 1;
    }
}
