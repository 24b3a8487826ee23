//! Editor button layout and hit-testing.
//!
//! The screen is split into four equal quadrants:
//! ```text
//! +--------+--------+
//! |  dot   |  dash  |
//! +--------+--------+
//! |  ret   |  del   |
//! +--------+--------+
//! ```
//! Region edges are inclusive, so a point on a shared edge belongs to the
//! first region in the order above.

use embedded_graphics::prelude::{Point, Size};

/// One of the four editor buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    Dot,
    Dash,
    Return,
    Delete,
}

impl Region {
    /// Hit-test order.
    pub const ALL: [Region; 4] = [Region::Dot, Region::Dash, Region::Return, Region::Delete];

    /// Top-left corner and size of this region on a screen of `screen` size.
    pub fn bounds(self, screen: Size) -> (Point, Size) {
        let half = Size::new(screen.width / 2, screen.height / 2);
        let w = half.width as i32;
        let h = half.height as i32;
        let origin = match self {
            Region::Dot => Point::new(0, 0),
            Region::Dash => Point::new(w, 0),
            Region::Return => Point::new(0, h),
            Region::Delete => Point::new(w, h),
        };
        (origin, half)
    }

    fn contains(self, screen: Size, p: Point) -> bool {
        let (origin, size) = self.bounds(screen);
        p.x >= origin.x
            && p.x <= origin.x + size.width as i32
            && p.y >= origin.y
            && p.y <= origin.y + size.height as i32
    }

    /// Region under `p`, or `None` when the point is off screen.
    pub fn hit(screen: Size, p: Point) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.contains(screen, p))
    }
}

/// Row index of a `rows`-row vertical menu under `p`.
pub fn menu_row(screen: Size, rows: usize, p: Point) -> Option<usize> {
    if rows == 0 || screen.height == 0 {
        return None;
    }
    if p.x < 0 || p.y < 0 || p.x > screen.width as i32 || p.y > screen.height as i32 {
        return None;
    }
    let row = p.y as usize * rows / screen.height as usize;
    Some(row.min(rows - 1))
}
