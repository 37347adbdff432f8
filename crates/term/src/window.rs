//! Decorative window frame and the status line beneath it.

use crate::cube_view::Viewport;
use crate::fb::{CellStyle, FrameBuffer};

/// Inner area of the window, in framebuffer cells. The border sits one cell
/// outside on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Window {
    /// Window inset by `pad_x` columns and `pad_y` rows on each side.
    ///
    /// Returns `None` when the padding leaves no room for the border and the
    /// status line below it.
    pub fn inset(viewport: Viewport, pad_x: u16, pad_y: u16) -> Option<Window> {
        if pad_x == 0 || pad_y < 2 {
            return None;
        }
        let width = viewport.width.checked_sub(pad_x.checked_mul(2)?)?;
        let height = viewport.height.checked_sub(pad_y.checked_mul(2)?)?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Window {
            x: pad_x,
            y: pad_y,
            width,
            height,
        })
    }

    /// First row below the bottom border.
    pub fn status_row(&self) -> u16 {
        self.y + self.height + 1
    }

    /// Rounded border around the inner area.
    pub fn draw_border(&self, fb: &mut FrameBuffer, style: CellStyle) {
        let left = self.x - 1;
        let top = self.y - 1;
        let right = self.x + self.width;
        let bottom = self.y + self.height;

        for x in left + 1..right {
            fb.put_char(x, top, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in top + 1..bottom {
            fb.put_char(left, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(left, top, '╭', style);
        fb.put_char(right, top, '╮', style);
        fb.put_char(left, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_leaves_padding_on_both_sides() {
        let w = Window::inset(Viewport::new(120, 40), 50, 10).unwrap();
        assert_eq!(w, Window { x: 50, y: 10, width: 20, height: 20 });
        assert_eq!(w.status_row(), 31);
    }

    #[test]
    fn small_viewports_have_no_window() {
        assert!(Window::inset(Viewport::new(100, 40), 50, 10).is_none());
        assert!(Window::inset(Viewport::new(120, 20), 50, 10).is_none());
        assert!(Window::inset(Viewport::new(120, 40), 0, 10).is_none());
    }

    #[test]
    fn border_has_rounded_corners() {
        let mut fb = FrameBuffer::new(10, 8);
        let w = Window::inset(Viewport::new(10, 8), 2, 2).unwrap();
        w.draw_border(&mut fb, CellStyle::default());
        assert_eq!(fb.get(1, 1).unwrap().ch, '╭');
        assert_eq!(fb.get(8, 1).unwrap().ch, '╮');
        assert_eq!(fb.get(1, 6).unwrap().ch, '╰');
        assert_eq!(fb.get(8, 6).unwrap().ch, '╯');
        assert_eq!(fb.get(4, 1).unwrap().ch, '─');
        assert_eq!(fb.get(1, 3).unwrap().ch, '│');
        assert_eq!(fb.get(4, 3).unwrap().ch, ' ');
    }
}
