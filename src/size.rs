/// Signed dimensions of a 2D region (width × height).
///
/// Either component may be negative when the corners of the source
/// container are reversed on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,  // Extent on the x-axis.
    pub height: i32, // Extent on the y-axis.
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Creates a new size with the specified width and height.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<Size> for (i32, i32) {
    fn from(s: Size) -> (i32, i32) {
        (s.width, s.height)
    }
}

impl From<(i32, i32)> for Size {
    fn from(s: (i32, i32)) -> Size {
        Size::new(s.0, s.1)
    }
}
