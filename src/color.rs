//! Colors and the series palette.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// CSS color string (`rgb(..)` when opaque, `rgba(..)` otherwise).
    #[must_use]
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, f32::from(self.a) / 255.0)
        }
    }
}

/// Qualitative palette, cycled one color per plotted series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::category10()
    }
}

impl Palette {
    /// Ten-color categorical palette (the familiar default plotting cycle).
    #[must_use]
    pub fn category10() -> Self {
        Self {
            colors: vec![
                Rgba::rgb(31, 119, 180),
                Rgba::rgb(255, 127, 14),
                Rgba::rgb(44, 160, 44),
                Rgba::rgb(214, 39, 40),
                Rgba::rgb(148, 103, 189),
                Rgba::rgb(140, 86, 75),
                Rgba::rgb(227, 119, 194),
                Rgba::rgb(127, 127, 127),
                Rgba::rgb(188, 189, 34),
                Rgba::rgb(23, 190, 207),
            ],
        }
    }

    /// Palette from explicit colors; falls back to [`Rgba::BLACK`] if empty.
    #[must_use]
    pub fn new(colors: Vec<Rgba>) -> Self {
        if colors.is_empty() {
            return Self { colors: vec![Rgba::BLACK] };
        }
        Self { colors }
    }

    /// Color for the `index`-th series, wrapping around.
    #[must_use]
    pub fn color(&self, index: usize) -> Rgba {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
