use iced::Color;

/// Core color palette for the Overture landing theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub node: Color,
    pub success: Color,
    pub danger: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::deep()
    }
}

impl PaletteColors {
    /// The deep-space landing palette.
    pub fn deep() -> Self {
        Self {
            background: Color::from_rgb8(2, 6, 23),      // Near-black navy
            surface: Color::from_rgb8(15, 23, 42),       // Dark slate
            border: Color::from_rgb8(51, 65, 85),        // Slate border
            text: Color::from_rgb8(248, 250, 252),       // Off-white
            muted: Color::from_rgb8(156, 163, 175),      // Subtitle gray
            dim: Color::from_rgb8(75, 85, 99),           // Placeholder gray
            accent: Color::from_rgb8(59, 130, 246),      // Logic blue
            accent_soft: Color::from_rgb8(96, 165, 250), // Light blue
            node: Color::from_rgb8(100, 116, 139),       // Slate particle
            success: Color::from_rgb8(74, 222, 128),     // Green
            danger: Color::from_rgb8(248, 113, 113),     // Red
        }
    }
}

/// Returns the default palette for the application.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}
