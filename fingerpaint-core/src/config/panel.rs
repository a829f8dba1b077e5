//! Panel and layout geometry

/// Panel width in pixels (portrait)
pub const PANEL_WIDTH: u16 = 240;

/// Panel height in pixels (portrait)
pub const PANEL_HEIGHT: u16 = 320;

/// Glyph cell width in pixels
pub const FONT_WIDTH: u16 = 8;

/// Glyph cell height in pixels
pub const FONT_HEIGHT: u16 = 14;

/// Maximum characters a single `print` call emits
pub const MAX_TEXT_CHARS: usize = (PANEL_WIDTH / FONT_WIDTH) as usize;

/// Edge length of one palette box; also the height of the palette band
pub const BOX_SIZE: u16 = 40;

/// Border thickness of the selected-pen highlight
pub const HIGHLIGHT_THICKNESS: i16 = 6;

/// Edge offset of the square painted under a finger
pub const BRUSH_SIZE: u16 = 6;

/// Panel geometry used for addressing bounds and touch remapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelGeometry {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl PanelGeometry {
    /// 240x320 ILI9341 in portrait orientation
    pub const PORTRAIT: Self = Self {
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
    };

    /// Check that a coordinate pair lies on the panel
    ///
    /// The far edge itself is accepted; the controller clips it.
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x <= self.width && y <= self.height
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

/// Splash screen text and placement
pub mod splash {
    /// Title line
    pub const TITLE: &str = "FINGER PAINTING";
    /// Title position
    pub const TITLE_POS: (u16, u16) = (60, 100);
    /// Prompt line
    pub const PROMPT: &str = "Touch screen to start";
    /// Prompt position
    pub const PROMPT_POS: (u16, u16) = (40, 160);
}
