//! Centralized theme configuration for all UI components.
//!
//! Render files use `theme::module::CONSTANT` rather than hardcoding colors.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::Color;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const RED: Color = Color::Rgb(224, 108, 117);
}

/// Animation pane styles
pub mod pane {
    use super::*;

    pub const BORDER_READY: Color = palette::CYAN;
    pub const BORDER_LOADING: Color = palette::YELLOW;
    pub const BORDER_ERROR: Color = palette::RED;
    pub const BORDER_IDLE: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::TEXT;
    pub const MESSAGE: Color = palette::TEXT_MUTED;
    pub const ERROR_MESSAGE: Color = palette::RED;
}

/// Status line at the bottom of the screen
pub mod status_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const POSITION: Color = palette::CYAN;
}
