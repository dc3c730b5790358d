//! Editor shell state (sidebar selection, canvas placeholder zoom).
//!
//! DESIGN
//! ======
//! Purely cosmetic: no image is ever loaded. "Choose Image" flips
//! `has_image` so the canvas switches to its sample frame and zoom controls.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

pub const MIN_ZOOM: u32 = 25;
pub const MAX_ZOOM: u32 = 400;
pub const ZOOM_STEP: u32 = 25;
pub const DEFAULT_ZOOM: u32 = 100;

/// Placeholder frame size at 100% zoom; zooming in never grows past it.
pub const FRAME_WIDTH: u32 = 600;
pub const FRAME_HEIGHT: u32 = 400;

/// Nominal dimensions shown in the canvas header.
pub const SAMPLE_DIMENSIONS: &str = "1920 × 1080px";

/// A sidebar section and its tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolSection {
    pub title: &'static str,
    pub tools: &'static [&'static str],
}

pub const TOOL_SECTIONS: &[ToolSection] = &[ToolSection {
    title: "File Operations",
    tools: &["Upload Image", "Open File", "Save Project", "History"],
}];

/// Right-hand mini toolbar entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Home,
    About,
    QuickActions,
    Profile,
    Settings,
    Help,
}

impl ToolbarAction {
    pub const ALL: [Self; 6] =
        [Self::Home, Self::About, Self::QuickActions, Self::Profile, Self::Settings, Self::Help];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::QuickActions => "Quick Actions",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Help => "Help",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::QuickActions => "quick",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Help => "help",
        }
    }

    /// Route to open, if the action navigates.
    #[must_use]
    pub fn route(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::About => Some("/about"),
            Self::Profile => Some("/profile"),
            Self::Settings => Some("/settings"),
            Self::QuickActions | Self::Help => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub active_section: Option<&'static str>,
    pub active_tool: Option<&'static str>,
    pub has_image: bool,
    pub zoom: u32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            active_section: TOOL_SECTIONS.first().map(|s| s.title),
            active_tool: None,
            has_image: false,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl EditorState {
    /// Expand `title`, or collapse it when it is already open.
    pub fn toggle_section(&mut self, title: &'static str) {
        self.active_section = if self.active_section == Some(title) { None } else { Some(title) };
    }

    pub fn select_tool(&mut self, tool: &'static str) {
        self.active_tool = Some(tool);
    }

    pub fn load_placeholder_image(&mut self) {
        self.has_image = true;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Placeholder frame size in pixels for the current zoom.
    #[must_use]
    pub fn frame_size(&self) -> (u32, u32) {
        (
            FRAME_WIDTH.min(FRAME_WIDTH * self.zoom / 100),
            FRAME_HEIGHT.min(FRAME_HEIGHT * self.zoom / 100),
        )
    }

    #[must_use]
    pub fn header_caption(&self) -> String {
        format!("{SAMPLE_DIMENSIONS} • {}%", self.zoom)
    }
}
