//! Rendering options and configuration.

/// Options shared by every renderer.
///
/// Passed by value or reference into each render call; there is no global
/// toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Remove line breaks from text instead of rendering them
    /// (`<br>` in HTML/Markdown, literal breaks in CSV/JSON)
    pub ignore_line_break: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable line-break removal.
    pub fn with_ignore_line_break(mut self, ignore: bool) -> Self {
        self.ignore_line_break = ignore;
        self
    }
}
