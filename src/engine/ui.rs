// Text surface UI element

/// Stand-in for a host-engine text widget.
///
/// Holds the string currently on screen; gameplay code may read it once to
/// capture pre-authored text and then overwrite it incrementally.
#[derive(Debug, Default)]
pub struct TextSurface {
    text: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a surface already showing `text`
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// The text currently displayed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Take the displayed text, leaving the surface empty
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Clear the displayed text
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
