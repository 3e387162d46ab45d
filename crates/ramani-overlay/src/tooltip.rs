use serde::Serialize;

/// Floating tooltip model. Purely presentational: shown while a shape is hovered, follows the
/// pointer with a fixed offset, and leaks no state back into the overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tooltip {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    /// Region name line.
    pub title: String,
    /// Circuit label line.
    pub subtitle: String,
}

impl Tooltip {
    pub(crate) fn show(&mut self, title: String, subtitle: String, x: f64, y: f64, offset: (f64, f64)) {
        self.visible = true;
        self.title = title;
        self.subtitle = subtitle;
        self.move_to(x, y, offset);
    }

    pub(crate) fn move_to(&mut self, x: f64, y: f64, offset: (f64, f64)) {
        self.x = x + offset.0;
        self.y = y + offset.1;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.title.clear();
        self.subtitle.clear();
    }
}
