use std::fmt::Write as _;

/// Presentation constants for the overlay. Defaults mirror the site's design values.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub base_fill_opacity: f64,
    pub hover_fill_opacity: f64,
    pub selected_fill_opacity: f64,
    pub base_stroke_width: f64,
    pub selected_stroke_width: f64,
    pub stroke_color: String,
    pub hover_scale: f64,
    pub hover_filter: String,
    /// De-emphasis applied to shapes of a hidden circuit. They stay interactive.
    pub hidden_filter: String,
    pub hidden_opacity: f64,
    pub transition_ms: u32,
    /// Height attribute set on the augmented root element (width is always `100%`).
    pub root_height: String,
    /// Tooltip offset from the pointer, in pixels.
    pub tooltip_offset: (f64, f64),
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            base_fill_opacity: 0.12,
            hover_fill_opacity: 0.22,
            selected_fill_opacity: 0.28,
            base_stroke_width: 0.8,
            selected_stroke_width: 2.0,
            stroke_color: "#ffffff".to_string(),
            hover_scale: 1.02,
            hover_filter: "brightness(1.02) saturate(1.05)".to_string(),
            hidden_filter: "grayscale(80%)".to_string(),
            hidden_opacity: 0.5,
            transition_ms: 180,
            root_height: "500".to_string(),
            tooltip_offset: (-200.0, -600.0),
        }
    }
}

/// Resolved visual state of one shape. Exactly one applies at a time; hover on a selected
/// shape layers the hover treatment over the selected border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Baseline,
    Hovered,
    Selected,
    SelectedHovered,
}

impl VisualState {
    pub fn of(is_selected: bool, is_hovered: bool) -> Self {
        match (is_selected, is_hovered) {
            (false, false) => VisualState::Baseline,
            (false, true) => VisualState::Hovered,
            (true, false) => VisualState::Selected,
            (true, true) => VisualState::SelectedHovered,
        }
    }

    fn hovered(self) -> bool {
        matches!(self, VisualState::Hovered | VisualState::SelectedHovered)
    }
}

/// Inline style for one shape in the given state.
pub(crate) fn shape_style(
    color: &str,
    state: VisualState,
    circuit_visible: bool,
    opts: &StyleOptions,
) -> String {
    let fill_opacity = match state {
        VisualState::Baseline => opts.base_fill_opacity,
        VisualState::Hovered | VisualState::SelectedHovered => opts.hover_fill_opacity,
        VisualState::Selected => opts.selected_fill_opacity,
    };
    let stroke_width = match state {
        VisualState::Selected | VisualState::SelectedHovered => opts.selected_stroke_width,
        VisualState::Baseline | VisualState::Hovered => opts.base_stroke_width,
    };

    let ms = opts.transition_ms;
    let mut style = String::with_capacity(256);
    let _ = write!(
        style,
        "transition: transform {ms}ms ease, opacity {ms}ms ease, filter {ms}ms ease; \
         transform-origin: center center; cursor: pointer; \
         fill: {color}; fill-opacity: {fill_opacity}; stroke: {stroke}; stroke-width: {stroke_width};",
        stroke = opts.stroke_color,
    );

    if state.hovered() {
        let _ = write!(style, " transform: scale({});", opts.hover_scale);
    }
    if !circuit_visible {
        let _ = write!(
            style,
            " opacity: {}; filter: {};",
            opts.hidden_opacity, opts.hidden_filter
        );
    } else if state.hovered() {
        let _ = write!(style, " filter: {};", opts.hover_filter);
    }

    style
}

/// Presentation style applied to the augmented root `<svg>` element.
pub(crate) fn root_style(opts: &StyleOptions) -> String {
    format!(
        "max-width: 100%; display: block; margin: 0 auto; stroke: {}; stroke-width: 0.6; \
         shape-rendering: geometricPrecision;",
        opts.stroke_color
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_subtle() {
        let style = shape_style("#0ea5a4", VisualState::Baseline, true, &StyleOptions::default());
        assert!(style.contains("fill: #0ea5a4;"));
        assert!(style.contains("fill-opacity: 0.12;"));
        assert!(style.contains("stroke-width: 0.8;"));
        assert!(!style.contains("transform: scale"));
        assert!(!style.contains("grayscale"));
    }

    #[test]
    fn hover_raises_opacity_and_scales() {
        let style = shape_style("#0ea5a4", VisualState::Hovered, true, &StyleOptions::default());
        assert!(style.contains("fill-opacity: 0.22;"));
        assert!(style.contains("transform: scale(1.02);"));
        assert!(style.contains("filter: brightness(1.02) saturate(1.05);"));
    }

    #[test]
    fn selection_thickens_the_border() {
        let style = shape_style("#0ea5a4", VisualState::Selected, true, &StyleOptions::default());
        assert!(style.contains("fill-opacity: 0.28;"));
        assert!(style.contains("stroke-width: 2;"));
    }

    #[test]
    fn hover_layers_over_the_selected_border() {
        let style = shape_style(
            "#0ea5a4",
            VisualState::SelectedHovered,
            true,
            &StyleOptions::default(),
        );
        assert!(style.contains("stroke-width: 2;"));
        assert!(style.contains("transform: scale(1.02);"));
    }

    #[test]
    fn hidden_circuits_are_desaturated_but_styled() {
        let style = shape_style("#0ea5a4", VisualState::Baseline, false, &StyleOptions::default());
        assert!(style.contains("filter: grayscale(80%);"));
        assert!(style.contains("opacity: 0.5;"));
        assert!(style.contains("cursor: pointer;"));
    }
}
