use crate::*;
use ramani_core::CircuitId;

const FIXTURE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <defs><linearGradient id="water"/></defs>
  <path id="TZ01" d="M10 10h40v40z"><title>Arusha</title></path>
  <path id="TZ03" d="M60 10h40v40z"><title>Mwanza</title></path>
</svg>"#;

fn loaded() -> MapOverlay {
    let mut overlay = MapOverlay::new();
    overlay.attach_document(FIXTURE).unwrap();
    overlay
}

#[test]
fn root_is_augmented_for_responsive_embedding() {
    let svg = loaded().render_svg().unwrap();
    assert!(svg.contains(r#"width="100%""#));
    assert!(svg.contains(r#"height="500""#));
    assert!(svg.contains("shape-rendering: geometricPrecision;"));
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    // Non-shape content passes through untouched.
    assert!(svg.contains(r#"<linearGradient id="water"/>"#));
}

#[test]
fn shapes_carry_palette_fill_and_metadata() {
    let svg = loaded().render_svg().unwrap();
    assert!(svg.contains("fill: #0ea5a4;"));
    assert!(svg.contains("fill: #72bbe0ff;"));
    assert!(svg.contains(r#"data-region-name="Arusha""#));
    assert!(svg.contains(r#"data-circuit="Northern Circuit""#));
    assert!(svg.contains(r#"data-selected="false""#));
    assert!(svg.contains("fill-opacity: 0.12;"));
}

#[test]
fn selection_and_hover_change_the_emitted_styles() {
    let mut overlay = loaded();
    let arusha = overlay.find_binding("TZ01").unwrap();
    overlay.click_shape(arusha);
    overlay.pointer_enter(arusha, 0.0, 0.0);

    let svg = overlay.render_svg().unwrap();
    assert!(svg.contains(r#"data-selected="true""#));
    assert!(svg.contains("stroke-width: 2;"));
    assert!(svg.contains("transform: scale(1.02);"));
    // The unselected Lake Zone shape keeps its baseline treatment.
    assert!(svg.contains("fill-opacity: 0.12;"));
}

#[test]
fn hidden_circuits_are_desaturated_but_stay_in_the_document() {
    let mut overlay = loaded();
    overlay.click_legend(CircuitId::LakeZone);

    let svg = overlay.render_svg().unwrap();
    assert!(svg.contains("filter: grayscale(80%);"));
    assert!(svg.contains("opacity: 0.5;"));
    // The shape itself is still emitted (and still interactive: cursor stays pointer).
    assert!(svg.contains(r#"data-circuit="Lake Zone""#));

    // Hiding never removes interactivity bookkeeping: clicking the de-emphasized shape
    // still registers.
    let mwanza = overlay.find_binding("TZ03").unwrap();
    overlay.click_shape(mwanza);
    assert_eq!(overlay.selected_circuit(), None); // toggled off: legend had selected it
}

#[test]
fn render_reflects_reset() {
    let mut overlay = loaded();
    overlay.click_legend(CircuitId::LakeZone);
    overlay.reset();

    let svg = overlay.render_svg().unwrap();
    assert!(!svg.contains("grayscale"));
    assert!(!svg.contains(r#"data-selected="true""#));
}
