use futures::executor::block_on;
use ramani::CircuitId;
use ramani::overlay::{HeadlessMap, StyleOptions, annotate_svg};

const FIXTURE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <path id="TZ01" d="M10 10h40v40z"><title>Arusha</title></path>
  <path id="Dodoma" d="M60 10h40v40z"><title>Dodoma</title></path>
</svg>"#;

#[test]
fn annotated_output_is_well_formed_svg() {
    let svg = block_on(annotate_svg(FIXTURE, &StyleOptions::default()))
        .unwrap()
        .unwrap();

    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("width"), Some("100%"));
    assert_eq!(root.attribute("height"), Some("500"));

    let paths: Vec<_> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "path")
        .collect();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].attribute("data-circuit"), Some("Northern Circuit"));
    assert_eq!(paths[1].attribute("data-circuit"), Some("Central Circuit"));
    assert!(paths[0].attribute("style").unwrap().contains("fill: #0ea5a4;"));
    // Original geometry survives augmentation.
    assert_eq!(paths[0].attribute("d"), Some("M10 10h40v40z"));
}

#[test]
fn headless_map_bundles_configuration() {
    let map = HeadlessMap::new();
    assert_eq!(map.circuits().len(), CircuitId::ALL.len());
    assert_eq!(map.legend().len(), CircuitId::ALL.len());

    let mut component = map.component();
    component.attach_document(FIXTURE).unwrap();
    assert_eq!(component.bindings().len(), 2);

    let svg = map.annotate_sync(FIXTURE).unwrap().unwrap();
    assert!(svg.contains("data-region-name=\"Dodoma\""));
}

#[test]
fn annotation_surfaces_malformed_documents_as_errors() {
    let err = annotate_svg_result_err("<svg><path></svg>");
    assert!(err.to_string().contains("malformed vector document"));
}

fn annotate_svg_result_err(text: &str) -> ramani::overlay::Error {
    block_on(annotate_svg(text, &StyleOptions::default())).unwrap_err()
}
