#![cfg(feature = "render")]

use signwright::render::{SignRenderer, SvgRenderOptions, render_json_sync};
use signwright::{Error, SignDocument};

#[test]
fn rendered_svg_is_well_formed_xml() {
    let renderer = SignRenderer::new().with_svg_options(SvgRenderOptions {
        include_grid: true,
        include_guides: true,
        ..SvgRenderOptions::default()
    });
    for doc in [SignDocument::example_g1_1(), SignDocument::example_g1_2()] {
        let svg = renderer.render_svg_sync(&doc).unwrap();
        let parsed = roxmltree::Document::parse(&svg).expect("well-formed SVG");
        let root = parsed.root_element();
        assert_eq!(root.tag_name().name(), "svg");

        let model = renderer.layout_sync(&doc).unwrap();
        let width: f64 = root.attribute("width").unwrap().parse().unwrap();
        assert!((width - model.board.w).abs() < 1e-9);

        let groups = root
            .descendants()
            .filter(|n| n.attribute("id") == Some("arrow"))
            .count();
        assert_eq!(groups, doc.panels.len());
    }
}

#[test]
fn json_documents_render_and_errors_propagate() {
    let json = SignDocument::example_g1_1().to_json_string_pretty().unwrap();
    let svg = render_json_sync(&json, &Default::default(), &Default::default()).unwrap();
    assert!(svg.contains(">Hawker</text>"));

    let err = render_json_sync("{\"panels\": []}", &Default::default(), &Default::default())
        .unwrap_err();
    let signwright::render::HeadlessError::Layout(inner) = err;
    assert!(matches!(inner, Error::UnsupportedPanelCount { count: 0 }));

    assert!(render_json_sync("not json", &Default::default(), &Default::default()).is_err());
}

#[test]
fn data_url_uses_svg_mime_type() {
    let url = SignRenderer::new()
        .data_url_sync(&SignDocument::example_g1_2())
        .unwrap();
    assert!(url.starts_with("data:image/svg+xml;base64,"));
}
