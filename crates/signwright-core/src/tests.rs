use crate::geom::{align, board_size, center, max_width, stack_horizontal, stack_vertical, sum_heights};
use crate::*;
use serde_json::json;

#[test]
fn stack_vertical_accumulates_heights_and_gaps() {
    let children = [HBox::new(2.0, 1.0), HBox::new(3.0, 1.5), HBox::new(1.0, 0.5)];
    let stack = stack_vertical(&children, 0.25);

    assert_eq!(stack.h, 1.0 + 1.5 + 0.5 + 2.0 * 0.25);
    assert_eq!(stack.w, 3.0);
    let ys: Vec<f64> = stack.children.iter().map(|c| c.y).collect();
    assert_eq!(ys, vec![0.0, 1.25, 3.0]);
    assert!(stack.children.iter().all(|c| c.x == 0.0));
}

#[test]
fn stack_vertical_of_nothing_is_empty() {
    let stack = stack_vertical(&[], 0.5);
    assert_eq!(stack.h, 0.0);
    assert_eq!(stack.w, 0.0);
    assert!(stack.children.is_empty());
    assert_eq!(sum_heights(&[], 0.5), 0.0);
}

#[test]
fn stack_vertical_height_matches_sum_heights() {
    let children = [HBox::new(1.0, 0.7), HBox::new(1.0, 1.3)];
    let diff = stack_vertical(&children, 0.15).h - sum_heights(&children, 0.15);
    assert!(diff.abs() < 1e-12);
}

#[test]
fn stack_horizontal_places_children_left_to_right() {
    let children = [HBox::new(2.0, 1.0), HBox::new(1.0, 2.0)];
    let stack = stack_horizontal(&children, 0.5);
    assert_eq!(stack.w, 3.5);
    assert_eq!(stack.h, 2.0);
    assert_eq!(stack.children[1].x, 2.5);
    assert_eq!(stack.children[1].y, 0.0);
}

#[test]
fn stacking_does_not_touch_inputs() {
    let children = [HBox::new(2.0, 1.0).with_position(9.0, 9.0)];
    let stack = stack_vertical(&children, 0.0);
    assert_eq!(children[0].x, 9.0);
    assert_eq!(stack.children[0].x, 0.0);
}

#[test]
fn align_resolves_each_anchor() {
    let child = HBox::new(2.0, 1.0);
    let parent = Size { w: 10.0, h: 4.0 };

    let a = align(&child, parent, Alignment::default());
    assert_eq!((a.x, a.y), (0.0, 0.0));

    let a = align(
        &child,
        parent,
        Alignment {
            h: HAlign::Right,
            v: VAlign::Bottom,
        },
    );
    assert_eq!((a.x, a.y), (8.0, 3.0));

    let a = center(&child, parent);
    assert_eq!((a.x, a.y), (4.0, 1.5));
}

#[test]
fn baseline_alignment_matches_bottom() {
    let child = HBox::new(2.0, 1.0);
    let parent = Size { w: 10.0, h: 4.0 };
    let baseline = align(
        &child,
        parent,
        Alignment {
            h: HAlign::Left,
            v: VAlign::Baseline,
        },
    );
    let bottom = align(
        &child,
        parent,
        Alignment {
            h: HAlign::Left,
            v: VAlign::Bottom,
        },
    );
    assert_eq!(baseline, bottom);
}

#[test]
fn board_size_inflates_both_axes() {
    assert_eq!(board_size(3.0, 2.0, 0.5), Size { w: 4.0, h: 3.0 });
    assert_eq!(max_width(&[HBox::new(1.0, 1.0), HBox::new(4.0, 1.0)]), 4.0);
}

#[test]
fn catalog_rejects_unknown_entries() {
    let catalog = Catalog::builtin();
    assert!(catalog.font("E").is_ok());
    let err = catalog.font("Z").unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "Font series \"Z\" not found");
    assert!(catalog.icon("arrow-up-std").unwrap_err().is_configuration());
}

#[test]
fn resolve_font_requires_known_series_even_with_override() {
    let catalog = Catalog::builtin();
    let custom = FontMetrics {
        avg_char_width_ratio: 0.5,
        ascent_ratio: 0.7,
        descent_ratio: 0.3,
    };
    assert_eq!(catalog.resolve_font("E", Some(&custom)).unwrap(), custom);
    assert!(catalog.resolve_font("X", Some(&custom)).is_err());
}

#[test]
fn route_marker_ignores_blank_values() {
    let panel = PanelInput::new(["A"], Direction::Left).with_road_number("  ");
    assert_eq!(panel.route_marker(), RouteMarker::None);

    let panel = PanelInput::new(["A"], Direction::Left).with_shield("M1");
    assert_eq!(panel.route_marker(), RouteMarker::Shield("M1"));
}

#[test]
fn valid_destinations_skip_blank_lines() {
    let panel = PanelInput::new(["", "Melbourne", "  ", "City"], Direction::Forward);
    let valid: Vec<&str> = panel.valid_destinations().collect();
    assert_eq!(valid, vec!["Melbourne", "City"]);
}

#[test]
fn sign_document_loads_camel_case_json_with_defaults() {
    let doc: SignDocument = serde_json::from_value(json!({
        "name": "test",
        "signType": "G1-1",
        "panels": [
            {
                "roadName": "SALTASH HWY",
                "roadNumberType": "shield",
                "roadNumber": "",
                "shieldLabel": "M1",
                "destinations": ["Plumpton"],
                "direction": "left",
                "alignOverride": { "centerGroup": null, "roadNumber": "left", "arrow": null }
            },
            { "roadNumberType": "number", "roadNumber": "A85", "destinations": ["Hawker"], "direction": "right" }
        ],
        "template": { "letter_height_h": 8, "roadName_pad_h": 0.5 },
        "engine": { "pxPerH": 30, "snapMode": "half-pixel" }
    }))
    .unwrap();

    assert_eq!(doc.sign_type, SignType::G1_1);
    assert_eq!(doc.panels[0].route_marker(), RouteMarker::Shield("M1"));
    assert_eq!(
        doc.panels[0].align_override.unwrap().road_number,
        Some(Side::Left)
    );
    assert_eq!(doc.panels[1].route_marker(), RouteMarker::Number("A85"));
    assert_eq!(doc.template.letter_height_h, 8.0);
    assert_eq!(doc.template.road_name_pad_h, 0.5);
    assert_eq!(doc.template.line_spacing_h, 0.15);
    assert_eq!(doc.engine.px_per_h, 30.0);
    assert_eq!(doc.engine.snap_mode, SnapMode::HalfPixel);
}

#[test]
fn presets_override_spacing_only() {
    let template = TemplateParams::default().with_preset(TemplatePreset::Compact);
    assert_eq!(template.letter_height_h, 7.0);
    assert_eq!(template.board_pad_h, 0.75);
    assert_eq!(template.panel_spacing_h, 0.06);
    assert_eq!("Spacious".parse::<TemplatePreset>(), Ok(TemplatePreset::Spacious));
}

#[test]
fn sign_type_follows_panel_count() {
    assert_eq!(SignType::for_panel_count(2).unwrap(), SignType::G1_1);
    assert_eq!(SignType::for_panel_count(3).unwrap(), SignType::G1_2);
    assert!(SignType::for_panel_count(4).unwrap_err().is_cardinality());
}

#[test]
fn placed_element_uses_document_field_names() {
    let el: PlacedElement = serde_json::from_value(json!({
        "id": "a",
        "type": "roadName",
        "config": { "text": "MAIN ST", "letter_h": 1.2 },
        "box": { "x": 1.0, "y": 2.0, "w": 3.0, "h": 1.4 }
    }))
    .unwrap();
    assert_eq!(el.kind, ElementType::RoadName);
    assert_eq!(el.config.letter_h, Some(1.2));
    assert_eq!(el.bounds.right(), 4.0);
}
