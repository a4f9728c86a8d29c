use signwright_core::{ElementConfig, ElementType, HBox, PlacedElement, SignDocument, Size};
use signwright_render::manual::{
    AlignmentAnchor, Axis, BoardEdge, SpacingRules, align_to_board, board_size_for,
    compute_manual_layout, detect_alignment_opportunities, min_spacing,
    placed_elements_from_model, preview_size, validate_spacing,
};
use signwright_render::model::RenderItem;
use signwright_render::{LayoutOptions, layout_document};

fn el(id: &str, kind: ElementType, x: f64, y: f64, w: f64, h: f64) -> PlacedElement {
    PlacedElement::new(id, kind, HBox { x, y, w, h })
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn close_pair_violates_default_spacing() {
    let a = el("a", ElementType::Text, 0.0, 0.0, 2.0, 1.0);
    let b = el("b", ElementType::Arrow, 2.1, 3.0, 1.0, 1.0);
    let v = validate_spacing(&[a, b], &SpacingRules::new());

    assert_eq!(v.len(), 1);
    assert_eq!(v[0].direction, Axis::Horizontal);
    assert!(approx(v[0].current_spacing, 0.1));
    assert_eq!(v[0].min_required, 0.15);
    assert_eq!((v[0].elem1_id.as_str(), v[0].elem2_id.as_str()), ("a", "b"));
}

#[test]
fn overlapping_boxes_are_not_spacing_violations() {
    let a = el("a", ElementType::Text, 0.0, 0.0, 2.0, 2.0);
    let b = el("b", ElementType::Text, 1.0, 1.0, 2.0, 2.0);
    assert!(validate_spacing(&[a, b], &SpacingRules::new()).is_empty());
}

#[test]
fn spacing_check_is_symmetric() {
    let a = el("a", ElementType::RoadName, 0.0, 0.0, 3.0, 1.0);
    let b = el("b", ElementType::Shield, 0.5, 1.2, 1.0, 1.0);
    let mut rules = SpacingRules::new();
    rules.insert("roadName-shield-v".to_string(), 0.5);

    let ab = validate_spacing(&[a.clone(), b.clone()], &rules);
    let ba = validate_spacing(&[b, a], &rules);
    assert_eq!(ab.len(), 1);
    assert_eq!(ba.len(), 1);
    assert_eq!(ab[0].min_required, 0.5);
    assert_eq!(ba[0].min_required, 0.5);
    assert_eq!(ab[0].direction, ba[0].direction);
    assert!(approx(ab[0].current_spacing, ba[0].current_spacing));
    assert_eq!(ab[0].elem1_id, ba[0].elem2_id);
}

#[test]
fn conflicting_rules_in_both_orders_use_the_larger_minimum() {
    let text = el("t", ElementType::Text, 0.0, 0.0, 2.0, 1.0);
    let arrow = el("a", ElementType::Arrow, 2.3, 0.0, 1.0, 1.0);
    let mut rules = SpacingRules::new();
    rules.insert("text-arrow-h".to_string(), 0.5);
    rules.insert("arrow-text-h".to_string(), 0.1);

    assert_eq!(
        min_spacing(&rules, ElementType::Text, ElementType::Arrow, Axis::Horizontal),
        0.5
    );
    assert_eq!(
        min_spacing(&rules, ElementType::Arrow, ElementType::Text, Axis::Horizontal),
        0.5
    );

    let ta = validate_spacing(&[text.clone(), arrow.clone()], &rules);
    let at = validate_spacing(&[arrow, text], &rules);
    assert_eq!(ta.len(), 1);
    assert_eq!(at.len(), 1);
    assert_eq!(ta[0].min_required, 0.5);
    assert_eq!(at[0].min_required, 0.5);
    assert!(approx(ta[0].current_spacing, 0.3));
    assert!(approx(at[0].current_spacing, 0.3));
}

#[test]
fn repeated_type_pairs_share_their_minimum() {
    let mut rules = SpacingRules::new();
    rules.insert("shield-text-h".to_string(), 0.4);
    let elements = [
        el("t1", ElementType::Text, 0.0, 0.0, 1.0, 1.0),
        el("s1", ElementType::Shield, 1.2, 0.0, 1.0, 1.0),
        el("t2", ElementType::Text, 2.5, 0.0, 1.0, 1.0),
    ];
    let v = validate_spacing(&elements, &rules);

    assert_eq!(v.len(), 2);
    assert!(v.iter().all(|v| v.min_required == 0.4));
    assert_eq!((v[0].elem1_id.as_str(), v[0].elem2_id.as_str()), ("t1", "s1"));
    assert_eq!((v[1].elem1_id.as_str(), v[1].elem2_id.as_str()), ("s1", "t2"));
}

#[test]
fn malformed_elements_are_skipped() {
    let good = el("a", ElementType::Text, 0.0, 0.0, 2.0, 1.0);
    let bad = el("b", ElementType::Text, 2.05, 0.0, f64::NAN, 1.0);
    let flat = el("c", ElementType::Text, 2.05, 0.0, 1.0, 0.0);
    let elements = [good, bad, flat];

    assert!(validate_spacing(&elements, &SpacingRules::new()).is_empty());
    assert!(detect_alignment_opportunities(&elements, 0.1).is_empty());
    assert_eq!(board_size_for(&elements), Size { w: 10.0, h: 5.0 });
}

#[test]
fn alignment_lines_for_left_right_and_center() {
    let a = el("a", ElementType::Text, 1.0, 0.0, 4.0, 1.0);
    let b = el("b", ElementType::Text, 1.05, 3.0, 4.0, 1.0);
    let lines = detect_alignment_opportunities(&[a, b], 0.1);

    let anchors: Vec<AlignmentAnchor> = lines.iter().map(|l| l.alignment_point).collect();
    assert_eq!(
        anchors,
        vec![
            AlignmentAnchor::Left,
            AlignmentAnchor::Right,
            AlignmentAnchor::Center
        ]
    );
    assert!(lines.iter().all(|l| l.orientation == Axis::Vertical));
    assert_eq!(lines[0].position, 1.0);
    assert_eq!(lines[0].element_ids, vec!["a".to_string(), "b".to_string()]);

    let value = serde_json::to_value(&lines[2]).unwrap();
    assert_eq!(value["type"], "vertical");
    assert_eq!(value["alignmentPoint"], "center");
    assert_eq!(value["elementIds"][1], "b");
}

#[test]
fn centers_only_alignment() {
    let a = el("a", ElementType::Text, 0.0, 0.0, 4.0, 1.0);
    let b = el("b", ElementType::Text, 1.0, 3.0, 2.0, 1.0);
    let lines = detect_alignment_opportunities(&[a, b], 0.1);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].alignment_point, AlignmentAnchor::Center);
    assert_eq!(lines[0].position, 2.0);
}

#[test]
fn manual_board_is_padded_and_floored() {
    assert_eq!(board_size_for(&[]), Size { w: 10.0, h: 5.0 });

    let big = el("a", ElementType::RoadName, 8.0, 4.0, 4.0, 2.0);
    let layout = compute_manual_layout(vec![big.clone()]);
    assert!(approx(layout.board_size.w, 12.3));
    assert!(approx(layout.board_size.h, 6.3));
    assert_eq!(layout.elements, vec![big]);
}

#[test]
fn align_to_board_moves_one_axis() {
    let b = HBox {
        x: 1.0,
        y: 1.0,
        w: 2.0,
        h: 1.0,
    };
    let board = Size { w: 10.0, h: 5.0 };
    assert_eq!(align_to_board(&b, board, BoardEdge::Right).x, 8.0);
    assert_eq!(align_to_board(&b, board, BoardEdge::Right).y, 1.0);
    assert_eq!(align_to_board(&b, board, BoardEdge::Center).x, 4.0);
    assert_eq!(align_to_board(&b, board, BoardEdge::Bottom).y, 4.0);
    assert_eq!(align_to_board(&b, board, BoardEdge::Middle).y, 2.0);
    assert_eq!(align_to_board(&b, board, BoardEdge::Top).x, 1.0);
}

#[test]
fn layout_converts_to_placed_elements() {
    let model = layout_document(&SignDocument::example_g1_1(), &LayoutOptions::default()).unwrap();
    let placed = placed_elements_from_model(&model);

    assert_eq!(placed.len(), model.items.len());
    assert_eq!(placed[0].id, "el-1");
    assert_eq!(placed.last().unwrap().id, format!("el-{}", placed.len()));

    let board_w = model.board.w / 100.0;
    let board_h = model.board.h / 100.0;
    for p in &placed {
        assert!(p.bounds.x >= 0.0 && p.bounds.x <= board_w);
        assert!(p.bounds.y >= 0.0 && p.bounds.y <= board_h);
        assert!(p.bounds.w >= 0.1 && p.bounds.h >= 0.1);
    }

    // Baselines become top edges.
    let (idx, text) = model
        .items
        .iter()
        .enumerate()
        .find_map(|(i, item)| match item {
            RenderItem::Text(t) => Some((i, t)),
            _ => None,
        })
        .unwrap();
    let p = &placed[idx];
    assert_eq!(p.kind, ElementType::Text);
    assert!(approx(p.bounds.y, text.y / 100.0 - text.ascent_h));
    assert_eq!(p.config.text.as_deref(), Some(text.text.as_str()));
    assert!(approx(p.config.letter_h.unwrap(), 1.6));
}

#[test]
fn preview_sizes_per_type() {
    let none = ElementConfig::default();
    assert_eq!(preview_size(ElementType::Arrow, &none), Size { w: 1.2, h: 0.8 });

    let text = preview_size(ElementType::Text, &none);
    assert!(approx(text.w, 4.0 * 1.6 * 0.6));
    assert_eq!(text.h, 1.6);

    let road_name = preview_size(ElementType::RoadName, &none);
    assert!(approx(road_name.w, 9.0 * 1.2 * 0.6 + 0.3));
    assert!(approx(road_name.h, 1.5));

    let number = preview_size(ElementType::RoadNumber, &none);
    assert!(approx(number.w, 2.0 * 0.8 * 0.7 + 0.2));
    assert!(approx(number.h, 1.0));

    let shield = preview_size(
        ElementType::Shield,
        &ElementConfig {
            label: Some("M31".to_string()),
            letter_h: Some(2.0),
            ..Default::default()
        },
    );
    assert!(approx(shield.w, 3.0 * 2.0 * 0.6 + 0.3));
    assert!(approx(shield.h, 2.2));
}
