//! End-to-end exercise of the editor through its host-facing surface:
//! preset load, resize, insert on line, drag with clamping, release,
//! recolour, removal, and the sort invariant throughout.

use glam::Vec2;
use opaline_core::{ClutEditor, ClutEvent, Colour, DomainPoint, PointRef, ViewState};

fn preset() -> (Vec<Vec<DomainPoint>>, Vec<Vec<Colour>>) {
    // Two curves, the first deliberately out of order: preset input
    // order is not trusted.
    let bone = vec![
        DomainPoint {
            value: 400.0,
            alpha: 0.8,
        },
        DomainPoint {
            value: 100.0,
            alpha: 0.0,
        },
    ];
    let soft_tissue = vec![
        DomainPoint {
            value: -50.0,
            alpha: 0.0,
        },
        DomainPoint {
            value: 40.0,
            alpha: 0.3,
        },
        DomainPoint {
            value: 90.0,
            alpha: 0.0,
        },
    ];
    let white = Colour {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };
    let pink = Colour {
        red: 0.9,
        green: 0.6,
        blue: 0.6,
    };
    (vec![bone, soft_tissue], vec![vec![white; 2], vec![pink; 3]])
}

fn assert_strictly_ascending(editor: &ClutEditor) {
    for (i, curve) in editor.store().curves().iter().enumerate() {
        let values: Vec<f32> = curve.nodes().iter().map(|n| n.point.value).collect();
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "curve {i} not strictly ascending: {values:?}"
        );
        let xs: Vec<f32> = curve.nodes().iter().map(|n| n.pixel.x).collect();
        assert!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "curve {i} pixels not strictly ascending: {xs:?}"
        );
    }
}

#[test]
fn full_editing_session_keeps_invariants() {
    let (points, colours) = preset();
    let mut editor = ClutEditor::new(ViewState::new(-1024.0, 2000.0, 605.0, 410.0, 5.0));
    editor.set_histogram(vec![10.0, 1000.0, 50000.0, 800.0, 20.0]);
    editor.load_preset(points, colours);
    assert_eq!(editor.store().len(), 2);
    assert_strictly_ascending(&editor);

    // Resize invalidates and rebuilds the whole pixel cache.
    editor.resize(1005.0, 610.0);
    assert_strictly_ascending(&editor);

    // Insert on the first curve's segment, then drag the new point
    // around; clamps must hold the order at every step. The click sits
    // at the segment's quarter point: both truncated slope ratios are
    // ~1/3, safely away from the 1.0 boundary where f32 rounding flips
    // the exact midpoint between accept and reject.
    let a = editor.store().curves()[0].nodes()[0].pixel;
    let b = editor.store().curves()[0].nodes()[1].pixel;
    let click = a + (b - a) * 0.25;
    assert!(editor.pointer_down(click), "on-segment click must insert");
    assert_eq!(editor.store().curves()[0].len(), 3);
    assert_strictly_ascending(&editor);

    assert!(editor.pointer_down(click), "second click grabs the new point");
    for x in [-500.0, a.x - 40.0, b.x + 40.0, 2000.0] {
        editor.pointer_move(Vec2::new(x, click.y - 30.0));
        assert_strictly_ascending(&editor);
    }
    editor.pointer_up();

    let events = editor.drain_events();
    assert_eq!(events.first(), Some(&ClutEvent::PointChanged)); // insert
    assert_eq!(events.last(), Some(&ClutEvent::PointChanged)); // release
    assert_eq!(
        events
            .iter()
            .filter(|e| **e == ClutEvent::PointChanging)
            .count(),
        4
    );

    // Recolour the dragged point via the host picker.
    let gold = Colour {
        red: 1.0,
        green: 0.8,
        blue: 0.2,
    };
    let selected = editor.selected().expect("drag leaves a selection");
    let node = editor.store().node(selected).unwrap();
    assert!(editor.pointer_double_click(node.pixel, || Some(gold)));
    assert_eq!(editor.store().node(selected).unwrap().colour, gold);

    // Remove points until the first curve disappears; the selection
    // reference must re-index, then clear.
    let first = editor.store().curves()[0].nodes()[0].pixel;
    assert!(editor.pointer_right_down(first));
    assert_eq!(editor.selected(), Some(PointRef::new(0, 0)));
    while editor.store().len() == 2 {
        let pixel = editor.store().curves()[0].nodes()[0].pixel;
        assert!(editor.pointer_right_down(pixel));
    }
    assert_eq!(editor.store().len(), 1, "first curve was destroyed");
    assert_eq!(editor.selected(), None);
    assert_strictly_ascending(&editor);

    let snapshot = editor.snapshot();
    assert_eq!(snapshot.curves.len(), 1);
    assert!(!snapshot.histogram.is_empty());
}

#[test]
fn snapshot_gradient_stops_span_zero_to_one() {
    let (points, colours) = preset();
    let mut editor = ClutEditor::new(ViewState::new(-1024.0, 2000.0, 605.0, 410.0, 5.0));
    editor.load_preset(points, colours);

    let snapshot = editor.snapshot();
    for polyline in &snapshot.curves {
        assert_eq!(polyline.pixels.len(), polyline.colours.len());
        assert_eq!(polyline.pixels.len(), polyline.stops.len());
        assert_eq!(polyline.stops.first(), Some(&0.0));
        assert_eq!(polyline.stops.last(), Some(&1.0));
        let first = polyline.pixels.first().unwrap().x;
        let last = polyline.pixels.last().unwrap().x;
        assert_eq!(polyline.handle_x, (first + last) / 2.0);
    }
}

#[test]
fn degenerate_resize_suppresses_rendering_until_restored() {
    let (points, colours) = preset();
    let mut editor = ClutEditor::new(ViewState::new(-1024.0, 2000.0, 605.0, 410.0, 5.0));
    editor.load_preset(points, colours);

    editor.resize(0.0, 0.0);
    assert!(editor.snapshot().curves.is_empty());
    // Interactions during the degenerate state must not panic.
    editor.pointer_move(Vec2::new(10.0, 10.0));

    editor.resize(605.0, 410.0);
    let snapshot = editor.snapshot();
    assert_eq!(snapshot.curves.len(), 2);
    assert_strictly_ascending(&editor);
}
