//! Headless host for the Opaline editor core.
//!
//! Stands in for a real windowing host: builds an editor, loads a small
//! radiodensity preset, replays a scripted pointer session, and logs
//! the change events and render snapshot a GUI would consume.

use glam::Vec2;
use opaline_core::{ClutEditor, Colour, DomainPoint, ViewState};

fn preset() -> (Vec<Vec<DomainPoint>>, Vec<Vec<Colour>>) {
    let bone = vec![
        DomainPoint {
            value: 200.0,
            alpha: 0.0,
        },
        DomainPoint {
            value: 450.0,
            alpha: 0.25,
        },
        DomainPoint {
            value: 1150.0,
            alpha: 0.9,
        },
    ];
    let soft_tissue = vec![
        DomainPoint {
            value: -120.0,
            alpha: 0.0,
        },
        DomainPoint {
            value: 40.0,
            alpha: 0.35,
        },
        DomainPoint {
            value: 300.0,
            alpha: 0.0,
        },
    ];
    let white = Colour {
        red: 1.0,
        green: 0.95,
        blue: 0.9,
    };
    let pink = Colour {
        red: 0.88,
        green: 0.60,
        blue: 0.58,
    };
    (
        vec![bone, soft_tissue],
        vec![vec![white; 3], vec![pink; 3]],
    )
}

/// Synthetic log-normal-ish voxel frequency array over the visible
/// range, one bin per Hounsfield unit.
fn frequencies(view: &ViewState) -> Vec<f32> {
    let bins = (view.domain_max - view.domain_min) as usize;
    (0..bins)
        .map(|i| {
            let t = i as f32 / bins as f32;
            let peak = (-((t - 0.35) * 8.0).powi(2)).exp();
            1.0 + 250_000.0 * peak
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let view = ViewState::new(-1024.0, 2000.0, 605.0, 410.0, 5.0);
    let mut editor = ClutEditor::new(view);
    editor.set_histogram(frequencies(&view));

    let (points, colours) = preset();
    match serde_json::to_string(&points) {
        Ok(json) => tracing::info!(%json, "loading preset"),
        Err(e) => tracing::warn!("preset not serializable: {e}"),
    }
    editor.load_preset(points, colours);

    // Click a quarter of the way along the first curve's first segment
    // to insert a point, then grab it and drag it upward. The quarter
    // point keeps both truncated slope ratios well inside the on-line
    // tolerance, which the exact midpoint does not guarantee.
    let nodes = editor.store().curves()[0].nodes();
    let click = nodes[0].pixel + (nodes[1].pixel - nodes[0].pixel) * 0.25;
    editor.pointer_down(click);
    editor.pointer_up();
    editor.pointer_down(click);
    for step in 1..=5 {
        editor.pointer_move(click + Vec2::new(4.0 * step as f32, -12.0 * step as f32));
    }
    editor.pointer_up();

    // Recolour it through the "picker" (a fixed answer here).
    let target = editor.snapshot().selected.map_or(click, |s| s.pixel);
    editor.pointer_double_click(target, || {
        Some(Colour {
            red: 0.2,
            green: 0.7,
            blue: 1.0,
        })
    });

    for event in editor.drain_events() {
        tracing::info!(?event, "change event");
    }

    let snapshot = editor.snapshot();
    for (i, curve) in snapshot.curves.iter().enumerate() {
        tracing::info!(
            curve = i,
            points = curve.pixels.len(),
            handle_x = curve.handle_x,
            "curve polyline"
        );
    }
    tracing::info!(
        histogram_points = snapshot.histogram.len(),
        selected = ?snapshot.selected,
        "snapshot ready"
    );
}
