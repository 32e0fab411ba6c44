//! End-to-end preview flow: form edits -> snapshot -> generator -> listener.

use lc_chart::{ChartMetadata, FormSnapshot, PreviewSync};
use lc_curve::CurveSource;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn multi_field_edit_batches_into_one_push() {
    let mut sync = PreviewSync::new();
    let pushes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pushes);
    sync.subscribe(move |points, meta| {
        sink.borrow_mut()
            .push((points.len(), meta.title.clone(), meta.theme_id));
    });

    // The user retitles the chart, switches the theme, and pastes new data
    // in one interaction; the form reads all fields atomically and hands
    // over a single snapshot.
    let meta = ChartMetadata {
        title: "Learning Rust".to_string(),
        theme_id: 7,
        ..ChartMetadata::default()
    };
    let snapshot = FormSnapshot {
        source: CurveSource::RawPoints {
            data_points: "0,0\n2,10\n5,80".to_string(),
        },
        meta,
    };
    sync.observe(snapshot);

    let seen = pushes.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], (3, "Learning Rust".to_string(), 7));
}

#[test]
fn per_frame_observation_only_pushes_on_change() {
    let mut sync = PreviewSync::new();
    let push_count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&push_count);
    sync.subscribe(move |_, _| *counter.borrow_mut() += 1);

    let make = |expr: &str| FormSnapshot {
        source: CurveSource::Function {
            expression: expr.to_string(),
            x_min: 0.0,
            x_max: 100.0,
            step: 1.0,
        },
        meta: ChartMetadata::default(),
    };

    // An immediate-mode UI observes every frame; only keystrokes push.
    for _ in 0..10 {
        sync.observe(make("x"));
    }
    for _ in 0..10 {
        sync.observe(make("x^2"));
    }
    assert_eq!(*push_count.borrow(), 2);
}

#[test]
fn degraded_input_still_previews() {
    let mut sync = PreviewSync::new();

    // A half-typed formula previews as a flat line rather than an error
    sync.observe(FormSnapshot {
        source: CurveSource::Function {
            expression: "x *".to_string(),
            x_min: 0.0,
            x_max: 100.0,
            step: 1.0,
        },
        meta: ChartMetadata::default(),
    });
    assert_eq!(sync.points().len(), 50);
    assert!(sync.points().iter().all(|p| p.p == 0.0));

    // Invalid metadata does not gate generation either
    let meta = ChartMetadata {
        title: "x".to_string(),
        ..ChartMetadata::default()
    };
    assert!(meta.validate().is_err());
    sync.observe(FormSnapshot {
        source: CurveSource::RawPoints {
            data_points: "1,1".to_string(),
        },
        meta,
    });
    assert_eq!(sync.points().len(), 1);
}
