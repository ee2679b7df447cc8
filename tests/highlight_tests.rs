use std::cell::RefCell;
use std::rc::Rc;

use plotline::api::{ChartEngine, ChartEngineConfig, ChartEvent, ChartObserver};
use plotline::core::{CategoryAxis, Series, Viewport};
use plotline::render::{Color, NullRenderer};

fn inspection_engine(config: ChartEngineConfig) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_category_axis(CategoryAxis::from_labels(["q1", "q2", "q3", "q4"]));
    engine
        .add_series(Series::new("revenue").with_stroke(Color::rgb(0.7, 0.2, 0.2), 2.0))
        .expect("add revenue");
    engine
        .add_series(Series::new("costs").with_stroke(Color::rgb(0.2, 0.2, 0.7), 2.0))
        .expect("add costs");
    for (index, value) in [10, -5, 0, 20].iter().enumerate() {
        engine
            .set_point_value("revenue", index, *value)
            .expect("set revenue");
    }
    for (index, value) in [3, 4, 5, 6].iter().enumerate() {
        engine
            .set_point_value("costs", index, *value)
            .expect("set costs");
    }
    engine.build_render_frame().expect("frame build");
    engine
}

#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

struct RecordingObserver {
    log: Rc<RefCell<EventLog>>,
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: &ChartEvent) {
        let name = match event {
            ChartEvent::SeriesRegistered { .. } => "series_registered",
            ChartEvent::DataUpdated { .. } => "data_updated",
            ChartEvent::HighlightShown(_) => "highlight_shown",
            ChartEvent::HighlightDismissed => "highlight_dismissed",
            ChartEvent::Rendered => "rendered",
        };
        self.log.borrow_mut().events.push(name.to_owned());
    }
}

#[test]
fn release_selects_nearest_category_and_marks_every_series() {
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));

    // Point screen positions are 100, 200, 300, 400; 290 is nearest to 300.
    let payload = engine
        .pointer_release(290.0, 40.0)
        .expect("release")
        .expect("payload");

    assert_eq!(payload.index, 2);
    assert_eq!(payload.category, "q3");
    assert!((payload.anchor_x - 300.0).abs() <= 1e-9);
    assert!((payload.anchor_y - 40.0).abs() <= 1e-9);
    for title in ["revenue", "costs"] {
        let series = engine.series(title).expect("series");
        assert!(series.points()[2].highlighted);
        assert_eq!(
            series.points().iter().filter(|p| p.highlighted).count(),
            1
        );
    }
}

#[test]
fn payload_carries_raw_values_in_registration_order() {
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));
    let payload = engine
        .pointer_release(110.0, 40.0)
        .expect("release")
        .expect("payload");

    assert_eq!(payload.index, 0);
    assert_eq!(payload.entries.len(), 2);
    assert_eq!(payload.entries[0].series_title, "revenue");
    assert_eq!(payload.entries[0].value, 10);
    assert_eq!(payload.entries[1].series_title, "costs");
    assert_eq!(payload.entries[1].value, 3);
}

#[test]
fn equidistant_release_picks_the_lower_index() {
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));
    // Exactly between the points at 100 and 200.
    let payload = engine
        .pointer_release(150.0, 40.0)
        .expect("release")
        .expect("payload");
    assert_eq!(payload.index, 0);
}

#[test]
fn hit_testing_is_idempotent_for_a_fixed_layout() {
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));
    let first = engine
        .pointer_release(333.0, 40.0)
        .expect("release")
        .expect("payload");
    let second = engine
        .pointer_release(333.0, 40.0)
        .expect("release")
        .expect("payload");
    assert_eq!(first.index, second.index);
}

#[test]
fn expiry_clears_highlights_and_notifies_the_host() {
    let log = Rc::new(RefCell::new(EventLog::default()));
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));
    engine.register_observer(Box::new(RecordingObserver { log: Rc::clone(&log) }));

    engine.pointer_release(290.0, 40.0).expect("release");
    assert!(!engine.advance_time(1999.0).expect("step"));
    assert!(engine.advance_time(1.0).expect("step"));

    for title in ["revenue", "costs"] {
        let series = engine.series(title).expect("series");
        assert!(series.points().iter().all(|p| !p.highlighted));
    }
    assert_eq!(
        log.borrow().events,
        vec!["highlight_shown".to_owned(), "highlight_dismissed".to_owned()]
    );
    assert_eq!(engine.highlight_state().active_index(), None);
}

#[test]
fn a_new_release_replaces_the_pending_countdown() {
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));

    engine.pointer_release(110.0, 40.0).expect("first release");
    assert!(!engine.advance_time(1500.0).expect("step"));
    engine.pointer_release(390.0, 40.0).expect("second release");

    // The old countdown was cancelled, so 1500 more units do not expire it.
    assert!(!engine.advance_time(1500.0).expect("step"));
    assert_eq!(engine.highlight_state().active_index(), Some(3));
    // Only the replacement index stays marked.
    let series = engine.series("revenue").expect("series");
    assert!(series.points()[3].highlighted);
    assert!(!series.points()[0].highlighted);

    assert!(engine.advance_time(600.0).expect("step"));
}

#[test]
fn always_show_markers_suppresses_clearing_only() {
    let config =
        ChartEngineConfig::new(Viewport::new(400, 100)).with_always_show_markers(true);
    let mut engine = inspection_engine(config);

    let payload = engine
        .pointer_release(290.0, 40.0)
        .expect("release")
        .expect("payload");
    assert_eq!(payload.index, 2);

    assert!(engine.advance_time(2000.0).expect("step"));
    let series = engine.series("revenue").expect("series");
    assert!(series.points().iter().all(|p| p.highlighted));
}

#[test]
fn disabled_popup_makes_release_a_no_op() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100)).with_popup_enabled(false);
    let mut engine = inspection_engine(config);
    assert!(engine.pointer_release(290.0, 40.0).expect("release").is_none());
    assert_eq!(engine.highlight_state().active_index(), None);
}

#[test]
fn release_without_series_is_a_no_op() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    assert!(engine.pointer_release(290.0, 40.0).expect("release").is_none());
}

#[test]
fn non_finite_pointer_coordinates_are_rejected() {
    let mut engine = inspection_engine(ChartEngineConfig::new(Viewport::new(400, 100)));
    assert!(engine.pointer_release(f64::NAN, 40.0).is_err());
    assert!(engine.advance_time(f64::INFINITY).is_err());
    assert!(engine.advance_time(0.0).is_err());
}
