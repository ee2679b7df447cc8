use plotline::api::{ChartEngine, ChartEngineConfig};
use plotline::core::{CategoryAxis, Series, Viewport};
use plotline::render::NullRenderer;

fn engine_with_values(config: ChartEngineConfig, values: &[i64]) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_category_axis(CategoryAxis::with_count(values.len()));
    engine.add_series(Series::new("series")).expect("add series");
    for (index, value) in values.iter().enumerate() {
        engine
            .set_point_value("series", index, *value)
            .expect("set value");
    }
    engine
}

#[test]
fn non_negative_data_keeps_zero_floor() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100));
    let mut engine = engine_with_values(config, &[3, 7, 2, 5]);
    engine.build_render_frame().expect("frame build");

    let scale = engine.value_scale();
    assert_eq!(scale.max_value(), 7);
    assert_eq!(scale.min_value(), 0);
}

#[test]
fn negative_data_pulls_min_below_zero() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100));
    let mut engine = engine_with_values(config, &[10, -5, 0, 20]);
    engine.build_render_frame().expect("frame build");

    let scale = engine.value_scale();
    assert_eq!(scale.max_value(), 20);
    assert_eq!(scale.min_value(), -5);
    assert!((scale.scale() - 0.25).abs() <= 1e-9);
    assert!((scale.zero_row(engine.viewport()) - 80.0).abs() <= 1e-9);
}

#[test]
fn empty_chart_defaults_to_100_0_regardless_of_height() {
    for height in [50, 100, 777] {
        let config = ChartEngineConfig::new(Viewport::new(400, height));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.build_render_frame().expect("frame build");

        let scale = engine.value_scale();
        assert_eq!(scale.max_value(), 100);
        assert_eq!(scale.min_value(), 0);
    }
}

#[test]
fn empty_chart_keeps_fully_user_provided_bounds() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100))
        .with_max_value(50)
        .with_min_value(-10);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.build_render_frame().expect("frame build");

    let scale = engine.value_scale();
    assert_eq!(scale.max_value(), 50);
    assert_eq!(scale.min_value(), -10);
}

#[test]
fn empty_chart_with_single_user_bound_still_defaults() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100)).with_max_value(50);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.build_render_frame().expect("frame build");

    let scale = engine.value_scale();
    assert_eq!(scale.max_value(), 100);
    assert_eq!(scale.min_value(), 0);
}

#[test]
fn user_bounds_survive_data_that_exceeds_them() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100))
        .with_max_value(10)
        .with_min_value(-10);
    let mut engine = engine_with_values(config, &[50, -50]);
    engine.build_render_frame().expect("frame build");

    let scale = engine.value_scale();
    assert_eq!(scale.max_value(), 10);
    assert_eq!(scale.min_value(), -10);
}

#[test]
fn autoscale_scans_every_registered_series() {
    let config = ChartEngineConfig::new(Viewport::new(400, 100));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_category_axis(CategoryAxis::with_count(2));
    engine.add_series(Series::new("a")).expect("add a");
    engine.add_series(Series::new("b")).expect("add b");
    engine.set_point_value("a", 0, 40).expect("set value");
    engine.set_point_value("b", 1, -15).expect("set value");
    engine.build_render_frame().expect("frame build");

    let scale = engine.value_scale();
    assert_eq!(scale.max_value(), 40);
    assert_eq!(scale.min_value(), -15);
}
