use std::rc::Rc;

use chart_embed::engine::{CallEvent, NullChartEngine, NullContainer, call_log};
use chart_embed::option::{ChartOption, InitOptions, RendererKind, Series};
use chart_embed::{ChartProps, ChartView};

fn ssr_props() -> ChartProps {
    ChartProps::new(ChartOption::new().with_series(Series::line("s1").with_data([1, 2, 3])))
        .with_init_options(Rc::new(
            InitOptions::new()
                .with_renderer(RendererKind::Vector)
                .with_explicit_size(800.0, 600.0)
                .with_ssr(true),
        ))
}

#[test]
fn server_render_sets_markup_after_configuration() {
    let log = call_log();
    let container = Rc::new(NullContainer::new(Rc::clone(&log)));
    let mut view: ChartView<NullChartEngine> = ChartView::new();
    view.mount(Rc::clone(&container), &ssr_props()).expect("mount");

    let markup = container.markup().expect("markup set on container");
    assert!(!markup.is_empty());
    // The markup reflects the applied option, so configuration happened first.
    assert!(markup.contains(r#"data-series="1""#));

    let api = view.api().expect("live instance");
    assert!(!api.borrow().container_bound());
    assert_eq!(api.borrow().svg_renders(), 1);
}

#[test]
fn every_pass_refreshes_markup() {
    let log = call_log();
    let container = Rc::new(NullContainer::new(Rc::clone(&log)));
    let mut view: ChartView<NullChartEngine> = ChartView::new();
    let props = ssr_props();
    view.mount(Rc::clone(&container), &props).expect("mount");

    let second = ChartProps::new(
        ChartOption::new()
            .with_series(Series::line("s1"))
            .with_series(Series::line("s2")),
    )
    .with_init_options(props.init_options.clone().expect("init options"));
    view.render(&second).expect("render");

    let markup = container.markup().expect("markup refreshed");
    assert!(markup.contains(r#"data-series="2""#));

    let api = view.api().expect("live instance");
    assert_eq!(api.borrow().svg_renders(), 2);

    let set_markup_calls = log
        .borrow()
        .iter()
        .filter(|event| matches!(event, CallEvent::SetMarkup { .. }))
        .count();
    assert_eq!(set_markup_calls, 2);
}

#[test]
fn interactive_mode_never_sets_markup() {
    let log = call_log();
    let container = Rc::new(NullContainer::new(Rc::clone(&log)));
    let mut view: ChartView<NullChartEngine> = ChartView::new();
    let props =
        ChartProps::new(ChartOption::new().with_series(Series::line("s1").with_data([1])));
    view.mount(Rc::clone(&container), &props).expect("mount");

    assert!(container.markup().is_none());
    assert!(
        !log.borrow()
            .iter()
            .any(|event| matches!(event, CallEvent::SetMarkup { .. }))
    );

    let api = view.api().expect("live instance");
    assert!(api.borrow().container_bound());
    assert_eq!(api.borrow().svg_renders(), 0);
}
