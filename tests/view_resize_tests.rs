use std::rc::Rc;

use chart_embed::engine::{NullChartEngine, NullContainer, call_log};
use chart_embed::option::{ChartOption, InitOptions, Series};
use chart_embed::{ChartProps, ChartView, PixelSize};

fn props_with_init(init: InitOptions) -> ChartProps {
    ChartProps::new(ChartOption::new().with_series(Series::line("s1").with_data([1, 2])))
        .with_init_options(Rc::new(init))
}

fn mounted(props: &ChartProps) -> (ChartView<NullChartEngine>, Rc<NullContainer>) {
    let container = Rc::new(NullContainer::new(call_log()));
    let mut view = ChartView::new();
    view.mount(Rc::clone(&container), props).expect("mount");
    (view, container)
}

#[test]
fn content_box_change_resizes_instance_once() {
    let (view, container) = mounted(&props_with_init(InitOptions::new()));

    container.emit_resize(PixelSize::new(640.0, 480.0));

    let api = view.api().expect("live instance");
    assert_eq!(api.borrow().resizes(), &[PixelSize::new(640.0, 480.0)]);
}

#[test]
fn explicit_size_pins_auto_sizing_off() {
    let props = props_with_init(InitOptions::new().with_explicit_size(800.0, 600.0));
    let (mut view, container) = mounted(&props);

    container.emit_resize(PixelSize::new(640.0, 480.0));
    view.render(&props).expect("render");
    view.render(&props).expect("render");

    // One explicit re-assertion per pass, never an observed size.
    let api = view.api().expect("live instance");
    let expected = [PixelSize::new(800.0, 600.0); 3];
    assert_eq!(api.borrow().resizes(), &expected);
}

#[test]
fn single_explicit_dimension_keeps_auto_sizing() {
    let props = props_with_init(InitOptions {
        width: Some(800.0),
        ..InitOptions::default()
    });
    let (view, container) = mounted(&props);

    container.emit_resize(PixelSize::new(640.0, 480.0));

    let api = view.api().expect("live instance");
    assert_eq!(api.borrow().resizes(), &[PixelSize::new(640.0, 480.0)]);
}

#[test]
fn no_resize_reaches_instance_after_unmount() {
    let (mut view, container) = mounted(&props_with_init(InitOptions::new()));
    let api = view.api().expect("live instance");

    view.unmount();
    container.emit_resize(PixelSize::new(640.0, 480.0));

    assert!(api.borrow().is_disposed());
    assert!(api.borrow().resizes().is_empty());
}

#[test]
fn recreation_refreshes_the_size_pin() {
    let pinned = props_with_init(InitOptions::new().with_explicit_size(800.0, 600.0));
    let (mut view, container) = mounted(&pinned);

    container.emit_resize(PixelSize::new(640.0, 480.0));
    {
        let api = view.api().expect("live instance");
        assert_eq!(api.borrow().resizes(), &[PixelSize::new(800.0, 600.0)]);
    }

    // New init identity without an explicit size: auto-sizing is active again.
    view.render(&props_with_init(InitOptions::new())).expect("render");
    container.emit_resize(PixelSize::new(640.0, 480.0));

    let api = view.api().expect("live instance");
    assert_eq!(api.borrow().resizes(), &[PixelSize::new(640.0, 480.0)]);
}
