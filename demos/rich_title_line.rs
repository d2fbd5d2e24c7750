//! Headless demo: a server-rendered line chart with a rich-span title.
//!
//! Run with: cargo run --example rich_title_line

use std::rc::Rc;

use chart_embed::engine::{NullChartEngine, NullContainer, call_log};
use chart_embed::option::{
    Axis, BackgroundFill, ChartOption, FontWeight, InitOptions, RendererKind, RichSpanStyle,
    Series, TextStyle, Title,
};
use chart_embed::{ChartProps, ChartView};

const ICON_DATA_URI: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciLz4=";

fn main() {
    let _ = chart_embed::telemetry::init_default_tracing();

    let title = Title::new("{badge|W} {accent|W} {icon|} weekly traffic").with_text_style(
        TextStyle::new()
            .with_font_family("Verdana")
            .with_font_weight(FontWeight::Numeric(300))
            .with_rich_span(
                "badge",
                RichSpanStyle::new()
                    .with_font_size(24.0)
                    .with_font_family("Glyphter")
                    .with_padding([-2.0, 5.0, 0.0, 0.0]),
            )
            .with_rich_span(
                "accent",
                RichSpanStyle::new()
                    .with_font_size(24.0)
                    .with_font_family("Glyphter")
                    .with_color("red")
                    .with_padding([-2.0, 5.0, 0.0, 0.0]),
            )
            .with_rich_span(
                "icon",
                RichSpanStyle::new()
                    .with_box_size(22.0, 30.0)
                    .with_background(BackgroundFill::Image {
                        image: ICON_DATA_URI.to_owned(),
                    }),
            ),
    );

    let option = ChartOption::new()
        .with_title(title)
        .with_x_axis(
            Axis::category().with_data(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
        )
        .with_y_axis(Axis::value())
        .with_series(Series::new("line").with_data([150, 230, 224, 218, 135, 147, 260]));

    let init = Rc::new(
        InitOptions::new()
            .with_renderer(RendererKind::Vector)
            .with_explicit_size(800.0, 600.0)
            .with_ssr(true),
    );
    let props = ChartProps::new(option).with_init_options(init);

    let container = Rc::new(NullContainer::new(call_log()));
    let mut view: ChartView<NullChartEngine> = ChartView::new();
    if let Err(err) = view.mount(Rc::clone(&container), &props) {
        eprintln!("failed to mount chart: {err}");
        return;
    }

    match container.markup() {
        Some(markup) => println!("{markup}"),
        None => eprintln!("no markup produced"),
    }
}
