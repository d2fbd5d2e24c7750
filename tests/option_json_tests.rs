use chart_embed::option::{
    Axis, BackgroundFill, ChartOption, FontWeight, InitOptions, RendererKind, RichSpanStyle,
    Series, TextStyle, Theme, Title,
};
use serde_json::json;

#[test]
fn chart_option_serializes_in_the_engine_schema() {
    let option = ChartOption::new()
        .with_title(Title::new("traffic"))
        .with_x_axis(Axis::category().with_data(["Mon", "Tue"]))
        .with_y_axis(Axis::value())
        .with_series(Series::line("s1").with_data([150, 230]));

    let value = serde_json::to_value(&option).expect("serialize option");
    assert_eq!(value["title"]["text"], json!("traffic"));
    assert_eq!(value["xAxis"][0]["type"], json!("category"));
    assert_eq!(value["yAxis"][0]["type"], json!("value"));
    assert_eq!(value["series"][0]["id"], json!("s1"));
    assert_eq!(value["series"][0]["type"], json!("line"));
}

#[test]
fn absent_fields_fall_back_to_defaults() {
    let option = ChartOption::from_json_str("{}").expect("parse empty option");
    assert_eq!(option, ChartOption::new());

    let init = InitOptions::from_json_str("{}").expect("parse empty init options");
    assert_eq!(init.renderer, RendererKind::Raster);
    assert!(!init.ssr);
    assert_eq!(init.explicit_size(), None);
}

#[test]
fn unmodeled_keys_pass_through_the_extra_map() {
    let input = r#"{
  "series": [{ "type": "line", "data": [1, 2] }],
  "tooltip": { "trigger": "axis" }
}"#;
    let option = ChartOption::from_json_str(input).expect("parse option");
    assert_eq!(option.extra["tooltip"]["trigger"], json!("axis"));

    let round = serde_json::to_value(&option).expect("serialize option");
    assert_eq!(round["tooltip"]["trigger"], json!("axis"));
}

#[test]
fn theme_is_name_or_inline_object() {
    let named: Theme = serde_json::from_value(json!("dark")).expect("parse named theme");
    assert_eq!(named, Theme::named("dark"));

    let inline: Theme =
        serde_json::from_value(json!({ "backgroundColor": "#100c2a" })).expect("parse inline");
    assert!(matches!(inline, Theme::Inline(_)));
    assert_eq!(serde_json::to_value(&named).expect("serialize"), json!("dark"));
}

#[test]
fn init_options_parse_engine_field_names() {
    let init = InitOptions::from_json_str(
        r#"{ "renderer": "vector", "ssr": true, "width": 800, "height": 600 }"#,
    )
    .expect("parse init options");
    assert_eq!(init.renderer, RendererKind::Vector);
    assert!(init.ssr);
    assert_eq!(
        init.explicit_size().map(|size| (size.width, size.height)),
        Some((800.0, 600.0))
    );
}

#[test]
fn rich_spans_round_trip_with_background_image() {
    let style = TextStyle::new()
        .with_font_family("Verdana")
        .with_font_weight(FontWeight::Numeric(300))
        .with_rich_span(
            "icon",
            RichSpanStyle::new()
                .with_box_size(22.0, 30.0)
                .with_background(BackgroundFill::Image {
                    image: "data:image/svg+xml;base64,AAAA".to_owned(),
                }),
        )
        .with_rich_span("accent", RichSpanStyle::new().with_color("red"));

    let value = serde_json::to_value(&style).expect("serialize text style");
    assert_eq!(value["fontWeight"], json!(300));
    assert_eq!(
        value["rich"]["icon"]["backgroundColor"]["image"],
        json!("data:image/svg+xml;base64,AAAA")
    );

    let back: TextStyle = serde_json::from_value(value).expect("parse text style");
    assert_eq!(back, style);
}

#[test]
fn font_weight_is_numeric_or_named() {
    let numeric: FontWeight = serde_json::from_value(json!(300)).expect("numeric weight");
    assert_eq!(numeric, FontWeight::Numeric(300));

    let named: FontWeight = serde_json::from_value(json!("bold")).expect("named weight");
    assert_eq!(named, FontWeight::Named("bold".to_owned()));
}
