use chart_range::RangeError;
use chart_range::core::ChartPixelBounds;
use chart_range::render::{
    Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

fn blue() -> Color {
    Color::from_rgba8(0, 120, 255, 1.0)
}

#[test]
fn null_renderer_counts_primitives() {
    let frame = RenderFrame::new(ChartPixelBounds::from_size(200.0, 100.0))
        .with_rect(RectPrimitive::new(20.0, 0.0, 60.0, 100.0, blue().with_alpha(0.2)))
        .with_line(LinePrimitive::vertical(20.0, 0.0, 100.0, 2.0, blue()))
        .with_line(LinePrimitive::vertical(80.0, 0.0, 100.0, 2.0, blue()))
        .with_text(TextPrimitive::new(
            "03.01.2023",
            20.0,
            -4.0,
            12.0,
            blue(),
            TextHAlign::Center,
        ));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(renderer.last_frame.as_ref(), Some(&frame));
}

#[test]
fn degenerate_frame_bounds_are_rejected() {
    let frame = RenderFrame::new(ChartPixelBounds::from_size(0.0, 100.0));
    let mut renderer = NullRenderer::default();

    let err = renderer.render(&frame).expect_err("degenerate bounds");
    assert!(matches!(err, RangeError::InvalidLayout { .. }));
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn invalid_primitives_are_rejected() {
    let bounds = ChartPixelBounds::from_size(100.0, 100.0);

    let negative_rect =
        RenderFrame::new(bounds).with_rect(RectPrimitive::new(0.0, 0.0, -1.0, 10.0, blue()));
    assert!(negative_rect.validate().is_err());

    let thin_line =
        RenderFrame::new(bounds).with_line(LinePrimitive::vertical(5.0, 0.0, 10.0, 0.0, blue()));
    assert!(thin_line.validate().is_err());

    let empty_text = RenderFrame::new(bounds).with_text(TextPrimitive::new(
        "",
        5.0,
        5.0,
        12.0,
        blue(),
        TextHAlign::Left,
    ));
    assert!(empty_text.validate().is_err());

    let bad_color = RenderFrame::new(bounds).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        1.0,
        1.0,
        Color::rgba(1.5, 0.0, 0.0, 1.0),
    ));
    assert!(bad_color.validate().is_err());
}

#[test]
fn empty_frame_is_valid() {
    let frame = RenderFrame::new(ChartPixelBounds::from_size(100.0, 100.0));
    assert!(frame.is_empty());
    assert!(frame.validate().is_ok());
}

#[test]
fn vertical_line_runs_bottom_to_top() {
    let line = LinePrimitive::vertical(12.0, 5.0, 55.0, 2.0, blue());
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (12.0, 55.0, 12.0, 5.0));
}
