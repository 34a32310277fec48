use chart_range::core::{ChartPixelBounds, Reading, SortedReadings};
use chart_range::interaction::{
    BoundaryRole, DragMode, GestureContext, RangeSelection, RangeSelector, SelectionBoundary,
    SelectorTuning, resolve_ordered_boundaries,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::days(offset)
}

fn daily_readings(count: i64) -> SortedReadings {
    SortedReadings::from_unsorted(
        (0..count)
            .map(|i| Reading::new(day(i), i as f64).expect("valid reading"))
            .collect(),
    )
}

fn bounds_100() -> ChartPixelBounds {
    ChartPixelBounds::from_size(100.0, 50.0)
}

/// Draws a fresh selection from `from` to `to` and ends the gesture.
fn select(selector: &mut RangeSelector, ctx: GestureContext<'_>, from: f64, to: f64) {
    assert_eq!(selector.on_gesture_begin(from, ctx), DragMode::CreatingNew);
    selector.on_gesture_update(to, ctx);
    selector.on_gesture_end();
}

fn pixels(selector: &RangeSelector) -> (Option<f64>, Option<f64>) {
    (
        selector.start().pixel_offset,
        selector.end().pixel_offset,
    )
}

#[test]
fn new_selection_over_ten_days_emits_first_to_fifth_day() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();

    assert_eq!(selector.on_gesture_begin(0.0, ctx), DragMode::CreatingNew);
    assert_eq!(selector.start(), SelectionBoundary::at(0.0, Some(day(0))));
    assert_eq!(selector.end(), SelectionBoundary::at(0.0, Some(day(0))));

    assert!(selector.on_gesture_update(50.0, ctx));
    assert_eq!(selector.end().date, Some(day(4)));

    let emitted = selector.on_gesture_end();
    assert_eq!(
        emitted,
        Some(RangeSelection {
            start: day(0),
            end: day(4),
        })
    );
    assert_eq!(selector.mode(), DragMode::None);
}

#[test]
fn dragging_inside_band_moves_whole_selection() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 20.0, 80.0);

    let mode = selector.on_gesture_begin(50.0, ctx);
    assert_eq!(
        mode,
        DragMode::MovingSelection {
            grab_offset_px: 30.0
        }
    );
    assert!(selector.on_gesture_update(60.0, ctx));
    assert_eq!(pixels(&selector), (Some(30.0), Some(90.0)));
    let ordered = selector.ordered().expect("ordered");
    assert_eq!(ordered.width(), 60.0);
}

#[test]
fn left_handle_cannot_cross_right_handle() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 20.0, 80.0);

    assert_eq!(
        selector.on_gesture_begin(22.0, ctx),
        DragMode::DraggingLeftBoundary
    );
    selector.on_gesture_update(90.0, ctx);
    assert_eq!(pixels(&selector), (Some(79.0), Some(80.0)));

    // Stepping back under the right handle moves freely again.
    selector.on_gesture_update(40.0, ctx);
    assert_eq!(pixels(&selector), (Some(40.0), Some(80.0)));
}

#[test]
fn right_handle_cannot_cross_left_handle() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 20.0, 80.0);

    assert_eq!(
        selector.on_gesture_begin(75.0, ctx),
        DragMode::DraggingRightBoundary
    );
    selector.on_gesture_update(10.0, ctx);
    assert_eq!(pixels(&selector), (Some(20.0), Some(21.0)));
}

#[test]
fn left_handle_wins_when_both_handles_are_in_reach() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 40.0, 55.0);

    assert_eq!(
        selector.on_gesture_begin(48.0, ctx),
        DragMode::DraggingLeftBoundary
    );
}

#[test]
fn pointer_away_from_selection_starts_over() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 10.0, 30.0);

    assert_eq!(selector.on_gesture_begin(90.0, ctx), DragMode::CreatingNew);
    assert_eq!(pixels(&selector), (Some(90.0), Some(90.0)));
}

#[test]
fn band_body_needs_clearance_from_both_handles() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 10.0, 60.0);

    // Body is 30 < x < 40 with a 20px tolerance on each handle.
    assert!(matches!(
        selector.on_gesture_begin(35.0, ctx),
        DragMode::MovingSelection { .. }
    ));
    selector.on_gesture_end();

    selector.clear();
    select(&mut selector, ctx, 10.0, 45.0);
    assert_eq!(
        selector.on_gesture_begin(28.0, ctx),
        DragMode::DraggingLeftBoundary
    );
}

#[test]
fn moving_selection_is_kept_inside_chart() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 20.0, 80.0);

    selector.on_gesture_begin(50.0, ctx);
    selector.on_gesture_update(95.0, ctx);
    assert_eq!(pixels(&selector), (Some(40.0), Some(100.0)));

    selector.on_gesture_update(-50.0, ctx);
    assert_eq!(pixels(&selector), (Some(0.0), Some(60.0)));
}

#[test]
fn reversed_selection_tracks_logical_boundaries() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 80.0, 20.0);

    let ordered = selector.ordered().expect("ordered");
    assert!(!ordered.is_start_on_left);
    assert_eq!(ordered.left_role(), BoundaryRole::End);

    assert_eq!(
        selector.on_gesture_begin(22.0, ctx),
        DragMode::DraggingLeftBoundary
    );
    selector.on_gesture_update(30.0, ctx);
    assert_eq!(pixels(&selector), (Some(80.0), Some(30.0)));

    let emitted = selector.on_gesture_end().expect("selection");
    assert_eq!(emitted.start, day(2));
    assert_eq!(emitted.end, day(7));
}

#[test]
fn moving_reversed_selection_keeps_start_on_the_right() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();
    select(&mut selector, ctx, 80.0, 20.0);

    selector.on_gesture_begin(50.0, ctx);
    selector.on_gesture_update(40.0, ctx);
    assert_eq!(pixels(&selector), (Some(70.0), Some(10.0)));
}

#[test]
fn creating_selection_may_end_left_of_start() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();

    selector.on_gesture_begin(70.0, ctx);
    selector.on_gesture_update(10.0, ctx);
    assert_eq!(pixels(&selector), (Some(70.0), Some(10.0)));

    let emitted = selector.on_gesture_end().expect("selection");
    assert!(emitted.start <= emitted.end);
    assert_eq!(emitted.start, day(0));
    assert_eq!(emitted.end, day(6));
}

#[test]
fn pointer_is_clamped_into_plot_area() {
    let readings = daily_readings(10);
    let bounds = ChartPixelBounds::new(10.0, 110.0, 0.0, 50.0).expect("bounds");
    let ctx = GestureContext::new(bounds, &readings);
    let mut selector = RangeSelector::default();

    selector.on_gesture_begin(-100.0, ctx);
    assert_eq!(selector.start().pixel_offset, Some(0.0));
    selector.on_gesture_update(500.0, ctx);
    assert_eq!(selector.end(), SelectionBoundary::at(100.0, Some(day(9))));
}

#[test]
fn degenerate_layout_makes_gestures_noop() {
    let readings = daily_readings(10);
    let collapsed = ChartPixelBounds::new(50.0, 50.0, 0.0, 50.0).expect("bounds");
    let ctx = GestureContext::new(collapsed, &readings);
    let mut selector = RangeSelector::default();

    assert_eq!(selector.on_gesture_begin(50.0, ctx), DragMode::None);
    assert!(!selector.on_gesture_update(60.0, ctx));
    assert_eq!(selector.on_gesture_end(), None);
    assert_eq!(pixels(&selector), (None, None));
}

#[test]
fn too_few_readings_make_gestures_noop() {
    let mut selector = RangeSelector::default();
    for count in [0, 1] {
        let readings = daily_readings(count);
        let ctx = GestureContext::new(bounds_100(), &readings);
        assert_eq!(selector.on_gesture_begin(30.0, ctx), DragMode::None);
        assert!(!selector.on_gesture_update(60.0, ctx));
        assert_eq!(selector.on_gesture_end(), None);
    }
}

#[test]
fn layout_collapse_mid_gesture_freezes_boundaries() {
    let readings = daily_readings(10);
    let mut selector = RangeSelector::default();
    selector.on_gesture_begin(10.0, GestureContext::new(bounds_100(), &readings));

    let collapsed = ChartPixelBounds::from_size(0.0, 50.0);
    assert!(!selector.on_gesture_update(60.0, GestureContext::new(collapsed, &readings)));
    assert_eq!(pixels(&selector), (Some(10.0), Some(10.0)));
    assert_eq!(selector.mode(), DragMode::CreatingNew);
}

#[test]
fn update_without_gesture_is_ignored() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();

    assert!(!selector.on_gesture_update(40.0, ctx));
    assert_eq!(selector.on_gesture_end(), None);
}

#[test]
fn custom_tolerance_and_gap_are_honored() {
    let readings = daily_readings(10);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::new(SelectorTuning {
        handle_tolerance_px: 5.0,
        min_boundary_gap_px: 10.0,
    });
    select(&mut selector, ctx, 20.0, 80.0);

    assert_eq!(
        selector.on_gesture_begin(27.0, ctx),
        DragMode::MovingSelection {
            grab_offset_px: 7.0
        }
    );
    selector.on_gesture_end();

    selector.on_gesture_begin(24.0, ctx);
    selector.on_gesture_update(95.0, ctx);
    assert_eq!(pixels(&selector), (Some(70.0), Some(80.0)));
}

#[test]
fn set_range_places_boundaries_at_dates() {
    let readings = daily_readings(11);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();

    assert!(selector.set_range(day(2), day(6), ctx));
    assert_eq!(pixels(&selector), (Some(20.0), Some(60.0)));
    assert_eq!(
        selector.selection(),
        Some(RangeSelection {
            start: day(2),
            end: day(6),
        })
    );
}

#[test]
fn ordering_needs_both_boundaries() {
    let set = SelectionBoundary::at(10.0, None);
    assert!(resolve_ordered_boundaries(set, SelectionBoundary::default()).is_none());
    assert!(resolve_ordered_boundaries(SelectionBoundary::default(), set).is_none());
}

#[test]
fn committed_range_is_ordered_and_inclusive() {
    let range = RangeSelection::ordered(day(6), day(2));
    assert_eq!(range.start, day(2));
    assert_eq!(range.duration(), Duration::days(4));
    assert!(range.contains(day(2)));
    assert!(range.contains(day(6)));
    assert!(!range.contains(day(7)));
}

#[test]
fn set_range_outside_domain_takes_edge_dates() {
    let readings = daily_readings(11);
    let ctx = GestureContext::new(bounds_100(), &readings);
    let mut selector = RangeSelector::default();

    assert!(selector.set_range(day(-3), day(4), ctx));
    assert_eq!(selector.start(), SelectionBoundary::at(0.0, Some(day(0))));
    assert_eq!(selector.end().date, Some(day(4)));
}

#[test]
fn rescale_follows_plot_width_and_keeps_dates() {
    let readings = daily_readings(11);
    let mut selector = RangeSelector::default();
    let narrow = GestureContext::new(ChartPixelBounds::from_size(50.0, 50.0), &readings);
    assert!(selector.set_range(day(2), day(6), narrow));
    assert_eq!(pixels(&selector), (Some(10.0), Some(30.0)));

    let wide = GestureContext::new(bounds_100(), &readings);
    assert!(selector.rescale(50.0, wide));
    assert_eq!(pixels(&selector), (Some(20.0), Some(60.0)));
    assert_eq!(selector.start().date, Some(day(2)));

    assert!(!selector.rescale(100.0, wide));
    assert!(!selector.rescale(0.0, wide));
}
