use chart_range::core::{ChartPixelBounds, Reading, SortedReadings};
use chart_range::interaction::{DragMode, GestureContext, RangeSelector};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

fn daily_readings(count: i64) -> SortedReadings {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    SortedReadings::from_unsorted(
        (0..count)
            .map(|i| Reading::new(start + Duration::days(i), i as f64).unwrap())
            .collect(),
    )
}

fn selected(ctx: GestureContext<'_>, left: i32, right: i32) -> RangeSelector {
    let mut selector = RangeSelector::default();
    selector.on_gesture_begin(f64::from(left), ctx);
    selector.on_gesture_update(f64::from(right), ctx);
    selector.on_gesture_end();
    selector
}

fn start_end(selector: &RangeSelector) -> (f64, f64) {
    (
        selector.start().pixel_offset.unwrap(),
        selector.end().pixel_offset.unwrap(),
    )
}

proptest! {
    #[test]
    fn dragged_left_handle_stays_left_of_right_handle(
        left in 0i32..99,
        width in 1i32..100,
        moves in prop::collection::vec(-200i32..300, 1..40)
    ) {
        let right = (left + width).min(100);
        let readings = daily_readings(10);
        let ctx = GestureContext::new(ChartPixelBounds::from_size(100.0, 50.0), &readings);
        let mut selector = selected(ctx, left, right);

        prop_assert_eq!(
            selector.on_gesture_begin(f64::from(left), ctx),
            DragMode::DraggingLeftBoundary
        );
        for x in moves {
            selector.on_gesture_update(f64::from(x), ctx);
            let (start, end) = start_end(&selector);
            prop_assert!(start < end);
            prop_assert!(start >= 0.0);
            prop_assert_eq!(end, f64::from(right));
        }
    }

    #[test]
    fn dragged_right_handle_stays_right_of_left_handle(
        left in 0i32..60,
        width in 21i32..=40,
        moves in prop::collection::vec(-200i32..300, 1..40)
    ) {
        let right = left + width;
        let readings = daily_readings(10);
        let ctx = GestureContext::new(ChartPixelBounds::from_size(100.0, 50.0), &readings);
        let mut selector = selected(ctx, left, right);

        prop_assert_eq!(
            selector.on_gesture_begin(f64::from(right), ctx),
            DragMode::DraggingRightBoundary
        );
        for x in moves {
            selector.on_gesture_update(f64::from(x), ctx);
            let (start, end) = start_end(&selector);
            prop_assert!(end > start);
            prop_assert!(end <= 100.0);
            prop_assert_eq!(start, f64::from(left));
        }
    }

    #[test]
    fn moving_selection_keeps_width_and_stays_inside(
        width in 42i32..=100,
        left_seed in 0i32..1_000,
        moves in prop::collection::vec(-300i32..400, 1..40)
    ) {
        let left = left_seed % (101 - width);
        let right = left + width;
        let readings = daily_readings(10);
        let ctx = GestureContext::new(ChartPixelBounds::from_size(100.0, 50.0), &readings);
        let mut selector = selected(ctx, left, right);

        let grab = left + width / 2;
        let mode = selector.on_gesture_begin(f64::from(grab), ctx);
        prop_assert!(matches!(mode, DragMode::MovingSelection { .. }), "{mode:?}");
        for x in moves {
            selector.on_gesture_update(f64::from(x), ctx);
            let (start, end) = start_end(&selector);
            prop_assert_eq!(end - start, f64::from(width));
            prop_assert!(start >= 0.0);
            prop_assert!(end <= 100.0);
        }
    }
}
