use chrono::NaiveDate;
use rstest::rstest;
use trading_calendar::data_source::split_windows;
use trading_calendar::utils::time_utils;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
// 不可整除的跨度
#[case(date(2010, 1, 1), date(2023, 6, 15), 5)]
// 恰好整除的跨度
#[case(date(2010, 1, 1), date(2020, 1, 1), 5)]
// 短於單一窗口的跨度
#[case(date(2024, 3, 1), date(2024, 9, 1), 5)]
// 非年初起點
#[case(date(2011, 7, 20), date(2024, 2, 29), 5)]
// 單年窗口
#[case(date(2010, 1, 1), date(2013, 5, 5), 1)]
fn test_partition_covers_span_exactly_once(
    #[case] start: NaiveDate,
    #[case] stop: NaiveDate,
    #[case] window_years: u32,
) {
    let windows = split_windows(start, stop, window_years);
    assert!(!windows.is_empty());

    // 首尾對齊整體跨度
    assert_eq!(windows.first().unwrap().start, start);
    assert_eq!(windows.last().unwrap().stop, stop);

    // 相鄰窗口首尾相接，無空隙也無重疊
    for pair in windows.windows(2) {
        assert_eq!(pair[0].stop, pair[1].start);
    }

    // 除最後一個窗口外，每個窗口皆為名義長度
    for window in &windows[..windows.len() - 1] {
        assert_eq!(
            window.stop,
            time_utils::add_years(window.start, window_years as i32)
        );
    }

    // 最後一個窗口不超過名義長度
    let last = windows.last().unwrap();
    assert!(last.stop <= time_utils::add_years(last.start, window_years as i32));
}

#[test]
fn test_empty_span_produces_no_windows() {
    assert!(split_windows(date(2024, 1, 1), date(2024, 1, 1), 5).is_empty());
}
