//! API surface test — pins the public methods and their return types.
//!
//! If any method is missing or changes shape, this file stops compiling; the runtime
//! assertions check the documented contract of each entry point.

use rrwindow::{
    CalendarTime, DateDuration, Frequency, Jump, Weekday, Window, WindowError, WindowOptions,
};

fn ymd(year: i64, month: i64, day: i64) -> CalendarTime {
    CalendarTime::new(year, month, day).unwrap()
}

#[test]
fn static_from_options() {
    let result: Result<Window, WindowError> = Window::from_options(&WindowOptions::new("daily"));
    assert!(result.is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn static_from_json() {
    let result: Result<Window, WindowError> = Window::from_json(r#"{"frequency":"weekly"}"#);
    assert!(result.is_ok());
}

#[test]
fn typed_builder() {
    let window: Window = Window::new(Frequency::Weekly)
        .with_interval(2)
        .with_week_start(Weekday::Sunday);
    let frequency: Frequency = window.frequency();
    let interval: u32 = window.interval();
    let week_start: Weekday = window.week_start();
    assert_eq!(
        (frequency, interval, week_start),
        (Frequency::Weekly, 2, Weekday::Sunday)
    );
}

#[test]
fn instance_increment() {
    let window = Window::new(Frequency::Daily);
    let mut time = ymd(2012, 1, 30);
    let result: Result<(), WindowError> = window.increment(&mut time);
    assert!(result.is_ok());
    assert_eq!(time, ymd(2012, 1, 31));
}

#[test]
fn instance_move_to_nearest_date() {
    let window = Window::new(Frequency::Yearly).with_interval(5);
    let mut time = ymd(2012, 1, 1);
    let result: Result<Jump, WindowError> = window.move_to_nearest_date(&ymd(2020, 1, 1), &mut time);
    assert_eq!(result.unwrap(), Jump::Moved { units: 5 });
    assert_eq!(time, ymd(2017, 1, 1));
}

#[test]
fn window_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Window>();

    let window = Window::new(Frequency::Monthly).with_interval(3);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut time = ymd(2012, 1 + i, 1);
                window.increment(&mut time).unwrap();
                time
            })
        })
        .collect();
    let results: Vec<CalendarTime> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], ymd(2012, 4, 1));
    assert_eq!(results[3], ymd(2012, 7, 1));
}

#[test]
fn calendar_time_collaborator() {
    let mut time = ymd(2012, 1, 5);
    let dow: u8 = time.day_of_week(Weekday::Monday);
    assert_eq!(dow, 4);

    let diff: DateDuration = ymd(2012, 1, 31).subtract_date(&time);
    assert_eq!(diff.days, 26);

    let result: Result<(), WindowError> = time.set_month(13);
    assert!(result.is_ok());
    assert_eq!(time, ymd(2013, 1, 5));
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip() {
    let window = Window::new(Frequency::Weekly)
        .with_interval(15)
        .with_week_start(Weekday::Sunday);
    let json = serde_json::to_string(&window).unwrap();
    assert_eq!(json, r#"{"frequency":"weekly","interval":15,"weekStart":7}"#);
    assert_eq!(Window::from_json(&json).unwrap(), window);

    let time = ymd(2012, 10, 29);
    let json = serde_json::to_string(&time).unwrap();
    assert_eq!(json, r#""2012-10-29T00:00:00""#);
    let back: CalendarTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, time);
}
