#![no_main]
use libfuzzer_sys::fuzz_target;
use rrwindow::{CalendarTime, Fields, Frequency, Weekday, Window};

fuzz_target!(|input: (u8, u16, u8, [i32; 6], u32)| {
    let (freq, interval, week_start, raw, delta_days) = input;
    let frequency = Frequency::ALL[usize::from(freq) % Frequency::ALL.len()];
    let week_start = Weekday::from_number(week_start % 7 + 1).unwrap();
    let window = Window::new(frequency)
        .with_interval(u32::from(interval))
        .with_week_start(week_start);

    let fields = Fields {
        year: i64::from(raw[0]),
        month: i64::from(raw[1]),
        day: i64::from(raw[2]),
        hour: i64::from(raw[3]),
        minute: i64::from(raw[4]),
        second: i64::from(raw[5]),
    };
    let Ok(time) = CalendarTime::from_fields(fields) else {
        return;
    };
    let mut target = time;
    if target.update(|f| f.day += i64::from(delta_days)).is_err() {
        return;
    }

    let mut stepped = time;
    if window.increment(&mut stepped).is_ok() {
        assert!(stepped > time);
    }

    let mut moved = time;
    if window.move_to_nearest_date(&target, &mut moved).is_ok() {
        assert!(moved <= target);
    }
});
