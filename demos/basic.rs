//! Basic rrwindow walkthrough: build windows, step through boundaries, jump ahead.

use rrwindow::{CalendarTime, Frequency, Weekday, Window, WindowOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a window from a loosely typed options record
    let monthly = Window::from_options(&WindowOptions::new("monthly").with_interval("5"))?;
    println!("Window: {monthly}");

    // Step through window boundaries
    let mut time = CalendarTime::new(2012, 5, 17)?;
    println!("\nStarting at {time}:");
    for _ in 0..4 {
        monthly.increment(&mut time)?;
        println!("  {time}");
    }

    // Weekly windows align to the week start
    let weekly = Window::new(Frequency::Weekly).with_week_start(Weekday::Sunday);
    let mut time: CalendarTime = "2012-01-05T09:00:00".parse()?;
    weekly.increment(&mut time)?;
    println!("\n{weekly}: next boundary after 2012-01-05T09:00 is {time} ({})", time.weekday());

    // Jump close to a target without passing it
    let yearly = Window::new(Frequency::Yearly).with_interval(5);
    let target = CalendarTime::new(2020, 1, 1)?;
    let mut time = CalendarTime::new(2012, 1, 1)?;
    let jump = yearly.move_to_nearest_date(&target, &mut time)?;
    println!("\n{yearly}: from 2012 toward {target} -> {time} ({jump:?})");

    Ok(())
}
