//! Fast-forwarding a decades-old anchor, the way a recurrence expander skips ahead to "now".

use rrwindow::{CalendarTime, Window};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let window = Window::from_json(r#"{"frequency": "weekly", "interval": 3, "weekStart": 7}"#)?;

    let anchor = CalendarTime::new(1970, 1, 1)?;
    let now = CalendarTime::new(2025, 6, 15)?;

    // One jump instead of ~950 increments
    let mut time = anchor;
    let jump = window.move_to_nearest_date(&now, &mut time)?;
    println!("{window}: {anchor} -> {time} ({jump:?})");

    // Continue stepping from the jumped-to boundary
    println!("Next boundaries:");
    for _ in 0..3 {
        window.increment(&mut time)?;
        println!("  {time}");
    }

    // A target inside the current window leaves the time alone
    let mut time = CalendarTime::new(2025, 6, 11)?;
    let jump = window.move_to_nearest_date(&CalendarTime::new(2025, 6, 13)?, &mut time)?;
    println!("\nTarget inside the current week: {time} ({jump:?})");

    Ok(())
}
