use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rrwindow::{CalendarTime, Frequency, Window, WindowOptions};

fn ymd(year: i64, month: i64, day: i64) -> CalendarTime {
    CalendarTime::new(year, month, day).unwrap()
}

// ---------------------------------------------------------------------------
// Construction benchmarks
// ---------------------------------------------------------------------------

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    let options = WindowOptions::new("Weekly")
        .with_interval("15")
        .with_week_start(7i64);
    group.bench_function("from_options", |b| {
        b.iter(|| Window::from_options(black_box(&options)).unwrap());
    });

    group.bench_function("from_json", |b| {
        b.iter(|| {
            Window::from_json(black_box(
                r#"{"frequency":"weekly","interval":15,"weekStart":7}"#,
            ))
            .unwrap()
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Increment benchmarks
// ---------------------------------------------------------------------------

fn bench_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment");
    let start = ymd(2012, 1, 5);

    for frequency in Frequency::ALL {
        let window = Window::new(frequency).with_interval(3);
        group.bench_function(frequency.as_str(), |b| {
            b.iter(|| {
                let mut time = start;
                window.increment(black_box(&mut time)).unwrap();
                time
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Jump vs. stepping: a daily-scale anchor 50 years behind the target
// ---------------------------------------------------------------------------

fn bench_fast_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_forward");
    let start = ymd(1975, 3, 12);
    let target = ymd(2025, 3, 12);

    for frequency in [Frequency::Yearly, Frequency::Monthly, Frequency::Weekly] {
        let window = Window::new(frequency).with_interval(2);

        group.bench_function(format!("{frequency}/jump"), |b| {
            b.iter(|| {
                let mut time = start;
                window
                    .move_to_nearest_date(black_box(&target), &mut time)
                    .unwrap();
                time
            });
        });

        group.bench_function(format!("{frequency}/step"), |b| {
            b.iter(|| {
                let mut time = start;
                let mut next = start;
                window.increment(&mut next).unwrap();
                while next <= *black_box(&target) {
                    time = next;
                    window.increment(&mut next).unwrap();
                }
                time
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construct, bench_increment, bench_fast_forward);
criterion_main!(benches);
