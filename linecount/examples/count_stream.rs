use bytetrack::{Bbox, ByteTracker, Detection, TrackerConfig};
use linecount::{CountingLine, LineCounter, LineOrientation};

const FPS: f64 = 30.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Vertical doorway line at x=320; endpoints ordered so the right-hand
    // side counts as "enter"
    let line = CountingLine::new((320.0, 480.0), (320.0, 0.0), LineOrientation::Vertical);
    let mut tracker = ByteTracker::new(TrackerConfig::default());
    let mut counter = LineCounter::new(line);

    println!("Simulating one person walking in, then back out...");

    // Walk right through the doorway, pause, walk back out
    let centers: Vec<f32> = (0..20)
        .map(|i| 200.0 + 20.0 * i as f32)
        .chain((0..20).map(|i| 580.0 - 20.0 * i as f32))
        .collect();

    for (i, &x) in centers.iter().enumerate() {
        let detection = Detection::new(Bbox::new(x - 25.0, 100.0, x + 25.0, 300.0), 0.85);
        let active = tracker.update(&[detection]);
        let timestamp = i as f64 / FPS;
        let (enter, exit, occupancy) = counter.update(&active, timestamp);

        if i % 5 == 0 {
            println!(
                "t={:5.2}s x={:3.0} active={} enter={} exit={} occupancy={}",
                timestamp,
                x,
                active.len(),
                enter,
                exit,
                occupancy
            );
        }
    }

    let (enter, exit, occupancy) = counter.counts();
    println!("\nFinal: enter={} exit={} occupancy={}", enter, exit, occupancy);

    println!("\nEvent log as CSV:");
    let mut buffer = Vec::new();
    counter.write_history_csv(&mut buffer)?;
    print!("{}", String::from_utf8_lossy(&buffer));

    Ok(())
}
