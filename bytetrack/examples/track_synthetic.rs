use bytetrack::{Bbox, ByteTracker, Detection, TrackerConfig};

fn main() {
    env_logger::init();

    println!("Tracking synthetic detections across five frames...");

    let mut tracker = ByteTracker::new(TrackerConfig {
        min_hits: 1, // return tracks immediately for the walkthrough
        ..TrackerConfig::default()
    });

    // Frame 1: three objects appear
    let detections1 = vec![
        Detection::new(Bbox::new(10.0, 10.0, 50.0, 90.0), 0.9),
        Detection::new(Bbox::new(100.0, 20.0, 140.0, 100.0), 0.8),
        Detection::new(Bbox::new(200.0, 15.0, 240.0, 95.0), 0.7),
    ];
    print_frame(1, &tracker.update(&detections1));

    // Frame 2: everything moves slightly
    let detections2 = vec![
        Detection::new(Bbox::new(14.0, 11.0, 54.0, 91.0), 0.9),
        Detection::new(Bbox::new(104.0, 19.0, 144.0, 99.0), 0.8),
        Detection::new(Bbox::new(205.0, 14.0, 245.0, 94.0), 0.7),
    ];
    print_frame(2, &tracker.update(&detections2));

    // Frame 3: the second object drops to low confidence; the second
    // association pass keeps its identity alive
    let detections3 = vec![
        Detection::new(Bbox::new(18.0, 12.0, 58.0, 92.0), 0.9),
        Detection::new(Bbox::new(108.0, 18.0, 148.0, 98.0), 0.55),
        Detection::new(Bbox::new(210.0, 13.0, 250.0, 93.0), 0.7),
    ];
    print_frame(3, &tracker.update(&detections3));

    // Frame 4: the third object disappears
    let detections4 = vec![
        Detection::new(Bbox::new(22.0, 13.0, 62.0, 93.0), 0.9),
        Detection::new(Bbox::new(112.0, 17.0, 152.0, 97.0), 0.8),
    ];
    print_frame(4, &tracker.update(&detections4));

    // Frame 5: a new object appears
    let detections5 = vec![
        Detection::new(Bbox::new(26.0, 14.0, 66.0, 94.0), 0.9),
        Detection::new(Bbox::new(116.0, 16.0, 156.0, 96.0), 0.8),
        Detection::new(Bbox::new(300.0, 30.0, 340.0, 110.0), 0.85),
    ];
    print_frame(5, &tracker.update(&detections5));

    println!("\nLive tracks (tracked and lost): {}", tracker.num_tracks());
    println!("Frames processed: {}", tracker.frame_count());
}

fn print_frame(frame: u32, active: &[bytetrack::TrackedBox]) {
    println!("\nFrame {}: {} active tracks", frame, active.len());
    for track in active {
        println!(
            "  Track {}: [{:.0}, {:.0}, {:.0}, {:.0}] score {:.2}",
            track.track_id,
            track.bbox.xmin,
            track.bbox.ymin,
            track.bbox.xmax,
            track.bbox.ymax,
            track.score
        );
    }
}
