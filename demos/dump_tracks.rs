//! Replays detections through the tracker and prints the visible tracks.
//!
//! Input lines look like `<timestamp>:[{"x":10,"y":10,"width":50,"height":50}, ...]`.
//! Output lines are `<timestamp> <id> <x> <y> <width> <height>`.
//!
//! Usage: `cargo run --example dump_tracks -- detections.txt [params.json]`

use rectrack::{Rect, RectangleTracker, TrackerParameters};
use std::io::BufRead;

fn parse_line(line: &str) -> anyhow::Result<(u64, Vec<Rect>)> {
    let idx = line
        .find(':')
        .ok_or_else(|| anyhow::anyhow!("wrong file format: expected `:`"))?;
    let (ts, vector) = line.split_at(idx);

    Ok((ts.trim().parse()?, serde_json::from_str(&vector[1..])?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args().skip(1);
    let in_file_name = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("expected detections file name"))?;

    let params = match args.next() {
        Some(path) => serde_json::from_reader(std::fs::File::open(path)?)?,
        None => TrackerParameters::default(),
    };

    let mut tracker = RectangleTracker::new(params)?;
    let reader = std::io::BufReader::new(std::fs::File::open(in_file_name)?);
    let mut tracks = Vec::new();

    for (num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (ts, detections) = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(line = num + 1, %err, "skipping line");
                continue;
            }
        };

        tracker.update_tracked_objects(&detections);
        tracker.tracked_rects_into(&mut tracks, true);

        for t in &tracks {
            println!("{} {} {} {} {} {}", ts, t.id, t.x, t.y, t.width, t.height);
        }
    }

    Ok(())
}
