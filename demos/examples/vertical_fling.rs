// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vertical list of 10 000 rows driven through a simulated fling.
//!
//! Scroll events arrive every 4 ms, far faster than the 10 Hz refresh cadence,
//! yet the list only recomputes once per tick and only rebinds rows that
//! scrolled into view.
//!
//! Run:
//! - `cargo run -p recycle_list_demos --example vertical_fling`
//! - `RUST_LOG=trace cargo run -p recycle_list_demos --example vertical_fling` to see every rebind

use kurbo::{Insets, Point, Size, Vec2};
use recycle_list::{Geometry, LayoutMode, ListConfig, RecycleList, TapResult};
use recycle_list_demos::{ConsoleScene, init_logging};

fn main() {
    init_logging();

    let geometry = Geometry::new(Size::new(320.0, 44.0))
        .with_spacing(Size::new(0.0, 4.0))
        .with_padding(Insets::new(0.0, 8.0, 0.0, 8.0));
    let config = ListConfig::new(LayoutMode::Vertical, geometry, Size::new(320.0, 480.0));
    let mut list: RecycleList<String, ConsoleScene> =
        match RecycleList::new(config, ConsoleScene::default()) {
            Ok(list) => list,
            Err(err) => {
                eprintln!("invalid list configuration: {err}");
                return;
            }
        };

    list.set_tap_handler(|index, record: &String| println!("tapped #{index}: {record}"));

    let rows: Vec<String> = (0..10_000).map(|i| format!("Row {i}")).collect();
    list.load_dataset(rows, 0);
    list.tick(100);
    println!(
        "capacity {} slots for {} rows, content height {:?}",
        list.capacity(),
        list.dataset().len(),
        list.content_extent().height
    );

    // Decelerating fling: velocity in content units per millisecond.
    let mut velocity = 6.0;
    let mut offset = 0.0;
    let mut now = 100;
    while velocity > 0.05 {
        now += 4;
        offset += velocity * 4.0;
        velocity *= 0.99;
        list.notify_offset_changed(Vec2::new(0.0, offset));
        if let Some(stats) = list.tick(now) {
            let window = list.current_window();
            println!(
                "t={now:>5}ms offset={offset:>8.1} window={:>4}..{:<4} rebound={}",
                window.start, window.end, stats.rebound
            );
        }
    }

    println!(
        "fling done: {} host moves, {} nodes ever created",
        list.host().moves,
        list.created_handles()
    );

    // Tap the first visible row.
    let window = list.current_window();
    if let Some(slot) = list.slot_for_index(window.start) {
        let at = Point::new(160.0, 0.0);
        list.pointer_down(None, slot, at, now);
        if let TapResult::Suppressed(_) = list.pointer_up(None, slot, at, now + 60) {
            println!("tap was suppressed");
        }
    }

    list.dispose();
}
