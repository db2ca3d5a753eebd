// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A photo-gallery style grid that fills rows first and scrolls vertically.
//!
//! Shows how reloading with a smaller dataset parks slots instead of
//! destroying them, and how the next load reuses them.
//!
//! Run:
//! - `cargo run -p recycle_list_demos --example grid_gallery`

use kurbo::{Insets, Size, Vec2};
use recycle_list::{Axis, Geometry, LayoutMode, ListConfig, RecycleList};
use recycle_list_demos::{ConsoleScene, init_logging};

fn main() {
    init_logging();

    let geometry = Geometry::new(Size::new(96.0, 96.0))
        .with_spacing(Size::new(8.0, 8.0))
        .with_padding(Insets::uniform(8.0));
    let config = ListConfig::new(
        LayoutMode::Grid(Axis::Horizontal),
        geometry,
        Size::new(420.0, 600.0),
    )
    .with_refresh_interval(50);
    let mut list: RecycleList<u32, ConsoleScene> =
        match RecycleList::new(config, ConsoleScene::default()) {
            Ok(list) => list,
            Err(err) => {
                eprintln!("invalid grid configuration: {err}");
                return;
            }
        };
    println!(
        "{} columns x {} rows = {} slots",
        list.layout().columns(),
        list.layout().rows(),
        list.capacity()
    );

    list.load_dataset((0..500).collect::<Vec<u32>>(), 0);
    list.tick(50);

    for (step, y) in [0.0, 300.0, 2_000.0, 50_000.0].into_iter().enumerate() {
        list.notify_offset_changed(Vec2::new(0.0, y));
        let now = 100 + 50 * step as u64;
        if let Some(stats) = list.tick(now) {
            let window = list.current_window();
            let first = list.layout().grid_cell(window.start);
            println!(
                "offset {y:>8.1}: photos {}..{} starting at row {} ({} rebound)",
                window.start, window.end, first.row, stats.rebound
            );
        }
    }

    list.load_dataset(vec![1_u32, 2, 3], 400);
    println!(
        "after small reload: {} active, {} live",
        list.slots().len(),
        list.live_handles()
    );
    list.load_dataset((0..500).collect::<Vec<u32>>(), 450);
    println!(
        "after full reload: {} live, {} ever created",
        list.live_handles(),
        list.created_handles()
    );
}
