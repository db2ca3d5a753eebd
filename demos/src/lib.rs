// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the `recycle_list` demos: a printing scene host and
//! logging setup.

use kurbo::Point;
use recycle_list::{ItemRenderer, SlotHost};
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that honours `RUST_LOG`, defaulting to `debug`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // A second installation in the same process is harmless for a demo.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A pretend scene node showing one text label.
#[derive(Debug)]
pub struct LabelNode {
    /// Node id assigned by [`ConsoleScene`].
    pub id: usize,
    /// Current anchor position in content space.
    pub position: Point,
    /// Whether the node is parented to the content node.
    pub attached: bool,
    /// The displayed text.
    pub text: String,
}

impl<T: std::fmt::Display> ItemRenderer<T> for LabelNode {
    fn bind(&mut self, record: &T) {
        self.text = record.to_string();
    }

    fn is_clickable(&self) -> bool {
        true
    }
}

/// A scene host that keeps counters and logs node creation.
#[derive(Debug, Default)]
pub struct ConsoleScene {
    next_id: usize,
    /// Number of `set_position` calls.
    pub moves: usize,
}

impl SlotHost for ConsoleScene {
    type Handle = LabelNode;

    fn create(&mut self) -> LabelNode {
        self.next_id += 1;
        tracing::info!(node = self.next_id, "instantiated item template");
        LabelNode {
            id: self.next_id,
            position: Point::ZERO,
            attached: false,
            text: String::new(),
        }
    }

    fn set_position(&mut self, handle: &mut LabelNode, position: Point) {
        handle.position = position;
        self.moves += 1;
    }

    fn set_attached(&mut self, handle: &mut LabelNode, attached: bool) {
        handle.attached = attached;
    }
}
