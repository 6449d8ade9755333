// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Frame: an append-only tree of rectangles that routes input to the topmost taker.
//!
//! A [`FrameTree`] holds frames. Each frame has a world-space rect, ordered children, a
//! parent link fixed at creation, and its own [`trellis_input::InputEvent`] registry.
//! Input enters through [`FrameTree::process_input`] on a root and walks the tree
//! depth-first, topmost child first, until some frame's callback returns `true`.
//!
//! ## Dispatch rules
//!
//! - Later-added children are on top and are asked first, before earlier siblings and
//!   before their parent.
//! - A pointer event (one with a position) only reaches a frame's own registry if the point
//!   is inside that frame's rect, edges included. Keyboard events reach every frame in order.
//! - Children are **not** clipped to their parent: a child is tried even when the point
//!   misses its parent.
//! - The first `true` ends the dispatch. `false` from every candidate is the normal
//!   "nobody wanted it" result.
//!
//! ## Not a layout engine
//!
//! Rects are supplied by the caller and are all in one shared space; no transform is applied
//! between parent and child, and nothing is measured or arranged here. Rendering is also
//! out of scope: callers walk [`FrameTree::children_of`] to paint.
//!
//! ## API overview
//!
//! - [`FrameTree::insert`] → [`FrameId`]; [`FrameTree::append`] for extra links.
//! - [`FrameTree::connect_input`] / [`FrameTree::disconnect_input`] /
//!   [`FrameTree::disconnect_input_all`].
//! - [`FrameTree::process_input`] and [`FrameTree::route_input`] (which also reports the
//!   consuming frame).
//! - [`FrameTree::frames_at`] lists hit frames in dispatch order without running callbacks.
//! - [`FrameError`] for structural misuse.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;
mod util;

pub use tree::FrameTree;
pub use types::{FrameError, FrameId};
