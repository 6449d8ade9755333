// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Input: the input vocabulary shared by Trellis frame trees.
//!
//! ## Overview
//!
//! This crate defines what an input event looks like once a platform adapter has normalized
//! it, and a small registry that maps keys to handlers.
//!
//! - [`VirtualKey`]: closed set of abstract codes (mouse buttons, pointer motion, keyboard keys,
//!   and [`VirtualKey::Dummy`] for anything unmapped).
//! - [`InputState`]: `Press`, `Release`, or `Repeat`.
//! - [`OperationParam`]: one event record, with an optional pointer position.
//! - [`InputEvent`]: per-owner `VirtualKey` → [`Callback`] table with at most one callback per key.
//!
//! Translating DOM or OS events into these types is the adapter's job and lives outside this crate.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod key;
mod param;

pub use event::{Callback, InputError, InputEvent};
pub use key::VirtualKey;
pub use param::{InputState, OperationParam};
