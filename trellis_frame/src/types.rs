// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the frame tree: identifiers and structural errors.

/// Identifier for a frame in a [`FrameTree`](crate::FrameTree).
///
/// Frames are never removed, so an identifier stays valid for the lifetime of the tree
/// that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub(crate) u32);

impl FrameId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Structural failures from [`FrameTree::append`](crate::FrameTree::append).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// `child` is already one of `parent`'s children.
    #[error("{child:?} is already a child of {parent:?}")]
    AlreadyAppended {
        /// Frame that was being appended to.
        parent: FrameId,
        /// Frame that was being appended.
        child: FrameId,
    },
    /// Appending would make `parent` reachable from its own subtree.
    #[error("appending {child:?} to {parent:?} would create a cycle")]
    WouldCycle {
        /// Frame that was being appended to.
        parent: FrameId,
        /// Frame that was being appended.
        child: FrameId,
    },
}
