// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, registry wiring, dispatch.

use alloc::{vec, vec::Vec};
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use trellis_input::{InputError, InputEvent, OperationParam, VirtualKey};

use crate::types::{FrameError, FrameId};
use crate::util::contains_point_inclusive;

/// Append-only tree of rectangular frames.
///
/// Every frame has a world-space [`Rect`], an ordered list of children, an optional parent,
/// and its own [`InputEvent`] registry. Children added later sit on top of children added
/// earlier. Frames are never removed or reparented; a [`FrameId`] is valid for as long as
/// the tree lives. A tree may hold several roots.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use trellis_frame::FrameTree;
/// use trellis_input::{InputState, OperationParam, VirtualKey};
///
/// let mut tree = FrameTree::new();
/// let root = tree.insert(None, Rect::from_origin_size((0.0, 0.0), (100.0, 100.0)));
/// let button = tree.insert(Some(root), Rect::from_origin_size((10.0, 10.0), (30.0, 20.0)));
/// tree.connect_input(button, VirtualKey::MouseLeft, |p| p.is_press())
///     .unwrap();
///
/// let inside = OperationParam::pointer(VirtualKey::MouseLeft, InputState::Press, Point::new(15.0, 15.0));
/// let outside = inside.with_position(Point::new(90.0, 90.0));
/// assert_eq!(tree.route_input(root, &inside), Some(button));
/// assert!(!tree.process_input(root, &outside));
/// ```
#[derive(Debug, Default)]
pub struct FrameTree {
    frames: Vec<Frame>,
}

#[derive(Debug)]
struct Frame {
    rect: Rect,
    parent: Option<FrameId>,
    children: SmallVec<[FrameId; 4]>,
    input: InputEvent,
}

impl Frame {
    fn new(rect: Rect, parent: Option<FrameId>) -> Self {
        Self {
            rect,
            parent,
            children: SmallVec::new(),
            input: InputEvent::new(),
        }
    }
}

impl FrameTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame covering `rect`, as a child of `parent` or as a new root if `None`.
    ///
    /// The new frame is appended to `parent` before this returns, so it is never observable
    /// in a detached state. Its parent link is fixed from here on.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn insert(&mut self, parent: Option<FrameId>, rect: Rect) -> FrameId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "FrameId uses 32-bit indices by design."
        )]
        let id = FrameId(self.frames.len() as u32);
        if let Some(p) = parent {
            // Validate before pushing so a bad parent leaves the tree untouched.
            let _ = self.frame(p);
        }
        self.frames.push(Frame::new(rect, parent));
        if let Some(p) = parent {
            self.frame_mut(p).children.push(id);
        }
        id
    }

    /// Append `child` to the children of `parent`; it becomes the topmost child.
    ///
    /// This does not change `child`'s recorded parent. It fails with
    /// [`FrameError::AlreadyAppended`] if `child` is already among `parent`'s children, and
    /// with [`FrameError::WouldCycle`] if `parent` is `child` itself or lies in `child`'s
    /// subtree. The tree is unchanged on failure.
    ///
    /// # Panics
    ///
    /// Panics if either identifier does not belong to this tree.
    pub fn append(&mut self, parent: FrameId, child: FrameId) -> Result<(), FrameError> {
        let _ = self.frame(child);
        if self.frame(parent).children.contains(&child) {
            log::debug!("rejected append: {child:?} is already a child of {parent:?}");
            return Err(FrameError::AlreadyAppended { parent, child });
        }
        if self.subtree_contains(child, parent) {
            log::debug!("rejected append: {child:?} under {parent:?} would cycle");
            return Err(FrameError::WouldCycle { parent, child });
        }
        self.frame_mut(parent).children.push(child);
        Ok(())
    }

    /// Register `callback` for `code` on frame `id`.
    ///
    /// See [`InputEvent::connect`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn connect_input(
        &mut self,
        id: FrameId,
        code: VirtualKey,
        callback: impl FnMut(&OperationParam) -> bool + 'static,
    ) -> Result<(), InputError> {
        self.frame_mut(id).input.connect(code, callback)
    }

    /// Remove the callback for `code` on frame `id`.
    ///
    /// See [`InputEvent::disconnect`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn disconnect_input(&mut self, id: FrameId, code: VirtualKey) -> Result<(), InputError> {
        self.frame_mut(id).input.disconnect(code)
    }

    /// Remove every callback on frame `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn disconnect_input_all(&mut self, id: FrameId) {
        self.frame_mut(id).input.disconnect_all();
    }

    /// Dispatch `param` through the subtree rooted at `id`.
    ///
    /// Returns `true` if some frame consumed the event. Equivalent to
    /// `self.route_input(id, param).is_some()`.
    pub fn process_input(&mut self, id: FrameId, param: &OperationParam) -> bool {
        self.route_input(id, param).is_some()
    }

    /// Dispatch `param` through the subtree rooted at `id` and return the frame that consumed it.
    ///
    /// For each frame, starting at `id`:
    ///
    /// 1. Children are tried first, most recently added first, each recursively. The first
    ///    child subtree that consumes the event ends the whole dispatch.
    /// 2. If `param.position` is `Some` and lies outside the frame's rect (edges count as
    ///    inside), the frame itself is skipped. Events without a position skip this check.
    /// 3. Otherwise the frame's registry decides, and its callback's verdict is final.
    ///
    /// A child's rect is not clipped to its parent's: a child that sticks out of its parent
    /// still receives pointer events over the protruding area, and children are tried even
    /// when the point misses the parent entirely.
    ///
    /// No state is kept between calls.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn route_input(&mut self, id: FrameId, param: &OperationParam) -> Option<FrameId> {
        let target = self.route_recursive(id, param);
        match target {
            Some(t) => log::trace!(
                "{:?}/{:?} at {:?} consumed by {t:?}",
                param.code,
                param.state,
                param.position
            ),
            None => log::trace!(
                "{:?}/{:?} at {:?} not consumed under {id:?}",
                param.code,
                param.state,
                param.position
            ),
        }
        target
    }

    /// List the frames of the subtree at `id` whose rect contains `point`, in the order
    /// [`FrameTree::route_input`] would offer them a pointer event (topmost first).
    ///
    /// No callbacks are invoked.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn frames_at(&self, id: FrameId, point: Point) -> Vec<FrameId> {
        let mut out = Vec::new();
        self.collect_at(id, point, &mut out);
        out
    }

    /// Returns the rect of a frame, or `None` if `id` is not from this tree.
    pub fn rect(&self, id: FrameId) -> Option<Rect> {
        self.frames.get(id.idx()).map(|f| f.rect)
    }

    /// Returns the top-left corner of a frame's rect.
    pub fn position(&self, id: FrameId) -> Option<Point> {
        self.rect(id).map(|r| r.origin())
    }

    /// Returns the size of a frame's rect.
    pub fn size(&self, id: FrameId) -> Option<Size> {
        self.rect(id).map(|r| r.size())
    }

    /// Returns the parent a frame was created under, or `None` for roots and foreign ids.
    pub fn parent_of(&self, id: FrameId) -> Option<FrameId> {
        self.frames.get(id.idx()).and_then(|f| f.parent)
    }

    /// Get the children of a frame in insertion order (bottom to top), or an empty slice
    /// if `id` is not from this tree.
    pub fn children_of(&self, id: FrameId) -> &[FrameId] {
        self.frames
            .get(id.idx())
            .map(|f| f.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate frames created without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter(|(_, f)| f.parent.is_none())
            .map(|(i, _)| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "FrameId uses 32-bit indices by design."
                )]
                let idx = i as u32;
                FrameId(idx)
            })
    }

    /// Returns the input registry of a frame.
    pub fn input(&self, id: FrameId) -> Option<&InputEvent> {
        self.frames.get(id.idx()).map(|f| &f.input)
    }

    /// Returns the input registry of a frame for modification.
    pub fn input_mut(&mut self, id: FrameId) -> Option<&mut InputEvent> {
        self.frames.get_mut(id.idx()).map(|f| &mut f.input)
    }

    /// Returns true if `id` was issued by this tree.
    pub fn contains(&self, id: FrameId) -> bool {
        id.idx() < self.frames.len()
    }

    /// Number of frames in the tree.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the tree has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    // --- internals ---

    fn frame(&self, id: FrameId) -> &Frame {
        self.frames.get(id.idx()).expect("dangling FrameId")
    }

    fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        self.frames.get_mut(id.idx()).expect("dangling FrameId")
    }

    fn route_recursive(&mut self, id: FrameId, param: &OperationParam) -> Option<FrameId> {
        // Callbacks cannot reach the tree, so the child list is stable for the whole walk.
        let count = self.frame(id).children.len();
        for i in (0..count).rev() {
            let child = self.frame(id).children[i];
            if let Some(hit) = self.route_recursive(child, param) {
                return Some(hit);
            }
        }

        let frame = self.frame_mut(id);
        if let Some(pt) = param.position
            && !contains_point_inclusive(frame.rect, pt)
        {
            return None;
        }
        frame.input.process(param).then_some(id)
    }

    fn collect_at(&self, id: FrameId, point: Point, out: &mut Vec<FrameId>) {
        let frame = self.frame(id);
        for &child in frame.children.iter().rev() {
            self.collect_at(child, point, out);
        }
        if contains_point_inclusive(frame.rect, point) {
            out.push(id);
        }
    }

    /// Whether `needle` is `root` or reachable from it through child lists.
    fn subtree_contains(&self, root: FrameId, needle: FrameId) -> bool {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id == needle {
                return true;
            }
            stack.extend(self.frame(id).children.iter().copied());
        }
        false
    }
}
