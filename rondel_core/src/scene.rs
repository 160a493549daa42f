// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained scene state and frame diffing.
//!
//! The scene keeps the previous frame's marks keyed by id. Each call to
//! [`Scene::tick`] replaces that frame wholesale and reports the per-mark
//! changes, so a renderer can apply incremental updates instead of
//! repainting from scratch. Frames are regenerated in full by the caller;
//! the scene never mutates marks on its own.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A per-mark change produced by [`Scene::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark id present this frame but not the previous one.
    Enter {
        /// The entering mark's id.
        id: MarkId,
        /// Payload discriminant.
        kind: MarkKind,
        /// Rendering order hint.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Geometry bounds, when derivable without text shaping.
        bounds: Option<Rect>,
    },
    /// A mark id present in both frames whose payload or z-index changed.
    Update {
        /// The updated mark's id.
        id: MarkId,
        /// Payload discriminant of the new payload.
        kind: MarkKind,
        /// Rendering order hint after the update.
        new_z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Geometry bounds of the new payload.
        bounds: Option<Rect>,
    },
    /// A mark id present in the previous frame but not this one.
    Exit {
        /// The exiting mark's id.
        id: MarkId,
    },
}

impl MarkDiff {
    /// The id of the mark this diff concerns.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id } => *id,
        }
    }
}

/// The retained previous frame, diffed against each new frame.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Replaces the retained frame with `frame` and returns the changes.
    ///
    /// Unchanged marks produce no diff. If an id occurs more than once in
    /// one frame, the last occurrence wins. Diffs are sorted by mark id so
    /// consumers see a deterministic sequence.
    pub fn tick(&mut self, frame: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, (i32, MarkPayload)> = HashMap::with_capacity(frame.len());
        for mark in frame {
            next.insert(mark.id, (mark.z_index, mark.payload));
        }

        let mut diffs = Vec::new();
        for (id, (z_index, payload)) in &next {
            match self.marks.get(id) {
                None => diffs.push(MarkDiff::Enter {
                    id: *id,
                    kind: payload.kind(),
                    z_index: *z_index,
                    new: Box::new(payload.clone()),
                    bounds: payload.bounds(),
                }),
                Some((prev_z, prev_payload)) => {
                    if prev_z != z_index || prev_payload != payload {
                        diffs.push(MarkDiff::Update {
                            id: *id,
                            kind: payload.kind(),
                            new_z_index: *z_index,
                            new: Box::new(payload.clone()),
                            bounds: payload.bounds(),
                        });
                    }
                }
            }
        }
        for id in self.marks.keys() {
            if !next.contains_key(id) {
                diffs.push(MarkDiff::Exit { id: *id });
            }
        }
        diffs.sort_by_key(MarkDiff::id);

        self.marks = next;
        diffs
    }

    /// Paint order for the retained frame: ascending `(z_index, id)`.
    pub fn paint_order(&self) -> Vec<MarkId> {
        let mut ids: Vec<MarkId> = self.marks.keys().copied().collect();
        ids.sort_by_key(|id| {
            let (z_index, _) = &self.marks[id];
            (*z_index, *id)
        });
        ids
    }

    /// The retained payload for a mark, if present.
    pub fn payload(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|(_, payload)| payload)
    }

    /// The retained z-index for a mark, if present.
    pub fn z_index(&self, id: MarkId) -> Option<i32> {
        self.marks.get(&id).map(|(z_index, _)| *z_index)
    }
}
