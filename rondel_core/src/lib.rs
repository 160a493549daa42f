// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained scene core for rondel.
//!
//! This crate holds the pieces a renderer needs and nothing else:
//! - **Marks**: stable-identity drawables with resolved rect/text/path
//!   payloads.
//! - **Scene**: the retained previous frame, diffed against each new frame
//!   into `Enter`/`Update`/`Exit` changes.
//!
//! Interaction state and mark generation live upstream (`rondel_state`,
//! `rondel_charts`); a frontend feeds each regenerated frame through
//! [`Scene::tick`] and applies the diffs to whatever surface it draws on.
//! Text payloads store unshaped strings; shaping and layout are downstream
//! concerns.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor, TextBaseline,
    TextPayload,
};
pub use scene::{MarkDiff, Scene};
