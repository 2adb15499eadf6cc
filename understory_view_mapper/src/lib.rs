// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view_mapper --heading-base-level=0

//! Understory View Mapper: an affine mapping between an input space and an
//! output viewport.
//!
//! The input space is whatever is being viewed (image pixels, data cells,
//! plot units) with a fixed width and height. The output space is the
//! viewport it is shown in, usually device pixels. [`ViewportMapper`] keeps
//! the per-axis scale and translation between the two, and their inverse,
//! and offers:
//! - A centered "contain" fit of the whole input ([`ViewportMapper::resize`]).
//! - Panning, zooming about an output point, and zooming to an absolute scale
//!   about an input point.
//! - Scrolling an input region of interest into the middle of the output.
//! - Optional window limiting, which keeps part of the input on screen.
//! - Coordinate translation in both directions, for single points or for
//!   interleaved `[x0, y0, x1, y1, ...]` buffers.
//!
//! It does **not** render or listen to input. Callers translate drag and
//! wheel events into [`ViewportMapper::translate`] / [`ViewportMapper::zoom`]
//! calls and feed [`ViewportMapper::in_to_out_transform`] (or the raw
//! `scale_x`, `scale_y`, `dx`, `dy` accessors) into their drawing context.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_view_mapper::{MapperConfig, ViewportMapper};
//!
//! // A 100x50 image shown in a 200x200 view.
//! let config = MapperConfig::new(Size::new(100.0, 50.0), Size::new(200.0, 200.0));
//! let mut mapper = ViewportMapper::new(config);
//!
//! // Width-constrained fit, centered vertically.
//! assert_eq!(mapper.scale(), 2.0);
//! assert_eq!(mapper.offset(), Vec2::new(0.0, 50.0));
//!
//! // Zoom in around the view center, then pan.
//! mapper.zoom(Point::new(100.0, 100.0), 1.5);
//! mapper.translate(Vec2::new(-20.0, 0.0));
//!
//! // Which image pixel is under the cursor?
//! let pixel = mapper.trans_out_to_in(&[120.0, 80.0]);
//! assert_eq!(pixel.len(), 2);
//! ```
//!
//! ## Scale modes
//!
//! [`MapperConfig::new`] honors a per-axis cell size, so a grid of `2x1`
//! cells can be stretched horizontally on top of the base scale.
//! [`MapperConfig::uniform`] pins the cell size to `1` and switches region
//! scrolling to [`ScrollPolicy::ZoomAboutCenter`]. See [`ScrollPolicy`]:
//! the two policies only diverge when window limiting is enabled.
//!
//! ## Degenerate sizes
//!
//! [`ViewportMapper::new`] accepts any configuration. Zero or negative sizes
//! produce non-finite scale and offset values that propagate silently. Use
//! [`ViewportMapper::try_new`] or [`MapperConfig::validate`] to reject them
//! up front.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod mapper;
mod modes;

pub use config::{ConfigError, DEFAULT_LIMIT_SIZE, DEFAULT_MIN_SIZE, MapperConfig};
pub use mapper::{DEFAULT_SCROLL_MARGIN, ViewportMapper, ViewportMapperDebugInfo};
pub use modes::{ScaleMode, ScrollPolicy};
