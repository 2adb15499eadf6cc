// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{ConfigError, MapperConfig};
use crate::modes::{ScaleMode, ScrollPolicy};

/// Default margin, in input units, added around a region by
/// [`ViewportMapper::scroll_to_rect`].
pub const DEFAULT_SCROLL_MARGIN: f64 = 100.0;

/// Axis-aligned mapping from an input space onto an output viewport.
///
/// The forward transform is
/// `out = (x * scale_x + dx, y * scale_y + dy)` and the inverse is kept in
/// lockstep as `in = (x * inv_scale_x + inv_dx, y * inv_scale_y + inv_dy)`.
/// Every mutation funnels through [`ViewportMapper::update_matrix`], which
/// rewrites both directions together.
#[derive(Clone, Debug)]
pub struct ViewportMapper {
    in_size: Size,
    out_size: Size,
    cell: Vec2,
    min_size: f64,
    max_size: f64,
    limit_in_window: bool,
    limit_size: f64,
    scale_mode: ScaleMode,
    scroll_policy: ScrollPolicy,
    min_scale: f64,
    max_scale: f64,
    scale: f64,
    scale_x: f64,
    scale_y: f64,
    offset: Vec2,
    inv_scale_x: f64,
    inv_scale_y: f64,
    inv_offset: Vec2,
}

impl ViewportMapper {
    /// Creates a mapper and fits the input into the output with [`resize`].
    ///
    /// No validation is performed; see [`ViewportMapper::try_new`].
    ///
    /// [`resize`]: ViewportMapper::resize
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        let mut mapper = Self::new_silent(config);
        mapper.resize();
        mapper
    }

    /// Creates a mapper without computing the initial fit.
    ///
    /// The transform starts as the identity and the scale bounds as
    /// `[1, 1]` until an explicit operation (usually [`resize`]) runs.
    ///
    /// [`resize`]: ViewportMapper::resize
    #[must_use]
    pub fn new_silent(config: MapperConfig) -> Self {
        let cell = match config.scale_mode {
            ScaleMode::PerAxis => config.cell,
            ScaleMode::Uniform => Vec2::new(1.0, 1.0),
        };
        let mut mapper = Self {
            in_size: config.in_size,
            out_size: config.out_size,
            cell,
            min_size: config.min_size,
            max_size: config.max_size,
            limit_in_window: config.limit_in_window,
            limit_size: config.limit_size,
            scale_mode: config.scale_mode,
            scroll_policy: config.scroll_policy,
            min_scale: 1.0,
            max_scale: 1.0,
            scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            offset: Vec2::ZERO,
            inv_scale_x: 1.0,
            inv_scale_y: 1.0,
            inv_offset: Vec2::ZERO,
        };
        mapper.write_matrix(1.0, Vec2::ZERO);
        mapper
    }

    /// Validates `config` and then behaves like [`ViewportMapper::new`].
    pub fn try_new(config: MapperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the input space size.
    #[must_use]
    pub fn in_size(&self) -> Size {
        self.in_size
    }

    /// Returns the output space size.
    #[must_use]
    pub fn out_size(&self) -> Size {
        self.out_size
    }

    /// Returns the effective cell size (`(1, 1)` in uniform mode).
    #[must_use]
    pub fn cell(&self) -> Vec2 {
        self.cell
    }

    /// Returns the scale mode this mapper was built with.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Returns the policy used by [`ViewportMapper::scroll_to_rect`].
    #[must_use]
    pub fn scroll_policy(&self) -> ScrollPolicy {
        self.scroll_policy
    }

    /// Returns the configured minimum projected size.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Returns the configured maximum projected size.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    /// Returns whether window limiting is enabled.
    #[must_use]
    pub fn limit_in_window(&self) -> bool {
        self.limit_in_window
    }

    /// Enables or disables window limiting.
    ///
    /// Takes effect on the next matrix update; the current offset is left
    /// untouched.
    pub fn set_limit_in_window(&mut self, limit: bool) {
        self.limit_in_window = limit;
    }

    /// Returns the window limiting margin.
    #[must_use]
    pub fn limit_size(&self) -> f64 {
        self.limit_size
    }

    /// Sets the window limiting margin. Takes effect on the next matrix update.
    pub fn set_limit_size(&mut self, limit_size: f64) {
        self.limit_size = limit_size;
    }

    /// Returns the base (uniform) scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the effective horizontal scale, `scale * cell.x`.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Returns the effective vertical scale, `scale * cell.y`.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Returns the horizontal translation in output space.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.offset.x
    }

    /// Returns the vertical translation in output space.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.offset.y
    }

    /// Returns the translation in output space.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns `1 / scale_x`.
    #[must_use]
    pub fn inv_scale_x(&self) -> f64 {
        self.inv_scale_x
    }

    /// Returns `1 / scale_y`.
    #[must_use]
    pub fn inv_scale_y(&self) -> f64 {
        self.inv_scale_y
    }

    /// Returns the horizontal translation of the inverse transform.
    #[must_use]
    pub fn inv_dx(&self) -> f64 {
        self.inv_offset.x
    }

    /// Returns the vertical translation of the inverse transform.
    #[must_use]
    pub fn inv_dy(&self) -> f64 {
        self.inv_offset.y
    }

    /// Returns the lower bound enforced on [`ViewportMapper::scale`] by zooming.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the upper bound enforced on [`ViewportMapper::scale`] by zooming.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns the input-to-output transform as an [`Affine`].
    #[must_use]
    pub fn in_to_out_transform(&self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.offset.x,
            self.offset.y,
        ])
    }

    /// Returns the output-to-input transform as an [`Affine`].
    #[must_use]
    pub fn out_to_in_transform(&self) -> Affine {
        Affine::new([
            self.inv_scale_x,
            0.0,
            0.0,
            self.inv_scale_y,
            self.inv_offset.x,
            self.inv_offset.y,
        ])
    }

    /// Fits the whole input into the output, centered, preserving aspect
    /// ratio (a "contain" fit).
    ///
    /// Also recomputes the scale bounds so that the fit scale lies inside
    /// them and either input dimension can be zoomed between `min_size`
    /// and `max_size` output pixels.
    pub fn resize(&mut self) {
        let Size {
            width: in_w,
            height: in_h,
        } = self.in_size;
        let Size {
            width: out_w,
            height: out_h,
        } = self.out_size;

        let scale = if out_w / out_h > in_w / in_h {
            out_h / in_h
        } else {
            out_w / in_w
        };

        self.min_scale = scale.min(self.min_size / in_w).min(self.min_size / in_h);
        self.max_scale = scale.max(self.max_size / in_w).max(self.max_size / in_h);

        self.update_matrix(
            scale,
            Vec2::new((out_w - in_w * scale) / 2.0, (out_h - in_h * scale) / 2.0),
        );
    }

    /// Pans by `delta` output pixels, keeping the current scale.
    pub fn translate(&mut self, delta: Vec2) {
        self.update_matrix(self.scale, self.offset + delta);
    }

    /// Scales by `ratio` about the output-space `anchor`.
    ///
    /// The anchor keeps its output position. If the resulting scale would
    /// leave `[min_scale, max_scale]` the ratio is reduced so the scale
    /// lands exactly on the bound.
    pub fn zoom(&mut self, anchor: Point, ratio: f64) {
        let scale = self.scale;
        let target = scale * ratio;
        let new_scale = if target > self.max_scale {
            self.max_scale
        } else if target < self.min_scale {
            self.min_scale
        } else {
            target
        };
        let ratio = if new_scale == target {
            ratio
        } else {
            new_scale / scale
        };

        let anchor = anchor.to_vec2();
        self.update_matrix(new_scale, (self.offset - anchor) * ratio + anchor);
    }

    /// Sets the base scale (clamped to the scale bounds) and centers the
    /// input-space point `center` in the output.
    pub fn zoom_to_in_point(&mut self, center: Point, scale: f64) {
        let scale = scale.max(self.min_scale).min(self.max_scale);
        let half = self.out_center().to_vec2();
        self.update_matrix(
            scale,
            Vec2::new(
                half.x - center.x * scale * self.cell.x,
                half.y - center.y * scale * self.cell.y,
            ),
        );
    }

    /// Centers the input-space region `roi` in the output at the largest
    /// scale that fits it plus [`DEFAULT_SCROLL_MARGIN`].
    pub fn scroll_to_rect(&mut self, roi: Rect) {
        self.scroll_to_rect_with_margin(roi, DEFAULT_SCROLL_MARGIN);
    }

    /// Centers the input-space region `roi` in the output at the largest
    /// scale that fits `roi.width() + margin` by `roi.height() + margin`.
    ///
    /// The configured [`ScrollPolicy`] decides how the scale bounds apply.
    pub fn scroll_to_rect_with_margin(&mut self, roi: Rect, margin: f64) {
        let fit = (self.out_size.width / (roi.width() + margin))
            .min(self.out_size.height / (roi.height() + margin));
        let center = roi.center();
        match self.scroll_policy {
            ScrollPolicy::CenterInInput => self.zoom_to_in_point(center, fit),
            ScrollPolicy::ZoomAboutCenter => {
                let half = self.out_center();
                self.update_matrix(
                    1.0,
                    Vec2::new(
                        half.x - center.x * self.cell.x,
                        half.y - center.y * self.cell.y,
                    ),
                );
                self.zoom(half, fit);
            }
        }
    }

    /// Replaces the transform with `scale` and `offset`.
    ///
    /// With window limiting enabled the offset is first clamped per axis to
    /// `[limit_size - in_w * scale, out_w - limit_size]` (and likewise for
    /// `y`). The lower bound is measured with the base scale and ignores the
    /// cell size, so with a cell of `1` at least `limit_size` output pixels
    /// of the input stay visible on every edge. With a cell below `1` the
    /// content can leave the output entirely. The inverse transform is
    /// recomputed in the same call.
    pub fn update_matrix(&mut self, scale: f64, mut offset: Vec2) {
        if self.limit_in_window {
            let limit = self.limit_size;
            offset.x = offset
                .x
                .max(-self.in_size.width * scale + limit)
                .min(self.out_size.width - limit);
            offset.y = offset
                .y
                .max(-self.in_size.height * scale + limit)
                .min(self.out_size.height - limit);
        }
        self.write_matrix(scale, offset);
    }

    /// Returns `true` if `pt` lies in `[0, in_w) x [0, in_h)`.
    #[must_use]
    pub fn in_contains(&self, pt: Point) -> bool {
        half_open_contains(self.in_size, pt)
    }

    /// Returns `true` if `pt` lies in `[0, out_w) x [0, out_h)`.
    #[must_use]
    pub fn out_contains(&self, pt: Point) -> bool {
        half_open_contains(self.out_size, pt)
    }

    /// Maps a single input-space point into output space.
    #[must_use]
    pub fn in_to_out_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale_x + self.offset.x,
            pt.y * self.scale_y + self.offset.y,
        )
    }

    /// Maps a single output-space point into input space.
    #[must_use]
    pub fn out_to_in_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.inv_scale_x + self.inv_offset.x,
            pt.y * self.inv_scale_y + self.inv_offset.y,
        )
    }

    /// Returns the input-space rectangle currently covered by the output.
    #[must_use]
    pub fn visible_in_rect(&self) -> Rect {
        Rect::from_points(
            self.out_to_in_point(Point::ORIGIN),
            self.out_to_in_point(Point::new(self.out_size.width, self.out_size.height)),
        )
    }

    /// Maps interleaved input coordinates `[x0, y0, x1, y1, ...]` into
    /// output space, truncating each result toward zero.
    ///
    /// A trailing unpaired value is ignored.
    #[must_use]
    pub fn trans_in_to_out(&self, coords: &[f64]) -> Vec<i32> {
        trans_coords(
            coords,
            Vec2::new(self.scale_x, self.scale_y),
            self.offset,
        )
    }

    /// Maps interleaved output coordinates `[x0, y0, x1, y1, ...]` into
    /// input space, truncating each result toward zero.
    ///
    /// A trailing unpaired value is ignored.
    #[must_use]
    pub fn trans_out_to_in(&self, coords: &[f64]) -> Vec<i32> {
        trans_coords(
            coords,
            Vec2::new(self.inv_scale_x, self.inv_scale_y),
            self.inv_offset,
        )
    }

    /// Snapshot of the current mapper state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportMapperDebugInfo {
        ViewportMapperDebugInfo {
            in_size: self.in_size,
            out_size: self.out_size,
            cell: self.cell,
            scale_mode: self.scale_mode,
            scroll_policy: self.scroll_policy,
            scale: self.scale,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            offset: self.offset,
            inv_scale_x: self.inv_scale_x,
            inv_scale_y: self.inv_scale_y,
            inv_offset: self.inv_offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            limit_in_window: self.limit_in_window,
            limit_size: self.limit_size,
            visible_in_rect: self.visible_in_rect(),
        }
    }

    fn out_center(&self) -> Point {
        Point::new(self.out_size.width / 2.0, self.out_size.height / 2.0)
    }

    fn write_matrix(&mut self, scale: f64, offset: Vec2) {
        self.scale = scale;
        self.scale_x = scale * self.cell.x;
        self.scale_y = scale * self.cell.y;
        self.offset = offset;
        self.inv_scale_x = 1.0 / self.scale_x;
        self.inv_scale_y = 1.0 / self.scale_y;
        self.inv_offset = Vec2::new(
            -offset.x * self.inv_scale_x,
            -offset.y * self.inv_scale_y,
        );
    }
}

/// Debug snapshot of a [`ViewportMapper`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportMapperDebugInfo {
    /// Input space size.
    pub in_size: Size,
    /// Output space size.
    pub out_size: Size,
    /// Effective cell size.
    pub cell: Vec2,
    /// Scale mode the mapper was built with.
    pub scale_mode: ScaleMode,
    /// Policy used by region scrolling.
    pub scroll_policy: ScrollPolicy,
    /// Base scale.
    pub scale: f64,
    /// Effective horizontal scale.
    pub scale_x: f64,
    /// Effective vertical scale.
    pub scale_y: f64,
    /// Forward translation in output space.
    pub offset: Vec2,
    /// Inverse horizontal scale.
    pub inv_scale_x: f64,
    /// Inverse vertical scale.
    pub inv_scale_y: f64,
    /// Inverse translation in input space.
    pub inv_offset: Vec2,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Whether window limiting is enabled.
    pub limit_in_window: bool,
    /// Window limiting margin.
    pub limit_size: f64,
    /// Input-space rectangle covered by the output.
    pub visible_in_rect: Rect,
}

fn half_open_contains(size: Size, pt: Point) -> bool {
    pt.x >= 0.0 && pt.x < size.width && pt.y >= 0.0 && pt.y < size.height
}

fn trans_coords(coords: &[f64], scale: Vec2, offset: Vec2) -> Vec<i32> {
    let mut out = Vec::with_capacity(coords.len() & !1);
    for pair in coords.chunks_exact(2) {
        out.push(truncate(pair[0] * scale.x + offset.x));
        out.push(truncate(pair[1] * scale.y + offset.y));
    }
    out
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "truncation toward zero is the documented rounding"
)]
fn truncate(value: f64) -> i32 {
    value as i32
}
