// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether per-axis cell scaling participates in the mapping.
///
/// Consulted by [`crate::MapperConfig`] when building a [`crate::ViewportMapper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Honor the configured cell size: `scale_x = scale * cell.x` and
    /// `scale_y = scale * cell.y`.
    #[default]
    PerAxis,
    /// Ignore any configured cell size; both axes use the base scale.
    Uniform,
}

/// How [`crate::ViewportMapper::scroll_to_rect`] brings a region into view.
///
/// Both policies pick the same fit scale, clamp it to
/// `[min_scale, max_scale]` the same way, and place the region center at the
/// output center. They only diverge under window limiting, when the
/// intermediate reset of [`ScrollPolicy::ZoomAboutCenter`] gets clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollPolicy {
    /// Clamp the fit scale into the scale bounds and center the region at
    /// that scale in one step.
    #[default]
    CenterInInput,
    /// Reset to scale `1.0` with the region centered, then zoom about the
    /// output center by the fit scale.
    ///
    /// The intermediate reset is itself subject to window limiting. If it is
    /// clamped, the zoom carries that displacement along and the region ends
    /// up off center.
    ZoomAboutCenter,
}
