// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Size, Vec2};

use crate::modes::{ScaleMode, ScrollPolicy};

/// Default clamp margin, in output pixels, used when window limiting is on.
pub const DEFAULT_LIMIT_SIZE: f64 = 100.0;

/// Default smallest output-space size either input dimension may shrink to.
pub const DEFAULT_MIN_SIZE: f64 = 1.0;

/// Construction parameters for a [`crate::ViewportMapper`].
///
/// Built with [`MapperConfig::new`] or [`MapperConfig::uniform`] and refined
/// with the `with_*` methods:
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use understory_view_mapper::MapperConfig;
///
/// let config = MapperConfig::new(Size::new(640.0, 480.0), Size::new(800.0, 600.0))
///     .with_cell(Vec2::new(2.0, 1.0))
///     .with_size_limits(16.0, 20_000.0)
///     .with_limit_in_window(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperConfig {
    pub(crate) in_size: Size,
    pub(crate) out_size: Size,
    pub(crate) cell: Vec2,
    pub(crate) min_size: f64,
    pub(crate) max_size: f64,
    pub(crate) limit_in_window: bool,
    pub(crate) limit_size: f64,
    pub(crate) scale_mode: ScaleMode,
    pub(crate) scroll_policy: ScrollPolicy,
}

impl MapperConfig {
    /// Creates a per-axis configuration mapping `in_size` onto `out_size`.
    ///
    /// - Cell size is `(1, 1)`.
    /// - Size limits are `[1, +inf]`.
    /// - Window limiting is off, with a margin of `100`.
    #[must_use]
    pub fn new(in_size: Size, out_size: Size) -> Self {
        Self {
            in_size,
            out_size,
            cell: Vec2::new(1.0, 1.0),
            min_size: DEFAULT_MIN_SIZE,
            max_size: f64::INFINITY,
            limit_in_window: false,
            limit_size: DEFAULT_LIMIT_SIZE,
            scale_mode: ScaleMode::PerAxis,
            scroll_policy: ScrollPolicy::CenterInInput,
        }
    }

    /// Creates a uniform-scale configuration.
    ///
    /// The cell size is pinned to `(1, 1)` and region scrolling uses
    /// [`ScrollPolicy::ZoomAboutCenter`].
    #[must_use]
    pub fn uniform(in_size: Size, out_size: Size) -> Self {
        Self {
            scale_mode: ScaleMode::Uniform,
            scroll_policy: ScrollPolicy::ZoomAboutCenter,
            ..Self::new(in_size, out_size)
        }
    }

    /// Sets the per-axis cell size. Ignored in [`ScaleMode::Uniform`].
    #[must_use]
    pub fn with_cell(mut self, cell: Vec2) -> Self {
        if self.scale_mode == ScaleMode::PerAxis {
            self.cell = cell;
        }
        self
    }

    /// Sets the smallest and largest output-space size an input dimension
    /// may be zoomed to.
    ///
    /// A value of `0.0` or `NaN` falls back to the default for that bound
    /// (`1.0` for `min`, `+inf` for `max`).
    #[must_use]
    pub fn with_size_limits(mut self, min: f64, max: f64) -> Self {
        self.min_size = unset_or(min, DEFAULT_MIN_SIZE);
        self.max_size = unset_or(max, f64::INFINITY);
        self
    }

    /// Enables or disables window limiting.
    #[must_use]
    pub fn with_limit_in_window(mut self, limit: bool) -> Self {
        self.limit_in_window = limit;
        self
    }

    /// Sets the window limiting margin. An explicit `0.0` is honored.
    #[must_use]
    pub fn with_limit_size(mut self, limit_size: f64) -> Self {
        self.limit_size = limit_size;
        self
    }

    /// Sets the policy used by region scrolling.
    #[must_use]
    pub fn with_scroll_policy(mut self, policy: ScrollPolicy) -> Self {
        self.scroll_policy = policy;
        self
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

    /// Returns the effective cell size.
    #[must_use]
    pub fn cell(&self) -> Vec2 {
        self.cell
    }

    /// Returns the scale mode.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Returns the minimum projected size.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Returns the maximum projected size.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    /// Returns whether window limiting is enabled.
    #[must_use]
    pub fn limit_in_window(&self) -> bool {
        self.limit_in_window
    }

    /// Returns the window limiting margin.
    #[must_use]
    pub fn limit_size(&self) -> f64 {
        self.limit_size
    }

    /// Returns the region scrolling policy.
    #[must_use]
    pub fn scroll_policy(&self) -> ScrollPolicy {
        self.scroll_policy
    }

    /// Checks that both sizes and the cell size are finite and positive.
    ///
    /// The mapper itself never validates; a degenerate configuration yields
    /// non-finite scale and offset values. Call this (or
    /// [`crate::ViewportMapper::try_new`]) to fail fast instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive_size(self.in_size) {
            return Err(ConfigError::InvalidInputSize(self.in_size));
        }
        if !is_positive_size(self.out_size) {
            return Err(ConfigError::InvalidOutputSize(self.out_size));
        }
        if !(is_positive(self.cell.x) && is_positive(self.cell.y)) {
            return Err(ConfigError::InvalidCell(self.cell));
        }
        Ok(())
    }
}

/// A configuration rejected by [`MapperConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The input size has a zero, negative, or non-finite dimension.
    InvalidInputSize(Size),
    /// The output size has a zero, negative, or non-finite dimension.
    InvalidOutputSize(Size),
    /// The cell size has a zero, negative, or non-finite component.
    InvalidCell(Vec2),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputSize(size) => {
                write!(f, "input size {size:?} must be finite and positive")
            }
            Self::InvalidOutputSize(size) => {
                write!(f, "output size {size:?} must be finite and positive")
            }
            Self::InvalidCell(cell) => {
                write!(f, "cell size {cell:?} must be finite and positive")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

fn unset_or(value: f64, default: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        default
    } else {
        value
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_positive_size(size: Size) -> bool {
    is_positive(size.width) && is_positive(size.height)
}
