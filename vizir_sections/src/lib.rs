// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sectioned axes for `VizIR`.
//!
//! A sectioned axis partitions one value axis into an ordered sequence of non-overlapping,
//! labeled [`Section`]s. Each section may carry a nested sub-scale whose ticks are projected
//! into the section's range. This crate covers:
//! - **Ranges and sections**: [`Range`], [`Section`] and the append-only [`SectionRegistry`].
//! - **Mapping**: [`CoordinateMapper`] between axis values and device coordinates.
//! - **Auto range**: [`compute_range`] from the sections and an [`AutoRangeConfig`].
//! - **Ticks**: [`SectionAxis::refresh_ticks`] with greedy label overlap resolution,
//!   truncation and tooltips.
//! - **Grid bands**: [`SectionAxis::draw_grid_bands`] onto a host [`Surface`].
//!
//! Sectioned axes are laid out along the left or right edge of a data area only.
//!
//! ```
//! use kurbo::Rect;
//! use vizir_sections::{AxisOrient, Range, SectionAxis};
//! use vizir_text::HeuristicTextMeasurer;
//!
//! let mut axis = SectionAxis::new();
//! axis.next_section("north").unwrap();
//! axis.next_section("south")
//!     .unwrap()
//!     .set_nested_number_range(Range::new(0.0, 50.0).unwrap(), true);
//! axis.configure();
//!
//! let data_area = Rect::new(80.0, 10.0, 400.0, 410.0);
//! let ticks = axis
//!     .refresh_ticks(&HeuristicTextMeasurer, data_area, AxisOrient::Left)
//!     .unwrap();
//! assert_eq!(ticks[0].text.as_deref(), Some("north"));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod auto_range;
mod axis;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod grid_band;
mod mapper;
mod nested;
mod orient;
mod project;
mod range;
mod registry;
#[cfg(test)]
mod scenario_tests;
mod section;
mod surface;
mod tick;
mod tick_layout;

pub use auto_range::{AutoRangeConfig, RangeAlign, compute_range};
pub use axis::SectionAxis;
pub use error::AxisError;
pub use grid_band::GridBandStyle;
pub use mapper::CoordinateMapper;
pub use nested::{NestedAxis, NumberAxis};
pub use orient::AxisOrient;
pub use project::{scale_value, visible_tick_count};
pub use range::Range;
pub use registry::{DEFAULT_SECTION_LENGTH, SectionRegistry};
pub use section::Section;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use tick::{LabelAnchors, Tick, TickKind, TickLabelStyle, TooltipMode};
pub use tick_layout::TickLabelRegion;
