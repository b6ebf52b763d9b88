// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value with just enough decimals to tell neighbours `step` apart.
pub(crate) fn format_tick_with_step(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        let digits = -step.log10().floor();
        if digits > 0.0 {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "positive and capped at 12"
            )]
            {
                digits.min(12.0) as usize
            }
        } else {
            0
        }
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    // "-0", "-0.0" and friends.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        String::from(&text[1..])
    } else {
        text
    }
}
