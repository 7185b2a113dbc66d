//! Quality band shared by every non-legendary item.
//!
//! Raising caps every +1 at [`MAX_QUALITY`] and floors the result once, so a
//! value that starts outside the band lands back in it after a single raise or
//! lower. Both helpers are total: they never overflow and never fail.

/// Lowest quality a non-legendary item can hold.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can hold.
pub const MAX_QUALITY: i32 = 50;

/// Raise `quality` by `steps`, capping after every +1 and flooring the result.
pub fn raise_quality(quality: i32, steps: u32) -> i32 {
    let mut quality = quality;
    for _ in 0..steps {
        quality = quality.saturating_add(1).min(MAX_QUALITY);
    }
    quality.max(MIN_QUALITY)
}

/// Lower `quality` by `amount`, clamping into the band.
pub fn lower_quality(quality: i32, amount: u32) -> i32 {
    let amount = i32::try_from(amount).unwrap_or(i32::MAX);
    quality.saturating_sub(amount).clamp(MIN_QUALITY, MAX_QUALITY)
}
