//! Logical-to-physical strip mapping.
//!
//! Two physical strips hang from a shared midpoint and run outward, so the
//! left strip's addressing is the reverse of the logical order. Mapping
//! copies the single logical buffer out to both physical buffers, folding
//! at the seam.

use crate::color::Rgb;

/// Pixels on the left physical strip
pub const LEFT_PIXEL_LENGTH: usize = 99;
/// Pixels on the right physical strip
pub const RIGHT_PIXEL_LENGTH: usize = 99;
/// Length of the continuous logical strand
pub const LOGICAL_LENGTH: usize = LEFT_PIXEL_LENGTH + RIGHT_PIXEL_LENGTH;

/// Copy the logical strand into the two physical buffers.
///
/// Logical index 0 lands on the far end of the left strip; the seam at
/// `left.len()` continues in direct order down the right strip. Pixels
/// beyond the physical lengths are ignored rather than wrapped.
pub fn map_to_physical(logical: &[Rgb], left: &mut [Rgb], right: &mut [Rgb]) {
    let split = left.len().min(logical.len());

    for (i, &pixel) in logical.iter().take(split).enumerate() {
        left[split - 1 - i] = pixel;
    }

    for (i, &pixel) in logical.iter().skip(split).enumerate() {
        if i >= right.len() {
            break;
        }
        right[i] = pixel;
    }
}
