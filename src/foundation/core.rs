/// Placeholder the scheduler replaces with the current task's frame.
pub const FRAME_TOKEN: &str = "#IFRAME#";
/// Placeholder the scheduler replaces with the first frame of the task's chunk.
pub const FRAME_START_TOKEN: &str = "#FRAME_START#";
/// Placeholder the scheduler replaces with the last frame of the task's chunk.
pub const FRAME_END_TOKEN: &str = "#FRAME_END#";

/// Returns `true` when `range` is an animation range of the form `N-M` (digits only).
///
/// Anything else (a single frame, a frame token, a stepped range) is treated as a single-frame
/// render by the engines that care about the distinction.
pub fn is_animation_range(range: &str) -> bool {
    let Some((start, end)) = range.split_once('-') else {
        return false;
    };
    is_digits(start) && is_digits(end)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
