//! Highlight movement logic
//!
//! Pure functions for moving the navigator highlight with wrap-around.
//! Movement over an empty listing is a defined no-op (`None`).

/// Move the highlight one entry down, wrapping past the end to the top.
pub fn move_down(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move the highlight one entry up, wrapping past the top to the end.
pub fn move_up(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => i - 1,
    })
}
