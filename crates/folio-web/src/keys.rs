/// What a key press asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Close the info panel.
    Close,
    /// Jump to the tab at this position (0-based).
    Tab(usize),
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" => Some(KeyAction::Close),
        "1" => Some(KeyAction::Tab(0)),
        "2" => Some(KeyAction::Tab(1)),
        "3" => Some(KeyAction::Tab(2)),
        "4" => Some(KeyAction::Tab(3)),
        _ => None,
    }
}
