#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardIntent {
    /// Show focus outlines while the user tabs around.
    EnableKeyboardNavigation,
    CloseOpenModal,
}

pub fn intent_for_key(key: &str) -> Option<KeyboardIntent> {
    match key {
        "Tab" => Some(KeyboardIntent::EnableKeyboardNavigation),
        "Escape" => Some(KeyboardIntent::CloseOpenModal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_only_tab_and_escape() {
        assert_eq!(intent_for_key("Tab"), Some(KeyboardIntent::EnableKeyboardNavigation));
        assert_eq!(intent_for_key("Escape"), Some(KeyboardIntent::CloseOpenModal));
        assert_eq!(intent_for_key("Enter"), None);
        assert_eq!(intent_for_key("tab"), None);
    }
}
