use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Camera command produced by one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBackward,
    YawLeft,
    YawRight,
}

/// Everything a key press can ask the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Camera(Command),
    ResetCamera,
    Exit,
}

/// Map a physical key to a viewer action
pub fn key_action(keycode: KeyCode) -> Option<KeyAction> {
    match keycode {
        KeyCode::ArrowUp => Some(KeyAction::Camera(Command::MoveForward)),
        KeyCode::ArrowDown => Some(KeyAction::Camera(Command::MoveBackward)),
        KeyCode::ArrowLeft => Some(KeyAction::Camera(Command::YawLeft)),
        KeyCode::ArrowRight => Some(KeyAction::Camera(Command::YawRight)),
        KeyCode::Home => Some(KeyAction::ResetCamera),
        KeyCode::Escape => Some(KeyAction::Exit),
        _ => None,
    }
}

/// Translate a winit key event into an action.
///
/// Only presses count. OS auto-repeat arrives as repeated presses, so holding
/// a key keeps producing actions, one per event.
pub fn action_for_event(event: &KeyEvent) -> Option<KeyAction> {
    if event.state != ElementState::Pressed {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(keycode) => key_action(keycode),
        PhysicalKey::Unidentified(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // KeyEvent has private fields, so only the keycode mapping is tested here

    #[test]
    fn test_arrow_keys_map_to_commands() {
        assert_eq!(
            key_action(KeyCode::ArrowUp),
            Some(KeyAction::Camera(Command::MoveForward))
        );
        assert_eq!(
            key_action(KeyCode::ArrowDown),
            Some(KeyAction::Camera(Command::MoveBackward))
        );
        assert_eq!(
            key_action(KeyCode::ArrowLeft),
            Some(KeyAction::Camera(Command::YawLeft))
        );
        assert_eq!(
            key_action(KeyCode::ArrowRight),
            Some(KeyAction::Camera(Command::YawRight))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_action(KeyCode::Escape), Some(KeyAction::Exit));
        assert_eq!(key_action(KeyCode::Home), Some(KeyAction::ResetCamera));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_action(KeyCode::KeyW), None);
        assert_eq!(key_action(KeyCode::Space), None);
        assert_eq!(key_action(KeyCode::ShiftLeft), None);
    }

    #[test]
    fn test_all_actions_unique() {
        let keys = [
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::Home,
            KeyCode::Escape,
        ];

        let actions: HashSet<_> = keys.iter().filter_map(|k| key_action(*k)).collect();
        assert_eq!(actions.len(), keys.len());
    }
}
