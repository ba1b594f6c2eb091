//! Input module - keyboard handling for game controls
//!
//! The mapping is phase-aware because PostGame turns the keyboard into a
//! name-entry field: printable keys append to the team name there, while
//! ENTER means "start" in PreGame but "submit" in PostGame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameInput, GamePhase};

/// Map a key event to a game input for the current phase.
pub fn handle_key_event(key: KeyEvent, phase: GamePhase) -> Option<GameInput> {
    // Quit works everywhere, including mid name entry.
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(GameInput::Quit);
    }

    match (phase, key.code) {
        (GamePhase::PreGame, KeyCode::Enter) => Some(GameInput::Start),
        (GamePhase::PreGame, KeyCode::Char('q') | KeyCode::Char('Q')) => Some(GameInput::Quit),

        (GamePhase::PostGame, KeyCode::Enter) => Some(GameInput::Submit),
        (GamePhase::PostGame, KeyCode::Backspace) => Some(GameInput::Backspace),
        (GamePhase::PostGame, KeyCode::Char(c)) => Some(GameInput::Char(c)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_starts_in_pregame_and_submits_in_postgame() {
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), GamePhase::PreGame),
            Some(GameInput::Start)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), GamePhase::Playing),
            None
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), GamePhase::PostGame),
            Some(GameInput::Submit)
        );
    }

    #[test]
    fn printable_keys_type_the_team_name_only_in_postgame() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x')), GamePhase::PostGame),
            Some(GameInput::Char('x'))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x')), GamePhase::Playing),
            None
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), GamePhase::PostGame),
            Some(GameInput::Backspace)
        );
    }

    #[test]
    fn q_types_into_the_name_instead_of_quitting() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), GamePhase::PostGame),
            Some(GameInput::Char('q'))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), GamePhase::PreGame),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn esc_and_ctrl_c_quit_in_every_phase() {
        for phase in [GamePhase::PreGame, GamePhase::Playing, GamePhase::PostGame] {
            assert_eq!(
                handle_key_event(key(KeyCode::Esc), phase),
                Some(GameInput::Quit)
            );
            assert_eq!(
                handle_key_event(
                    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    phase
                ),
                Some(GameInput::Quit)
            );
        }
    }
}
