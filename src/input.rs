//! Terminal key handling: global shortcuts and beach key transitions.
//!
//! Global keys run first and never consume the key; the minigame sees
//! every key afterwards.

use crate::beach::BeachInput;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

/// Action presses closer together than this are OS auto-repeat of a held
/// key, not fresh taps.
pub const REPEAT_GAP: Duration = Duration::from_millis(150);

/// A key going down or coming back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Down(BeachInput),
    Up(BeachInput),
}

/// What a global shortcut changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    None,
    MuteToggled(bool),
    FullscreenToggled(bool),
}

impl GlobalAction {
    /// Whether settings changed and should be written back.
    pub fn needs_save(&self) -> bool {
        !matches!(self, GlobalAction::None)
    }
}

pub fn map_key(code: KeyCode) -> BeachInput {
    match code {
        KeyCode::Char(' ') => BeachInput::Action,
        KeyCode::Esc => BeachInput::Cancel,
        _ => BeachInput::Other,
    }
}

/// Mute (M) and fullscreen (F) toggles.
pub fn handle_global_key(settings: &mut Settings, code: KeyCode) -> GlobalAction {
    match code {
        KeyCode::Char('m') | KeyCode::Char('M') => {
            let mute = settings.toggle_mute();
            log::info!("Mute: {}", mute);
            GlobalAction::MuteToggled(mute)
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            let fullscreen = settings.toggle_fullscreen();
            log::info!("Fullscreen toggled");
            GlobalAction::FullscreenToggled(fullscreen)
        }
        _ => GlobalAction::None,
    }
}

/// Turns crossterm key events into presses and releases.
///
/// Terminals that speak the keyboard enhancement protocol report real
/// releases. Everywhere else a second Action tap while charging stands in
/// for the release, and the auto-repeat stream of a held key is dropped.
#[derive(Debug, Clone, Copy)]
pub struct KeyTranslator {
    release_events: bool,
    last_action_press: Option<Instant>,
}

impl KeyTranslator {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            last_action_press: None,
        }
    }

    pub fn translate(
        &mut self,
        key: KeyEvent,
        charging: bool,
        now: Instant,
    ) -> Option<KeyTransition> {
        let input = map_key(key.code);
        match key.kind {
            KeyEventKind::Press if !self.release_events && input == BeachInput::Action => {
                let repeat = self
                    .last_action_press
                    .is_some_and(|last| now.saturating_duration_since(last) < REPEAT_GAP);
                self.last_action_press = Some(now);
                if repeat {
                    None
                } else if charging {
                    Some(KeyTransition::Up(input))
                } else {
                    Some(KeyTransition::Down(input))
                }
            }
            KeyEventKind::Press => Some(KeyTransition::Down(input)),
            KeyEventKind::Release => Some(KeyTransition::Up(input)),
            KeyEventKind::Repeat => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Char(' ')), BeachInput::Action);
        assert_eq!(map_key(KeyCode::Esc), BeachInput::Cancel);
        assert_eq!(map_key(KeyCode::Enter), BeachInput::Other);
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyEventKind::Press)
    }

    const SPACE: KeyCode = KeyCode::Char(' ');

    #[test]
    fn test_enhanced_press_and_release() {
        let mut translator = KeyTranslator::new(true);
        let t0 = Instant::now();
        assert_eq!(
            translator.translate(press(SPACE), false, t0),
            Some(KeyTransition::Down(BeachInput::Action))
        );
        assert_eq!(translator.translate(key(SPACE, KeyEventKind::Repeat), true, t0), None);
        assert_eq!(
            translator.translate(press(SPACE), true, t0 + Duration::from_millis(10)),
            Some(KeyTransition::Down(BeachInput::Action))
        );
        assert_eq!(
            translator.translate(key(SPACE, KeyEventKind::Release), true, t0),
            Some(KeyTransition::Up(BeachInput::Action))
        );
    }

    #[test]
    fn test_fallback_second_tap_releases() {
        let mut translator = KeyTranslator::new(false);
        let t0 = Instant::now();
        assert_eq!(
            translator.translate(press(SPACE), false, t0),
            Some(KeyTransition::Down(BeachInput::Action))
        );
        assert_eq!(
            translator.translate(press(SPACE), true, t0 + Duration::from_millis(700)),
            Some(KeyTransition::Up(BeachInput::Action))
        );
        // Esc is never turned into a release
        assert_eq!(
            translator.translate(press(KeyCode::Esc), true, t0 + Duration::from_millis(710)),
            Some(KeyTransition::Down(BeachInput::Cancel))
        );
    }

    #[test]
    fn test_fallback_held_key_throws_once() {
        let mut translator = KeyTranslator::new(false);
        let t0 = Instant::now();
        assert_eq!(
            translator.translate(press(SPACE), false, t0),
            Some(KeyTransition::Down(BeachInput::Action))
        );
        // OS repeat delay, then the first repeat lets go of the throw
        let mut now = t0 + Duration::from_millis(500);
        assert_eq!(
            translator.translate(press(SPACE), true, now),
            Some(KeyTransition::Up(BeachInput::Action))
        );
        // The rest of the repeat stream neither releases nor starts a new charge
        for charging in [false, false, true, false] {
            now += Duration::from_millis(33);
            assert_eq!(translator.translate(press(SPACE), charging, now), None);
        }
        // A fresh tap after letting go starts the next wind-up
        now += Duration::from_millis(400);
        assert_eq!(
            translator.translate(press(SPACE), false, now),
            Some(KeyTransition::Down(BeachInput::Action))
        );
    }

    #[test]
    fn test_global_mute_toggle() {
        let mut settings = Settings::default();
        assert_eq!(
            handle_global_key(&mut settings, KeyCode::Char('m')),
            GlobalAction::MuteToggled(true)
        );
        assert!(settings.mute);
        assert_eq!(
            handle_global_key(&mut settings, KeyCode::Char('M')),
            GlobalAction::MuteToggled(false)
        );
    }

    #[test]
    fn test_global_fullscreen_toggle() {
        let mut settings = Settings::default();
        let action = handle_global_key(&mut settings, KeyCode::Char('f'));
        assert_eq!(action, GlobalAction::FullscreenToggled(true));
        assert!(action.needs_save());
        assert!(settings.fullscreen);
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut settings = Settings::default();
        let action = handle_global_key(&mut settings, KeyCode::Char(' '));
        assert_eq!(action, GlobalAction::None);
        assert!(!action.needs_save());
        assert_eq!(settings, Settings::default());
    }
}
