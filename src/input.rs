use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::game::GameKey;

/// A translated input event: game-key transitions plus the app-level
/// quit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(GameKey),
    Released(GameKey),
    Quit,
}

/// Drains crossterm events and translates them into game-level key
/// transitions. Keys outside the game's contract are dropped here.
#[derive(Debug, Default)]
pub struct InputManager {}

impl InputManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Polls all pending terminal events without blocking. Should be
    /// called once per loop iteration.
    pub fn poll_events(&mut self) -> color_eyre::Result<Vec<InputEvent>> {
        let mut events = Vec::new();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event, &mut events),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        Ok(events)
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, events: &mut Vec<InputEvent>) {
        if key_event.kind == KeyEventKind::Press && is_quit_chord(&key_event) {
            events.push(InputEvent::Quit);
            return;
        }

        let Some(key) = map_key(key_event.code) else {
            return;
        };

        match key_event.kind {
            KeyEventKind::Press => events.push(InputEvent::Pressed(key)),
            KeyEventKind::Release => events.push(InputEvent::Released(key)),
            _ => {}
        }
    }
}

fn is_quit_chord(key_event: &KeyEvent) -> bool {
    matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
}

fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Left => Some(GameKey::Left),
        KeyCode::Right => Some(GameKey::Right),
        KeyCode::Char('1') => Some(GameKey::Fire),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameKey::Restart),
        _ => None,
    }
}
