//! Keyboard-to-intent controller
//!
//! Key events only flip button flags. The tick loop polls the controller once
//! per frame and gets back a `TickInput` with one command per bound button.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::{Arena, Command, FighterId, TickInput};

/// What a button does for the fighter it is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Drive forward while held
    Move,
    /// Start a push on each fresh press
    Push,
}

/// Keyboard key to button kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    pub keys: IndexMap<String, ButtonKind>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keys = IndexMap::new();
        keys.insert("d".to_string(), ButtonKind::Move);
        keys.insert("s".to_string(), ButtonKind::Push);
        Self { keys }
    }
}

/// A single button with press debounce
///
/// A key-down while already held does not count as a new press, so holding
/// the push key fires once.
#[derive(Debug, Clone)]
pub struct ControllerButton {
    pub kind: ButtonKind,
    held: bool,
    pressed: bool,
    target: Option<FighterId>,
}

impl ControllerButton {
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            held: false,
            pressed: false,
            target: None,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn on_button_down(&mut self) {
        if !self.held {
            self.pressed = true;
        }
        self.held = true;
    }

    /// Releasing also drops a press that has not been polled yet
    pub fn on_button_up(&mut self) {
        self.held = false;
        self.pressed = false;
    }

    /// Command for this frame, consuming the pending press
    pub fn poll(&mut self) -> Option<Command> {
        let fighter = self.target?;
        match self.kind {
            ButtonKind::Move => Some(Command::Move {
                fighter,
                held: self.held,
            }),
            ButtonKind::Push => {
                let fired = std::mem::take(&mut self.pressed);
                fired.then_some(Command::Push { fighter })
            }
        }
    }
}

/// Set of buttons keyed by keyboard key
#[derive(Debug, Clone)]
pub struct Controller {
    buttons: IndexMap<String, ControllerButton>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&Keymap::default())
    }
}

impl Controller {
    pub fn new(keymap: &Keymap) -> Self {
        let buttons = keymap
            .keys
            .iter()
            .map(|(key, &kind)| (key.clone(), ControllerButton::new(kind)))
            .collect();
        Self { buttons }
    }

    /// Route every button of `kind` to `fighter`, which must be in `arena`
    pub fn bind(
        &mut self,
        kind: ButtonKind,
        fighter: FighterId,
        arena: &Arena,
    ) -> Result<(), ConfigError> {
        if !arena.contains(fighter) {
            return Err(ConfigError::UnknownFighter(fighter));
        }
        self.set_target(kind, Some(fighter))?;
        log::info!("{:?} button bound to fighter {}", kind, fighter);
        Ok(())
    }

    /// Make every button of `kind` do nothing
    pub fn clear(&mut self, kind: ButtonKind) -> Result<(), ConfigError> {
        self.set_target(kind, None)
    }

    fn set_target(&mut self, kind: ButtonKind, target: Option<FighterId>) -> Result<(), ConfigError> {
        let mut found = false;
        for button in self.buttons.values_mut().filter(|b| b.kind == kind) {
            button.target = target;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(ConfigError::ButtonNotFound(kind))
        }
    }

    /// Unmapped keys are ignored
    pub fn key_down(&mut self, key: &str) {
        if let Some(button) = self.buttons.get_mut(key) {
            button.on_button_down();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(button) = self.buttons.get_mut(key) {
            button.on_button_up();
        }
    }

    /// Release everything (window focus lost)
    pub fn release_all(&mut self) {
        for button in self.buttons.values_mut() {
            button.on_button_up();
        }
    }

    pub fn button(&self, key: &str) -> Option<&ControllerButton> {
        self.buttons.get(key)
    }

    /// Intent snapshot for the upcoming frame
    pub fn poll(&mut self) -> TickInput {
        let commands = self
            .buttons
            .values_mut()
            .filter_map(ControllerButton::poll)
            .collect();
        TickInput::new(commands)
    }
}
