use bevy::prelude::*;

/// Top-level application states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Waiting for every catalog model to load or fail.
    #[default]
    Loading,
    /// The office scene is spawned and interactive.
    Office,
}
