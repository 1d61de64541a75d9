use bevy::prelude::*;

/// The safety tip currently on screen, if any. At most one is shown; showing a
/// new one replaces the old.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveMessage(Option<String>);

impl ActiveMessage {
    pub fn show(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("Showing tip: {text}");
        self.0 = Some(text);
    }

    pub fn dismiss(&mut self) {
        if self.0.take().is_some() {
            info!("Tip dismissed");
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Marker for the full-screen container centring the message panel.
#[derive(Component)]
pub struct MessageRoot;

/// Marker for the text of the message panel.
#[derive(Component)]
pub struct MessageText;

/// Marker for the OK button.
#[derive(Component)]
pub struct DismissButton;
