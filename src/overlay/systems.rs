use bevy::{
    picking::{
        events::{Click, Pointer},
        pointer::PointerButton,
        PickingBehavior,
    },
    prelude::*,
};

use super::components::{ActiveMessage, DismissButton, MessageRoot, MessageText};
use super::styles::*;

/// Rebuilds the message panel whenever the active message changes.
pub fn sync_message_panel(
    mut commands: Commands,
    message: Res<ActiveMessage>,
    existing: Query<Entity, With<MessageRoot>>,
) {
    if !message.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let Some(text) = message.text() else {
        return;
    };

    commands
        .spawn((
            MessageRoot,
            root_style(),
            // Only the panel itself should swallow pointer input.
            PickingBehavior::IGNORE,
            GlobalZIndex(1000),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    panel_style(),
                    BackgroundColor(PANEL_BACKGROUND),
                    BorderColor(PANEL_BORDER),
                    BorderRadius::all(Val::Px(10.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        MessageText,
                        Text::new(text),
                        message_text_style(),
                        TextColor(MESSAGE_TEXT_COLOR),
                        TextLayout::new_with_justify(JustifyText::Center),
                    ));

                    panel
                        .spawn((
                            DismissButton,
                            Button,
                            button_style(),
                            BackgroundColor(NORMAL_BUTTON),
                            BorderRadius::all(Val::Px(5.0)),
                        ))
                        .observe(dismiss_on_click)
                        .with_children(|button| {
                            button.spawn((
                                Text::new("OK"),
                                button_text_style(),
                                TextColor(BUTTON_TEXT_COLOR),
                            ));
                        });
                });
        });
}

pub fn button_interaction(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<DismissButton>),
    >,
) {
    for (interaction, mut color) in interaction_query.iter_mut() {
        *color = match *interaction {
            Interaction::Pressed => PRESSED_BUTTON,
            Interaction::Hovered => HOVERED_BUTTON,
            Interaction::None => NORMAL_BUTTON,
        }
        .into();
    }
}

/// A click completes on release over the button, so pressing OK and dragging
/// away cancels the dismissal.
fn dismiss_on_click(mut trigger: Trigger<Pointer<Click>>, mut message: ResMut<ActiveMessage>) {
    trigger.propagate(false);
    if trigger.event().button == PointerButton::Primary {
        message.dismiss();
    }
}

pub fn cleanup_message_panel(
    mut commands: Commands,
    mut message: ResMut<ActiveMessage>,
    query: Query<Entity, With<MessageRoot>>,
) {
    message.dismiss();
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
