use bevy::prelude::*;

pub const PANEL_BACKGROUND: Color = Color::WHITE;
pub const PANEL_BORDER: Color = Color::BLACK;
pub const MESSAGE_TEXT_COLOR: Color = Color::BLACK;

pub const NORMAL_BUTTON: Color = Color::srgb(0.0, 0.482, 1.0);
pub const HOVERED_BUTTON: Color = Color::srgb(0.0, 0.41, 0.85);
pub const PRESSED_BUTTON: Color = Color::srgb(0.0, 0.34, 0.7);
pub const BUTTON_TEXT_COLOR: Color = Color::WHITE;

pub fn root_style() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn panel_style() -> Node {
    Node {
        max_width: Val::Percent(60.0),
        padding: UiRect::all(Val::Px(20.0)),
        border: UiRect::all(Val::Px(1.0)),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn button_style() -> Node {
    Node {
        margin: UiRect::top(Val::Px(10.0)),
        padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn message_text_style() -> TextFont {
    TextFont {
        font_size: 18.0,
        ..default()
    }
}

pub fn button_text_style() -> TextFont {
    TextFont {
        font_size: 16.0,
        ..default()
    }
}
