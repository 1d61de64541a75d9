use bevy::prelude::*;

/// Parent of every model in the office.
#[derive(Component)]
pub struct OfficeRoot;
