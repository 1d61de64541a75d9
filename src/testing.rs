//! Helpers for driving picking observers in headless tests.

use std::time::Duration;

use bevy::{
    picking::{
        backend::HitData,
        events::{Click, Out, Over, Pointer},
        pointer::{Location, PointerButton, PointerId},
    },
    prelude::*,
    render::camera::{ManualTextureViewHandle, NormalizedRenderTarget},
};

fn pointer<E: std::fmt::Debug + Clone + Reflect>(target: Entity, event: E) -> Pointer<E> {
    let location = Location {
        target: NormalizedRenderTarget::TextureView(ManualTextureViewHandle(0)),
        position: Vec2::ZERO,
    };
    Pointer::new(target, PointerId::Mouse, location, event)
}

pub fn hit() -> HitData {
    HitData::new(Entity::PLACEHOLDER, 0.0, None, None)
}

pub fn over(target: Entity) -> Pointer<Over> {
    pointer(target, Over { hit: hit() })
}

pub fn out(target: Entity) -> Pointer<Out> {
    pointer(target, Out { hit: hit() })
}

/// Primary-button click, delivered on release.
pub fn click(target: Entity) -> Pointer<Click> {
    pointer(
        target,
        Click {
            button: PointerButton::Primary,
            hit: hit(),
            duration: Duration::ZERO,
        },
    )
}
