//! Animation system for SheetKit
//!
//! Provides linear time-based tweens and mass-spring physics,
//! both driven by the runtime's frame clock and written into a shared
//! [`ValueCell`](sheetkit_core::ValueCell).

mod animation;

pub use animation::{
    Animatable, AnimationSpec, AnimationType, Easing, Lerp, SpringSpec, DISMISS_DURATION_MILLIS,
};
