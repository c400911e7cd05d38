//! Frame-driven animations over a shared scalar cell.
//!
//! An [`Animatable`] becomes the writer of its [`ValueCell`] when an animation
//! starts and quietly stops as soon as another writer takes the cell over.

use std::cell::RefCell;
use std::rc::Rc;

use sheetkit_core::{FrameCallbackRegistration, RuntimeHandle, ValueCell, WriterToken};

/// Longest physics step for spring integration. Larger frame gaps are
/// subdivided so stiff springs stay stable.
const MAX_SPRING_STEP_SECS: f32 = 0.004;

/// Frame gaps beyond this are treated as a stall and clamped.
const MAX_SPRING_FRAME_SECS: f32 = 0.1;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    LinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
        }
    }
}

/// Length of the slide-out tween that dismisses a sheet.
pub const DISMISS_DURATION_MILLIS: u64 = 300;

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::linear(DISMISS_DURATION_MILLIS)
    }
}

/// Mass-spring-damper configuration.
///
/// Damping is expressed as a ratio of critical damping so that changing the
/// mass or stiffness keeps the same settling character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Mass of the moving body. Lighter bodies settle faster.
    pub mass: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Speed (units/second) below which the spring may come to rest.
    pub velocity_threshold: f32,
    /// Distance from target below which the spring may come to rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping_ratio: 1.0,
            velocity_threshold: 2.0,
            position_threshold: 0.01,
        }
    }

    /// Spring used when a sheet settles onto a stop: mass 0.5 with a damping
    /// coefficient of 10, which lands just below critical damping.
    pub fn sheet_snap() -> Self {
        let mass = 0.5;
        let stiffness = 100.0;
        Self {
            mass,
            stiffness,
            damping_ratio: 10.0 / (2.0 * (stiffness * mass).sqrt()),
            ..Self::default_spring()
        }
    }

    /// Absolute damping coefficient `c = 2ζ√(km)`.
    pub fn damping_coefficient(&self) -> f32 {
        2.0 * self.damping_ratio * (self.stiffness * self.mass).sqrt()
    }

    fn sanitized(self) -> Self {
        Self {
            mass: self.mass.max(0.001),
            stiffness: self.stiffness.max(0.1),
            damping_ratio: self.damping_ratio.max(0.0),
            ..self
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Drives a shared `f32` cell towards a target, one frame at a time.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    cell: ValueCell<f32>,
    runtime: RuntimeHandle,
    token: Option<WriterToken>,
    /// Units per second; carried across retargeted springs.
    velocity: f32,
    start: f32,
    target: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl AnimatableInner {
    fn cancel_frame(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }

    fn finish(&mut self) {
        if let Some(token) = self.token.take() {
            self.cell.set(token, self.target);
            self.cell.release(token);
        }
        self.start = self.target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }
}

impl Animatable {
    pub fn new(cell: ValueCell<f32>, runtime: RuntimeHandle) -> Self {
        let initial = cell.get();
        let inner = AnimatableInner {
            cell,
            runtime,
            token: None,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the cell's current value to `target`, taking over the cell.
    pub fn animate_to(&self, target: f32, animation: AnimationType) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_frame();

            let still_owner = inner
                .token
                .map(|token| inner.cell.is_owner(token))
                .unwrap_or(false);
            if !still_owner || !matches!(animation, AnimationType::Spring(_)) {
                inner.velocity = 0.0;
            }

            let token = inner.cell.take_over();
            inner.token = Some(token);
            inner.start = inner.cell.get();
            inner.target = target;
            inner.animation_type = animation;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            log::trace!(
                "animate {:.2} -> {:.2} with {:?}",
                inner.start,
                target,
                animation
            );
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump straight to `target` without animating, taking over the cell.
    pub fn snap_to(&self, target: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_frame();
        inner.token = Some(inner.cell.take_over());
        inner.target = target;
        inner.finish();
    }

    /// Stop any running animation where it is and give up the cell.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_frame();
        if let Some(token) = inner.token.take() {
            inner.cell.release(token);
        }
        inner.velocity = 0.0;
    }

    pub fn is_running(&self) -> bool {
        let inner = self.inner.borrow();
        inner.registration.is_some()
            && inner
                .token
                .map(|token| inner.cell.is_owner(token))
                .unwrap_or(false)
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let Some(token) = inner.token else {
                return;
            };
            if !inner.cell.is_owner(token) {
                log::trace!("animation towards {:.2} superseded", inner.target);
                inner.token = None;
                inner.velocity = 0.0;
                return;
            }

            let animation_type = inner.animation_type;
            match animation_type {
                AnimationType::Tween(spec) => Self::step_tween(&mut inner, spec, frame_time_nanos),
                AnimationType::Spring(spec) => {
                    Self::step_spring(&mut inner, spec.sanitized(), frame_time_nanos)
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }

    fn step_tween(inner: &mut AnimatableInner, spec: AnimationSpec, now: u64) -> bool {
        let start_time = *inner.start_time_nanos.get_or_insert(now);
        let elapsed_nanos = now.saturating_sub(start_time);
        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            (elapsed_nanos as f64 / duration_nanos as f64).clamp(0.0, 1.0) as f32;
        if linear_progress >= 1.0 {
            inner.finish();
            return false;
        }

        let value = inner
            .start
            .lerp(&inner.target, spec.easing.transform(linear_progress));
        if let Some(token) = inner.token {
            inner.cell.set(token, value);
        }
        true
    }

    fn step_spring(inner: &mut AnimatableInner, spec: SpringSpec, now: u64) -> bool {
        let Some(previous) = inner.last_frame_nanos.replace(now) else {
            // First frame anchors the clock; physics starts on the next one.
            return true;
        };
        let dt = (now.saturating_sub(previous) as f32 / 1_000_000_000.0).min(MAX_SPRING_FRAME_SECS);

        let damping = spec.damping_coefficient();
        let mut position = inner.cell.get();
        let mut velocity = inner.velocity;
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP_SECS);
            let displacement = position - inner.target;
            let acceleration = (-spec.stiffness * displacement - damping * velocity) / spec.mass;
            velocity += acceleration * step;
            position += velocity * step;
            remaining -= step;
        }
        inner.velocity = velocity;

        let at_rest = velocity.abs() < spec.velocity_threshold;
        let near_target = (position - inner.target).abs() < spec.position_threshold;
        if at_rest && near_target {
            inner.finish();
            return false;
        }

        if let Some(token) = inner.token {
            inner.cell.set(token, position);
        }
        true
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
