//! Touch ownership between a panel drag and the scroll view inside it.
//!
//! The decision is an ordered rule list: rules are tried top to bottom and the
//! first one that matches decides. The order encodes priority:
//!
//! 1. no vertical movement yet never claims;
//! 2. a downward pull while the content is at its top claims, so the panel can
//!    collapse from over scrolled content;
//! 3. content that is scrolled keeps the touch;
//! 4. a fully expanded panel has no headroom and yields;
//! 5. anything else claims.

use crate::classify::{is_pulling_down, DragSample};

/// Inputs for one claim decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClaimContext {
    pub sample: DragSample,
    pub scroll_offset: f32,
    /// Current panel offset.
    pub position: f32,
    /// Offset of the most expanded stop, if the panel has any.
    pub expanded_stop: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRule {
    NoVerticalIntent,
    PullDownAtScrollTop,
    InnerScrollActive,
    FullyExpanded,
    Default,
}

impl ClaimRule {
    /// Rules in priority order. `Default` always matches.
    pub const ORDERED: [ClaimRule; 5] = [
        ClaimRule::NoVerticalIntent,
        ClaimRule::PullDownAtScrollTop,
        ClaimRule::InnerScrollActive,
        ClaimRule::FullyExpanded,
        ClaimRule::Default,
    ];

    pub fn matches(self, ctx: &ClaimContext) -> bool {
        match self {
            ClaimRule::NoVerticalIntent => ctx.sample.dy == 0.0 || ctx.sample.dy.is_nan(),
            ClaimRule::PullDownAtScrollTop => {
                ctx.scroll_offset == 0.0 && is_pulling_down(ctx.sample)
            }
            ClaimRule::InnerScrollActive => ctx.scroll_offset != 0.0,
            ClaimRule::FullyExpanded => ctx
                .expanded_stop
                .map(|stop| ctx.position <= stop)
                .unwrap_or(false),
            ClaimRule::Default => true,
        }
    }

    /// Whether the panel takes the touch when this rule decides.
    pub fn claims(self) -> bool {
        matches!(self, ClaimRule::PullDownAtScrollTop | ClaimRule::Default)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimDecision {
    pub rule: ClaimRule,
    pub claims: bool,
}

pub fn decide_claim(ctx: &ClaimContext) -> ClaimDecision {
    let rule = ClaimRule::ORDERED
        .into_iter()
        .find(|rule| rule.matches(ctx))
        .unwrap_or(ClaimRule::Default);
    ClaimDecision {
        rule,
        claims: rule.claims(),
    }
}

/// Holds the gesture-enabled flag across the phases of a touch.
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    enabled: bool,
    last_decision: Option<ClaimDecision>,
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self {
            enabled: true,
            last_decision: None,
        }
    }

    /// Capture-phase check for a candidate move; recomputes the flag.
    pub fn should_capture(&mut self, ctx: &ClaimContext) -> bool {
        let decision = decide_claim(ctx);
        log::trace!(
            "claim check dy={:.1} scroll={:.1} position={:.1}: {:?}",
            ctx.sample.dy,
            ctx.scroll_offset,
            ctx.position,
            decision
        );
        self.enabled = decision.claims;
        self.last_decision = Some(decision);
        self.enabled
    }

    /// Bubble-phase check; answers with the cached flag.
    pub fn should_respond(&self) -> bool {
        self.enabled
    }

    /// The host refused to hand the touch over.
    pub fn on_reject(&mut self) {
        self.enabled = false;
    }

    /// Another recognizer asked to take over; always allowed.
    pub fn on_termination_request(&self) -> bool {
        true
    }

    /// The gesture was taken away mid-flight.
    pub fn on_terminate(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn last_decision(&self) -> Option<ClaimDecision> {
        self.last_decision
    }
}

#[cfg(test)]
#[path = "tests/arbiter_tests.rs"]
mod tests;
