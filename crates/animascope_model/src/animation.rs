// SPDX-License-Identifier: MIT OR Apache-2.0
//! The remotely-observed animation model.
//!
//! One [`Animation`] mirrors one animation instance exposed by the remote
//! inspection agent. Leaf data arrives with the creation payload; the
//! effect and the effect target are fetched lazily through a
//! [`DeferredFetch`] each, so any number of interleaved callers share a
//! single remote command. Change notifications from the owning manager
//! invalidate the caches and are republished through a drainable event
//! queue.

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::oneshot;

use animascope_timing::TimingFunction;

use crate::agent::{AgentError, AnimationAgent, ProtocolCapabilities};
use crate::effect::{Effect, FillMode, IterationCount, Keyframe, PlaybackDirection};
use crate::fetch::{DeferredFetch, Disposition};
use crate::payload::{AnimationPayload, EffectPayload, EffectTargetPayload};
use crate::stack_trace::StackTrace;
use crate::styleable::Styleable;

/// Opaque animation identifier assigned by the remote side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimationId(pub String);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnimationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Construction-time contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnimationModelError {
    /// The creation payload carried no animation id
    #[error("animation payload is missing an animation id")]
    MissingAnimationId,

    /// Both CSS-linked fields were set; they are mutually exclusive
    #[error("cssAnimationName and cssTransitionProperty are mutually exclusive")]
    ConflictingCssFields,

    /// The stack-trace payload had no call frames
    #[error("stack trace payload has no call frames")]
    MalformedStackTrace,
}

/// Kind of animation, derived from which CSS-linked field is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationType {
    /// Script-created animation with no CSS origin
    WebAnimation,
    /// Animation originating from a CSS `animation-name`
    CssAnimation,
    /// Animation originating from a CSS `transition-property`
    CssTransition,
}

impl AnimationType {
    /// Human-readable label, optionally pluralized.
    pub fn display_name(self, plural: bool) -> &'static str {
        match self {
            Self::WebAnimation => {
                if plural {
                    "Web Animations"
                } else {
                    "Web Animation"
                }
            }
            Self::CssAnimation => {
                if plural {
                    "CSS Animations"
                } else {
                    "CSS Animation"
                }
            }
            Self::CssTransition => {
                if plural {
                    "CSS Transitions"
                } else {
                    "CSS Transition"
                }
            }
        }
    }
}

/// State-change event republished to local observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The declared name changed
    NameChanged,
    /// The effect changed; cached effect data was discarded
    EffectChanged,
    /// The effect target changed; the cached target was discarded
    TargetChanged,
}

/// Process-wide counter behind `Animation N` display names. Numbers are
/// handed out in first-access order, not construction order.
static NEXT_UNIQUE_DISPLAY_NAME_NUMBER: AtomicU64 = AtomicU64::new(1);

/// Local mirror of one remote animation instance.
pub struct Animation {
    animation_id: AnimationId,
    name: Option<String>,
    css_animation_name: Option<String>,
    css_transition_property: Option<String>,
    stack_trace: Option<StackTrace>,
    capabilities: ProtocolCapabilities,
    effect: DeferredFetch<Effect>,
    /// `Resolved(None)` is "fetched, explicitly no target"; an empty
    /// coordinator is "never fetched".
    effect_target: DeferredFetch<Option<Styleable>>,
    unique_display_name_number: Cell<Option<u64>>,
    pending_events: Vec<AnimationEvent>,
}

impl Animation {
    /// Build a model from a creation payload.
    ///
    /// Fails fast on a missing identity, on both CSS-linked fields being
    /// set, or on a malformed stack trace. The legacy `backtrace` spelling
    /// is normalized to a stack trace first. Inline effect data from older
    /// remote versions is cached immediately via [`Self::effect_changed`].
    pub fn from_payload(
        payload: AnimationPayload,
        capabilities: ProtocolCapabilities,
    ) -> Result<Self, AnimationModelError> {
        if payload.animation_id.is_empty() {
            return Err(AnimationModelError::MissingAnimationId);
        }

        let css_animation_name = payload.css_animation_name.filter(|name| !name.is_empty());
        let css_transition_property =
            payload.css_transition_property.filter(|property| !property.is_empty());
        if css_animation_name.is_some() && css_transition_property.is_some() {
            return Err(AnimationModelError::ConflictingCssFields);
        }

        let stack_trace_payload = payload.stack_trace.or_else(|| {
            payload
                .backtrace
                .map(|call_frames| crate::payload::StackTracePayload { call_frames })
        });
        let stack_trace = stack_trace_payload.map(StackTrace::from_payload).transpose()?;

        let mut animation = Self {
            animation_id: AnimationId(payload.animation_id),
            name: payload.name.filter(|name| !name.is_empty()),
            css_animation_name,
            css_transition_property,
            stack_trace,
            capabilities,
            effect: DeferredFetch::new(),
            effect_target: DeferredFetch::new(),
            unique_display_name_number: Cell::new(None),
            pending_events: Vec::new(),
        };

        if let Some(effect) = payload.effect {
            animation.effect_changed(Some(effect));
        }

        Ok(animation)
    }

    /// Restart `Animation N` numbering at 1 for animations that have not
    /// yet been assigned a number. Test support; already-assigned numbers
    /// never change.
    pub fn reset_unique_display_name_numbers() {
        NEXT_UNIQUE_DISPLAY_NAME_NUMBER.store(1, Ordering::Relaxed);
    }

    /// The remote-assigned identifier.
    pub fn animation_id(&self) -> &AnimationId {
        &self.animation_id
    }

    /// The declared name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The CSS `animation-name` this animation originates from, if any.
    pub fn css_animation_name(&self) -> Option<&str> {
        self.css_animation_name.as_deref()
    }

    /// The CSS `transition-property` this animation originates from, if any.
    pub fn css_transition_property(&self) -> Option<&str> {
        self.css_transition_property.as_deref()
    }

    /// The creation-site stack trace, if the remote side sent one.
    pub fn stack_trace(&self) -> Option<&StackTrace> {
        self.stack_trace.as_ref()
    }

    /// Classification derived from the CSS-linked fields.
    pub fn animation_type(&self) -> AnimationType {
        if self.css_animation_name.is_some() {
            AnimationType::CssAnimation
        } else if self.css_transition_property.is_some() {
            AnimationType::CssTransition
        } else {
            AnimationType::WebAnimation
        }
    }

    /// The normalized effect, if it has been fetched.
    pub fn effect(&self) -> Option<&Effect> {
        self.effect.value()
    }

    /// Start delay in milliseconds; `NaN` until fetched or when the remote
    /// payload omitted it.
    pub fn start_delay(&self) -> f64 {
        self.effect_number(|effect| effect.start_delay)
    }

    /// End delay in milliseconds; `NaN` when unknown.
    pub fn end_delay(&self) -> f64 {
        self.effect_number(|effect| effect.end_delay)
    }

    /// Iteration count; `f64::INFINITY` for the infinite sentinel, `NaN`
    /// when unknown.
    pub fn iteration_count(&self) -> f64 {
        self.effect_number(|effect| effect.iteration_count.map(IterationCount::as_f64))
    }

    /// Iteration start offset; `NaN` when unknown.
    pub fn iteration_start(&self) -> f64 {
        self.effect_number(|effect| effect.iteration_start)
    }

    /// Iteration duration in milliseconds; `NaN` when unknown.
    pub fn iteration_duration(&self) -> f64 {
        self.effect_number(|effect| effect.iteration_duration)
    }

    /// The parsed timing function, when fetched and parseable.
    pub fn timing_function(&self) -> Option<&TimingFunction> {
        self.effect.value().and_then(|effect| effect.timing_function.as_ref())
    }

    /// The playback direction, when known.
    pub fn playback_direction(&self) -> Option<PlaybackDirection> {
        self.effect.value().and_then(|effect| effect.playback_direction)
    }

    /// The fill mode, when known.
    pub fn fill_mode(&self) -> Option<FillMode> {
        self.effect.value().and_then(|effect| effect.fill_mode)
    }

    /// Keyframes in timeline order; empty until the effect is fetched.
    pub fn keyframes(&self) -> &[Keyframe] {
        self.effect.value().map_or(&[], |effect| effect.keyframes.as_slice())
    }

    fn effect_number(&self, field: impl Fn(&Effect) -> Option<f64>) -> f64 {
        self.effect.value().and_then(field).unwrap_or(f64::NAN)
    }

    /// Display-facing name: the declared name, else the CSS-linked name,
    /// else `Animation N` with a process-wide number assigned at first
    /// access and memoized for the lifetime of this instance.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(name) = &self.css_animation_name {
            return name.clone();
        }
        if let Some(property) = &self.css_transition_property {
            return property.clone();
        }

        let number = match self.unique_display_name_number.get() {
            Some(number) => number,
            None => {
                let number = NEXT_UNIQUE_DISPLAY_NAME_NUMBER.fetch_add(1, Ordering::Relaxed);
                self.unique_display_name_number.set(Some(number));
                number
            }
        };
        format!("Animation {number}")
    }

    /// Request the effect, invoking `callback` once it is available.
    ///
    /// The first caller issues one `requestEffect` command through `agent`;
    /// callers arriving before the response are queued behind it and all
    /// run, in call order, when [`Self::effect_request_completed`] delivers
    /// the response. A cached effect serves the callback synchronously.
    pub fn ensure_effect_with(
        &mut self,
        agent: &mut dyn AnimationAgent,
        callback: impl FnOnce(&Effect) + 'static,
    ) {
        if self.effect.ensure(Box::new(callback)) == Disposition::Issue {
            agent.request_effect(&self.animation_id);
        }
    }

    /// Future-flavored [`Self::ensure_effect_with`]. The returned channel
    /// resolves once the effect is cached; if the fetch fails it is closed
    /// without a value.
    pub fn ensure_effect(&mut self, agent: &mut dyn AnimationAgent) -> oneshot::Receiver<()> {
        let (sender, receiver) = oneshot::channel();
        self.ensure_effect_with(agent, move |_| {
            let _ = sender.send(());
        });
        receiver
    }

    /// Request the effect target, invoking `callback` with the resolved
    /// target (or `None` when the animation explicitly has none).
    ///
    /// Coalesces exactly like [`Self::ensure_effect_with`].
    pub fn request_effect_target(
        &mut self,
        agent: &mut dyn AnimationAgent,
        callback: impl FnOnce(Option<&Styleable>) + 'static,
    ) {
        let continuation =
            Box::new(move |target: &Option<Styleable>| callback(target.as_ref()));
        if self.effect_target.ensure(continuation) == Disposition::Issue {
            agent.request_effect_target(&self.animation_id);
        }
    }

    /// Deliver the response to an in-flight `requestEffect` command.
    ///
    /// On success the payload is normalized and cached, and queued callers
    /// are released in call order. On error the failure goes to the
    /// diagnostic sink, the cache stays unpopulated, and queued callers
    /// are dropped unreleased; the next request issues a fresh command.
    pub fn effect_request_completed(
        &mut self,
        result: Result<Option<EffectPayload>, AgentError>,
    ) {
        match result {
            Ok(payload) => self.effect.resolve(Effect::from_payload(payload)),
            Err(error) => {
                tracing::error!(animation_id = %self.animation_id, %error, "effect request failed");
                self.effect.fail();
            }
        }
    }

    /// Deliver the response to an in-flight `requestEffectTarget` command.
    ///
    /// Both historical target shapes normalize to [`Styleable`]. An error
    /// resolves the target to "explicitly none" after reporting it, so
    /// queued callers are still released.
    pub fn effect_target_request_completed(
        &mut self,
        result: Result<Option<EffectTargetPayload>, AgentError>,
    ) {
        let target = match result {
            Ok(payload) => payload.map(Styleable::from_payload),
            Err(error) => {
                tracing::error!(
                    animation_id = %self.animation_id,
                    %error,
                    "effect target request failed"
                );
                None
            }
        };
        self.effect_target.resolve(target);
    }

    /// The owning manager observed a name change.
    pub fn name_changed(&mut self, name: Option<String>) {
        self.name = name.filter(|name| !name.is_empty());
        self.pending_events.push(AnimationEvent::NameChanged);
    }

    /// The owning manager observed an effect change.
    ///
    /// The cached effect is discarded. Remote versions without an explicit
    /// effect request embed the new effect inline; for those the payload
    /// is normalized and cached immediately instead of waiting for a
    /// re-fetch.
    pub fn effect_changed(&mut self, payload: Option<EffectPayload>) {
        self.effect.invalidate();

        if !self.capabilities.supports_effect_request {
            self.effect.resolve(Effect::from_payload(payload));
        }

        self.pending_events.push(AnimationEvent::EffectChanged);
    }

    /// The owning manager observed a target change; the cached target
    /// reverts to unknown and the next request re-fetches.
    pub fn target_changed(&mut self) {
        self.effect_target.invalidate();
        self.pending_events.push(AnimationEvent::TargetChanged);
    }

    /// Drain events accumulated since the last call, in emission order.
    /// The boundary to the external publish/subscribe mechanism.
    pub fn take_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
