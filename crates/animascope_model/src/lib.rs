// SPDX-License-Identifier: MIT OR Apache-2.0
//! Local model of remotely-inspected animations.
//!
//! This crate mirrors animation instances exposed by a remote inspection
//! agent running in another process:
//! - Strongly-typed protocol payloads and their legacy-shape normalization
//! - Lazy, coalescing fetches for effect data and effect targets
//! - Effect normalization (sentinel iteration counts, parsed timing
//!   functions, reflowed keyframe styles)
//! - Change-notification handling and republished state-change events
//!
//! ## Architecture
//!
//! The model is single-threaded cooperative: "concurrency" means
//! interleaved asynchronous callers, not parallel execution. Each
//! [`Animation`] owns two [`DeferredFetch`] coordinators which guarantee
//! at most one remote command in flight per cached value. Commands go out
//! through an injected [`AnimationAgent`]; responses and change
//! notifications come back through the owning manager.

pub mod agent;
pub mod animation;
pub mod effect;
pub mod fetch;
pub mod payload;
pub mod stack_trace;
pub mod styleable;

pub use agent::{AgentError, AnimationAgent, ProtocolCapabilities};
pub use animation::{
    Animation, AnimationEvent, AnimationId, AnimationModelError, AnimationType,
};
pub use effect::{Effect, FillMode, IterationCount, Keyframe, PlaybackDirection};
pub use fetch::{Continuation, DeferredFetch, Disposition};
pub use payload::{
    AnimationPayload, CallFramePayload, EffectPayload, EffectTargetPayload, KeyframePayload,
    StackTracePayload, StyleablePayload,
};
pub use stack_trace::{CallFrame, StackTrace};
pub use styleable::Styleable;
