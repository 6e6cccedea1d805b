// SPDX-License-Identifier: MIT OR Apache-2.0
//! Protocol payloads delivered by the remote inspection agent.
//!
//! Every field the remote side may omit is optional; the model
//! distinguishes "absent from the payload" from any in-band sentinel.
//! Several shapes exist in two historical forms (legacy `backtrace`
//! spelling, bare-node-id effect targets) and are normalized downstream.

use serde::{Deserialize, Deserializer};

/// Payload describing one remote animation, as delivered at creation time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPayload {
    /// Opaque identifier assigned by the remote side, required
    pub animation_id: String,
    /// Declared name
    #[serde(default)]
    pub name: Option<String>,
    /// CSS animation name; mutually exclusive with `css_transition_property`
    #[serde(default)]
    pub css_animation_name: Option<String>,
    /// CSS transition property; mutually exclusive with `css_animation_name`
    #[serde(default)]
    pub css_transition_property: Option<String>,
    /// Creation-site stack trace
    #[serde(default)]
    pub stack_trace: Option<StackTracePayload>,
    /// Legacy spelling of `stackTrace`: a bare call-frame list sent by
    /// older remote versions
    #[serde(default)]
    pub backtrace: Option<Vec<CallFramePayload>>,
    /// Inline effect data; older remote versions embed it here instead of
    /// serving an explicit effect request
    #[serde(default)]
    pub effect: Option<EffectPayload>,
}

/// Raw effect data as the remote agent serializes it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectPayload {
    /// Delay before the first iteration, in milliseconds
    #[serde(default)]
    pub start_delay: Option<f64>,
    /// Delay after the last iteration, in milliseconds
    #[serde(default)]
    pub end_delay: Option<f64>,
    /// Iteration count; `-1` and explicit `null` both mean infinite, so
    /// the field keeps absent / null / numeric apart
    #[serde(default, deserialize_with = "double_option")]
    pub iteration_count: Option<Option<f64>>,
    /// Offset into the first iteration
    #[serde(default)]
    pub iteration_start: Option<f64>,
    /// Duration of one iteration, in milliseconds
    #[serde(default)]
    pub iteration_duration: Option<f64>,
    /// Timing function in source syntax, parsed during normalization
    #[serde(default)]
    pub timing_function: Option<String>,
    /// Playback direction keyword
    #[serde(default)]
    pub playback_direction: Option<String>,
    /// Fill mode keyword
    #[serde(default)]
    pub fill_mode: Option<String>,
    /// Keyframes in timeline order
    #[serde(default)]
    pub keyframes: Option<Vec<KeyframePayload>>,
}

/// Raw keyframe data inside an effect payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframePayload {
    /// Offset of this keyframe within the iteration, in `[0, 1]`
    #[serde(default)]
    pub offset: Option<f64>,
    /// Easing toward the next keyframe, in source syntax
    #[serde(default)]
    pub easing: Option<String>,
    /// Inline style text applied at this keyframe
    #[serde(default)]
    pub style: Option<String>,
}

/// Effect-target descriptor, in either of its two historical shapes.
///
/// Older remote versions send a bare numeric node id; newer versions send
/// a structured styleable descriptor. Both normalize to
/// [`Styleable`](crate::styleable::Styleable).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EffectTargetPayload {
    /// Legacy bare node id
    NodeId(u64),
    /// Structured styleable descriptor
    Styleable(StyleablePayload),
}

/// Structured effect-target shape sent by newer remote versions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleablePayload {
    /// Identifier of the styled node
    pub node_id: u64,
    /// Pseudo-element the effect targets, when not the node itself
    #[serde(default)]
    pub pseudo_id: Option<String>,
}

/// Creation-site stack trace payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackTracePayload {
    /// Call frames, innermost first; an empty list is malformed
    pub call_frames: Vec<CallFramePayload>,
}

/// One call frame of a creation-site stack trace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFramePayload {
    /// Function name, when known
    #[serde(default)]
    pub function_name: Option<String>,
    /// Script URL
    #[serde(default)]
    pub url: Option<String>,
    /// Zero-based line number
    #[serde(default)]
    pub line_number: Option<u32>,
    /// Zero-based column number
    #[serde(default)]
    pub column_number: Option<u32>,
}

/// Keep "field absent" and "field explicitly null" distinguishable:
/// absent stays `None`, null becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
