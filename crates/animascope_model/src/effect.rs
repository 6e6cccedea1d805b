// SPDX-License-Identifier: MIT OR Apache-2.0
//! Normalized effect data: timing, keyframes, and playback description.
//!
//! The normalizer turns a raw [`EffectPayload`] into the canonical in-model
//! [`Effect`]: sentinel iteration counts become [`IterationCount::Infinite`],
//! timing-function strings are parsed, keyframe style text is reflowed for
//! display. A fetch that returned nothing still yields an empty `Effect`,
//! so "fetched but empty" stays distinguishable from "not yet fetched".

use animascope_timing::TimingFunction;

use crate::payload::{EffectPayload, KeyframePayload};

/// How many times an effect iterates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationCount {
    /// A fixed, non-negative number of iterations
    Finite(f64),
    /// The effect repeats forever
    Infinite,
}

impl IterationCount {
    /// Numeric view: [`Self::Infinite`] reads as `f64::INFINITY`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Finite(count) => count,
            Self::Infinite => f64::INFINITY,
        }
    }

    /// Canonicalize the wire encoding. `-1` and explicit `null` (older
    /// remote versions encoded infinity as null) both mean infinite.
    fn from_payload(value: Option<f64>) -> Self {
        match value {
            None => Self::Infinite,
            Some(count) if count == -1.0 => Self::Infinite,
            Some(count) => Self::Finite(count),
        }
    }
}

/// Direction an effect plays in on each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackDirection {
    /// Forwards every iteration
    Normal,
    /// Backwards every iteration
    Reverse,
    /// Alternating, starting forwards
    Alternate,
    /// Alternating, starting backwards
    AlternateReverse,
}

impl PlaybackDirection {
    /// Parse the protocol keyword; unknown keywords are reported to the
    /// diagnostic sink and dropped.
    pub fn from_protocol(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "reverse" => Some(Self::Reverse),
            "alternate" => Some(Self::Alternate),
            "alternate-reverse" => Some(Self::AlternateReverse),
            _ => {
                tracing::error!(value, "unknown playback direction");
                None
            }
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Reverse => "Reverse",
            Self::Alternate => "Alternate",
            Self::AlternateReverse => "Alternate Reverse",
        }
    }
}

/// Whether an effect applies styles outside its active interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// No styles before or after the active interval
    None,
    /// Styles persist after the effect ends
    Forwards,
    /// Styles apply before the effect begins
    Backwards,
    /// Styles apply before and after
    Both,
    /// Resolved by the effect's configuration
    Auto,
}

impl FillMode {
    /// Parse the protocol keyword; unknown keywords are reported to the
    /// diagnostic sink and dropped.
    pub fn from_protocol(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "forwards" => Some(Self::Forwards),
            "backwards" => Some(Self::Backwards),
            "both" => Some(Self::Both),
            "auto" => Some(Self::Auto),
            _ => {
                tracing::error!(value, "unknown fill mode");
                None
            }
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Forwards => "Forwards",
            Self::Backwards => "Backwards",
            Self::Both => "Both",
            Self::Auto => "Auto",
        }
    }
}

/// A normalized keyframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Offset within the iteration, in `[0, 1]`
    pub offset: Option<f64>,
    /// Parsed easing toward the next keyframe
    pub easing: Option<TimingFunction>,
    /// Inline style text, reflowed one declaration per line
    pub style: Option<String>,
}

/// Normalized effect data. Every field the remote payload omitted is
/// `None` (or empty, for keyframes).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    /// Delay before the first iteration, in milliseconds
    pub start_delay: Option<f64>,
    /// Delay after the last iteration, in milliseconds
    pub end_delay: Option<f64>,
    /// Canonicalized iteration count
    pub iteration_count: Option<IterationCount>,
    /// Offset into the first iteration
    pub iteration_start: Option<f64>,
    /// Duration of one iteration, in milliseconds
    pub iteration_duration: Option<f64>,
    /// Parsed timing function
    pub timing_function: Option<TimingFunction>,
    /// Playback direction
    pub playback_direction: Option<PlaybackDirection>,
    /// Fill mode
    pub fill_mode: Option<FillMode>,
    /// Keyframes in timeline order
    pub keyframes: Vec<Keyframe>,
}

impl Effect {
    /// Normalize a raw effect payload.
    ///
    /// An absent payload still produces an (empty) `Effect`, never nothing:
    /// the coordinator's cache state is what encodes "not yet fetched".
    /// A timing-function string no parser recognizes is reported and
    /// dropped; the rest of the effect still normalizes.
    pub fn from_payload(payload: Option<EffectPayload>) -> Self {
        let Some(payload) = payload else {
            return Self::default();
        };

        Self {
            start_delay: payload.start_delay,
            end_delay: payload.end_delay,
            iteration_count: payload.iteration_count.map(IterationCount::from_payload),
            iteration_start: payload.iteration_start,
            iteration_duration: payload.iteration_duration,
            timing_function: payload.timing_function.as_deref().and_then(parse_timing_function),
            playback_direction: payload
                .playback_direction
                .as_deref()
                .and_then(PlaybackDirection::from_protocol),
            fill_mode: payload.fill_mode.as_deref().and_then(FillMode::from_protocol),
            keyframes: payload
                .keyframes
                .unwrap_or_default()
                .into_iter()
                .map(Keyframe::from_payload)
                .collect(),
        }
    }
}

impl Keyframe {
    fn from_payload(payload: KeyframePayload) -> Self {
        Self {
            offset: payload.offset,
            easing: payload.easing.as_deref().and_then(parse_timing_function),
            style: payload.style.as_deref().map(reflow_style),
        }
    }
}

fn parse_timing_function(text: &str) -> Option<TimingFunction> {
    let parsed = TimingFunction::parse(text);
    if parsed.is_none() {
        tracing::error!(text, "unparseable timing function");
    }
    parsed
}

/// Rewrite each declaration-terminating `;` followed by whitespace as
/// `;\n`, so multi-declaration style text displays one declaration per
/// line. Purely cosmetic.
fn reflow_style(style: &str) -> String {
    let mut reflowed = String::with_capacity(style.len());
    let mut characters = style.chars().peekable();
    while let Some(character) = characters.next() {
        reflowed.push(character);
        if character == ';' && characters.peek().is_some_and(|next| next.is_whitespace()) {
            while characters.peek().is_some_and(|next| next.is_whitespace()) {
                characters.next();
            }
            reflowed.push('\n');
        }
    }
    reflowed
}
