// SPDX-License-Identifier: MIT OR Apache-2.0
//! Creation-site stack traces attached to animations.

use crate::animation::AnimationModelError;
use crate::payload::{CallFramePayload, StackTracePayload};

/// One frame of a creation-site stack trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Function name, when known
    pub function_name: Option<String>,
    /// Script URL
    pub url: Option<String>,
    /// Zero-based line number
    pub line_number: Option<u32>,
    /// Zero-based column number
    pub column_number: Option<u32>,
}

/// Opaque creation-site trace; the model never interprets the frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTrace {
    call_frames: Vec<CallFrame>,
}

impl StackTrace {
    /// Validate and convert a stack-trace payload.
    ///
    /// A payload with no call frames is a construction-time contract
    /// violation.
    pub fn from_payload(payload: StackTracePayload) -> Result<Self, AnimationModelError> {
        if payload.call_frames.is_empty() {
            return Err(AnimationModelError::MalformedStackTrace);
        }
        Ok(Self {
            call_frames: payload.call_frames.into_iter().map(CallFrame::from_payload).collect(),
        })
    }

    /// Call frames, innermost first.
    pub fn call_frames(&self) -> &[CallFrame] {
        &self.call_frames
    }
}

impl CallFrame {
    fn from_payload(payload: CallFramePayload) -> Self {
        Self {
            function_name: payload.function_name,
            url: payload.url,
            line_number: payload.line_number,
            column_number: payload.column_number,
        }
    }
}
