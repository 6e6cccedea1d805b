// SPDX-License-Identifier: MIT OR Apache-2.0
//! Boundary to the remote inspection agent.
//!
//! The model only dispatches commands; the transport owns delivery and
//! calls back into the model's `*_request_completed` entry points with the
//! response. Each command's response is delivered at most once.

use crate::animation::AnimationId;

/// Command surface the model drives.
///
/// Implementations are fire-and-forget: issuing a command must not block,
/// and the response arrives later through the owning manager.
pub trait AnimationAgent {
    /// Ask the remote side for the animation's effect data.
    fn request_effect(&mut self, animation_id: &AnimationId);

    /// Ask the remote side for the node the effect applies to.
    fn request_effect_target(&mut self, animation_id: &AnimationId);
}

/// Capability descriptor for the connected remote version.
///
/// Several protocol versions are supported in one build; the manager
/// detects the remote's capabilities once and injects them at model
/// construction, so version-conditional behavior stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolCapabilities {
    /// Whether the remote serves an explicit effect request. Older
    /// versions instead embed effect data inline in change notifications.
    pub supports_effect_request: bool,
}

impl ProtocolCapabilities {
    /// Capabilities of current remote versions.
    pub fn modern() -> Self {
        Self { supports_effect_request: true }
    }

    /// Capabilities of older remote versions that push effect data inline.
    pub fn legacy_inline_effect() -> Self {
        Self { supports_effect_request: false }
    }
}

impl Default for ProtocolCapabilities {
    fn default() -> Self {
        Self::modern()
    }
}

/// Failure reported by the transport or the remote agent for one command.
#[derive(Debug, Clone, thiserror::Error)]
#[error("animation agent error: {0}")]
pub struct AgentError(pub String);
