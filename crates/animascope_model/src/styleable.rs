// SPDX-License-Identifier: MIT OR Apache-2.0
//! The node an animation's effect applies to.

use crate::payload::EffectTargetPayload;

/// A resolved effect target: a node, optionally narrowed to a
/// pseudo-element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styleable {
    /// Identifier of the styled node
    pub node_id: u64,
    /// Pseudo-element the effect targets, when not the node itself
    pub pseudo_id: Option<String>,
}

impl Styleable {
    /// Normalize either historical target shape to the structured form.
    pub fn from_payload(payload: EffectTargetPayload) -> Self {
        match payload {
            EffectTargetPayload::NodeId(node_id) => Self { node_id, pseudo_id: None },
            EffectTargetPayload::Styleable(styleable) => Self {
                node_id: styleable.node_id,
                pseudo_id: styleable.pseudo_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::StyleablePayload;

    #[test]
    fn test_legacy_node_id_matches_structured_payload() {
        let legacy = Styleable::from_payload(EffectTargetPayload::NodeId(42));
        let structured = Styleable::from_payload(EffectTargetPayload::Styleable(
            StyleablePayload { node_id: 42, pseudo_id: None },
        ));
        assert_eq!(legacy, structured);
        assert_eq!(legacy.node_id, 42);
    }
}
