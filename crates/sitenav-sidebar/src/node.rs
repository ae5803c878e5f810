//! Navigation tree nodes.

use serde::Serialize;

/// Navigation node for the rendered sidebar.
///
/// The leaf/group distinction is resolved once at construction time; the
/// rendering layer never has to re-infer it from shape. Serializes untagged
/// to `{label, href}` for leaves and `{label, children}` for groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Link to a single document.
    Leaf {
        /// Display label.
        label: String,
        /// Link target, base-prefixed.
        href: String,
    },
    /// Nested section with ordered children.
    Group {
        /// Display label.
        label: String,
        /// Child nodes, in render order.
        children: Vec<NavNode>,
    },
}

impl NavNode {
    /// Create a leaf node.
    #[must_use]
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Create a group node.
    #[must_use]
    pub fn group(label: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Group {
            label: label.into(),
            children,
        }
    }

    /// Display label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Child nodes of a group; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }
}
