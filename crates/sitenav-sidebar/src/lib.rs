//! Sidebar navigation tree builder for documentation sites.
//!
//! Turns a flat list of content documents (slash-delimited slug plus
//! optional display title) into an ordered, nested navigation tree for
//! UI presentation. Sibling order is controlled by an [`OrderingPolicy`]:
//! segments named by the policy come first, in policy order, and everything
//! else keeps its first-seen order.
//!
//! The builder is a pure function over its input: no I/O, no caching, no
//! shared state between calls.
//!
//! # Example
//!
//! ```
//! use sitenav_sidebar::{Document, NavNode, OrderingPolicy, SidebarBuilder};
//!
//! let policy = OrderingPolicy::from_rules([("", vec!["getting-started", "guides"])]);
//! let builder = SidebarBuilder::new("/docs", policy);
//!
//! let documents = vec![
//!     Document::new("guides/modules"),
//!     Document::with_title("getting-started", "Start Here"),
//! ];
//!
//! let sidebar = builder.build(&documents);
//! assert_eq!(sidebar[0], NavNode::leaf("Start Here", "/docs/getting-started"));
//! assert_eq!(sidebar[1].label(), "Guides");
//! ```

mod builder;
mod document;
mod node;
mod policy;
mod title;

pub use builder::SidebarBuilder;
pub use document::Document;
pub use node::NavNode;
pub use policy::OrderingPolicy;
pub use title::humanize;
