//! Sidebar tree assembly, reordering, and conversion.
//!
//! [`SidebarBuilder::build`] runs three steps over the input documents:
//!
//! 1. Assemble an insertion-ordered tree keyed by slug segment, creating
//!    group placeholders for intermediate segments and leaves at final ones.
//! 2. Recursively reorder each level against the [`OrderingPolicy`]:
//!    segments named by the level's rule first, in rule order, then the
//!    rest in first-seen order.
//! 3. Convert the tree into the public [`NavNode`] array, prefixing every
//!    leaf link with the site base path.
//!
//! The intermediate tree is local to one `build` call; nothing is cached
//! or shared between invocations.

use tracing::{debug, warn};

use crate::document::Document;
use crate::node::NavNode;
use crate::policy::OrderingPolicy;
use crate::title::humanize;

/// Builds ordered navigation trees from document collections.
///
/// Captures the fixed configuration (site base path and ordering policy)
/// once; [`build`](Self::build) is then a pure function of its input.
#[derive(Clone, Debug)]
pub struct SidebarBuilder {
    /// Site URL prefix, normalized to carry no trailing slash.
    base_path: String,
    policy: OrderingPolicy,
}

/// Intermediate tree entry, keyed by slug segment in the parent [`Tree`].
enum Entry {
    Leaf { label: String, href: String },
    Group(Tree),
}

/// Insertion-ordered mapping from slug segment to entry.
///
/// A `Vec` keeps first-seen order for the stable-fallback ordering rule.
/// Levels hold at most a few dozen siblings, so linear key lookup is fine.
#[derive(Default)]
struct Tree {
    entries: Vec<(String, Entry)>,
}

impl Tree {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl SidebarBuilder {
    /// Create a builder with a site base path and an ordering policy.
    ///
    /// Trailing slashes are stripped from the base path so that leaf links
    /// concatenate cleanly (`"/docs/" + "/guide"` would otherwise produce
    /// a double slash).
    #[must_use]
    pub fn new(base_path: impl Into<String>, policy: OrderingPolicy) -> Self {
        let mut base_path = base_path.into();
        let trimmed_len = base_path.trim_end_matches('/').len();
        base_path.truncate(trimmed_len);
        Self { base_path, policy }
    }

    /// Build the navigation tree for a document collection.
    ///
    /// Deterministic for a fixed input sequence: every well-formed document
    /// maps to exactly one leaf, reachable through groups named by its slug
    /// segments. Documents with an empty slug or an empty segment are
    /// skipped with a warning; duplicate slugs resolve last-write-wins.
    ///
    /// # Arguments
    ///
    /// * `documents` - Document collection, in encounter order
    ///
    /// # Returns
    ///
    /// Ordered [`NavNode`] trees for the sidebar; empty input yields an
    /// empty list.
    #[must_use]
    pub fn build(&self, documents: &[Document]) -> Vec<NavNode> {
        debug!(documents = documents.len(), "building sidebar");

        let mut root = Tree::default();
        for document in documents {
            if document.slug.is_empty() || document.segments().any(str::is_empty) {
                warn!(slug = %document.slug, "slug has an empty segment, skipping document");
                continue;
            }
            insert_document(&mut root, document);
        }

        let mut section = Vec::new();
        let reordered = self.reorder(root, &mut section);
        self.convert(reordered)
    }

    /// Reorder one level against the policy rule for its section path,
    /// recursing into groups with the accumulated section path.
    fn reorder(&self, tree: Tree, section: &mut Vec<String>) -> Tree {
        let section_key = section.join("/");
        let mut slots: Vec<Option<(String, Entry)>> =
            tree.entries.into_iter().map(Some).collect();
        let mut picked = Vec::with_capacity(slots.len());

        // Rule-named segments first, in rule order.
        if let Some(rule) = self.policy.rule(&section_key) {
            for name in rule {
                let found = slots
                    .iter_mut()
                    .find(|slot| slot.as_ref().is_some_and(|(key, _)| key == name));
                if let Some(slot) = found
                    && let Some(entry) = slot.take()
                {
                    picked.push(entry);
                }
            }
        }

        // Remaining segments keep first-seen order.
        picked.extend(slots.into_iter().flatten());

        let entries = picked
            .into_iter()
            .map(|(key, entry)| {
                let entry = match entry {
                    Entry::Group(subtree) => {
                        section.push(key.clone());
                        let reordered = self.reorder(subtree, section);
                        section.pop();
                        Entry::Group(reordered)
                    }
                    leaf @ Entry::Leaf { .. } => leaf,
                };
                (key, entry)
            })
            .collect();

        Tree { entries }
    }

    /// Convert the ordered tree into the public array form, prefixing leaf
    /// links with the base path.
    fn convert(&self, tree: Tree) -> Vec<NavNode> {
        tree.entries
            .into_iter()
            .map(|(segment, entry)| match entry {
                Entry::Leaf { label, href } => NavNode::Leaf {
                    label,
                    href: format!("{}{href}", self.base_path),
                },
                Entry::Group(subtree) => NavNode::Group {
                    label: humanize(&segment),
                    children: self.convert(subtree),
                },
            })
            .collect()
    }
}

/// Insert one document into the tree, creating group placeholders along
/// its slug segments.
///
/// Duplicate slugs resolve last-write-wins. A document whose slug collides
/// with an existing group, or that would turn an existing leaf into a
/// group, is skipped: the structure that preserves more documents wins.
fn insert_document(root: &mut Tree, document: &Document) {
    let segments: Vec<&str> = document.segments().collect();
    let last = segments.len() - 1;

    let mut current = root;
    for (depth, &segment) in segments.iter().enumerate() {
        if depth == last {
            let label = document
                .title
                .clone()
                .unwrap_or_else(|| humanize(segment));
            let href = format!("/{}", document.slug);

            match current.position(segment) {
                Some(pos) => match &mut current.entries[pos].1 {
                    Entry::Leaf {
                        label: existing_label,
                        href: existing_href,
                    } => {
                        warn!(slug = %document.slug, "duplicate slug, later document wins");
                        *existing_label = label;
                        *existing_href = href;
                    }
                    Entry::Group(_) => {
                        warn!(slug = %document.slug, "slug collides with a section, skipping document");
                    }
                },
                None => current.entries.push((segment.to_owned(), Entry::Leaf { label, href })),
            }
            return;
        }

        let pos = match current.position(segment) {
            Some(pos) => pos,
            None => {
                current
                    .entries
                    .push((segment.to_owned(), Entry::Group(Tree::default())));
                current.entries.len() - 1
            }
        };
        match &mut current.entries[pos].1 {
            Entry::Group(subtree) => current = subtree,
            Entry::Leaf { .. } => {
                warn!(slug = %document.slug, "slug nests under an existing page, skipping document");
                return;
            }
        }
    }
}
