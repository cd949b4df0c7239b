//! Ref handles - caller access to mounted elements.
//!
//! A [`NodeRef`] is an output slot: the caller creates it, passes it in
//! props, and the host writes the element's [`NodeHandle`] into it when
//! the tree is mounted. Unmounting clears it.
//!
//! The slot is a signal, so deriveds and effects that read a ref re-run
//! when it is filled or cleared.

use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};

/// Identity of one element inside a mounted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Shared slot the host fills with a mounted element's handle.
#[derive(Clone)]
pub struct NodeRef(Rc<Signal<Option<NodeHandle>>>);

impl Default for NodeRef {
    fn default() -> Self {
        Self(Rc::new(signal(None)))
    }
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted element, or `None` before mount and after unmount.
    pub fn get(&self) -> Option<NodeHandle> {
        self.0.get()
    }

    /// The underlying signal, for reading the ref inside a derived or effect.
    pub fn signal(&self) -> Signal<Option<NodeHandle>> {
        (*self.0).clone()
    }

    pub(crate) fn set(&self, handle: Option<NodeHandle>) {
        self.0.set(handle);
    }
}

// Two refs are equal when they share the same slot.
impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slot() {
        let node_ref = NodeRef::new();
        let forwarded = node_ref.clone();
        assert_eq!(node_ref.get(), None);

        forwarded.set(Some(NodeHandle::new(4)));
        assert_eq!(node_ref.get(), Some(NodeHandle::new(4)));
        assert_eq!(node_ref, forwarded);
        assert_ne!(node_ref, NodeRef::new());
    }

    #[test]
    fn test_derived_tracks_ref() {
        let node_ref = NodeRef::new();
        let is_mounted = spark_signals::derived({
            let slot = node_ref.signal();
            move || slot.get().is_some()
        });
        assert!(!is_mounted.get());

        node_ref.set(Some(NodeHandle::new(0)));
        assert!(is_mounted.get());

        node_ref.set(None);
        assert!(!is_mounted.get());
    }
}
