//! Traversal of the on-chain token directory.
//!
//! The directory is a sorted singly-linked list, one UTxO per node, keyed
//! by programmable-token policy id. Registering a new policy spends the
//! unique node whose span strictly contains the new key and rewrites its
//! next-key to point at the inserted node. This crate locates that node
//! among a set of scanned UTxOs and builds the updated datum.

pub mod error;
pub mod node;

pub use error::DirectoryError;
pub use node::{
    covers_key, find_insertion_node, is_head, is_tail, node_after_insert, InsertionPoint, HEAD_KEY,
    TAIL_NEXT_KEY,
};
