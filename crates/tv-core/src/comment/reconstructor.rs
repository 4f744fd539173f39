//! Indentation-chain tree reconstruction
//!
//! Rebuilds the comment hierarchy from the flat record list using the
//! indentation signal as the sole structural cue. Ancestry rule: a record's
//! parent is the nearest preceding record with a strictly smaller indent;
//! equal indent closes the current subtree and makes siblings.
//!
//! The chain of open ancestors is an explicit stack over an arena of slots,
//! and the input is consumed through a cursor that can re-examine the same
//! record after each pop. Every record is pushed once and popped at most
//! once, so the whole pass is O(n) amortized even with retries.

use crate::comment::model::{CommentNode, CommentRecord, CommentTree};
use crate::error::{Result, ThreadvastError};

/// Indent of the synthetic sentinel root; strictly smaller than any
/// legitimate indent value.
const SENTINEL_INDENT: i64 = i64::MIN;

/// One open or closed node during reconstruction
struct Slot {
    record: CommentRecord,
    children: Vec<usize>,
}

/// Rebuild the nesting hierarchy of `records` (document order).
///
/// An empty input yields an empty tree. Popping past the sentinel root is
/// an internal-consistency failure: it can only happen when a record's
/// indent is out of range for the algorithm, which the extractor never
/// produces.
pub fn reconstruct(records: Vec<CommentRecord>) -> Result<CommentTree> {
    let mut arena: Vec<Slot> = Vec::with_capacity(records.len());
    let mut top_level: Vec<usize> = Vec::new();
    // Open-ancestor chain, shallowest first; `None` is the sentinel root.
    let mut chain: Vec<Option<usize>> = vec![None];

    let mut input = records.into_iter();
    let mut cursor = input.next();

    while let Some(record) = cursor.take() {
        let parent = *chain.last().ok_or_else(|| {
            ThreadvastError::InternalConsistency(format!(
                "record '{}' (indent {}) popped past the sentinel root",
                record.id, record.indent
            ))
        })?;
        let parent_indent = match parent {
            Some(index) => arena[index].record.indent,
            None => SENTINEL_INDENT,
        };

        if record.indent > parent_indent {
            // Strictly deeper: attach under the current chain top and open
            // the new subtree.
            let index = arena.len();
            arena.push(Slot {
                record,
                children: Vec::new(),
            });
            match parent {
                Some(p) => arena[p].children.push(index),
                None => top_level.push(index),
            }
            chain.push(Some(index));
            cursor = input.next();
        } else {
            // Equal or shallower: this ancestor's subtree is closed; retry
            // the same record against the next ancestor.
            chain.pop();
            cursor = Some(record);
        }
    }

    let roots = top_level
        .into_iter()
        .map(|index| materialize(&mut arena, index))
        .collect();
    Ok(CommentTree { roots })
}

/// Turn an arena slot (and its subtree) into an owned `CommentNode`.
///
/// Each slot is visited exactly once, so taking its contents is safe.
fn materialize(arena: &mut [Slot], index: usize) -> CommentNode {
    let child_indices = std::mem::take(&mut arena[index].children);
    let record = std::mem::replace(
        &mut arena[index].record,
        CommentRecord::new("", SENTINEL_INDENT),
    );

    let mut children = Vec::with_capacity(child_indices.len());
    for child in child_indices {
        children.push(materialize(arena, child));
    }
    CommentNode { record, children }
}
