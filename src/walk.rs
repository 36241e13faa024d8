// src/walk.rs
// =============================================================================
// This module implements a generic depth-first tree traversal.
//
// It works over any `ego_tree::Tree<T>` — including the DOM that the `scraper`
// crate produces when it parses HTML — and invokes caller-supplied callbacks:
// - pre:  called on a node BEFORE any of its children are visited
// - post: called on a node AFTER all of its children are visited
//
// Either callback can be absent; with both absent the call is a no-op walk.
//
// We deliberately avoid recursion here. A pathological document can nest
// elements thousands of levels deep, and a recursive walk would blow the
// call stack. Instead we keep an explicit stack of (node, child iterator)
// frames, which visits nodes in exactly the same order a recursive
// pre/post walk would.
//
// Rust concepts:
// - Trait objects (&mut dyn FnMut): Callbacks of any closure type
// - Option<&mut ...>: An optional borrowed callback, like a nullable func
// - Lifetimes ('a): The NodeRef handles borrow from the tree itself
// =============================================================================

use ego_tree::iter::Children;
use ego_tree::NodeRef;

// Walks the tree rooted at `root` depth-first, calling `pre` on each node
// before its children and `post` after them.
//
// Parameters:
//   root: handle to the root node (NodeRef is Copy, so we take it by value)
//   pre:  optional callback invoked in pre-order
//   post: optional callback invoked in post-order
//
// Guarantees:
// - Every node is visited exactly once per supplied callback
// - Children are visited in left-to-right sibling order, so for an HTML
//   document the pre-order sequence equals document order
// - Callbacks must not mutate the tree being walked; the shared borrow held
//   by NodeRef means the compiler rejects that anyway
//
// A NodeRef always points at a real node, so the "nil root" case of a
// pointer-based tree cannot arise here. Callers that might not have a tree
// at all hold an Option<NodeRef> and simply don't call us.
pub fn for_each_node<'a, T>(
    root: NodeRef<'a, T>,
    mut pre: Option<&mut dyn FnMut(NodeRef<'a, T>)>,
    mut post: Option<&mut dyn FnMut(NodeRef<'a, T>)>,
) {
    // The root gets its pre callback before it goes on the stack,
    // matching what the first step of the recursive version would do
    if let Some(f) = pre.as_mut() {
        f(root);
    }

    // Each frame pairs a node with the iterator over its remaining children,
    // i.e. how far into that node's child list the walk has progressed
    let mut stack: Vec<(NodeRef<'a, T>, Children<'a, T>)> = vec![(root, root.children())];

    loop {
        // Advance the child iterator of the node on top of the stack.
        // We match on last_mut() first so the mutable borrow of the stack
        // ends before we push or pop below.
        let next_child = match stack.last_mut() {
            Some((_, children)) => children.next(),
            None => break, // stack empty: the walk is complete
        };

        match next_child {
            Some(child) => {
                // Descend: pre-visit the child, then make it the new top
                if let Some(f) = pre.as_mut() {
                    f(child);
                }
                stack.push((child, child.children()));
            }
            None => {
                // The top node has no children left: post-visit it and ascend
                if let Some((node, _)) = stack.pop() {
                    if let Some(f) = post.as_mut() {
                        f(node);
                    }
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `Option<&mut dyn FnMut(...)>` instead of a generic parameter?
//    - With generics, a caller passing None for one callback would have to
//      spell out a closure type for it (Rust can't infer the type of a None)
//    - A trait object sidesteps that: `None` works, and `Some(&mut closure)`
//      works for any closure
//    - `dyn FnMut` = "some closure that can be called repeatedly and may
//      capture mutable state" (our link collector mutates a Vec, so Fn is
//      not enough and FnOnce is too weak)
//
// 2. Why is the iterative version equivalent to the recursive one?
//    - A recursive call's stack frame remembers "which child comes next";
//      our (node, Children) tuple stores exactly that
//    - Pushing a frame = making the recursive call (so pre fires first)
//    - Popping a frame = returning from it (so post fires last)
//
// 3. What is NodeRef?
//    - A small Copy handle (tree pointer + node id) into an ego_tree::Tree
//    - .children() returns an iterator over the node's direct children
//    - It borrows the tree immutably, which is how the compiler guarantees
//      callbacks cannot restructure the tree mid-walk
// -----------------------------------------------------------------------------
