//! Operation: print the effective dependency tree as a flat list of paths.

use std::path::PathBuf;

use efftree_resolver::tree::{EffectiveTree, Node, CIRCULAR_MARKER};

/// Resolve the given roots and print one flat path list per root.
pub fn list(roots: &[PathBuf]) -> miette::Result<()> {
    crate::print_resolved(roots, render_list)
}

/// Render a resolved tree as one line per node: the space-joined chain of
/// identities from the root down. A circular node terminates its branch with
/// a trailing `[Circular]` token. Sibling order is alphabetical.
pub fn render_list(tree: &EffectiveTree) -> String {
    let mut lines = Vec::new();
    let mut chain = Vec::new();
    walk(&tree.id, &tree.root, &mut chain, &mut lines);
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn walk(id: &str, node: &Node, chain: &mut Vec<String>, lines: &mut Vec<String>) {
    chain.push(id.to_string());
    match node {
        Node::Circular => {
            lines.push(format!("{} {CIRCULAR_MARKER}", chain.join(" ")));
        }
        Node::Branch(children) => {
            lines.push(chain.join(" "));
            for (child_id, child) in children {
                walk(child_id, child, chain, lines);
            }
        }
    }
    chain.pop();
}
