//! Operation: print the effective dependency tree as indented text.

use std::path::PathBuf;

use efftree_resolver::tree::{EffectiveTree, Node, CIRCULAR_MARKER};

/// Resolve the given roots and print one indented tree per root.
pub fn tree(roots: &[PathBuf]) -> miette::Result<()> {
    crate::print_resolved(roots, render_tree)
}

/// Render a resolved tree as indented text, one node per line.
///
/// Children come out alphabetically because the branch map iterates its keys
/// in order; the renderer relies on that rather than on any insertion order
/// the resolver might have used.
pub fn render_tree(tree: &EffectiveTree) -> String {
    let mut output = String::new();
    render_node(&mut output, &tree.id, &tree.root, "", true);
    output
}

fn render_node(output: &mut String, id: &str, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─ " } else { "├─ " };
    match node {
        Node::Circular => {
            output.push_str(&format!("{prefix}{connector}{id}: {CIRCULAR_MARKER}\n"));
        }
        Node::Branch(children) => {
            output.push_str(&format!("{prefix}{connector}{id}\n"));
            let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
            let count = children.len();
            for (i, (child_id, child)) in children.iter().enumerate() {
                render_node(output, child_id, child, &child_prefix, i == count - 1);
            }
        }
    }
}
