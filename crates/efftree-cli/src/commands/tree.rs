//! Handler for `efftree tree`.

use std::path::PathBuf;

use miette::Result;

use efftree_ops::ops_tree;

pub fn exec(roots: &[PathBuf]) -> Result<()> {
    ops_tree::tree(roots)
}
