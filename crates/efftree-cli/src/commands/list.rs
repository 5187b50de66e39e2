//! Handler for `efftree list`.

use std::path::PathBuf;

use miette::Result;

use efftree_ops::ops_list;

pub fn exec(roots: &[PathBuf]) -> Result<()> {
    ops_list::list(roots)
}
