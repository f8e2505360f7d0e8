//! Resolution of accumulated letter groups into Greek text

use crate::data::table::MappingTable;

/// Append the rendering of one accumulated group to `out`
///
/// The whole group is looked up as a composite key. A group with no entry
/// is copied through unchanged.
pub fn resolve_group(table: &MappingTable, group: &str, out: &mut String) {
    if group.is_empty() {
        return;
    }
    match table.lookup(group) {
        Some(unit) => out.push_str(unit),
        None => {
            tracing::trace!(group, "no mapping for group, passing through");
            out.push_str(group);
        }
    }
}
