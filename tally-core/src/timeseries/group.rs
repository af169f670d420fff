use crate::{DeepGroup, DeepItem, DeepRow};

/// Run-length group deep rows by `group_key`.
///
/// A row joins the last emitted group only when it shares that group's key;
/// otherwise it opens a new group. Equal keys separated by a different key
/// therefore produce separate groups. Sources are expected to return rows
/// ordered so that equal keys are contiguous.
///
/// ```
/// use tally_core::{DeepRow, group_deep_rows};
///
/// let groups = group_deep_rows([
///     DeepRow::new("Bread", "Flour", 80),
///     DeepRow::new("Dairy", "Milk", 95),
///     DeepRow::new("Dairy", "Eggs", 130),
/// ]);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[1].items.len(), 2);
/// ```
pub fn group_deep_rows<I>(rows: I) -> Vec<DeepGroup>
where
    I: IntoIterator<Item = DeepRow>,
{
    let mut out: Vec<DeepGroup> = Vec::new();
    for row in rows {
        let item = DeepItem {
            item: row.item,
            cost: row.cost,
        };
        match out.last_mut() {
            Some(last) if last.group_key == row.group_key => last.items.push(item),
            _ => out.push(DeepGroup {
                group_key: row.group_key,
                items: vec![item],
            }),
        }
    }
    out
}
