//! Column-level mutations for [`crate::types::Table`].

use crate::error::TableResult;
use crate::types::Table;

/// Append an empty column named `name` to `table`.
///
/// This is a convenience wrapper around [`Table::new_column`].
pub fn new_column(table: &mut Table, name: impl Into<String>) {
    table.new_column(name)
}

/// Reorder the columns of `table` so that old column `new_order[i]` becomes column `i`.
///
/// This is a convenience wrapper around [`Table::reorder_columns`]. On error the table is
/// left untouched.
pub fn reorder_columns(table: &mut Table, new_order: &[usize]) -> TableResult<()> {
    table.reorder_columns(new_order)
}

#[cfg(test)]
mod tests {
    use super::{new_column, reorder_columns};
    use crate::types::Table;

    fn sample_table() -> Table {
        Table::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec!["1".to_string(), "a".to_string()],
                vec!["2".to_string(), "b".to_string()],
            ],
        )
    }

    #[test]
    fn new_column_then_reorder_moves_it_to_front() {
        let mut t = sample_table();
        new_column(&mut t, "note");
        reorder_columns(&mut t, &[2, 0, 1]).unwrap();

        assert_eq!(t.header, vec!["note", "id", "name"]);
        assert_eq!(t.rows, vec![vec!["", "1", "a"], vec!["", "2", "b"]]);
    }

    #[test]
    fn identity_order_is_a_no_op() {
        let mut t = sample_table();
        reorder_columns(&mut t, &[0, 1]).unwrap();
        assert_eq!(t, sample_table());
    }
}
