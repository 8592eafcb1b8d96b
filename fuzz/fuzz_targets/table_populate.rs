#![no_main]

use libfuzzer_sys::fuzz_target;
use widgets::{Grid, PopulateOptions, Table, Value};

/// Decodes bytes into a ragged grid: each byte is a cell, `0xFF` ends a row,
/// `0x00` is an empty cell.
fn decode_grid(bytes: &[u8]) -> Grid {
    let mut grid = vec![Vec::new()];
    for &byte in bytes {
        match byte {
            0xFF => grid.push(Vec::new()),
            0x00 => grid.last_mut().into_iter().for_each(|row| row.push(Value::Empty)),
            n => grid
                .last_mut()
                .into_iter()
                .for_each(|row| row.push(Value::from(i64::from(n)))),
        }
    }
    grid
}

fn check_rectangular(table: &Table, width: usize) {
    for row in table.rows() {
        assert_eq!(row.len(), width, "normalized populate left a ragged row");
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let split = rest.len() / 2;
    let first = decode_grid(&rest[..split]);
    let second = decode_grid(&rest[split..]);

    let mut table = Table::from_data(first);
    let options = PopulateOptions {
        resize_x: flags & 1 != 0,
        normalize: flags & 2 != 0,
    };
    let before = table.clone();
    let max_width = second.iter().map(Vec::len).max().unwrap_or(0);
    let rows = second.len();
    match table.populate(Some(second), options) {
        Ok(_) => {
            assert_eq!(table.row_count(), rows);
            if options.normalize {
                let width = if options.resize_x {
                    max_width
                } else {
                    before.column_count()
                };
                check_rectangular(&table, width);
            }
        }
        Err(_) => {
            assert!(!options.resize_x);
            assert_eq!(table, before, "rejected populate mutated the table");
        }
    }

    let col = usize::from(flags >> 2);
    let before = table.clone();
    if table.col_class("x", Some(col)).is_err() {
        assert_eq!(table, before, "rejected col_class mutated the table");
    }
});
