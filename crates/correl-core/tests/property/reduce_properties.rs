use correl_core::{reduce, Table};
use proptest::prelude::*;

/// A cell as it might appear in a hand-edited matrix export.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("n/a".to_string()),
        Just("NA".to_string()),
        (-1.0f64..=1.0).prop_map(|v| v.to_string()),
        (-1.0e3f64..1.0e3).prop_map(|v| format!("{:e}", v)),
    ]
}

/// A header of `n` distinct node names and up to `n` data rows, each no
/// wider than the header.
fn square_table() -> impl Strategy<Value = Table> {
    (1usize..8).prop_flat_map(|n| {
        let rows = prop::collection::vec(prop::collection::vec(cell(), 0..=n), 0..=n);
        rows.prop_map(move |data| {
            let names: Vec<String> = (0..n).map(|i| format!("N{i}")).collect();
            let mut all = Vec::with_capacity(data.len() + 1);
            let mut header = vec![String::new()];
            header.extend(names.iter().cloned());
            all.push(header);
            for (i, cells) in data.into_iter().enumerate() {
                let mut row = vec![names[i].clone()];
                row.extend(cells);
                all.push(row);
            }
            Table::new(all)
        })
    })
}

proptest! {
    #[test]
    fn node_count_matches_header(table in square_table()) {
        let doc = reduce(&table).unwrap();
        prop_assert_eq!(doc.nodes.len(), table.header().unwrap().len() - 1);
    }

    #[test]
    fn every_data_row_has_a_key_in_order(table in square_table()) {
        let doc = reduce(&table).unwrap();
        let expected: Vec<&str> = table.data_rows().iter().map(|r| r[0].as_str()).collect();
        let actual: Vec<&str> = doc.correlations.keys().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn only_upper_triangle_retained(table in square_table()) {
        let doc = reduce(&table).unwrap();
        for (row, entries) in doc.correlations.iter() {
            let row_index = doc.nodes.iter().position(|n| n == row).unwrap();
            for (column, value) in entries.iter() {
                let column_index = doc.nodes.iter().position(|n| n == column).unwrap();
                prop_assert!(column_index > row_index, "{} -> {}", row, column);
                prop_assert!(value.is_finite());
            }
        }
    }

    #[test]
    fn reduction_is_deterministic(table in square_table()) {
        let first = reduce(&table).unwrap().to_json_string().unwrap();
        let second = reduce(&table).unwrap().to_json_string().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn retained_values_match_source_text(table in square_table()) {
        let doc = reduce(&table).unwrap();
        for (data_row_index, row) in table.data_rows().iter().enumerate() {
            for (cell_position_index, cell) in row[1..].iter().enumerate() {
                let column = &doc.nodes[cell_position_index];
                let recorded = doc.get(&row[0], column);
                match cell.trim().parse::<f64>() {
                    Ok(v) if cell_position_index > data_row_index => {
                        prop_assert_eq!(recorded, Some(v));
                    }
                    _ => prop_assert_eq!(recorded, None),
                }
            }
        }
    }
}
