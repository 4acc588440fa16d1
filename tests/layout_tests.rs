//! Layout and sorting property tests for rls
//!
//! These run the grid engine over randomly generated name sets and check the structural
//! guarantees of both packing strategies, independent of any file system.

use rand::Rng;
use rls::core::{Cell, LayoutPlan, sort_names, write_across, write_down_across};
use std::ffi::OsString;

const SPACING: usize = 2;

fn random_names(rng: &mut impl Rng, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let len = rng.random_range(1..=24);
            let body: String = (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect();
            // index suffix keeps names unique, as within one directory
            format!("{body}{i}")
        })
        .collect()
}

fn cells(names: &[String]) -> Vec<Cell> {
    names.iter().map(|n| Cell::plain(n.as_str())).collect()
}

fn render_down_across(names: &[String], width: usize) -> String {
    let mut buf = Vec::new();
    write_down_across(&mut buf, &cells(names), width, SPACING).expect("vec write");
    String::from_utf8(buf).expect("ascii names")
}

fn render_across(names: &[String], width: usize) -> String {
    let mut buf = Vec::new();
    write_across(&mut buf, &cells(names), width, SPACING).expect("vec write");
    String::from_utf8(buf).expect("ascii names")
}

#[test]
fn down_across_rows_and_index_formula() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let n = rng.random_range(1..=60);
        let width = rng.random_range(1..=160);
        let names = random_names(&mut rng, n);
        let plan = LayoutPlan::for_cells(&cells(&names), width, SPACING);

        let out = render_down_across(&names, width);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), n.div_ceil(plan.columns), "n={n} width={width}");
        assert_eq!(lines.len(), plan.rows);

        // Every line holds at most `columns` names, in index order row + col * rows.
        let mut seen = vec![None; n];
        for (row, line) in lines.iter().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert!(fields.len() <= plan.columns);
            for (col, field) in fields.iter().enumerate() {
                let idx = plan.index(row, col);
                assert_eq!(*field, names[idx], "row {row} col {col}");
                seen[idx] = Some(());
            }
        }
        assert!(seen.iter().all(Option::is_some), "every name printed once");
    }
}

#[test]
fn across_respects_width_and_order() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let n = rng.random_range(1..=60);
        let width = rng.random_range(1..=160);
        let names = random_names(&mut rng, n);
        let colw = LayoutPlan::for_cells(&cells(&names), width, SPACING).column_width;

        let out = render_across(&names, width);
        let mut flat = Vec::new();
        for line in out.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert!(!fields.is_empty());
            // all but the final cell are padded to colw and must fit the width
            if fields.len() > 1 {
                assert!((fields.len() - 1) * colw <= width, "line {line:?} width {width}");
                assert!(fields.len() * colw <= width);
            }
            flat.extend(fields.into_iter().map(str::to_string));
        }
        assert_eq!(flat, names, "reading lines top to bottom restores the sequence");
    }
}

#[test]
fn sorting_is_idempotent() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let n = rng.random_range(0..=40);
        let mut names: Vec<OsString> = random_names(&mut rng, n)
            .into_iter()
            .map(OsString::from)
            .collect();
        sort_names(&mut names);
        let once = names.clone();
        sort_names(&mut names);
        assert_eq!(names, once);
        assert!(once.windows(2).all(|w| w[0].as_encoded_bytes() <= w[1].as_encoded_bytes()));
    }
}

#[test]
fn scenario_three_names_at_eighty_columns() {
    let names: Vec<String> = ["a.txt", "b.txt", "dir1"].iter().map(|s| s.to_string()).collect();
    let plan = LayoutPlan::for_cells(&cells(&names), 80, SPACING);
    assert_eq!((plan.column_width, plan.columns, plan.rows), (7, 11, 1));
    assert_eq!(render_down_across(&names, 80), "a.txt  b.txt  dir1\n");
}
