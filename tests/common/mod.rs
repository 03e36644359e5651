#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Read a CSV file into (header, records).
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("csv should open");
    let header = reader
        .headers()
        .expect("csv should have a header")
        .iter()
        .map(str::to_string)
        .collect();
    let records = reader
        .records()
        .map(|r| r.expect("record should parse").iter().map(str::to_string).collect())
        .collect();
    (header, records)
}

/// Count how often each id occurs in the first column.
pub fn id_counts(records: &[Vec<String>]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record[0].clone()).or_insert(0) += 1;
    }
    counts
}

pub fn line_count(path: &Path) -> usize {
    fs::read_to_string(path)
        .expect("file should be readable")
        .lines()
        .count()
}
