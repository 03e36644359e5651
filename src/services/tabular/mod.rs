mod writer;

pub use writer::{
    write_table, write_tables, TableOutputs, CHILD_FILE, CHILD_HEADER, PARENT_FILE, PARENT_HEADER,
};

#[cfg(test)]
#[path = "tests/writer_tests.rs"]
mod tests;
