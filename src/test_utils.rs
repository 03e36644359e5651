use crate::services::generator::{build_archive, Document, DocumentFactory};
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build `count` archives of `docs_per_archive` documents with `objects` objects each.
///
/// Returns the documents per archive in index order.
pub fn seed_archives(
    zip_dir: &Path,
    count: usize,
    docs_per_archive: usize,
    objects: usize,
) -> Vec<(PathBuf, Vec<Document>)> {
    init_test_logger();
    std::fs::create_dir_all(zip_dir).expect("zip dir should be created");

    let mut factory = DocumentFactory::seeded(1234).with_fixed_objects(objects);
    (0..count)
        .map(|idx| {
            let documents: Vec<Document> =
                (0..docs_per_archive).map(|_| factory.next_document()).collect();
            let path = zip_dir.join(format!("{idx}.zip"));
            build_archive(&path, &documents).expect("archive should be written");
            (path, documents)
        })
        .collect()
}
