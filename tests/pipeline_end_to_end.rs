mod common;

use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;
use ziptab_lib::commands::batch_cmds;
use ziptab_lib::services::aggregator;
use ziptab_lib::services::archive;
use ziptab_lib::services::config::{PipelineSettings, WriteMode};
use ziptab_lib::services::extractor;
use ziptab_lib::services::generator::{self, DocumentFactory, GenerationPlan};

fn small_settings(dir: &TempDir) -> PipelineSettings {
    PipelineSettings {
        zip_dir: dir.path().join("zip_dir"),
        csv_dir: dir.path().join("csv_dir"),
        archive_count: 2,
        documents_per_archive: 5,
        objects_per_document: Some(3),
        seed: Some(2024),
        workers: Some(2),
        write_mode: WriteMode::Append,
        keep_outputs: false,
    }
}

// 2 archives x 5 documents x 3 objects. Pins accumulation across every
// document of an archive rather than stopping after the first one.
#[test]
fn end_to_end_two_archives_of_five_documents() {
    common::init_logger();
    let dir = TempDir::new().unwrap();
    let settings = small_settings(&dir);

    let report = batch_cmds::run_batch_cmd(&settings).expect("batch should succeed");

    assert_eq!(report.summary.archives_processed, 2);
    assert_eq!(report.summary.documents_extracted, 10);
    assert!(!report.summary.has_failures());

    let parent_path = settings.csv_dir.join("csv_1.csv");
    let child_path = settings.csv_dir.join("csv_2.csv");
    assert_eq!(common::line_count(&parent_path), 11);
    assert_eq!(common::line_count(&child_path), 31);

    let (parent_header, parents) = common::read_csv(&parent_path);
    let (child_header, children) = common::read_csv(&child_path);
    assert_eq!(parent_header, vec!["id", "level"]);
    assert_eq!(child_header, vec!["id", "object_name"]);

    let parent_ids = common::id_counts(&parents);
    assert!(parent_ids.values().all(|count| *count == 1));
    for child in &children {
        assert_eq!(
            parent_ids.get(&child[0]),
            Some(&1),
            "child id {} must appear exactly once in csv_1",
            child[0]
        );
    }

    let child_ids = common::id_counts(&children);
    assert!(child_ids.values().all(|count| *count == 3));

    for parent in &parents {
        let level: u8 = parent[1].parse().expect("level should be numeric");
        assert!(level <= 100);
    }
}

#[test]
fn generated_ids_are_unique_across_corpus() {
    common::init_logger();
    let dir = TempDir::new().unwrap();
    let mut factory = DocumentFactory::from_entropy();
    let plan = GenerationPlan {
        archive_count: 4,
        documents_per_archive: 100,
    };

    generator::generate_archives(dir.path(), plan, &mut factory).unwrap();
    let tables = aggregator::aggregate_directory(dir.path(), None).unwrap();

    let ids: HashSet<&str> = tables.parents.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(tables.parents.len(), 400);
    assert_eq!(ids.len(), 400);
}

#[test]
fn round_trip_through_archive_preserves_documents() {
    common::init_logger();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("0.zip");
    let mut factory = DocumentFactory::seeded(77);
    let documents: Vec<_> = (0..20).map(|_| factory.next_document()).collect();
    generator::build_archive(&path, &documents).unwrap();

    let embedded = archive::read_documents(&path).unwrap();
    assert_eq!(embedded.len(), documents.len());

    for (doc, entry) in documents.iter().zip(&embedded) {
        let rows = extractor::extract_document(entry.text().unwrap()).unwrap();

        assert_eq!(rows.parent.id, doc.id);
        assert_eq!(rows.parent.level, doc.level.to_string());
        let names: HashSet<&str> = rows.children.iter().map(|c| c.object_name.as_str()).collect();
        let expected: HashSet<&str> = doc.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, expected);
        assert!(rows.children.iter().all(|c| c.id == doc.id));
    }
}

#[test]
fn rows_from_one_archive_are_contiguous() {
    common::init_logger();
    let dir = TempDir::new().unwrap();
    let settings = PipelineSettings {
        archive_count: 6,
        documents_per_archive: 4,
        workers: Some(3),
        ..small_settings(&dir)
    };

    batch_cmds::generate_archives_cmd(&settings).unwrap();
    let tables = aggregator::aggregate_directory(&settings.zip_dir, settings.workers).unwrap();

    let mut per_archive = Vec::new();
    for idx in 0..6 {
        let outcome = aggregator::process_archive(&settings.zip_dir.join(format!("{idx}.zip")))
            .expect("archive should read");
        per_archive.push(outcome.parents);
    }

    for chunk in per_archive {
        let first = &chunk[0];
        let start = tables
            .parents
            .iter()
            .position(|p| p == first)
            .expect("archive rows should be present");
        assert_eq!(&tables.parents[start..start + chunk.len()], chunk.as_slice());
    }
}

#[test]
fn non_archive_files_in_zip_dir_are_ignored() {
    common::init_logger();
    let dir = TempDir::new().unwrap();
    let settings = small_settings(&dir);

    batch_cmds::generate_archives_cmd(&settings).unwrap();
    fs::write(settings.zip_dir.join("notes.txt"), "hello").unwrap();
    fs::write(settings.zip_dir.join("9.zip"), "truncated garbage").unwrap();

    let report = batch_cmds::build_tables_cmd(&settings).unwrap();

    assert_eq!(report.summary.archives_seen, 4);
    assert_eq!(report.summary.archives_skipped, 2);
    assert_eq!(report.outputs.parent_rows, 10);
}
