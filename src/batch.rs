use crate::normalize::normalize_with;
use crate::parser::read_document;
use crate::stopwords::StopWords;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use walkdir::WalkDir;

/// One normalized corpus document, written as a JSON line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub text: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub found: usize,
    pub written: usize,
    pub skipped: usize,
    pub empty: usize,
}

/// Normalizes up to `limit` files below `input_dir` and returns the records
/// in path order. Unreadable files are logged and skipped.
pub fn normalize_dir(
    input_dir: &Path,
    limit: Option<usize>,
    stop_words: Option<&StopWords>,
) -> (Vec<Record>, BatchStats) {
    let entries: Vec<_> = WalkDir::new(input_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    log::info!("Found {} files", entries.len());
    let max_docs = limit.unwrap_or(entries.len());
    let selected = &entries[..entries.len().min(max_docs)];

    let results: Vec<Option<Record>> = selected
        .par_iter()
        .map(|entry| {
            let p = entry.path();
            let doc = match read_document(p) {
                Ok(doc) => doc,
                Err(e) => {
                    log::warn!("Skipping {:?}: {}", p.display(), e);
                    return None;
                }
            };
            Some(Record {
                path: doc.path,
                title: doc
                    .title
                    .map(|t| normalize_with(&t, stop_words))
                    .filter(|t| !t.is_empty()),
                text: normalize_with(&doc.body, stop_words),
            })
        })
        .collect();

    let mut stats = BatchStats {
        found: entries.len(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(results.len());
    for r in results {
        match r {
            Some(rec) => {
                if rec.text.is_empty() {
                    stats.empty += 1;
                }
                records.push(rec);
            }
            None => stats.skipped += 1,
        }
    }
    stats.written = records.len();
    (records, stats)
}

pub fn write_records(records: &[Record], out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let f = File::create(out)?;
    let mut bw = BufWriter::with_capacity(1024 * 1024, f);
    for rec in records {
        serde_json::to_writer(&mut bw, rec)?;
        bw.write_all(b"\n")?;
    }
    bw.flush()?;
    Ok(())
}

pub fn run_batch(
    input_dir: &Path,
    out: &Path,
    limit: Option<usize>,
    stop_words: Option<&StopWords>,
) -> anyhow::Result<BatchStats> {
    let (records, stats) = normalize_dir(input_dir, limit, stop_words);

    log::info!("Writing {} records to {:?}...", records.len(), out.display());
    write_records(&records, out)?;

    log::info!(
        "Normalized {} docs ({} empty, {} skipped)",
        stats.written,
        stats.empty,
        stats.skipped
    );
    Ok(stats)
}
