use std::fs::{create_dir_all, File};
use std::path::Path;

use anyhow::{Context, Result};
use bio::io::fasta;
use hashbrown::HashMap;
use log::debug;

/// Identifier to record mapping for a whole sequence collection.
pub type SequenceIndex = HashMap<String, fasta::Record>;

/// Materialize a FASTA file into a [`SequenceIndex`].
///
/// The header token of each record is its key. Identifiers are assumed
/// unique; on a duplicate the last record wins.
pub fn read_index(path: &Path) -> Result<SequenceIndex> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open sequence file {}", path.display()))?;

    let mut index = SequenceIndex::new();
    for record in fasta::Reader::new(file).records() {
        let record = record.with_context(|| {
            format!("Failed to read sequence record from {}", path.display())
        })?;
        index.insert(record.id().to_string(), record);
    }
    debug!(
        "Indexed {} sequence records from {}",
        index.len(),
        path.display()
    );
    Ok(index)
}

/// Serialize records to `path` in exactly the given order, creating
/// `dir` first when it does not exist. An empty record list produces an
/// empty output file.
pub fn write_ordered(
    dir: &Path,
    path: &Path,
    records: &[fasta::Record],
) -> Result<()> {
    if !dir.exists() {
        create_dir_all(dir).with_context(|| {
            format!("Failed to create output directory {}", dir.display())
        })?;
        debug!("Created output directory {}", dir.display());
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = fasta::Writer::new(file);
    for record in records {
        writer
            .write_record(record)
            .with_context(|| format!("Failed to write record {}", record.id()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bio::io::fasta::Record;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn index_keys_records_by_header_token() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">g1 hypothetical protein\nMKV\n>g2\nMAL").unwrap();

        let index = read_index(file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index["g1"].seq(), b"MKV");
        assert_eq!(index["g1"].desc(), Some("hypothetical protein"));
    }

    #[test]
    fn duplicate_identifier_keeps_last_record() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">g1\nAAA\n>g1\nCCC").unwrap();

        let index = read_index(file.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index["g1"].seq(), b"CCC");
    }

    #[test]
    fn writes_records_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let out = nested.join("ordered.faa");
        let records = vec![
            Record::with_attrs("g2", None, b"MAL"),
            Record::with_attrs("g1", None, b"MKV"),
        ];

        write_ordered(&nested, &out, &records).unwrap();

        let written = read_index(&out).unwrap();
        assert_eq!(written.len(), 2);
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.find(">g2").unwrap() < text.find(">g1").unwrap());
    }
}
