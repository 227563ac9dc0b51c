use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bio::io::fasta;
use log::{info, warn};

use crate::annotation::{genomic_order, read_cds_features};
use crate::io::fasta::{read_index, write_ordered, SequenceIndex};

/// Align an ordered identifier list against a sequence index.
///
/// Records come back in list order. An identifier absent from the index is
/// reported with a warning naming the gene and the source file, and skipped;
/// the returned count holds the number of such misses. Index entries never
/// referenced by the list are not emitted.
pub fn reconcile(
    order: &[String],
    index: &SequenceIndex,
    source: &Path,
) -> (Vec<fasta::Record>, usize) {
    let mut reordered = Vec::with_capacity(order.len());
    let mut missing = 0;
    for id in order {
        match index.get(id) {
            Some(record) => reordered.push(record.clone()),
            None => {
                warn!("Gene ID {} not found in {}", id, source.display());
                missing += 1;
            },
        }
    }
    (reordered, missing)
}

/// Per-invocation configuration for one reordering run. Constructed by the
/// caller (CLI or pipeline orchestrator), discarded afterwards.
#[derive(Debug, Clone)]
pub struct ReorderTask {
    /// Annotation file whose CDS rows define the output order.
    pub gff:        PathBuf,
    /// Protein FASTA file to reorder.
    pub sequences:  PathBuf,
    /// Directory the output file is written into, created when missing.
    pub output_dir: PathBuf,
    /// Path of the reordered FASTA file.
    pub output:     PathBuf,
}

/// Counts reported by a completed [`ReorderTask::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderSummary {
    /// Identifiers in the resolved genomic order.
    pub ordered:      usize,
    /// Records written to the output file.
    pub written:      usize,
    /// Ordered identifiers with no sequence record.
    pub missing:      usize,
    /// Sequence records referenced by no CDS feature.
    pub unreferenced: usize,
}

impl ReorderTask {
    /// Execute the full pipeline: extract CDS features, resolve the genomic
    /// order, index the sequence collection, reconcile and write.
    ///
    /// Per-record misses are recoverable and only logged; a malformed start
    /// coordinate or an unreadable input aborts before any output is
    /// written.
    pub fn run(&self) -> Result<ReorderSummary> {
        info!("Parsing annotation {}", self.gff.display());
        let gff = File::open(&self.gff).with_context(|| {
            format!("Failed to open annotation file {}", self.gff.display())
        })?;
        let features = read_cds_features(BufReader::new(gff))?;

        info!("Sorting {} features by start coordinate", features.len());
        let order = genomic_order(features);

        info!("Indexing sequences from {}", self.sequences.display());
        let index = read_index(&self.sequences)?;

        info!("Reordering {} sequence records", index.len());
        let (reordered, missing) = reconcile(&order, &index, &self.sequences);
        let unreferenced = index.len().saturating_sub(reordered.len());
        if unreferenced > 0 {
            warn!(
                "{} record(s) in {} are referenced by no CDS feature and will not \
                 be written",
                unreferenced,
                self.sequences.display()
            );
        }

        info!("Writing output to {}", self.output.display());
        write_ordered(&self.output_dir, &self.output, &reordered)?;
        info!("Ordered FASTA file saved to {}", self.output.display());

        Ok(ReorderSummary {
            ordered: order.len(),
            written: reordered.len(),
            missing,
            unreferenced,
        })
    }
}
