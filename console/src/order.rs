use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use genorder::prelude::*;
use log::{info, warn};

use crate::utils::{init_pbar, validate_input, validate_output};
use crate::{strings, PipelineCommand};

const RECONCILE_CHUNK: usize = 1_000;

#[derive(Args, Debug, Clone)]
pub(crate) struct OrderArgs {
    #[arg(required = true, help = strings::GFF)]
    gff: PathBuf,

    #[arg(required = true, help = strings::FASTA)]
    fasta: PathBuf,

    #[arg(short, long, required = true, help = strings::OUTPUT)]
    output: PathBuf,

    #[arg(short = 'd', long = "output-dir", help = strings::OUTPUT_DIR)]
    output_dir: Option<PathBuf>,

    #[arg(short, long, default_value_t = false, help = strings::FORCE)]
    force: bool,
}

impl OrderArgs {
    fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .output
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        }
    }
}

impl PipelineCommand for OrderArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_input(&self.gff)?;
        validate_input(&self.fasta)?;
        validate_output(&self.output, self.force)?;

        let annotation = File::open(&self.gff)?;
        let features = read_cds_features(BufReader::new(annotation))?;
        info!(
            "Extracted {} CDS features from {}",
            features.len(),
            self.gff.display()
        );

        let order = genomic_order(features);
        let index = read_index(&self.fasta)?;
        info!(
            "Indexed {} sequence records from {}",
            index.len(),
            self.fasta.display()
        );

        let progress_bar = init_pbar(order.len())?;
        let mut reordered = Vec::with_capacity(order.len());
        let mut missing = 0;
        for chunk in order.chunks(RECONCILE_CHUNK) {
            let (mut records, chunk_missing) =
                reconcile(chunk, &index, &self.fasta);
            reordered.append(&mut records);
            missing += chunk_missing;
            progress_bar.inc(chunk.len() as u64);
        }
        progress_bar.finish_and_clear();

        let unreferenced = index.len().saturating_sub(reordered.len());
        if unreferenced > 0 {
            warn!(
                "{} record(s) in {} are referenced by no CDS feature and will \
                 not be written",
                unreferenced,
                self.fasta.display()
            );
        }

        write_ordered(&self.output_dir(), &self.output, &reordered)?;

        println!(
            "[{}] {} of {} ordered record(s) written to {}",
            style("V").green(),
            style(reordered.len()).green(),
            order.len(),
            self.output.display()
        );
        if missing > 0 {
            println!(
                "[{}] {} gene(s) had no sequence record in {}",
                style("!").yellow(),
                style(missing).yellow(),
                self.fasta.display()
            );
        }
        Ok(())
    }
}
