use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use console::style;
use genorder::prelude::*;
use itertools::Itertools;

use crate::utils::validate_input;
use crate::{strings, PipelineCommand};

#[derive(Args, Debug, Clone)]
pub(crate) struct CheckArgs {
    #[arg(required = true, help = strings::GFF)]
    gff: PathBuf,

    #[arg(required = true, help = strings::FASTA)]
    fasta: PathBuf,
}

impl PipelineCommand for CheckArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_input(&self.gff)?;
        validate_input(&self.fasta)?;

        let annotation = File::open(&self.gff)?;
        let features = read_cds_features(BufReader::new(annotation))?;
        let order = genomic_order(features);
        let index = read_index(&self.fasta)?;

        let missing = order
            .iter()
            .filter(|id| !index.contains_key(id.as_str()))
            .collect_vec();
        let placeable = order.len() - missing.len();
        let unreferenced = index.len().saturating_sub(placeable);

        println!(
            "[{}] {} CDS feature(s) define the genomic order",
            style("V").green(),
            style(order.len()).green()
        );
        println!(
            "[{}] {} of {} ordered gene(s) have a sequence record",
            if missing.is_empty() {
                style("V").green()
            } else {
                style("!").yellow()
            },
            style(placeable).green(),
            order.len()
        );

        if !missing.is_empty() {
            println!(
                "Following gene(s) have no sequence record in {}:",
                self.fasta.display()
            );
            for id in missing {
                println!("\t{}", style(id).red());
            }
        }
        if unreferenced > 0 {
            println!(
                "[{}] {} record(s) in {} are referenced by no CDS feature",
                style("!").yellow(),
                style(unreferenced).yellow(),
                self.fasta.display()
            );
        }
        Ok(())
    }
}
