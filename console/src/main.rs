mod check;
mod order;
mod strings;
mod utils;

use check::CheckArgs;
use clap::{Parser, Subcommand};
use order::OrderArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(about = "Reorder a protein FASTA file into genomic coordinate order")]
    Order {
        #[clap(flatten)]
        args:  OrderArgs,
        #[clap(flatten)]
        utils: UtilsArgs,
    },

    #[command(
        about = "Report how a FASTA file reconciles against an annotation, \
                 without writing output"
    )]
    Check {
        #[clap(flatten)]
        args:  CheckArgs,
        #[clap(flatten)]
        utils: UtilsArgs,
    },
}

pub(crate) trait PipelineCommand {
    fn run(&self) -> anyhow::Result<()>;
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Order { args, utils } => {
            utils.setup()?;
            args.run()?;
        },
        MainMenu::Check { args, utils } => {
            utils.setup()?;
            args.run()?;
        },
    }
    Ok(())
}
