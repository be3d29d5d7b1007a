use clap::{Parser, Subcommand};
use ctl_catalog::Result;
use ctl_catalog::catalog::{Catalog, CatalogEntry, classify_ctl_transforms};
use ctl_catalog::ctl::CtlTransform;
use ctl_catalog::discover::{REFERENCE_TRANSFORMS_ROOT, discover_ctl_transforms};
use ctl_catalog::graph::ConversionGraph;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctl-catalog")]
#[command(about = "CTL colour transform catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover and classify CTL transforms, printing the catalog.
    Classify {
        /// Transforms root directory.
        #[arg(long, default_value = REFERENCE_TRANSFORMS_ROOT)]
        root: PathBuf,

        /// Also write the catalog as JSON.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// Write the colour-space conversion graph as a JSON node/edge list.
    Graph {
        /// Transforms root directory.
        #[arg(long, default_value = REFERENCE_TRANSFORMS_ROOT)]
        root: PathBuf,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Classify { root, out } => {
            // 1) Walk the tree, 2) classify.
            let catalog = classify_ctl_transforms(&discover_ctl_transforms(&root)?)?;

            print_catalog(&catalog);

            if let Some(out) = out {
                std::fs::write(&out, serde_json::to_string_pretty(&catalog)?)?;
                println!("Wrote {}", out.display());
            }
        }
        Commands::Graph { root, out } => {
            let catalog = classify_ctl_transforms(&discover_ctl_transforms(&root)?)?;

            // 3) Project and serialize the node/edge list.
            let graph = ConversionGraph::project(&catalog);
            std::fs::write(&out, serde_json::to_string_pretty(&graph.to_data())?)?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for (category, classifiers) in catalog {
        for (classifier, entries) in classifiers {
            println!("{} / {}", category, classifier);
            for (basename, entry) in entries {
                println!("[ {} ]", basename);
                match entry {
                    CatalogEntry::Single(transform) => print_endpoints(transform),
                    CatalogEntry::Pair(pair) => {
                        print_endpoints(&pair.forward);
                        print_endpoints(&pair.inverse);
                    }
                }
            }
        }
    }
}

fn print_endpoints(transform: &CtlTransform) {
    if let (Some(source), Some(target)) = (transform.source(), transform.target()) {
        println!("\t{:?} to {:?}", source, target);
    }
}
