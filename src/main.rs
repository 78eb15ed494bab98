use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stakeholder_map::adapters::{FileReportExporter, FileSnapshotStorage};
use stakeholder_map::application::{
    AddStakeholderCommand, AddStakeholderHandler, ClearDataCommand, ClearDataHandler,
    EditStakeholderCommand, EditStakeholderHandler, ExportReportHandler, GetAnalysisHandler,
    GetMatrixViewHandler, GetMatrixViewQuery, GetNetworkViewHandler, LoadDataHandler,
    LoadDataResult, ReclassifyStakeholderCommand, ReclassifyStakeholderHandler,
    RemoveStakeholderCommand, RemoveStakeholderHandler, SaveDataHandler,
};
use stakeholder_map::config::{AppConfig, LoggingConfig};
use stakeholder_map::domain::foundation::{DomainError, Influence, Level, StakeholderId, StakeholderRole};
use stakeholder_map::domain::matrix::Position;
use stakeholder_map::domain::stakeholder::{StakeholderAttributes, StakeholderError, StakeholderStore};
use stakeholder_map::ports::SnapshotStorage;

#[derive(Parser, Debug)]
#[command(author, version, about = "Power/interest stakeholder analysis", long_about = None)]
struct Cli {
    /// Saved document to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a stakeholder
    Add(AddArgs),
    /// Edit a stakeholder (it gets a new id)
    Edit(EditArgs),
    /// Remove a stakeholder and its relationships
    Remove {
        id: StakeholderId,
    },
    /// Drop a stakeholder at a matrix position to reclassify it
    Move {
        id: StakeholderId,
        /// Horizontal position (power axis)
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        /// Vertical position (interest axis)
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// List stakeholders
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show statistics and insights
    Analyze {
        #[arg(long)]
        json: bool,
    },
    /// Print the matrix view as JSON
    Matrix,
    /// Print the relationship network as JSON
    Network,
    /// Export the text report
    Report {
        /// Directory to write into instead of the configured one
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Remove every stakeholder
    Clear {
        /// Delete the saved document instead of saving an empty one
        #[arg(long)]
        saved: bool,
    },
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    role: StakeholderRole,
    #[arg(long)]
    power: Level,
    #[arg(long)]
    interest: Level,
    #[arg(long)]
    influence: Influence,
    #[arg(long)]
    notes: Option<String>,
    /// Id of a related stakeholder (repeatable)
    #[arg(long = "related")]
    related: Vec<StakeholderId>,
}

#[derive(Args, Debug)]
struct EditArgs {
    id: StakeholderId,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    role: Option<StakeholderRole>,
    #[arg(long)]
    power: Option<Level>,
    #[arg(long)]
    interest: Option<Level>,
    #[arg(long)]
    influence: Option<Influence>,
    #[arg(long)]
    notes: Option<String>,
    /// Replace relations with these ids (repeatable)
    #[arg(long = "related")]
    related: Vec<StakeholderId>,
    /// Drop all relations
    #[arg(long, conflicts_with = "related")]
    no_relations: bool,
}

fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file;
    }
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging);

    let storage: Arc<dyn SnapshotStorage> =
        Arc::new(FileSnapshotStorage::new(&config.storage.data_file));

    let mut store = StakeholderStore::new();
    let loaded = LoadDataHandler::new(storage.clone())
        .handle(&mut store)
        .await
        .with_context(|| {
            format!(
                "Failed to load saved data from {}",
                config.storage.data_file.display()
            )
        })?;
    if loaded == LoadDataResult::NoSavedData {
        debug!("Starting with an empty store");
    }

    let save = SaveDataHandler::new(storage.clone());

    match cli.command {
        Command::Add(args) => {
            let mut attributes =
                StakeholderAttributes::new(args.name, args.role, args.power, args.interest, args.influence);
            attributes.notes = args.notes;

            let result = AddStakeholderHandler::new()
                .handle(
                    &mut store,
                    AddStakeholderCommand {
                        attributes,
                        related_ids: args.related,
                    },
                )
                .map_err(DomainError::from)?;
            save.handle(&store).await.map_err(DomainError::from)?;
            println!(
                "Added {} ({}) -> {}",
                result.stakeholder.name(),
                result.stakeholder.id(),
                result.quadrant
            );
        }
        Command::Edit(args) => {
            let Some(current) = store.get(&args.id) else {
                bail!(DomainError::from(StakeholderError::not_found(args.id)));
            };

            let mut attributes = current.attributes();
            if let Some(name) = args.name {
                attributes.name = name;
            }
            if let Some(role) = args.role {
                attributes.role = role;
            }
            if let Some(power) = args.power {
                attributes.power = power;
            }
            if let Some(interest) = args.interest {
                attributes.interest = interest;
            }
            if let Some(influence) = args.influence {
                attributes.influence = influence;
            }
            if let Some(notes) = args.notes {
                attributes.notes = Some(notes);
            }
            let related_ids = if args.no_relations {
                Some(Vec::new())
            } else if args.related.is_empty() {
                None
            } else {
                Some(args.related)
            };

            let result = EditStakeholderHandler::new()
                .handle(
                    &mut store,
                    EditStakeholderCommand {
                        stakeholder_id: args.id,
                        attributes,
                        related_ids,
                    },
                )
                .map_err(DomainError::from)?;
            save.handle(&store).await.map_err(DomainError::from)?;
            println!(
                "Updated {} ({} -> {})",
                result.stakeholder.name(),
                result.previous_id,
                result.stakeholder.id()
            );
        }
        Command::Remove { id } => {
            let result = RemoveStakeholderHandler::new()
                .handle(&mut store, RemoveStakeholderCommand { stakeholder_id: id });
            match result.removed {
                Some(stakeholder) => {
                    save.handle(&store).await.map_err(DomainError::from)?;
                    println!(
                        "Removed {} and {} relationship(s)",
                        stakeholder.name(),
                        result.relationships_removed
                    );
                }
                None => println!("Nothing to remove"),
            }
        }
        Command::Move { id, x, y } => {
            let result = ReclassifyStakeholderHandler::new().handle(
                &mut store,
                ReclassifyStakeholderCommand {
                    stakeholder_id: id.clone(),
                    position: Position::new(x, y),
                    bounds: config.matrix.bounds(),
                },
            );
            let Some(quadrant) = result.quadrant else {
                bail!(DomainError::from(StakeholderError::not_found(id)));
            };
            save.handle(&store).await.map_err(DomainError::from)?;
            println!("{} is now in {}", id, quadrant);
        }
        Command::List { json } => {
            if json {
                println!("{}", store.snapshot().to_json()?);
            } else if store.is_empty() {
                println!("No stakeholders added yet.");
            } else {
                for s in store.all() {
                    println!(
                        "{}  {} ({})  Power: {}, Interest: {}, Influence: {}  [{}]",
                        s.id(),
                        s.name(),
                        s.role(),
                        s.power(),
                        s.interest(),
                        s.influence(),
                        s.quadrant()
                    );
                }
            }
        }
        Command::Analyze { json } => {
            let analysis = GetAnalysisHandler::new().handle(&store);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("Total stakeholders: {}", analysis.statistics.total);
                for line in &analysis.distribution {
                    println!("  {}", line);
                }
                if !analysis.insights.is_empty() {
                    println!("Insights:");
                    for insight in &analysis.insights {
                        println!("  - {}", insight);
                    }
                }
            }
        }
        Command::Matrix => {
            let view = GetMatrixViewHandler::new().handle(
                &store,
                GetMatrixViewQuery {
                    bounds: config.matrix.bounds(),
                },
            );
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Network => {
            let view = GetNetworkViewHandler::new().handle(&store);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Report { output_dir } => {
            let output_dir = output_dir.unwrap_or_else(|| config.export.output_dir.clone());
            let exporter =
                FileReportExporter::with_file_name(output_dir, config.export.report_file_name.clone());
            let result = ExportReportHandler::new(Arc::new(exporter))
                .handle(&store)
                .await
                .map_err(DomainError::from)?;
            println!("Report written to {}", result.location.display());
        }
        Command::Clear { saved } => {
            let result = ClearDataHandler::new(storage)
                .handle(&mut store, ClearDataCommand { include_saved: saved })
                .await
                .map_err(DomainError::from)?;
            if !result.saved_data_cleared {
                save.handle(&store).await.map_err(DomainError::from)?;
            }
            println!("Cleared {} stakeholder(s)", result.stakeholders_removed);
        }
    }

    Ok(())
}
