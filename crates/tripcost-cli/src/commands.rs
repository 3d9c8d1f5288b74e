//! Command handlers

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands, ReportAction, VesselAction};
use crate::output::{
    output_report, output_report_list, output_trip_result, output_vessel, output_vessel_list,
};
use tracing::debug;
use tripcost_app::app::TripService;
use tripcost_app::config::Config;
use tripcost_app::repository::{open_report_repo, open_vessel_repo};
use tripcost_infra::fleet_toml::FleetLoader;
use tripcost_infra::load_vessels_from_path;
use tripcost_infra::persistence::{FileTripReportRepository, FileVesselRepository};
use tripcost_infra::trip_input::load_trip_forms;
use tripcost_types::{Error, OutputFormat, Result, StoreError};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(format) = cli.format {
        config.output_format = format;
    }
    debug!(store_dir = ?config.store_dir, format = %config.output_format, "configuration loaded");

    match &cli.command {
        Commands::Calculate {
            vessel,
            input,
            save,
            title,
            notes,
        } => cmd_calculate(&config, vessel, input, *save, title.clone(), notes.clone()),

        Commands::Vessel { action } => match action {
            VesselAction::List { all } => cmd_vessel_list(&config, *all),
            VesselAction::Show { id } => cmd_vessel_show(&config, id),
            VesselAction::Add { file } => cmd_vessel_add(&config, file),
            VesselAction::Import { file, dry_run } => cmd_vessel_import(&config, file, *dry_run),
            VesselAction::Remove { id } => cmd_vessel_remove(&config, id),
        },

        Commands::Report { action } => match action {
            ReportAction::List { vessel, limit } => {
                cmd_report_list(&config, vessel.as_deref(), *limit)
            }
            ReportAction::Show { id } => cmd_report_show(&config, id),
            ReportAction::Attach { id, file } => cmd_report_attach(&config, id, file),
            ReportAction::Remove { id } => cmd_report_remove(&config, id),
        },

        Commands::Config {
            show,
            set_store_dir,
            set_output,
            set_currency,
            reset,
        } => cmd_config(
            *show,
            set_store_dir.clone(),
            *set_output,
            set_currency.clone(),
            *reset,
        ),
    }
}

fn open_repos(config: &Config) -> Result<(FileVesselRepository, FileTripReportRepository)> {
    Ok((open_vessel_repo(config)?, open_report_repo(config)?))
}

fn cmd_calculate(
    config: &Config,
    vessel: &str,
    input: &Path,
    save: bool,
    title: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let forms = load_trip_forms(input)?;
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);

    let record = service.resolve_vessel(vessel)?;
    let result = service.calculate(&record.id, &forms)?;
    output_trip_result(config.output_format, &record.name, &result, &config.currency)?;

    if save {
        let report = service.save_report(&record.id, &forms, result, title, notes)?;
        // Keep stdout clean for JSON consumers
        if config.output_format == OutputFormat::Json {
            eprintln!("Saved report {}", report.id);
        } else {
            println!("\nSaved report {}", report.id);
        }
    }
    Ok(())
}

fn cmd_vessel_list(config: &Config, all: bool) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);

    let every = service.all_vessels()?;
    let total = every.len();
    let listed = if all {
        every
    } else {
        service.selectable_vessels()?
    };
    if !all && config.output_format == OutputFormat::Table && listed.len() < total {
        println!(
            "Showing trip-ready vessels ({} of {}); use --all to list every vessel.\n",
            listed.len(),
            total
        );
    }
    output_vessel_list(config.output_format, &listed)
}

fn cmd_vessel_show(config: &Config, id: &str) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    let vessel = service.resolve_vessel(id)?;
    output_vessel(config.output_format, &vessel)
}

fn cmd_vessel_add(config: &Config, file: &Path) -> Result<()> {
    let fleet = FleetLoader::load_from_file(file)?;
    println!("Read {} vessel(s) from {}", fleet.count(), file.display());

    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    let mut added = 0;
    let mut skipped = 0;
    for vessel in fleet.vessels() {
        match service.add_vessel(vessel) {
            Ok(()) => {
                println!("  + {} ({})", vessel.name, vessel.id);
                added += 1;
            }
            Err(Error::Store(StoreError::Duplicate(id))) => {
                println!("  = {} ({}) already registered, skipped", vessel.name, id);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    println!("\nAdded: {}, skipped: {}", added, skipped);
    Ok(())
}

fn cmd_vessel_import(config: &Config, file: &Path, dry_run: bool) -> Result<()> {
    if !file.exists() {
        return Err(Error::Import(format!("File not found: {}", file.display())));
    }

    println!("Reading vessel file: {}", file.display());
    let imported = load_vessels_from_path(file)?;
    println!("Vessels in file: {}", imported.len());

    if imported.is_empty() {
        println!("No vessels to import.");
        return Ok(());
    }

    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    let mut created = 0;
    let mut replaced = 0;
    let mut incomplete = 0;

    for vessel in &imported {
        let missing = vessel.missing_trip_fields();
        if !missing.is_empty() {
            incomplete += 1;
            println!(
                "  ! {} is missing {} field(s): {}",
                vessel.name,
                missing.len(),
                missing.join(", ")
            );
        }
        let existed = if dry_run {
            let exists = service.is_registered(&vessel.id)?;
            println!("  {} {} ({})", if exists { "~" } else { "+" }, vessel.name, vessel.id);
            exists
        } else {
            service.upsert_vessel(vessel)?
        };
        if existed {
            replaced += 1;
        } else {
            created += 1;
        }
    }

    println!();
    if dry_run {
        println!("Dry run, nothing written.");
    }
    println!(
        "New: {}, replaced: {}, not trip-ready: {}",
        created, replaced, incomplete
    );
    Ok(())
}

fn cmd_vessel_remove(config: &Config, id: &str) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    let removed = service.remove_vessel(id)?;
    println!("Removed vessel {} ({})", removed.name, removed.id);
    Ok(())
}

fn cmd_report_list(config: &Config, vessel: Option<&str>, limit: usize) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);

    let all = service.reports(vessel)?;
    let total = all.len();
    let shown: Vec<_> = all.into_iter().take(limit).collect();
    output_report_list(config.output_format, &shown, total)
}

fn cmd_report_show(config: &Config, id: &str) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    let report = service.report(id)?;
    output_report(config.output_format, &report, &config.currency)
}

fn cmd_report_attach(config: &Config, id: &str, file: &Path) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    let attachment = service.attach_file(id, file)?;
    println!(
        "Attached {} ({} bytes, sha256 {}) to report {}",
        attachment.file_name, attachment.size_bytes, attachment.sha256, id
    );
    Ok(())
}

fn cmd_report_remove(config: &Config, id: &str) -> Result<()> {
    let (vessels, reports) = open_repos(config)?;
    let service = TripService::new(&vessels, &reports);
    service.remove_report(id)?;
    println!("Removed report {}", id);
    Ok(())
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
