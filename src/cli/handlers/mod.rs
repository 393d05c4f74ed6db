mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::desk_io::{self, DeskError};
use crate::model::config::DeskConfig;
use crate::model::desk::Desk;
use crate::model::filter::FilterCriteria;
use crate::ops::session::SessionError;
use crate::ops::templater::{generate_response, select_template};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let start = resolve_start(cli.project_dir.as_deref())?;
    let data = cli.data.as_deref().map(Path::new);

    match cli.command {
        None => Err("no command given".into()),
        Some(cmd) => match cmd {
            // Init works before any desk exists
            Commands::Init(args) => cmd_init(args, &start),

            Commands::List(args) => cmd_list(&load(&start, data)?, args, json),
            Commands::Show(args) => cmd_show(&load(&start, data)?, args, json),
            Commands::Draft(args) => cmd_draft(&load(&start, data)?, args, json),
            Commands::Stats => cmd_stats(&load(&start, data)?, json),
            Commands::Check => cmd_check(&load(&start, data)?, json),
            Commands::Config(cmd) => match cmd.action {
                ConfigAction::Show => cmd_config_show(&desk_io::load_config(&start)?, json),
                ConfigAction::Set { key, value } => cmd_config_set(&start, &key, &value),
            },
        },
    }
}

/// Directory to start desk discovery from: `-C` if given, else the cwd
pub fn resolve_start(project_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match project_dir {
        Some(dir) => Ok(std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

fn load(start: &Path, data: Option<&Path>) -> Result<Desk, DeskError> {
    let desk = desk_io::load_desk(start, data)?;
    if !desk.rejected.is_empty() {
        tracing::warn!(
            rejected = desk.rejected.len(),
            "some records were rejected (run `desk check` for details)"
        );
    }
    Ok(desk)
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(desk: &Desk, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let criteria = FilterCriteria::new(args.search.unwrap_or_default())
        .with_sentiment(args.sentiment.map(Into::into))
        .with_priority(args.priority.map(Into::into));
    let records = desk.store.filter(&criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in records {
            println!("{}", format_email_line(record));
        }
    }
    Ok(())
}

fn cmd_show(desk: &Desk, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = desk
        .store
        .get(&args.id)
        .ok_or_else(|| SessionError::UnknownEmail(args.id.clone()))?;

    if json {
        let detail = EmailDetailJson {
            email: record,
            template: select_template(record),
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        for line in format_email_detail(record) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_draft(desk: &Desk, args: DraftArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = desk
        .store
        .get(&args.id)
        .ok_or_else(|| SessionError::UnknownEmail(args.id.clone()))?;
    let draft = generate_response(record);

    if json {
        let out = DraftJson {
            id: &record.id,
            template: select_template(record),
            draft,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", draft);
    }
    Ok(())
}

fn cmd_stats(desk: &Desk, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stats = desk.store.quick_stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in format_stats(&stats) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_check(desk: &Desk, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let valid = desk.rejected.is_empty();

    if json {
        let result = CheckJson {
            source: desk.source_name.clone(),
            loaded: desk.store.len(),
            rejected: desk.rejected.iter().map(rejection_to_json).collect(),
            valid,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("source: {}", desk.source_name);
        if !valid {
            println!("Rejected:");
            for err in &desk.rejected {
                println!("  {}", err);
            }
        }
        if valid {
            println!("\u{2713} {} records valid", desk.store.len());
        } else {
            println!(
                "\u{2717} {} loaded, {} rejected",
                desk.store.len(),
                desk.rejected.len()
            );
        }
    }

    if valid {
        Ok(())
    } else {
        Err(format!("{} record(s) rejected", desk.rejected.len()).into())
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

fn cmd_config_show(config: &DeskConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.settings)?);
    } else {
        for line in format_settings(&config.settings) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_config_set(start: &Path, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let desk_dir = desk_io::discover_desk(start)?;
    desk_io::save_setting(&desk_dir, key, value)?;
    println!("{} = {}", key, value);
    Ok(())
}
