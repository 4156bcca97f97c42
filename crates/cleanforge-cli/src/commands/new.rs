//! Implementation of the `cleanforge new` command.
//!
//! Responsibility: translate CLI arguments into an initial project tree,
//! call the core scaffold service, and display results.  No generation
//! logic lives here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, instrument};

use cleanforge_adapters::{NoopInstaller, NpmInstaller, templates};
use cleanforge_core::{
    application::{ScaffoldService, ports::PackageInstaller},
    domain::DatabaseKind,
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::{convert_database, filesystem, install_spinner},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cleanforge new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project name / output path
/// 2. Resolve the database backend (flag, then config default)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project path
    let (project_name, project_path) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;

    // 2. Resolve database
    let database = resolve_database(&args, &config)?;

    debug!(
        project = %project_name,
        path = %project_path.display(),
        database = %database,
        "Target resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&project_name, &project_path, database, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Check for existing directory
    if project_path.exists() && !args.force {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project_name,
            project_path.display(),
        ))?;
        output.info(&format!("  Database: {database}"))?;
        return Ok(());
    }

    // 6. Create adapters and scaffold
    let skip_install = args.skip_install || config.install.skip;
    let installer: Box<dyn PackageInstaller> = if skip_install {
        Box::new(NoopInstaller::new())
    } else {
        Box::new(NpmInstaller::new())
    };
    let service = ScaffoldService::new(filesystem(), installer);

    let structure = templates::project::initial_structure(&project_path, &project_name, database)
        .map_err(CliError::Core)?;

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, path = %project_path.display(), "Scaffold started");

    let spinner = if skip_install {
        None
    } else {
        install_spinner(global.quiet)
    };
    let result = service.bootstrap(&structure, args.force);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result.map_err(CliError::Core)?;

    info!(project = %project_name, "Scaffold completed");

    // 7. Success + next steps
    output.success(&format!("Project '{project_name}' created!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        if skip_install {
            output.print("  npm install")?;
        }
        output.print("  npm run watch")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the NAME argument into a display name and the full project path.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Database resolution ───────────────────────────────────────────────────────

/// The `--database` flag wins; otherwise the configured default; otherwise
/// the document store.
fn resolve_database(args: &NewArgs, config: &AppConfig) -> CliResult<DatabaseKind> {
    if let Some(db) = args.database {
        return Ok(convert_database(db));
    }
    match config.defaults.database.as_deref() {
        Some(token) => DatabaseKind::from_str(token).map_err(|e| CliError::ConfigError {
            message: format!("invalid defaults.database '{token}': {e}"),
            source: None,
        }),
        None => Ok(DatabaseKind::Mongo),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    name: &str,
    project_path: &Path,
    database: DatabaseKind,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {name}"))?;
    out.print(&format!("  Database: {database}"))?;
    out.print(&format!("  Location: {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
