use std::io::Write;

use crate::cli::commands::{Cli, Commands, LoadArgs};
use crate::cli::output::{LoadJson, format_task_lines};
use crate::io::config_io::resolve_config;
use crate::io::loader::try_load_tasks;
use crate::logging::{LogTarget, init_logging};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_config(cli.config.as_deref())?;

    let target = match cli.command {
        None => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    init_logging(&resolved.config.log, target);

    if let Some(ref path) = resolved.path {
        tracing::debug!(path = %path.display(), "using config file");
    }
    if let Some(ref e) = resolved.ignored {
        tracing::warn!(error = %e, "ignoring config file, using defaults");
    }

    match cli.command {
        None => crate::tui::run(&resolved.config, cli.file),
        Some(Commands::Load(args)) => cmd_load(args),
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

fn cmd_load(args: LoadArgs) -> Result<(), Box<dyn std::error::Error>> {
    // A file that cannot be read loads no tasks; only the log says why
    let (format, tasks) = match try_load_tasks(&args.file) {
        Ok(parsed) => (Some(parsed.format), parsed.tasks),
        Err(e) => {
            tracing::warn!(error = %e, "error loading file");
            (None, Vec::new())
        }
    };

    let mut stdout = std::io::stdout().lock();
    if args.json {
        let out = LoadJson {
            format,
            tasks: &tasks,
        };
        serde_json::to_writer_pretty(&mut stdout, &out)?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(format_task_lines(&tasks).as_bytes())?;
    }
    Ok(())
}
