use crate::{
    cli::{
        args::{Commands, EntryKind, ExtsArgs, ListArgs, NumberArgs},
        prompt::confirm,
    },
    constants::NO_EXTENSION_LABEL,
    entries::Entries,
    error::{Error, Result},
    path::Path,
};
use log::{debug, info};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Runs one subcommand, writing its report to stdout.
pub fn run(command: Commands) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Runner::new(command).run(&mut out)
}

/// Executes a parsed subcommand against the filesystem
pub struct Runner {
    command: Commands,
}

impl Runner {
    pub fn new(command: Commands) -> Self {
        Self { command }
    }

    pub fn run<W: Write>(self, out: &mut W) -> Result<()> {
        match &self.command {
            Commands::List(args) => self.list(args, out),
            Commands::Exts(args) => self.exts(args, out),
            Commands::Number(args) => self.number(args, out),
        }
    }

    fn list<W: Write>(&self, args: &ListArgs, out: &mut W) -> Result<()> {
        let mut entries = Path::new(args.dir.as_str()).entries()?;
        entries = match args.kind {
            EntryKind::All => entries,
            EntryKind::Files => entries.only_files(),
            EntryKind::Dirs => entries.only_dirs(),
        };
        if !args.extensions.is_empty() {
            entries = entries.with_extensions(args.extensions.iter().map(String::as_str));
        }
        if let Some(pattern) = &args.glob {
            entries = entries.matching(pattern)?;
        }
        if args.sort {
            entries.sort();
        }
        if args.absolute {
            entries = entries.to_absolute()?;
        } else if args.names {
            entries = entries.to_base_names();
        }
        debug!("Printing {} entries of '{}'", entries.len(), args.dir);
        write_items(out, &entries.to_strings(), args.json)
    }

    fn exts<W: Write>(&self, args: &ExtsArgs, out: &mut W) -> Result<()> {
        let mut entries = Path::new(args.dir.as_str()).entries()?;
        if args.files_only {
            entries = entries.only_files();
        }
        let exts = entries.distinct_extensions();
        if args.json {
            return write_items(out, &exts, true);
        }
        let labels: Vec<&str> = exts
            .iter()
            .map(|ext| if ext.is_empty() { NO_EXTENSION_LABEL } else { ext.as_str() })
            .collect();
        write_items(out, &labels, false)
    }

    fn number<W: Write>(&self, args: &NumberArgs, out: &mut W) -> Result<()> {
        let mut originals = Path::new(args.dir.as_str()).entries()?.only_files();
        if !args.extensions.is_empty() {
            originals = originals.with_extensions(args.extensions.iter().map(String::as_str));
        }
        if originals.is_empty() {
            writeln!(out, "No files to rename in '{}'.", args.dir)?;
            return Ok(());
        }
        originals.sort();

        let mut renamed = originals.clone();
        renamed.prepend_sequential_numbers();
        let plan: Vec<(&Path, &Path)> = originals.iter().zip(renamed.iter()).collect();

        let prefix = if args.dry_run { "[DRY RUN] " } else { "" };
        for (from, to) in &plan {
            writeln!(out, "{prefix}{} -> {}", from.base(), to.base())?;
        }
        if args.dry_run {
            return Ok(());
        }

        ensure_targets_free(&renamed)?;
        if !confirm(args.yes, format!("Rename {} files in '{}'?", plan.len(), args.dir))? {
            info!("Renaming cancelled");
            return Ok(());
        }
        for (from, to) in plan {
            from.rename_to(to)?;
            info!("Renamed '{}' to '{}'", from, to);
        }
        Ok(())
    }
}

/// Refuses a plan that would overwrite anything already on disk.
fn ensure_targets_free(targets: &Entries) -> Result<()> {
    match targets.iter().find(|target| target.exists()) {
        Some(taken) => Err(Error::AlreadyExistsError { path: taken.to_string() }),
        None => Ok(()),
    }
}

fn write_items<W, T>(out: &mut W, items: &[T], json: bool) -> Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, items)?;
        writeln!(out)?;
        return Ok(());
    }
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
