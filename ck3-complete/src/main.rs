use std::fs::read_to_string;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tiger_complete::{
    analyze_at, buffer_lines, complete, disable_ansi_colors, emit_reports, find_settings,
    Candidate, EntityKind, Registry, Settings,
};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the script file being edited.
    file: PathBuf,
    /// Line of the cursor, counting from 0.
    #[clap(long)]
    line: usize,
    /// Column of the cursor in characters, counting from 0.
    #[clap(long)]
    column: usize,
    /// Entity type of the file, like `trait` or `scripted_effect`.
    /// By default it is derived from the file's path.
    #[clap(long)]
    entity: Option<String>,
    /// Output the candidates in JSON format
    #[clap(long)]
    json: bool,
    /// Describe the cursor position instead of listing candidates
    #[clap(long)]
    context: bool,
    /// Path to the settings file. By default `ck3-complete.toml` is searched for in the file's
    /// directory and its parents.
    #[clap(long)]
    settings: Option<PathBuf>,
    /// Load a schema extension JSON file. Can be given several times.
    #[clap(long)]
    schema: Vec<PathBuf>,
    /// Omit color from the reports.
    #[clap(long)]
    no_color: bool,
}

fn print_candidates(candidates: &[Candidate]) {
    for candidate in candidates {
        if candidate.detail.is_empty() {
            println!("{}\t{}", candidate.label, candidate.kind);
        } else {
            println!("{}\t{}\t{}", candidate.label, candidate.kind, candidate.detail);
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    #[cfg(windows)]
    if !args.no_color {
        let _ = ansiterm::enable_ansi_support()
            .map_err(|_| eprintln!("Failed to enable ANSI support for Windows10 users. Continuing probably without colored output."));
    }
    if args.no_color {
        disable_ansi_colors();
    }

    let entity = match args.entity {
        Some(entity) => entity,
        None => match EntityKind::from_path(&args.file) {
            Some(kind) => kind.to_string(),
            None => bail!(
                "Cannot tell the entity type of {}. Please supply it as the --entity option.",
                args.file.display()
            ),
        },
    };
    if EntityKind::from_name(&entity).is_none() {
        eprintln!("Unknown entity type `{entity}`, no completions will be offered.");
    }

    let settings_path = args.settings.or_else(|| find_settings(&args.file));
    let settings = match &settings_path {
        Some(path) => {
            eprintln!("Using settings file: {}", path.display());
            Settings::load(path)?
        }
        None => Settings::default(),
    };
    settings.apply();

    let mut registry = Registry::builtin().clone();
    settings.load_extensions(&mut registry)?;
    for schema in &args.schema {
        eprintln!("Loading schema extension: {}", schema.display());
        registry.load_extension(schema)?;
    }
    emit_reports(args.json);

    let contents = read_to_string(&args.file)
        .with_context(|| format!("could not read {}", args.file.display()))?;
    let lines = buffer_lines(&contents);

    if args.context {
        let context = analyze_at(&registry, &lines, args.line, args.column, &entity);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&context)?);
        } else if let Some(context) = context {
            println!("{context:#?}");
        }
        return Ok(());
    }

    let options = settings.completion_options();
    let candidates = complete(&registry, &lines, args.line, args.column, &entity, &options);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        print_candidates(&candidates);
    }
    Ok(())
}
