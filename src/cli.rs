// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    time::Duration,
};

use crate::{
    clipboard::{copy_all, ClipboardSink, SystemClipboard},
    csv::{paths_text, write_csv},
    extract::{run_extraction, validate_url},
    file,
    filter::{Category, FilteredView},
    params::Params,
    progress::Progress,
    render::Summary,
};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(Params),
    Help,
}

/// Status lines go to stderr so stdout stays clean for CSV.
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, url: &str) {
        eprintln!("Processing {url}");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, found: usize) {
        eprintln!("Found {found} elements");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Run(params) => {
            let stdout = io::stdout();
            execute(&params, &mut stdout.lock())
        }
    }
}

pub fn parse_args<I, S>(argv: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut params = Params::new();
    let mut args = argv.into_iter().map(Into::into);

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "--no-non-interactive" => params.include_non_interactive = false,
            "--no-text" => params.include_text = false,
            "--filter" => {
                let v = args.next().ok_or("Missing value for --filter")?;
                params.category = v.parse::<Category>()?;}
            "--search" => params.query = args.next().ok_or("Missing value for --search")?,
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--copy" => params.copy = true,
            "--paths" => params.paths = true,
            "--delay-ms" => {
                let v: u64 = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
                params.delay = Duration::from_millis(v);}
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.url.trim().is_empty() {
        return Err("Missing --url (see --help)".into());
    }
    Ok(Command::Run(params))
}

/// Extract, filter, then emit. CSV goes to `out` unless a file, the
/// clipboard or bare paths were asked for.
pub fn execute(params: &Params, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    execute_with(params, out, &mut SystemClipboard::blocking())
}

/// `execute` with the clipboard supplied by the caller. The copy runs last:
/// a blocking clipboard may hold the process until the selection is taken.
pub fn execute_with(
    params: &Params,
    out: &mut dyn Write,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), Box<dyn Error>> {
    let url = validate_url(&params.url)?;
    let opts = params.extract_options();

    let mut prog = StderrProgress;
    let items = run_extraction(&url, &opts, Some(&mut prog))?;
    let view = FilteredView::new(&items, params.category, &params.query);

    let s = Summary::of(&items);
    eprintln!(
        "Total {} · Interactive {} · Forms {} · showing {} ({})",
        s.total, s.interactive, s.forms, view.len(), params.category
    );

    if let Some(o) = &params.out {
        let path = file::resolve_out_path(o)?;
        let written = file::write_csv_file(&path, view.iter())?;
        logf!("CLI: wrote rows={} → {}", view.len(), written.display());
        eprintln!("Wrote {} rows → {}", view.len(), written.display());
    }

    if params.paths {
        writeln!(out, "{}", paths_text(view.iter()))?;
    } else if params.out.is_none() && !params.copy {
        write_csv(&mut *out, view.iter())?;
        writeln!(out)?;
    }
    out.flush()?;

    if params.copy {
        if cfg!(target_os = "linux") {
            eprintln!("Holding the clipboard until another app takes it...");
        }
        let outcome = copy_all(clipboard, &view);
        if !outcome.is_ok() {
            return Err(outcome.message().into());
        }
        eprintln!("{}", outcome.message());
    }
    Ok(())
}
