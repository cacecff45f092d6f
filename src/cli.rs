// src/cli.rs
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Result, bail};

use crate::{
    config::{
        consts::{DEMO_COMPANIES, SUCCESS_PROBABILITY},
        options::{Pacing, RevealMode, SearchOptions, parse_company_list},
    },
    core::{RunId, SearchBoard, Snapshot},
    progress::Progress,
    search::{self, SimulatedLookup},
    view::{PopupView, RowView},
};

/// Run a simulated company contact search in the terminal.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Comma-separated company names to search
    #[arg(short, long, conflicts_with = "count")]
    pub companies: Option<String>,

    /// Search the first N demo companies
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Chance that one field lookup finds something (0.0–1.0)
    #[arg(long, default_value_t = SUCCESS_PROBABILITY)]
    pub success_rate: f64,

    /// Seed for reproducible outcomes and delays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the simulated delays
    #[arg(long)]
    pub no_delay: bool,

    /// List every company up front instead of one by one
    #[arg(long)]
    pub preload: bool,

    /// Print the demo companies and exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    pub fn to_options(&self) -> Result<SearchOptions> {
        let mut opts = SearchOptions::default();

        if let Some(list) = &self.companies {
            opts.companies = parse_company_list(list);
            if opts.companies.is_empty() {
                bail!("--companies: no company names in {list:?}");
            }
        } else if let Some(n) = self.count {
            if n > DEMO_COMPANIES.len() {
                bail!("--count {n}: only {} demo companies (see --list)", DEMO_COMPANIES.len());
            }
            opts.companies = DEMO_COMPANIES.iter().take(n).map(|s| s!(*s)).collect();
        }

        opts.success_probability = self.success_rate;
        opts.seed = self.seed;
        if self.no_delay {
            opts.pacing = Pacing::immediate();
        }
        if self.preload {
            opts.reveal = RevealMode::Preloaded;
        }
        opts.validate();
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init();

    if args.list {
        for (i, name) in DEMO_COMPANIES.iter().enumerate() {
            println!("{i},{name}");
        }
        return Ok(());
    }

    let opts = args.to_options()?;
    let lookup = SimulatedLookup::new(opts.success_probability, opts.seed);
    let board = SearchBoard::new();
    let mut out = CliProgress::new(io::stdout());

    let report = search::run_search(&board, &opts, &lookup, Some(&mut out))?;
    if let Some(e) = out.error.take() {
        return Err(e.into());
    }

    println!(
        "contact found {}/{} · person found {}/{}",
        report.contact.found, report.total, report.person.found, report.total
    );
    Ok(())
}

/// Prints each row once it changes, plus the header line when `current` moves.
pub struct CliProgress<W: Write> {
    out: W,
    prev: Snapshot,
    error: Option<io::Error>,
}

impl<W: Write> CliProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, prev: Snapshot::default(), error: None }
    }

    fn emit(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }

    fn header(&mut self, snap: &Snapshot) {
        let v = PopupView::project(&[], snap.current, snap.total);
        self.emit(&format!("{} ({}%)", v.title, v.percent));
    }
}

pub fn row_line(row: &RowView) -> String {
    format!("  {:<28} contact {}  person {}", row.name, row.contact.glyph(), row.person.glyph())
}

impl<W: Write> Progress for CliProgress<W> {
    fn begin(&mut self, _run: RunId, snap: &Snapshot) {
        self.header(snap);
        for e in &snap.entities {
            self.emit(&row_line(&RowView::from(e)));
        }
        self.prev = snap.clone();
    }

    fn snapshot_changed(&mut self, _run: RunId, snap: &Snapshot) {
        let changed: Vec<String> = snap
            .entities
            .iter()
            .enumerate()
            .filter(|(i, e)| self.prev.entities.get(*i) != Some(*e))
            .map(|(_, e)| row_line(&RowView::from(e)))
            .collect();
        for line in changed {
            self.emit(&line);
        }
        if snap.current != self.prev.current {
            self.header(snap);
        }
        self.prev = snap.clone();
    }

    fn log(&mut self, msg: &str) {
        self.emit(msg);
    }

    fn done(&mut self, _run: RunId, _snap: &Snapshot) {
        self.emit("Search completed!");
    }
}
