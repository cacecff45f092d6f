// src/search/driver.rs
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::options::{DelayRange, RevealMode, SearchOptions},
    core::{Applied, Field, Outcome, RunHandle, RunId, SearchBoard},
    error::ProgressError,
    progress::Progress,
};

use super::lookup::{Lookup, LookupError, outcome_of};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldTally {
    pub found: usize,
    pub missing: usize,
}

impl FieldTally {
    fn add(&mut self, o: Outcome) {
        match o {
            Outcome::Success => self.found += 1,
            Outcome::Error => self.missing += 1,
        }
    }
}

/// What a driver managed to do before it finished or was discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub run: RunId,
    pub total: usize,
    /// Companies fully processed (`current` at the end)
    pub processed: usize,
    pub contact: FieldTally,
    pub person: FieldTally,
    pub completed: bool,
    /// The popup was closed or a newer run started.
    pub superseded: bool,
}

impl RunReport {
    fn new(run: RunId, total: usize) -> Self {
        Self {
            run,
            total,
            processed: 0,
            contact: FieldTally::default(),
            person: FieldTally::default(),
            completed: false,
            superseded: false,
        }
    }

    fn tally(&mut self, field: Field, o: Outcome) {
        match field {
            Field::Contact => self.contact.add(o),
            Field::Person => self.person.add(o),
        }
    }
}

/// Picks delays out of `DelayRange`s.
struct Jitter(StdRng);

impl Jitter {
    fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Jitter(StdRng::seed_from_u64(s)),
            None => Jitter(StdRng::from_os_rng()),
        }
    }

    fn pick(&mut self, r: DelayRange) -> Duration {
        if r.min_ms == r.max_ms {
            return r.at(0.0);
        }
        r.at(self.0.random::<f64>())
    }
}

/// Start a run on `board` and drive it on the calling thread.
pub fn run_search(
    board: &SearchBoard,
    opts: &SearchOptions,
    lookup: &dyn Lookup,
    progress: Option<&mut dyn Progress>,
) -> Result<RunReport, ProgressError> {
    let handle = board.start(opts.companies.len() as i64)?;
    drive(&handle, opts, lookup, progress)
}

/// Start a run on `board` right away (so the popup opens and any older run
/// goes stale before this returns) and drive it on a worker thread.
pub fn spawn_search(
    board: &SearchBoard,
    opts: SearchOptions,
    lookup: Arc<dyn Lookup>,
    mut progress: Box<dyn Progress + Send>,
) -> Result<(RunId, JoinHandle<Result<RunReport, ProgressError>>), ProgressError> {
    let handle = board.start(opts.companies.len() as i64)?;
    let run = handle.id();

    let worker = thread::spawn(move || drive(&handle, &opts, lookup.as_ref(), Some(&mut *progress)));
    Ok((run, worker))
}

/// Drive one run through the model:
/// begin → (delay) contact → (delay) person → advance → (gap) → next.
///
/// Both lookups of a company run concurrently; their results are revealed in
/// contact-then-person order. Returns early (with `superseded`) as soon as
/// the run is discarded.
pub fn drive(
    handle: &RunHandle,
    opts: &SearchOptions,
    lookup: &dyn Lookup,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunReport, ProgressError> {
    let names = &opts.companies;
    let mut report = RunReport::new(handle.id(), names.len());
    let mut jitter = Jitter::new(opts.seed);

    logf!(
        "Search: Begin run={} companies={} reveal={:?}",
        handle.id(),
        names.len(),
        opts.reveal
    );

    let first = handle.apply(|m| match opts.reveal {
        RevealMode::Preloaded => m.preload(names.iter().cloned()),
        RevealMode::Incremental => Ok(m.snapshot()),
    })?;
    let Some(first) = first else {
        return Ok(stale(report));
    };
    if let Some(p) = progress.as_deref_mut() {
        p.begin(first.run, &first.snapshot);
    }
    if publish(&mut progress, &first, &mut report, false) {
        return Ok(report);
    }

    for (i, name) in names.iter().enumerate() {
        if i > 0 && !handle.sleep(jitter.pick(opts.pacing.gap)) {
            return Ok(stale(report));
        }

        let Some(a) = handle.apply(|m| match opts.reveal {
            RevealMode::Incremental => m.begin_entity(name.as_str()),
            RevealMode::Preloaded => m.activate(i),
        })?
        else {
            return Ok(stale(report));
        };
        publish(&mut progress, &a, &mut report, true);

        let contact_wait = jitter.pick(opts.pacing.contact);
        let person_wait = jitter.pick(opts.pacing.person);

        let finished = thread::scope(|s| {
            let contact = s.spawn(|| lookup.lookup(name, Field::Contact));
            let person = s.spawn(|| lookup.lookup(name, Field::Person));
            let mut pending =
                [(Field::Contact, contact, contact_wait), (Field::Person, person, person_wait)].into_iter();

            let result: Result<bool, ProgressError> = 'steps: {
                for (field, job, wait) in pending.by_ref() {
                    let awake = handle.sleep(wait);
                    let res = job
                        .join()
                        .unwrap_or_else(|_| Err(LookupError::Panicked { company: name.clone(), field }));
                    if !awake {
                        break 'steps Ok(false);
                    }
                    if let (Err(e), Some(p)) = (&res, progress.as_deref_mut()) {
                        p.log(&e.to_string());
                    }
                    let outcome = outcome_of(res);

                    let a = match handle.apply(|m| m.resolve_field(i, field, outcome)) {
                        Ok(Some(a)) => a,
                        Ok(None) => break 'steps Ok(false),
                        Err(e) => break 'steps Err(e),
                    };
                    report.tally(field, outcome);
                    publish(&mut progress, &a, &mut report, true);
                }
                Ok(true)
            };

            // settle whatever a discarded run left running
            for (_, job, _) in pending {
                let _ = job.join();
            }
            result
        })?;
        if !finished {
            return Ok(stale(report));
        }

        let Some(a) = handle.apply(|m| m.advance())? else {
            return Ok(stale(report));
        };
        publish(&mut progress, &a, &mut report, true);
        logd!("Search: run={} {}/{} {}", a.run, a.snapshot.current, a.snapshot.total, name);
    }

    Ok(report)
}

/// Forward an accepted update. Returns whether the run just completed.
fn publish(
    progress: &mut Option<&mut dyn Progress>,
    a: &Applied,
    report: &mut RunReport,
    changed: bool,
) -> bool {
    report.processed = a.snapshot.current;
    if let Some(p) = progress.as_deref_mut() {
        if changed {
            p.snapshot_changed(a.run, &a.snapshot);
        }
        if a.completed {
            p.done(a.run, &a.snapshot);
        }
    }
    if a.completed {
        report.completed = true;
        logf!(
            "Search: Done run={} processed={} contact={}/{} person={}/{}",
            a.run,
            a.snapshot.current,
            report.contact.found,
            a.snapshot.total,
            report.person.found,
            a.snapshot.total
        );
    }
    a.completed
}

fn stale(mut report: RunReport) -> RunReport {
    logf!("Search: Discarded run={} at {}/{}", report.run, report.processed, report.total);
    report.superseded = true;
    report
}
