//! Watch mode: re-extract whenever the snapshot or the settings change.
//!
//! A background task polls file fingerprints and feeds triggers into a
//! channel; the main loop debounces them and runs a full extraction pass per
//! burst, rewriting every output file.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{bail, Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::debounce::{Debouncer, Trigger};
use super::snapshot::SnapshotSource;
use super::{calendar_view, extract_from};
use crate::config::{Config, EVENTS_FILE_NAME, EXAMS_FILE_NAME, ICS_FILE_NAME};
use crate::export::{write_ics, write_json};
use crate::model::Extraction;

const TRIGGER_CHANNEL_CAPACITY: usize = 32;

type Fingerprint = Option<(SystemTime, u64)>;

fn fingerprint(path: &Path) -> Fingerprint {
    let meta = std::fs::metadata(path).ok()?;
    Some((meta.modified().ok()?, meta.len()))
}

struct Watched {
    path: PathBuf,
    trigger: Trigger,
    last: Fingerprint,
}

/// Detects changes of watched files by modification time and size.
pub struct ChangeDetector {
    watched: Vec<Watched>,
}

impl ChangeDetector {
    pub fn new(snapshot: &Path, settings: &Path) -> Self {
        let watched = [
            (snapshot, Trigger::SnapshotChanged),
            (settings, Trigger::SettingsChanged),
        ]
        .into_iter()
        .map(|(path, trigger)| Watched {
            path: path.to_path_buf(),
            trigger,
            last: fingerprint(path),
        })
        .collect();
        Self { watched }
    }

    /// Triggers for files whose fingerprint changed since the last call.
    ///
    /// Creation and deletion count as changes.
    pub fn poll(&mut self) -> Vec<Trigger> {
        let mut triggers = Vec::new();
        for watched in &mut self.watched {
            let current = fingerprint(&watched.path);
            if current != watched.last {
                log::debug!("{} changed", watched.path.display());
                watched.last = current;
                triggers.push(watched.trigger);
            }
        }
        triggers
    }
}

async fn detect_changes(
    mut detector: ChangeDetector,
    interval: Duration,
    tx: mpsc::Sender<Trigger>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for trigger in detector.poll() {
                    if tx.send(trigger).await.is_err() {
                        return;
                    }
                }
            }
            _ = cancel.cancelled() => {
                break;
            }
        }
    }
}

/// Cancels the change detector and waits for it to finish.
async fn stop_detector(cancel: &CancellationToken, task: JoinHandle<()>) {
    cancel.cancel();
    if let Err(e) = task.await {
        log::warn!("Change detector task ended abnormally: {}", e);
    }
}

/// Summary of a watch session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchReport {
    /// Extraction passes whose outputs were written
    pub passes: usize,
    /// Passes skipped because the page never became ready
    pub skipped: usize,
}

/// Writes `exams.json`, `events.json` and the iCalendar file to `config.out_dir`.
pub fn write_outputs(extraction: &Extraction, config: &Config) -> Result<()> {
    let out_dir = &config.out_dir;
    write_json(extraction, Some(out_dir.join(EXAMS_FILE_NAME).as_path()))?;
    write_json(
        &calendar_view(extraction, config),
        Some(out_dir.join(EVENTS_FILE_NAME).as_path()),
    )?;
    write_ics(extraction, &out_dir.join(ICS_FILE_NAME))?;
    Ok(())
}

/// Runs until `cancel` fires, rewriting outputs after every change burst.
///
/// # Errors
///
/// Fails if the input is stdin, if the output directory cannot be created,
/// or if writing outputs fails. A page that is not ready only skips the pass.
pub async fn run_watch(config: &Config, cancel: CancellationToken) -> Result<WatchReport> {
    if config.input == Path::new("-") {
        bail!("Watch mode needs a snapshot file; stdin cannot change");
    }
    std::fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.out_dir.display()
        )
    })?;

    let source = SnapshotSource::File(config.input.clone());
    let (tx, rx) = mpsc::channel(TRIGGER_CHANNEL_CAPACITY);
    tx.try_send(Trigger::Initial)
        .context("Failed to queue the initial pass")?;

    let detector = ChangeDetector::new(&config.input, &config.settings_path);
    let detector_cancel = cancel.child_token();
    let detector_task = tokio::spawn(detect_changes(
        detector,
        config.poll_interval,
        tx,
        detector_cancel.clone(),
    ));

    log::info!(
        "Watching {} (settings: {}), writing to {}",
        config.input.display(),
        config.settings_path.display(),
        config.out_dir.display()
    );

    let mut debouncer = Debouncer::new(rx, config.debounce);
    let mut report = WatchReport::default();
    let outcome = loop {
        let trigger = tokio::select! {
            _ = cancel.cancelled() => break Ok(()),
            trigger = debouncer.next() => match trigger {
                Some(trigger) => trigger,
                None => break Ok(()),
            },
        };

        log::info!("Extraction pass triggered by {:?}", trigger);
        match extract_from(&source, config, &cancel).await {
            Ok(extraction) => {
                if let Err(e) = write_outputs(&extraction, config) {
                    break Err(e);
                }
                report.passes += 1;
            }
            Err(_) if cancel.is_cancelled() => break Ok(()),
            Err(e) => {
                log::warn!("Skipping pass: {:#}", e);
                report.skipped += 1;
            }
        }
    };

    stop_detector(&detector_cancel, detector_task).await;
    log::info!(
        "Watch stopped after {} passes ({} skipped)",
        report.passes,
        report.skipped
    );
    outcome.map(|()| report)
}
