//! Manifest hot reload.
//!
//! # Responsibilities
//! - Watch the manifest's directory and react to events on the manifest file
//! - Collapse bursts of events (editors write, truncate and rename) into one
//!   reload
//! - Forward every manifest that loads and validates; keep the previous one
//!   otherwise

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_manifest;
use crate::config::schema::Manifest;
use crate::feature::active_features;

/// Events closer together than this trigger a single reload.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Reloads the manifest at `path` and sends each valid result.
pub struct ManifestWatcher {
    path: PathBuf,
    debounce: Duration,
    update_tx: mpsc::Sender<Manifest>,
}

impl ManifestWatcher {
    /// Returns the watcher and the receiving end for reloaded manifests.
    pub fn new(path: &Path) -> (Self, mpsc::Receiver<Manifest>) {
        let (update_tx, update_rx) = mpsc::channel();

        (
            Self {
                path: path.to_path_buf(),
                debounce: DEFAULT_DEBOUNCE,
                update_tx,
            },
            update_rx,
        )
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Start watching. Events are handled on notify's thread; the returned
    /// watcher must be kept alive for updates to flow.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let ManifestWatcher {
            path,
            debounce,
            update_tx,
        } = self;
        let target = path.clone();
        let mut gate = Debounce::new(debounce);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !touches_manifest(&event, &target) || !gate.admit(Instant::now()) {
                        return;
                    }
                    if let Some(manifest) = reload(&target) {
                        if update_tx.send(manifest).is_err() {
                            tracing::debug!("Manifest receiver dropped, ignoring reload");
                        }
                    }
                }
                Err(e) => tracing::error!(error = %e, "Manifest watch error"),
            },
            Config::default(),
        )?;

        // Watch the parent so renames over the file are still seen.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        tracing::info!(manifest = %path.display(), ?debounce, "Manifest watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path) -> Option<Manifest> {
    match load_manifest(path) {
        Ok(manifest) => {
            tracing::info!(
                manifest = %path.display(),
                features = manifest.features.len(),
                active = active_features(&manifest.features).count(),
                pattern = manifest.pattern.is_some(),
                "Manifest reloaded"
            );
            Some(manifest)
        }
        Err(e) => {
            tracing::error!(
                manifest = %path.display(),
                error = %e,
                "Manifest reload failed, keeping the previous one"
            );
            None
        }
    }
}

/// True for content changes whose paths include the manifest file.
fn touches_manifest(event: &Event, manifest: &Path) -> bool {
    let relevant = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
    relevant
        && event
            .paths
            .iter()
            .any(|p| p == manifest || p.file_name() == manifest.file_name())
}

/// Admits at most one event per window.
#[derive(Debug)]
struct Debounce {
    window: Duration,
    last: Option<Instant>,
}

impl Debounce {
    fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    fn admit(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
