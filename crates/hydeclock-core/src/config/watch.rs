use std::{
    any::TypeId,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    sync::Arc,
};

use iced::{
    Subscription,
    futures::{SinkExt, StreamExt, channel::mpsc::Sender},
    stream::channel,
};
use inotify::{EventMask, Inotify, WatchMask};
use log::{debug, error, info, warn};

use super::{
    ConfigReadError,
    manager::{ConfigApplied, ConfigDegradation, ConfigManager, ConfigUpdateError},
    read_config,
};

/// Events produced by the configuration watcher subscription.
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    /// A new, validated configuration changed something on screen or in logging.
    Applied(ConfigApplied),
    /// The configuration could not be refreshed and the previous state is
    /// retained.
    Degraded(ConfigDegradation),
}

/// What happened to the config file, as far as the widget cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileChange {
    /// A writer closed the file or a complete file was moved into place.
    Written,
    /// The file was deleted or moved away.
    Gone,
}

/// Only complete writes are interesting; `MODIFY` fires for every partial
/// write of an editor save.
const WATCH_MASK: WatchMask = WatchMask::CLOSE_WRITE
    .union(WatchMask::MOVED_TO)
    .union(WatchMask::DELETE)
    .union(WatchMask::MOVED_FROM);

fn classify(name: Option<&OsStr>, mask: EventMask, target: &OsStr) -> Option<FileChange> {
    if name? != target {
        return None;
    }

    if mask.intersects(EventMask::CLOSE_WRITE | EventMask::MOVED_TO) {
        Some(FileChange::Written)
    } else if mask.intersects(EventMask::DELETE | EventMask::MOVED_FROM) {
        Some(FileChange::Gone)
    } else {
        None
    }
}

/// Folds one batch of raw events into the change that ends it.
fn last_change<'a, I>(events: I, target: &OsStr) -> Option<FileChange>
where
    I: IntoIterator<Item = (Option<&'a OsStr>, EventMask)>,
{
    events
        .into_iter()
        .filter_map(|(name, mask)| classify(name, mask, target))
        .last()
}

/// Turns file changes into [`ConfigEvent`]s against the last valid config.
#[derive(Debug, Clone)]
struct ConfigWatcher {
    path:    PathBuf,
    manager: Arc<ConfigManager>,
}

impl ConfigWatcher {
    fn on_change(&self, change: FileChange) -> Option<ConfigEvent> {
        let outcome = match change {
            FileChange::Written => self.reload(),
            FileChange::Gone => Err(ConfigUpdateError::Removed),
        };

        match outcome {
            Ok(applied) if applied.impact.is_empty() => {
                debug!("Config rewritten without effective changes");
                None
            }
            Ok(applied) => Some(ConfigEvent::Applied(applied)),
            Err(reason) => {
                warn!("Keeping previous clock settings: {reason}");
                self.manager
                    .degraded(reason)
                    .inspect_err(|err| error!("Cannot report config degradation: {err}"))
                    .ok()
                    .map(ConfigEvent::Degraded)
            }
        }
    }

    fn reload(&self) -> Result<ConfigApplied, ConfigUpdateError> {
        let config = read_config(&self.path).map_err(|err| match err {
            ConfigReadError::Read { path, source } => ConfigUpdateError::read(path, &source),
            ConfigReadError::Parse { path, source } => ConfigUpdateError::parse(path, &source),
        })?;

        config.validate()?;

        self.manager
            .apply(config)
            .map_err(|err| ConfigUpdateError::state(err.to_string()))
    }
}

/// Runs one inotify session until its stream ends. Returns `false` once the
/// subscription output is closed.
async fn watch_once(
    watcher: &ConfigWatcher,
    folder: &Path,
    file_name: &OsStr,
    output: &mut Sender<ConfigEvent>,
) -> std::io::Result<bool> {
    let inotify = Inotify::init()?;
    inotify.watches().add(folder, WATCH_MASK)?;

    let mut batches = inotify.into_event_stream([0; 1024])?.ready_chunks(10);
    debug!("Watching {folder:?} for changes to {file_name:?}");

    while let Some(batch) = batches.next().await {
        let events: Vec<inotify::Event<OsString>> = batch
            .into_iter()
            .filter_map(|event| {
                event
                    .inspect_err(|err| error!("Failed to read inotify event: {err}"))
                    .ok()
            })
            .collect();

        let change = last_change(
            events.iter().map(|event| (event.name.as_deref(), event.mask)),
            file_name,
        );

        if let Some(event) = change.and_then(|change| watcher.on_change(change))
            && output.send(event).await.is_err()
        {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Watches the config file's directory and emits [`ConfigEvent`]s.
pub fn subscription(path: &Path, manager: Arc<ConfigManager>) -> Subscription<ConfigEvent> {
    let path = path.to_path_buf();

    Subscription::run_with_id(
        TypeId::of::<ConfigEvent>(),
        channel(100, move |mut output| async move {
            let (Some(folder), Some(file_name)) = (path.parent(), path.file_name()) else {
                error!("Cannot watch config path {path:?}: no parent directory or file name");
                return;
            };

            let watcher = ConfigWatcher {
                path: path.clone(),
                manager,
            };

            loop {
                match watch_once(&watcher, folder, file_name, &mut output).await {
                    Ok(true) => info!("Config watch stream ended, restarting"),
                    Ok(false) => break,
                    Err(err) => {
                        error!("Config hot reload disabled: {err}");
                        break;
                    }
                }
            }

            debug!("Config watcher stopped");
        }),
    )
}
