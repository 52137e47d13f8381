//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::new_debouncer;
use notify::RecursiveMode;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Press;

/// Generate the static site
pub fn run(press: &Press) -> Result<()> {
    let start = Instant::now();

    let content = ContentLoader::new(press).load()?;
    tracing::info!(
        "Loaded {} posts and {} photos",
        content.posts.len(),
        content.photos.len()
    );

    Generator::new(press)?.generate(&content)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Watch sources and configuration, regenerating once per settled burst of changes
pub fn watch(press: &Press) -> Result<()> {
    let (tx, rx) = channel();

    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if press.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&press.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", press.source_dir);
    }

    let config_path = press.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let paths: Vec<_> = events.into_iter().map(|e| e.path).collect();
                if let Err(e) = rebuild_on_change(press, &paths) {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Rebuild once for a batch of changed paths; returns whether anything ran
pub fn rebuild_on_change(press: &Press, paths: &[PathBuf]) -> Result<bool> {
    let relevant: Vec<_> = paths.iter().filter(|p| is_relevant(p)).collect();
    if relevant.is_empty() {
        return Ok(false);
    }

    for path in &relevant {
        tracing::info!("File changed: {}", path.display());
    }

    rebuild(press)?;
    tracing::info!("Regenerated successfully");
    Ok(true)
}

/// Editor and VCS noise is ignored
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

/// Reload configuration and regenerate
pub fn rebuild(press: &Press) -> Result<()> {
    let press = Press::new(&press.base_dir)?;
    run(&press)
}
