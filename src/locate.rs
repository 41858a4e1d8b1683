use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Dataset file resolution
// ---------------------------------------------------------------------------

/// The three probed locations, in priority order: a `data` folder next to the
/// executable, then one and two directories above it.
pub fn candidate_paths(base: &Path, name: &str) -> [PathBuf; 3] {
    [
        base.join("data").join(name),
        base.join("..").join("data").join(name),
        base.join("..").join("..").join("data").join(name),
    ]
}

/// First existing candidate under `base`, or None. Later candidates are not
/// probed once one matches.
pub fn resolve_from(base: &Path, name: &str) -> Option<PathBuf> {
    candidate_paths(base, name).into_iter().find(|p| p.exists())
}

fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve the dataset CSV relative to the running executable, or terminate.
///
/// Failure to find the file in any candidate location is the one expected and
/// handled error of the whole program: print the diagnostics and exit(1).
pub fn locate_csv(name: &str) -> PathBuf {
    let base = base_dir();
    if let Some(path) = resolve_from(&base, name) {
        return path;
    }

    log::error!("dataset '{name}' not found under {}", base.display());
    eprintln!("\n[ERROR] Couldn't find the CSV at any of these locations:\n");
    for p in candidate_paths(&base, name) {
        eprintln!(" - {}", p.display());
    }
    eprintln!("\nTips:");
    eprintln!("  • Make sure the file is really named exactly: {name}");
    eprintln!("  • Put it in a 'data' folder next to the executable or one/two folders above.");
    std::process::exit(1);
}
