use crate::support::{exit_with, yes_no};
use reverse_store::files::write_text;
use reverse_store::{Buckets, DataLayout};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub root: PathBuf,
    pub verses_master: PathBuf,
    pub buckets_master: PathBuf,
    pub created_root: bool,
    pub created_verses_master: bool,
    pub created_buckets_master: bool,
}

pub fn init_layout(layout: &DataLayout) -> Result<InitOutcome, String> {
    let root = layout.root().to_path_buf();

    let mut created_root = false;
    if !root.exists() {
        fs::create_dir_all(&root)
            .map_err(|e| format!("failed to create data dir {}: {e}", root.display()))?;
        created_root = true;
    }
    if !root.is_dir() {
        return Err(format!("data path is not a directory: {}", root.display()));
    }

    let verses_master = layout.verses_master();
    let created_verses_master = ensure_file(&verses_master, || Ok(String::new()))?;

    let buckets_master = layout.buckets_master();
    let created_buckets_master = ensure_file(&buckets_master, || {
        Buckets::skeleton()
            .to_json_string()
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("failed to encode bucket skeleton: {e}"))
    })?;

    Ok(InitOutcome {
        root,
        verses_master,
        buckets_master,
        created_root,
        created_verses_master,
        created_buckets_master,
    })
}

/// Write `contents()` to `path` unless it already exists.
fn ensure_file(
    path: &Path,
    contents: impl FnOnce() -> Result<String, String>,
) -> Result<bool, String> {
    if path.exists() {
        if !path.is_file() {
            return Err(format!("path exists but is not a file: {}", path.display()));
        }
        return Ok(false);
    }
    write_text(path, &contents()?)
        .map_err(|e| format!("failed to initialize {}: {e}", path.display()))?;
    log::info!("created {}", path.display());
    Ok(true)
}

pub fn run(layout: DataLayout) {
    let outcome = init_layout(&layout).unwrap_or_else(|e| exit_with(e));

    println!("reverse init {}", outcome.root.display());
    println!();
    println!("  verses master: {}", outcome.verses_master.display());
    println!("  buckets master: {}", outcome.buckets_master.display());
    println!("  created data dir: {}", yes_no(outcome.created_root));
    println!(
        "  created verses master: {}",
        yes_no(outcome.created_verses_master)
    );
    println!(
        "  created buckets master: {}",
        yes_no(outcome.created_buckets_master)
    );
}
