//! `taxon migrate`: import a legacy TypeScript registry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::TaxonConfig;
use crate::log;
use crate::taxonomy::{TaxonomyStore, legacy};
use crate::utils::{path::resolve_path, plural_count};

/// Merge the legacy module at `path` into the registry.
///
/// Entries already in the registry win; legacy slugs are imported verbatim.
pub fn migrate(config: &TaxonConfig, path: &Path) -> Result<()> {
    let source_path = resolve_path(path, config.get_root());
    let store = config.store();

    let (authors, categories) = run(&store, &source_path)?;

    log!(
        "migrate";
        "imported {} and {} from {}",
        plural_count(authors, "author"),
        plural_count(categories, "category"),
        config.root_relative(&source_path).display()
    );
    log!("migrate"; "saved {}", config.root_relative(store.path()).display());
    Ok(())
}

/// Returns the number of imported authors and categories.
fn run<S: TaxonomyStore>(store: &S, source_path: &Path) -> Result<(usize, usize)> {
    let source = fs::read_to_string(source_path)
        .with_context(|| format!("failed to read {}", source_path.display()))?;

    let imported = legacy::parse(&source);
    if imported.is_empty() {
        log!("warning"; "no registry entries found in {}", source_path.display());
    }

    let mut taxonomy = store.load()?;
    let counts = taxonomy.absorb(&imported);

    for (ns, shared) in taxonomy.collisions() {
        for (slug, names) in shared {
            log!("warning"; "{} slug `{}` shared by {}", ns.singular(), slug, names.join(", "));
        }
    }

    store
        .save(&taxonomy)
        .with_context(|| format!("failed to save registry to {}", store.location()))?;
    Ok(counts)
}
