//! `taxon generate`: extend the registry with newly referenced names.

use anyhow::{Context, Result};

use crate::config::{ContentConfig, TaxonConfig};
use crate::content::collect_documents;
use crate::log;
use crate::taxonomy::{BuildOutcome, Namespace, TaxonomyStore, build};
use crate::utils::plural_count;

/// Scan content, merge new names into the registry and save it.
pub fn generate_registry(config: &TaxonConfig) -> Result<()> {
    let store = config.store();
    let outcome = run(&store, &config.content)?;

    for ns in Namespace::ALL {
        let stats = outcome.stats(ns);
        log!(
            "generate";
            "found {} ({} existing, {} new)",
            plural_count(stats.total(), ns.singular()),
            stats.existing,
            stats.added
        );
    }

    for (ns, name, slug) in &outcome.added {
        crate::debug!("generate"; "{} \"{}\" -> {}", ns.singular(), name, slug);
    }

    let location = config.root_relative(store.path());
    if outcome.is_unchanged() {
        log!("generate"; "{} is up to date", location.display());
    } else {
        log!("generate"; "saved {}", location.display());
        log!("generate"; "review the new slugs before committing");
    }

    Ok(())
}

/// Build against `store` and save the merged registry.
///
/// Saving happens even when nothing was added, so the file is always
/// written in display order.
fn run<S: TaxonomyStore>(store: &S, content: &ContentConfig) -> Result<BuildOutcome> {
    let documents = collect_documents(&content.dir, &content.extensions)?;
    crate::debug!("generate"; "read {}", plural_count(documents.len(), "document"));

    let existing = store.load()?;
    let outcome = build(&documents, &existing);

    store
        .save(&outcome.taxonomy)
        .with_context(|| format!("failed to save registry to {}", store.location()))?;

    Ok(outcome)
}
