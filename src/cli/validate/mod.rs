//! `taxon validate`: check that every referenced name is registered.

mod issue;
mod report;

use anyhow::{Result, bail};

use crate::config::{ContentConfig, IssueConfig, TaxonConfig, ValidateLevel};
use crate::content::collect_documents;
use crate::log;
use crate::taxonomy::{MissingEntries, Taxonomy, TaxonomyStore, validate};
use crate::utils::plural_count;

use issue::{IssuePayload, IssueTarget, file_issue};
use report::MissingReport;

/// Validate documents against the registry.
///
/// The registry is never modified. Missing entries fail the command unless
/// `validate.level` is `warn`.
pub fn validate_taxonomy(config: &TaxonConfig) -> Result<()> {
    let store = config.store();
    let (taxonomy, missing) = check(&store, &config.content)?;

    warn_collisions(&taxonomy);

    let registry = config.root_relative(store.path());
    let report = MissingReport::new(&missing, &registry);

    if missing.is_empty() {
        log!("validate"; "{}", report);
        return Ok(());
    }

    report.print();
    eprintln!();
    eprintln!("{}", report.markdown());

    if config.issue.enable {
        report_issue(&config.issue, &report);
    }

    match config.validate.level {
        ValidateLevel::Error => bail!("validation failed: {}", report),
        ValidateLevel::Warn => {
            log!("warning"; "{}", report);
            Ok(())
        }
    }
}

/// Load the registry and collect missing names.
fn check<S: TaxonomyStore>(
    store: &S,
    content: &ContentConfig,
) -> Result<(Taxonomy, MissingEntries)> {
    let documents = collect_documents(&content.dir, &content.extensions)?;
    log!("validate"; "checking {}", plural_count(documents.len(), "document"));

    let taxonomy = store.load()?;
    let missing = validate(&documents, &taxonomy);
    Ok((taxonomy, missing))
}

/// Existing slug collisions are reported but never fail validation.
fn warn_collisions(taxonomy: &Taxonomy) {
    for (ns, shared) in taxonomy.collisions() {
        for (slug, names) in shared {
            log!("warning"; "{} slug `{}` shared by {}", ns.singular(), slug, names.join(", "));
        }
    }
}

/// File a remediation issue if credentials are available.
///
/// Every failure is logged and swallowed.
fn report_issue(config: &IssueConfig, report: &MissingReport<'_>) {
    let target = match IssueTarget::from_env(config) {
        Ok(Some(target)) => target,
        Ok(None) => {
            crate::debug!("issue"; "{} or {} not set, skipping", config.repo_env, config.token_env);
            return;
        }
        Err(err) => {
            log!("issue"; "skipped: {}", err);
            return;
        }
    };

    let payload = IssuePayload::new(report, &config.labels);
    match file_issue(config, &target, &payload) {
        Ok(url) => log!("issue"; "created {}", url),
        Err(err) => log!("issue"; "failed to create issue: {:#}", anyhow::Error::from(err)),
    }
}
