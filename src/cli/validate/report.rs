//! Missing-entry report formatting.

use std::fmt;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::taxonomy::{MissingEntries, Namespace};
use crate::utils::plural_count;

/// Placeholder slug shown next to each missing name.
const SLUG_PLACEHOLDER: &str = "slug-here";

/// Report over the names missing from a registry.
#[derive(Debug, Clone, Copy)]
pub struct MissingReport<'a> {
    missing: &'a MissingEntries,
    /// Registry path as shown to readers.
    registry: &'a Path,
}

impl<'a> MissingReport<'a> {
    pub const fn new(missing: &'a MissingEntries, registry: &'a Path) -> Self {
        Self { missing, registry }
    }

    /// Issue title, e.g. `Missing Taxonomy Entries: 2 authors, 1 categories`.
    pub fn title(&self) -> String {
        format!(
            "Missing Taxonomy Entries: {} authors, {} categories",
            self.missing.authors.len(),
            self.missing.categories.len()
        )
    }

    /// Markdown checklist, used as the issue body.
    pub fn markdown(&self) -> String {
        let mut out = String::from("# Missing Taxonomy Entries\n");

        for ns in Namespace::ALL {
            out.push_str(&format!("\n## Missing {}\n", heading(ns)));
            for name in self.missing.get(ns) {
                out.push_str(&format!("- [ ] `\"{name}\": \"{SLUG_PLACEHOLDER}\"`\n"));
            }
        }

        out.push_str(&format!(
            "\nPlease add these entries to `{}`.\n",
            self.registry.display()
        ));
        out
    }

    /// Print the report to stderr, grouped by namespace.
    pub fn print(&self) {
        for ns in Namespace::ALL {
            let names = self.missing.get(ns);
            if names.is_empty() {
                continue;
            }

            eprintln!();
            eprintln!(
                "{} {}",
                ns.name().red().bold(),
                format!("({} missing)", names.len()).dimmed()
            );
            for name in names {
                eprintln!("{} {}", "→".red(), name);
            }
        }
        eprintln!();
        eprintln!(
            "{} {}",
            "add them to".dimmed(),
            self.registry.display().cyan()
        );
    }
}

impl fmt::Display for MissingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.missing.len();
        if total == 0 {
            write!(f, "{}", "all authors and categories registered".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                plural_count(total, "missing entry").red().bold(),
                format!(
                    "({}, {})",
                    plural_count(self.missing.authors.len(), "author"),
                    plural_count(self.missing.categories.len(), "category")
                )
                .dimmed()
            )
        }
    }
}

fn heading(ns: Namespace) -> &'static str {
    match ns {
        Namespace::Authors => "Authors",
        Namespace::Categories => "Categories",
    }
}
