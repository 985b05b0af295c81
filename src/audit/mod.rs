//! Runs an audit definition against a project root.

mod report;

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::config::{Config, EntityConfig, ExtractConfig, ProximityConfig};
use crate::error::Result;
use crate::source::FileSystem;
use crate::validator::{
    Completion, PassRule, ScorePolicy, StructuralValidator, associated, extract_records,
};

pub use report::{AuditReport, EntityReport, ExtractionReport, SubCheckKind, SubCheckReport};

/// Runs an audit definition against one project root.
pub struct Auditor<'a> {
    validator: StructuralValidator<'a>,
}

impl<'a> Auditor<'a> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, fs: &'a dyn FileSystem) -> Self {
        Self {
            validator: StructuralValidator::new(root, fs),
        }
    }

    #[must_use]
    pub const fn validator(&self) -> &StructuralValidator<'a> {
        &self.validator
    }

    /// Evaluate every entity and extraction. File problems never abort the
    /// run; they are recorded on the affected sub-checks.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if an extraction anchor does not compile.
    pub fn run(&self, config: &Config) -> Result<AuditReport> {
        let policy = config.audit.policy();

        let entities: Vec<_> = config
            .entities
            .iter()
            .map(|entity| self.run_entity(entity, &policy))
            .collect();

        let extractions = config
            .extractions
            .iter()
            .map(|extract| self.run_extraction(extract))
            .collect::<Result<Vec<_>>>()?;

        let overall = entities
            .iter()
            .flat_map(|e| &e.sub_checks)
            .filter(|s| s.kind == SubCheckKind::Tokens)
            .fold(Completion::default(), |acc, s| {
                let c = s.completion();
                Completion::new(acc.found + c.found, acc.total + c.total)
            });
        let system = Completion::from_flags(entities.iter().map(EntityReport::is_complete));

        Ok(AuditReport {
            title: config.audit.name.clone(),
            root: self.validator.root().to_path_buf(),
            entities,
            extractions,
            overall,
            system,
            require_all_complete: config.audit.require_all_complete,
            min_overall: config.audit.min_overall,
        })
    }

    fn run_entity(&self, entity: &EntityConfig, policy: &ScorePolicy) -> EntityReport {
        let mut sub_checks = Vec::with_capacity(entity.sub_check_count());

        if !entity.files.is_empty() {
            sub_checks.push(self.run_files(&entity.files));
        }

        let checks: Vec<_> = entity.checks.iter().map(|c| c.to_check()).collect();
        let results = self.validator.run_batch(&checks);
        sub_checks.extend(entity.checks.iter().zip(results).map(|(config, result)| {
            SubCheckReport::from_check_result(&config.name, result, config.pass)
        }));

        sub_checks.extend(entity.proximity.iter().map(|p| self.run_proximity(p)));

        EntityReport::new(&entity.name, sub_checks, policy)
    }

    fn run_files(&self, files: &[PathBuf]) -> SubCheckReport {
        let items = files
            .iter()
            .map(|path| (path.display().to_string(), self.validator.exists(path)))
            .collect();
        SubCheckReport::new(
            "required files",
            SubCheckKind::Files,
            None,
            items,
            PassRule::All,
            None,
        )
    }

    fn run_proximity(&self, proximity: &ProximityConfig) -> SubCheckReport {
        let (items, issue) = match self.validator.text(&proximity.file) {
            Ok(text) => {
                let items = proximity
                    .anchors
                    .iter()
                    .map(|anchor| {
                        let needle = proximity.anchor_needle(anchor);
                        let hit = associated(
                            &text,
                            &needle,
                            proximity.needles.as_slice(),
                            proximity.window,
                        );
                        (anchor.clone(), hit)
                    })
                    .collect();
                (items, None)
            }
            Err(issue) => {
                let items = proximity.anchors.iter().map(|a| (a.clone(), false)).collect();
                (items, Some(issue))
            }
        };

        SubCheckReport::new(
            &proximity.name,
            SubCheckKind::Proximity,
            Some(proximity.file.clone()),
            items,
            proximity.pass,
            issue,
        )
    }

    fn run_extraction(&self, extract: &ExtractConfig) -> Result<ExtractionReport> {
        let pattern = extract.to_pattern()?;
        let (records, file_issue) = match self.validator.text(&extract.file) {
            Ok(text) => (extract_records(&text, &pattern), None),
            Err(issue) => (IndexSet::new(), Some(issue)),
        };
        Ok(ExtractionReport {
            name: extract.name.clone(),
            file: extract.file.clone(),
            records,
            file_issue,
        })
    }
}

/// Audits `root` against `config` on the real filesystem.
///
/// # Errors
/// Returns `InvalidPattern` if an extraction anchor does not compile.
pub fn audit_project(root: &Path, config: &Config) -> Result<AuditReport> {
    let fs = crate::source::RealFileSystem;
    Auditor::new(root, &fs).run(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
