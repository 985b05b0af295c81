use indexmap::IndexMap;
use serde::Serialize;

use crate::audit::{AuditReport, EntityReport, ExtractionReport, SubCheckReport};
use crate::error::Result;
use crate::validator::{Classification, PassRule};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: Option<&'a str>,
    root: String,
    success: bool,
    summary: Summary,
    entities: Vec<JsonEntity<'a>>,
    extractions: Vec<JsonExtraction<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_entities: usize,
    complete: usize,
    partial: usize,
    incomplete: usize,
    tokens_found: usize,
    tokens_total: usize,
    overall_percent: f64,
    system_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_overall: Option<f64>,
}

#[derive(Serialize)]
struct JsonEntity<'a> {
    name: &'a str,
    classification: Classification,
    percent: f64,
    passed: usize,
    total: usize,
    sub_checks: Vec<JsonSubCheck<'a>>,
}

#[derive(Serialize)]
struct JsonSubCheck<'a> {
    name: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    passed: bool,
    rule: PassRule,
    found: usize,
    total: usize,
    items: &'a IndexMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_issue: Option<String>,
}

#[derive(Serialize)]
struct JsonExtraction<'a> {
    name: &'a str,
    file: String,
    count: usize,
    records: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_issue: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let (complete, partial, incomplete) =
            report
                .entities
                .iter()
                .fold((0, 0, 0), |(c, p, i), e| match e.classification {
                    Classification::Complete => (c + 1, p, i),
                    Classification::Partial => (c, p + 1, i),
                    Classification::Incomplete => (c, p, i + 1),
                });

        let output = JsonOutput {
            title: report.title.as_deref(),
            root: report.root().display().to_string(),
            success: report.is_success(),
            summary: Summary {
                total_entities: report.entities.len(),
                complete,
                partial,
                incomplete,
                tokens_found: report.overall.found,
                tokens_total: report.overall.total,
                overall_percent: round1(report.overall.percent()),
                system_percent: round1(report.system.percent()),
                min_overall: report.min_overall,
            },
            entities: report.entities.iter().map(convert_entity).collect(),
            extractions: report.extractions.iter().map(convert_extraction).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn convert_entity(entity: &EntityReport) -> JsonEntity<'_> {
    JsonEntity {
        name: &entity.name,
        classification: entity.classification,
        percent: round1(entity.completion.percent()),
        passed: entity.completion.found,
        total: entity.completion.total,
        sub_checks: entity.sub_checks.iter().map(convert_sub_check).collect(),
    }
}

fn convert_sub_check(sub: &SubCheckReport) -> JsonSubCheck<'_> {
    let completion = sub.completion();
    JsonSubCheck {
        name: &sub.name,
        kind: sub.kind.as_str(),
        file: sub.file.as_ref().map(|p| p.display().to_string()),
        passed: sub.passed,
        rule: sub.rule,
        found: completion.found,
        total: completion.total,
        items: &sub.items,
        file_issue: sub.file_issue.as_ref().map(ToString::to_string),
    }
}

fn convert_extraction(extraction: &ExtractionReport) -> JsonExtraction<'_> {
    JsonExtraction {
        name: &extraction.name,
        file: extraction.file.display().to_string(),
        count: extraction.records.len(),
        records: extraction.records.iter().map(String::as_str).collect(),
        file_issue: extraction.file_issue.as_ref().map(ToString::to_string),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
