use crate::controls::schema::TaxonomyDef;
use crate::model::{CoverageReport, CoverageSummary, DocumentCoverage, ExtractedContent};
use std::collections::{BTreeMap, BTreeSet};

/// Category assigned to documents matching no control.
pub const GENERAL_CATEGORY: &str = "General";

/// Analyze accumulated document text against a control taxonomy.
///
/// A document covers a control if any single word of the control's
/// lowercased description appears as a substring of the document's
/// lowercased text. Deliberately coarse: word-level substring match, no
/// phrase matching, no stemming. Short or common description words will
/// produce false positives; downstream reporting depends on this exact
/// behavior, so it must not be tightened here.
///
/// Pure function of its inputs: the same content map and taxonomy always
/// yield an identical report.
pub fn analyze(
    content: &BTreeMap<String, ExtractedContent>,
    taxonomy: &TaxonomyDef,
) -> CoverageReport {
    let mut per_document = BTreeMap::new();
    let mut covered_union: BTreeSet<String> = BTreeSet::new();

    for (filename, extracted) in content {
        let text_lower = extracted.full_text.to_lowercase();
        let mut covered_controls = BTreeSet::new();
        let mut primary_control: Option<String> = None;

        for control in &taxonomy.controls {
            let matches = control
                .description
                .to_lowercase()
                .split_whitespace()
                .any(|word| text_lower.contains(word));
            if matches {
                if primary_control.is_none() {
                    primary_control = Some(control.id.clone());
                }
                covered_controls.insert(control.id.clone());
                covered_union.insert(control.id.clone());
            }
        }

        per_document.insert(
            filename.clone(),
            DocumentCoverage {
                covered_controls,
                primary_control: primary_control.unwrap_or_else(|| GENERAL_CATEGORY.to_string()),
            },
        );
    }

    let total_controls = taxonomy.len();
    let coverage_percent = if total_controls == 0 {
        0.0
    } else {
        covered_union.len() as f64 / total_controls as f64 * 100.0
    };

    CoverageReport {
        documents_analyzed: content.len(),
        per_document,
        summary: CoverageSummary {
            total_controls,
            covered_controls: covered_union.len(),
            coverage_percent,
            covered: covered_union.into_iter().collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::schema::{ControlDef, TaxonomyDef};

    fn taxonomy(entries: &[(&str, &str)]) -> TaxonomyDef {
        TaxonomyDef {
            name: "Test".into(),
            version: "1.0".into(),
            description: None,
            controls: entries
                .iter()
                .map(|(id, desc)| ControlDef {
                    id: id.to_string(),
                    description: desc.to_string(),
                })
                .collect(),
        }
    }

    fn content(entries: &[(&str, &str)]) -> BTreeMap<String, ExtractedContent> {
        entries
            .iter()
            .map(|(name, text)| {
                (
                    name.to_string(),
                    ExtractedContent::new(name.to_string(), 1, text.to_string()),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_word_match_covers_control() {
        let tax = taxonomy(&[("A.5", "information security policies")]);
        let map = content(&[("doc.pdf", "Our security team reviews this quarterly.")]);
        let report = analyze(&map, &tax);

        let doc = &report.per_document["doc.pdf"];
        assert!(doc.covered_controls.contains("A.5"));
        assert_eq!(doc.primary_control, "A.5");
    }

    #[test]
    fn test_no_match_yields_general_category() {
        let tax = taxonomy(&[("A.5", "information security policies")]);
        let map = content(&[("doc.pdf", "unrelated")]);
        let report = analyze(&map, &tax);

        let doc = &report.per_document["doc.pdf"];
        assert!(doc.covered_controls.is_empty());
        assert_eq!(doc.primary_control, GENERAL_CATEGORY);
    }

    #[test]
    fn test_primary_control_is_first_in_taxonomy_order() {
        let tax = taxonomy(&[("A.9", "access control"), ("A.5", "security policies")]);
        let map = content(&[("doc.pdf", "security and access rules")]);
        let report = analyze(&map, &tax);

        // Both match; A.9 is listed first in the taxonomy.
        let doc = &report.per_document["doc.pdf"];
        assert_eq!(doc.primary_control, "A.9");
        assert_eq!(doc.covered_controls.len(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tax = taxonomy(&[("A.10", "Cryptography")]);
        let map = content(&[("doc.pdf", "We apply CRYPTOGRAPHY at rest.")]);
        let report = analyze(&map, &tax);
        assert!(report.per_document["doc.pdf"].covered_controls.contains("A.10"));
    }

    #[test]
    fn test_substring_match_is_intentionally_coarse() {
        // "policies" matching inside "policiesets" is expected behavior of
        // the substring heuristic, not a bug.
        let tax = taxonomy(&[("A.5", "policies")]);
        let map = content(&[("doc.pdf", "policiesets are described here")]);
        let report = analyze(&map, &tax);
        assert!(report.per_document["doc.pdf"].covered_controls.contains("A.5"));
    }

    #[test]
    fn test_aggregate_percentage_over_union() {
        let tax = taxonomy(&[
            ("A.5", "security policies"),
            ("A.9", "access control"),
            ("A.10", "cryptography"),
            ("A.15", "supplier relationships"),
        ]);
        let map = content(&[
            ("a.pdf", "security procedures"),
            ("b.pdf", "access reviews and security"),
            ("c.pdf", "nothing relevant"),
        ]);
        let report = analyze(&map, &tax);

        // Union is {A.5, A.9}; 2 of 4 controls covered.
        assert_eq!(report.summary.covered_controls, 2);
        assert_eq!(report.summary.total_controls, 4);
        assert!((report.summary.coverage_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(report.summary.covered, vec!["A.5", "A.9"]);
    }

    #[test]
    fn test_empty_text_yields_zero_matches() {
        let tax = taxonomy(&[("A.5", "security")]);
        let map = content(&[("empty.pdf", "")]);
        let report = analyze(&map, &tax);
        assert!(report.per_document["empty.pdf"].covered_controls.is_empty());
        assert_eq!(report.summary.covered_controls, 0);
        assert_eq!(report.summary.coverage_percent, 0.0);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let tax = taxonomy(&[("A.5", "security policies"), ("A.9", "access control")]);
        let map = content(&[("a.pdf", "security review"), ("b.pdf", "access log")]);
        let first = analyze(&map, &tax);
        let second = analyze(&map, &tax);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_content_map() {
        let tax = taxonomy(&[("A.5", "security")]);
        let report = analyze(&BTreeMap::new(), &tax);
        assert_eq!(report.documents_analyzed, 0);
        assert!(report.per_document.is_empty());
        assert_eq!(report.summary.coverage_percent, 0.0);
    }
}
