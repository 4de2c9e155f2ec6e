//! Stateless on-page SEO heuristics.
//!
//! Each analyzer takes already-extracted fields and returns an
//! [`AnalysisResult`]; none of them touch the network or mutate their input.

pub mod content;
pub mod headers;
pub mod score;
pub mod title_meta;
pub mod url_structure;

use serde::Serialize;
use std::collections::BTreeMap;

/// A named value reported alongside an analyzer's findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Metric {
    Count(usize),
    Label(&'static str),
}

/// Output of a single analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub metrics: BTreeMap<&'static str, Metric>,
}

impl AnalysisResult {
    fn issue(&mut self, issue: &str) {
        self.issues.push(issue.to_string());
    }

    /// Record an issue together with the fix for it
    fn issue_with_fix(&mut self, issue: &str, recommendation: &str) {
        self.issue(issue);
        self.recommend(recommendation);
    }

    fn recommend(&mut self, recommendation: &str) {
        self.recommendations.push(recommendation.to_string());
    }

    fn set(&mut self, name: &'static str, value: Metric) {
        self.metrics.insert(name, value);
    }

    /// Numeric metric by name
    pub fn count(&self, name: &str) -> Option<usize> {
        match self.metrics.get(name) {
            Some(Metric::Count(n)) => Some(*n),
            _ => None,
        }
    }

    /// Label metric by name
    pub fn label(&self, name: &str) -> Option<&'static str> {
        match self.metrics.get(name) {
            Some(Metric::Label(label)) => Some(*label),
            _ => None,
        }
    }

    pub fn has_issue(&self, issue: &str) -> bool {
        self.issues.iter().any(|i| i == issue)
    }
}
