//! Candidate pool summary
//!
//! Aggregate counts over a candidate list for overview and dashboard views:
//! role, location, salary and skill distributions plus the distinct
//! availability types on offer. Pure and order-deterministic.

use crate::core::salary::parse_salary;
use crate::models::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const TOP_ROLES: usize = 10;
const TOP_SKILLS: usize = 5;

/// Salary buckets as `(label, inclusive upper bound)`, last bucket open
const SALARY_BUCKETS: &[(&str, Option<u64>)] = &[
    ("$0-50k", Some(50_000)),
    ("$50k-100k", Some(100_000)),
    ("$100k-150k", Some(150_000)),
    ("$150k+", None),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    pub total_candidates: usize,
    pub unique_locations: usize,
    pub role_distribution: Vec<CountEntry>,
    pub location_distribution: Vec<CountEntry>,
    pub salary_distribution: Vec<CountEntry>,
    pub top_skills: Vec<CountEntry>,
    pub availability_options: Vec<AvailabilityOption>,
}

/// Occurrence counter that remembers first-seen order
#[derive(Default)]
struct Tally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.to_string());
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    /// Entries in first-seen order
    fn entries(self) -> Vec<CountEntry> {
        let Tally { order, mut counts } = self;
        order
            .into_iter()
            .map(|name| {
                let value = counts.remove(&name).unwrap_or_default();
                CountEntry { name, value }
            })
            .collect()
    }

    /// Highest counts first, ties in first-seen order
    fn top(self, limit: usize) -> Vec<CountEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.value.cmp(&a.value));
        entries.truncate(limit);
        entries
    }
}

/// Summarize a candidate pool
pub fn summarize(candidates: &[Candidate]) -> PoolSummary {
    let mut roles = Tally::default();
    let mut locations = Tally::default();
    let mut skills = Tally::default();
    let mut salary_counts = vec![0usize; SALARY_BUCKETS.len()];
    let mut seen_availability = HashSet::new();
    let mut availability_options = Vec::new();

    for candidate in candidates {
        for experience in candidate.experiences() {
            roles.add(&experience.role_name);
        }

        if let Some(location) = candidate.location.as_deref() {
            locations.add(location);
        }

        for skill in candidate.skills() {
            skills.add(skill);
        }

        if let Some(raw) = candidate.full_time_salary() {
            salary_counts[salary_bucket(parse_salary(raw))] += 1;
        }

        for availability in candidate.availability() {
            if seen_availability.insert(availability.as_str()) {
                availability_options.push(AvailabilityOption {
                    label: availability.replacen('-', " ", 1),
                    value: availability.clone(),
                });
            }
        }
    }

    let salary_distribution = SALARY_BUCKETS
        .iter()
        .zip(salary_counts)
        .map(|((label, _), value)| CountEntry {
            name: label.to_string(),
            value,
        })
        .collect();

    PoolSummary {
        total_candidates: candidates.len(),
        unique_locations: locations.len(),
        role_distribution: roles.top(TOP_ROLES),
        location_distribution: locations.entries(),
        salary_distribution,
        top_skills: skills.top(TOP_SKILLS),
        availability_options,
    }
}

fn salary_bucket(salary: u64) -> usize {
    SALARY_BUCKETS
        .iter()
        .position(|(_, upper)| upper.map_or(true, |upper| salary <= upper))
        .unwrap_or(SALARY_BUCKETS.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkExperience;
    use std::collections::BTreeMap;

    fn create_candidate(id: usize, location: &str, salary: &str, skills: &[&str]) -> Candidate {
        let mut salaries = BTreeMap::new();
        salaries.insert("full-time".to_string(), salary.to_string());
        Candidate {
            location: Some(location.to_string()),
            annual_salary_expectation: Some(salaries),
            skills: Some(skills.iter().map(|s| s.to_string()).collect()),
            work_experiences: Some(vec![WorkExperience {
                company: "Acme".to_string(),
                role_name: if id % 2 == 0 { "Engineer" } else { "Designer" }.to_string(),
                years: None,
            }]),
            work_availability: Some(vec!["full-time".to_string(), "part-time".to_string()]),
            ..Candidate::new(format!("User {}", id), format!("user{}@example.com", id))
        }
    }

    #[test]
    fn test_summary_counts() {
        let candidates = vec![
            create_candidate(0, "Remote", "$45,000", &["Rust", "Go"]),
            create_candidate(1, "Berlin", "$100,000", &["Rust"]),
            create_candidate(2, "Remote", "$150,001", &["Python", "Rust"]),
        ];

        let summary = summarize(&candidates);

        assert_eq!(summary.total_candidates, 3);
        assert_eq!(summary.unique_locations, 2);
        assert_eq!(summary.location_distribution[0], CountEntry { name: "Remote".into(), value: 2 });
        assert_eq!(summary.role_distribution[0], CountEntry { name: "Engineer".into(), value: 2 });
        assert_eq!(summary.top_skills[0], CountEntry { name: "Rust".into(), value: 3 });

        let salary: Vec<usize> = summary.salary_distribution.iter().map(|e| e.value).collect();
        assert_eq!(salary, vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_availability_options_dedup() {
        let candidates = vec![
            create_candidate(0, "Remote", "$1", &[]),
            create_candidate(1, "Remote", "$1", &[]),
        ];

        let summary = summarize(&candidates);

        assert_eq!(
            summary.availability_options,
            vec![
                AvailabilityOption { label: "full time".into(), value: "full-time".into() },
                AvailabilityOption { label: "part time".into(), value: "part-time".into() },
            ]
        );
    }

    #[test]
    fn test_top_skills_ties_keep_first_seen() {
        let candidates = vec![create_candidate(0, "Remote", "$1", &["a", "b", "c", "d", "e", "f"])];

        let names: Vec<String> = summarize(&candidates).top_skills.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_sparse_candidates() {
        let summary = summarize(&[Candidate::new("Empty", "empty@example.com")]);

        assert_eq!(summary.total_candidates, 1);
        assert_eq!(summary.unique_locations, 0);
        assert!(summary.role_distribution.is_empty());
        assert_eq!(summary.salary_distribution.len(), 4);
        assert!(summary.salary_distribution.iter().all(|e| e.value == 0));
    }

    #[test]
    fn test_salary_bucket_edges() {
        assert_eq!(salary_bucket(0), 0);
        assert_eq!(salary_bucket(50_000), 0);
        assert_eq!(salary_bucket(50_001), 1);
        assert_eq!(salary_bucket(150_000), 2);
        assert_eq!(salary_bucket(u64::MAX), 3);
    }
}
