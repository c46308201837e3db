use serde::{Deserialize, Serialize};

/// One job posting scraped from the careers search results.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JobListing {
    pub title: String,
    pub link: String,
    pub location: String,
}

/// Keeps the listings whose location contains `location`, case-insensitive.
/// Order is preserved; an empty filter keeps everything.
pub fn filter_by_location(jobs: &[JobListing], location: &str) -> Vec<JobListing> {
    let needle = location.to_lowercase();
    jobs.iter()
        .filter(|job| job.location.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, location: &str) -> JobListing {
        JobListing {
            title: title.to_string(),
            link: format!("https://example.com/{title}"),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let jobs = vec![job("A", "Remote, USA"), job("B", "New York")];
        let filtered = filter_by_location(&jobs, "remote");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "A");
    }

    #[test]
    fn test_filter_preserves_order() {
        let jobs = vec![
            job("A", "Dublin, Ireland"),
            job("B", "London, UK"),
            job("C", "Dublin, Ireland"),
        ];
        let filtered = filter_by_location(&jobs, "Dublin");
        let titles: Vec<&str> = filtered.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let jobs = vec![job("A", "Remote"), job("B", "New York")];
        assert_eq!(filter_by_location(&jobs, ""), jobs);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let jobs = vec![job("A", "Remote"), job("B", "New York")];
        assert!(filter_by_location(&jobs, "Singapore").is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let jobs = vec![job("A", "Remote"), job("B", "New York")];
        let before = jobs.clone();
        let _ = filter_by_location(&jobs, "remote");
        assert_eq!(jobs, before);
    }
}
