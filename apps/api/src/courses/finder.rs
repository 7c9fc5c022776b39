//! Course discovery: fan a few queries out to web search, keep results from
//! known learning platforms, and fall back to curated courses when that
//! yields nothing.

use std::collections::HashSet;

use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::courses::fallback::fallback_courses;
use crate::courses::platforms::{is_free, platform_for_link};
use crate::google::custom_search::{SearchItem, WebSearch};
use crate::models::course::Course;

pub const MAX_COURSES: usize = 8;

const QUERY_TEMPLATES: &[&str] = &[
    "{q} free course",
    "{q} online course certification",
    "{q} tutorial for beginners",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSource {
    Search,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct CourseResults {
    pub courses: Vec<Course>,
    pub source: CourseSource,
}

pub fn build_queries(topic: &str) -> Vec<String> {
    QUERY_TEMPLATES
        .iter()
        .map(|t| t.replace("{q}", topic))
        .collect()
}

/// Keeps allow-listed results, tags them, removes duplicate links, puts free
/// courses first (stable), and caps the list at `MAX_COURSES`.
pub fn select_courses(items: impl IntoIterator<Item = SearchItem>) -> Vec<Course> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut courses: Vec<Course> = items
        .into_iter()
        .filter_map(|item| {
            let platform = platform_for_link(&item.link)?;
            let free = is_free(platform, &item.title, &item.snippet);
            let title = if item.title.trim().is_empty() {
                "Untitled Course".to_string()
            } else {
                item.title.trim().to_string()
            };
            Some(Course::new(
                title,
                item.link,
                item.snippet.trim(),
                platform.label,
                free,
            ))
        })
        .filter(|c| seen.insert(normalize_link(&c.link)))
        .collect();

    courses.sort_by_key(|c| !c.is_free);
    courses.truncate(MAX_COURSES);
    courses
}

/// Treats `…/course/x` and `…/course/x/` as the same link.
fn normalize_link(link: &str) -> String {
    link.trim().trim_end_matches('/').to_lowercase()
}

pub async fn find_courses(topic: &str, search: &dyn WebSearch) -> CourseResults {
    if !search.is_configured() {
        info!(topic, "Web search not configured, serving curated courses");
        return fallback(topic);
    }

    let queries = build_queries(topic);
    let responses = join_all(queries.iter().map(|q| search.search(q))).await;

    let mut items = Vec::new();
    let mut failures = 0;
    for (query, response) in queries.iter().zip(responses) {
        match response {
            Ok(found) => items.extend(found),
            Err(e) => {
                failures += 1;
                warn!(query = %query, "Course search query failed: {e}");
            }
        }
    }

    let courses = select_courses(items);
    if courses.is_empty() {
        info!(
            topic,
            failed_queries = failures,
            "No usable course results, serving curated courses"
        );
        return fallback(topic);
    }

    info!(topic, results = courses.len(), "Course search complete");
    CourseResults {
        courses,
        source: CourseSource::Search,
    }
}

fn fallback(topic: &str) -> CourseResults {
    let mut courses = fallback_courses(topic);
    courses.sort_by_key(|c| !c.is_free);
    CourseResults {
        courses,
        source: CourseSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::custom_search::testing::{item, StubSearch};
    use crate::google::custom_search::CustomSearchClient;

    #[test]
    fn test_build_queries() {
        let queries = build_queries("rust");
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[0], "rust free course");
    }

    #[test]
    fn test_select_filters_dedupes_sorts_and_caps() {
        let mut items = vec![
            item("Rust on Udemy", "https://www.udemy.com/course/rust/", "Paid course"),
            item("Rust blog post", "https://blog.example.com/rust", "Not a platform"),
            item("Rust on Udemy again", "https://www.udemy.com/course/rust", "Same link"),
            item("Khan intro", "https://www.khanacademy.org/computing/rust", ""),
        ];
        for i in 0..10 {
            items.push(item(
                &format!("Coursera {i}"),
                &format!("https://www.coursera.org/learn/rust-{i}"),
                "",
            ));
        }

        let courses = select_courses(items);
        assert_eq!(courses.len(), MAX_COURSES);
        assert_eq!(courses[0].platform, "Khan Academy");
        assert!(courses[0].is_free);
        assert_eq!(courses[1].title, "Rust on Udemy");
        assert!(courses.iter().all(|c| c.platform != "blog"));

        let links: HashSet<&str> = courses.iter().map(|c| c.link.as_str()).collect();
        assert_eq!(links.len(), courses.len());
    }

    #[test]
    fn test_select_defaults_missing_title() {
        let courses = select_courses(vec![item("  ", "https://www.edx.org/course/x", "")]);
        assert_eq!(courses[0].title, "Untitled Course");
    }

    #[tokio::test]
    async fn test_find_courses_partial_failure_still_uses_results() {
        // Only the first query is stubbed; the other two fail.
        let search = StubSearch::default().with(
            "kotlin free course",
            vec![item(
                "Kotlin Basics",
                "https://www.codecademy.com/learn/learn-kotlin",
                "Free interactive course",
            )],
        );
        let results = find_courses("kotlin", &search).await;
        assert_eq!(results.source, CourseSource::Search);
        assert_eq!(results.courses.len(), 1);
        assert!(results.courses[0].is_free);
    }

    #[tokio::test]
    async fn test_find_courses_all_filtered_falls_back() {
        let off_platform = vec![item("Blog", "https://example.com/post", "")];
        let search = StubSearch::default()
            .with("data scientist free course", off_platform.clone())
            .with("data scientist online course certification", off_platform.clone())
            .with("data scientist tutorial for beginners", off_platform);
        let results = find_courses("data scientist", &search).await;
        assert_eq!(results.source, CourseSource::Fallback);
        assert_eq!(results.courses[0].platform, "Kaggle Learn");
    }

    #[tokio::test]
    async fn test_find_courses_unconfigured_search_falls_back() {
        let client =
            CustomSearchClient::new(None, None, "http://127.0.0.1:9".to_string()).unwrap();
        let results = find_courses("Welding", &client).await;
        assert_eq!(results.source, CourseSource::Fallback);
        assert_eq!(results.courses.len(), 2);
    }

    #[tokio::test]
    async fn test_find_courses_unreachable_search_falls_back() {
        let client = CustomSearchClient::new(
            Some("key".to_string()),
            Some("cx".to_string()),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        let results = find_courses("data scientist", &client).await;
        assert_eq!(results.source, CourseSource::Fallback);
        let platforms: Vec<&str> = results.courses.iter().map(|c| c.platform.as_str()).collect();
        assert_eq!(platforms, vec!["Kaggle Learn", "Coursera"]);
    }
}
