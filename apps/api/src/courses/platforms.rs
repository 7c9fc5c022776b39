//! Allow-list of learning platforms a course link must belong to.

use reqwest::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub label: &'static str,
    domain: &'static str,
    /// Only links under this path count, e.g. LinkedIn's course catalogue.
    path_prefix: Option<&'static str>,
    pub free_by_default: bool,
}

const fn platform(
    label: &'static str,
    domain: &'static str,
    path_prefix: Option<&'static str>,
    free_by_default: bool,
) -> Platform {
    Platform {
        label,
        domain,
        path_prefix,
        free_by_default,
    }
}

pub const LEARNING_PLATFORMS: &[Platform] = &[
    platform("Coursera", "coursera.org", None, false),
    platform("Udemy", "udemy.com", None, false),
    platform("edX", "edx.org", None, false),
    platform("Khan Academy", "khanacademy.org", None, true),
    platform("freeCodeCamp", "freecodecamp.org", None, true),
    platform("Kaggle Learn", "kaggle.com", Some("/learn"), true),
    platform("Codecademy", "codecademy.com", None, false),
    platform("W3Schools", "w3schools.com", None, true),
    platform("Pluralsight", "pluralsight.com", None, false),
    platform("LinkedIn Learning", "linkedin.com", Some("/learning"), false),
];

impl Platform {
    fn matches(&self, host: &str, path: &str) -> bool {
        let host_ok = host == self.domain
            || host
                .strip_suffix(self.domain)
                .is_some_and(|rest| rest.ends_with('.'));
        host_ok && self.path_prefix.map_or(true, |p| path.starts_with(p))
    }
}

/// Returns the platform a link belongs to, or `None` if its host is not on
/// the allow-list. Lookalike hosts such as `coursera.org.evil.com` do not match.
pub fn platform_for_link(link: &str) -> Option<&'static Platform> {
    let url = Url::parse(link).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();
    let path = url.path();
    LEARNING_PLATFORMS.iter().find(|p| p.matches(&host, path))
}

/// Free when the platform is free, or the listing itself advertises it.
pub fn is_free(platform: &Platform, title: &str, snippet: &str) -> bool {
    platform.free_by_default
        || title.to_lowercase().contains("free")
        || snippet.to_lowercase().contains("free")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(link: &str) -> Option<&'static str> {
        platform_for_link(link).map(|p| p.label)
    }

    #[test]
    fn test_known_platforms_and_subdomains() {
        assert_eq!(label("https://www.coursera.org/learn/machine-learning"), Some("Coursera"));
        assert_eq!(label("https://udemy.com/course/rust/"), Some("Udemy"));
        assert_eq!(label("https://WWW.EDX.ORG/course/cs50"), Some("edX"));
        assert_eq!(label("https://www.freecodecamp.org/learn/"), Some("freeCodeCamp"));
    }

    #[test]
    fn test_lookalike_hosts_rejected() {
        assert_eq!(label("https://coursera.org.example.com/learn/x"), None);
        assert_eq!(label("https://notudemy.com/course/x"), None);
        assert_eq!(label("https://medium.com/@someone/learn-rust"), None);
    }

    #[test]
    fn test_path_prefix_platforms() {
        assert_eq!(label("https://www.kaggle.com/learn/python"), Some("Kaggle Learn"));
        assert_eq!(label("https://www.kaggle.com/competitions/titanic"), None);
        assert_eq!(
            label("https://www.linkedin.com/learning/learning-rust"),
            Some("LinkedIn Learning")
        );
        assert_eq!(label("https://www.linkedin.com/jobs/view/1"), None);
    }

    #[test]
    fn test_non_http_and_garbage_links() {
        assert_eq!(label("ftp://coursera.org/file"), None);
        assert_eq!(label("not a url"), None);
        assert_eq!(label(""), None);
    }

    #[test]
    fn test_is_free() {
        let khan = platform_for_link("https://www.khanacademy.org/computing").unwrap();
        let udemy = platform_for_link("https://www.udemy.com/course/x/").unwrap();
        assert!(is_free(khan, "Intro", ""));
        assert!(!is_free(udemy, "Rust Masterclass", "Learn Rust"));
        assert!(is_free(udemy, "Rust Basics", "A FREE tutorial"));
    }
}
