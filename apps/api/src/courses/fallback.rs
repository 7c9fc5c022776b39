//! Curated courses served when web search is unavailable or finds nothing usable.

use reqwest::Url;

use crate::models::course::Course;

struct CuratedCourse {
    title: &'static str,
    link: &'static str,
    snippet: &'static str,
    platform: &'static str,
    is_free: bool,
}

const SOFTWARE_ENGINEER: &[CuratedCourse] = &[
    CuratedCourse {
        title: "Full Stack Web Development",
        link: "https://www.freecodecamp.org/learn/",
        snippet: "Complete full-stack development curriculum with certifications",
        platform: "freeCodeCamp",
        is_free: true,
    },
    CuratedCourse {
        title: "Software Engineering Specialization",
        link: "https://www.coursera.org/search?query=software%20engineering",
        snippet: "Design, testing and delivery practices used by professional teams",
        platform: "Coursera",
        is_free: false,
    },
];

const DATA_SCIENTIST: &[CuratedCourse] = &[
    CuratedCourse {
        title: "Data Science Fundamentals",
        link: "https://www.kaggle.com/learn",
        snippet: "Free micro-courses in data science and machine learning",
        platform: "Kaggle Learn",
        is_free: true,
    },
    CuratedCourse {
        title: "IBM Data Science Professional Certificate",
        link: "https://www.coursera.org/professional-certificates/ibm-data-science",
        snippet: "Python, SQL, data visualisation and machine learning in one track",
        platform: "Coursera",
        is_free: false,
    },
];

const PRODUCT_MANAGER: &[CuratedCourse] = &[
    CuratedCourse {
        title: "Product Management Fundamentals",
        link: "https://www.coursera.org/search?query=product%20management",
        snippet: "Learn product management principles and practices",
        platform: "Coursera",
        is_free: false,
    },
    CuratedCourse {
        title: "Product Management Courses",
        link: "https://www.edx.org/search?q=product%20management",
        snippet: "Roadmapping, discovery and stakeholder management",
        platform: "edX",
        is_free: false,
    },
];

/// Keyed by a lowercase fragment of the job title.
const CURATED: &[(&str, &[CuratedCourse])] = &[
    ("software engineer", SOFTWARE_ENGINEER),
    ("data scientist", DATA_SCIENTIST),
    ("product manager", PRODUCT_MANAGER),
];

impl CuratedCourse {
    fn to_course(&self) -> Course {
        Course::new(
            self.title,
            self.link,
            self.snippet,
            self.platform,
            self.is_free,
        )
    }
}

/// Curated list for known roles, otherwise a generic two-item list for `query`.
pub fn fallback_courses(query: &str) -> Vec<Course> {
    let lowered = query.to_lowercase();
    let curated: Vec<Course> = CURATED
        .iter()
        .filter(|(key, _)| lowered.contains(key))
        .flat_map(|(_, courses)| courses.iter().map(CuratedCourse::to_course))
        .collect();

    if !curated.is_empty() {
        return curated;
    }
    generic_courses(query)
}

fn generic_courses(query: &str) -> Vec<Course> {
    vec![
        Course::new(
            format!("Introduction to {query}"),
            search_link("https://www.coursera.org/search", "query", query),
            format!("Learn the fundamentals of {query} with this comprehensive course"),
            "Coursera",
            false,
        ),
        Course::new(
            format!("Advanced {query} Masterclass"),
            search_link("https://www.udemy.com/courses/search/", "q", query),
            format!("Take your {query} skills to the next level with expert instruction"),
            "Udemy",
            false,
        ),
    ]
}

fn search_link(base: &str, param: &str, query: &str) -> String {
    Url::parse_with_params(base, &[(param, query)])
        .map(String::from)
        .unwrap_or_else(|_| base.to_string())
}
