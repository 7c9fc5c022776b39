// Shared prompt fragments and prompt-building utilities.
// Each feature that needs generation defines its own prompts.rs alongside it.

/// Appended to every prompt: the answer is shown as plain text, not rendered markdown.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond in plain text. Do not use markdown emphasis such as * or **, \
    do not use headings, and do not wrap the answer in code fences. \
    Use a simple hyphen at the start of each list item.";

/// Joins a skill list the way the templates expect it.
pub fn render_skills(skills: &[String]) -> String {
    skills.join(", ")
}

/// Fills `{name}` placeholders in a template.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = fill(
            "{role} needs {skills}; a good {role} knows it",
            &[("role", "SRE"), ("skills", "Linux")],
        );
        assert_eq!(out, "SRE needs Linux; a good SRE knows it");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{a} {b}", &[("a", "x")]), "x {b}");
    }

    #[test]
    fn test_render_skills() {
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        assert_eq!(render_skills(&skills), "Rust, SQL");
    }
}
