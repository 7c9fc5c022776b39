// Resume analysis prompt templates.

pub const SKILL_GAP_PROMPT: &str = "\
You are an experienced technical recruiter. Given the resume text below, extract the \
candidate's key skills and compare them to the skills typically required for a {job_title}.

Do not include explanations or an introduction. List only the important skills that are \
missing from the resume, one per line, each as a short skill name.

Resume:
{resume_text}";

/// Served when the model is unavailable. Generic on purpose: it does not depend on the input.
pub const SKILL_GAP_FALLBACK: &str = "\
- Cloud platforms (AWS, Azure or GCP)
- Containerization with Docker and Kubernetes
- CI/CD pipelines and automated testing
- System design and scalable architecture
- Data analysis and SQL
- Communication and stakeholder management";
