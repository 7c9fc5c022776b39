// Career advice prompt templates: job matching and portfolio project ideas.

pub const JOB_MATCHING_PROMPT: &str = "\
Given these skills: {skills}, recommend 5 job roles that best match them.

For each role, provide:
1. Job Title
2. Brief Description
3. Key Required Skills
4. Potential Career Path

Format the response as a clear, numbered list.";

/// Used when the client also sends the target role and the resume excerpt
/// returned by `/analyze_resume/`.
pub const JOB_MATCHING_WITH_RESUME_PROMPT: &str = "\
A candidate is targeting the role of {job_title}. Their resume excerpt is below, \
and they have identified these skills to work on: {skills}.

Recommend 5 job roles that fit the candidate's current experience and move them \
towards {job_title}. For each role, provide:
1. Job Title
2. Brief Description
3. Key Required Skills
4. Why It Fits This Candidate
5. Potential Career Path

Format the response as a clear, numbered list.

Resume excerpt:
{resume_text}";

pub const PROJECT_IDEAS_PROMPT: &str = "\
Given these skills: {skills}, suggest 5 real-world projects that would help build \
a strong portfolio. For each project, provide:
1. Catchy Project Title
2. Project Description
3. Key Skills Demonstrated
4. Potential Real-World Impact
5. Difficulty Level (Beginner/Intermediate/Advanced)

Format the response as a clear, numbered list.";

pub const JOB_MATCHING_FALLBACK: &str = "\
1. Software Developer
Builds and maintains applications across the stack.
Key skills: programming fundamentals, version control, testing.
Career path: Junior Developer to Senior Developer to Tech Lead.

2. Data Analyst
Turns raw data into reports and business insights.
Key skills: SQL, spreadsheets, visualisation, statistics.
Career path: Data Analyst to Senior Analyst to Analytics Manager.

3. QA Engineer
Designs and automates tests to keep releases reliable.
Key skills: test automation, scripting, attention to detail.
Career path: QA Engineer to SDET to QA Lead.

4. DevOps Engineer
Automates builds, deployments and infrastructure.
Key skills: Linux, CI/CD, Docker, cloud platforms.
Career path: DevOps Engineer to Site Reliability Engineer to Platform Lead.

5. Technical Support Engineer
Diagnoses and resolves customer-facing technical issues.
Key skills: troubleshooting, communication, networking basics.
Career path: Support Engineer to Solutions Engineer to Support Manager.";

pub const PROJECT_IDEAS_FALLBACK: &str = "\
1. Personal Portfolio Website
Build a responsive site that showcases your work and writing.
Skills: HTML, CSS, JavaScript, deployment.
Impact: gives recruiters a single place to review your projects.
Difficulty: Beginner

2. Task Management API
Create a REST API with authentication, persistence and tests.
Skills: backend development, databases, API design.
Impact: demonstrates production-style service design.
Difficulty: Intermediate

3. Data Dashboard
Collect a public dataset and publish interactive charts.
Skills: data cleaning, SQL, visualisation.
Impact: shows you can turn data into decisions.
Difficulty: Intermediate

4. Chat Application
Build real-time messaging with websockets.
Skills: networking, concurrency, frontend integration.
Impact: proves you can handle stateful, real-time systems.
Difficulty: Advanced

5. CI/CD Pipeline for an Open-Source Project
Automate linting, testing and releases for an existing repository.
Skills: Git, CI tooling, scripting.
Impact: a visible contribution that other developers benefit from.
Difficulty: Intermediate";
