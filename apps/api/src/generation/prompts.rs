// Prompt constants for résumé and cover-letter generation.
// Templates use `{profile}` and `{job_description}` placeholders, filled by `render`.

/// Shared system prompt: plain text only, in the layout the PDF normalizer reads.
pub const GENERATION_SYSTEM: &str =
    "You are an expert career writer who produces ATS-friendly application documents. \
    Respond with the document text only. \
    Do NOT use markdown: no asterisks, no pound signs, no code fences. \
    Do NOT add commentary before or after the document.";

/// Résumé template. Section headers must be ALL CAPS on their own line; the renderer
/// uses that to split sections.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a professional, ATS-friendly resume from the profile and job description below.

Follow this layout exactly:

[Full Name]
[Location] | [Phone] | [Email]

SUMMARY
[2-3 sentences on the qualifications that match the job]

EXPERIENCE
[Company Name], [Location]
[Job Title], [Start] - [End or Present]
- [Achievement with a measurable result]
- [Achievement with a measurable result]

PROJECTS
[Project Name]
- [What it does, its impact and the technologies used]

EDUCATION
[Institution Name]
[Degree], [Year], CGPA: [CGPA]

SKILLS
[Skill Category]: [relevant skills, comma separated]

CERTIFICATIONS
[Certification Name], [Issuing Organization], [Year]

LANGUAGES
[Languages with proficiency levels]

Profile:
{profile}

Job description:
{job_description}

Rules:
1. Lead with achievements and quantify them (percentages, time saved, cost reduced).
2. Start bullets with strong action verbs.
3. Work the job description's keywords in naturally.
4. Put the most relevant experience and projects first.
5. Keep skill categories as they appear in the profile; list only relevant skills.
6. Keep CGPA on the same line as degree and year.
7. Omit any section the profile has no information for.
8. Section headers are ALL CAPS on their own line; no other line is all caps."#;

/// Cover-letter template.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a personalized cover letter from the profile and job description below.

Follow this layout:

[Full Name]
[Location] | [Phone] | [Email]

[Date]

Dear Hiring Manager,

[Opening: enthusiasm for the role and the company]

[Body: relevant experience and achievements]

[Body: how the candidate's skills meet the job requirements]

[Closing: renewed interest and a call to action]

Sincerely,
[Full Name]

Profile:
{profile}

Job description:
{job_description}

Rules:
1. Concise but compelling; one page at most.
2. Active voice, professional tone matched to the company.
3. Use specific examples that address the key requirements.
4. Mention language skills or interests only when they fit the company culture."#;

/// Fills a template's placeholders.
pub fn render(template: &str, profile: &str, job_description: &str) -> String {
    template
        .replace("{profile}", profile)
        .replace("{job_description}", job_description.trim())
}
