//! Input normalizer: turns either payload variant into an ordered list of sections.
//!
//! # Raw text
//! Line 0 is the name, line 1 the contact line. From line 2 on, a line that passes
//! `is_section_header` opens a new section; other non-empty lines belong to the open
//! section; blank lines inside a section become paragraph gaps.
//!
//! # Structured fields
//! Fixed order: Header, Summary, Experience, Projects, Education, Skills,
//! Certifications. Absent or empty fields produce no section.

use crate::document::payload::{
    CertificationEntry, EducationEntry, PersonalInfo, ProjectEntry, RawContent, ResumePayload,
    Skills, StructuredContent, WorkExperienceEntry,
};
use crate::document::section::{LineKind, Section, SectionKind};
use crate::layout::style::Gap;

const BULLET_MARKERS: [char; 3] = ['-', '\u{2022}', '*'];

pub fn normalize(payload: &ResumePayload) -> Vec<Section> {
    match payload {
        ResumePayload::Raw(raw) => sections_from_raw(raw),
        ResumePayload::Structured(structured) => sections_from_structured(structured),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line predicates
// ────────────────────────────────────────────────────────────────────────────

/// A raw line is a section header iff, trimmed, it is non-empty, equals its own
/// upper-cased form and contains no lowercase letter.
pub fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed == trimmed.to_uppercase()
        && !trimmed.chars().any(char::is_lowercase)
}

/// Returns the text of a bullet line without its marker, or `None` when the line is
/// not a bullet. `-` and `•` mark a bullet on their own; `*` only when followed by
/// whitespace. Stacked markers (`- • text`) are all removed.
pub fn strip_bullet_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let is_bullet = match first {
        '-' | '\u{2022}' => true,
        '*' => chars.next().is_some_and(char::is_whitespace),
        _ => false,
    };
    if !is_bullet {
        return None;
    }
    Some(trimmed.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace()))
}

/// Removes markdown emphasis (`**x**`, `*x*`) and a leading `#`..`######` heading
/// marker from generated text.
pub fn strip_markdown(line: &str) -> String {
    let without_emphasis = strip_delimited(&strip_delimited(line, "**"), "*");
    strip_heading_marker(&without_emphasis).to_string()
}

fn strip_delimited(line: &str, delim: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find(delim) {
        let after_open = &rest[open + delim.len()..];
        match after_open.find(delim) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str(&after_open[..close]);
                rest = &after_open[close + delim.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

fn strip_heading_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) {
        let rest = &trimmed[hashes..];
        if rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }
    line
}

// ────────────────────────────────────────────────────────────────────────────
// Raw text
// ────────────────────────────────────────────────────────────────────────────

fn sections_from_raw(raw: &RawContent) -> Vec<Section> {
    let lines: Vec<&str> = raw.content.lines().collect();
    let mut sections = Vec::new();

    let name = lines
        .first()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .or_else(|| raw.role.clone())
        .unwrap_or_else(|| "Resume".to_string());
    let contact = lines.get(1).map(|l| l.trim()).filter(|l| !l.is_empty());

    let mut header = Section::new(SectionKind::Header, None);
    header.push(LineKind::Title, name);
    if let Some(contact) = contact {
        header.push(LineKind::Subtitle, contact);
    }
    header.push_gap(Gap::HeaderBlock);
    sections.push(header);

    let mut builder = RawSectionBuilder::default();
    for line in lines.iter().skip(2) {
        builder.feed(line);
    }
    sections.extend(builder.finish());
    sections
}

/// Incremental classifier for raw body lines.
#[derive(Default)]
struct RawSectionBuilder {
    sections: Vec<Section>,
    open: Option<Section>,
    /// The next non-bullet line in an entry section starts a new entry.
    expect_entry_heading: bool,
}

impl RawSectionBuilder {
    /// Bullet markers are recognized on the line as written; markdown cleanup only
    /// touches the text after them, so a `* ` marker never pairs with emphasis.
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(item) = strip_bullet_marker(trimmed) {
            let item = strip_markdown(item);
            let section = self.open_or_generic();
            if !item.trim().is_empty() {
                section.push(LineKind::Bullet, item.trim());
            }
            self.expect_entry_heading = true;
            return;
        }

        let cleaned = strip_markdown(trimmed);
        let cleaned = cleaned.trim();

        if is_section_header(cleaned) {
            self.close();
            self.open = Some(Section::new(
                SectionKind::from_header_text(cleaned),
                Some(cleaned),
            ));
            self.expect_entry_heading = true;
            return;
        }

        if cleaned.is_empty() {
            // Blank lines only matter once a section has content.
            if let Some(section) = self.open.as_mut() {
                if section.content_lines().next().is_some() && !ends_with_spacer(section) {
                    section.push_gap(Gap::Paragraph);
                }
                self.expect_entry_heading = true;
            }
            return;
        }

        let expect_heading = self.expect_entry_heading;
        let section = self.open_or_generic();
        if section.kind.has_entries() {
            let kind = if expect_heading {
                LineKind::EntryHeading
            } else {
                LineKind::EntryDetail
            };
            section.push(kind, cleaned);
        } else {
            section.push(LineKind::Text, cleaned);
        }
        self.expect_entry_heading = false;
    }

    fn open_or_generic(&mut self) -> &mut Section {
        self.open
            .get_or_insert_with(|| Section::new(SectionKind::Generic, None))
    }

    fn close(&mut self) {
        if let Some(mut section) = self.open.take() {
            section.trim_spacers();
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.close();
        self.sections
    }
}

fn ends_with_spacer(section: &Section) -> bool {
    section.lines.last().is_some_and(|l| l.is_spacer())
}

// ────────────────────────────────────────────────────────────────────────────
// Structured fields
// ────────────────────────────────────────────────────────────────────────────

fn sections_from_structured(content: &StructuredContent) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(header) = content.personal_info.as_ref().and_then(header_section) {
        sections.push(header);
    }
    if let Some(summary) = &content.summary {
        let mut section = Section::new(SectionKind::Summary, Some("SUMMARY"));
        push_paragraphs(&mut section, summary);
        sections.push(section);
    }
    if !content.work_experience.is_empty() {
        sections.push(entry_section(
            SectionKind::Experience,
            "EXPERIENCE",
            &content.work_experience,
            push_work_experience,
        ));
    }
    if !content.projects.is_empty() {
        sections.push(entry_section(
            SectionKind::Projects,
            "PROJECTS",
            &content.projects,
            push_project,
        ));
    }
    if !content.education.is_empty() {
        sections.push(entry_section(
            SectionKind::Education,
            "EDUCATION",
            &content.education,
            push_education,
        ));
    }
    if let Some(skills) = &content.skills {
        sections.push(skills_section(skills));
    }
    if !content.certifications.is_empty() {
        sections.push(certifications_section(&content.certifications));
    }

    for section in sections.iter_mut().filter(|s| s.kind != SectionKind::Header) {
        section.trim_spacers();
    }
    sections.retain(|s| s.content_lines().next().is_some());
    sections
}

/// Joins the present parts with `sep`, so an omitted part never leaves a separator.
fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, sep: &str) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(sep)
}

/// `"<start> - <end>"`, with a missing end rendered as "Present".
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (Some(start), end) => Some(format!("{start} - {}", end.unwrap_or("Present"))),
        (None, Some(end)) => Some(end.to_string()),
        (None, None) => None,
    }
}

fn header_section(info: &PersonalInfo) -> Option<Section> {
    let name = info.name.as_deref()?;
    let mut section = Section::new(SectionKind::Header, None);
    section.push(LineKind::Title, name);

    let contact = join_present(
        [
            info.location.as_deref(),
            info.phone.as_deref(),
            info.email.as_deref(),
        ],
        " | ",
    );
    if !contact.is_empty() {
        section.push(LineKind::Subtitle, contact);
    }
    section.push_gap(Gap::HeaderBlock);
    Some(section)
}

fn push_paragraphs(section: &mut Section, text: &str) {
    for paragraph in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match strip_bullet_marker(paragraph) {
            Some(item) if !item.is_empty() => section.push(LineKind::Bullet, item),
            Some(_) => {}
            None => section.push(LineKind::Text, paragraph),
        }
    }
}

fn entry_section<T>(
    kind: SectionKind,
    header: &str,
    entries: &[T],
    push_entry: fn(&mut Section, &T),
) -> Section {
    let mut section = Section::new(kind, Some(header));
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            section.push_gap(Gap::Entry);
        }
        push_entry(&mut section, entry);
    }
    section
}

fn push_work_experience(section: &mut Section, job: &WorkExperienceEntry) {
    let heading = join_present([job.company.as_deref(), job.location.as_deref()], ", ");
    if !heading.is_empty() {
        section.push(LineKind::EntryHeading, heading);
    }

    let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref());
    let detail = join_present([job.title.as_deref(), dates.as_deref()], ", ");
    if !detail.is_empty() {
        section.push(LineKind::EntryDetail, detail);
    }

    if let Some(description) = &job.description {
        section.push_gap(Gap::Paragraph);
        push_paragraphs(section, description);
    }

    let achievements: Vec<&str> = job
        .achievements
        .iter()
        .map(|a| strip_bullet_marker(a).unwrap_or(a).trim())
        .filter(|a| !a.is_empty())
        .collect();
    if !achievements.is_empty() {
        section.push_gap(Gap::Paragraph);
        for achievement in achievements {
            section.push(LineKind::Bullet, achievement);
        }
    }
}

fn push_project(section: &mut Section, project: &ProjectEntry) {
    if let Some(name) = &project.name {
        section.push(LineKind::EntryHeading, name.as_str());
    }
    if let Some(url) = &project.url {
        section.push(LineKind::Link, url.as_str());
    }
    if let Some(description) = &project.description {
        section.push_gap(Gap::Paragraph);
        push_paragraphs(section, description);
    }
}

fn push_education(section: &mut Section, edu: &EducationEntry) {
    if let Some(institution) = &edu.institution {
        section.push(LineKind::EntryHeading, institution.as_str());
    }

    let dates = date_range(edu.start_date.as_deref(), edu.end_date.as_deref());
    let detail = join_present([edu.degree.as_deref(), dates.as_deref()], ", ");
    if !detail.is_empty() {
        section.push(LineKind::EntryDetail, detail);
    }

    if let Some(description) = &edu.description {
        section.push_gap(Gap::Paragraph);
        push_paragraphs(section, description);
    }
}

fn skills_section(skills: &Skills) -> Section {
    let mut section = Section::new(SectionKind::Skills, Some("SKILLS"));
    match skills {
        Skills::Flat(list) => section.push(LineKind::Text, list.join(", ")),
        Skills::Categorized(categories) => {
            for (index, (category, list)) in categories.iter().enumerate() {
                if index > 0 {
                    section.push_gap(Gap::Paragraph);
                }
                section.push(LineKind::Text, format!("{category}: {}", list.join(", ")));
            }
        }
    }
    section
}

pub fn certification_line(cert: &CertificationEntry) -> String {
    join_present(
        [
            cert.name.as_deref(),
            cert.issuer.as_deref(),
            cert.date.as_deref(),
        ],
        ", ",
    )
}

fn certifications_section(certs: &[CertificationEntry]) -> Section {
    let mut section = Section::new(SectionKind::Certifications, Some("CERTIFICATIONS"));
    let lines: Vec<String> = certs
        .iter()
        .map(certification_line)
        .filter(|l| !l.is_empty())
        .collect();
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            section.push_gap(Gap::Paragraph);
        }
        section.push(LineKind::Text, line);
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::section::Line;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ResumePayload {
        ResumePayload::from_value(value).unwrap()
    }

    fn content(section: &Section) -> Vec<(LineKind, &str)> {
        section
            .content_lines()
            .map(|l| (l.kind, l.text.as_str()))
            .collect()
    }

    // ── is_section_header ───────────────────────────────────────────────────

    #[test]
    fn test_is_section_header_accepts_upper_case_lines() {
        for line in ["SUMMARY", "  EXPERIENCE  ", "HOBBIES & INTERESTS", "SKILLS:", "2020"] {
            assert!(is_section_header(line), "{line:?} should be a header");
        }
    }

    #[test]
    fn test_is_section_header_rejects_other_lines() {
        for line in ["", "   ", "Summary", "Acme Inc, NYC", "SKILLS and more", "- Shipped X"] {
            assert!(!is_section_header(line), "{line:?} should not be a header");
        }
    }

    #[test]
    fn test_is_section_header_non_ascii_lowercase() {
        assert!(!is_section_header("ÉCOLE polytechnique"));
        assert!(is_section_header("ÉDUCATION"));
    }

    // ── markers ─────────────────────────────────────────────────────────────

    #[test]
    fn test_strip_bullet_marker_variants() {
        assert_eq!(strip_bullet_marker("- Shipped X"), Some("Shipped X"));
        assert_eq!(strip_bullet_marker("\u{2022} Shipped X"), Some("Shipped X"));
        assert_eq!(strip_bullet_marker("-Shipped X"), Some("Shipped X"));
        assert_eq!(strip_bullet_marker("* Shipped X"), Some("Shipped X"));
        assert_eq!(strip_bullet_marker("- \u{2022} Shipped X"), Some("Shipped X"));
        assert_eq!(strip_bullet_marker("Shipped X"), None);
        assert_eq!(strip_bullet_marker("*emphasis*"), None);
    }

    #[test]
    fn test_strip_markdown() {
        assert_eq!(strip_markdown("**Acme Inc**, NYC"), "Acme Inc, NYC");
        assert_eq!(strip_markdown("Led *core* team"), "Led core team");
        assert_eq!(strip_markdown("## EXPERIENCE"), "EXPERIENCE");
        assert_eq!(strip_markdown("C# developer"), "C# developer");
        assert_eq!(strip_markdown("* bullet without close"), "* bullet without close");
    }

    // ── raw mode ────────────────────────────────────────────────────────────

    #[test]
    fn test_raw_scenario_sections() {
        let sections = normalize(&payload(json!({
            "content": "Jane Doe\nNYC, NY | jane@x.com\nSUMMARY\nExperienced engineer.\nEXPERIENCE\nAcme Inc, NYC\nEngineer, 2020 - Present\n- Shipped X"
        })));

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].kind, SectionKind::Header);
        assert_eq!(
            content(&sections[0]),
            vec![
                (LineKind::Title, "Jane Doe"),
                (LineKind::Subtitle, "NYC, NY | jane@x.com")
            ]
        );

        assert_eq!(sections[1].kind, SectionKind::Summary);
        assert_eq!(sections[1].header_text.as_deref(), Some("SUMMARY"));
        assert_eq!(
            content(&sections[1]),
            vec![(LineKind::Text, "Experienced engineer.")]
        );

        assert_eq!(sections[2].kind, SectionKind::Experience);
        assert_eq!(
            content(&sections[2]),
            vec![
                (LineKind::EntryHeading, "Acme Inc, NYC"),
                (LineKind::EntryDetail, "Engineer, 2020 - Present"),
                (LineKind::Bullet, "Shipped X"),
            ]
        );
    }

    #[test]
    fn test_raw_text_before_first_header_is_generic() {
        let sections = normalize(&payload(json!({
            "content": "Jane Doe\ncontact\nI build things.\nSKILLS\nRust"
        })));
        assert_eq!(sections[1].kind, SectionKind::Generic);
        assert!(sections[1].header_text.is_none());
        assert_eq!(content(&sections[1]), vec![(LineKind::Text, "I build things.")]);
        assert_eq!(sections[2].kind, SectionKind::Skills);
    }

    #[test]
    fn test_raw_blank_lines_are_spacers_inside_sections_only() {
        let sections = normalize(&payload(json!({
            "content": "Jane\ncontact\n\nSUMMARY\nOne.\n\nTwo."
        })));
        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections[1].lines,
            vec![
                Line::new(LineKind::Text, "One."),
                Line::spacer(Gap::Paragraph),
                Line::new(LineKind::Text, "Two."),
            ]
        );
    }

    #[test]
    fn test_raw_new_entry_after_bullets() {
        let sections = normalize(&payload(json!({
            "content": "Jane\ncontact\nEXPERIENCE\nAcme\nEng\n- a\nGlobex\nLead\n- b"
        })));
        let kinds: Vec<LineKind> = sections[1].content_lines().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::EntryHeading,
                LineKind::EntryDetail,
                LineKind::Bullet,
                LineKind::EntryHeading,
                LineKind::EntryDetail,
                LineKind::Bullet,
            ]
        );
    }

    #[test]
    fn test_raw_markdown_is_cleaned_before_classification() {
        let sections = normalize(&payload(json!({
            "content": "Jane\ncontact\n## SUMMARY\n**Experienced** engineer."
        })));
        assert_eq!(sections[1].header_text.as_deref(), Some("SUMMARY"));
        assert_eq!(
            content(&sections[1]),
            vec![(LineKind::Text, "Experienced engineer.")]
        );
    }

    #[test]
    fn test_raw_star_bullet_with_emphasis() {
        let sections = normalize(&payload(json!({
            "content": "Jane\nc\nEXPERIENCE\nAcme\n* Led *core* team\n- **Cut** costs"
        })));
        assert_eq!(
            content(&sections[1]),
            vec![
                (LineKind::EntryHeading, "Acme"),
                (LineKind::Bullet, "Led core team"),
                (LineKind::Bullet, "Cut costs"),
            ]
        );
    }

    #[test]
    fn test_raw_upper_case_bullet_is_not_a_header() {
        let sections = normalize(&payload(json!({
            "content": "Jane\nc\nSKILLS\n- AWS\n- GCP"
        })));
        assert_eq!(sections.len(), 2);
        assert_eq!(
            content(&sections[1]),
            vec![(LineKind::Bullet, "AWS"), (LineKind::Bullet, "GCP")]
        );
    }

    #[test]
    fn test_raw_blank_lines_around_section_body_are_dropped() {
        let sections = normalize(&payload(json!({
            "content": "Jane\nc\nSUMMARY\n\nExperienced engineer.\n\n\nEXPERIENCE\nAcme"
        })));
        assert_eq!(
            sections[1].lines,
            vec![Line::new(LineKind::Text, "Experienced engineer.")]
        );
        assert_eq!(
            sections[2].lines,
            vec![Line::new(LineKind::EntryHeading, "Acme")]
        );
    }

    #[test]
    fn test_raw_blank_line_runs_collapse_to_one_gap() {
        let sections = normalize(&payload(json!({
            "content": "Jane\nc\nSUMMARY\nOne.\n\n\nTwo."
        })));
        assert_eq!(
            sections[1].lines,
            vec![
                Line::new(LineKind::Text, "One."),
                Line::spacer(Gap::Paragraph),
                Line::new(LineKind::Text, "Two."),
            ]
        );
    }

    #[test]
    fn test_structured_section_has_no_trailing_gap() {
        let sections = normalize(&payload(json!({
            "projects": [{ "name": "Forge", "description": "-" }]
        })));
        assert_eq!(
            sections[0].lines,
            vec![Line::new(LineKind::EntryHeading, "Forge")]
        );
    }

    #[test]
    fn test_raw_empty_name_falls_back_to_role() {
        let sections = normalize(&payload(json!({ "content": "", "role": "Engineer" })));
        assert_eq!(content(&sections[0]), vec![(LineKind::Title, "Engineer")]);

        let sections = normalize(&payload(json!({ "content": "" })));
        assert_eq!(content(&sections[0]), vec![(LineKind::Title, "Resume")]);
    }

    // ── structured mode ─────────────────────────────────────────────────────

    #[test]
    fn test_structured_fixed_order() {
        let sections = normalize(&payload(json!({
            "certifications": [{ "name": "CKA" }],
            "skills": ["Rust"],
            "education": [{ "institution": "MIT", "degree": "BS", "startDate": "2016" }],
            "projects": [{ "name": "Forge" }],
            "workExperience": [{ "company": "Acme", "title": "Eng", "startDate": "2020" }],
            "summary": "Engineer.",
            "personalInfo": { "name": "Jane Doe" },
        })));
        let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Header,
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Certifications,
            ]
        );
    }

    #[test]
    fn test_structured_empty_payload_has_no_sections() {
        assert!(normalize(&payload(json!({}))).is_empty());
    }

    #[test]
    fn test_structured_header_requires_name() {
        let sections = normalize(&payload(json!({
            "personalInfo": { "email": "jane@x.com" },
            "summary": "Engineer."
        })));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Summary);
    }

    #[test]
    fn test_contact_line_omits_absent_fields() {
        let sections = normalize(&payload(json!({
            "personalInfo": { "name": "Jane", "location": "NYC", "email": "jane@x.com" }
        })));
        assert_eq!(
            content(&sections[0]),
            vec![
                (LineKind::Title, "Jane"),
                (LineKind::Subtitle, "NYC | jane@x.com")
            ]
        );
    }

    #[test]
    fn test_missing_end_date_reads_present() {
        let sections = normalize(&payload(json!({
            "workExperience": [{ "company": "Acme", "title": "Eng", "startDate": "2020" }]
        })));
        assert_eq!(
            content(&sections[0]),
            vec![
                (LineKind::EntryHeading, "Acme"),
                (LineKind::EntryDetail, "Eng, 2020 - Present"),
            ]
        );
    }

    #[test]
    fn test_experience_entry_lines_and_gaps() {
        let sections = normalize(&payload(json!({
            "workExperience": [
                {
                    "company": "Acme", "location": "NYC", "title": "Eng",
                    "startDate": "2020", "endDate": "2022",
                    "description": "Platform team.",
                    "achievements": ["- Shipped X", "\u{2022} Cut costs 20%"]
                },
                { "company": "Globex", "title": "Lead", "startDate": "2022" }
            ]
        })));
        assert_eq!(
            sections[0].lines,
            vec![
                Line::new(LineKind::EntryHeading, "Acme, NYC"),
                Line::new(LineKind::EntryDetail, "Eng, 2020 - 2022"),
                Line::spacer(Gap::Paragraph),
                Line::new(LineKind::Text, "Platform team."),
                Line::spacer(Gap::Paragraph),
                Line::new(LineKind::Bullet, "Shipped X"),
                Line::new(LineKind::Bullet, "Cut costs 20%"),
                Line::spacer(Gap::Entry),
                Line::new(LineKind::EntryHeading, "Globex"),
                Line::new(LineKind::EntryDetail, "Lead, 2022 - Present"),
            ]
        );
    }

    #[test]
    fn test_education_and_projects() {
        let sections = normalize(&payload(json!({
            "projects": [{ "name": "Forge", "url": "https://forge.dev", "description": "CLI." }, { "name": "Kiln" }],
            "education": [{ "institution": "MIT", "degree": "BS CS", "startDate": "2016", "endDate": "2020" }],
        })));
        assert_eq!(
            content(&sections[0]),
            vec![
                (LineKind::EntryHeading, "Forge"),
                (LineKind::Link, "https://forge.dev"),
                (LineKind::Text, "CLI."),
                (LineKind::EntryHeading, "Kiln"),
            ]
        );
        assert_eq!(
            content(&sections[1]),
            vec![
                (LineKind::EntryHeading, "MIT"),
                (LineKind::EntryDetail, "BS CS, 2016 - 2020"),
            ]
        );
    }

    #[test]
    fn test_categorized_skills_one_line_per_category() {
        let sections = normalize(&payload(json!({
            "skills": { "Languages": ["Go", "Rust"], "Tools": ["Git"] }
        })));
        assert_eq!(
            sections[0].lines,
            vec![
                Line::new(LineKind::Text, "Languages: Go, Rust"),
                Line::spacer(Gap::Paragraph),
                Line::new(LineKind::Text, "Tools: Git"),
            ]
        );
    }

    #[test]
    fn test_flat_skills_single_line() {
        let sections = normalize(&payload(json!({ "skills": ["Go", "Rust", "Git"] })));
        assert_eq!(content(&sections[0]), vec![(LineKind::Text, "Go, Rust, Git")]);
    }

    #[test]
    fn test_certification_line_without_dangling_commas() {
        let full = CertificationEntry {
            name: Some("AWS Developer".into()),
            issuer: Some("Amazon".into()),
            date: Some("2022".into()),
        };
        assert_eq!(certification_line(&full), "AWS Developer, Amazon, 2022");

        let no_issuer = CertificationEntry {
            issuer: None,
            ..full.clone()
        };
        assert_eq!(certification_line(&no_issuer), "AWS Developer, 2022");

        let name_only = CertificationEntry {
            name: Some("CKA".into()),
            ..CertificationEntry::default()
        };
        assert_eq!(certification_line(&name_only), "CKA");
    }

    #[test]
    fn test_date_range() {
        assert_eq!(date_range(Some("2020"), None).as_deref(), Some("2020 - Present"));
        assert_eq!(date_range(Some("2020"), Some("2021")).as_deref(), Some("2020 - 2021"));
        assert_eq!(date_range(None, Some("2021")).as_deref(), Some("2021"));
        assert_eq!(date_range(None, None), None);
    }
}
