use serde::Serialize;

use crate::layout::style::Gap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
    Certifications,
    Generic,
}

impl SectionKind {
    /// Maps a raw-text header line to a kind by keyword.
    pub fn from_header_text(header: &str) -> Self {
        let upper = header.to_uppercase();
        let has = |needle: &str| upper.contains(needle);

        if has("SUMMARY") || has("OBJECTIVE") || has("PROFILE") {
            SectionKind::Summary
        } else if has("EXPERIENCE") || has("EMPLOYMENT") {
            SectionKind::Experience
        } else if has("PROJECT") {
            SectionKind::Projects
        } else if has("EDUCATION") {
            SectionKind::Education
        } else if has("SKILL") {
            SectionKind::Skills
        } else if has("CERTIFICATION") || has("LICENSE") {
            SectionKind::Certifications
        } else {
            SectionKind::Generic
        }
    }

    /// Sections made of entries (a bold heading, detail lines, bullets).
    pub fn has_entries(&self) -> bool {
        matches!(
            self,
            SectionKind::Experience | SectionKind::Projects | SectionKind::Education
        )
    }
}

/// How a body line is typeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Candidate name, centered.
    Title,
    /// Contact line, centered under the title.
    Subtitle,
    Text,
    /// Bullet item; the text carries no marker of its own.
    Bullet,
    /// Bold first line of an entry (company, institution, project name).
    EntryHeading,
    /// Regular line directly beneath an entry heading (title + dates, degree + dates).
    EntryDetail,
    /// Project URL.
    Link,
    /// Vertical whitespace.
    Spacer(Gap),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn spacer(gap: Gap) -> Self {
        Self::new(LineKind::Spacer(gap), "")
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self.kind, LineKind::Spacer(_))
    }
}

/// A classified block of document content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Rendered upper-cased above a rule. `None` for the header block and for raw text
    /// that precedes the first section header.
    pub header_text: Option<String>,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(kind: SectionKind, header_text: Option<&str>) -> Self {
        Self {
            kind,
            header_text: header_text.map(str::to_string),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(Line::new(kind, text));
    }

    pub fn push_gap(&mut self, gap: Gap) {
        self.lines.push(Line::spacer(gap));
    }

    /// Drops gaps before the first and after the last content line.
    pub fn trim_spacers(&mut self) {
        while self.lines.last().is_some_and(Line::is_spacer) {
            self.lines.pop();
        }
        let leading = self.lines.iter().take_while(|l| l.is_spacer()).count();
        self.lines.drain(..leading);
    }

    /// Lines that put ink on the page.
    pub fn content_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| !l.is_spacer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_header_text() {
        assert_eq!(SectionKind::from_header_text("SUMMARY"), SectionKind::Summary);
        assert_eq!(
            SectionKind::from_header_text("PROFESSIONAL EXPERIENCE"),
            SectionKind::Experience
        );
        assert_eq!(SectionKind::from_header_text("PROJECTS"), SectionKind::Projects);
        assert_eq!(SectionKind::from_header_text("EDUCATION"), SectionKind::Education);
        assert_eq!(
            SectionKind::from_header_text("TECHNICAL SKILLS"),
            SectionKind::Skills
        );
        assert_eq!(
            SectionKind::from_header_text("CERTIFICATIONS"),
            SectionKind::Certifications
        );
        assert_eq!(
            SectionKind::from_header_text("HOBBIES & INTERESTS"),
            SectionKind::Generic
        );
    }

    #[test]
    fn test_content_lines_skip_spacers() {
        let mut section = Section::new(SectionKind::Summary, Some("SUMMARY"));
        section.push(LineKind::Text, "One");
        section.push_gap(Gap::Paragraph);
        section.push(LineKind::Text, "Two");
        let texts: Vec<&str> = section.content_lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "Two"]);
    }

    #[test]
    fn test_trim_spacers_keeps_inner_gaps() {
        let mut section = Section::new(SectionKind::Summary, Some("SUMMARY"));
        section.push_gap(Gap::Paragraph);
        section.push(LineKind::Text, "One");
        section.push_gap(Gap::Paragraph);
        section.push(LineKind::Text, "Two");
        section.push_gap(Gap::Paragraph);
        section.push_gap(Gap::Entry);
        section.trim_spacers();
        assert_eq!(
            section.lines,
            vec![
                Line::new(LineKind::Text, "One"),
                Line::spacer(Gap::Paragraph),
                Line::new(LineKind::Text, "Two"),
            ]
        );
    }
}
