//! Input model for the layout engine and its defensive JSON reader.
//!
//! Payloads come from generated text or hand-edited forms, so every field is optional
//! in practice. Reading never fails on a missing or mistyped field: it is treated as
//! absent. The only hard error is a payload that is not an object at all.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object or resume text, got {0}")]
    NotAnObject(&'static str),

    #[error("`content` must be a string, got {0}")]
    ContentNotText(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Payload types
// ────────────────────────────────────────────────────────────────────────────

/// Which kind of document is being produced. Drives the filename prefix and the PDF
/// `Subject` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    #[default]
    Resume,
    CoverLetter,
}

impl DocumentType {
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::CoverLetter => "cover-letter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Resume => "Resume",
            DocumentType::CoverLetter => "Cover Letter",
        }
    }

    /// Accepts `resume`, `cover-letter`, `cover_letter` and `coverLetter`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "resume" => Some(DocumentType::Resume),
            "coverletter" => Some(DocumentType::CoverLetter),
            _ => None,
        }
    }
}

/// The engine's input. Raw text takes priority: a payload carrying `content` is raw
/// even if it also has structured fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResumePayload {
    Raw(RawContent),
    Structured(StructuredContent),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawContent {
    pub content: String,
    pub role: Option<String>,
    pub document_type: DocumentType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredContent {
    pub personal_info: Option<PersonalInfo>,
    pub summary: Option<String>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Option<Skills>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub role: Option<String>,
    pub document_type: DocumentType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkExperienceEntry {
    pub company: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CertificationEntry {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

/// Skills arrive either as a flat list or as `{ category: [skills] | "skills" }`.
/// The shape is decided here, once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Skills {
    Flat(Vec<String>),
    Categorized(Vec<(String, Vec<String>)>),
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        match self {
            Skills::Flat(list) => list.is_empty(),
            Skills::Categorized(categories) => categories.is_empty(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reading
// ────────────────────────────────────────────────────────────────────────────

impl ResumePayload {
    /// Parses a request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Builds a payload from arbitrary JSON.
    ///
    /// A bare string is raw content. An object with a `content` string is raw content.
    /// Any other object is structured. Everything else is `PayloadError`.
    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        let obj = match value {
            Value::String(content) => {
                return Ok(ResumePayload::Raw(RawContent {
                    content,
                    ..RawContent::default()
                }))
            }
            Value::Object(obj) => obj,
            other => return Err(PayloadError::NotAnObject(json_type(&other))),
        };

        let role = text_field(&obj, "role");
        let document_type = obj
            .get("documentType")
            .and_then(|v| v.as_str())
            .and_then(DocumentType::parse)
            .unwrap_or_default();

        match obj.get("content") {
            None | Some(Value::Null) => {}
            Some(Value::String(content)) => {
                return Ok(ResumePayload::Raw(RawContent {
                    content: content.clone(),
                    role,
                    document_type,
                }))
            }
            Some(other) => return Err(PayloadError::ContentNotText(json_type(other))),
        }

        Ok(ResumePayload::Structured(StructuredContent {
            personal_info: obj.get("personalInfo").and_then(read_personal_info),
            summary: text_field(&obj, "summary"),
            work_experience: read_entries(&obj, "workExperience", read_work_experience),
            education: read_entries(&obj, "education", read_education),
            skills: obj.get("skills").and_then(read_skills),
            projects: read_entries(&obj, "projects", read_project),
            certifications: read_entries(&obj, "certifications", read_certification),
            role,
            document_type,
        }))
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            ResumePayload::Raw(raw) => raw.role.as_deref(),
            ResumePayload::Structured(s) => s.role.as_deref(),
        }
    }

    pub fn document_type(&self) -> DocumentType {
        match self {
            ResumePayload::Raw(raw) => raw.document_type,
            ResumePayload::Structured(s) => s.document_type,
        }
    }

    /// The candidate's name, if the payload carries one.
    pub fn candidate_name(&self) -> Option<String> {
        match self {
            ResumePayload::Raw(raw) => raw
                .content
                .lines()
                .next()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
            ResumePayload::Structured(s) => {
                s.personal_info.as_ref().and_then(|p| p.name.clone())
            }
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            ResumePayload::Raw(_) => "raw",
            ResumePayload::Structured(_) => "structured",
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a scalar as trimmed text. Numbers and booleans are stringified; null, empty
/// and whitespace-only strings are absent.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_text)
}

/// Reads a list of scalars, skipping blanks and non-scalars. A lone scalar is a
/// one-element list.
fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    }
}

fn read_entries<T>(
    obj: &Map<String, Value>,
    key: &str,
    read: fn(&Map<String, Value>) -> T,
) -> Vec<T> {
    obj.get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_object())
                .map(read)
                .collect()
        })
        .unwrap_or_default()
}

fn read_personal_info(value: &Value) -> Option<PersonalInfo> {
    let obj = value.as_object()?;
    Some(PersonalInfo {
        name: text_field(obj, "name"),
        location: text_field(obj, "location"),
        phone: text_field(obj, "phone"),
        email: text_field(obj, "email"),
    })
}

fn read_work_experience(obj: &Map<String, Value>) -> WorkExperienceEntry {
    WorkExperienceEntry {
        company: text_field(obj, "company"),
        location: text_field(obj, "location"),
        title: text_field(obj, "title"),
        start_date: text_field(obj, "startDate"),
        end_date: text_field(obj, "endDate"),
        description: text_field(obj, "description"),
        achievements: obj.get("achievements").map(text_list).unwrap_or_default(),
    }
}

fn read_education(obj: &Map<String, Value>) -> EducationEntry {
    EducationEntry {
        institution: text_field(obj, "institution"),
        degree: text_field(obj, "degree"),
        start_date: text_field(obj, "startDate"),
        end_date: text_field(obj, "endDate"),
        description: text_field(obj, "description"),
    }
}

fn read_project(obj: &Map<String, Value>) -> ProjectEntry {
    ProjectEntry {
        name: text_field(obj, "name"),
        url: text_field(obj, "url"),
        description: text_field(obj, "description"),
    }
}

fn read_certification(obj: &Map<String, Value>) -> CertificationEntry {
    CertificationEntry {
        name: text_field(obj, "name"),
        issuer: text_field(obj, "issuer"),
        date: text_field(obj, "date"),
    }
}

fn read_skills(value: &Value) -> Option<Skills> {
    let skills = match value {
        Value::Object(categories) => Skills::Categorized(
            categories
                .iter()
                .filter_map(|(category, skills)| {
                    let category = category.trim();
                    let skills = text_list(skills);
                    (!category.is_empty() && !skills.is_empty())
                        .then(|| (category.to_string(), skills))
                })
                .collect(),
        ),
        other => Skills::Flat(text_list(other)),
    };
    (!skills.is_empty()).then_some(skills)
}
