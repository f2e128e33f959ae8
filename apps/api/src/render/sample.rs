//! Fixed smoke-test document served by `GET /api/test-pdf`. Exercises every renderer
//! path: centered header, paragraphs, entries with details and bullets, a project link,
//! categorized skills and certifications.

use crate::document::payload::{
    CertificationEntry, EducationEntry, PersonalInfo, ProjectEntry, Skills, StructuredContent,
    WorkExperienceEntry,
};
use crate::document::ResumePayload;

fn s(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

pub fn sample_payload() -> ResumePayload {
    ResumePayload::Structured(StructuredContent {
        personal_info: Some(PersonalInfo {
            name: s("John Developer"),
            location: s("San Francisco, CA"),
            phone: s("(555) 123-4567"),
            email: s("johndoe@example.com"),
        }),
        summary: s("Highly skilled Software Developer with a strong background in designing, \
             developing, and maintaining software applications, leveraging expertise in \
             programming languages, cloud platforms, and collaborative team environments. \
             Proven ability to deliver high-quality solutions, with a focus on efficiency, \
             scalability, and maintainability."),
        work_experience: vec![
            WorkExperienceEntry {
                company: s("Tech Giants Inc."),
                location: s("San Francisco, CA"),
                title: s("Senior Software Engineer"),
                start_date: s("Jan 2020"),
                end_date: None,
                description: None,
                achievements: list(&[
                    "Led development of cloud-native applications using React, Node.js, and \
                     AWS, resulting in a 40% improvement in system performance through \
                     optimization initiatives.",
                    "Collaborated with cross-functional teams to design, develop, and deploy \
                     software applications, ensuring high-quality solutions that meet business \
                     requirements.",
                ]),
            },
            WorkExperienceEntry {
                company: s("StartupHub"),
                location: s("San Francisco, CA"),
                title: s("Full Stack Developer"),
                start_date: s("Mar 2018"),
                end_date: s("Dec 2019"),
                description: s("Client services team."),
                achievements: list(&[
                    "- Developed and maintained multiple client projects using React, \
                     TypeScript, and Firebase.",
                ]),
            },
        ],
        projects: vec![ProjectEntry {
            name: s("E-commerce Platform"),
            url: s("https://github.com/johndev/shop"),
            description: s("Built a scalable e-commerce platform handling 10k+ daily users, \
                 utilizing React, Node.js, MongoDB, and Stripe to implement real-time \
                 inventory management and payment processing."),
        }],
        education: vec![EducationEntry {
            institution: s("Stanford University"),
            degree: s("M.S. Computer Science"),
            start_date: s("2016"),
            end_date: s("2018"),
            description: s("GPA: 3.92"),
        }],
        skills: Some(Skills::Categorized(vec![
            (
                "Technical Skills".to_string(),
                list(&[
                    "React", "Node.js", "AWS", "MongoDB", "Stripe", "Python", "OpenAI API",
                    "FastAPI",
                ]),
            ),
            (
                "Other Skills".to_string(),
                list(&[
                    "Agile Development",
                    "CI/CD Pipelines",
                    "Cloud Computing",
                    "Team Leadership",
                ]),
            ),
        ])),
        certifications: vec![CertificationEntry {
            name: s("AWS Certified Developer"),
            issuer: s("Amazon Web Services"),
            date: s("Jan 2022"),
        }],
        role: s("Software Engineer"),
        ..StructuredContent::default()
    })
}
