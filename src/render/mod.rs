//! HTML rendering.
//!
//! Rendering is a pure function of the resume data (and the optional extra
//! stylesheet): the same input always yields byte-identical HTML. Writing
//! the artifact is separate, see [`write_html`].
//!
//! The layout lives in `templates/resume.html`: header, then Skills,
//! Experience, Education and Selected Work. A section with no entries is
//! left out entirely.
//!
//! - [`links`]: `[label](url)` expansion with escaping
//! - `filters`: template filters over [`links`]

mod filters;
mod links;

use crate::embed::page::RESUME_CSS;
use crate::resume::Resume;
use crate::utils::fs::write_atomic;
use askama::Template;
use std::io;
use std::path::Path;

#[derive(Template)]
#[template(path = "resume.html")]
struct Page<'a> {
    resume: &'a Resume,
    style: &'a str,
}

/// Render a complete HTML document for `resume`.
///
/// `extra_css` is appended after the built-in stylesheet.
pub fn render(resume: &Resume, extra_css: Option<&str>) -> askama::Result<String> {
    let mut style = RESUME_CSS.to_string();
    if let Some(css) = extra_css {
        style.push('\n');
        style.push_str(css);
    }

    Page { resume, style: &style }.render()
}

/// Replace the HTML artifact at `path` atomically.
pub fn write_html(path: &Path, html: &str) -> io::Result<()> {
    write_atomic(path, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume;
    use tempfile::TempDir;

    const FULL: &str = include_str!("../embed/init/resume.yaml");

    fn parse(yaml: &str) -> Resume {
        resume::parse(yaml, Path::new("resume.yaml")).unwrap().resume
    }

    fn html(yaml: &str) -> String {
        render(&parse(yaml), None).unwrap()
    }

    #[test]
    fn test_every_field_present_in_output() {
        let html = html(FULL);
        for needle in [
            "Jane Doe",
            "Berlin, Germany",
            r#"<a href="mailto:jane@example.com">jane@example.com</a>"#,
            r#"<a href="https://jane.dev">jane.dev</a>"#,
            "<strong>Languages:</strong> Rust, Go, Python, SQL",
            "Kubernetes, Terraform, PostgreSQL",
            r#"<a href="https://acme.example">Acme Corp</a> • Remote"#,
            "Senior Software Engineer",
            "2022 – Present",
            "cutting p99 latency by 40%",
            "Mentored four engineers",
            "Software Engineer",
            "2019 – 2022",
            "feature-flag service",
            "B.Sc. Computer Science",
            "Technical University of Berlin • GPA: 1.3",
            ">2019<",
            "Operating Systems, Compilers, Distributed Systems",
            ">vita<",
            r#"<a href="https://github.com/jane/vita">github.com/jane/vita</a>"#,
            "Rust, YAML",
            "rebuilds HTML and PDF on every save",
        ] {
            assert!(html.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render(&parse(FULL), Some("h1 { color: red; }")).unwrap();
        let second = render(&parse(FULL), Some("h1 { color: red; }")).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_extra_css_after_builtin() {
        let html = render(&parse("name: Jane"), Some(".header h1 { font-size: 20pt; }")).unwrap();
        let builtin = html.find("@page").unwrap();
        let extra = html.find("font-size: 20pt").unwrap();
        assert!(extra > builtin);
    }

    #[test]
    fn test_title_is_escaped_name() {
        let html = html("name: \"Jane & John\"");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Jane &amp; John</title>"));
    }

    #[test]
    fn test_missing_optional_fields_render_empty() {
        let html = html("name: Jane");
        assert!(html.contains("<h1>Jane</h1>"));
        assert!(!html.contains(r#"class="contact""#));
        assert!(!html.contains(r#"class="section-title""#));
    }

    #[test]
    fn test_contact_line_skips_blank_parts() {
        let html = html("name: Jane\nlocation: Berlin\nwebsite: \"[jane.dev](https://jane.dev)\"");
        assert!(html.contains(
            r#"<div class="contact">Berlin — <a href="https://jane.dev">jane.dev</a></div>"#
        ));
    }

    #[test]
    fn test_empty_sections_omitted() {
        let html = html("name: Jane\nskills:\n  - category: Languages\n    items: [Rust]");
        assert!(html.contains(">Skills<"));
        assert!(!html.contains(">Experience<"));
        assert!(html.contains("<strong>Languages:</strong> Rust</div>"));
    }

    #[test]
    fn test_each_role_repeats_employer() {
        let html = html(
            "name: Jane\nexperience:\n  - company: Acme\n    location: Remote\n    roles:\n      - title: Senior\n        dates: 2022\n      - title: Junior\n",
        );
        assert_eq!(html.matches("Acme • Remote").count(), 2);
        assert!(html.contains(r#"<span class="role-dates">2022</span>"#));
        // Second role has no dates
        assert_eq!(html.matches(r#"class="role-dates""#).count(), 1);
    }

    #[test]
    fn test_job_without_roles_keeps_employer() {
        let html = html("name: Jane\nexperience:\n  - company: Acme Corp\n    location: Remote\n");
        assert!(html.contains(">Experience<"));
        assert!(html.contains(r#"<div class="subline">Acme Corp • Remote</div>"#));
        assert!(!html.contains(r#"class="role-item""#));
    }

    #[test]
    fn test_blank_duties_skipped() {
        let html = html(
            "name: J\nexperience:\n  - company: Acme\n    roles:\n      - title: Dev\n        responsibilities: [Shipped, '', ~]\n",
        );
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains("<li>Shipped</li>"));
    }

    #[test]
    fn test_education_optional_parts() {
        let with = html(
            "name: J\neducation:\n  - degree: BSc\n    institution: TU\n    gpa: 3.9\n    coursework: [OS, Compilers]",
        );
        assert!(with.contains("TU • 3.9"));
        assert!(with.contains("<strong>• Coursework:</strong> OS, Compilers"));

        let without = html("name: J\neducation:\n  - degree: BSc\n    institution: TU");
        assert!(without.contains(r#"<div class="subline">TU</div>"#));
        assert!(!without.contains(r#"class="coursework""#));
    }

    #[test]
    fn test_project_blank_description_has_no_list() {
        let html = html("name: J\nprojects:\n  - name: vita\n    technologies: [Rust]");
        assert!(html.contains(r#"<div class="project-tech">Rust</div>"#));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_user_markup_escaped() {
        let html = html("name: \"<script>alert(1)</script>\"");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_write_html() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.html");
        let html = html("name: Jane");

        write_html(&path, &html).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
    }
}
