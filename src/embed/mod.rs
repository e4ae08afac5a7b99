//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `page` - The built-in stylesheet (the page layout itself is
//!   `templates/resume.html`, compiled by askama)
//! - `init` - Files written by `vita init`

pub mod page {
    /// Built-in resume stylesheet (letter page, Inter).
    pub const RESUME_CSS: &str = include_str!("page/resume.css");
}

pub mod init {
    /// Sample data file.
    pub const SAMPLE_RESUME: &str = include_str!("init/resume.yaml");

    /// Commented config template.
    pub const CONFIG_TEMPLATE: &str = include_str!("init/vita.toml");
}

#[cfg(test)]
mod tests {
    use super::init::{CONFIG_TEMPLATE, SAMPLE_RESUME};
    use super::page::RESUME_CSS;

    #[test]
    fn test_stylesheet_sets_letter_page() {
        assert!(RESUME_CSS.contains("@page"));
        assert!(RESUME_CSS.contains("letter"));
    }

    #[test]
    fn test_init_files_parse() {
        let sample: serde_yaml::Value = serde_yaml::from_str(SAMPLE_RESUME).unwrap();
        assert!(sample.get("name").is_some());
        toml::from_str::<toml::Table>(CONFIG_TEMPLATE).unwrap();
    }
}
