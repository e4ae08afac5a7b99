//! Resume data model.
//!
//! Mirrors the fixed layout: a header, then skills, experience, education
//! and selected projects. Only `name` is required; everything else
//! defaults to empty and renders as nothing.

use super::text::{Text, null_as_default};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resume {
    pub name: Text,
    #[serde(default)]
    pub location: Text,
    #[serde(default)]
    pub email: Text,
    #[serde(default)]
    pub website: Text,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<SkillGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Job>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

impl Resume {
    /// Header contact parts, in display order.
    pub fn contact(&self) -> [&Text; 3] {
        [&self.location, &self.email, &self.website]
    }
}

/// `Category: item, item, item`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: Text,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Text>,
}

/// One employer, possibly with several roles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Job {
    pub company: Text,
    pub location: Text,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<Role>,
}

impl Job {
    /// `company • location` parts.
    pub fn employer(&self) -> [&Text; 2] {
        [&self.company, &self.location]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Role {
    pub title: Text,
    pub dates: Text,
    #[serde(deserialize_with = "null_as_default")]
    pub responsibilities: Vec<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: Text,
    pub institution: Text,
    pub graduation: Text,
    pub gpa: Option<Text>,
    #[serde(deserialize_with = "null_as_default")]
    pub coursework: Vec<Text>,
}

impl Role {
    /// Non-blank responsibilities.
    pub fn duties(&self) -> Vec<&Text> {
        self.responsibilities.iter().filter(|r| !r.is_blank()).collect()
    }
}

impl Education {
    /// GPA, unless absent or blank.
    pub fn gpa(&self) -> Option<&Text> {
        self.gpa.as_ref().filter(|g| !g.is_blank())
    }

    /// `institution • gpa` parts.
    pub fn details(&self) -> Vec<&Text> {
        std::iter::once(&self.institution).chain(self.gpa()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: Text,
    pub url: Text,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<Text>,
    pub description: Text,
}
