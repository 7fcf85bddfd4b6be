use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The structured output of one extraction run.
///
/// Scalar fields are optional; collection fields default to empty, never
/// absent. All values stay free text exactly as extracted; source date
/// formats vary too much ("Jan 2020", "2020", "Present") to normalize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    /// Category name → ordered skill list. The one genuinely dynamic mapping
    /// in the model; insertion order is preserved through serialization.
    #[serde(default)]
    pub technical_skills: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub volunteering: Vec<String>,
}

/// One job block. Fields are empty strings when the heuristics could not
/// recover a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub start_date: String,
    pub end_date: String,
    pub position: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub start_date: String,
    pub end_date: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub date: String,
    pub name: String,
    pub issuer: String,
}
