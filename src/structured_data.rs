use serde::Serialize;

use crate::content::{EDUCATION, EXPERIENCE, PROFILE};

#[derive(Debug, Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

/// schema.org `Person` describing the site owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    email: String,
    telephone: &'static str,
    same_as: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    works_for: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alumni_of: Option<Organization>,
}

fn person() -> Person {
    let organization = |name| Organization {
        kind: "Organization",
        name,
    };
    Person {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.name,
        job_title: PROFILE.headline,
        email: format!("mailto:{}", PROFILE.email),
        telephone: PROFILE.phone,
        same_as: PROFILE.profiles.iter().map(|p| p.url).collect(),
        works_for: EXPERIENCE.first().map(|e| organization(e.company)),
        alumni_of: EDUCATION.first().map(|e| Organization {
            kind: "CollegeOrUniversity",
            name: e.institution,
        }),
    }
}

/// JSON-LD for the document head, safe to drop into a `<script>` element.
pub fn person_json_ld() -> Result<String, serde_json::Error> {
    serde_json::to_string(&person()).map(|json| escape_script(&json))
}

fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
