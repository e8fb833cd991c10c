//! Resume field parser: heuristic extraction of structured fields from plain text.
//!
//! Every field is found by an independent pattern search over the whole text,
//! except the last position, which is scoped to the "Experience" section.
//! Nothing here fails: a field that no pattern matches is simply absent.

use serde::Serialize;

use crate::resume::ordered_set::OrderedSet;
use crate::resume::patterns::{
    DEGREE_MATCHERS, EMAIL, NAME, PHONE, POSITION_LINE, SKILL_MATCHERS, SKILL_SEPARATORS,
    TITLE_MATCHERS, TOTAL_YEARS,
};
use crate::resume::section;

/// Minimum (exclusive) and maximum (exclusive) length of a "Skills" section entry.
const SECTION_SKILL_MIN_LEN: usize = 2;
const SECTION_SKILL_MAX_LEN: usize = 30;

/// Fields recovered from resume text. Everything is optional except the two
/// ordered sets, which are empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualifications: OrderedSet<String>,
    pub skills: OrderedSet<String>,
    pub total_years: Option<String>,
    pub last_position: Option<String>,
}

/// Parses resume text into [`ParsedFields`]. Pure and deterministic.
pub fn parse(text: &str) -> ParsedFields {
    let fields = ParsedFields {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        qualifications: extract_qualifications(text),
        skills: extract_skills(text),
        total_years: extract_total_years(text),
        last_position: extract_last_position(text),
    };

    tracing::debug!(
        has_name = fields.name.is_some(),
        has_email = fields.email.is_some(),
        has_phone = fields.phone.is_some(),
        qualifications = fields.qualifications.len(),
        skills = fields.skills.len(),
        has_last_position = fields.last_position.is_some(),
        "Parsed resume fields"
    );

    fields
}

fn extract_name(text: &str) -> Option<String> {
    NAME.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().trim().to_string())
}

fn extract_qualifications(text: &str) -> OrderedSet<String> {
    let mut qualifications = OrderedSet::new();

    for degree in DEGREE_MATCHERS.iter() {
        for caps in degree.regex.captures_iter(text) {
            let entry = match caps.name("field") {
                Some(field) => format!("{} in {}", degree.label, field.as_str().trim()),
                None => caps[0].trim().to_string(),
            };
            qualifications.insert(entry);
        }
    }

    qualifications
}

fn extract_skills(text: &str) -> OrderedSet<String> {
    let mut skills = OrderedSet::new();

    for category in SKILL_MATCHERS.iter() {
        let before = skills.len();
        for m in category.regex.find_iter(text) {
            if is_word_bounded(text, m.start(), m.end()) {
                skills.insert(m.as_str().to_string());
            }
        }
        tracing::trace!(
            category = category.name,
            added = skills.len() - before,
            "Skill table matches"
        );
    }

    if let Some(body) = section::capture(text, "skills") {
        skills.extend(split_skill_section(body));
    }

    skills
}

/// Splits a "Skills" section body into entries, keeping those whose trimmed
/// length is strictly between the section bounds.
fn split_skill_section(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split(SKILL_SEPARATORS)
        .map(|token| token.trim().trim_start_matches(['-', '*']).trim())
        .filter(|token| {
            let len = token.chars().count();
            len > SECTION_SKILL_MIN_LEN && len < SECTION_SKILL_MAX_LEN
        })
        .map(str::to_string)
}

fn extract_total_years(text: &str) -> Option<String> {
    TOTAL_YEARS
        .captures(text)
        .map(|caps| format!("{} years", &caps[1]))
}

fn extract_last_position(text: &str) -> Option<String> {
    let experience = section::capture(text, "experience")?;

    if let Some(m) = POSITION_LINE.find(experience) {
        return Some(m.as_str().trim().to_string());
    }

    // List order decides between several titles, not position in the text.
    let matcher = TITLE_MATCHERS
        .iter()
        .find(|matcher| experience.contains(matcher.title))?;

    let company = matcher
        .with_company
        .captures(experience)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());

    Some(match company {
        Some(company) => format!("{} at {}", matcher.title, company),
        None => matcher.title.to_string(),
    })
}

/// True when the match is not glued to neighbouring word characters.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word(c));
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane.doe@example.com | (555) 123-4567
Seattle, WA

Summary
Backend engineer with 5+ years of experience building APIs in Python and Go.

Experience
Senior Software Engineer at Contoso Ltd
  Led migration to Kubernetes and PostgreSQL.

Education
B.S. in Computer Science, University of Washington
MBA

Skills:
Python, Excel, SQL
";

    fn strings(set: &OrderedSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_sample_resume_fields() {
        let fields = parse(SAMPLE_RESUME);
        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(fields.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(fields.total_years.as_deref(), Some("5 years"));
        assert_eq!(
            fields.last_position.as_deref(),
            Some("Senior Software Engineer at Contoso Ltd")
        );
        assert_eq!(
            strings(&fields.qualifications),
            vec!["Bachelor of Science in Computer Science", "MBA"]
        );
    }

    #[test]
    fn test_skills_union_of_table_and_section() {
        let fields = parse(SAMPLE_RESUME);
        let skills = strings(&fields.skills);
        for expected in ["Python", "Go", "Kubernetes", "PostgreSQL", "SQL", "Excel"] {
            assert!(skills.contains(&expected), "missing {expected} in {skills:?}");
        }
        // Table matches come first, section entries after, no duplicates.
        assert_eq!(skills.iter().filter(|s| **s == "Python").count(), 1);
        assert!(
            skills.iter().position(|s| *s == "Python")
                < skills.iter().position(|s| *s == "Excel")
        );
    }

    #[test]
    fn test_email_exact_match() {
        let fields = parse("Contact: jane.doe@example.com for details");
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_total_years_normalized() {
        assert_eq!(
            parse("I bring 5+ years of experience").total_years.as_deref(),
            Some("5 years")
        );
        assert_eq!(
            parse("12 Years Experience in retail").total_years.as_deref(),
            Some("12 years")
        );
        assert_eq!(
            parse("1 year experience").total_years.as_deref(),
            Some("1 years")
        );
    }

    #[test]
    fn test_skills_section_entries_included() {
        let fields = parse("skills:\nPython, Excel, SQL\n");
        let skills = strings(&fields.skills);
        for expected in ["Python", "Excel", "SQL"] {
            assert!(skills.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_skills_section_length_filter() {
        let fields = parse("Skills: C, Go, Rust, a very long skill entry that nobody needs\n");
        let skills = strings(&fields.skills);
        assert!(skills.contains(&"Rust"));
        assert!(skills.contains(&"Go"), "table match still applies");
        assert!(!skills.contains(&"C"));
        assert!(!skills
            .iter()
            .any(|s| s.starts_with("a very long skill entry")));
    }

    #[test]
    fn test_skills_section_bullets() {
        let fields = parse("Skills\n• Negotiation • Budgeting\n- Forecasting\n");
        let skills = strings(&fields.skills);
        assert_eq!(skills, vec!["Negotiation", "Budgeting", "Forecasting"]);
    }

    #[test]
    fn test_empty_skills_section_does_not_swallow_next_section() {
        let fields = parse("Skills\n\nProjects\nbuilt a thing\n");
        assert!(fields.skills.is_empty(), "{:?}", fields.skills);
    }

    #[test]
    fn test_skill_table_respects_word_boundaries() {
        let fields = parse("javascripting and Reactive streams");
        assert!(fields.skills.is_empty(), "{:?}", fields.skills);
    }

    #[test]
    fn test_skill_table_collects_every_occurrence_spelling() {
        let fields = parse("python daily, Python at work, C++ and C# too");
        assert_eq!(strings(&fields.skills), vec!["python", "Python", "C++", "C#"]);
    }

    #[test]
    fn test_no_degrees_yields_empty_qualifications() {
        let fields = parse("Jane Doe\nNo formal education listed.");
        assert!(fields.qualifications.is_empty());
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["qualifications"], serde_json::json!([]));
    }

    #[test]
    fn test_qualifications_dedup_and_order() {
        let text = "PhD in Physics\nMaster of Science in Physics\nPhD in Physics\nJD";
        let fields = parse(text);
        // Table order: MS before PhD before JD.
        assert_eq!(
            strings(&fields.qualifications),
            vec!["Master of Science in Physics", "PhD in Physics", "JD"]
        );
    }

    #[test]
    fn test_degree_without_field_keeps_raw_text() {
        let fields = parse("Bachelor of Arts, 2012");
        assert_eq!(strings(&fields.qualifications), vec!["Bachelor of Arts"]);
    }

    #[test]
    fn test_phone_variants() {
        assert_eq!(
            parse("call +1 555-123-4567").phone.as_deref(),
            Some("+1 555-123-4567")
        );
        assert_eq!(
            parse("tel 555.123.4567").phone.as_deref(),
            Some("555.123.4567")
        );
        assert_eq!(parse("ext 12345").phone, None);
    }

    #[test]
    fn test_name_takes_first_capitalized_run() {
        let fields = parse("john smith\nProfessional Summary\nJane Doe");
        assert_eq!(fields.name.as_deref(), Some("Professional Summary"));
    }

    #[test]
    fn test_last_position_fallback_uses_title_list_order() {
        let text = "Experience:\n2019 - Data Analyst, Initech\n2021 - Software Engineer, Globex Corp\n";
        let fields = parse(text);
        assert_eq!(
            fields.last_position.as_deref(),
            Some("Software Engineer at Globex Corp")
        );
    }

    #[test]
    fn test_last_position_line_with_at_sign_or_pipe() {
        assert_eq!(
            parse("Experience:\nengineer @ Acme\n").last_position.as_deref(),
            Some("engineer @ Acme")
        );
        assert_eq!(
            parse("Experience\nsite reliability engineer | Acme Corp\n")
                .last_position
                .as_deref(),
            Some("site reliability engineer | Acme Corp")
        );
    }

    #[test]
    fn test_last_position_fallback_with_pipe_and_dash() {
        assert_eq!(
            parse("Experience:\n2021: Data Analyst | Initech\n")
                .last_position
                .as_deref(),
            Some("Data Analyst at Initech")
        );
        assert_eq!(
            parse("Experience:\n2018 - 2020: Product Manager - Umbrella Co\n")
                .last_position
                .as_deref(),
            Some("Product Manager at Umbrella Co")
        );
    }

    #[test]
    fn test_last_position_fallback_without_company() {
        let text = "Experience:\n2020 - 2023: worked as Data Scientist on models\n";
        assert_eq!(
            parse(text).last_position.as_deref(),
            Some("Data Scientist")
        );
    }

    #[test]
    fn test_last_position_requires_experience_section() {
        let fields = parse("Software Engineer at Globex\n");
        assert_eq!(fields.last_position, None);
    }

    #[test]
    fn test_empty_text_gives_empty_record() {
        assert_eq!(parse(""), ParsedFields::default());
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(SAMPLE_RESUME), parse(SAMPLE_RESUME));
    }

    #[test]
    fn test_sets_never_contain_duplicates() {
        let text = "Python Python python SQL SQL\nSkills: Python, SQL, SQL, Docker\nMBA MBA";
        let fields = parse(text);
        for set in [&fields.skills, &fields.qualifications] {
            let mut seen = std::collections::HashSet::new();
            assert!(set.iter().all(|s| seen.insert(s.clone())));
        }
    }
}
