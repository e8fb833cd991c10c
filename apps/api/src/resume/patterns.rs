//! Fixed pattern tables for the resume field parser.
//!
//! All tables are constant data. Regexes are compiled once on first use and
//! shared read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Scalar fields
// ────────────────────────────────────────────────────────────────────────────

/// Two or three capitalized words at the start of a line.
pub static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})\b").expect("name pattern")
});

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern")
});

/// North-American phone numbers: optional +1, area code with or without
/// parentheses, then 3 + 4 digits with `-`, `.` or whitespace separators.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b")
        .expect("phone pattern")
});

pub static TOTAL_YEARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\+?\s*years?\s+(?:of\s+)?experience").expect("years pattern")
});

/// `<title> at|@|| <Company ...>` at the start of a line.
pub static POSITION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[A-Za-z][\w ]*?[ \t]+(?:at|@|\|)[ \t]+[A-Z][^\r\n]*")
        .expect("position pattern")
});

// ────────────────────────────────────────────────────────────────────────────
// Degrees
// ────────────────────────────────────────────────────────────────────────────

/// Optional `in <Field>` / `- <Field>` suffix; the field is a run of
/// capitalized words.
const DEGREE_FIELD_SUFFIX: &str =
    r"(?:[ \t]+(?:(?i:in)|-|–|—)[ \t]+(?P<field>[A-Z][A-Za-z&]*(?:[ \t]+[A-Z][A-Za-z&]*)*))?";

pub struct DegreePattern {
    /// Label used when a field of study is captured.
    pub label: &'static str,
    /// Degree spellings. Long forms are case-insensitive, abbreviations are not.
    pub pattern: &'static str,
}

pub const DEGREES: &[DegreePattern] = &[
    DegreePattern {
        label: "Bachelor of Science",
        pattern: r"\b(?:(?i:bachelor(?:'s)?\s+of\s+science)|B\.S\.|B\.S\b|BS\b)",
    },
    DegreePattern {
        label: "Bachelor of Arts",
        pattern: r"\b(?:(?i:bachelor(?:'s)?\s+of\s+arts)|B\.A\.|B\.A\b|BA\b)",
    },
    DegreePattern {
        label: "Master of Science",
        pattern: r"\b(?:(?i:master(?:'s)?\s+of\s+science)|M\.S\.|M\.S\b|MS\b)",
    },
    DegreePattern {
        label: "MBA",
        pattern: r"\b(?:(?i:master\s+of\s+business\s+administration)|MBA\b)",
    },
    DegreePattern {
        label: "PhD",
        pattern: r"\b(?:(?i:doctor\s+of\s+philosophy)|Ph\.D\.|Ph\.D\b|PhD\b)",
    },
    DegreePattern {
        label: "MD",
        pattern: r"\b(?:(?i:doctor\s+of\s+medicine)|M\.D\.|MD\b)",
    },
    DegreePattern {
        label: "JD",
        pattern: r"\b(?:(?i:juris\s+doctor)|J\.D\.|JD\b)",
    },
];

pub struct CompiledDegree {
    pub label: &'static str,
    pub regex: Regex,
}

pub static DEGREE_MATCHERS: Lazy<Vec<CompiledDegree>> = Lazy::new(|| {
    DEGREES
        .iter()
        .map(|degree| CompiledDegree {
            label: degree.label,
            regex: Regex::new(&format!("{}{}", degree.pattern, DEGREE_FIELD_SUFFIX))
                .expect("degree pattern"),
        })
        .collect()
});

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub struct SkillCategory {
    pub name: &'static str,
    /// Matched case-insensitively.
    pub terms: &'static [&'static str],
    /// Short or ambiguous terms matched with exact case only.
    pub exact_terms: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "programming_languages",
        terms: &[
            "JavaScript",
            "TypeScript",
            "Python",
            "Java",
            "C++",
            "C#",
            "Ruby",
            "PHP",
            "Swift",
            "Kotlin",
            "Rust",
            "Scala",
            "MATLAB",
            "Perl",
            "Objective-C",
            "Dart",
            "Elixir",
            "Haskell",
        ],
        exact_terms: &["Go", "R"],
    },
    SkillCategory {
        name: "frameworks",
        terms: &[
            "React",
            "Angular",
            "Vue",
            "Next.js",
            "Node.js",
            "Express",
            "Django",
            "Flask",
            "FastAPI",
            "Spring Boot",
            "Spring",
            "Ruby on Rails",
            "Rails",
            "Laravel",
            ".NET",
            "ASP.NET",
            "TensorFlow",
            "PyTorch",
            "Svelte",
        ],
        exact_terms: &[],
    },
    SkillCategory {
        name: "databases",
        terms: &[
            "SQL",
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "SQLite",
            "Oracle",
            "DynamoDB",
            "Cassandra",
            "Elasticsearch",
            "Firebase",
        ],
        exact_terms: &[],
    },
    SkillCategory {
        name: "cloud_platforms",
        terms: &[
            "AWS",
            "Amazon Web Services",
            "Azure",
            "Google Cloud",
            "GCP",
            "Heroku",
            "DigitalOcean",
            "Vercel",
        ],
        exact_terms: &[],
    },
    SkillCategory {
        name: "devops_tools",
        terms: &[
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Terraform",
            "Ansible",
            "Git",
            "GitHub Actions",
            "GitLab",
            "CI/CD",
            "Linux",
        ],
        exact_terms: &[],
    },
    SkillCategory {
        name: "design_tools",
        terms: &[
            "Figma",
            "Sketch",
            "Adobe XD",
            "Photoshop",
            "Illustrator",
            "InDesign",
        ],
        exact_terms: &[],
    },
    SkillCategory {
        name: "soft_skills",
        terms: &[
            "Leadership",
            "Communication",
            "Teamwork",
            "Problem Solving",
            "Critical Thinking",
            "Time Management",
            "Project Management",
            "Collaboration",
        ],
        exact_terms: &[],
    },
];

pub struct CompiledSkillCategory {
    pub name: &'static str,
    pub regex: Regex,
}

/// One alternation per category. Longer terms come first so "JavaScript"
/// wins over "Java" at the same position; word boundaries are checked by
/// the caller because some terms start or end with punctuation.
pub static SKILL_MATCHERS: Lazy<Vec<CompiledSkillCategory>> = Lazy::new(|| {
    SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let mut alternatives: Vec<(usize, String)> = category
                .terms
                .iter()
                .map(|term| (term.len(), format!("(?i:{})", regex::escape(term))))
                .chain(
                    category
                        .exact_terms
                        .iter()
                        .map(|term| (term.len(), regex::escape(term))),
                )
                .collect();
            alternatives.sort_by(|a, b| b.0.cmp(&a.0));

            let pattern = alternatives
                .into_iter()
                .map(|(_, alt)| alt)
                .collect::<Vec<_>>()
                .join("|");

            CompiledSkillCategory {
                name: category.name,
                regex: Regex::new(&pattern).expect("skill pattern"),
            }
        })
        .collect()
});

/// Characters that split a "Skills" section into individual entries.
pub const SKILL_SEPARATORS: &[char] = &[',', '\n', '•', '·', '▪', '‣', '◦', '●', '■'];

// ────────────────────────────────────────────────────────────────────────────
// Job titles
// ────────────────────────────────────────────────────────────────────────────

/// Fallback titles for the last-position heuristic. The first entry found in
/// the experience section wins, regardless of where it appears in the text.
pub const JOB_TITLES: &[&str] = &[
    "Senior Software Engineer",
    "Software Engineer",
    "Software Developer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "Web Developer",
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
    "DevOps Engineer",
    "Product Manager",
    "Project Manager",
    "Engineering Manager",
    "UX Designer",
    "UI Designer",
    "Graphic Designer",
    "Business Analyst",
    "Marketing Manager",
    "Sales Manager",
    "Consultant",
    "Intern",
];

pub struct CompiledTitle {
    pub title: &'static str,
    /// `<title> at|@|,|-|| <Company>`; group 1 is the company.
    pub with_company: Regex,
}

pub static TITLE_MATCHERS: Lazy<Vec<CompiledTitle>> = Lazy::new(|| {
    JOB_TITLES
        .iter()
        .copied()
        .map(|title| CompiledTitle {
            title,
            with_company: Regex::new(&format!(
                r"{}(?:[ \t]*[,|@-]|[ \t]+at)[ \t]+([A-Z][\w&.]*(?:[ \t]+[A-Z][\w&.]*)*)",
                regex::escape(title)
            ))
            .expect("job title pattern"),
        })
        .collect()
});
