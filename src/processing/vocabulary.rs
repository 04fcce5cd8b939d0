//! Fixed keyword vocabularies and scoring constants used by the analyzer.
//!
//! Every list here is lowercase and matched as a plain substring against
//! case-folded text.

/// Header keywords of every resume section type. A line containing one of
/// these ends whichever section a segmenter is currently inside.
pub const SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work",
    "project",
    "objective",
    "summary",
    "employment",
    "qualification",
    "achievements",
];

pub const EDUCATION_HEADERS: &[&str] = &[
    "education", "academic", "qualification", "degree", "university", "college",
    "school", "institute", "certification", "diploma", "bachelor", "master",
    "phd", "b.tech", "m.tech", "b.e", "m.e", "b.sc", "m.sc", "bca", "mca",
    "b.com", "m.com", "b.cs-it", "imca", "bba", "mba", "honors", "scholarship",
];

pub const EXPERIENCE_HEADERS: &[&str] = &[
    "experience", "employment", "work history", "professional experience",
    "work experience", "career history", "professional background",
    "employment history", "job history", "positions held", "job title",
    "job responsibilities", "job description", "job summary",
];

pub const PROJECT_HEADERS: &[&str] = &[
    "projects", "personal projects", "academic projects", "key projects",
    "major projects", "professional projects", "project experience",
    "relevant projects", "featured projects", "latest projects", "top projects",
];

/// Presence categories, each worth at most [`PRESENCE_CATEGORY_MAX`] points.
pub const PRESENCE_CATEGORIES: &[(&str, &[&str])] = &[
    ("contact", &["email", "phone", "address", "linkedin"]),
    ("education", &["education", "university", "college", "degree", "academic"]),
    ("experience", &["experience", "internship", "work", "position of responsibility"]),
    ("skills", &["skills", "technologies", "tools", "expertise"]),
];

pub const PRESENCE_CATEGORY_MAX: u32 = 25;

/// Characters a bullet line may start with.
pub const BULLET_GLYPHS: &[&str] = &["-", "*", "•", "→"];

pub const MIN_RESUME_LENGTH: usize = 300;

// Formatting deductions, applied in this order.
pub const SHORT_RESUME_PENALTY: i32 = 30;
pub const NO_HEADERS_PENALTY: i32 = 20;
pub const NO_BULLETS_PENALTY: i32 = 20;
pub const SPACING_PENALTY: i32 = 15;
pub const CONTACT_FORMAT_PENALTY: i32 = 15;

/// Points removed from a derived sub-score per suggestion in its group.
pub const SUGGESTION_PENALTY: i32 = 25;

/// Final aggregation weights. Each weighted term is rounded on its own.
pub const CONTACT_WEIGHT: f64 = 0.1;
pub const SKILLS_WEIGHT: f64 = 0.35;
pub const EXPERIENCE_WEIGHT: f64 = 0.25;
pub const EDUCATION_WEIGHT: f64 = 0.1;
pub const FORMAT_WEIGHT: f64 = 0.2;
