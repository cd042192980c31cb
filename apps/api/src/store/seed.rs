//! Demo listings loaded when no real data source is configured.

use chrono::NaiveDate;

use crate::models::listing::NewListing;
use crate::store::JobBoard;

struct SeedListing {
    id: i64,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    employment_type: &'static str,
    pay: &'static str,
    duration: Option<&'static str>,
    description: &'static str,
    requirements: &'static [&'static str],
    skills: &'static [&'static str],
    category: &'static str,
    experience_level: &'static str,
    is_remote: bool,
    posted: (i32, u32, u32),
}

const SEED_JOBS: &[SeedListing] = &[
    SeedListing {
        id: 1,
        title: "Senior Frontend Developer",
        company: "TechCorp",
        location: "San Francisco, CA",
        employment_type: "Full-time",
        pay: "$120,000 - $150,000",
        duration: None,
        description: "Build responsive user interfaces for our hiring platform.",
        requirements: &["5+ years of frontend experience", "Strong TypeScript"],
        skills: &["React", "TypeScript", "CSS"],
        category: "Engineering",
        experience_level: "Senior",
        is_remote: false,
        posted: (2024, 1, 15),
    },
    SeedListing {
        id: 2,
        title: "Backend Engineer",
        company: "DataFlow",
        location: "Remote",
        employment_type: "Full-time",
        pay: "$110,000 - $140,000",
        duration: None,
        description: "Design and operate the services behind our data pipeline.",
        requirements: &["3+ years building APIs", "Experience with SQL databases"],
        skills: &["Rust", "PostgreSQL", "Docker"],
        category: "Engineering",
        experience_level: "Mid",
        is_remote: true,
        posted: (2024, 1, 18),
    },
    SeedListing {
        id: 3,
        title: "Product Designer",
        company: "Pixel Labs",
        location: "New York, NY",
        employment_type: "Contract",
        pay: "$70 - $90/hour",
        duration: None,
        description: "Own end-to-end design for candidate-facing flows.",
        requirements: &["Portfolio of shipped products"],
        skills: &["Figma", "Prototyping", "User Research"],
        category: "Design",
        experience_level: "Mid",
        is_remote: false,
        posted: (2024, 1, 20),
    },
];

const SEED_INTERNSHIPS: &[SeedListing] = &[
    SeedListing {
        id: 1,
        title: "Software Engineering Intern",
        company: "TechCorp",
        location: "San Francisco, CA",
        employment_type: "Internship",
        pay: "$4,000/month",
        duration: Some("3 months"),
        description: "Ship production features alongside the web team.",
        requirements: &["Currently pursuing a CS degree"],
        skills: &["JavaScript", "React", "Git"],
        category: "Engineering",
        experience_level: "Entry",
        is_remote: false,
        posted: (2024, 2, 1),
    },
    SeedListing {
        id: 2,
        title: "Data Science Intern",
        company: "DataFlow",
        location: "Remote",
        employment_type: "Internship",
        pay: "$3,000/month",
        duration: Some("6 months"),
        description: "Prototype ranking models on anonymized hiring data.",
        requirements: &["Coursework in statistics"],
        skills: &["Python", "Pandas", "SQL"],
        category: "Data",
        experience_level: "Entry",
        is_remote: true,
        posted: (2024, 2, 5),
    },
];

/// Loads the demo jobs and internships into `board`.
pub fn seed_demo_data(board: &mut JobBoard) {
    for seed in SEED_JOBS {
        let (new, date) = to_new(seed, false);
        board.jobs.insert_with_id(seed.id, new, date);
    }
    for seed in SEED_INTERNSHIPS {
        let (new, date) = to_new(seed, true);
        board.internships.insert_with_id(seed.id, new, date);
    }
}

fn to_new(seed: &SeedListing, internship: bool) -> (NewListing, NaiveDate) {
    let (y, m, d) = seed.posted;
    let pay = Some(seed.pay.to_string());
    let new = NewListing {
        title: seed.title.to_string(),
        company: seed.company.to_string(),
        location: seed.location.to_string(),
        employment_type: seed.employment_type.to_string(),
        salary: if internship { None } else { pay.clone() },
        stipend: if internship { pay } else { None },
        duration: seed.duration.map(str::to_string),
        description: seed.description.to_string(),
        requirements: seed.requirements.iter().map(|s| s.to_string()).collect(),
        skills: seed.skills.iter().map(|s| s.to_string()).collect(),
        category: seed.category.to_string(),
        experience_level: seed.experience_level.to_string(),
        is_remote: seed.is_remote,
        posted_by: None,
    };
    (new, NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}
