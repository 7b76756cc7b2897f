//! Static per-role keyword dictionary.
//!
//! The tables are compiled in and never mutated, so lookups need no locking.

use serde::{Deserialize, Serialize};

/// Target position category selected on the upload form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobRole {
    #[default]
    General,
    Frontend,
    Backend,
    Fullstack,
    Data,
    Design,
    Product,
    Marketing,
    Sales,
}

pub const ALL_ROLES: &[JobRole] = &[
    JobRole::General,
    JobRole::Frontend,
    JobRole::Backend,
    JobRole::Fullstack,
    JobRole::Data,
    JobRole::Design,
    JobRole::Product,
    JobRole::Marketing,
    JobRole::Sales,
];

impl JobRole {
    /// Normalizes a form value. Empty or unrecognized values resolve to `General`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        ALL_ROLES
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::General => "general",
            JobRole::Frontend => "frontend",
            JobRole::Backend => "backend",
            JobRole::Fullstack => "fullstack",
            JobRole::Data => "data",
            JobRole::Design => "design",
            JobRole::Product => "product",
            JobRole::Marketing => "marketing",
            JobRole::Sales => "sales",
        }
    }

    /// Label shown on the form; also used to name the role in prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            JobRole::General => "General Resume Evaluation",
            JobRole::Frontend => "Frontend Developer",
            JobRole::Backend => "Backend Developer",
            JobRole::Fullstack => "Full Stack Developer",
            JobRole::Data => "Data Analyst",
            JobRole::Design => "UI/UX Designer",
            JobRole::Product => "Product Manager",
            JobRole::Marketing => "Marketing Specialist",
            JobRole::Sales => "Sales Representative",
        }
    }

    pub fn keywords(&self) -> &'static RoleKeywords {
        match self {
            JobRole::General => &GENERAL,
            JobRole::Frontend => &FRONTEND,
            JobRole::Backend => &BACKEND,
            JobRole::Fullstack => &FULLSTACK,
            JobRole::Data => &DATA,
            JobRole::Design => &DESIGN,
            JobRole::Product => &PRODUCT,
            JobRole::Marketing => &MARKETING,
            JobRole::Sales => &SALES,
        }
    }
}

/// Terms assumed present (`found`) and suggested additions (`missing`).
#[derive(Debug)]
pub struct RoleKeywords {
    pub found: &'static [&'static str],
    pub missing: &'static [&'static str],
}

impl RoleKeywords {
    pub fn found_owned(&self) -> Vec<String> {
        self.found.iter().map(|s| s.to_string()).collect()
    }

    pub fn missing_owned(&self) -> Vec<String> {
        self.missing.iter().map(|s| s.to_string()).collect()
    }
}

static GENERAL: RoleKeywords = RoleKeywords {
    found: &["experienced", "team", "professional", "leadership", "results"],
    missing: &[
        "achievements",
        "metrics",
        "impact",
        "innovation",
        "certifications",
        "collaboration",
        "communication",
    ],
};

static FRONTEND: RoleKeywords = RoleKeywords {
    found: &["HTML", "CSS", "JavaScript", "React", "responsive"],
    missing: &[
        "TypeScript",
        "Redux",
        "Webpack",
        "Jest",
        "Material UI",
        "accessibility",
        "performance optimization",
    ],
};

static BACKEND: RoleKeywords = RoleKeywords {
    found: &["API", "database", "server", "Node.js", "Express"],
    missing: &[
        "microservices",
        "Docker",
        "Kubernetes",
        "AWS",
        "security",
        "caching",
        "scalability",
        "PostgreSQL",
    ],
};

static FULLSTACK: RoleKeywords = RoleKeywords {
    found: &["frontend", "backend", "full-stack", "JavaScript", "database"],
    missing: &[
        "DevOps",
        "CI/CD",
        "cloud services",
        "system design",
        "performance",
        "React",
        "Node.js",
        "TypeScript",
    ],
};

static DATA: RoleKeywords = RoleKeywords {
    found: &[
        "data analysis",
        "Excel",
        "reporting",
        "statistics",
        "visualization",
    ],
    missing: &[
        "Python",
        "R",
        "SQL",
        "Tableau",
        "Power BI",
        "machine learning",
        "data cleaning",
        "big data",
    ],
};

static DESIGN: RoleKeywords = RoleKeywords {
    found: &["design", "UI", "UX", "Figma", "wireframes"],
    missing: &[
        "user research",
        "prototyping",
        "design systems",
        "accessibility",
        "user testing",
        "Adobe XD",
        "information architecture",
    ],
};

static PRODUCT: RoleKeywords = RoleKeywords {
    found: &["product", "strategy", "roadmap", "stakeholders", "requirements"],
    missing: &[
        "user stories",
        "KPIs",
        "market research",
        "A/B testing",
        "agile",
        "prioritization",
        "customer feedback",
    ],
};

static MARKETING: RoleKeywords = RoleKeywords {
    found: &[
        "marketing",
        "campaigns",
        "social media",
        "content",
        "analytics",
    ],
    missing: &[
        "SEO",
        "conversion rate",
        "customer journey",
        "marketing automation",
        "email marketing",
        "marketing ROI",
        "brand strategy",
    ],
};

static SALES: RoleKeywords = RoleKeywords {
    found: &[
        "sales",
        "client",
        "revenue",
        "business development",
        "relationship",
    ],
    missing: &[
        "CRM",
        "sales funnel",
        "negotiation",
        "closing techniques",
        "account management",
        "sales targets",
        "customer acquisition",
    ],
};
