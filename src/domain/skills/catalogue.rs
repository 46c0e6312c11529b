//! Fixed skill keyword catalogues.
//!
//! The keyword lists are a tuning surface, not code: extending them is
//! safe, renaming or removing entries changes extraction results for
//! every stored document.

/// Hard skill keywords matched against resume text.
pub const HARD_SKILL_KEYWORDS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust",
    "php", "swift", "kotlin", "scala", "r", "matlab",
    // Frameworks & libraries
    "react", "vue", "angular", "django", "flask", "fastapi", "spring", "node.js",
    "express", "laravel", "rails", ".net", "tensorflow", "pytorch", "keras",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "oracle",
    "cassandra", "dynamodb", "sqlite",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "gitlab", "github",
    "terraform", "ansible", "ci/cd", "linux", "bash",
    // Data & analytics
    "excel", "power bi", "tableau", "data analysis", "machine learning", "deep learning",
    "nlp", "computer vision", "data science", "statistics", "pandas", "numpy",
    // Design & creative
    "photoshop", "illustrator", "figma", "sketch", "adobe xd", "indesign",
    "premiere pro", "after effects", "blender", "3d modeling",
    // Business & management
    "project management", "agile", "scrum", "jira", "confluence", "crm", "erp",
    "sap", "salesforce", "hubspot", "ms office", "google workspace",
    // Other technical
    "api", "rest", "graphql", "microservices", "testing", "qa", "selenium",
    "git", "version control", "networking", "security", "encryption",
];

/// Soft skill keywords matched against resume text.
pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "critical thinking",
    "creativity", "adaptability", "time management", "emotional intelligence",
    "collaboration", "interpersonal", "presentation", "negotiation", "conflict resolution",
    "decision making", "strategic thinking", "innovation", "mentoring", "coaching",
    "empathy", "active listening", "persuasion", "networking", "work ethic",
    "attention to detail", "organization", "multitasking", "stress management",
    "customer service", "public speaking", "writing", "analytical", "self-motivated",
];
