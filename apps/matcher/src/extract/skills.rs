//! Keyword scan for common technical skills in résumé text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Known skill vocabulary, lower-case. Multi-word entries match as phrases.
const COMMON_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "c#", "c++", "go", "rust", "typescript", "php", "ruby",
    "swift", "kotlin", "scala", "r", "matlab", "sql",
    // Cloud platforms
    "azure", "aws", "gcp", "google cloud", "alibaba cloud",
    // DevOps & infrastructure
    "docker", "kubernetes", "terraform", "ansible", "jenkins", "gitlab", "github", "ci/cd",
    "devops", "linux", "windows", "bash", "shell",
    // Databases
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "cassandra", "dynamodb",
    "snowflake", "bigquery", "oracle", "sql server",
    // ML & AI
    "machine learning", "deep learning", "neural networks", "tensorflow", "pytorch",
    "scikit-learn", "keras", "nlp", "computer vision", "llm", "langchain", "semantic kernel",
    "autogen", "transformers",
    // Frameworks & libraries
    "react", "angular", "vue", "fastapi", "django", "flask", "spring", "express", "node",
    "nextjs", ".net", "asp.net", "microservices",
    // Data & analytics
    "data science", "analytics", "spark", "hadoop", "etl", "tableau", "power bi", "pandas",
    "numpy", "scipy",
    // Other
    "rest api", "graphql", "serverless", "lambda", "git", "jira", "agile", "scrum", "soap",
    "websocket", "rabbitmq", "kafka", "grpc", "protobuf",
];

/// One pattern per skill. A skill must not be glued to a neighbouring
/// word character, so "r" does not fire inside "docker".
static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_SKILLS
        .iter()
        .map(|&skill| {
            let pattern = format!(
                r"(?:^|[^a-z0-9+#.]){}(?:$|[^a-z0-9+#])",
                regex::escape(skill)
            );
            (skill, Regex::new(&pattern).expect("static skill pattern"))
        })
        .collect()
});

/// Returns every known skill mentioned in `text`, lower-cased and sorted.
/// An empty set means nothing recognizable was found.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let text = text.to_lowercase();
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&text))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_case_insensitive_skills() {
        let skills = extract_skills("Senior PYTHON engineer. Docker, Kubernetes and AWS daily.");
        for expected in ["python", "docker", "kubernetes", "aws"] {
            assert!(skills.contains(expected), "missing {expected}: {skills:?}");
        }
    }

    #[test]
    fn test_short_skills_need_word_boundaries() {
        let skills = extract_skills("Docker and Terraform on Linux");
        assert!(!skills.contains("r"));
        assert!(!skills.contains("go"));

        let skills = extract_skills("Statistics in R, services in Go.");
        assert!(skills.contains("r"));
        assert!(skills.contains("go"));
    }

    #[test]
    fn test_phrases_and_symbols() {
        let skills = extract_skills("Machine Learning with C++ and C#; ASP.NET backends; CI/CD");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("c++"));
        assert!(skills.contains("c#"));
        assert!(skills.contains("asp.net"));
        assert!(skills.contains("ci/cd"));
        assert!(!skills.contains(".net"));
    }

    #[test]
    fn test_trailing_punctuation_allowed() {
        let skills = extract_skills("I write rust.");
        assert!(skills.contains("rust"));
    }

    #[test]
    fn test_nothing_found_is_empty() {
        assert!(extract_skills("Gardening and pottery enthusiast").is_empty());
        assert!(extract_skills("").is_empty());
    }
}
