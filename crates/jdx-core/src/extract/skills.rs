//! Skill extraction against a closed technology vocabulary.

use std::collections::BTreeSet;

use super::FieldExtractor;

/// Skill and technology terms recognised in job descriptions.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages & platforms
    "php", "laravel", "symfony", "cake", "java", "spring", "spring boot", "python", "django",
    "flask", "nodejs", "node.js", "typescript", "javascript", "react", "reactjs", "next.js",
    "vue", "vuejs", ".net", ".net core", "c#", "c/c++", "c++", "kotlin", "swift",
    "salesforce", "apex", "soql", "lwc", "apex trigger",
    // Mobile, embedded, OS
    "android", "ios", "aosp", "linux", "kernel", "hal", "bootloader",
    // DevOps & cloud
    "aws", "azure", "gcp", "docker", "kubernetes", "k8s", "terraform", "ansible", "gitlab ci",
    "jenkins", "argocd", "cicd", "ci/cd",
    // Data, messaging, cache
    "postgresql", "mysql", "mssql", "oracle", "redis", "mongodb", "kafka", "rabbitmq", "hdfs",
    "spark",
    // Web, API, protocols
    "rest", "restful", "graphql", "grpc", "websocket", "oauth 2.0", "openid connect", "saml",
    // QA & testing
    "selenium", "cypress", "robot framework", "jest", "junit", "postman", "rest assured",
    "unit test",
    // Tools & tracking
    "jira", "svn", "git", "github", "gitlab", "datadog", "prometheus", "grafana",
    // Architecture & patterns
    "microservices", "microservice", "event-driven", "eda", "soa", "ddd",
    "clean architecture", "solid",
    // BI & ML
    "power bi", "pytorch", "tensorflow",
    // Security
    "owasp", "mitre att&ck", "siem", "soar", "waf", "xdr", "edr",
];

/// Skill extractor.
pub struct SkillExtractor;

impl SkillExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SkillExtractor {
    type Output = Vec<String>;

    fn no_match(&self) -> Self::Output {
        Vec::new()
    }

    fn extract_lowered(&self, text: &str) -> Self::Output {
        let found: BTreeSet<&str> = SKILL_VOCABULARY
            .iter()
            .copied()
            .filter(|term| contains_term(text, term))
            .collect();

        found.into_iter().map(str::to_string).collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `term` occurs in `text` as a whole token: the characters on
/// either side of some occurrence are not letters, digits or `_`.
fn contains_term(text: &str, term: &str) -> bool {
    let mut from = 0;

    while let Some(offset) = text[from..].find(term) {
        let start = from + offset;
        let end = start + term.len();

        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
            return true;
        }

        // Step one char so overlapping occurrences are still tried.
        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }

    false
}
