use regex::Regex;

/// Semantic bucket a discovered URL is filed under.
///
/// The variants are listed in evaluation order; a URL matching the rules of
/// two categories is filed under the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Js,
    Api,
    Admin,
    Redirects,
    Configs,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Js,
        Category::Api,
        Category::Admin,
        Category::Redirects,
        Category::Configs,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Js => "js",
            Category::Api => "api",
            Category::Admin => "admin",
            Category::Redirects => "redirects",
            Category::Configs => "configs",
            Category::Other => "other",
        }
    }
}

/// Ordered category rules, compiled once at startup and passed by value to
/// whoever classifies. Matching is case-insensitive and unanchored.
pub struct RuleTable {
    rules: Vec<(Category, Vec<Regex>)>,
}

impl RuleTable {
    /// The built-in rule set.
    pub fn builtin() -> Self {
        let rules = vec![
            (
                Category::Js,
                compile(&[r"\.js(\?|$)", r"application/javascript"]),
            ),
            (
                Category::Api,
                compile(&[r"/api/v[0-9]/", r"graphql", r"\.json(\?|$)"]),
            ),
            (
                Category::Admin,
                compile(&[r"admin", r"dashboard", r"login", r"wp-admin"]),
            ),
            (
                Category::Redirects,
                compile(&[r"url=", r"next=", r"redirect="]),
            ),
            (
                Category::Configs,
                compile(&[r"\.env", r"config\.", r"\.git/"]),
            ),
        ];

        Self { rules }
    }

    /// Classify one URL: first category whose any pattern matches wins,
    /// falling back to [`Category::Other`].
    pub fn categorize(&self, url: &str) -> Category {
        for (category, patterns) in &self.rules {
            if patterns.iter().any(|pattern| pattern.is_match(url)) {
                return *category;
            }
        }
        Category::Other
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(&format!("(?i){pattern}")).expect("valid regex"))
        .collect()
}
