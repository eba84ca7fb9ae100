use crate::categorize::Category;
use serde::{Deserialize, Serialize};

/// Categorized scan output.
///
/// This is the shape of the JSON artifact: one key per category, every
/// bucket present even when empty, URLs in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub js: Vec<String>,
    pub api: Vec<String>,
    pub admin: Vec<String>,
    pub redirects: Vec<String>,
    pub configs: Vec<String>,
    pub other: Vec<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, url: String) {
        self.bucket_mut(category).push(url);
    }

    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Js => &self.js,
            Category::Api => &self.api,
            Category::Admin => &self.admin,
            Category::Redirects => &self.redirects,
            Category::Configs => &self.configs,
            Category::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Js => &mut self.js,
            Category::Api => &mut self.api,
            Category::Admin => &mut self.admin,
            Category::Redirects => &mut self.redirects,
            Category::Configs => &mut self.configs,
            Category::Other => &mut self.other,
        }
    }

    /// Append every bucket of `other` onto this set, preserving order.
    pub fn merge(&mut self, other: ResultSet) {
        self.js.extend(other.js);
        self.api.extend(other.api);
        self.admin.extend(other.admin);
        self.redirects.extend(other.redirects);
        self.configs.extend(other.configs);
        self.other.extend(other.other);
    }

    /// Per-category URL counts, in category order.
    pub fn counts(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .iter()
            .map(|category| (*category, self.bucket(*category).len()))
    }

    pub fn total(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.bucket(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
