//! Static operator catalog.
//!
//! DESIGN
//! ======
//! The catalog is compiled-in reference data: a closed set of categories,
//! each carrying a display title, an icon name, and an ordered list of
//! operator entries. Titles and icons are `match` lookup tables over the
//! closed `Category` enum. Nothing here is ever mutated.

use serde::Serialize;

/// One operator template offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorEntry {
    /// Token prefixed to the shared value, e.g. `site:`.
    pub operator: &'static str,
    pub description: &'static str,
    /// Sample query shown when the entry is hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
}

const fn entry(operator: &'static str, description: &'static str, example: &'static str) -> OperatorEntry {
    OperatorEntry { operator, description, example: Some(example) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    BasicSearch,
    FileSearch,
    Security,
    ExposedData,
    Filters,
    Advanced,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 6] = [
        Category::BasicSearch,
        Category::FileSearch,
        Category::Security,
        Category::ExposedData,
        Category::Filters,
        Category::Advanced,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::BasicSearch => "basicSearch",
            Self::FileSearch => "fileSearch",
            Self::Security => "security",
            Self::ExposedData => "exposedData",
            Self::Filters => "filters",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicSearch => "Basic Search",
            Self::FileSearch => "File Search",
            Self::Security => "Security",
            Self::ExposedData => "Exposed Data",
            Self::Filters => "Filters",
            Self::Advanced => "Advanced",
        }
    }

    /// Icon name understood by the browser form.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::BasicSearch => "search",
            Self::FileSearch => "file-code",
            Self::Security => "shield",
            Self::ExposedData => "database",
            Self::Filters => "file-text",
            Self::Advanced => "terminal",
        }
    }

    #[must_use]
    pub fn entries(self) -> &'static [OperatorEntry] {
        match self {
            Self::BasicSearch => BASIC_SEARCH,
            Self::FileSearch => FILE_SEARCH,
            Self::Security => SECURITY,
            Self::ExposedData => EXPOSED_DATA,
            Self::Filters => FILTERS,
            Self::Advanced => ADVANCED,
        }
    }
}

/// First catalog entry whose token is exactly `operator`.
#[must_use]
pub fn find(operator: &str) -> Option<(Category, &'static OperatorEntry)> {
    Category::ALL
        .into_iter()
        .find_map(|c| c.entries().iter().find(|e| e.operator == operator).map(|e| (c, e)))
}

// =============================================================================
// ENTRIES
// =============================================================================

const BASIC_SEARCH: &[OperatorEntry] = &[
    entry("site:", "Search within a specific domain", "site:github.com hacking"),
    entry("inurl:", "Search for URL containing specific text", "inurl:admin"),
    entry("allinurl:", "URLs containing all specified terms", "allinurl:admin login"),
    entry("inbody:", "Search for text within the body of a page", "inbody:password"),
    entry("intitle:", "Search for pages with specific title", "intitle:\"Index of /\""),
    entry("allintitle:", "Title containing all specified terms", "allintitle:admin dashboard"),
    entry("intext:", "Search within page text", "intext:\"password\""),
    entry("allintext:", "Text containing all specified terms", "allintext:username password"),
];

const FILE_SEARCH: &[OperatorEntry] = &[
    entry("filetype:", "Search for specific file types", "filetype:pdf \"confidential\""),
    entry("ext:", "File extension", "ext:php inurl:admin"),
    entry("cache:", "View Google's cached version", "cache:example.com"),
];

const SECURITY: &[OperatorEntry] = &[
    entry("inurl:admin", "Find admin panels", "inurl:admin intitle:login"),
    entry("inurl:login", "Find login pages", "inurl:login filetype:php"),
    entry("inurl:backup", "Find backup files", "inurl:backup filetype:sql"),
    entry("inurl:wp-content", "WordPress content directory", "inurl:wp-content/uploads"),
    entry("inurl:phpinfo", "Find phpinfo() pages", "inurl:phpinfo.php"),
];

const EXPOSED_DATA: &[OperatorEntry] = &[
    entry("intitle:\"Index of /\"", "Directory listings", "intitle:\"Index of /admin\""),
    entry("inurl:config", "Configuration files", "inurl:config.php"),
    entry("filetype:env", "Environment files", "filetype:env DB_PASSWORD"),
    entry("filetype:log", "Log files", "filetype:log username"),
    entry("intext:\"sql syntax near\"", "SQL error messages", "intext:\"sql syntax near\" intext:warning"),
];

const FILTERS: &[OperatorEntry] = &[
    entry("before:", "Results before date (YYYY-MM-DD)", "before:2023-01-01"),
    entry("after:", "Results after date (YYYY-MM-DD)", "after:2023-01-01"),
    entry("-", "Exclude terms", "-wordpress"),
    entry("OR", "Match either term", "admin OR administrator"),
    entry("AND", "Match both terms", "security AND vulnerability"),
    entry("\"exact phrase\"", "Match exact phrase", "\"secret key\""),
];

const ADVANCED: &[OperatorEntry] = &[
    entry("related:", "Find related websites", "related:github.com"),
    entry("link:", "Find pages linking to URL", "link:example.com"),
    entry("info:", "Information about URL", "info:example.com"),
    entry("location:", "Search specific location", "location:\"San Francisco\""),
    entry("define:", "Show definition", "define:cybersecurity"),
];

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
