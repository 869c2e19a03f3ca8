//! Ideal local-SEO sitemap generation
//!
//! The ideal sitemap is rules-based: foundational trust pages, a services hub
//! with one page per service, a locations hub with one page per city, and one
//! landing page per service × city combination.

use deunicode::deunicode;
use serde::Serialize;

/// URL layout of service × city landing pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UrlPattern {
    /// `/{city}/{service}/`
    #[default]
    CityService,
    /// `/{service}/{city}/`
    ServiceCity,
}

/// Kind of page in the ideal sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    Base,
    Hub,
    Service,
    City,
    ServiceCity,
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Hub => "hub",
            Self::Service => "service",
            Self::City => "city",
            Self::ServiceCity => "service-city",
        };
        write!(f, "{}", name)
    }
}

/// One recommended page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdealPage {
    pub label: String,
    pub path: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    pub priority: u8,
    pub reason: String,
}

impl IdealPage {
    fn new(label: impl Into<String>, path: impl Into<String>, page_type: PageType) -> Self {
        let (priority, reason) = match page_type {
            PageType::Base => (40, "Foundational trust & navigation pages"),
            PageType::Hub => (60, "Hub page for internal linking"),
            PageType::Service => (70, "Core service landing page"),
            PageType::City => (65, "City/location landing page"),
            PageType::ServiceCity => (100, "Highest impact for local SEO intent"),
        };

        Self {
            label: label.into(),
            path: path.into(),
            page_type,
            priority,
            reason: reason.to_string(),
        }
    }

    fn with_reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }
}

const BASE_PAGES: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about/"),
    ("Contact", "/contact/"),
    ("Testimonials", "/testimonials/"),
    ("FAQ", "/faq/"),
    ("Blog", "/blog/"),
];

/// Builds the ideal sitemap for a business
///
/// # Example
///
/// ```
/// use sitegap::ideal::{build_ideal_sitemap, UrlPattern};
///
/// let services = vec!["Drain Cleaning".to_string()];
/// let cities = vec!["Carmel".to_string()];
/// let pages = build_ideal_sitemap(&services, &cities, UrlPattern::CityService);
///
/// assert!(pages.iter().any(|p| p.path == "/carmel/drain-cleaning/"));
/// ```
pub fn build_ideal_sitemap(
    services: &[String],
    cities: &[String],
    pattern: UrlPattern,
) -> Vec<IdealPage> {
    let mut pages: Vec<IdealPage> = BASE_PAGES
        .iter()
        .map(|(label, path)| IdealPage::new(*label, *path, PageType::Base))
        .collect();

    if !services.is_empty() {
        pages.push(
            IdealPage::new("Services", "/services/", PageType::Hub)
                .with_reason("Hub for all services (internal linking)"),
        );
        for service in services {
            pages.push(IdealPage::new(
                service.as_str(),
                format!("/services/{}/", slugify(service)),
                PageType::Service,
            ));
        }
    }

    if !cities.is_empty() {
        pages.push(
            IdealPage::new("Locations", "/locations/", PageType::Hub)
                .with_reason("Hub for all cities (internal linking)"),
        );
        for city in cities {
            pages.push(IdealPage::new(
                city.as_str(),
                format!("/locations/{}/", slugify(city)),
                PageType::City,
            ));
        }
    }

    for service in services {
        let service_slug = slugify(service);
        for city in cities {
            let city_slug = slugify(city);
            let path = match pattern {
                UrlPattern::CityService => format!("/{}/{}/", city_slug, service_slug),
                UrlPattern::ServiceCity => format!("/{}/{}/", service_slug, city_slug),
            };
            pages.push(IdealPage::new(
                format!("{} in {}", service, city),
                path,
                PageType::ServiceCity,
            ));
        }
    }

    pages
}

/// Converts a label into a URL slug
///
/// Non-ASCII text is transliterated first (`Cañon` becomes `canon`). ASCII
/// apostrophes separate words; typographic ones are dropped. Every other run
/// of characters that are not ASCII letters or digits collapses into a
/// single `-`, except a comma between digits (`1,000` becomes `1000`).
///
/// ```
/// use sitegap::ideal::slugify;
///
/// assert_eq!(slugify("Water Heater Repair"), "water-heater-repair");
/// assert_eq!(slugify("  St. Louis, MO "), "st-louis-mo");
/// assert_eq!(slugify("Joe's Plumbing & Drain"), "joe-s-plumbing-drain");
/// assert_eq!(slugify("Cañon City"), "canon-city");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(&text.replace('\'', "-"));
    let chars: Vec<char> = ascii.chars().collect();

    let mut slug = String::with_capacity(chars.len());
    let mut pending_dash = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '\'' || is_digit_separator(&chars, i) {
            continue;
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn is_digit_separator(chars: &[char], i: usize) -> bool {
    chars[i] == ','
        && i > 0
        && chars[i - 1].is_ascii_digit()
        && chars.get(i + 1).is_some_and(char::is_ascii_digit)
}

/// Splits free-form list input on commas, semicolons and newlines
///
/// ```
/// use sitegap::ideal::split_list;
///
/// assert_eq!(split_list("Carmel, Fishers;\nZionsville ,,"), vec!["Carmel", "Fishers", "Zionsville"]);
/// ```
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
