//! Static category route registry.
//!
//! Category pages are routed by path segments after the language prefix
//! (`/{lang}/nepal/politics` → key `nepal/politics`). The registry is the
//! single source of truth for which paths exist: resolution is an exact
//! match on the joined key, never a prefix match, so `nepal/unknown` is a
//! 404 even though `nepal` itself resolves.
//!
//! The registry is built once at startup and injected through application
//! state rather than read from a global, but the entry set itself is
//! compile-time data: navigation and the database category table are
//! expected to stay in sync with it.

use std::collections::HashMap;

use crate::locale::{localized, Lang};

/// How a resolved route is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A data-backed post listing for the category.
    Listing,
    /// A fixed media page ("coming soon" or the media index), no listing
    /// query.
    Media,
}

/// One registry entry: a routable category or subcategory page.
#[derive(Debug, Clone)]
pub struct CategoryRoute {
    /// Full path key, e.g. `nepal/politics`.
    pub path: &'static str,
    pub name_en: &'static str,
    pub name_ne: &'static str,
    /// For subcategories, the top-level slug used for the breadcrumb's
    /// middle link.
    pub parent_slug: Option<&'static str>,
    pub kind: RouteKind,
}

impl CategoryRoute {
    /// Localized display name.
    pub fn name(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ne => self.name_ne,
            Lang::En => self.name_en,
        }
    }

    /// The slug used to filter the post listing query: the most specific
    /// path segment (`nepal/politics` queries by `politics`).
    pub fn query_slug(&self) -> &'static str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }

    /// Fixed page descriptor for [`RouteKind::Media`] routes: the media
    /// index links to its subsections; the subsections themselves are
    /// coming-soon pages. `None` for listing routes.
    pub fn media_page(&self, lang: Lang) -> Option<MediaPage> {
        if self.kind != RouteKind::Media {
            return None;
        }
        let page = match self.path {
            "media/watch" => MediaPage {
                kind: MediaPageKind::ComingSoon,
                subtitle: localized(
                    lang,
                    Some("Video news and content"),
                    Some("भिडियो समाचार र सामग्री"),
                )
                .to_string(),
                message: Some(
                    localized(
                        lang,
                        Some("Video content will be available soon."),
                        Some("भिडियो सामग्री छिट्टै उपलब्ध हुनेछ।"),
                    )
                    .to_string(),
                ),
            },
            "media/listen" => MediaPage {
                kind: MediaPageKind::ComingSoon,
                subtitle: localized(
                    lang,
                    Some("Audio news and podcasts"),
                    Some("अडियो समाचार र पोडकास्ट"),
                )
                .to_string(),
                message: Some(
                    localized(
                        lang,
                        Some("Audio content will be available soon."),
                        Some("अडियो सामग्री छिट्टै उपलब्ध हुनेछ।"),
                    )
                    .to_string(),
                ),
            },
            _ => MediaPage {
                kind: MediaPageKind::Index,
                subtitle: localized(
                    lang,
                    Some("Video and audio content"),
                    Some("भिडियो र अडियो सामग्री"),
                )
                .to_string(),
                message: None,
            },
        };
        Some(page)
    }
}

/// Which fixed media page a `Media` route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaPageKind {
    /// The media index, linking to the Watch and Listen subsections.
    Index,
    /// A coming-soon placeholder for a subsection.
    ComingSoon,
}

/// Localized descriptor for a fixed media page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MediaPage {
    pub kind: MediaPageKind,
    pub subtitle: String,
    /// Coming-soon body text; absent on the index page.
    pub message: Option<String>,
}

/// One breadcrumb link.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Entry table: `(path, name_en, name_ne, parent_slug, kind)`.
///
/// Every main category and subcategory the navigation exposes must appear
/// here, or its route produces a not-found page.
const ROUTES: &[(&str, &str, &str, Option<&str>, RouteKind)] = &[
    // Main categories
    ("nepal", "Nepal", "नेपाल", None, RouteKind::Listing),
    ("world", "World", "विश्व", None, RouteKind::Listing),
    ("politics", "Politics", "राजनीति", None, RouteKind::Listing),
    ("economy", "Economy", "अर्थतन्त्र", None, RouteKind::Listing),
    ("business", "Business", "व्यवसाय", None, RouteKind::Listing),
    ("climate", "Climate", "जलवायु", None, RouteKind::Listing),
    ("science", "Science", "विज्ञान", None, RouteKind::Listing),
    ("opinion", "Opinion", "विचार", None, RouteKind::Listing),
    ("media", "Media", "मिडिया", None, RouteKind::Media),
    // Nepal subcategories
    ("nepal/politics", "Politics", "राजनीति", Some("nepal"), RouteKind::Listing),
    ("nepal/economy", "Economy", "अर्थतन्त्र", Some("nepal"), RouteKind::Listing),
    ("nepal/opinion", "Opinion", "विचार", Some("nepal"), RouteKind::Listing),
    ("nepal/technology", "Technology", "प्रविधि", Some("nepal"), RouteKind::Listing),
    ("nepal/lifestyle", "Lifestyle", "जीवनशैली", Some("nepal"), RouteKind::Listing),
    // World subcategories
    ("world/asia", "Asia", "एशिया", Some("world"), RouteKind::Listing),
    ("world/europe", "Europe", "युरोप", Some("world"), RouteKind::Listing),
    ("world/americas", "Americas", "अमेरिका", Some("world"), RouteKind::Listing),
    ("world/middle-east", "Middle East", "मध्यपूर्व", Some("world"), RouteKind::Listing),
    ("world/africa", "Africa", "अफ्रिका", Some("world"), RouteKind::Listing),
    (
        "world/global-institutions",
        "Global Institutions",
        "विश्व संस्था",
        Some("world"),
        RouteKind::Listing,
    ),
    // Media subcategories
    ("media/watch", "Watch", "हेर्नुहोस्", None, RouteKind::Media),
    ("media/listen", "Listen", "सुन्नुहोस्", None, RouteKind::Media),
];

/// Exact-match lookup table from path keys to category page metadata.
#[derive(Debug)]
pub struct CategoryRegistry {
    entries: HashMap<&'static str, CategoryRoute>,
}

impl CategoryRegistry {
    /// Build the registry from the compiled-in route table.
    pub fn builtin() -> Self {
        let entries = ROUTES
            .iter()
            .map(|&(path, name_en, name_ne, parent_slug, kind)| {
                (
                    path,
                    CategoryRoute {
                        path,
                        name_en,
                        name_ne,
                        parent_slug,
                        kind,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Resolve ordered path segments to a route, or `None` (a page-level
    /// 404) when the joined key has no entry.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<&CategoryRoute> {
        if segments.is_empty() {
            return None;
        }
        let key = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        self.resolve_path(&key)
    }

    /// Resolve an already-joined path key.
    pub fn resolve_path(&self, path: &str) -> Option<&CategoryRoute> {
        self.entries.get(path)
    }

    /// Build the breadcrumb trail for a resolved route:
    /// `Home → Parent → Current` for subcategories, `Home → Current` for
    /// top-level categories. The final crumb links to the route itself.
    pub fn breadcrumb(&self, route: &CategoryRoute, lang: Lang) -> Vec<Crumb> {
        let home_label = localized(lang, Some("Home"), Some("गृहपृष्ठ"));
        let mut trail = vec![Crumb {
            label: home_label.to_string(),
            href: format!("/{lang}"),
        }];

        if let Some(parent) = route.parent_slug.and_then(|slug| self.resolve_path(slug)) {
            trail.push(Crumb {
                label: parent.name(lang).to_string(),
                href: format!("/{lang}/{}", parent.path),
            });
        }

        trail.push(Crumb {
            label: route.name(lang).to_string(),
            href: format!("/{lang}/{}", route.path),
        });
        trail
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- resolve -------------------------------------------------------------

    #[test]
    fn resolves_top_level_category() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["nepal"]).expect("nepal should resolve");
        assert_eq!(route.name_en, "Nepal");
        assert_eq!(route.parent_slug, None);
        assert_eq!(route.kind, RouteKind::Listing);
    }

    #[test]
    fn resolves_subcategory_with_parent() {
        let registry = CategoryRegistry::builtin();
        let route = registry
            .resolve(&["nepal", "politics"])
            .expect("nepal/politics should resolve");
        assert_eq!(route.name_en, "Politics");
        assert_eq!(route.name_ne, "राजनीति");
        assert_eq!(route.parent_slug, Some("nepal"));
    }

    #[test]
    fn unknown_path_is_not_found_even_with_valid_prefix() {
        let registry = CategoryRegistry::builtin();
        assert!(registry.resolve(&["nepal", "unknown"]).is_none());
        assert!(registry.resolve(&["nepal", "politics", "extra"]).is_none());
        assert!(registry.resolve::<&str>(&[]).is_none());
    }

    #[test]
    fn media_routes_are_marked() {
        let registry = CategoryRegistry::builtin();
        assert_eq!(registry.resolve(&["media"]).map(|r| r.kind), Some(RouteKind::Media));
        assert_eq!(
            registry.resolve(&["media", "watch"]).map(|r| r.kind),
            Some(RouteKind::Media)
        );
        assert_eq!(
            registry.resolve(&["media", "listen"]).map(|r| r.kind),
            Some(RouteKind::Media)
        );
    }

    #[test]
    fn query_slug_is_most_specific_segment() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["world", "middle-east"]).unwrap();
        assert_eq!(route.query_slug(), "middle-east");
        let top = registry.resolve(&["economy"]).unwrap();
        assert_eq!(top.query_slug(), "economy");
    }

    // -- media pages ---------------------------------------------------------

    #[test]
    fn media_index_links_to_subsections() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["media"]).unwrap();
        let page = route.media_page(Lang::En).expect("media page");
        assert_eq!(page.kind, MediaPageKind::Index);
        assert_eq!(page.subtitle, "Video and audio content");
        assert_eq!(page.message, None);
    }

    #[test]
    fn media_subsections_are_coming_soon() {
        let registry = CategoryRegistry::builtin();

        let watch = registry.resolve(&["media", "watch"]).unwrap();
        let page = watch.media_page(Lang::Ne).expect("watch page");
        assert_eq!(page.kind, MediaPageKind::ComingSoon);
        assert_eq!(page.subtitle, "भिडियो समाचार र सामग्री");
        assert_eq!(
            page.message.as_deref(),
            Some("भिडियो सामग्री छिट्टै उपलब्ध हुनेछ।")
        );

        let listen = registry.resolve(&["media", "listen"]).unwrap();
        let page = listen.media_page(Lang::En).expect("listen page");
        assert_eq!(page.kind, MediaPageKind::ComingSoon);
        assert_eq!(page.subtitle, "Audio news and podcasts");
        assert_eq!(
            page.message.as_deref(),
            Some("Audio content will be available soon.")
        );
    }

    #[test]
    fn listing_routes_have_no_media_page() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["nepal"]).unwrap();
        assert!(route.media_page(Lang::En).is_none());
    }

    // -- breadcrumb ----------------------------------------------------------

    #[test]
    fn subcategory_breadcrumb_is_home_parent_current() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["nepal", "politics"]).unwrap();

        let trail = registry.breadcrumb(route, Lang::En);
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Nepal", "Politics"]);
        assert_eq!(trail[1].href, "/en/nepal");
        assert_eq!(trail[2].href, "/en/nepal/politics");
    }

    #[test]
    fn breadcrumb_localizes_labels() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["nepal", "politics"]).unwrap();

        let trail = registry.breadcrumb(route, Lang::Ne);
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["गृहपृष्ठ", "नेपाल", "राजनीति"]);
        assert_eq!(trail[0].href, "/ne");
    }

    #[test]
    fn top_level_breadcrumb_has_no_parent() {
        let registry = CategoryRegistry::builtin();
        let route = registry.resolve(&["world"]).unwrap();
        let trail = registry.breadcrumb(route, Lang::En);
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Home", "World"]);
    }
}
