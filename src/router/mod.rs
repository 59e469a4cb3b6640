//! Page routing: maps a path or URL fragment onto one of the five pages.

/// A top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Donate,
    Events,
    About,
    Admin,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [Page::Home, Page::Donate, Page::Events, Page::About, Page::Admin];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Donate => "/donate",
            Page::Events => "/events",
            Page::About => "/about",
            Page::Admin => "/admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Donate => "Donate",
            Page::Events => "Events",
            Page::About => "About",
            Page::Admin => "Admin",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|p| p.path() == path)
    }
}

/// A resolved location: the page plus the decoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub query: Vec<(String, String)>,
}

impl Route {
    /// Resolve `#/donate?success=true`, `/donate?success=true` or `/donate`.
    ///
    /// Empty input is the home page; unknown paths fall back to it as well.
    pub fn resolve(raw: &str) -> Self {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let path = if path.is_empty() { "/" } else { path };

        Self {
            page: Page::from_path(path).unwrap_or(Page::Home),
            query: serde_urlencoded::from_str(query).unwrap_or_default(),
        }
    }

    /// True when the query carries `success=true`, in any letter case.
    pub fn payment_succeeded(&self) -> bool {
        self.query.iter().any(|(key, value)| {
            key.eq_ignore_ascii_case("success") && value.eq_ignore_ascii_case("true")
        })
    }

    /// First value of `name` in the query.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
