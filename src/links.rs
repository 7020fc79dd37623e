/// Height of the fixed navigation bar plus some breathing room, in px.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Experience",
        target: "experience",
    },
    NavItem {
        label: "Skills",
        target: "skills",
    },
    NavItem {
        label: "Projects",
        target: "projects",
    },
    NavItem {
        label: "Contact",
        target: "contact",
    },
];

/// A link with nothing behind it: empty, a bare `#`, or a scheme with no
/// payload such as `mailto:` or `https://`.
pub fn is_dead_link(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href == "#" {
        return true;
    }
    match href.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => {
            rest.trim_start_matches('/').trim().is_empty()
        }
        _ => false,
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub const MAINTENANCE_NOTICE: &str =
    "COMMUNICATION LINK UNDER MAINTENANCE. PLEASE TRY ANOTHER CHANNEL.";

/// What a click on an outbound link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClick {
    Follow,
    /// Swallow the click and show this advisory instead.
    Notify(&'static str),
}

pub fn link_click(href: &str) -> LinkClick {
    if is_dead_link(href) {
        LinkClick::Notify(MAINTENANCE_NOTICE)
    } else {
        LinkClick::Follow
    }
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address.trim())
}

pub fn tel(number: &str) -> String {
    format!("tel:{}", number.trim())
}

/// Document scroll offset that puts an element whose top is `element_top`
/// (relative to the viewport) just under the fixed header.
pub fn anchor_scroll_top(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_links() {
        for href in ["", "   ", "#", "mailto:", "tel:", "tel:  ", "https://", "http:"] {
            assert!(is_dead_link(href), "{href:?} should be dead");
        }
    }

    #[test]
    fn test_live_links() {
        for href in [
            "mailto:someone@example.com",
            "tel:+15550100",
            "https://github.com/someone",
            "#skills",
            "/cv",
            "relative/path",
        ] {
            assert!(!is_dead_link(href), "{href:?} should be live");
        }
    }

    #[test]
    fn test_built_links() {
        assert!(is_dead_link(&mailto("")));
        assert!(is_dead_link(&tel(" ")));
        assert_eq!(mailto("a@b.c"), "mailto:a@b.c");
        assert!(!is_dead_link(&tel("+1 555")));
    }

    #[test]
    fn test_empty_profile_urls_are_intercepted() {
        for href in ["", "https://", mailto("").as_str(), tel("").as_str()] {
            assert_eq!(link_click(href), LinkClick::Notify(MAINTENANCE_NOTICE));
        }
        assert_eq!(
            link_click("https://www.linkedin.com/in/someone"),
            LinkClick::Follow
        );
        assert_eq!(link_click(&mailto("a@b.c")), LinkClick::Follow);
    }

    #[test]
    fn test_anchor_scroll_top() {
        // section 500px below the viewport top, page already scrolled 200px
        assert_eq!(anchor_scroll_top(500.0, 200.0, HEADER_OFFSET), 620.0);
        // section above the viewport
        assert_eq!(anchor_scroll_top(-300.0, 1000.0, HEADER_OFFSET), 620.0);
        // never scroll past the top
        assert_eq!(anchor_scroll_top(10.0, 0.0, HEADER_OFFSET), 0.0);
    }

    #[test]
    fn test_nav_items() {
        let hrefs: Vec<_> = NAV_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, ["#experience", "#skills", "#projects", "#contact"]);
    }
}
