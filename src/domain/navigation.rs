/// A header tab pointing at one of the server's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const HOME_PATH: &str = "/";
pub const NUMBERS_PATH: &str = "/admin/numbers";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "home",
        path: HOME_PATH,
    },
    NavLink {
        label: "about",
        path: "/about",
    },
    NavLink {
        label: "changelog",
        path: "/changelog",
    },
    NavLink {
        label: "messages",
        path: "/admin/messages",
    },
    NavLink {
        label: "numbers",
        path: NUMBERS_PATH,
    },
];

/// A link is active when its text is `home` and we are at the root, or when
/// the current path ends with its text.
pub fn is_active(label: &str, current_path: &str) -> bool {
    (label == "home" && current_path == HOME_PATH) || current_path.ends_with(label)
}

/// Index of the first active link, if any.
pub fn active_index(links: &[NavLink], current_path: &str) -> Option<usize> {
    links
        .iter()
        .position(|link| is_active(link.label, current_path))
}

/// Link `offset` steps away from the current one, wrapping around.
pub fn cycle(links: &[NavLink], current_path: &str, offset: isize) -> Option<NavLink> {
    if links.is_empty() {
        return None;
    }
    let len = links.len() as isize;
    let current = active_index(links, current_path).map_or(-1, |i| i as isize);
    let next = if current < 0 && offset < 0 {
        len - 1
    } else {
        (current + offset).rem_euclid(len)
    };
    links.get(next as usize).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Console,
    Numbers,
    Text,
}

pub fn page_kind(path: &str) -> PageKind {
    match path {
        HOME_PATH | "" => PageKind::Console,
        p if p.trim_end_matches('/') == NUMBERS_PATH => PageKind::Numbers,
        _ => PageKind::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_active_on_root() {
        assert!(is_active("home", "/"));
        assert!(!is_active("about", "/"));
        assert!(!is_active("home", "/about"));
    }

    #[test]
    fn test_trailing_segment_marks_link_active() {
        assert!(is_active("numbers", "/admin/numbers"));
        assert!(is_active("messages", "/admin/messages"));
        assert!(!is_active("numbers", "/admin/messages"));
        assert!(!is_active("changelog", "/about"));
    }

    #[test]
    fn test_only_matching_links_are_marked() {
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|l| is_active(l.label, "/changelog"))
            .map(|l| l.label)
            .collect();
        assert_eq!(active, vec!["changelog"]);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(NAV_LINKS, "/", 1).unwrap().label, "about");
        assert_eq!(cycle(NAV_LINKS, "/", -1).unwrap().label, "numbers");
        assert_eq!(cycle(NAV_LINKS, "/admin/numbers", 1).unwrap().label, "home");
        assert_eq!(cycle(NAV_LINKS, "/nowhere", 1).unwrap().label, "home");
        assert_eq!(cycle(NAV_LINKS, "/nowhere", -1).unwrap().label, "numbers");
        assert!(cycle(&[], "/", 1).is_none());
    }

    #[test]
    fn test_page_kind() {
        assert_eq!(page_kind("/"), PageKind::Console);
        assert_eq!(page_kind("/admin/numbers"), PageKind::Numbers);
        assert_eq!(page_kind("/admin/numbers/"), PageKind::Numbers);
        assert_eq!(page_kind("/about"), PageKind::Text);
    }
}
