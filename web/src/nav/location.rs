/// Snapshot of the router location the bar cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    /// Either empty or starting with `#`.
    pub hash: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, hash: impl Into<String>) -> Self {
        let hash: String = hash.into();
        let hash = if hash.is_empty() || hash == "#" {
            String::new()
        } else if hash.starts_with('#') {
            hash
        } else {
            format!("#{hash}")
        };
        Self {
            pathname: pathname.into(),
            hash,
        }
    }

    pub fn is_home(&self) -> bool {
        self.pathname == "/"
    }
}

/// Splits `href` into the path before the first `#` and the fragment up to
/// the next one, `None` without a `#`.
pub fn split_anchor(href: &str) -> Option<(&str, &str)> {
    let (path, rest) = href.split_once('#')?;
    let fragment = rest.split('#').next().unwrap_or_default();
    Some((path, fragment))
}

/// Whether `href` should be highlighted for the current location.
///
/// The home route only matches exactly (no fragment). Anchor links match on
/// their fragment; a path in front of the `#` must equal the current path,
/// an empty one matches any path.
pub fn is_active_link(href: &str, location: &Location) -> bool {
    if href == "/" {
        return location.is_home() && location.hash.is_empty();
    }

    match split_anchor(href) {
        Some((path, fragment)) => {
            if !path.is_empty() && path != location.pathname {
                return false;
            }
            location.hash.strip_prefix('#') == Some(fragment)
        }
        None => location.pathname == href && location.hash.is_empty(),
    }
}
