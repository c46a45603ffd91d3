//! Relative link resolution.
//!
//! Resolution is total: whatever the inputs, a string comes back. Capsules
//! in the wild are full of malformed links, and a broken link is better
//! than a broken page.

use std::fmt::Write;

use url::Url;

use crate::scheme::{has_scheme, is_absolute};

/// Scheme assumed when a target omits it (`://host/path`) or when the base
/// URL cannot be parsed.
pub const FALLBACK_SCHEME: &str = "gemini";

/// Resolves `relative` against `base`.
///
/// Rules, in order:
///
/// 1. `://host/...` is repaired to `gemini://host/...` (a known producer
///    bug, not part of any protocol).
/// 2. Already-absolute targets are returned unchanged.
/// 3. `/path` replaces the whole path of `base`.
/// 4. `./name` is taken relative to the directory of `base`.
/// 5. Each leading `../` drops one directory of `base`, stopping at the root.
/// 6. Anything else is taken relative to the directory of `base`.
///
/// If `base` cannot be parsed, `gemini://` is prepended to scheme-less
/// targets and everything else is returned as given.
#[must_use]
pub fn resolve(base: &str, relative: &str) -> String {
    let relative = repair_scheme(relative);
    if is_absolute(&relative) {
        return relative;
    }

    let Some(base) = Base::parse(base) else {
        tracing::debug!(base, relative = %relative, "Unparseable base URL, using fallback");
        return if has_scheme(&relative) {
            relative
        } else {
            format!("{FALLBACK_SCHEME}://{relative}")
        };
    };

    if relative.starts_with('/') {
        return format!("{}{relative}", base.origin);
    }

    if let Some(rest) = relative.strip_prefix("./") {
        return format!("{}{}{rest}", base.origin, base.directory());
    }

    if relative.starts_with("../") {
        return base.ascend(&relative);
    }

    format!("{}{}{relative}", base.origin, base.directory())
}

/// Prepends the fallback scheme to a target that starts with a bare `://`.
#[must_use]
pub fn repair_scheme(target: &str) -> String {
    if target.starts_with("://") {
        tracing::trace!(link = target, "Repairing scheme-less link target");
        format!("{FALLBACK_SCHEME}{target}")
    } else {
        target.to_string()
    }
}

/// The parts of a base URL that resolution needs.
struct Base {
    /// `scheme://host[:port]`
    origin: String,
    /// Absolute path, always starting with `/`.
    path: String,
}

impl Base {
    /// The path comes back normalized by the `url` crate: dot segments are
    /// removed and spaces and non-ASCII bytes are percent-encoded.
    fn parse(base: &str) -> Option<Self> {
        let url = Url::parse(base).ok()?;
        let host = url.host_str().filter(|h| !h.is_empty())?;

        let mut origin = format!("{}://{host}", url.scheme());
        if let Some(port) = url.port() {
            let _ = write!(origin, ":{port}");
        }

        let path = match url.path() {
            p if p.starts_with('/') => p.to_string(),
            p => format!("/{p}"),
        };

        Some(Self { origin, path })
    }

    /// Path up to and including the last `/`.
    fn directory(&self) -> &str {
        self.path
            .rfind('/')
            .map_or("/", |idx| &self.path[..=idx])
    }

    fn ascend(&self, relative: &str) -> String {
        let mut segments: Vec<&str> = self
            .directory()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let mut rest = relative;
        while let Some(stripped) = rest.strip_prefix("../") {
            // Popping past the root is a no-op.
            segments.pop();
            rest = stripped;
        }

        let mut out = self.origin.clone();
        out.push('/');
        for segment in segments {
            out.push_str(segment);
            out.push('/');
        }
        out.push_str(rest);
        out
    }
}
