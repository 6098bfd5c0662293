//! Splitting a path string into its root, directory and base parts.
//!
//! Every derived value in this crate starts here. The parser never
//! allocates: each part is a slice of the input.

use serde::Serialize;

use super::MAIN_SEPARATOR;

const SEP: u8 = MAIN_SEPARATOR as u8;

/// The parsed parts of a path string.
///
/// Two paths are structurally equal when their parts are equal, so
/// `/usr/bin/` and `/usr/bin` compare equal while `./a` and `a` do not.
///
/// # Examples
///
/// ```
/// use pathval::Path;
///
/// let path = Path::new("/home/user/notes.tar.gz");
/// let parts = path.parts();
/// assert_eq!(parts.root(), "/");
/// assert_eq!(parts.dir(), "/home/user");
/// assert_eq!(parts.base(), "notes.tar.gz");
/// assert_eq!(parts.ext(), ".gz");
/// assert_eq!(parts.name(), "notes.tar");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PathParts<'a> {
    root: &'a str,
    dir: &'a str,
    base: &'a str,
    ext: &'a str,
    name: &'a str,
}

impl<'a> PathParts<'a> {
    /// The root separator, or `""` for relative paths.
    #[must_use]
    pub fn root(&self) -> &'a str {
        self.root
    }

    /// Everything before the last segment, without the separator that
    /// precedes it.
    #[must_use]
    pub fn dir(&self) -> &'a str {
        self.dir
    }

    /// The last non-empty segment, ignoring trailing separators.
    #[must_use]
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// The extension of `base` including its leading dot, or `""`.
    #[must_use]
    pub fn ext(&self) -> &'a str {
        self.ext
    }

    /// `base` without `ext`.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }
}

/// How the dots seen so far relate to the rest of the base segment.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DotRun {
    /// No character other than the extension dot precedes it.
    Bare,
    /// Only dots precede the extension dot.
    Dots,
    /// Some non-dot character precedes the extension dot.
    Named,
}

/// Parse a path string into its parts.
pub(crate) fn parse(path: &str) -> PathParts<'_> {
    let bytes = path.as_bytes();
    let mut parts = PathParts::default();
    if bytes.is_empty() {
        return parts;
    }

    let is_absolute = bytes[0] == SEP;
    let start = usize::from(is_absolute);
    if is_absolute {
        parts.root = &path[..1];
    }

    let mut start_dot: Option<usize> = None;
    let mut start_part = 0;
    let mut end: Option<usize> = None;
    let mut run = DotRun::Bare;

    // Scan backwards: skip trailing separators, then stop at the separator
    // that opens the base segment.
    for i in (start..bytes.len()).rev() {
        let byte = bytes[i];
        if byte == SEP {
            if end.is_some() {
                start_part = i + 1;
                break;
            }
            continue;
        }
        if end.is_none() {
            end = Some(i + 1);
        }
        if byte == b'.' {
            if start_dot.is_none() {
                start_dot = Some(i);
            } else if run != DotRun::Dots {
                run = DotRun::Dots;
            }
        } else if start_dot.is_some() {
            run = DotRun::Named;
        }
    }

    let base_start = if start_part == 0 && is_absolute {
        1
    } else {
        start_part
    };

    if let Some(end) = end {
        match start_dot {
            Some(dot) if has_extension(run, dot, end, start_part) => {
                parts.name = &path[base_start..dot];
                parts.base = &path[base_start..end];
                parts.ext = &path[dot..end];
            }
            _ => {
                parts.base = &path[base_start..end];
                parts.name = parts.base;
            }
        }
    }

    parts.dir = if start_part > 0 {
        &path[..start_part - 1]
    } else if is_absolute {
        &path[..1]
    } else {
        ""
    };

    parts
}

fn has_extension(run: DotRun, dot: usize, end: usize, start_part: usize) -> bool {
    match run {
        DotRun::Bare => false,
        // `..` is a parent reference, not an empty name with extension `.`
        DotRun::Dots => !(dot == end - 1 && dot == start_part + 1),
        DotRun::Named => true,
    }
}

/// The directory part of `path` when it has a non-empty base.
///
/// The result is always a prefix slice of `path`.
pub(crate) fn parent_str(path: &str) -> Option<&str> {
    let parts = parse(path);
    if parts.base.is_empty() {
        None
    } else {
        Some(parts.dir)
    }
}
