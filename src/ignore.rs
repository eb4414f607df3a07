//! Ignore rules for tree building.
//!
//! Patterns come from a single file at the project root: `.projectignore`
//! when it exists, otherwise `.gitignore`. A missing or unreadable file
//! means no patterns. Every trimmed, non-empty line becomes one pattern.
//! Lines starting with `#` are kept as patterns rather than stripped as
//! comments; the matcher treats them as inert, so they never exclude
//! anything.

use crate::config::SummaryConfig;
use crate::tree::fs::FileSystem;
use globset::{ErrorKind, GlobBuilder, GlobMatcher};
use std::fmt;
use tracing::{debug, warn};

/// Which file the ignore patterns were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreSource {
    ProjectIgnore,
    GitIgnore,
    None,
}

impl fmt::Display for IgnoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreSource::ProjectIgnore => write!(f, "project ignore file"),
            IgnoreSource::GitIgnore => write!(f, "version-control ignore file"),
            IgnoreSource::None => write!(f, "none"),
        }
    }
}

/// Split ignore file contents into patterns.
///
/// Handles both `\n` and `\r\n` line endings. Blank lines are dropped;
/// nothing else is filtered.
pub fn parse_ignore_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load ignore patterns for a project.
///
/// Never fails: a missing or unreadable ignore file yields no patterns.
pub fn load_ignore_patterns(fs: &dyn FileSystem, config: &SummaryConfig) -> IgnorePatterns {
    let candidates = [
        (&config.project_ignore_file, IgnoreSource::ProjectIgnore),
        (&config.vcs_ignore_file, IgnoreSource::GitIgnore),
    ];

    for (file_name, source) in candidates {
        let path = config.root.join(file_name);
        if !fs.exists(&path) {
            continue;
        }
        return match fs.read_text(&path) {
            Ok(contents) => {
                let patterns = parse_ignore_lines(&contents);
                debug!(
                    source = %source,
                    path = %path.display(),
                    pattern_count = patterns.len(),
                    "Loaded ignore patterns"
                );
                IgnorePatterns::new(source, patterns)
            }
            Err(e) => {
                debug!(path = %path.display(), "Ignore file unreadable, using no patterns: {}", e);
                IgnorePatterns::empty()
            }
        };
    }

    debug!("No ignore file found");
    IgnorePatterns::empty()
}

#[derive(Debug, Clone)]
enum Matcher {
    Glob(GlobMatcher),
    /// Pattern that is not a valid glob; compared as plain text.
    Literal(String),
}

#[derive(Debug, Clone)]
struct Rule {
    matcher: Matcher,
    negated: bool,
    /// Directories are matched with their trailing `/` only when the pattern
    /// ends in `/` or `**`; otherwise the bare path is used, so `*` in the
    /// last segment never matches an empty name.
    slash_dirs: bool,
}

impl Rule {
    /// Compile one pattern. `#`-prefixed lines compile to nothing.
    fn compile(pattern: &str) -> Option<Rule> {
        if pattern.starts_with('#') {
            return None;
        }

        let bangs = pattern.chars().take_while(|c| *c == '!').count();
        let negated = bangs % 2 == 1;
        let body = collapse_slashes(&pattern[bangs..]);
        let slash_dirs = body.ends_with('/') || body.ends_with("**");

        let matcher = match compile_glob(&body) {
            Ok(matcher) => Matcher::Glob(matcher),
            Err(e) => {
                warn!(pattern = %pattern, "Invalid glob, matching literally: {}", e);
                Matcher::Literal(body)
            }
        };

        Some(Rule {
            matcher,
            negated,
            slash_dirs,
        })
    }

    fn matches(&self, relative: &str, is_dir: bool) -> bool {
        let candidate = if is_dir && !self.slash_dirs {
            relative.strip_suffix('/').unwrap_or(relative)
        } else {
            relative
        };
        let hit = match &self.matcher {
            Matcher::Glob(matcher) => matcher.is_match(candidate),
            Matcher::Literal(text) => text == candidate,
        };
        hit != self.negated
    }
}

fn build_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
}

/// Compile a glob, treating any `[` that never closes as a literal bracket.
fn compile_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    let mut current = pattern.to_string();
    loop {
        match build_glob(&current) {
            Err(e) if matches!(e.kind(), ErrorKind::UnclosedClass) => {
                match escape_last_bracket(&current) {
                    Some(escaped) => current = escaped,
                    None => return Err(e),
                }
            }
            result => return result,
        }
    }
}

/// Escape the right-most `[` not already preceded by a backslash escape.
fn escape_last_bracket(pattern: &str) -> Option<String> {
    let bytes = pattern.as_bytes();
    let pos = (0..bytes.len()).rev().find(|&i| {
        let backslashes = bytes[..i].iter().rev().take_while(|b| **b == b'\\').count();
        bytes[i] == b'[' && backslashes % 2 == 0
    })?;

    let mut escaped = String::with_capacity(pattern.len() + 1);
    escaped.push_str(&pattern[..pos]);
    escaped.push('\\');
    escaped.push_str(&pattern[pos..]);
    Some(escaped)
}

/// `a//b` is treated as `a/b`.
fn collapse_slashes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Ordered ignore patterns, compiled once per run.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    source: IgnoreSource,
    raw: Vec<String>,
    rules: Vec<Rule>,
}

impl IgnorePatterns {
    pub fn new(source: IgnoreSource, raw: Vec<String>) -> Self {
        let rules = raw.iter().filter_map(|p| Rule::compile(p)).collect();
        Self { source, raw, rules }
    }

    pub fn empty() -> Self {
        Self::new(IgnoreSource::None, Vec::new())
    }

    /// Build patterns directly, without an ignore file behind them.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            IgnoreSource::None,
            patterns.into_iter().map(Into::into).collect(),
        )
    }

    pub fn source(&self) -> IgnoreSource {
        self.source
    }

    /// Patterns exactly as they appeared in the ignore file.
    pub fn patterns(&self) -> &[String] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether any pattern matches a root-relative path.
    ///
    /// `relative` uses `/` separators; directory paths end in `/`. A directory
    /// also matches patterns written without the trailing slash, and `dir/*`
    /// matches only what is inside `dir`, not `dir` itself.
    pub fn matches(&self, relative: &str, is_dir: bool) -> bool {
        self.rules.iter().any(|rule| rule.matches(relative, is_dir))
    }
}
