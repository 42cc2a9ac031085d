//! Domain annotation of hyperlinks
//!
//! Scans rendered HTML for absolute links and appends the link's domain
//! after every anchor whose visible text does not already mention it.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a whole anchor element pointing to an absolute URL
const LINK_PATTERN: &str =
    r#"(?i)<a\s[^>]*?href="[a-z0-9]+:///?[a-z0-9\-_.@]+.*?"[^>]*?>[^<]*?</a>"#;

/// Same shape as `LINK_PATTERN`, capturing the domain and the link text
const LINK_PARTS_PATTERN: &str =
    r#"(?i)<a\s[^>]*?href="[a-z0-9]+:///?([a-z0-9\-_.@]+).*?"[^>]*?>([^<]*?)</a>"#;

static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
static LINK_PARTS_REGEX: OnceLock<Regex> = OnceLock::new();

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| Regex::new(LINK_PATTERN).expect("invalid link pattern"))
}

fn link_parts_regex() -> &'static Regex {
    LINK_PARTS_REGEX
        .get_or_init(|| Regex::new(LINK_PARTS_PATTERN).expect("invalid link parts pattern"))
}

/// A piece of the scanned document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Markup or text between links, copied through as is
    Text(&'a str),
    /// A complete `<a ...>...</a>` element
    Link(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Text(s) | Segment::Link(s) => s,
        }
    }
}

/// Parts of an anchor element relevant for annotation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub full_tag: &'a str,
    pub domain: &'a str,
    pub visible_text: &'a str,
}

/// Splits `html` into interleaved text and link segments, in document order.
///
/// Empty text runs between adjacent links are kept so that the segments
/// always alternate, starting and ending with `Segment::Text`.
pub fn split_links(html: &str) -> Vec<Segment<'_>> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut last_end: usize = 0;

    for link in link_regex().find_iter(html) {
        segments.push(Segment::Text(&html[last_end..link.start()]));
        segments.push(Segment::Link(link.as_str()));
        last_end = link.end();
    }
    segments.push(Segment::Text(&html[last_end..]));

    segments
}

/// Extracts domain and link text from the first anchor element found in `segment`
pub fn extract_link(segment: &str) -> Option<LinkMatch<'_>> {
    let caps = link_parts_regex().captures(segment)?;

    Some(LinkMatch {
        full_tag: caps.get(0)?.as_str(),
        domain: caps.get(1)?.as_str(),
        visible_text: caps.get(2)?.as_str(),
    })
}

/// Strips a leading "www." (lowercase only)
pub fn clean_domain(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}

/// Markup appended after an annotated anchor, including the separating space
pub fn annotation_for(domain: &str) -> String {
    format!(" <span class=\"domain\">({})</span>", domain)
}

/// Annotates every absolute link in `html` whose text does not mention its domain
///
/// # Arguments
///
/// * `html` - Rendered HTML fragment
///
/// # Returns
///
/// The fragment with `<span class="domain">(...)</span>` inserted after each
/// qualifying `</a>`. Anything that doesn't match passes through untouched.
pub fn annotate(html: &str) -> String {
    let mut result = String::with_capacity(html.len());

    for segment in split_links(html) {
        let part = segment.as_str();

        match extract_link(part) {
            Some(link) if !link.visible_text.contains(clean_domain(link.domain)) => {
                tracing::debug!("Annotating domain: {}", link.domain);
                result.push_str(link.full_tag);
                result.push_str(&annotation_for(link.domain));
            }
            _ => result.push_str(part),
        }
    }

    result
}
