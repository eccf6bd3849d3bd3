//! Dynamic permalinks built from a permalink structure.

use chrono::Datelike;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use super::url::{is_dot_segment, join_home};
use crate::model::ContentItem;
use crate::ports::permalink::PermalinkLookup;

/// Characters escaped in tag values so a value stays within one path segment.
/// `%` is left alone so already-encoded slugs pass through unchanged.
const TAG_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Expands a permalink structure such as `/%year%/%monthnum%/%postname%/`
/// for each item.
///
/// Supported tags: `%year%`, `%monthnum%`, `%day%`, `%postname%`,
/// `%post_id%`. Unknown tags are left as written. An empty structure means
/// plain permalinks (`<home>?p=<id>`).
#[derive(Debug, Clone)]
pub struct PermastructLookup {
    home: Url,
    structure: String,
}

impl PermastructLookup {
    /// Creates a lookup for the site at `home` using `structure`.
    #[must_use]
    pub fn new(home: Url, structure: impl Into<String>) -> Self {
        Self { home, structure: structure.into() }
    }

    fn plain(&self, item: &ContentItem) -> Option<String> {
        let id = item.id?;
        let mut url = self.home.clone();
        url.query_pairs_mut().append_pair("p", &id.to_string());
        Some(url.into())
    }

    /// Substitutes every tag; `None` if a tag's value is missing from `item`.
    fn expand(&self, item: &ContentItem) -> Option<String> {
        let mut out = String::with_capacity(self.structure.len());
        let mut rest = self.structure.as_str();

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('%') else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };
            let tag = &after[..end];
            match tag_value(tag, item) {
                Tag::Value(value) => out.extend(utf8_percent_encode(&value, TAG_VALUE)),
                Tag::Missing => {
                    log::debug!("permalink tag %{tag}% has no value for item {:?}", item.id);
                    return None;
                }
                Tag::Unknown => {
                    out.push('%');
                    out.push_str(tag);
                    out.push('%');
                }
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Some(out)
    }
}

enum Tag {
    Value(String),
    Missing,
    Unknown,
}

fn tag_value(tag: &str, item: &ContentItem) -> Tag {
    let value = match tag {
        "year" => item.published.map(|d| format!("{:04}", d.year())),
        "monthnum" => item.published.map(|d| format!("{:02}", d.month())),
        "day" => item.published.map(|d| format!("{:02}", d.day())),
        "postname" => item.slug.clone().filter(|s| !s.is_empty() && !is_dot_segment(s)),
        "post_id" => item.id.map(|id| id.to_string()),
        _ => return Tag::Unknown,
    };
    value.map_or(Tag::Missing, Tag::Value)
}

impl PermalinkLookup for PermastructLookup {
    fn dynamic_permalink(&self, item: &ContentItem) -> String {
        let url = if self.structure.trim().is_empty() {
            self.plain(item)
        } else {
            self.expand(item).and_then(|path| join_home(&self.home, &path)).map(Into::into)
        };
        url.unwrap_or_default()
    }
}
