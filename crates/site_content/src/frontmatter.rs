use serde::de::DeserializeOwned;

use crate::ContentError;

const FRONTMATTER_DELIM: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document split into its raw YAML header and markdown body.
pub struct Document<'a> {
    /// YAML between the delimiter lines; `None` when the document has no header.
    pub frontmatter: Option<String>,
    /// Everything after the closing delimiter, or the whole text without a header.
    pub body: &'a str,
}

/// Splits `---` delimited frontmatter from the body of `text`.
///
/// The opening delimiter must be the first line. A document that does not start with one is
/// returned whole as the body.
///
/// # Errors
///
/// Returns [`ContentError::UnterminatedFrontmatter`] when the closing delimiter is missing.
pub fn split_frontmatter<'a>(slug: &str, text: &'a str) -> Result<Document<'a>, ContentError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let opens = lines
        .next()
        .is_some_and(|first| first.trim_end() == FRONTMATTER_DELIM);
    if !opens {
        return Ok(Document {
            frontmatter: None,
            body: text,
        });
    }

    let mut offset = text.find('\n').map_or(text.len(), |idx| idx + 1);
    let header_start = offset;
    for line in lines {
        if line.trim_end() == FRONTMATTER_DELIM {
            let header = text[header_start..offset].replace("\r\n", "\n");
            let body = &text[offset + line.len()..];
            return Ok(Document {
                frontmatter: Some(header),
                body,
            });
        }
        offset += line.len();
    }

    Err(ContentError::UnterminatedFrontmatter {
        slug: slug.to_string(),
    })
}

/// Deserializes a header into `T`, treating a missing or blank header as all defaults.
pub(crate) fn parse_header<T>(slug: &str, header: Option<&str>) -> Result<T, ContentError>
where
    T: DeserializeOwned + Default,
{
    match header {
        Some(raw) if !raw.trim().is_empty() => {
            serde_yaml::from_str(raw).map_err(|source| ContentError::InvalidFrontmatter {
                slug: slug.to_string(),
                source,
            })
        }
        _ => Ok(T::default()),
    }
}
