use solir_ast::Comment;
use solir_core::{Link, Platform, RootSourceUnit};
use tracing::debug;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Sentence punctuation that ends a URL written inside prose.
const TRAILING_PUNCTUATION: [char; 4] = [',', ';', ':', '!'];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '(' | ')' | '[' | ']' | '{' | '}' | '`')
}

/// URLs in `text`, in order of appearance.
pub fn extract_links(text: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find("http") {
        let start = cursor + offset;
        let candidate = &text[start..];

        let Some(scheme) = SCHEMES.iter().find(|scheme| candidate.starts_with(*scheme)) else {
            cursor = start + "http".len();
            continue;
        };

        let end = candidate.find(is_delimiter).unwrap_or(candidate.len());
        cursor = start + end;

        let url = candidate[..end].trim_end_matches(TRAILING_PUNCTUATION);
        let url = url.strip_suffix('.').unwrap_or(url);
        if url.len() > scheme.len() {
            links.push(classify(url, scheme.len()));
        }
    }

    links
}

fn classify(url: &str, scheme_len: usize) -> Link {
    let rest = &url[scheme_len..];
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host).to_lowercase();

    let bare = authority_end == rest.len();
    let platform = if bare { None } else { Platform::from_host(&host) };

    Link {
        url: url.to_string(),
        social: platform.is_some(),
        platform,
    }
}

/// Appends links found in `comments`, keeping comment order.
pub fn process_links(root: &mut RootSourceUnit, comments: &[Comment]) {
    let before = root.links.len();
    for comment in comments {
        root.links.extend(extract_links(&comment.text));
    }
    debug!(links = root.links.len() - before, "Processed links");
}
