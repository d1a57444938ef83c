// ============================================================================
// HOSTNAME - Extracción del hostname de la URL de una historia
// ============================================================================

use url::Url;

/// Extraer el hostname de una URL para mostrarlo junto al título.
/// Nunca falla: con una URL malformada degrada a un literal best-effort
/// (sin scheme ni path) o al input crudo recortado.
pub fn host_name(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(parsed) = Url::parse(raw) {
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
    }

    // Fallback manual: quitar scheme y path
    let without_scheme = raw
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(raw);

    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_scheme);

    if host.is_empty() {
        raw.to_string()
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_host_from_http_url() {
        assert_eq!(host_name("http://x.com"), "x.com");
        assert_eq!(host_name("https://news.ycombinator.com/item?id=1"), "news.ycombinator.com");
    }

    #[test]
    fn strips_path_and_query() {
        assert_eq!(host_name("https://example.org/a/b/c?q=1#frag"), "example.org");
    }

    #[test]
    fn malformed_url_degrades_without_panicking() {
        assert_eq!(host_name("not a url"), "not a url");
        assert_eq!(host_name("example.com/page"), "example.com");
        assert_eq!(host_name("  ftp://files.example.com/x  "), "files.example.com");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(host_name(""), "");
    }
}
