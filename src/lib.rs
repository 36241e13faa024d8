// src/lib.rs
// =============================================================================
// link-harvester: fetch one web page and extract its matching hyperlinks.
//
// The whole library is one linear pipeline:
//
//   fetch the page  ->  parse the HTML  ->  walk the tree  ->  filter  ->  Vec
//
// Modules:
// - fetch:   makes the GET request, checks the status, downloads the body
// - extract: walks the parsed DOM and applies the link filter rules
// - walk:    generic pre/post-order tree traversal used by extract
// - error:   the ExtractError type returned to callers
//
// There is no crawling, no concurrency across pages, no caching and no
// retrying here; callers that want any of that build it on top.
// =============================================================================

mod error;
mod extract;
mod fetch;
mod walk;

pub use error::ExtractError;
pub use extract::extract_links;
pub use walk::for_each_node;

/// Makes an HTTP GET request to `url`, parses the response as HTML, and
/// returns the qualifying links from the document in document order.
///
/// Links are kept only if, after resolution against the page's final URL,
/// they contain `calpoly.edu` and contain the text `http` exactly once;
/// any `#fragment` suffix is stripped. Duplicates are preserved. An href
/// that fails to resolve is skipped silently.
///
/// `_username` and `_password` are accepted for interface stability but are
/// **not used**: no authentication of any kind is performed. This is a known
/// no-op, kept so existing call sites don't break if credentials support
/// lands later.
///
/// # Errors
///
/// - [`ExtractError::Fetch`] if the request fails or the status is not 200.
/// - [`ExtractError::Parse`] if the response body cannot be consumed as an
///   HTML document.
///
/// In both cases no links are returned.
pub async fn extract(
    url: &str,
    _username: &str,
    _password: &str,
) -> Result<Vec<String>, ExtractError> {
    let page = fetch::fetch_page(url).await?;
    Ok(extract_links(&page.body, &page.base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Serves `html` at /page on a local mock server and runs extract on it
    async fn extract_from(html: &str) -> Result<Vec<String>, ExtractError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string(html.to_string()),
            )
            .mount(&server)
            .await;

        extract(&format!("{}/page", server.uri()), "", "").await
    }

    #[tokio::test]
    async fn test_extracts_absolute_matching_links() {
        let links = extract_from(
            r#"<html><body>
                <a href="https://www.calpoly.edu/admissions">Admissions</a>
                <a href="https://example.com/elsewhere">Elsewhere</a>
                <a href="https://calpoly.edu/catalog#fees">Catalog</a>
            </body></html>"#,
        )
        .await
        .unwrap();

        assert_eq!(
            links,
            vec![
                "https://www.calpoly.edu/admissions",
                "https://calpoly.edu/catalog",
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_links_both_returned() {
        let links = extract_from(
            r#"<a href="https://calpoly.edu/a">x</a>
               <a href="https://calpoly.edu/a">y</a>"#,
        )
        .await
        .unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[tokio::test]
    async fn test_page_with_no_matching_links_returns_empty_vec() {
        let links = extract_from("<html><body><p>nothing here</p></body></html>")
            .await
            .unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_yields_fetch_error_and_no_links() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let url = format!("{}/gone", server.uri());
        let err = extract(&url, "", "").await.unwrap_err();

        assert!(matches!(err, ExtractError::Fetch { .. }));
        assert!(err.to_string().contains(&url));
    }

    #[tokio::test]
    async fn test_credentials_are_accepted_and_ignored() {
        // Same result with or without credentials; nothing is sent either way
        let html = r#"<a href="https://calpoly.edu/x">x</a>"#;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html.to_string()))
            .mount(&server)
            .await;
        let url = format!("{}/page", server.uri());

        let anonymous = extract(&url, "", "").await.unwrap();
        let credentialed = extract(&url, "mustang", "hunter2").await.unwrap();

        assert_eq!(anonymous, credentialed);
        assert_eq!(anonymous, vec!["https://calpoly.edu/x"]);
    }

    #[tokio::test]
    async fn test_relative_links_resolve_against_the_serving_host() {
        // The mock server's host is 127.0.0.1, so a relative link resolves
        // to that host, fails the domain filter, and is dropped; only the
        // absolute calpoly link survives
        let links = extract_from(
            r#"<a href="/local/path">local</a>
               <a href="https://calpoly.edu/far">far</a>"#,
        )
        .await
        .unwrap();

        assert_eq!(links, vec!["https://calpoly.edu/far"]);
    }
}
