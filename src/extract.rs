// src/extract.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// Unlike a CSS-selector query, we walk the whole parsed DOM with our generic
// tree walker (see src/walk.rs) and inspect every element node ourselves.
// That keeps the traversal reusable and gives us the attribute pairs in
// their original document order.
//
// The filtering rules are fixed and intentionally crude:
// - keep a link only if it mentions "calpoly.edu"
// - keep a link only if the text "http" appears in it exactly once
// - cut off everything from the first '#' (the fragment)
//
// The "http exactly once" rule is a blunt heuristic against duplicated-scheme
// URLs such as open-redirect targets (".../r?u=http://other.example"). It
// also rejects legitimate URLs that happen to contain "http" twice, e.g. in
// a query parameter name. That false negative is part of the contract and
// must not be "fixed"; downstream consumers depend on the exact behavior.
//
// Rust concepts:
// - Closures capturing &mut state (the links Vec we append to)
// - Pattern matching on the scraper Node enum
// - Option combinators for the per-link filter pipeline
// =============================================================================

use ego_tree::NodeRef;
use scraper::{Html, Node};
use url::Url;

use crate::walk::for_each_node;

/// Substring a link must contain to survive the domain filter.
const DOMAIN_FILTER: &str = "calpoly.edu";

/// Substring counted by the single-scheme filter.
const SCHEME_TOKEN: &str = "http";

// Extracts all qualifying links from HTML content.
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base: the URL of the page, for resolving relative links
//
// Returns: Vec<String> of absolute URLs in document order. Duplicates are
// preserved — if a page links to the same place twice, the result contains
// it twice. An href that fails URL resolution is silently skipped; it is
// not an error for the whole call, just an ignored candidate.
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    // html5ever recovers from arbitrarily broken markup, so parsing the
    // document itself cannot fail; we always get a tree
    let document = Html::parse_document(html);

    let mut links = Vec::new();

    // Pre-order visit of every node; only <a> elements interest us
    let mut visit = |node: NodeRef<'_, Node>| {
        let Node::Element(element) = node.value() else {
            return;
        };
        if element.name() != "a" {
            return;
        }

        // Attributes come back in document order
        for (key, value) in element.attrs() {
            if key != "href" {
                continue;
            }
            // Resolve the href against the page URL. An absolute href
            // replaces the base entirely; a relative one inherits the
            // base's scheme and host and resolves against its path.
            let resolved = match base.join(value) {
                Ok(url) => url,
                Err(_) => continue, // ignore bad URLs
            };
            if let Some(link) = filter_link(resolved.as_str()) {
                links.push(link);
            }
        }
    };

    for_each_node(document.tree.root(), Some(&mut visit), None);

    links
}

// Applies the fixed filter rules to a resolved, canonically-rendered URL.
//
// Returns Some(normalized link) if the URL survives, None if it is dropped.
//
// Rule order matters: the occurrence count runs on the full string,
// fragment included, exactly as the filters have always been applied.
fn filter_link(link: &str) -> Option<String> {
    // Domain filter: plain substring containment, not a host comparison
    if !link.contains(DOMAIN_FILTER) {
        return None;
    }

    // Single-scheme filter: "http" must appear exactly once.
    // str::matches counts non-overlapping literal occurrences, which for a
    // plain literal pattern is the same count a regex search would produce.
    if link.matches(SCHEME_TOKEN).count() != 1 {
        return None;
    }

    // Fragment stripping: keep everything before the first '#'
    let link = match link.split_once('#') {
        Some((before_fragment, _)) => before_fragment,
        None => link,
    };

    Some(link.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why walk the tree instead of using a Selector?
//    - scraper's Selector API answers "give me all <a href>" directly, but it
//      hides the traversal. Our walker is generic and reusable, and walking
//      explicitly keeps attribute iteration in document order under our
//      control
//
// 2. What is `let ... else`?
//    - A refutable pattern binding: if the pattern doesn't match, the else
//      block runs (and must diverge, here with `return`)
//    - Reads better than nested `if let` when we only care about one variant
//
// 3. What does base.join(href) do?
//    - Standard URL reference resolution (what a browser does)
//    - "https://site/page" + "/docs" = "https://site/docs"
//    - "https://site/page" + "https://other/x" = "https://other/x"
//    - Returns Err for garbage that can't form a URL at all
//
// 4. Why count "http" instead of checking the scheme?
//    - Compatibility. The historical behavior counts the literal substring
//      over the whole rendered URL, and consumers rely on exactly that,
//      including its known false negatives
// -----------------------------------------------------------------------------
