//! # Result Rendering
//!
//! Turns the current page of a [`SearchSession`] into the results pane of the
//! lookup page (HTML) or into plain text for the command line.
//!
//! ## HTML Structure
//! ```html
//! <ul>
//!   <li>
//!     <span class="tooltip">
//!       <strong class="scale-name dim-3d">Just Major</strong>
//!       <span class="tooltip-text">日本名：純正長音階<br>次元限界（ limit ）：3D</span>
//!     </span>
//!     ： 1/1，9/8，5/4
//!     <button class="play-button" data-name="Just Major">🎵</button>
//!     <div class="related">関連スケール：<span class="related-name clickable" data-scale="...">...</span></div>
//!   </li>
//! </ul>
//! ```
//!
//! Related names are rendered clickable whether or not they resolve; following a
//! dangling one is a no-op in [`SearchSession::follow_related`].

use quick_xml::escape::escape;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::session::{QueryOutcome, SearchSession};

/// Prompt shown when the input holds no valid token.
pub const PROMPT_MESSAGE: &str = "コードを入力してください。";
/// Message shown when a valid query matches nothing.
pub const NO_MATCHES_MESSAGE: &str = "該当スケールが見つかりません…";

const NOTE_SEPARATOR: &str = "，";

/// A link to another catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLink {
    pub name: String,
    /// Whether the key exists in the catalog.
    pub resolves: bool,
}

/// Display model for one result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleView {
    pub name: String,
    pub localized_name: Option<String>,
    pub aliases: Vec<String>,
    pub dimension: String,
    pub dimension_class: Option<&'static str>,
    pub notes: Vec<String>,
    pub related: Vec<RelatedLink>,
    pub tooltip: Vec<String>,
}

impl ScaleView {
    /// View of `name`, or `None` when it is not in the catalog.
    pub fn new(catalog: &Catalog, name: &str) -> Option<Self> {
        let entry = catalog.get(name)?;

        let mut tooltip = Vec::new();
        if let Some(localized) = &entry.localized_name {
            tooltip.push(format!("日本名：{}", localized));
        }
        if !entry.aliases.is_empty() {
            tooltip.push(format!("別名：{}", entry.aliases.join(NOTE_SEPARATOR)));
        }
        if !entry.dimension.is_empty() {
            tooltip.push(format!("次元限界（ limit ）：{}", entry.dimension));
        }

        Some(Self {
            name: name.to_string(),
            localized_name: entry.localized_name.clone(),
            aliases: entry.aliases.clone(),
            dimension: entry.dimension.clone(),
            dimension_class: dimension_class(&entry.dimension),
            notes: entry.notes.clone(),
            related: entry
                .related
                .iter()
                .map(|r| RelatedLink {
                    name: r.clone(),
                    resolves: catalog.contains(r),
                })
                .collect(),
            tooltip,
        })
    }
}

/// CSS class for the colour of a dimension tag.
pub fn dimension_class(dimension: &str) -> Option<&'static str> {
    match dimension {
        "2D" => Some("dim-2d"),
        "3D" => Some("dim-3d"),
        "4D" => Some("dim-4d"),
        "5D" => Some("dim-5d"),
        "6D" => Some("dim-6d"),
        _ => None,
    }
}

/// Views for the rows on the session's current page.
pub fn page_views(session: &SearchSession) -> Vec<ScaleView> {
    session
        .page_items()
        .iter()
        .filter_map(|name| ScaleView::new(session.catalog(), name))
        .collect()
}

/// HTML fragment for the results pane.
pub fn render_results_html(session: &SearchSession) -> String {
    match session.outcome() {
        QueryOutcome::NeedsQuery => format!("<p class=\"placeholder\">{}</p>", PROMPT_MESSAGE),
        QueryOutcome::NoMatches => format!("<p>{}</p>", NO_MATCHES_MESSAGE),
        QueryOutcome::Results => {
            let mut html = String::from("<ul>\n");
            for view in page_views(session) {
                html.push_str(&view_to_html(&view));
            }
            html.push_str("</ul>\n");
            html
        }
    }
}

fn view_to_html(view: &ScaleView) -> String {
    let name = escape(&view.name);
    let class = match view.dimension_class {
        Some(c) => format!("scale-name {}", c),
        None => "scale-name".to_string(),
    };
    let tooltip: Vec<String> = view.tooltip.iter().map(|l| escape(l).into_owned()).collect();
    let notes: Vec<String> = view.notes.iter().map(|n| escape(n).into_owned()).collect();

    let mut html = String::new();
    html.push_str("  <li>\n");
    html.push_str("    <span class=\"tooltip\">\n");
    html.push_str(&format!("      <strong class=\"{}\">{}</strong>\n", class, name));
    html.push_str(&format!(
        "      <span class=\"tooltip-text\">{}</span>\n",
        tooltip.join("<br>")
    ));
    html.push_str("    </span>\n");
    html.push_str(&format!("    ： {}\n", notes.join(NOTE_SEPARATOR)));
    html.push_str(&format!(
        "    <button class=\"play-button\" data-name=\"{}\">🎵</button>\n",
        name
    ));

    if !view.related.is_empty() {
        let links: Vec<String> = view
            .related
            .iter()
            .map(|r| {
                let r = escape(&r.name);
                format!(
                    "<span class=\"related-name clickable\" data-scale=\"{}\">{}</span>",
                    r, r
                )
            })
            .collect();
        html.push_str(&format!(
            "    <div class=\"related\">関連スケール：{}</div>\n",
            links.join(NOTE_SEPARATOR)
        ));
    }

    html.push_str("  </li>\n");
    html
}

/// Plain-text rendering of the current page, for terminals.
pub fn render_results_text(session: &SearchSession) -> String {
    match session.outcome() {
        QueryOutcome::NeedsQuery => format!("{}\n", PROMPT_MESSAGE),
        QueryOutcome::NoMatches => format!("{}\n", NO_MATCHES_MESSAGE),
        QueryOutcome::Results => {
            let mut out = format!(
                "{} matches, sorted by {} [{}]\n",
                session.hits().len(),
                session.sort(),
                session.page_indicator()
            );
            for view in page_views(session) {
                out.push_str(&view_to_text(&view));
            }
            out
        }
    }
}

/// Plain-text block for a single scale.
pub fn view_to_text(view: &ScaleView) -> String {
    let mut out = String::new();
    if view.dimension.is_empty() {
        out.push_str(&format!("{}\n", view.name));
    } else {
        out.push_str(&format!("{} ({})\n", view.name, view.dimension));
    }
    out.push_str(&format!("  notes: {}\n", view.notes.join(" ")));
    for line in &view.tooltip {
        out.push_str(&format!("  {}\n", line));
    }
    if !view.related.is_empty() {
        let links: Vec<String> = view
            .related
            .iter()
            .map(|r| {
                if r.resolves {
                    r.name.clone()
                } else {
                    format!("{} (missing)", r.name)
                }
            })
            .collect();
        out.push_str(&format!("  related: {}\n", links.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScaleEntry;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn catalog() -> Arc<Catalog> {
        let mut major = ScaleEntry::with_notes(["1/1", "9/8", "5/4"])
            .in_dimension("3D")
            .related_to(["Pythagorean", "Ghost"]);
        major.localized_name = Some("純正長音階".to_string());
        major.aliases = vec!["Ptolemy".to_string(), "Syntonic".to_string()];
        Arc::new(Catalog::from_entries([
            ("Just <Major>", major),
            ("Pythagorean", ScaleEntry::with_notes(["1/1", "9/8", "81/64"])),
        ]))
    }

    #[test]
    fn test_scale_view() {
        let view = ScaleView::new(&catalog(), "Just <Major>").unwrap();
        assert_eq!(view.dimension_class, Some("dim-3d"));
        assert_eq!(
            view.tooltip,
            vec![
                "日本名：純正長音階".to_string(),
                "別名：Ptolemy，Syntonic".to_string(),
                "次元限界（ limit ）：3D".to_string(),
            ]
        );
        assert_eq!(
            view.related,
            vec![
                RelatedLink { name: "Pythagorean".to_string(), resolves: true },
                RelatedLink { name: "Ghost".to_string(), resolves: false },
            ]
        );
        assert!(ScaleView::new(&catalog(), "Nope").is_none());
    }

    #[test]
    fn test_dimension_class_unknown() {
        assert_eq!(dimension_class(""), None);
        assert_eq!(dimension_class("7D"), None);
        assert_eq!(dimension_class("6D"), Some("dim-6d"));
    }

    #[test]
    fn test_html_prompt_and_no_matches() {
        let mut session = SearchSession::new(catalog());
        assert!(render_results_html(&session).contains("class=\"placeholder\""));
        session.set_query("7/4");
        assert_eq!(render_results_html(&session), format!("<p>{}</p>", NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_html_results_escaped_and_linked() {
        let mut session = SearchSession::new(catalog());
        session.set_query("5/4");
        let html = render_results_html(&session);

        assert!(html.starts_with("<ul>"));
        assert!(html.contains("<strong class=\"scale-name dim-3d\">Just &lt;Major&gt;</strong>"));
        assert!(html.contains("data-name=\"Just &lt;Major&gt;\""));
        assert!(html.contains("： 1/1，9/8，5/4"));
        assert!(html.contains("data-scale=\"Ghost\""));
        assert!(html.contains("日本名：純正長音階<br>別名：Ptolemy，Syntonic"));
    }

    #[test]
    fn test_html_omits_empty_related() {
        let mut session = SearchSession::new(catalog());
        session.set_query("81/64");
        let html = render_results_html(&session);
        assert!(html.contains("scale-name\">Pythagorean"));
        assert!(!html.contains("class=\"related\""));
    }

    #[test]
    fn test_text_rendering() {
        let mut session = SearchSession::new(catalog());
        session.set_query("9/8");
        let text = render_results_text(&session);
        assert!(text.starts_with("2 matches, sorted by name [1 / 1]\n"));
        assert!(text.contains("Just <Major> (3D)\n  notes: 1/1 9/8 5/4\n"));
        assert!(text.contains("  related: Pythagorean, Ghost (missing)\n"));
    }
}
