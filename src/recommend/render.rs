use crate::dom::Element;

use super::item::{RecommendationItem, COMPOSTABLE, MATERIAL_TYPE, RECYCLABLE};

pub const NO_RECOMMENDATIONS: &str = "No recommendations found.";

pub fn format_entry(item: &RecommendationItem) -> String {
    format!(
        "{} - Recyclable: {}, Compostable: {}",
        item.display_field(MATERIAL_TYPE),
        item.display_field(RECYCLABLE),
        item.display_field(COMPOSTABLE)
    )
}

/// One entry per item in response order, or the placeholder when there are none.
pub fn entries_for(items: &[RecommendationItem]) -> Vec<String> {
    if items.is_empty() {
        return vec![NO_RECOMMENDATIONS.to_string()];
    }
    items.iter().map(format_entry).collect()
}

/// Replaces the container's entries and returns how many were rendered.
pub async fn render_into(results: &Element, items: &[RecommendationItem]) -> usize {
    let entries = entries_for(items);
    let count = entries.len();
    results.replace_children(entries).await;
    count
}

pub fn to_html(id: &str, entries: &[String]) -> String {
    let mut html = format!("<ul id=\"{}\">\n", escape_html(id));
    for entry in entries {
        html.push_str(&format!("  <li>{}</li>\n", escape_html(entry)));
    }
    html.push_str("</ul>");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
