//! Markup for the plan and curriculum-inventory pages.

use super::{DetailBody, PlanBody, PlanView, LOADING_LABEL};
use crate::manifest::CurriculumManifest;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} · MADMall</title>\n</head>\n<body class=\"madmall\">\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

pub fn render_plan_page(view: &PlanView) -> String {
    let mut body = String::new();
    body.push_str(
        "<header class=\"plan-header\">\n<p class=\"eyebrow\">CONSTRUCTION SITE</p>\n\
         <h1>PLAN</h1>\n<p>Infinite canvas. Click a poster to read the corresponding plan section.</p>\n",
    );
    body.push_str(&format!(
        "<button type=\"button\" data-action=\"toggle-view\">{}</button>\n\
         <button type=\"button\" data-action=\"reset-view\">Reset</button>\n</header>\n",
        view.toggle_label
    ));

    if let Some(error) = &view.error {
        body.push_str(&format!(
            "<p class=\"plan-error\" role=\"alert\">{}</p>\n",
            escape_html(error)
        ));
    }

    match &view.body {
        PlanBody::List(items) => {
            body.push_str("<section class=\"plan-list\">\n");
            for item in items {
                body.push_str(&format!(
                    "<button type=\"button\" data-board=\"{}\"><h2>{}</h2><p>{}</p><p class=\"doc\">{}</p></button>\n",
                    escape_html(&item.id),
                    escape_html(&item.title),
                    escape_html(&item.subtitle),
                    escape_html(&item.doc),
                ));
            }
            body.push_str("</section>\n");
        }
        PlanBody::Canvas(layer) => {
            body.push_str(
                "<section class=\"plan-canvas madmall-grid\">\n\
                 <div class=\"viewport\" role=\"application\">\n",
            );
            body.push_str(&format!(
                "<div class=\"layer\" style=\"transform: {}; transform-origin: top left;\">\n",
                layer.transform
            ));
            for poster in &layer.posters {
                let border = if poster.selected {
                    "border-selected"
                } else {
                    "border-idle"
                };
                let class = ["poster", border, poster.tone_class]
                    .iter()
                    .filter(|c| !c.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                body.push_str(&format!(
                    "<button type=\"button\" class=\"{}\" data-board=\"{}\" \
                     style=\"position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;\">\
                     <span class=\"eyebrow\">POSTER</span><span class=\"id\">{}</span>\
                     <h2>{}</h2><p>{}</p><p class=\"hint\">Click to open</p></button>\n",
                    class,
                    escape_html(&poster.id),
                    poster.left,
                    poster.top,
                    poster.width,
                    poster.height,
                    escape_html(&poster.id),
                    escape_html(&poster.title),
                    escape_html(&poster.subtitle),
                ));
            }
            body.push_str("</div>\n</div>\n</section>\n");
        }
    }

    if let Some(detail) = &view.detail {
        let text = match &detail.body {
            DetailBody::Loading => LOADING_LABEL.to_string(),
            DetailBody::Text(text) => escape_html(text),
        };
        body.push_str(&format!(
            "<section class=\"plan-doc\">\n<h2>{}</h2>\n<p class=\"subtitle\">{}</p>\n\
             <p class=\"doc\">{}</p>\n<button type=\"button\" data-action=\"close\">Close</button>\n\
             <pre>{}</pre>\n</section>\n",
            escape_html(&detail.title),
            escape_html(&detail.subtitle),
            escape_html(&detail.doc),
            text
        ));
    }

    page("Plan", &body)
}

pub fn render_manifest_page(manifest: &CurriculumManifest) -> String {
    let mut body = String::new();
    body.push_str(
        "<header>\n<p class=\"eyebrow\">CURRICULUM IMPORT</p>\n<h1>AGENTS (IBM)</h1>\n</header>\n",
    );
    body.push_str(&format!(
        "<section class=\"manifest\">\n<h2>Manifest</h2>\n<p>Source: {}</p>\n<p>Imported: {}</p>\n\
         <p>Count: {}</p>\n",
        escape_html(&manifest.source),
        escape_html(&manifest.imported_at),
        manifest.items.len()
    ));
    if !manifest.notes.is_empty() {
        body.push_str("<ul class=\"notes\">\n");
        for note in &manifest.notes {
            body.push_str(&format!("<li>{}</li>\n", escape_html(note)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<ul class=\"items\">\n");
    for item in &manifest.items {
        body.push_str(&format!(
            "<li><span class=\"filename\">{}</span> <span class=\"path\">{}</span></li>\n",
            escape_html(&item.filename),
            escape_html(&item.path)
        ));
    }
    body.push_str("</ul>\n</section>\n");
    page("Agents", &body)
}
