//! Standalone HTML pages for a single recipe: an on-screen detail view and a
//! print layout that hides its buttons when printed.

use std::fmt::Write;

use crate::models::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStyle {
    Details,
    Print,
}

const DETAILS_CSS: &str = "
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 2rem; background: #f8f9fa; }
.header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 2rem; border-radius: 12px; margin-bottom: 2rem; text-align: center; }
.meta { display: flex; justify-content: center; gap: 2rem; margin-top: 1rem; flex-wrap: wrap; }
.section { background: white; padding: 1.5rem; border-radius: 12px; margin-bottom: 1.5rem; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.section h3 { color: #333; border-bottom: 2px solid #ff6b6b; padding-bottom: 0.5rem; margin-bottom: 1rem; }
.section img { width: 100%; max-height: 300px; object-fit: cover; border-radius: 12px; }
.category { display: inline-block; background: #e3f2fd; color: #1565c0; padding: 0.5rem 1rem; border-radius: 20px; font-weight: 500; }
ul, ol { padding-left: 1.5rem; }
li { margin-bottom: 0.5rem; }
@media print { body { background: white; } .header { background: #333 !important; } .no-print { display: none !important; } }
";

const PRINT_CSS: &str = "
body { font-family: 'Hiragino Sans', 'Yu Gothic', Meiryo, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; color: #333; }
.header { text-align: center; border-bottom: 3px solid #ff6b6b; padding-bottom: 20px; margin-bottom: 30px; }
.header h1 { font-size: 2rem; margin: 0 0 10px 0; }
.meta { display: flex; justify-content: center; gap: 2rem; margin: 15px 0; font-size: 0.9rem; color: #666; }
.section { margin-bottom: 25px; }
.section h3 { color: #333; border-left: 4px solid #ff6b6b; padding-left: 10px; margin-bottom: 15px; }
.recipe-image { max-width: 100%; max-height: 300px; display: block; margin: 0 auto 20px; border-radius: 8px; }
.category { display: inline-block; background: #f0f0f0; padding: 4px 12px; border-radius: 15px; font-size: 0.85rem; }
.print-buttons { text-align: center; margin: 30px 0; }
.print-buttons button { border: none; padding: 12px 24px; border-radius: 8px; cursor: pointer; margin: 0 10px; color: white; }
.print-btn { background: #28a745; }
.close-btn { background: #6c757d; }
ul, ol { padding-left: 1.5rem; }
li { margin-bottom: 0.5rem; }
@media print { body { padding: 0; } .no-print { display: none !important; } }
";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn cooking_time_label(minutes: u32) -> String {
    if minutes == 0 {
        "not set".to_string()
    } else {
        format!("{minutes} min")
    }
}

pub fn render_recipe_document(recipe: &Recipe, style: DocumentStyle) -> String {
    let name = escape_html(&recipe.name);
    let category = escape_html(&recipe.category);
    let (title_suffix, css) = match style {
        DocumentStyle::Details => ("Recipe details", DETAILS_CSS),
        DocumentStyle::Print => ("Recipe", PRINT_CSS),
    };

    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{name} - {title_suffix}</title>\n<style>{css}</style>\n</head>\n<body>\n"
    );

    let _ = write!(html, "<div class=\"header\">\n<h1>{name}</h1>\n");
    if style == DocumentStyle::Print {
        let _ = writeln!(html, "<span class=\"category\">{category}</span>");
    }
    let _ = write!(
        html,
        "<div class=\"meta\">\n<div><strong>Cooking time:</strong> {}</div>\n\
         <div><strong>Servings:</strong> {}</div>\n\
         <div><strong>Created:</strong> {}</div>\n</div>\n</div>\n",
        cooking_time_label(recipe.cooking_time),
        recipe.servings,
        escape_html(&recipe.created_at),
    );

    if let Some(image) = &recipe.image {
        let class = match style {
            DocumentStyle::Details => "",
            DocumentStyle::Print => " class=\"recipe-image\"",
        };
        let _ = write!(
            html,
            "<div class=\"section\">\n<img src=\"{}\" alt=\"{name}\"{class}>\n</div>\n",
            escape_html(image)
        );
    }

    if style == DocumentStyle::Details {
        let _ = write!(
            html,
            "<div class=\"section\">\n<span class=\"category\">{category}</span>\n</div>\n"
        );
    }

    html.push_str("<div class=\"section\">\n<h3>Ingredients</h3>\n<ul>\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(html, "<li>{}</li>", escape_html(ingredient));
    }
    html.push_str("</ul>\n</div>\n");

    html.push_str("<div class=\"section\">\n<h3>Instructions</h3>\n<ol>\n");
    for step in &recipe.instructions {
        let _ = writeln!(html, "<li>{}</li>", escape_html(step));
    }
    html.push_str("</ol>\n</div>\n");

    if !recipe.notes.is_empty() {
        let _ = write!(
            html,
            "<div class=\"section\">\n<h3>Notes &amp; tips</h3>\n<p>{}</p>\n</div>\n",
            escape_html(&recipe.notes)
        );
    }

    let print_label = match style {
        DocumentStyle::Details => "Print",
        DocumentStyle::Print => "Save as PDF / Print",
    };
    let _ = write!(
        html,
        "<div class=\"print-buttons no-print\">\n\
         <button class=\"print-btn\" onclick=\"window.print()\">{print_label}</button>\n\
         <button class=\"close-btn\" onclick=\"window.close()\">Close</button>\n</div>\n"
    );

    html.push_str("</body>\n</html>\n");
    html
}
