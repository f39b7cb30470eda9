//! Template rendering seam between handlers and HTML.
//!
//! Handlers stay markup-free: they name a template and assemble a JSON data
//! bag, the same contract a standalone template engine would consume. The
//! built-in renderer turns the recognized templates into plain server-side
//! pages and escapes everything it interpolates.

use anyhow::Result;
use serde_json::Value as JsonValue;

/// Renders a named template against a JSON data bag.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, data: &JsonValue) -> Result<String>;
}

/// Built-in renderer producing plain HTML pages.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer;

impl TemplateRenderer for HtmlRenderer {
    fn render(&self, template: &str, data: &JsonValue) -> Result<String> {
        let body = match template {
            "index" => index_page(data),
            "category_list" => category_list_page(data),
            "category_detail" => category_detail_page(data),
            "category_form" => category_form_page(data),
            "category_delete" => category_delete_page(data),
            "product_list" => product_list_page(data),
            "product_detail" => product_detail_page(data),
            "product_form" => product_form_page(data),
            "product_delete" => product_delete_page(data),
            other => anyhow::bail!("unknown template '{}'", other),
        };
        Ok(page(&text(data, "title"), &body))
    }
}

const NAV: &str = "<nav><a href=\"/inventory\">Home</a> | \
                   <a href=\"/inventory/categories\">Categories</a> | \
                   <a href=\"/inventory/products\">Products</a> | \
                   <a href=\"/inventory/category/create\">New category</a> | \
                   <a href=\"/inventory/product/create\">New product</a></nav>";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n{}\n</body>\n</html>\n",
        escape(title),
        NAV,
        body,
    )
}

/// Minimal HTML escaping for interpolated text and attribute values.
fn escape(text: &str) -> String {
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

/// String view of a bag entry. Numbers are formatted, nulls are empty, so
/// entity fields and echoed draft fields render the same way.
fn text(data: &JsonValue, key: &str) -> String {
    match &data[key] {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn id_of(data: &JsonValue) -> i64 {
    data["id"].as_i64().unwrap_or(0)
}

fn items<'a>(data: &'a JsonValue, key: &str) -> &'a [JsonValue] {
    data[key].as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn heading(data: &JsonValue) -> String {
    format!("<h1>{}</h1>", escape(&text(data, "title")))
}

fn errors_block(data: &JsonValue) -> String {
    let errors = items(data, "errors");
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">");
    for error in errors {
        out.push_str(&format!("<li>{}</li>", escape(&text(error, "msg"))));
    }
    out.push_str("</ul>");
    out
}

fn index_page(data: &JsonValue) -> String {
    format!(
        "{}\n<p>The inventory currently contains:</p>\n<ul>\
         <li>{} categories</li>\
         <li>{} products</li>\
         </ul>",
        heading(data),
        data["category_count"].as_i64().unwrap_or(0),
        data["product_count"].as_i64().unwrap_or(0),
    )
}

fn category_list_page(data: &JsonValue) -> String {
    let categories = items(data, "category_list");
    if categories.is_empty() {
        return format!("{}\n<p>There are no categories.</p>", heading(data));
    }
    let mut list = String::from("<ul>");
    for category in categories {
        list.push_str(&format!(
            "<li><a href=\"/inventory/category/{}\">{}</a></li>",
            id_of(category),
            escape(&text(category, "name")),
        ));
    }
    list.push_str("</ul>");
    format!("{}\n{}", heading(data), list)
}

fn category_detail_page(data: &JsonValue) -> String {
    let category = &data["category"];
    let products = items(data, "category_products");
    let product_list = if products.is_empty() {
        "<p>This category has no products.</p>".to_string()
    } else {
        let mut list = String::from("<ul>");
        for product in products {
            list.push_str(&format!(
                "<li><a href=\"/inventory/product/{}\">{}</a></li>",
                id_of(product),
                escape(&text(product, "name")),
            ));
        }
        list.push_str("</ul>");
        list
    };
    format!(
        "{}\n<h2>Products</h2>\n{}\n<p>\
         <a href=\"/inventory/category/{id}/update\">Update category</a> | \
         <a href=\"/inventory/category/{id}/delete\">Delete category</a></p>",
        heading(data),
        product_list,
        id = id_of(category),
    )
}

fn category_form_page(data: &JsonValue) -> String {
    format!(
        "{}\n{}\n<form method=\"POST\">\n\
         <label>Name: <input type=\"text\" name=\"name\" value=\"{}\" placeholder=\"Category name\"></label>\n\
         <button type=\"submit\">Submit</button>\n</form>",
        heading(data),
        errors_block(data),
        escape(&text(&data["category"], "name")),
    )
}

fn category_delete_page(data: &JsonValue) -> String {
    let category = &data["category"];
    let products = items(data, "category_products");
    let body = if products.is_empty() {
        "<p>Do you really want to delete this category?</p>\n\
         <form method=\"POST\"><button type=\"submit\">Delete</button></form>"
            .to_string()
    } else {
        let mut list = String::from("<ul>");
        for product in products {
            list.push_str(&format!(
                "<li><a href=\"/inventory/product/{}\">{}</a></li>",
                id_of(product),
                escape(&text(product, "name")),
            ));
        }
        list.push_str("</ul>");
        format!(
            "<p>Delete the following products before deleting this category:</p>\n{}",
            list
        )
    };
    format!(
        "{}\n<h2>{}</h2>\n{}",
        heading(data),
        escape(&text(category, "name")),
        body,
    )
}

fn product_list_page(data: &JsonValue) -> String {
    let products = items(data, "product_list");
    if products.is_empty() {
        return format!("{}\n<p>There are no products.</p>", heading(data));
    }
    let mut list = String::from("<ul>");
    for product in products {
        list.push_str(&format!(
            "<li><a href=\"/inventory/product/{}\">{}</a> ({})</li>",
            id_of(product),
            escape(&text(product, "name")),
            escape(&text(product, "category_name")),
        ));
    }
    list.push_str("</ul>");
    format!("{}\n{}", heading(data), list)
}

fn product_detail_page(data: &JsonValue) -> String {
    let product = &data["product"];
    let category = &product["category"];
    format!(
        "{}\n<p>{}</p>\n<ul>\
         <li>Category: <a href=\"/inventory/category/{}\">{}</a></li>\
         <li>Price: ${}</li>\
         <li>In stock: {}</li>\
         </ul>\n<p>\
         <a href=\"/inventory/product/{id}/update\">Update product</a> | \
         <a href=\"/inventory/product/{id}/delete\">Delete product</a></p>",
        heading(data),
        escape(&text(product, "description")),
        id_of(category),
        escape(&text(category, "name")),
        text(product, "price"),
        text(product, "quantity_in_stock"),
        id = id_of(product),
    )
}

fn product_form_page(data: &JsonValue) -> String {
    let product = &data["product"];
    let mut checkboxes = String::new();
    for choice in items(data, "categories") {
        let checked = if choice["checked"].as_bool().unwrap_or(false) {
            " checked"
        } else {
            ""
        };
        checkboxes.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"category\" value=\"{}\"{}> {}</label>\n",
            id_of(choice),
            checked,
            escape(&text(choice, "name")),
        ));
    }
    format!(
        "{}\n{}\n<form method=\"POST\">\n\
         <label>Name: <input type=\"text\" name=\"name\" value=\"{}\"></label>\n\
         <label>Description: <textarea name=\"description\">{}</textarea></label>\n\
         <label>Price: <input type=\"text\" name=\"price\" value=\"{}\"></label>\n\
         <label>Quantity in stock: <input type=\"text\" name=\"quantity_in_stock\" value=\"{}\"></label>\n\
         <fieldset><legend>Category</legend>\n{}</fieldset>\n\
         <button type=\"submit\">Submit</button>\n</form>",
        heading(data),
        errors_block(data),
        escape(&text(product, "name")),
        escape(&text(product, "description")),
        escape(&text(product, "price")),
        escape(&text(product, "quantity_in_stock")),
        checkboxes,
    )
}

fn product_delete_page(data: &JsonValue) -> String {
    let product = &data["product"];
    format!(
        "{}\n<h2>{}</h2>\n<p>Do you really want to delete this product?</p>\n\
         <form method=\"POST\"><button type=\"submit\">Delete</button></form>",
        heading(data),
        escape(&text(product, "name")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_markup_in_values() {
        let page = HtmlRenderer
            .render(
                "category_list",
                &json!({
                    "title": "Category List",
                    "category_list": [{ "id": 1, "name": "<script>alert(1)</script>" }],
                }),
            )
            .unwrap();
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert(1)"));
    }

    #[test]
    fn form_echoes_draft_and_errors() {
        let page = HtmlRenderer
            .render(
                "category_form",
                &json!({
                    "title": "Create Category",
                    "category": { "name": "Tools" },
                    "errors": [{ "field": "name", "msg": "Name must not be empty." }],
                }),
            )
            .unwrap();
        assert!(page.contains("value=\"Tools\""));
        assert!(page.contains("Name must not be empty."));
    }

    #[test]
    fn product_form_marks_checked_choices() {
        let page = HtmlRenderer
            .render(
                "product_form",
                &json!({
                    "title": "Update Product",
                    "categories": [
                        { "id": 1, "name": "Tools", "checked": true },
                        { "id": 2, "name": "Garden", "checked": false },
                    ],
                    "product": { "name": "Hammer", "description": "d", "price": 2.5, "quantity_in_stock": 4 },
                }),
            )
            .unwrap();
        assert!(page.contains("value=\"1\" checked"));
        assert!(!page.contains("value=\"2\" checked"));
        assert!(page.contains("value=\"2.5\""));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(HtmlRenderer.render("nope", &json!({})).is_err());
    }

    #[test]
    fn delete_page_lists_blocking_products() {
        let page = HtmlRenderer
            .render(
                "category_delete",
                &json!({
                    "title": "Delete Category",
                    "category": { "id": 3, "name": "Tools" },
                    "category_products": [{ "id": 9, "name": "Hammer" }],
                }),
            )
            .unwrap();
        assert!(page.contains("Delete the following products"));
        assert!(page.contains("Hammer"));
        assert!(!page.contains("<button type=\"submit\">Delete</button>"));
    }
}
