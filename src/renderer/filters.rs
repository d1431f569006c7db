use minijinja::value::{Value, ValueKind};
use minijinja::{Error, HtmlEscape};

/// Markup attributes a control may carry, in output order.
const ATTRIBUTES: [&str; 3] = ["placeholder", "pattern", "maxlength"];

/// Renders serialized content.
///
/// `{html: ...}` is trusted markup and passes through unescaped; plain text is
/// left to auto-escaping.
pub fn content_filter(value: Value) -> Result<Value, Error> {
    if value.kind() != ValueKind::Map {
        return Ok(value);
    }
    let html = value.get_attr("html")?;
    Ok(Value::from_safe_string(html.as_str().unwrap_or_default().to_string()))
}

/// Renders the set attributes of a control as ` name="value"` pairs.
pub fn attrs_filter(attributes: Value) -> Result<Value, Error> {
    let mut rendered = String::new();
    for name in ATTRIBUTES {
        let value = attributes.get_attr(name)?;
        if value.is_none() || value.is_undefined() {
            continue;
        }
        let raw = value.to_string();
        rendered.push_str(&format!(" {name}=\"{}\"", HtmlEscape(&raw)));
    }
    Ok(Value::from_safe_string(rendered))
}
