/// Chat component flattening
///
/// The client hands screen titles and item names over either as legacy text
/// (`§6Price:`) or as JSON chat components such as
/// `{"text":"","extra":[{"text":"Price:","color":"gold"}]}`.
/// Everything downstream matches on legacy text, so components are flattened
/// into `§`-coded strings here.

use serde_json::Value as JsonValue;

/// Convert a raw title or lore line into legacy formatted text.
///
/// Input that is not a JSON object or array is returned unchanged.
pub fn to_legacy_text(raw: &str) -> String {
    let trimmed = raw.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return raw.to_string();
    }

    match serde_json::from_str::<JsonValue>(raw) {
        Ok(json) if json.is_object() || (json.is_array() && is_component(&json)) => {
            let mut out = String::new();
            push_component(&json, &mut out);
            out
        }
        _ => raw.to_string(),
    }
}

/// Legacy text such as `[1]` can parse as JSON without being a component.
/// Strings only count inside an array.
fn is_component(value: &JsonValue) -> bool {
    match value {
        JsonValue::String(_) | JsonValue::Object(_) => true,
        JsonValue::Array(parts) => !parts.is_empty() && parts.iter().all(is_component),
        _ => false,
    }
}

fn push_component(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::String(text) => out.push_str(text),
        JsonValue::Array(parts) => {
            for part in parts {
                push_component(part, out);
            }
        }
        JsonValue::Object(map) => {
            if let Some(code) = map
                .get("color")
                .and_then(|c| c.as_str())
                .and_then(color_code)
            {
                out.push('§');
                out.push(code);
            }

            for (key, code) in [
                ("obfuscated", 'k'),
                ("bold", 'l'),
                ("strikethrough", 'm'),
                ("underlined", 'n'),
                ("italic", 'o'),
            ] {
                if map.get(key).and_then(|v| v.as_bool()) == Some(true) {
                    out.push('§');
                    out.push(code);
                }
            }

            if let Some(text) = map.get("text").and_then(|t| t.as_str()) {
                out.push_str(text);
            } else if let Some(key) = map.get("translate").and_then(|t| t.as_str()) {
                out.push_str(key);
            }

            if let Some(extra) = map.get("extra") {
                push_component(extra, out);
            }
        }
        _ => {}
    }
}

fn color_code(name: &str) -> Option<char> {
    let code = match name {
        "black" => '0',
        "dark_blue" => '1',
        "dark_green" => '2',
        "dark_aqua" => '3',
        "dark_red" => '4',
        "dark_purple" => '5',
        "gold" => '6',
        "gray" => '7',
        "dark_gray" => '8',
        "blue" => '9',
        "green" => 'a',
        "aqua" => 'b',
        "red" => 'c',
        "light_purple" => 'd',
        "yellow" => 'e',
        "white" => 'f',
        "reset" => 'r',
        _ => return None,
    };
    Some(code)
}
