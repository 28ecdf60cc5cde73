// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use serde_json::{Value, json};

fn text(value: &str, marks: &[&str]) -> Value {
    let marks: Vec<Value> = marks.iter().map(|m| json!({ "type": m })).collect();
    json!({ "nodeType": "text", "value": value, "marks": marks, "data": {} })
}

fn node(tag: &str, content: Vec<Value>) -> Value {
    json!({ "nodeType": tag, "data": {}, "content": content })
}

#[allow(dead_code)]
pub fn generate_document_json(sections: usize) -> String {
    let mut content = Vec::new();

    for section in 0..sections {
        let title = format!("Section {section}");
        content.push(node("heading-2", vec![text(&title, &[])]));
        content.push(node(
            "paragraph",
            vec![
                text("Some paragraph content with ", &[]),
                text("bold", &["bold"]),
                text(" and ", &[]),
                text("italic", &["italic"]),
                text(" words. ", &[]),
                json!({
                    "nodeType": "hyperlink",
                    "data": { "uri": format!("https://example.com/{}", section) },
                    "content": [text("A link", &[])],
                }),
            ],
        ));
        content.push(generate_nested_list(3, section));

        // Add a table occasionally
        if section % 3 == 0 {
            let rows = (0..4)
                .map(|row| {
                    let tag = if row == 0 {
                        "table-header-cell"
                    } else {
                        "table-cell"
                    };
                    let cells = (0..3)
                        .map(|col| {
                            let label = format!("r{row} c{col}");
                            node(tag, vec![node("paragraph", vec![text(&label, &[])])])
                        })
                        .collect();
                    node("table-row", cells)
                })
                .collect();
            content.push(node("table", rows));
        }

        content.push(json!({
            "nodeType": "embedded-asset-block",
            "data": { "target": { "fields": {
                "title": format!("Image {}", section),
                "file": { "url": format!("//images.example.net/{}.jpg", section) },
            }}},
            "content": [],
        }));
        content.push(node("hr", vec![]));
    }

    node("document", content).to_string()
}

#[allow(dead_code)]
fn generate_nested_list(remaining_depth: usize, section: usize) -> Value {
    let items = (0..3)
        .map(|i| {
            let mut item = vec![node(
                "paragraph",
                vec![text(&format!("Item {} in section {}", i, section), &[])],
            )];
            if remaining_depth > 1 && i == 0 {
                item.push(generate_nested_list(remaining_depth - 1, section));
            }
            node("list-item", item)
        })
        .collect();
    let tag = if remaining_depth % 2 == 0 {
        "ordered-list"
    } else {
        "unordered-list"
    };
    node(tag, items)
}
