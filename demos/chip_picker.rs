//! Example: interactive chip picker
//!
//! Builds a small set of tag chips and runs the terminal picker. Up to
//! three tags can be selected at once; picking a fourth evicts the oldest.
//!
//! Run with:
//! ```bash
//! cargo run --example chip_picker
//! ```

use serde_json::json;
use tag_select::{Item, TagPicker, TagSelect, TagSelectConfig};

fn main() -> tag_select::Result<()> {
    let data = vec![
        Item::record([("id", json!(1)), ("label", json!("rust"))]),
        Item::record([("id", json!(2)), ("label", json!("tui"))]),
        Item::record([("id", json!(3)), ("label", json!("cli"))]),
        Item::record([("id", json!(4)), ("label", json!("widgets"))]),
        Item::record([("id", json!(5)), ("label", json!("terminal"))]),
    ];

    let config = TagSelectConfig::new(data)
        .with_value(vec![Item::record([("id", json!(1)), ("label", json!("rust"))])])
        .with_max(3)
        .with_switch_to_next(true);

    let select = TagSelect::new(config);
    let result = TagPicker::new(select).run()?;

    if result.aborted {
        println!("selection cancelled");
    } else {
        println!("selected tags:");
        for item in &result.selected {
            println!("  {}", item.label_under("label"));
        }
    }

    Ok(())
}
