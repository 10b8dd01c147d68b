//! Inspect command

use crate::InspectArgs;
use anyhow::{Context, Result};
use serde_json::json;
use tint::{ColorKind, PaletteExt};

pub fn run(args: InspectArgs, kind: Option<ColorKind>) -> Result<()> {
    let color = args.color.convert(super::output_kind(kind, &args.color));
    let channels = color.named_components(!args.native);
    let rgb = color.to_rgb();
    let named = rgb.to_named();
    let term = rgb.to_term();

    if args.json {
        let channels: serde_json::Map<String, serde_json::Value> =
            channels.iter().map(|&(name, v)| (name.to_string(), json!(v))).collect();
        let report = json!({
            "kind": color.kind().name(),
            "value": color.to_string(),
            "html": color.to_html(),
            "int": rgb.to_int(true),
            "channels": channels,
            "named": named.name(),
            "term": term.symbol(),
        });
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{text}");
        return Ok(());
    }

    println!("Kind:     {}", color.kind());
    println!("Value:    {color}");
    println!("HTML:     {}", color.to_html());
    println!("Packed:   0x{:08X}", rgb.to_int(true));
    println!("Channels:");
    for (name, value) in &channels {
        if args.native {
            println!("  {name:<11}{value}");
        } else {
            println!("  {name:<11}{value:.4}");
        }
    }
    println!("Named:    {named}");
    println!("Term:     {term}");
    Ok(())
}
