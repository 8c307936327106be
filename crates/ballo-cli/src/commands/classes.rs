use crate::support::print_json;
use ballo_kernel::{DisciplineEntry, KernelError, resolve_discipline_classes};

/// Parse `<discipline label>:<class>`, splitting on the last colon.
fn parse_entry(raw: &str) -> Result<DisciplineEntry, String> {
    let (label, class) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("entry must be <discipline>:<class>, got `{raw}`"))?;
    if class.trim().is_empty() {
        return Err(format!("entry has an empty class: `{raw}`"));
    }
    DisciplineEntry::parse(label, class.trim()).map_err(|e: KernelError| e.to_string())
}

pub fn run(entries: Vec<String>, json_output: bool) {
    let parsed: Vec<DisciplineEntry> = entries
        .iter()
        .map(|raw| parse_entry(raw))
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });

    let resolution = resolve_discipline_classes(&parsed);

    if json_output {
        print_json(&resolution);
        return;
    }

    println!("ballo classes");
    println!("  best overall: {}", resolution.best_overall_class);
    for (key, class) in &resolution.discipline_info {
        println!("  {key}: {class}");
    }
}
