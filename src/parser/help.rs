use crate::registry::{OptionSpec, Registry};

fn label(option: &OptionSpec) -> String {
    match &option.short_name {
        Some(short) => format!("--{},-{}", option.long_name, short),
        None => format!("--{}", option.long_name),
    }
}

/// Builds the usage text: one line per option in registration order, with
/// every help message starting one column past the widest option label.
pub fn generate_help(registry: &Registry) -> String {
    let labels: Vec<(String, &str)> = registry
        .iter()
        .map(|option| (label(option), option.help.as_str()))
        .collect();
    let width = labels
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Usage:\n");
    for (label, help) in &labels {
        let pad = width - label.chars().count() + 1;
        let line = format!("{}:{}{}", label, " ".repeat(pad), help);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
