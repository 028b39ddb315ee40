use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches `{{ env.NAME }}` and `{{ env.NAME | default("value") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand environment placeholders in raw TOML text
///
/// Lines whose first non-blank character is `#` are passed through untouched,
/// so commented-out keys can reference variables that are not set.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    expand_with(input, |name| std::env::var(name).ok())
}

fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut failure = None;
        let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
            match resolve(caps, &lookup) {
                Ok(value) => value,
                Err(e) => {
                    failure.get_or_insert(e);
                    String::new()
                }
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }

        lines.push(expanded.into_owned());
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn resolve(caps: &Captures<'_>, lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let key = &caps[1];
    let fallback = caps.get(2).map(|m| m.as_str());

    let Some(name) = key.strip_prefix("env.").filter(|n| !n.contains('.')) else {
        anyhow::bail!("only variables scoped with 'env.' are supported: `{key}`");
    };

    lookup(name)
        .or_else(|| fallback.map(str::to_owned))
        .ok_or_else(|| anyhow::anyhow!("environment variable not found: `{name}`"))
}
