// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Interactive startup-script generation for entering a production.

use indexmap::IndexMap;

use crate::resolver::SoftwareEntry;

#[cfg(test)]
#[path = "./shell_test.rs"]
mod shell_test;

/// Render a POSIX shell startup script that applies the resolved
/// environment to a subshell.
///
/// The script exports every resolved variable, prefixes the prompt with the
/// production name, and prints the configured software as a banner. The
/// core never mutates the calling process's environment; the caller writes
/// this script out and sources it in a child shell, so leaving the subshell
/// cleanly restores the original environment.
pub fn generate_startup_script(
    prod_name: &str,
    variables: &IndexMap<String, String>,
    software: &[SoftwareEntry],
) -> String {
    let mut script = String::new();

    script.push_str("# Generated by prodenv - do not edit\n");
    script.push_str("[ -f ~/.bashrc ] && . ~/.bashrc\n\n");

    for (key, value) in variables {
        script.push_str(&format!("export {}=\"{}\"\n", key, shell_escape(value)));
    }

    script.push_str(&format!(
        "\nexport PS1=\"[prod:{}] $PS1\"\n\n",
        shell_escape(prod_name)
    ));

    script.push_str(&format!(
        "echo \"Entered production environment '{}'\"\n",
        shell_escape(prod_name)
    ));

    if !software.is_empty() {
        script.push_str("echo \"Available software:\"\n");
        for entry in software {
            script.push_str(&format!(
                "echo \"  * {} (version {})\"\n",
                shell_escape(&entry.name),
                shell_escape(&entry.version)
            ));
        }
    }

    script.push_str("echo \"Type 'exit' to leave the environment.\"\n");

    script
}

/// Escape a value for interpolation inside double quotes.
fn shell_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
