//! Static lookup tables for RSX directives, section snippets and hover docs.
//!
//! Three independent tables, all keyed by trigger text rather than by any
//! parse state; they are deliberately decoupled from the mapping engine.

use super::snippet::SnippetDef;

/// Template directive snippets, offered after an opening `{{`.
pub const DIRECTIVES: &[SnippetDef] = &[
    SnippetDef {
        label: "{{@if}}",
        detail: "Conditional render",
        insert_text: "{{@if ${1:condition}}}\n\t$0\n{{/if}}",
        documentation: "Render content only when the condition holds\n\n```rsx\n{{@if condition}}\n  content\n{{/if}}\n```",
    },
    SnippetDef {
        label: "{{@each}}",
        detail: "List render",
        insert_text: "{{@each ${1:items} as ${2:item}}}\n\t$0\n{{/each}}",
        documentation: "Iterate over an array and render each item\n\n```rsx\n{{@each items as item, index}}\n  {{item}}\n{{/each}}\n```",
    },
    SnippetDef {
        label: "{{@html}}",
        detail: "Raw HTML output",
        insert_text: "{{@html ${1:content}}}",
        documentation: "Output raw HTML without escaping\n\n⚠️ Make sure the content is trusted; raw output can introduce XSS\n\n```rsx\n{{@html rawContent}}\n```",
    },
    SnippetDef {
        label: "{{:else}}",
        detail: "else branch",
        insert_text: "{{:else}}",
        documentation: "Branch taken when the condition does not hold\n\n```rsx\n{{@if condition}}\n  ...\n{{:else}}\n  ...\n{{/if}}\n```",
    },
    SnippetDef {
        label: "{{:else if}}",
        detail: "else-if branch",
        insert_text: "{{:else if ${1:condition}}}",
        documentation: "Additional conditional branch\n\n```rsx\n{{@if condition1}}\n  ...\n{{:else if condition2}}\n  ...\n{{/if}}\n```",
    },
    SnippetDef {
        label: "{{/if}}",
        detail: "End if",
        insert_text: "{{/if}}",
        documentation: "Close a conditional render block",
    },
    SnippetDef {
        label: "{{/each}}",
        detail: "End each",
        insert_text: "{{/each}}",
        documentation: "Close a list render block",
    },
    SnippetDef {
        label: "{{}}",
        detail: "Interpolation",
        insert_text: "{{${1:expression}}}",
        documentation: "Output the value of an expression\n\n```rsx\n{{variable}}\n{{obj.property}}\n{{func(arg)}}\n```",
    },
];

/// Section scaffold snippets, offered on an empty line or a partial opening
/// prefix.
pub const SECTION_SNIPPETS: &[SnippetDef] = &[
    SnippetDef {
        label: "---",
        detail: "Rust frontmatter",
        insert_text: "---\n${1:// Rust code}\n---",
        documentation: "Server-side Rust block\n\n```rsx\n---\nuse rsx::prelude::*;\n\npub async fn handler() -> impl IntoResponse {\n    // ...\n}\n---\n```",
    },
    SnippetDef {
        label: "<script>",
        detail: "Script section",
        insert_text: "<script>\n${1:// TypeScript code}\n</script>",
        documentation: "TypeScript block\n\n```rsx\n<script>\nexport const data = { ... };\n</script>\n```",
    },
    SnippetDef {
        label: "<template>",
        detail: "Template section",
        insert_text: "<template>\n\t$0\n</template>",
        documentation: "HTML template block\n\n```rsx\n<template>\n  <div class=\"container\">\n    ...\n  </div>\n</template>\n```",
    },
    SnippetDef {
        label: "<style>",
        detail: "Style section",
        insert_text: "<style>\n${1:/* CSS/SCSS */}\n</style>",
        documentation: "CSS/SCSS block\n\n```rsx\n<style>\n.container {\n  display: flex;\n}\n</style>\n```",
    },
];

/// Hover documentation keyed by literal substrings, searched within a fixed
/// window around the cursor. Order matters: the first matching key wins.
pub const HOVER_DOCS: &[(&str, &str)] = &[
    (
        "{{@if",
        "**Conditional render directive**\n\nRenders content only when the condition holds\n\n```rsx\n{{@if condition}}\n  content\n{{:else if otherCondition}}\n  other content\n{{:else}}\n  fallback\n{{/if}}\n```",
    ),
    (
        "{{@each",
        "**List render directive**\n\nIterates over an array and renders each item\n\n```rsx\n{{@each items as item, index}}\n  <div>{{index}}: {{item.name}}</div>\n{{/each}}\n```",
    ),
    (
        "{{@html",
        "**Raw HTML directive**\n\nOutputs content without escaping\n\n⚠️ **Security warning**: make sure the content is trusted to avoid XSS\n\n```rsx\n{{@html rawHtmlContent}}\n```",
    ),
    ("{{:else}}", "**else branch**\n\nTaken when the condition does not hold"),
    ("{{:else if", "**else-if branch**\n\nAn additional conditional branch"),
    ("{{/if}}", "**End of if block**"),
    ("{{/each}}", "**End of each block**"),
    (
        "<script>",
        "**Script section**\n\nTypeScript/JavaScript code\n\nExported values are available to the template",
    ),
    ("</script>", "**Script section closing tag**"),
    (
        "<template>",
        "**Template section**\n\nHTML markup\n\nSupports RSX directives and interpolation",
    ),
    ("</template>", "**Template section closing tag**"),
    ("<style>", "**Style section**\n\nCSS/SCSS styles"),
    ("</style>", "**Style section closing tag**"),
    (
        "---",
        "**Rust frontmatter**\n\nServer-side Rust code block",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_labels_are_unique() {
        let mut labels: Vec<_> = DIRECTIVES.iter().map(|d| d.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), DIRECTIVES.len());
    }

    #[test]
    fn section_snippets_cover_all_four_kinds() {
        let labels: Vec<_> = SECTION_SNIPPETS.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["---", "<script>", "<template>", "<style>"]);
    }

    #[test]
    fn hover_docs_order_puts_specific_keys_before_general() {
        // "{{:else if" must never be shadowed: "{{:else}}" only matches the
        // closed form, and the bare "---" key comes last.
        let keys: Vec<_> = HOVER_DOCS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.last(), Some(&"---"));
        assert!(keys.iter().position(|k| *k == "{{:else}}").unwrap()
            < keys.iter().position(|k| *k == "---").unwrap());
    }
}
