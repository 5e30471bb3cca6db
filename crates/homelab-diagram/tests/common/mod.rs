//! Line scanner for the flowchart sources, used only by tests
//!
//! Understands just the statements the home-lab diagrams use: node
//! declarations, edges with an optional `|label|`, `%%` comments, `classDef`
//! and `class` lines.

#![allow(dead_code)]

use std::collections::BTreeSet;

/// A directed edge as written in the source
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// Statements collected from one diagram
#[derive(Debug, Default)]
pub struct Outline {
    pub nodes: BTreeSet<String>,
    pub edges: Vec<Edge>,
    pub class_defs: BTreeSet<String>,
    /// (class name, node ids) for each `class` line
    pub class_uses: Vec<(String, Vec<String>)>,
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn outline(text: &str) -> Outline {
    let mut out = Outline::default();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("%%") || line.starts_with("flowchart") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("classDef ") {
            let name = rest.split_whitespace().next().unwrap_or_default();
            out.class_defs.insert(name.to_string());
            continue;
        }

        if let Some(rest) = line.strip_prefix("class ") {
            let mut parts = rest.split_whitespace();
            let ids = parts.next().unwrap_or_default();
            let name = parts.next().unwrap_or_default();
            out.class_uses.push((
                name.to_string(),
                ids.split(',').map(str::to_string).collect(),
            ));
            continue;
        }

        if let Some((left, right)) = line.split_once("-->") {
            let right = right.trim();
            let (label, target) = match right.strip_prefix('|') {
                Some(labelled) => {
                    let (label, target) = labelled
                        .split_once('|')
                        .unwrap_or_else(|| panic!("unterminated edge label: {}", line));
                    (Some(label.to_string()), target.trim())
                }
                None => (None, right),
            };
            out.edges.push(Edge {
                from: left.trim().to_string(),
                to: target.to_string(),
                label,
            });
            continue;
        }

        if let Some((id, label)) = line.split_once('[') {
            assert!(is_ident(id), "bad node identifier in: {}", line);
            assert!(label.ends_with(']'), "unterminated node label in: {}", line);
            out.nodes.insert(id.to_string());
            continue;
        }

        panic!("unrecognised statement: {}", line);
    }

    out
}
