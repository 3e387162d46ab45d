use crate::{Error, Result};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

fn svg_root_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<svg.*</svg>").expect("valid regex"))
}

/// Extracts the `<svg ...>...</svg>` root from raw document text, tolerating surrounding
/// whitespace or markup (XML prologs, HTML wrappers). When no root is recognizable the
/// original text is returned unchanged and the parser gets to have an opinion.
pub fn extract_svg_fragment(text: &str) -> &str {
    match svg_root_re().find(text) {
        Some(m) => m.as_str(),
        None => text,
    }
}

/// Opaque handle to one node of a parsed document.
///
/// Handles are owned by the overlay renderer that parsed the document; they are only
/// meaningful against that renderer's [`SvgDom`] and go stale when the document is released
/// or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct DomNode {
    pub(crate) name: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<ShapeHandle>,
}

/// Owned element tree built from an untrusted SVG document.
///
/// `roxmltree` borrows the input text, so the parse result is copied into this arena once;
/// everything downstream (shape discovery, styling, re-emission) works on stable indices
/// instead of borrowed nodes.
#[derive(Debug, Clone, Default)]
pub struct SvgDom {
    nodes: Vec<DomNode>,
    root: Option<ShapeHandle>,
}

impl SvgDom {
    pub fn parse(text: &str) -> Result<Self> {
        let fragment = extract_svg_fragment(text);
        let doc = roxmltree::Document::parse(fragment).map_err(|e| Error::MalformedDocument {
            message: e.to_string(),
        })?;
        let svg = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case("svg"))
            .ok_or_else(|| Error::MalformedDocument {
                message: "no <svg> root element".to_string(),
            })?;

        let mut dom = Self::default();
        let root = dom.build(svg);
        dom.reattach_namespaces(root, svg);
        dom.root = Some(root);
        Ok(dom)
    }

    // roxmltree surfaces namespace declarations separately from attributes; fold the root's
    // in-scope declarations back in so the re-emitted document stays valid.
    fn reattach_namespaces(&mut self, root: ShapeHandle, svg: roxmltree::Node<'_, '_>) {
        let node = &mut self.nodes[root.0];
        for ns in svg.namespaces() {
            if ns.uri() == "http://www.w3.org/XML/1998/namespace" {
                continue;
            }
            let key = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            if !node.attrs.iter().any(|(k, _)| *k == key) {
                node.attrs.push((key, ns.uri().to_string()));
            }
        }
    }

    fn build(&mut self, node: roxmltree::Node<'_, '_>) -> ShapeHandle {
        let attrs = node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();

        let mut text = String::new();
        for child in node.children() {
            if child.is_text() {
                text.push_str(child.text().unwrap_or_default());
            }
        }
        let text = {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let handle = ShapeHandle(self.nodes.len());
        self.nodes.push(DomNode {
            name: node.tag_name().name().to_string(),
            attrs,
            text,
            children: Vec::new(),
        });

        let children: Vec<ShapeHandle> = node
            .children()
            .filter(|c| c.is_element())
            .map(|c| self.build(c))
            .collect();
        self.nodes[handle.0].children = children;
        handle
    }

    pub(crate) fn root(&self) -> Option<ShapeHandle> {
        self.root
    }

    pub(crate) fn node(&self, handle: ShapeHandle) -> &DomNode {
        &self.nodes[handle.0]
    }

    pub(crate) fn attr(&self, handle: ShapeHandle, name: &str) -> Option<&str> {
        self.node(handle)
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Pre-order handles of `handle`'s subtree, `handle` included.
    pub(crate) fn descendants(&self, handle: ShapeHandle) -> Vec<ShapeHandle> {
        let mut out = Vec::new();
        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            out.push(h);
            for &child in self.node(h).children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Text content of the first direct `<title>` child, if any.
    pub(crate) fn title_text(&self, handle: ShapeHandle) -> Option<&str> {
        self.node(handle)
            .children
            .iter()
            .find(|&&c| self.node(c).name == "title")
            .and_then(|&c| self.node(c).text.as_deref())
    }

    /// Serializes the tree back to SVG text. `overrides` maps a node to attributes that are
    /// set on emit (replacing same-named originals, appended otherwise); untouched nodes pass
    /// through as parsed.
    pub(crate) fn to_svg(
        &self,
        overrides: &FxHashMap<ShapeHandle, Vec<(String, String)>>,
    ) -> Option<String> {
        let root = self.root?;
        let mut out = String::new();
        self.write_node(root, overrides, &mut out);
        Some(out)
    }

    fn write_node(
        &self,
        handle: ShapeHandle,
        overrides: &FxHashMap<ShapeHandle, Vec<(String, String)>>,
        out: &mut String,
    ) {
        let node = self.node(handle);

        let mut attrs = node.attrs.clone();
        if let Some(extra) = overrides.get(&handle) {
            for (key, value) in extra {
                match attrs.iter_mut().find(|(k, _)| k == key) {
                    Some(slot) => slot.1 = value.clone(),
                    None => attrs.push((key.clone(), value.clone())),
                }
            }
        }

        out.push('<');
        out.push_str(&node.name);
        for (key, value) in &attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            push_escaped_attr(out, value);
            out.push('"');
        }

        if node.text.is_none() && node.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &node.text {
            push_escaped_text(out, text);
        }
        for &child in &node.children {
            self.write_node(child, overrides, out);
        }
        out.push_str("</");
        out.push_str(&node.name);
        out.push('>');
    }
}

fn push_escaped_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn push_escaped_text(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
