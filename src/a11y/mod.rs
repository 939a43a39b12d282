//! Accessibility Tree
//!
//! A framework-neutral description of the page: roles, names, states and
//! relations between elements. The HTML export serializes it and the desktop
//! window walks it for keyboard focus order.

/// Semantic role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Page header landmark
    Banner,
    /// Main content landmark
    Main,
    /// Page footer landmark
    ContentInfo,
    /// Heading of the given level
    Heading(u8),
    /// Activatable control
    Button,
    /// Labelled content region
    Region,
    /// Navigational link
    Link,
    /// Image; decorative when hidden
    Image,
    /// Glyph drawn with text (chevrons)
    Icon,
    /// Generic container
    Group,
    /// Paragraph of text
    Text,
}

/// One element of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode {
    pub role: Role,
    pub id: Option<String>,
    /// Accessible name announced by assistive technology
    pub name: Option<String>,
    /// Visible text content
    pub text: Option<String>,
    pub expanded: Option<bool>,
    pub pressed: Option<bool>,
    /// Id of the element this one controls
    pub controls: Option<String>,
    /// Id of the element naming this one
    pub labelled_by: Option<String>,
    /// Hidden from assistive technology
    pub hidden: bool,
    /// Reachable by sequential keyboard navigation
    pub focusable: bool,
    pub href: Option<String>,
    pub src: Option<String>,
    pub lang: Option<String>,
    pub test_id: Option<String>,
    pub class: Option<String>,
    pub background: Option<String>,
    pub children: Vec<AccessNode>,
}

impl AccessNode {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: None,
            name: None,
            text: None,
            expanded: None,
            pressed: None,
            controls: None,
            labelled_by: None,
            hidden: false,
            focusable: false,
            href: None,
            src: None,
            lang: None,
            test_id: None,
            class: None,
            background: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = Some(pressed);
        self
    }

    pub fn controls(mut self, id: impl Into<String>) -> Self {
        self.controls = Some(id.into());
        self
    }

    pub fn labelled_by(mut self, id: impl Into<String>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn child(mut self, child: AccessNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = AccessNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Name announced for this node: explicit name, else its text, else its
    /// visible descendants' text joined by spaces
    pub fn accessible_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(text) = &self.text {
            return text.clone();
        }
        self.children
            .iter()
            .filter(|c| !c.hidden)
            .map(AccessNode::accessible_name)
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Focusable nodes in sequential keyboard order (depth-first), skipping
    /// hidden subtrees
    pub fn focus_order(&self) -> Vec<&AccessNode> {
        let mut order = Vec::new();
        collect_focusable(self, &mut order);
        order
    }

    /// First node with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&AccessNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// All nodes with the given role, in document order
    pub fn find_all(&self, role: Role) -> Vec<&AccessNode> {
        let mut found = Vec::new();
        collect_role(self, role, &mut found);
        found
    }

    /// First node carrying the given test id
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&AccessNode> {
        if self.test_id.as_deref() == Some(test_id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_test_id(test_id))
    }
}

fn collect_focusable<'a>(node: &'a AccessNode, out: &mut Vec<&'a AccessNode>) {
    if node.hidden {
        return;
    }
    if node.focusable {
        out.push(node);
    }
    for child in &node.children {
        collect_focusable(child, out);
    }
}

fn collect_role<'a>(node: &'a AccessNode, role: Role, out: &mut Vec<&'a AccessNode>) {
    if node.role == role {
        out.push(node);
    }
    for child in &node.children {
        collect_role(child, role, out);
    }
}
