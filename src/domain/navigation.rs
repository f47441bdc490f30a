//! Declarative navigation tree and its flattening into renderable nodes.

/// Label that marks a separator instead of a menu entry.
pub const DIVIDER_LABEL: &str = "---";

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarItem {
    pub label: String,
    /// `None` marks a grouping node that only opens a menu.
    pub url: Option<String>,
    pub children: Vec<NavbarItem>,
}

impl NavbarItem {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
            children: Vec::new(),
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<NavbarItem>) -> Self {
        Self {
            label: label.into(),
            url: None,
            children,
        }
    }

    #[cfg(test)]
    pub fn divider() -> Self {
        Self {
            label: DIVIDER_LABEL.to_string(),
            url: None,
            children: Vec::new(),
        }
    }

    pub fn is_divider(&self) -> bool {
        self.label == DIVIDER_LABEL
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarConfig {
    pub site_name: String,
    pub items: Vec<NavbarItem>,
}

/// One rendered navigation entry. `key` is derived from the entry's position
/// in the tree and stays stable as long as the configuration does.
#[derive(Clone, Debug, PartialEq)]
pub enum NavNode {
    /// `url` is `None` for a grouping item with nothing under it, which is
    /// shown as plain text.
    Link {
        key: String,
        label: String,
        url: Option<String>,
    },
    Dropdown {
        key: String,
        label: String,
        children: Vec<NavNode>,
    },
    Divider {
        key: String,
    },
}

impl NavNode {
    pub fn key(&self) -> &str {
        match self {
            NavNode::Link { key, .. } | NavNode::Dropdown { key, .. } | NavNode::Divider { key } => {
                key
            }
        }
    }
}

pub fn build_nav(config: &NavbarConfig) -> Vec<NavNode> {
    config
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let key = if item.has_children() && !item.is_divider() {
                format!("nav-dropdown-{index}")
            } else {
                format!("nav-item-{index}")
            };
            build_node(item, key)
        })
        .collect()
}

fn build_node(item: &NavbarItem, key: String) -> NavNode {
    if item.is_divider() {
        return NavNode::Divider { key };
    }

    if item.has_children() {
        let children = item
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| build_node(child, format!("{key}-{index}")))
            .collect();
        return NavNode::Dropdown {
            key,
            label: item.label.clone(),
            children,
        };
    }

    NavNode::Link {
        key,
        label: item.label.clone(),
        url: item.url.clone(),
    }
}
