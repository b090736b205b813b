//! # Navigation Stack
//!
//! Stack-based drill-down over the menu tree. The current frame is the
//! level on screen; the stack holds the ancestor frames in the order they
//! were left. `descend`/`ascend` form a strict LIFO walk of one tree path,
//! so ascending always restores exactly the frame that was current before
//! the matching descend.
//!
//! Owned as a plain value inside [`crate::core::state::App`] — no globals —
//! so it unit-tests without a rendering surface.

use crate::core::catalog::MenuNode;

/// A displayed menu level plus its title.
#[derive(Debug, Clone)]
pub struct NavigationFrame {
    pub nodes: Vec<MenuNode>,
    pub title: String,
}

pub struct NavigationStack {
    current: NavigationFrame,
    stack: Vec<NavigationFrame>,
}

impl NavigationStack {
    pub fn new(root_nodes: Vec<MenuNode>, root_title: impl Into<String>) -> Self {
        Self {
            current: NavigationFrame {
                nodes: root_nodes,
                title: root_title.into(),
            },
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &NavigationFrame {
        &self.current
    }

    /// Number of drill-downs since the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Enter a group node's submenu. The caller guarantees `node` is a
    /// group; the decision order in the reducer makes anything else
    /// unreachable.
    pub fn descend(&mut self, node: &MenuNode) {
        debug_assert!(node.is_group());
        let next = NavigationFrame {
            nodes: node.submenu.clone(),
            title: node.name.clone(),
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.stack.push(previous);
    }

    /// Go back one level. Returns `false` at the root, which the caller
    /// interprets as the exit condition — never an error.
    pub fn ascend(&mut self) -> bool {
        match self.stack.pop() {
            Some(frame) => {
                self.current = frame;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::main_menu;

    #[test]
    fn test_descend_then_ascend_restores_frame() {
        let menu = main_menu("oc");
        let mut nav = NavigationStack::new(menu.clone(), "Navigation");
        let group = menu[1].clone();

        nav.descend(&group);
        assert_eq!(nav.current().title, group.name);
        assert_eq!(nav.depth(), 1);

        assert!(nav.ascend());
        assert_eq!(nav.current().title, "Navigation");
        assert_eq!(nav.current().nodes.len(), menu.len());
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_ascend_at_root_signals_exit() {
        let mut nav = NavigationStack::new(main_menu("oc"), "Navigation");
        assert!(!nav.ascend());
        // Still at the root, still usable.
        assert_eq!(nav.current().title, "Navigation");
        assert!(!nav.ascend());
    }

    #[test]
    fn test_lifo_walk_restores_every_level() {
        let menu = main_menu("oc");
        let mut nav = NavigationStack::new(menu.clone(), "Navigation");

        // Walk down every group on the path, snapshotting titles.
        let mut titles = vec![nav.current().title.clone()];
        let mut lens = vec![nav.current().nodes.len()];
        let mut level = menu;
        while let Some(group) = level.iter().find(|n| n.is_group()).cloned() {
            nav.descend(&group);
            titles.push(nav.current().title.clone());
            lens.push(nav.current().nodes.len());
            level = group.submenu;
        }
        assert!(nav.depth() > 0);

        // Unwind: each ascend must restore the matching snapshot.
        while nav.ascend() {
            titles.pop();
            lens.pop();
            assert_eq!(&nav.current().title, titles.last().unwrap());
            assert_eq!(&nav.current().nodes.len(), lens.last().unwrap());
        }
        assert_eq!(titles.len(), 1);
        assert_eq!(nav.depth(), 0);
    }
}
