//! # Detail View Component
//!
//! The right-hand top pane: name, description, command line, and submenu
//! summary for the currently highlighted node. This is also where the
//! dispatch fallback lands — a leaf with no command and no named action
//! shows nothing but its static description.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::catalog::MenuNode;

/// Stateless: receives the highlighted node (if any) as a prop.
pub struct DetailView<'a> {
    node: Option<&'a MenuNode>,
}

impl<'a> DetailView<'a> {
    pub fn new(node: Option<&'a MenuNode>) -> Self {
        Self { node }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.node.map(detail_lines).unwrap_or_default())
            .block(Block::bordered().title(" Details "))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn detail_lines(node: &MenuNode) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::styled(node.name.as_str(), Style::default().fg(Color::Yellow)),
        Line::default(),
        Line::from(node.description.as_str()),
    ];

    if !node.command.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Command: ", Style::default().fg(Color::Cyan)),
            Span::raw(node.command.as_str()),
        ]));
    }

    if node.is_group() {
        lines.push(Line::default());
        lines.push(Line::styled("Submenu items:", Style::default().fg(Color::Green)));
        for child in &node.submenu {
            lines.push(Line::from(format!("• {}", child.name)));
        }
    }

    if node.is_exec_leaf() {
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press Enter to execute",
            Style::default().fg(Color::Green),
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::main_menu;

    #[test]
    fn test_group_details_list_children() {
        let menu = main_menu("oc");
        let group = &menu[0];
        let lines = detail_lines(group);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert_eq!(text[0], group.name);
        assert!(text.iter().any(|l| l == "Submenu items:"));
        for child in &group.submenu {
            assert!(text.iter().any(|l| l.contains(&child.name)));
        }
        assert!(!text.iter().any(|l| l.contains("Press Enter to execute")));
    }

    #[test]
    fn test_exec_leaf_details_show_command_and_hint() {
        let menu = main_menu("oc");
        let leaf = &menu[1].submenu[0]; // "Pods"
        let lines = detail_lines(leaf);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert!(text.iter().any(|l| l.contains("oc get pods")));
        assert!(text.iter().any(|l| l.contains("Press Enter to execute")));
    }

    #[test]
    fn test_action_leaf_details_show_description_only() {
        let menu = main_menu("oc");
        let action = menu.iter().find(|n| n.name == "Command History").unwrap();
        let text: Vec<String> = detail_lines(action).iter().map(|l| l.to_string()).collect();

        assert!(text.iter().any(|l| l.contains("previously executed")));
        assert!(!text.iter().any(|l| l.contains("Command: ")));
    }
}
