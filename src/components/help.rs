use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Padding, Row, Table, Widget},
};

use crate::{
    action::ActionState,
    config::{key_event_to_string, PageKeyBindings},
};

/// Keybinding overlay: one bordered table per group, stacked and centred.
#[derive(Debug)]
pub struct Help {
    keybinding_groups: Vec<(String, Vec<(String, String)>)>,
    column_spacing: u16,
    margin_vertical: u16,
    margin_horizontal: u16,
}

impl Help {
    pub fn new(keybinding_groups: Vec<(String, PageKeyBindings)>) -> Self {
        let groups = keybinding_groups
            .into_iter()
            .map(|(group_name, keybindings)| {
                let mut keybindings: Vec<(String, String)> = keybindings
                    .0
                    .into_iter()
                    .filter(|(_, action)| action.state == ActionState::Start)
                    .map(|(event, action)| (key_event_to_string(&event), action.command.label()))
                    .collect();
                keybindings.sort();
                (group_name, keybindings)
            })
            .collect();

        Self { keybinding_groups: groups, column_spacing: 5, margin_vertical: 1, margin_horizontal: 2 }
    }

    pub fn groups(&self) -> &[(String, Vec<(String, String)>)] {
        &self.keybinding_groups
    }

    fn render_group(
        &self,
        area: Rect,
        buf: &mut Buffer,
        group_name: &str,
        keybindings: &[(String, String)],
        key_length: u16,
        val_length: u16,
    ) {
        let rows: Vec<Row> = keybindings.iter().map(|(key, val)| Row::new(vec![key.clone(), val.clone()])).collect();

        let table = Table::new(rows, [Constraint::Length(key_length), Constraint::Min(val_length)])
            .column_spacing(self.column_spacing)
            .header(Row::new(vec!["Key", "Command"]).style(Style::new().bold()).bottom_margin(1))
            .block(
                Block::new()
                    .title(group_name.to_string())
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().bold().fg(Color::Cyan))
                    .padding(Padding::symmetric(self.margin_horizontal, self.margin_vertical)),
            );

        Clear.render(area, buf);
        table.render(area, buf);
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let key_length = self
            .keybinding_groups
            .iter()
            .flat_map(|(_, bindings)| bindings.iter().map(|(key, _)| key.len()))
            .max()
            .unwrap_or(0) as u16;
        let val_length = self
            .keybinding_groups
            .iter()
            .flat_map(|(_, bindings)| bindings.iter().map(|(_, val)| val.len()))
            .max()
            .unwrap_or(0) as u16;

        // + column_spacing + margin*2 + border
        let width = key_length + val_length + self.column_spacing + (self.margin_horizontal * 2) + 2;
        // + margin*2 + header + border
        let heights: Vec<Constraint> = self
            .keybinding_groups
            .iter()
            .map(|(_, bindings)| Constraint::Length(bindings.len() as u16 + (self.margin_vertical * 2) + 2 + 2))
            .collect();

        let [area] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(area);
        let areas = Layout::vertical(heights).flex(Flex::Center).split(area);

        for ((name, bindings), area) in self.keybinding_groups.iter().zip(areas.iter()) {
            self.render_group(*area, buf, name, bindings, key_length, val_length);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{config::parse_keybindings, pages::PageId};

    fn help() -> Help {
        let keybindings =
            parse_keybindings(include_str!("../../.config/config.yaml")).expect("default keybindings parse");
        Help::new(vec![
            ("System".to_string(), keybindings.global),
            (PageId::Scene.to_string(), keybindings.pages[&PageId::Scene].clone()),
        ])
    }

    #[test]
    fn test_groups_are_sorted_labels() {
        let help = help();
        let (name, scene) = &help.groups()[1];
        assert_eq!(name, "Scene");
        assert_eq!(
            scene,
            &vec![("Enter".to_string(), "DropGift".to_string()), ("Space".to_string(), "DropGift".to_string())]
        );
        assert!(help.groups()[0].1.contains(&("Ctrl-c".to_string(), "Quit".to_string())));
    }

    #[test]
    fn test_render_lists_bindings() {
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        help().render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("DropGift"));
        assert!(text.contains("ToggleShowHelp"));
    }
}
