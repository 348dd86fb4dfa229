use anyhow::{anyhow, Result};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Label shown in front of the store-name input.
pub(crate) const NAME_FIELD_LABEL: &str = "Name";

/// Popup form used to name (or rename) the book store.
#[derive(Default, Clone)]
pub(crate) struct NameForm {
    pub(crate) name: String,
    pub(crate) error: Option<String>,
}

impl NameForm {
    /// Pre-fill the form with the current name when renaming.
    pub(crate) fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error: None,
        }
    }

    /// Append a character, ignoring control keys.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.name.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.name.pop();
    }

    /// Validate the input and return the trimmed name.
    pub(crate) fn parse_input(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Book store name is required."));
        }
        Ok(name.to_string())
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let (display, style) = if self.name.is_empty() {
            ("<required>".to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.name.clone(), Style::default().fg(Color::Yellow))
        };

        Line::from(vec![
            Span::raw(format!("{NAME_FIELD_LABEL}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.name.chars().count()
    }

    /// Cursor column for the input line inside `inner`, pinned to the last
    /// column once the name outgrows the popup.
    pub(crate) fn cursor_x(&self, inner: Rect) -> u16 {
        let prefix = (NAME_FIELD_LABEL.len() + 2) as u16;
        let typed = u16::try_from(self.value_len()).unwrap_or(u16::MAX);
        inner
            .x
            .saturating_add(prefix)
            .saturating_add(typed)
            .min(inner.right().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        let mut form = NameForm::default();
        form.push_char(' ');
        assert!(form.parse_input().is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let form = NameForm::with_name("  Corner Books ");
        assert_eq!(form.parse_input().unwrap(), "Corner Books");
    }

    #[test]
    fn cursor_follows_input_and_stays_inside_popup() {
        let inner = Rect::new(10, 5, 40, 3);
        let form = NameForm::with_name("Shop");
        assert_eq!(form.cursor_x(inner), 10 + 6 + 4);

        let long = NameForm::with_name(&"x".repeat(70_000));
        assert_eq!(long.cursor_x(inner), 49);
    }

    #[test]
    fn ignores_control_characters() {
        let mut form = NameForm::default();
        assert!(!form.push_char('\u{7}'));
        assert!(form.push_char('é'));
        assert_eq!(form.value_len(), 1);
        form.backspace();
        assert!(form.name.is_empty());
    }
}
