/// Maximum length for the display name field.
const MAX_DISPLAY_NAME_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsItem {
    #[default]
    DisplayName,
    DarkMode,
    Notifications,
    Encryption,
    ClearData,
    Logout,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 6] = [
        SettingsItem::DisplayName,
        SettingsItem::DarkMode,
        SettingsItem::Notifications,
        SettingsItem::Encryption,
        SettingsItem::ClearData,
        SettingsItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::DisplayName => "Display Name",
            SettingsItem::DarkMode => "Dark Mode",
            SettingsItem::Notifications => "Push Notifications",
            SettingsItem::Encryption => "End-to-End Encryption",
            SettingsItem::ClearData => "Clear Chat History",
            SettingsItem::Logout => "Sign Out",
        }
    }

    pub fn section(&self) -> &'static str {
        match self {
            SettingsItem::DisplayName => "Profile",
            SettingsItem::DarkMode => "Appearance",
            SettingsItem::Notifications => "Notifications",
            SettingsItem::Encryption | SettingsItem::ClearData => "Privacy & Security",
            SettingsItem::Logout => "Account",
        }
    }
}

/// A destructive action awaiting a yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    ClearData,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    pub display_name: String,
    pub notifications: bool,
    pub selection: usize,
    pub editing_name: bool,
    pub confirming: Option<Confirmation>,
}

impl SettingsPanel {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            notifications: true,
            selection: 0,
            editing_name: false,
            confirming: None,
        }
    }

    pub fn selected(&self) -> SettingsItem {
        SettingsItem::ALL
            .get(self.selection)
            .copied()
            .unwrap_or_default()
    }

    pub fn select_next(&mut self) {
        self.selection = (self.selection + 1).min(SettingsItem::ALL.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn push_name_char(&mut self, c: char) {
        if self.display_name.chars().count() < MAX_DISPLAY_NAME_LENGTH && !c.is_control() {
            self.display_name.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_panel_defaults() {
        let panel = SettingsPanel::new("Rachit");
        assert_eq!(panel.display_name, "Rachit");
        assert!(panel.notifications);
        assert_eq!(panel.selected(), SettingsItem::DisplayName);
        assert!(panel.confirming.is_none());
    }

    #[test]
    fn test_selection_clamps() {
        let mut panel = SettingsPanel::new("x");
        for _ in 0..20 {
            panel.select_next();
        }
        assert_eq!(panel.selected(), SettingsItem::Logout);
        for _ in 0..20 {
            panel.select_prev();
        }
        assert_eq!(panel.selected(), SettingsItem::DisplayName);
    }

    #[test]
    fn test_name_length_and_control_chars() {
        let mut panel = SettingsPanel::new("");
        panel.push_name_char('\n');
        assert!(panel.display_name.is_empty());
        for _ in 0..40 {
            panel.push_name_char('a');
        }
        assert_eq!(panel.display_name.len(), MAX_DISPLAY_NAME_LENGTH);
    }
}
