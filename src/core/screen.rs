/// The discrete navigational modes of the application.
///
/// The current screen alone decides which content is shown and which keys
/// are active. Transitions live in [`crate::core::action::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Startup splash with a spinner. Left when the startup timer fires.
    #[default]
    Loading,
    Menu,
    About,
    Skills,
    EmployerSelect,
    Projects,
    ProjectDetail,
    /// Modal: every key except Enter/Esc goes to the email field.
    Contact,
    /// Waiting out the fixed delay after a contact submission.
    Sending,
    EasterEgg,
}

impl Screen {
    /// Screens where the letter shortcuts (a/p/s/c/e) and `q` are interpreted.
    pub fn accepts_shortcuts(self) -> bool {
        !matches!(self, Screen::Loading | Screen::Sending | Screen::Contact)
    }

    /// Screens that show an animated spinner and need continuous redraws.
    pub fn is_animated(self) -> bool {
        matches!(self, Screen::Loading | Screen::Sending)
    }
}
