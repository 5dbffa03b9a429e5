#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Top-level sections the navigation shell can show. Exactly one is
/// mounted at a time; nothing persists across a switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Patient,
    Volunteer,
    Contact,
    Chatbot,
}

impl Section {
    /// Nav bar order.
    pub const ALL: [Self; 5] =
        [Self::Home, Self::Patient, Self::Volunteer, Self::Contact, Self::Chatbot];

    /// Label shown on the nav button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Patient => "Patient Registration",
            Self::Volunteer => "Volunteer Registration",
            Self::Contact => "Contact Us",
            Self::Chatbot => "FAQ Bot",
        }
    }
}
