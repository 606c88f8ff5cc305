//! Owner profile shown in the hero, contact cards and footer.

pub const NAME: &str = "Phurin Kannetkat";
pub const ROLE: &str = "Software Engineer";
pub const BLURB: &str = "Front-end developer who also works across the back end and full stack. \
                         Always learning and always looking for something new to build.";
pub const PROFILE_IMAGE: &str = "/profile.jpg";

/// Kind of contact channel; decides the card icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
}

impl ContactKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::Phone => "☎",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACTS: [ContactMethod; 2] = [
    ContactMethod { kind: ContactKind::Email, label: "Email", value: "basphurin2502@gmail.com" },
    ContactMethod { kind: ContactKind::Phone, label: "Phone", value: "061-593-6947" },
];
