//! Route Table
//!
//! The six screens and the paths they live at.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Sections,
    About,
    Chat,
    Translate,
    Faqs,
}

impl AppRoute {
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Login,
        AppRoute::Sections,
        AppRoute::About,
        AppRoute::Chat,
        AppRoute::Translate,
        AppRoute::Faqs,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::Sections => "/sections",
            AppRoute::About => "/about",
            AppRoute::Chat => "/chat",
            AppRoute::Translate => "/translate",
            AppRoute::Faqs => "/faqs",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::Sections => "Welcome",
            AppRoute::About => "About",
            AppRoute::Chat => "Chat",
            AppRoute::Translate => "Translate",
            AppRoute::Faqs => "FAQs",
        }
    }
}

/// Entry on the section index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLink {
    pub route: AppRoute,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SECTIONS: [SectionLink; 4] = [
    SectionLink {
        route: AppRoute::Chat,
        icon: "💬",
        description: "Start a conversation",
    },
    SectionLink {
        route: AppRoute::Translate,
        icon: "🌐",
        description: "Convert between languages",
    },
    SectionLink {
        route: AppRoute::Faqs,
        icon: "❓",
        description: "Find answers to common questions",
    },
    SectionLink {
        route: AppRoute::About,
        icon: "ℹ️",
        description: "Learn more about us",
    },
];
