//! Fruit Chatbot Script
//!
//! Static menu of canned replies. No language understanding: every reply is
//! chosen by the button label the user pressed.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fruit {
    pub name: &'static str,
    pub price_cents: u32,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Fruit {
    pub fn price(&self) -> String {
        format_price(self.price_cents)
    }
}

pub static FRUITS: [Fruit; 3] = [
    Fruit {
        name: "Orange",
        price_cents: 800,
        description: "Sweet and juicy citrus fruit",
        icon: "🍊",
    },
    Fruit {
        name: "Cucumber",
        price_cents: 1176,
        description: "Cool and refreshing vegetable",
        icon: "🥒",
    },
    Fruit {
        name: "Tangerine",
        price_cents: 640,
        description: "Small and sweet citrus fruit",
        icon: "🟠",
    },
];

pub const GREETING: &str = "Welcome! Would you like to see our fruit selection?";
const SELECTION: &str = "Here's our selection of fruits:";
const GOODBYE: &str = "Thank you for using our service. Goodbye!";
const NOT_UNDERSTOOD: &str = "I'm sorry, I didn't understand that. Can you try again?";
const DETAILS_PREFIX: &str = "Details for ";

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn find_fruit(name: &str) -> Option<&'static Fruit> {
    FRUITS.iter().find(|f| f.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Bot message that lists the whole catalogue
    pub shows_catalogue: bool,
}

impl ChatMessage {
    fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            shows_catalogue: false,
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            shows_catalogue: false,
        }
    }
}

/// Buttons offered under the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOption {
    ShowFruits,
    Details(String),
    BackToList,
    Exit,
}

impl ChatOption {
    pub fn label(&self) -> String {
        match self {
            ChatOption::ShowFruits => "Show fruits".to_string(),
            ChatOption::Details(name) => format!("{}{}", DETAILS_PREFIX, name),
            ChatOption::BackToList => "Back to list".to_string(),
            ChatOption::Exit => "Exit".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    selected: Option<&'static Fruit>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            selected: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn selected(&self) -> Option<&'static Fruit> {
        self.selected
    }

    /// Buttons to show: fruit names while browsing, "Back to list" while one is selected
    pub fn options(&self) -> Vec<ChatOption> {
        let mut options = vec![ChatOption::ShowFruits];
        match self.selected {
            Some(_) => options.push(ChatOption::BackToList),
            None => options.extend(FRUITS.iter().map(|f| ChatOption::Details(f.name.to_string()))),
        }
        options.push(ChatOption::Exit);
        options
    }

    pub fn choose(&mut self, option: ChatOption) {
        match option {
            ChatOption::BackToList => self.selected = None,
            other => self.handle_label(&other.label()),
        }
    }

    /// React to a pressed label. Unknown fruits get only the echo.
    pub fn handle_label(&mut self, label: &str) {
        self.messages.push(ChatMessage::user(label));
        match label {
            "Show fruits" => self.messages.push(ChatMessage {
                shows_catalogue: true,
                ..ChatMessage::bot(SELECTION)
            }),
            "Exit" => self.messages.push(ChatMessage::bot(GOODBYE)),
            _ => match label.strip_prefix(DETAILS_PREFIX) {
                Some(name) => {
                    if let Some(fruit) = find_fruit(name) {
                        self.selected = Some(fruit);
                        self.messages
                            .push(ChatMessage::bot(format!("Here are the details for {}:", fruit.name)));
                    }
                }
                None => self.messages.push(ChatMessage::bot(NOT_UNDERSTOOD)),
            },
        }
    }

    /// Details card to render under `message`, if it mentions the selected fruit
    pub fn detail_for(&self, message: &ChatMessage) -> Option<&'static Fruit> {
        self.selected.filter(|fruit| message.text.contains(fruit.name))
    }
}
