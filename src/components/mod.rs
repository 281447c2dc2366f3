//! UI Components
//!
//! One component per screen, plus the pieces the FAQ screen is built from.

mod about_page;
mod chat_page;
mod delete_confirm_button;
mod faq_dialog;
mod faq_page;
mod login_page;
mod not_found;
mod section_links;
mod toast_stack;
mod translation_page;

pub use about_page::AboutPage;
pub use chat_page::ChatPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use faq_dialog::FaqDialog;
pub use faq_page::FaqPage;
pub use login_page::LoginPage;
pub use not_found::NotFound;
pub use section_links::SectionLinks;
pub use toast_stack::ToastStack;
pub use translation_page::TranslationPage;
