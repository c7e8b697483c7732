//! Custom widget components

mod case_status;
mod chat;
mod eligibility;
mod footer;
mod header;
mod home;
pub mod modal_overlay;
mod njdg;
mod tele_law;
pub mod wrap;

pub use case_status::CaseStatusPage;
pub use chat::{transcript_lines, ChatView};
pub use eligibility::EligibilityPage;
pub use footer::Footer;
pub use header::MainHeader;
pub use home::HomePage;
pub use modal_overlay::{ConfirmQuitDialog, NoticeDialog};
pub use njdg::NjdgPage;
pub use tele_law::TeleLawPage;
