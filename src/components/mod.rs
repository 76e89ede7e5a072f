//! UI Components
//!
//! Reusable Leptos components.

mod about;
mod contact;
mod contact_form;
mod cursor;
mod dashboard;
mod experience;
mod footer;
mod header;
mod hero;
mod icons;
mod login;
mod progress_bar;
mod projects;
mod update_project;

pub use about::About;
pub use contact::Contact;
pub use contact_form::ContactForm;
pub use cursor::CustomCursor;
pub use dashboard::{Dashboard, MultiSelectDropdown};
pub use experience::Experience;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::{
    ChevronDownIcon, ChevronLeftIcon, ChevronRightIcon, CloseIcon, GithubIcon, InstagramIcon,
    LinkedinIcon, MenuIcon, ShareIcon,
};
pub use login::Login;
pub use progress_bar::ProgressBar;
pub use projects::Projects;
pub use update_project::UpdateProject;
