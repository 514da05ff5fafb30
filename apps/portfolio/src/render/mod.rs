//! Server-side HTML rendering. Renderers are pure functions of the loaded
//! records; every piece of record text is escaped on the way out.

pub mod about;
pub mod chrome;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod html;
pub mod page;
pub mod projects;
pub mod seo;
pub mod skills;

pub use page::{render_page, PageOptions};
