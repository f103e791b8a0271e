mod book;
mod cover;
mod redirect_toast;
mod spread;

pub use book::PhotoBook;
pub use cover::BookCover;
pub use redirect_toast::RedirectToast;
pub use spread::PageSpread;
