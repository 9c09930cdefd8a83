mod success_banner;
mod toggle;

pub use success_banner::SuccessBanner;
pub use toggle::Toggle;
