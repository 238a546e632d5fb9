mod demo;
mod embed;

pub use demo::DemoPage;
pub use embed::EmbedPage;
