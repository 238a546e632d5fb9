mod embed_widget;

pub use embed_widget::EmbedWidget;
