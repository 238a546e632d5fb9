//! Shared UI components

pub mod checkbox;
pub mod config_panel;
pub mod event_log;
pub mod icons;
pub mod modal;
pub mod page_header;
pub mod preview;
pub mod segmented_control;
pub mod select;
pub mod text_input;

pub use checkbox::Checkbox;
pub use config_panel::{ConfigPanelView, FieldControl, PanelSection};
pub use event_log::EventLogView;
pub use icons::{GitHubIcon, XIcon};
pub use modal::ModalView;
pub use page_header::PageHeader;
pub use preview::{PreviewPlaceholder, PreviewToolbar};
pub use segmented_control::{Segment, SegmentedControl};
pub use select::Select;
pub use text_input::{TextInput, TextInputSize};
