pub mod floating_note;
pub mod notes_sidebar;
pub mod quick_capture;
pub mod ui;

pub use floating_note::FloatingNoteWindow;
pub use notes_sidebar::NotesSidebar;
pub use quick_capture::QuickCapture;
