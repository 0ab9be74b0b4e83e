pub mod note;

pub use note::{CreateNoteInput, CreateNoteRequest, Note, UpdateNoteInput, UpdateNoteRequest};
