mod nav_link;
mod note_card;
mod task_row;

pub use nav_link::NavLink;
pub use note_card::NoteCard;
pub use task_row::TaskRow;
