//! UI Components

mod footer;
mod new_todo_input;
mod todo_list;
mod todo_row;

pub use footer::Footer;
pub use new_todo_input::NewTodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
