pub mod create;
pub mod image;
pub mod list;
pub mod navigate;
pub mod remove;

pub use create::{create_dir_command, create_file_command};
pub use image::save_image_command;
pub use list::list_command;
pub use navigate::{cd_command, pwd_command};
pub use remove::{remove_dir_command, remove_file_command};
