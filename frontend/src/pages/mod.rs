pub mod content;
pub mod forms;
pub mod landing;
