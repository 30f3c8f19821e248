//! Image processing and input handling.

mod input;
mod single;

pub use input::{
    batch_output_path, determine_output_path, expand_inputs, output_file_name,
};
pub use single::process_single_image;
