pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod text_input;

pub use layout::{create_standard_layout, split_top};
pub use list_navigation::ListStateExt;
pub use path::{
    get_config_dir, get_config_path, get_data_dir, get_home_dir, get_log_dir, get_log_path,
};
pub use text_input::TextInput;
