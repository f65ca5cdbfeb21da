// Reusable UI widgets

pub mod banner;
pub mod detail;
pub mod select_list;
pub mod text_field;

pub use banner::Banner;
pub use detail::DetailPanel;
pub use select_list::{ListOutcome, SelectList, SelectOption};
pub use text_field::{FieldOutcome, TextField};
