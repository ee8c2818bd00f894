pub mod declarations;
pub mod employee;
pub mod number_text;
