pub mod load_list;
pub mod number_field;
pub mod result_card;
