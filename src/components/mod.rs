pub mod page_shell;
pub mod review_entry;
pub mod review_form;
pub mod reviews_list;
