pub mod dialog;
pub mod panic_hook;
