pub mod category;
pub mod work;
