pub mod page_params;
