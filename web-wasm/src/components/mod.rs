pub mod document_detail;
pub mod document_form;
pub mod document_list;
pub mod gallery;
pub mod header;
