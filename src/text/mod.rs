mod tag_name;

pub use tag_name::{is_name_char, is_name_start_char, is_xml_name, sanitize_tag_name};
