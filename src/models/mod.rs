pub mod day_record;
pub mod day_summary;
pub mod event_kind;
pub mod timeline;
pub mod work_status;
pub mod work_type;
