pub mod user_record;
