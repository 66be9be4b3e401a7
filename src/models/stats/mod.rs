pub mod db_stats;
