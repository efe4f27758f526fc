pub mod classify;
pub mod keywords;
pub mod run;
