pub mod blynk;
pub mod cache;
