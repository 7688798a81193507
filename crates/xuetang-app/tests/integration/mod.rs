mod app_specific;
mod helpers;
mod schedule;
