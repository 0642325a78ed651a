mod benefits;
mod common;
