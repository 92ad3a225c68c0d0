mod commands;
mod common;
