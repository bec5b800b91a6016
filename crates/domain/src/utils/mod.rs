//! Pure string utilities shared by search and validation.

pub mod text;
