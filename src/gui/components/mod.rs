// src/gui/components/mod.rs
pub mod company_panel;
