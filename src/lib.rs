//! Firm Site - a single-page law-firm marketing site
//!
//! This crate loads the firm's content document, binds it into the page's
//! presentation slots, drives the page's navigation, menu and overlay
//! state, and validates the contact form.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
