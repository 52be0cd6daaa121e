//! Dioxus front end for the weather service admin widget.
//!
//! This crate provides:
//! - `dom_bridge`: `DomForm`, the `web_sys` backed form surface for server markup
//! - `state`: AppState with the controller and transport in Dioxus Signals
//! - `dispatch`: event handler glue that sends intents and applies responses
//! - `components`: the widget's RSX components

pub mod components;
pub mod dispatch;
pub mod dom_bridge;
pub mod state;
