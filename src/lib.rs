#![doc = include_str!("../README.md")]

extern crate alloc;

mod config;
mod creation_output;
mod document;
mod element;
mod element_name;
mod error;
mod identity;
mod invalid_name;
mod metrics;
mod render;

pub use self::{
    config::*,
    creation_output::CreationOutput,
    document::Document,
    element::Element,
    element_name::{ElementName, NameGrammar},
    error::Error,
    identity::{DocumentId, ElementId},
    invalid_name::{InvalidName, InvalidNameReason},
    metrics::Metrics,
    render::{RenderFormat, RenderOptions, render_creation},
};
