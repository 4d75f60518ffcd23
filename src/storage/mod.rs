//! Storage implementations for the widget service

pub mod in_memory;

pub use in_memory::InMemoryWidgetService;
