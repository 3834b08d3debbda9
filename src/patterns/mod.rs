//! One module per pattern. Modules do not depend on each other; each one
//! exposes its types plus a `demo` that returns the lines the vignette prints.

pub mod abstract_factory;
pub mod adapter;
pub mod builder;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod factory_method;
pub mod interpreter;
pub mod iterator;
pub mod observer;
pub mod proxy;
pub mod singleton;
pub mod strategy;
pub mod template_method;
