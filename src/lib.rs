// Classic Design Patterns Catalog
// This crate demonstrates four classic object-oriented patterns in Rust.

pub mod examples {
    //! # Classic Design Patterns in Rust
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Bridge
    //! - Abstraction hierarchy decoupled from implementation hierarchy
    //!   (trait objects, composition over inheritance)
    //!
    //! ## Composite
    //! - Part-whole tree with uniform Leaf/Composite interface
    //!   (`Rc<dyn Component>`, `Weak` parent pointers)
    //!
    //! ## Factory Method
    //! - Creator trait with a default algorithm over an overridable
    //!   creation step (trait objects, provided methods)
    //!
    //! ## Singleton
    //! - Naive lazy holder (single-threaded, `Rc` + `RefCell`)
    //! - Thread-safe lazy holder (`Mutex`-guarded check-then-create)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin bridge
    //! cargo run --bin composite
    //! cargo run --bin factory_method
    //! cargo run --bin singleton
    //! ```
}
