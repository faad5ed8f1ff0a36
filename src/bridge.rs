// Bridge Pattern - Decoupled Abstraction and Implementation Hierarchies
// The abstraction holds its implementation by composition, so either
// hierarchy can grow without touching the other.

// ============================================================================
// Implementation hierarchy
// ============================================================================

/// Platform-specific side of the bridge. Implementors are stateless and
/// return a fixed descriptive string.
trait Implementation {
    fn operation_implementation(&self) -> String;
}

struct ConcreteImplementationA;

impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.".to_string()
    }
}

struct ConcreteImplementationB;

impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.".to_string()
    }
}

// ============================================================================
// Abstraction hierarchy
// ============================================================================

/// Control side of the bridge. Each variant owns an implementation and
/// delegates the real work to it, contributing only its own prefix.
trait Abstraction {
    fn operation(&self) -> String;
}

struct BaseAbstraction {
    implementation: Box<dyn Implementation>,
}

impl BaseAbstraction {
    fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for BaseAbstraction {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

/// Extends the abstraction without changing any implementation.
struct ExtendedAbstraction {
    implementation: Box<dyn Implementation>,
}

impl ExtendedAbstraction {
    fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for ExtendedAbstraction {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

// Client code depends on the abstraction interface only, so it supports
// any abstraction-implementation combination.
fn client_code(abstraction: &dyn Abstraction) {
    println!("{}", abstraction.operation());
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Bridge Pattern");
    println!("==============\n");

    println!("=== Base abstraction on platform A ===");
    let abstraction = BaseAbstraction::new(Box::new(ConcreteImplementationA));
    client_code(&abstraction);
    println!();

    println!("=== Extended abstraction on platform B ===");
    let abstraction = ExtendedAbstraction::new(Box::new(ConcreteImplementationB));
    client_code(&abstraction);
}
