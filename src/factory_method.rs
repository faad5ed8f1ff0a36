// Factory Method Pattern - Creation Deferred to Implementors
// The creator's algorithm is a provided trait method; only the
// construction step varies per concrete creator.

// ============================================================================
// Product hierarchy
// ============================================================================

trait Product {
    fn operation(&self) -> String;
}

struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "Result of the ConcreteProduct1".to_string()
    }
}

struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "Result of the ConcreteProduct2".to_string()
    }
}

// ============================================================================
// Creator hierarchy
// ============================================================================

/// Declares the factory method and the fixed algorithm built on top of
/// it. Each call constructs a fresh product.
trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

// Works with any creator through the base interface.
fn client_code(creator: &dyn Creator) {
    println!(
        "Client: I'm not aware of the creator's class, but it still works.\n{}",
        creator.some_operation()
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator1_embeds_product1() {
        assert_eq!(
            ConcreteCreator1.some_operation(),
            "Creator: The same creator's code has just worked with \
             Result of the ConcreteProduct1"
        );
    }

    #[test]
    fn test_creator2_embeds_product2() {
        assert_eq!(
            ConcreteCreator2.some_operation(),
            "Creator: The same creator's code has just worked with \
             Result of the ConcreteProduct2"
        );
    }

    #[test]
    fn test_mapping_is_stable_across_calls_and_interleaving() {
        let creators: Vec<(Box<dyn Creator>, &str)> = vec![
            (Box::new(ConcreteCreator1), "ConcreteProduct1"),
            (Box::new(ConcreteCreator2), "ConcreteProduct2"),
            (Box::new(ConcreteCreator1), "ConcreteProduct1"),
        ];

        for _ in 0..3 {
            for (creator, expected) in &creators {
                assert!(creator.some_operation().contains(expected));
            }
        }
    }

    #[test]
    fn test_factory_method_product_literal() {
        assert_eq!(
            ConcreteCreator1.factory_method().operation(),
            "Result of the ConcreteProduct1"
        );
        assert_eq!(
            ConcreteCreator2.factory_method().operation(),
            "Result of the ConcreteProduct2"
        );
    }
}

fn main() {
    println!("Factory Method Pattern");
    println!("======================\n");

    println!("=== App: Launched with the ConcreteCreator1 ===");
    client_code(&ConcreteCreator1);
    println!();

    println!("=== App: Launched with the ConcreteCreator2 ===");
    client_code(&ConcreteCreator2);
}
