// Composite Pattern - Uniform Part-Whole Tree
// Leaves and containers share one trait, so clients can treat a single
// node and a whole subtree identically. Parent links are non-owning
// (Weak) so parent and child never form an ownership cycle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum TreeError {
    #[error("component is not a child of this composite")]
    NotFound,
}

// ============================================================================
// Component interface
// ============================================================================

/// Common interface for every node in the composition. Child management
/// is declared here with inert defaults, so a `Leaf` has the capability
/// but silently ignores it.
trait Component {
    fn operation(&self) -> String;

    fn is_composite(&self) -> bool {
        false
    }

    fn add(self: Rc<Self>, _child: Rc<dyn Component>) {}

    fn remove(self: Rc<Self>, _child: &Rc<dyn Component>) -> Result<(), TreeError> {
        Ok(())
    }

    /// Upgrades to the current container, or `None` if detached or never
    /// attached.
    fn parent(&self) -> Option<Rc<Composite>>;

    fn set_parent(&self, parent: Option<Weak<Composite>>);
}

/// Identity comparison: same allocation, independent of structural
/// equality. Two separately created leaves never compare equal here.
fn same_component(a: &Rc<dyn Component>, b: &Rc<dyn Component>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

// ============================================================================
// Leaf
// ============================================================================

struct Leaf {
    parent: RefCell<Option<Weak<Composite>>>,
}

impl Leaf {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            parent: RefCell::new(None),
        })
    }
}

impl Component for Leaf {
    fn operation(&self) -> String {
        "Leaf".to_string()
    }

    fn parent(&self) -> Option<Rc<Composite>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn set_parent(&self, parent: Option<Weak<Composite>>) {
        *self.parent.borrow_mut() = parent;
    }
}

// ============================================================================
// Composite
// ============================================================================

struct Composite {
    children: RefCell<Vec<Rc<dyn Component>>>,
    parent: RefCell<Option<Weak<Composite>>>,
}

impl Composite {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(None),
        })
    }
}

impl Component for Composite {
    /// Renders children in insertion order, joined with `+` and wrapped
    /// in `Branch(...)`. Recursion is finite because trees are acyclic.
    fn operation(&self) -> String {
        let rendered: Vec<String> = self
            .children
            .borrow()
            .iter()
            .map(|child| child.operation())
            .collect();
        format!("Branch({})", rendered.join("+"))
    }

    fn is_composite(&self) -> bool {
        true
    }

    fn add(self: Rc<Self>, child: Rc<dyn Component>) {
        child.set_parent(Some(Rc::downgrade(&self)));
        self.children.borrow_mut().push(child);
    }

    /// Removes the first child that is identity-equal to `child` and
    /// clears its parent link. Value-identical siblings are untouched.
    fn remove(self: Rc<Self>, child: &Rc<dyn Component>) -> Result<(), TreeError> {
        let mut children = self.children.borrow_mut();
        let index = children
            .iter()
            .position(|existing| same_component(existing, child))
            .ok_or(TreeError::NotFound)?;
        let detached = children.remove(index);
        detached.set_parent(None);
        Ok(())
    }

    fn parent(&self) -> Option<Rc<Composite>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn set_parent(&self, parent: Option<Weak<Composite>>) {
        *self.parent.borrow_mut() = parent;
    }
}

// ============================================================================
// Client code
// ============================================================================

fn client_code(component: &dyn Component) {
    println!("RESULT: {}", component.operation());
}

// Manages the tree without inspecting concrete node types.
fn client_code2(component1: &Rc<dyn Component>, component2: &Rc<dyn Component>) {
    if component1.is_composite() {
        component1.clone().add(component2.clone());
    }
    println!("RESULT: {}", component1.operation());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_operation() {
        let leaf = Leaf::new();
        assert_eq!(leaf.operation(), "Leaf");
        assert!(!leaf.is_composite());
    }

    #[test]
    fn test_empty_composite() {
        let composite = Composite::new();
        assert!(composite.is_composite());
        assert_eq!(composite.operation(), "Branch()");
    }

    #[test]
    fn test_two_level_tree_renders_in_insertion_order() {
        let root = Composite::new();
        let branch = Composite::new();
        let leaf1: Rc<dyn Component> = Leaf::new();
        let leaf2: Rc<dyn Component> = Leaf::new();
        let leaf3: Rc<dyn Component> = Leaf::new();

        root.clone().add(branch.clone());
        branch.clone().add(leaf1);
        branch.clone().add(leaf2);
        root.clone().add(leaf3);

        assert_eq!(root.operation(), "Branch(Branch(Leaf+Leaf)+Leaf)");
    }

    #[test]
    fn test_add_sets_parent() {
        let root = Composite::new();
        let branch = Composite::new();
        let leaf: Rc<dyn Component> = Leaf::new();

        root.clone().add(branch.clone());
        branch.clone().add(leaf.clone());

        assert!(Rc::ptr_eq(&branch.parent().unwrap(), &root));
        assert!(Rc::ptr_eq(&leaf.parent().unwrap(), &branch));
    }

    #[test]
    fn test_remove_detaches_child() {
        let root = Composite::new();
        let leaf: Rc<dyn Component> = Leaf::new();

        root.clone().add(leaf.clone());
        root.clone().remove(&leaf).unwrap();

        assert!(leaf.parent().is_none());
        assert_eq!(root.operation(), "Branch()");
    }

    #[test]
    fn test_remove_absent_child_is_not_found() {
        let root = Composite::new();
        let leaf: Rc<dyn Component> = Leaf::new();

        assert_eq!(root.clone().remove(&leaf), Err(TreeError::NotFound));

        root.clone().add(leaf.clone());
        root.clone().remove(&leaf).unwrap();
        assert_eq!(root.clone().remove(&leaf), Err(TreeError::NotFound));
    }

    #[test]
    fn test_remove_is_by_identity_not_value() {
        let root = Composite::new();
        let twin_a: Rc<dyn Component> = Leaf::new();
        let twin_b: Rc<dyn Component> = Leaf::new();

        root.clone().add(twin_a.clone());
        root.clone().add(twin_b.clone());
        root.clone().remove(&twin_b).unwrap();

        // The structurally identical sibling stays attached.
        assert_eq!(root.operation(), "Branch(Leaf)");
        assert!(twin_a.parent().is_some());
        assert!(twin_b.parent().is_none());
    }

    #[test]
    fn test_reattach_updates_parent() {
        let first = Composite::new();
        let second = Composite::new();
        let leaf: Rc<dyn Component> = Leaf::new();

        first.clone().add(leaf.clone());
        first.clone().remove(&leaf).unwrap();
        second.clone().add(leaf.clone());

        assert!(Rc::ptr_eq(&leaf.parent().unwrap(), &second));
        assert_eq!(first.operation(), "Branch()");
        assert_eq!(second.operation(), "Branch(Leaf)");
    }

    #[test]
    fn test_leaf_child_management_is_inert() {
        let leaf = Leaf::new();
        let other: Rc<dyn Component> = Leaf::new();

        leaf.clone().add(other.clone());
        assert_eq!(leaf.clone().remove(&other), Ok(()));
        assert_eq!(leaf.operation(), "Leaf");
        assert!(other.parent().is_none());
    }

    #[test]
    fn test_parent_of_dropped_container_is_none() {
        let leaf: Rc<dyn Component> = Leaf::new();
        {
            let root = Composite::new();
            root.clone().add(leaf.clone());
            assert!(leaf.parent().is_some());
        }
        // The parent link is non-owning, so it cannot keep the
        // container alive.
        assert!(leaf.parent().is_none());
    }
}

fn main() {
    println!("Composite Pattern");
    println!("=================\n");

    println!("=== A simple component ===");
    let simple: Rc<dyn Component> = Leaf::new();
    println!("Client: I get a simple component:");
    client_code(simple.as_ref());
    println!();

    println!("=== A composite tree ===");
    let tree = Composite::new();
    let branch1 = Composite::new();
    branch1.clone().add(Leaf::new());
    branch1.clone().add(Leaf::new());
    let branch2 = Composite::new();
    branch2.clone().add(Leaf::new());
    tree.clone().add(branch1);
    tree.clone().add(branch2);
    println!("Client: Now I've got a composite tree:");
    client_code(tree.as_ref());
    println!();

    println!("=== Managing the tree uniformly ===");
    println!("Client: I don't need to check the component classes even when managing the tree:");
    let tree_component: Rc<dyn Component> = tree;
    client_code2(&tree_component, &simple);
    println!();

    println!("=== Detaching a child ===");
    match tree_component.clone().remove(&simple) {
        Ok(()) => println!("Client: the simple component is detached again."),
        Err(e) => println!("Client: removal failed: {}", e),
    }
    match tree_component.clone().remove(&simple) {
        Ok(()) => println!("Client: detached twice?!"),
        Err(e) => println!("Client: removing it a second time fails: {}", e),
    }
    client_code(tree_component.as_ref());
}
