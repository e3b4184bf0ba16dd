// Mon Oct 19 2026 - Alex

use crate::document::{Composition, GroupKind, Layer, Leaf, Project, PropertyTree};

/// Composition "Main" holding layer 1 "Box" with `Transform > <leaf>`.
pub fn single_leaf(three_d: bool, leaf: Leaf) -> Composition {
    let name = leaf
        .match_name
        .strip_prefix("ADBE ")
        .unwrap_or(&leaf.match_name)
        .to_string();

    let mut tree = PropertyTree::new("Box");
    let transform = tree.add_group(tree.root(), "Transform", GroupKind::Named).unwrap();
    tree.add_leaf(transform, &name, leaf).unwrap();

    let mut comp = Composition::new("Main", 10.0);
    comp.push_layer(Layer::new("Box", 1).with_three_d(three_d).with_properties(tree));
    comp
}

/// Two compositions with a mix of clean and faulting expressions.
pub fn project() -> Project {
    let mut project = Project::new("24.1").with_active("Main");

    let mut main = single_leaf(
        true,
        Leaf::new("ADBE Scale")
            .with_expression("s = thisComp.layer(\"Null\").scale;\n[s[0], s[1]]")
            .with_fault("Expression result must be of dimension 3, not 2"),
    );

    let mut tree = PropertyTree::new("Title");
    let transform = tree.add_group(tree.root(), "Transform", GroupKind::Named).unwrap();
    tree.add_leaf(
        transform,
        "Opacity",
        Leaf::new("ADBE Opacity").with_expression("thisComp.layer(\"Box\").transform.opacity"),
    )
    .unwrap();
    tree.add_leaf(
        transform,
        "Position",
        Leaf::new("ADBE Position").with_expression("thisComp.layer('Ctrl').position + thisComp.layer('Anchor')"),
    )
    .unwrap();
    main.push_layer(Layer::new("Title", 0).with_properties(tree));
    project.add_composition(main);

    let mut tree = PropertyTree::new("Background");
    let effects = tree.add_group(tree.root(), "Effects", GroupKind::Indexed).unwrap();
    let blur = tree.add_group(effects, "Gaussian Blur", GroupKind::Named).unwrap();
    tree.add_leaf(
        blur,
        "Blurriness",
        Leaf::new("ADBE Gaussian Blur 2-0001")
            .with_expression("wiggle(2, blur)")
            .with_fault("ReferenceError: blur is not defined"),
    )
    .unwrap();
    let mut titles = Composition::new("Titles", 4.0);
    titles.push_layer(Layer::new("Background", 0).with_properties(tree));
    project.add_composition(titles);

    project
}
