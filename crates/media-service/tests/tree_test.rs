//! End-to-end tests for building and navigating media trees.

use serde_json::json;

use media_entity::folder::{FolderRecord, MediaPath, TreeNode};
use media_entity::image::{ImageRecord, sort_images_by_id};
use media_service::folder::locate::{locate, try_locate};
use media_service::{TreeService, build_tree, build_tree_with_report};

fn folders(value: serde_json::Value) -> Vec<FolderRecord> {
    serde_json::from_value(value).expect("valid folder fixture")
}

fn images(value: serde_json::Value) -> Vec<ImageRecord> {
    serde_json::from_value(value).expect("valid image fixture")
}

fn item_ids(node: &TreeNode) -> Vec<i64> {
    node.items.iter().map(|i| i.id).collect()
}

/// Every path in the tree that holds the given image id.
fn paths_holding(tree: &TreeNode, id: i64) -> Vec<String> {
    fn walk(node: &TreeNode, path: MediaPath, id: i64, out: &mut Vec<String>) {
        if node.contains_item(id) {
            out.push(path.to_string());
        }
        for (name, child) in &node.children {
            walk(child, path.join(name.as_str()), id, out);
        }
    }
    let mut out = Vec::new();
    walk(tree.root().expect("root"), MediaPath::root(), id, &mut out);
    out
}

fn catalogue() -> (Vec<ImageRecord>, Vec<FolderRecord>) {
    let f = folders(json!([
        {"id": 1, "name": "Movies", "parentId": null},
        {"id": 2, "name": "Posters", "parentId": 1},
        {"id": 3, "name": "Stills", "parentId": 1},
        {"id": 4, "name": "2024", "parentId": 2},
        {"id": 5, "name": "Promotions"}
    ]));
    let i = images(json!([
        {"id": 10, "name": "dune.png", "size": 1200, "contentType": "image/png", "folderName": "2024", "url": "/i/10"},
        {"id": 11, "name": "logo.svg", "size": 300, "contentType": "image/svg+xml", "url": "/i/11"},
        {"id": 12, "name": "promo.jpg", "size": 800, "contentType": "image/jpeg", "folderName": "Promotions", "url": "/i/12"},
        {"id": 13, "name": "still.jpg", "size": 900, "contentType": "image/jpeg", "folderName": "Stills", "url": "/i/13"},
        {"id": 14, "name": "banner.png", "size": 700, "contentType": "image/png", "folderName": "root", "url": "/i/14"}
    ]));
    (i, f)
}

#[test]
fn test_root_always_exists() {
    let (i, f) = catalogue();
    assert!(build_tree(&[], &[]).root().is_some());
    assert!(build_tree(&i, &f).root().is_some());
    assert!(build_tree(&i, &[]).root().is_some());
}

#[test]
fn test_top_level_folders_are_root_children() {
    let (_, f) = catalogue();
    let tree = build_tree(&[], &f);
    let root = tree.root().unwrap();

    for folder in f.iter().filter(|f| f.parent_id.is_none()) {
        assert!(root.child(&folder.name).is_some(), "{} missing", folder.name);
    }
    assert_eq!(root.child_names(), vec!["Movies", "Promotions"]);
}

#[test]
fn test_nested_folders_follow_parent_chain() {
    let (_, f) = catalogue();
    let tree = build_tree(&[], &f);

    assert!(try_locate(&tree, &MediaPath::parse("Movies/Posters/2024")).is_some());
    assert!(try_locate(&tree, &MediaPath::parse("Movies/Stills")).is_some());
    assert!(try_locate(&tree, &MediaPath::parse("Posters")).is_none());
}

#[test]
fn test_root_images_stay_in_root() {
    let (i, f) = catalogue();
    let tree = build_tree(&i, &f);

    assert_eq!(item_ids(tree.root().unwrap()), vec![11, 14]);
}

#[test]
fn test_each_image_appears_exactly_once_at_its_path() {
    let (i, f) = catalogue();
    let tree = build_tree(&i, &f);

    assert_eq!(paths_holding(&tree, 10), vec!["root/Movies/Posters/2024"]);
    assert_eq!(paths_holding(&tree, 12), vec!["root/Promotions"]);
    assert_eq!(paths_holding(&tree, 13), vec!["root/Movies/Stills"]);
    assert_eq!(tree.root().unwrap().total_item_count(), i.len());
}

#[test]
fn test_rebuild_is_deterministic() {
    let (i, f) = catalogue();
    let first = build_tree(&i, &f);
    let mut second = build_tree(&i, &f);
    assert_eq!(first, second);

    // The built tree owns its images; editing it leaves inputs untouched.
    second.root_mut().items.clear();
    assert_eq!(i.len(), 5);
    assert_ne!(first, second);
    assert_eq!(first, build_tree(&i, &f));
}

#[test]
fn test_locating_missing_path_returns_empty_node() {
    let (i, f) = catalogue();
    let tree = build_tree(&i, &f);
    let node = locate(&tree, &MediaPath::parse("root/Movies/Deleted/Deeper"));

    assert!(node.children.is_empty());
    assert!(node.items.is_empty());
}

#[test]
fn test_single_poster_scenario() {
    let f = folders(json!([{"id": 1, "name": "Posters", "parentId": null}]));
    let i = images(json!([{"id": 10, "name": "a.png", "folderName": "Posters"}]));
    let tree = build_tree(&i, &f);

    let node = locate(&tree, &MediaPath::from_segments(["root", "Posters"]));
    assert_eq!(item_ids(&node), vec![10]);
}

#[test]
fn test_nested_scenario() {
    let f = folders(json!([
        {"id": 1, "name": "A", "parentId": null},
        {"id": 2, "name": "B", "parentId": 1}
    ]));
    let i = images(json!([{"id": 10, "folderName": "B"}]));
    let tree = build_tree(&i, &f);
    let root = tree.root().unwrap();

    let b = root.child("A").and_then(|a| a.child("B")).unwrap();
    assert_eq!(item_ids(b), vec![10]);
    assert!(root.child("B").is_none());
}

#[test]
fn test_ghost_folder_scenario() {
    let i = images(json!([{"id": 10, "folderName": "GhostFolder"}]));
    let build = build_tree_with_report(&i, &[]);

    assert_eq!(paths_holding(&build.tree, 10), vec!["root/GhostFolder"]);
    assert_eq!(build.report.orphaned_images, vec![10]);
}

#[test]
fn test_cycle_places_images_consistently() {
    let f = folders(json!([
        {"id": 1, "name": "A", "parentId": 2},
        {"id": 2, "name": "B", "parentId": 1}
    ]));
    let i = images(json!([
        {"id": 1, "folderName": "A"},
        {"id": 2, "folderName": "B"}
    ]));
    let build = build_tree_with_report(&i, &f);

    assert_eq!(paths_holding(&build.tree, 1), vec!["root/A"]);
    assert_eq!(paths_holding(&build.tree, 2), vec!["root/A/B"]);
    assert_eq!(build.tree.root().unwrap().child_names(), vec!["A"]);
    assert_eq!(build.report.broken_cycles, vec!["A".to_string()]);
}

#[test]
fn test_dangling_parent_keeps_subtree() {
    let f = folders(json!([
        {"id": 2, "name": "Orphan", "parentId": 99},
        {"id": 3, "name": "Kid", "parentId": 2}
    ]));
    let i = images(json!([{"id": 7, "folderName": "Kid"}]));
    let tree = build_tree(&i, &f);

    assert_eq!(paths_holding(&tree, 7), vec!["root/Orphan/Kid"]);
}

#[test]
fn test_service_capacity_and_ids() {
    let f = folders(json!([{"id": 1, "name": "Posters"}, {"id": 2, "name": "Empty"}]));
    let mut i: Vec<ImageRecord> = (0..10)
        .rev()
        .map(|id| ImageRecord::new(id, Some("Posters")))
        .collect();
    sort_images_by_id(&mut i);

    let service = TreeService::default();
    let tree = service.build(&i, &f);
    let posters = MediaPath::parse("Posters");

    assert!(service.is_full(&tree, &posters));
    assert!(!service.is_full(&tree, &MediaPath::parse("Empty")));
    assert!(service.validate_target(&tree, &posters, 1).is_err());
    assert!(service.validate_move(&tree, &MediaPath::parse("Empty"), &[1, 2]).is_ok());
    assert_eq!(item_ids(&service.locate(&tree, &posters))[0], 0);
    assert_eq!(service.folder_ids(&f).get("Empty"), Some(&2));
    assert_eq!(service.resolve_path(&f, "Posters").to_string(), "root/Posters");
}

#[test]
fn test_folder_names_are_matched_exactly() {
    let f = folders(json!([
        {"id": 1, "name": " Posters ", "parentId": null},
        {"id": 2, "name": "Kid", "parentId": 1},
        {"id": 3, "name": "   ", "parentId": null},
        {"id": 4, "name": "Under", "parentId": 3}
    ]));
    let i = images(json!([
        {"id": 10, "folderName": " Posters "},
        {"id": 11, "folderName": "Kid"},
        {"id": 12, "folderName": "Under"}
    ]));
    let build = build_tree_with_report(&i, &f);
    let tree = &build.tree;

    assert!(build.report.is_clean());
    assert_eq!(tree.root().unwrap().child_names(), vec!["   ", " Posters "]);
    assert_eq!(paths_holding(tree, 10), vec!["root/ Posters "]);
    assert_eq!(paths_holding(tree, 11), vec!["root/ Posters /Kid"]);
    assert_eq!(paths_holding(tree, 12), vec!["root/   /Under"]);

    let posters = locate(tree, &MediaPath::from_segments(["root", " Posters "]));
    assert_eq!(item_ids(&posters), vec![10]);
    let kid = locate(tree, &MediaPath::from_segments(["root", " Posters ", "Kid"]));
    assert_eq!(item_ids(&kid), vec![11]);
    assert!(try_locate(tree, &MediaPath::from_segments(["Posters"])).is_none());
}
