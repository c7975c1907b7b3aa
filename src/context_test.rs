use super::*;

#[test]
fn header_lookup_is_case_insensitive() {
    let req = IncomingRequest::new("GET", "/").with_header("Cookie", "T");
    assert_eq!(req.header("cookie"), Some("T"));
    assert_eq!(req.header("COOKIE"), Some("T"));
    assert_eq!(req.headers.keys().collect::<Vec<_>>(), vec!["cookie"]);
}

#[test]
fn default_context_is_client_side_and_empty() {
    let ctx = RequestContext::default();
    assert!(!ctx.is_server());
    assert_eq!(ctx.header("cookie"), None);
    assert!(ctx.app_tree.is_none());
}

#[test]
fn new_context_mirrors_pathname_into_as_path() {
    let ctx = RequestContext::new("/pokemon").with_as_path("/pokemon?page=2");
    assert_eq!(ctx.pathname, "/pokemon");
    assert_eq!(ctx.as_path, "/pokemon?page=2");
}

#[test]
fn app_tree_renders_through_callback() {
    let ctx = RequestContext::new("/").with_app_tree(AppTree::new(|| "<div></div>".to_owned()));
    let tree = ctx.app_tree.as_ref().expect("app tree");
    assert_eq!(tree.render(), "<div></div>");
    assert_eq!(format!("{tree:?}"), "AppTree(..)");
}
